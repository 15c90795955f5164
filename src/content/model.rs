use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::content::slug::{find_collision, slugify};
use crate::foundation::error::{ShowreelError, ShowreelResult};

const BUNDLED_PROJECTS: &str = include_str!("../../data/projects.json");

/// One portfolio item.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Slide {
    /// Stable identity.
    pub id: u32,
    /// Display title; also the source of the slide's slug.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Image URL or path.
    pub image: String,
    /// Optional category label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Optional client name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    /// Optional year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

impl Slide {
    /// Slug derived from the title.
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }
}

/// Ordered, validated, read-only sequence of slides.
///
/// Construction guarantees unique ids and unique, non-empty slugs, so slug lookups have at
/// most one match.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Catalog {
    slides: Vec<Slide>,
}

impl Catalog {
    /// Validate and wrap `slides`, keeping their order.
    pub fn new(slides: Vec<Slide>) -> ShowreelResult<Self> {
        let mut ids = HashSet::with_capacity(slides.len());
        for s in &slides {
            if !ids.insert(s.id) {
                return Err(ShowreelError::content(format!("duplicate slide id {}", s.id)));
            }
            if s.slug().is_empty() {
                return Err(ShowreelError::content(format!(
                    "slide {} has a title with no slug characters: '{}'",
                    s.id, s.title
                )));
            }
        }
        if let Some((a, b, slug)) = find_collision(slides.iter().map(|s| s.title.as_str())) {
            return Err(ShowreelError::content(format!(
                "slides '{}' and '{}' share slug '{slug}'",
                slides[a].title, slides[b].title
            )));
        }
        Ok(Self { slides })
    }

    /// Parse a JSON array of slides.
    pub fn from_reader<R: std::io::Read>(r: R) -> ShowreelResult<Self> {
        let slides: Vec<Slide> = serde_json::from_reader(r)
            .map_err(|e| ShowreelError::serde(format!("parse catalog JSON: {e}")))?;
        Self::new(slides)
    }

    /// Parse a JSON array of slides from a file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ShowreelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ShowreelError::content(format!("open catalog '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// The twelve portfolio projects shipped with the crate.
    pub fn bundled() -> ShowreelResult<Self> {
        Self::from_reader(BUNDLED_PROJECTS.as_bytes())
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Return `true` when there are no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slides in display order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Slide at `index`.
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Position of the slide with identity `id`.
    pub fn index_of(&self, id: u32) -> Option<usize> {
        self.slides.iter().position(|s| s.id == id)
    }

    /// Slide whose title slugs to `slug`.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Slide> {
        self.slides.iter().find(|s| s.slug() == slug)
    }
}

impl<'de> serde::Deserialize<'de> for Catalog {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let slides = Vec::<Slide>::deserialize(d)?;
        Self::new(slides).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/model.rs"]
mod tests;
