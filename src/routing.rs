use crate::content::model::{Catalog, Slide};

/// Path of the portfolio listing; the detail fallback links back here.
pub const PORTFOLIO_PATH: &str = "/portfolio";
/// Path prefix of project detail pages.
pub const PROJECT_PREFIX: &str = "/proyectos/";

/// A parsed site path.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "route", content = "value", rename_all = "snake_case")]
pub enum Route {
    /// `/`
    Home,
    /// `/portfolio`
    Portfolio,
    /// `/proyectos/<slug>`
    Project(String),
    /// Anything else, kept verbatim.
    Unknown(String),
}

impl Route {
    /// Parse a request path. Query strings, fragments and trailing slashes are ignored.
    pub fn parse(path: &str) -> Self {
        let bare = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        match bare {
            "" => Self::Home,
            PORTFOLIO_PATH => Self::Portfolio,
            _ => match bare.strip_prefix(PROJECT_PREFIX) {
                Some(slug) if !slug.is_empty() && !slug.contains('/') => {
                    Self::Project(slug.to_owned())
                }
                _ => Self::Unknown(path.to_owned()),
            },
        }
    }

    /// Detail route of `slide`.
    pub fn for_slide(slide: &Slide) -> Self {
        Self::Project(slide.slug())
    }

    /// Canonical path of this route.
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Portfolio => PORTFOLIO_PATH.to_owned(),
            Self::Project(slug) => format!("{PROJECT_PREFIX}{slug}"),
            Self::Unknown(p) => p.clone(),
        }
    }
}

/// Outcome of resolving a project detail route.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum DetailView<'a> {
    /// The slug matched a slide.
    Found {
        /// Position of the slide in the catalog.
        index: usize,
        /// The matched slide.
        slide: &'a Slide,
    },
    /// No slide has this slug; render the fallback with a link back to the listing.
    NotFound {
        /// The requested slug.
        slug: String,
        /// Where the fallback links to.
        back_link: &'static str,
    },
}

/// Look up the detail view for `slug`.
pub fn resolve_detail<'a>(catalog: &'a Catalog, slug: &str) -> DetailView<'a> {
    match catalog
        .slides()
        .iter()
        .enumerate()
        .find(|(_, s)| s.slug() == slug)
    {
        Some((index, slide)) => DetailView::Found { index, slide },
        None => {
            tracing::debug!(slug, "no project for slug");
            DetailView::NotFound {
                slug: slug.to_owned(),
                back_link: PORTFOLIO_PATH,
            }
        }
    }
}

/// Where on a slide a click landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The slide body or its content area.
    Content,
    /// A navigation control drawn over the slide (arrow or dot).
    NavControl,
}

/// Navigation requested by clicking slide `index`, if any.
pub fn click_navigation(catalog: &Catalog, index: usize, target: ClickTarget) -> Option<Route> {
    match target {
        ClickTarget::NavControl => None,
        ClickTarget::Content => catalog.get(index).map(Route::for_slide),
    }
}

#[cfg(test)]
#[path = "../tests/unit/routing.rs"]
mod tests;
