//! Scroll trigger positions and their resolution to absolute scroll offsets.
//!
//! A position such as `"top 80%"` reads "when the element's top meets the point 80% down the
//! viewport". End positions may also be relative to the start (`"+=600"`).

use crate::foundation::error::{ShowreelError, ShowreelResult};

/// A point along a box's vertical extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    /// The box's top.
    Top,
    /// The box's vertical middle.
    Center,
    /// The box's bottom.
    Bottom,
    /// A percentage of the box's height, from the top.
    Percent(f64),
    /// A pixel distance from the top.
    Pixels(f64),
}

impl Edge {
    /// Distance from the top of a box of height `extent`.
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => extent / 2.0,
            Self::Bottom => extent,
            Self::Percent(p) => extent * p / 100.0,
            Self::Pixels(px) => px,
        }
    }

    fn parse(token: &str) -> ShowreelResult<Self> {
        let t = token.trim().to_ascii_lowercase();
        let parsed = match t.as_str() {
            "top" => Self::Top,
            "center" => Self::Center,
            "bottom" => Self::Bottom,
            _ => {
                if let Some(p) = t.strip_suffix('%') {
                    Self::Percent(parse_number(p, token)?)
                } else if let Some(px) = t.strip_suffix("px") {
                    Self::Pixels(parse_number(px, token)?)
                } else {
                    Self::Pixels(parse_number(&t, token)?)
                }
            }
        };
        Ok(parsed)
    }
}

fn parse_number(s: &str, original: &str) -> ShowreelResult<f64> {
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|_| ShowreelError::validation(format!("invalid trigger edge '{original}'")))?;
    if !v.is_finite() {
        return Err(ShowreelError::validation(format!(
            "trigger edge must be finite: '{original}'"
        )));
    }
    Ok(v)
}

/// Where a trigger starts or ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriggerPosition {
    /// Fires when `element` on the element meets `viewport` on the viewport.
    Anchor {
        /// Point on the element.
        element: Edge,
        /// Point on the viewport.
        viewport: Edge,
    },
    /// A scroll distance after the start (end positions only).
    Relative(f64),
}

impl TriggerPosition {
    /// Parse `"<element-edge> <viewport-edge>"` or `"+=<px>"` / `"-=<px>"`.
    ///
    /// A single edge token anchors both the element and the viewport at that edge.
    pub fn parse(s: &str) -> ShowreelResult<Self> {
        let t = s.trim();
        if let Some(rest) = t.strip_prefix("+=") {
            return Ok(Self::Relative(parse_number(rest, s)?));
        }
        if let Some(rest) = t.strip_prefix("-=") {
            return Ok(Self::Relative(-parse_number(rest, s)?));
        }

        let mut parts = t.split_whitespace();
        let (Some(a), b, None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ShowreelError::validation(format!(
                "trigger position must be '<element> <viewport>', got '{s}'"
            )));
        };
        let element = Edge::parse(a)?;
        let viewport = match b {
            Some(b) => Edge::parse(b)?,
            None => element,
        };
        Ok(Self::Anchor { element, viewport })
    }
}

impl std::str::FromStr for TriggerPosition {
    type Err = ShowreelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Geometry needed to resolve trigger positions, in document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Element top relative to the document.
    pub element_top: f64,
    /// Element height.
    pub element_height: f64,
    /// Viewport height.
    pub viewport_height: f64,
}

impl Layout {
    fn scroll_for(&self, element: Edge, viewport: Edge) -> f64 {
        self.element_top + element.resolve(self.element_height)
            - viewport.resolve(self.viewport_height)
    }
}

/// Absolute scroll offsets `[start, end]` between which a trigger is active.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    /// Scroll offset where the trigger starts.
    pub start: f64,
    /// Scroll offset where the trigger ends.
    pub end: f64,
}

impl ScrollRange {
    /// Length of the range; never negative.
    pub fn len(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    /// Return `true` for a zero-length range.
    pub fn is_empty(&self) -> bool {
        self.len() == 0.0
    }

    /// Normalized progress of `scroll` through the range.
    ///
    /// An empty range is a step at `start`.
    pub fn progress(&self, scroll: f64) -> f64 {
        let len = self.len();
        if len == 0.0 {
            return if scroll >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll - self.start) / len).clamp(0.0, 1.0)
    }

    /// Return `true` when `scroll` lies inside `[start, end]`.
    pub fn contains(&self, scroll: f64) -> bool {
        self.start <= scroll && scroll <= self.end.max(self.start)
    }
}

/// A start/end pair of trigger positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTrigger {
    /// Start position; must be an anchor.
    pub start: TriggerPosition,
    /// End position; an anchor or a distance after the start.
    pub end: TriggerPosition,
}

impl Default for ScrollTrigger {
    /// Active from the element entering at the bottom to leaving at the top.
    fn default() -> Self {
        Self {
            start: TriggerPosition::Anchor {
                element: Edge::Top,
                viewport: Edge::Bottom,
            },
            end: TriggerPosition::Anchor {
                element: Edge::Bottom,
                viewport: Edge::Top,
            },
        }
    }
}

impl ScrollTrigger {
    /// Parse both positions.
    pub fn parse(start: &str, end: &str) -> ShowreelResult<Self> {
        Ok(Self {
            start: TriggerPosition::parse(start)?,
            end: TriggerPosition::parse(end)?,
        })
    }

    /// Resolve to absolute scroll offsets for `layout`.
    pub fn range(&self, layout: &Layout) -> ShowreelResult<ScrollRange> {
        let start = match self.start {
            TriggerPosition::Anchor { element, viewport } => layout.scroll_for(element, viewport),
            TriggerPosition::Relative(_) => {
                return Err(ShowreelError::validation(
                    "trigger start cannot be relative",
                ));
            }
        };
        let end = match self.end {
            TriggerPosition::Anchor { element, viewport } => layout.scroll_for(element, viewport),
            TriggerPosition::Relative(d) => start + d,
        };
        Ok(ScrollRange { start, end })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/trigger.rs"]
mod tests;
