//! showreel is a headless engine for a portfolio carousel.
//!
//! It owns the logic a marketing site's carousel needs and leaves drawing to whatever renders
//! the page:
//!
//! 1. **Position**: `offset -> SlideTransform` (scale, x offset, opacity, stacking layer)
//! 2. **Control**: a guarded `Idle`/`Transitioning` state machine that drops intents while a
//!    move is in flight
//! 3. **Schedule**: moves are handed to an injected [`TransitionScheduler`]; [`TweenEngine`]
//!    is the in-memory implementation
//! 4. **Route**: slide titles slug into `/proyectos/<slug>` detail routes
//!
//! Around the carousel sit a shared [`ViewportProvider`] (mobile/desktop classification) and
//! the scroll-linked [`reveal`] driver.
//!
//! The design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: positioning and routing are pure; the engine is stepped explicitly.
//! - **No stored callbacks**: completions and viewport changes travel as typed messages.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod carousel;
mod content;
mod foundation;
mod transition;

/// Scroll-linked reveals: trigger positions, crossings, scrubbing, parallax and pinning.
pub mod reveal;
/// Site routes and slug-based detail resolution.
pub mod routing;
pub mod viewport;

pub use animation::ease::Ease;
pub use animation::tween::{Lerp, Tween};
pub use carousel::config::CarouselConfig;
pub use carousel::controller::{CarouselController, Controls, GoTo, Ignored, Phase};
pub use carousel::position::{
    PositionProfile, SIDE_OPACITY, compute_transform, compute_transform_with, layout,
};
pub use carousel::session::{CarouselSession, Intent, Outcome};
pub use content::model::{Catalog, Slide};
pub use content::slug::{find_collision, slugify};
pub use foundation::core::{
    Affine, DEFAULT_BREAKPOINT, LAYER_CENTER, LAYER_HIDDEN, LAYER_SIDE, SlideTransform,
    Vec2, ViewportClass,
};
pub use foundation::error::{ShowreelError, ShowreelResult};
pub use routing::{ClickTarget, DetailView, Route, resolve_detail};
pub use transition::engine::TweenEngine;
pub use transition::scheduler::{
    TransitionDone, TransitionRequest, TransitionScheduler, TransitionTicket,
};
pub use viewport::{Subscription, SubscriptionId, ViewportChange, ViewportProvider};
