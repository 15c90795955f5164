use crate::carousel::config::CarouselConfig;
use crate::carousel::controller::{CarouselController, GoTo};
use crate::content::model::{Catalog, Slide};
use crate::routing::{ClickTarget, Route, click_navigation};
use crate::transition::engine::TweenEngine;
use crate::transition::scheduler::{TransitionDone, TransitionScheduler};
use crate::viewport::{Subscription, ViewportProvider};

/// A user gesture on the mounted carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Next-slide arrow.
    Next,
    /// Previous-slide arrow.
    Prev,
    /// Dot indicator for a slide index.
    Dot(usize),
    /// Click on a slide.
    Click {
        /// Slide that was clicked.
        index: usize,
        /// Region of the slide that received the click.
        target: ClickTarget,
    },
}

/// What handling an [`Intent`] produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A navigation intent was accepted or ignored by the controller.
    Move(GoTo),
    /// The router should open this route.
    Navigate(Route),
    /// The gesture had no effect.
    Nothing,
}

/// A mounted carousel: content, controller and its viewport subscription.
#[derive(Debug)]
pub struct CarouselSession<S> {
    catalog: Catalog,
    controller: CarouselController<S>,
    viewport: Subscription,
}

impl<S: TransitionScheduler> CarouselSession<S> {
    /// Mount over `catalog`, subscribing to `viewport` for class changes.
    pub fn mount(
        catalog: Catalog,
        config: CarouselConfig,
        viewport: &mut ViewportProvider,
        scheduler: S,
    ) -> Self {
        let controller = CarouselController::new(catalog.len(), viewport.class(), config, scheduler);
        Self {
            catalog,
            controller,
            viewport: viewport.subscribe(),
        }
    }

    /// Mounted content.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Underlying controller.
    pub fn controller(&self) -> &CarouselController<S> {
        &self.controller
    }

    /// Underlying controller, mutably.
    pub fn controller_mut(&mut self) -> &mut CarouselController<S> {
        &mut self.controller
    }

    /// Slide currently centered, `None` for an empty catalog.
    pub fn current_slide(&self) -> Option<&Slide> {
        self.catalog.get(self.controller.current_index())
    }

    /// Apply pending viewport changes to the controller.
    pub fn sync_viewport(&mut self) {
        if let Some(change) = self.viewport.latest() {
            self.controller.set_viewport_class(change.class);
        }
    }

    /// Handle one gesture.
    pub fn handle(&mut self, intent: Intent) -> Outcome {
        self.sync_viewport();
        match intent {
            Intent::Next => Outcome::Move(self.controller.next()),
            Intent::Prev => Outcome::Move(self.controller.prev()),
            Intent::Dot(index) => Outcome::Move(self.controller.go_to(index)),
            Intent::Click { index, target } => {
                match click_navigation(&self.catalog, index, target) {
                    Some(route) => Outcome::Navigate(route),
                    None => Outcome::Nothing,
                }
            }
        }
    }

    /// Forward a scheduler completion to the controller.
    pub fn on_transition_done(&mut self, done: TransitionDone) -> bool {
        self.controller.on_transition_done(done)
    }

    /// Unmount, releasing the viewport subscription.
    pub fn unmount(self, viewport: &mut ViewportProvider) -> Catalog {
        viewport.unsubscribe(self.viewport.id());
        self.catalog
    }
}

impl CarouselSession<TweenEngine> {
    /// Mount with an in-memory [`TweenEngine`] seeded with the mount layout.
    pub fn mount_with_engine(
        catalog: Catalog,
        config: CarouselConfig,
        viewport: &mut ViewportProvider,
    ) -> Self {
        let mut session = Self::mount(catalog, config, viewport, TweenEngine::default());
        let initial = session.controller.initial_layout();
        session.controller.scheduler_mut().set_immediate(&initial);
        session
    }

    /// Step the engine by `dt` seconds.
    pub fn advance(&mut self, dt: f64) -> Vec<TransitionDone> {
        self.controller.advance(dt)
    }

    /// Step the engine until nothing is in flight.
    pub fn settle(&mut self, step: f64) -> Vec<TransitionDone> {
        self.controller.settle(step)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/session.rs"]
mod tests;
