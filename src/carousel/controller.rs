//! Carousel controller: owns the current index and the animation guard, and sequences slide
//! moves through an injected [`TransitionScheduler`].

use crate::carousel::config::CarouselConfig;
use crate::carousel::position::layout;
use crate::foundation::core::{SlideTransform, ViewportClass};
use crate::transition::engine::TweenEngine;
use crate::transition::scheduler::{
    TransitionDone, TransitionRequest, TransitionScheduler, TransitionTicket,
};

/// Controller phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Accepting navigation intents.
    Idle,
    /// A move is in flight; `center` is the ticket whose completion ends it.
    Transitioning {
        /// Ticket of the slide that becomes centered.
        center: TransitionTicket,
    },
}

/// Why a navigation intent was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ignored {
    /// A move is still in flight.
    Animating,
    /// The target is already centered.
    AlreadyCurrent,
    /// The target is outside `[0, len)`.
    OutOfRange,
}

/// Outcome of a navigation intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoTo {
    /// The move was accepted and transitions were scheduled.
    Started {
        /// Index centered before the move.
        from: usize,
        /// Index centered after the move.
        to: usize,
    },
    /// Nothing changed and nothing was scheduled.
    Ignored(Ignored),
}

impl GoTo {
    /// Return `true` for [`GoTo::Started`].
    pub fn is_started(self) -> bool {
        matches!(self, Self::Started { .. })
    }
}

/// Enabled state of the navigation controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Controls {
    /// Previous-slide button.
    pub prev_enabled: bool,
    /// Next-slide button.
    pub next_enabled: bool,
    /// Dot indicators.
    pub dots_enabled: bool,
}

/// State machine for a fixed-length carousel.
#[derive(Debug)]
pub struct CarouselController<S> {
    len: usize,
    current: usize,
    phase: Phase,
    class: ViewportClass,
    config: CarouselConfig,
    generation: u64,
    transforms: Vec<SlideTransform>,
    scheduler: S,
}

impl<S: TransitionScheduler> CarouselController<S> {
    /// Mount a carousel of `len` slides centered on slide 0.
    ///
    /// Mount placements are not scheduled; apply [`CarouselController::transforms`] to the
    /// renderer directly.
    pub fn new(len: usize, class: ViewportClass, config: CarouselConfig, scheduler: S) -> Self {
        let transforms = layout(len, 0, &config.profile(class));
        Self {
            len,
            current: 0,
            phase: Phase::Idle,
            class,
            config,
            generation: 0,
            transforms,
            scheduler,
        }
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return `true` for a carousel with no slides.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the centered slide.
    ///
    /// Updated as soon as a move is accepted, before the visual transition finishes.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Return `true` while a move is in flight.
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    /// Viewport class used by the next move.
    pub fn viewport_class(&self) -> ViewportClass {
        self.class
    }

    /// Active configuration.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Placements most recently committed for every slide.
    pub fn transforms(&self) -> &[SlideTransform] {
        &self.transforms
    }

    /// Placements for the mount state: slide 0 centered, using the current viewport class.
    ///
    /// Renderers apply these immediately; no request is scheduled for them.
    pub fn initial_layout(&self) -> Vec<SlideTransform> {
        layout(self.len, 0, &self.config.profile(self.class))
    }

    /// Shared access to the scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Exclusive access to the scheduler, e.g. to step an engine.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Enabled state of prev/next/dot controls.
    pub fn controls(&self) -> Controls {
        let idle = !self.is_animating();
        Controls {
            prev_enabled: idle && self.current > 0,
            next_enabled: idle && self.current + 1 < self.len,
            dots_enabled: idle && self.len > 0,
        }
    }

    /// Change the viewport class used by subsequent moves.
    ///
    /// Never schedules anything and never touches the current index.
    pub fn set_viewport_class(&mut self, class: ViewportClass) {
        if self.class != class {
            tracing::debug!(?class, "viewport class changed");
            self.class = class;
        }
    }

    /// Center slide `target`.
    #[tracing::instrument(level = "debug", skip(self), fields(current = self.current))]
    pub fn go_to(&mut self, target: usize) -> GoTo {
        if self.is_animating() {
            return self.ignore(Ignored::Animating);
        }
        if target >= self.len {
            return self.ignore(Ignored::OutOfRange);
        }
        if target == self.current {
            return self.ignore(Ignored::AlreadyCurrent);
        }

        self.generation += 1;
        let generation = self.generation;
        let profile = self.config.profile(self.class);
        self.transforms = layout(self.len, target, &profile);

        for (slide, target_transform) in self.transforms.iter().enumerate() {
            self.scheduler.schedule(TransitionRequest {
                ticket: TransitionTicket { generation, slide },
                target: *target_transform,
                duration_secs: self.config.duration_secs,
                ease: self.config.ease,
            });
        }

        let from = self.current;
        self.current = target;
        self.phase = Phase::Transitioning {
            center: TransitionTicket {
                generation,
                slide: target,
            },
        };
        tracing::debug!(from, to = target, generation, "carousel move started");
        GoTo::Started { from, to: target }
    }

    /// Center the slide after the current one.
    pub fn next(&mut self) -> GoTo {
        match self.current.checked_add(1) {
            Some(target) => self.go_to(target),
            None => self.ignore(Ignored::OutOfRange),
        }
    }

    /// Center the slide before the current one.
    pub fn prev(&mut self) -> GoTo {
        if self.is_animating() {
            return self.ignore(Ignored::Animating);
        }
        match self.current.checked_sub(1) {
            Some(target) => self.go_to(target),
            None => self.ignore(Ignored::OutOfRange),
        }
    }

    /// Feed a completion back from the scheduler.
    ///
    /// Returns `true` when this completion ended the in-flight move. Completions for other
    /// slides or older moves are ignored.
    pub fn on_transition_done(&mut self, done: TransitionDone) -> bool {
        match self.phase {
            Phase::Transitioning { center } if center == done.ticket => {
                self.phase = Phase::Idle;
                tracing::debug!(index = self.current, "carousel move finished");
                true
            }
            _ => false,
        }
    }

    fn ignore(&self, reason: Ignored) -> GoTo {
        tracing::debug!(?reason, current = self.current, "navigation intent ignored");
        GoTo::Ignored(reason)
    }
}

impl CarouselController<TweenEngine> {
    /// Mount a carousel driven by an in-memory [`TweenEngine`].
    pub fn with_engine(len: usize, class: ViewportClass, config: CarouselConfig) -> Self {
        let initial = layout(len, 0, &config.profile(class));
        Self::new(len, class, config, TweenEngine::new(initial))
    }

    /// Step the engine by `dt` seconds and route its completions back into the controller.
    pub fn advance(&mut self, dt: f64) -> Vec<TransitionDone> {
        let done = self.scheduler.advance(dt);
        for d in &done {
            self.on_transition_done(*d);
        }
        done
    }

    /// Step the engine until it has nothing in flight.
    pub fn settle(&mut self, step: f64) -> Vec<TransitionDone> {
        let done = self.scheduler.run_until_idle(step);
        for d in &done {
            self.on_transition_done(*d);
        }
        done
    }

    /// Placements currently shown by the engine.
    pub fn visual(&self) -> &[SlideTransform] {
        self.scheduler.visual()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/controller.rs"]
mod tests;
