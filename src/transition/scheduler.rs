use crate::animation::ease::Ease;
use crate::foundation::core::SlideTransform;

/// Identifies one scheduled transition.
///
/// `generation` increases with every accepted carousel move, so completions from an older move
/// can be told apart from the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionTicket {
    /// Carousel move this transition belongs to.
    pub generation: u64,
    /// Slide index being animated.
    pub slide: usize,
}

/// A request to animate one slide to `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionRequest {
    /// Ticket echoed back in the matching [`TransitionDone`].
    pub ticket: TransitionTicket,
    /// Target placement.
    pub target: SlideTransform,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Ease applied over the duration.
    pub ease: Ease,
}

impl TransitionRequest {
    /// Slide index being animated.
    pub fn slide(&self) -> usize {
        self.ticket.slide
    }
}

/// Completion message for a previously scheduled request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransitionDone {
    /// Ticket of the completed request.
    pub ticket: TransitionTicket,
}

/// Capability that performs scheduled visual transitions.
///
/// Implementations must deliver exactly one [`TransitionDone`] per scheduled request, never from
/// inside [`TransitionScheduler::schedule`] itself, and only after the target placement has been
/// applied. Completions are handed back to the carousel by whoever drives the event loop.
pub trait TransitionScheduler {
    /// Start animating `request.slide()` toward `request.target`.
    fn schedule(&mut self, request: TransitionRequest);
}

impl<S: TransitionScheduler + ?Sized> TransitionScheduler for &mut S {
    fn schedule(&mut self, request: TransitionRequest) {
        (**self).schedule(request)
    }
}

impl<S: TransitionScheduler + ?Sized> TransitionScheduler for Box<S> {
    fn schedule(&mut self, request: TransitionRequest) {
        (**self).schedule(request)
    }
}
