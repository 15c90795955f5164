use crate::animation::tween::Tween;
use crate::foundation::core::SlideTransform;
use crate::transition::scheduler::{TransitionDone, TransitionRequest, TransitionScheduler};

/// Upper bound on steps taken by [`TweenEngine::run_until_idle`].
const MAX_IDLE_STEPS: usize = 100_000;

#[derive(Clone, Debug)]
struct ActiveTween {
    request: TransitionRequest,
    tween: Tween<SlideTransform>,
    started_at: f64,
}

/// In-memory, frame-stepped transition engine.
///
/// Holds the current visual placement of every slide and advances active tweens when the
/// caller moves time forward with [`TweenEngine::advance`]. Scheduling a slide that is already
/// animating retargets it from its present visual value; the replaced request still completes
/// (on the next `advance`), so every request yields exactly one [`TransitionDone`].
#[derive(Clone, Debug, Default)]
pub struct TweenEngine {
    clock: f64,
    visual: Vec<SlideTransform>,
    active: Vec<ActiveTween>,
    pending: Vec<TransitionDone>,
}

impl TweenEngine {
    /// Create an engine with `initial` placements applied immediately.
    pub fn new(initial: Vec<SlideTransform>) -> Self {
        Self {
            clock: 0.0,
            visual: initial,
            active: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Seconds advanced so far.
    pub fn now(&self) -> f64 {
        self.clock
    }

    /// Current visual placement of every slide.
    pub fn visual(&self) -> &[SlideTransform] {
        &self.visual
    }

    /// Number of requests still waiting for their completion.
    pub fn in_flight(&self) -> usize {
        self.active.len() + self.pending.len()
    }

    /// Return `true` when no completion is outstanding.
    pub fn is_idle(&self) -> bool {
        self.in_flight() == 0
    }

    /// Overwrite placements without animating (mount-time layout).
    pub fn set_immediate(&mut self, placements: &[SlideTransform]) {
        self.visual.clear();
        self.visual.extend_from_slice(placements);
    }

    /// Move time forward by `dt` seconds and apply tweens.
    ///
    /// Returns completions in scheduling order: retargeted requests first, then tweens that
    /// reached their end during this step. Negative or non-finite `dt` counts as zero.
    pub fn advance(&mut self, dt: f64) -> Vec<TransitionDone> {
        if dt.is_finite() && dt > 0.0 {
            self.clock += dt;
        }

        let mut done = std::mem::take(&mut self.pending);
        let clock = self.clock;
        let visual = &mut self.visual;
        self.active.retain(|a| {
            let elapsed = clock - a.started_at;
            let slide = a.request.slide();
            if let Some(v) = visual.get_mut(slide) {
                *v = a.tween.sample(elapsed);
            }
            if a.tween.is_finished(elapsed) {
                done.push(TransitionDone {
                    ticket: a.request.ticket,
                });
                false
            } else {
                true
            }
        });

        if !done.is_empty() {
            tracing::trace!(count = done.len(), clock, "transitions completed");
        }
        done
    }

    /// Advance in `step`-second increments until every request has completed.
    pub fn run_until_idle(&mut self, step: f64) -> Vec<TransitionDone> {
        let step = if step.is_finite() && step > 0.0 {
            step
        } else {
            1.0 / 60.0
        };
        let mut out = Vec::new();
        for _ in 0..MAX_IDLE_STEPS {
            if self.is_idle() {
                break;
            }
            out.extend(self.advance(step));
        }
        out
    }
}

impl TransitionScheduler for TweenEngine {
    fn schedule(&mut self, request: TransitionRequest) {
        let slide = request.slide();
        if slide >= self.visual.len() {
            self.visual.resize(slide + 1, request.target);
        }

        if let Some(pos) = self.active.iter().position(|a| a.request.slide() == slide) {
            let replaced = self.active.remove(pos);
            let elapsed = self.clock - replaced.started_at;
            self.visual[slide] = replaced.tween.sample(elapsed);
            self.pending.push(TransitionDone {
                ticket: replaced.request.ticket,
            });
        }

        let tween = Tween {
            from: self.visual[slide],
            to: request.target,
            duration_secs: request.duration_secs.max(0.0),
            ease: request.ease,
        };
        tracing::trace!(slide, ticket = ?request.ticket, "transition scheduled");
        self.active.push(ActiveTween {
            request,
            tween,
            started_at: self.clock,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/engine.rs"]
mod tests;
