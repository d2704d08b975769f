//! Alpha tween for overlay effects.
//!
//! [`AlphaTween`] interpolates a scalar alpha value over time using an
//! [`Easing`] curve. The camera's fade effects acquire one from the
//! overlay pool, advance it once per frame, and fire its completion
//! callback exactly once when it reaches the end.

use std::fmt;

/// Callback fired when an effect finishes.
///
/// Boxed and `Send + Sync` because the owning camera lives in the ECS
/// world as a resource.
pub type EffectCallback = Box<dyn FnOnce() + Send + Sync + 'static>;

/// Easing functions for smooth interpolation.
///
/// These functions transform a linear `t` value (0.0 to 1.0) to create
/// different acceleration/deceleration curves.
#[derive(Copy, Clone, Debug)]
pub enum Easing {
    /// Constant speed (no easing).
    Linear,
    /// Starts slow, accelerates (quadratic).
    QuadIn,
    /// Starts fast, decelerates (quadratic).
    QuadOut,
    /// Slow start and end (quadratic).
    QuadInOut,
    /// Starts slow, accelerates (cubic).
    CubicIn,
    /// Starts fast, decelerates (cubic).
    CubicOut,
    /// Slow start and end (cubic).
    CubicInOut,
}

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve.
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadIn => t * t,
        Easing::QuadOut => t * (2.0 - t),
        Easing::QuadInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                -1.0 + (4.0 - 2.0 * t) * t
            }
        }
        Easing::CubicIn => t * t * t,
        Easing::CubicOut => {
            let p = t - 1.0;
            p * p * p + 1.0
        }
        Easing::CubicInOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                let p = 2.0 * t - 2.0;
                0.5 * p * p * p + 1.0
            }
        }
    }
}

/// One-shot scalar tween from `from` to `to` over `duration` seconds.
///
/// The tween stops exactly on `to` when its time runs out; sampling past
/// the end keeps returning the terminal value.
pub struct AlphaTween {
    /// Starting value.
    pub from: f32,
    /// Ending value.
    pub to: f32,
    /// Duration in seconds.
    pub duration: f32,
    /// Easing function to use.
    pub easing: Easing,
    /// Current time within the tween.
    pub time: f32,
    /// Whether the tween is currently playing.
    pub playing: bool,
    /// Persistent tweens advance on the raw frame delta, so they keep
    /// running while the world clock is paused or scaled down.
    pub persistent: bool,
    on_complete: Option<EffectCallback>,
}

impl AlphaTween {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        AlphaTween {
            from,
            to,
            duration,
            easing: Easing::Linear,
            time: 0.0,
            playing: true,
            persistent: false,
            on_complete: None,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_on_complete(mut self, callback: EffectCallback) -> Self {
        self.on_complete = Some(callback);
        self
    }

    pub fn persistent(mut self) -> Self {
        self.persistent = true;
        self
    }

    /// Advance the tween by `dt` seconds and return the current value.
    ///
    /// The final step clamps time to `duration` so the terminal value is
    /// delivered exactly.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if self.playing {
            self.time += dt;
            if self.time >= self.duration {
                self.time = self.duration;
                self.playing = false;
            }
        }
        self.value()
    }

    /// Current interpolated value.
    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = ease(self.easing, self.time / self.duration);
        self.from + (self.to - self.from) * t
    }

    /// Whether the tween has delivered its terminal value.
    pub fn finished(&self) -> bool {
        !self.playing
    }

    /// Take the completion callback, leaving `None` behind.
    ///
    /// The caller fires it after observing [`finished`](Self::finished);
    /// taking it guarantees at-most-once delivery.
    pub fn take_on_complete(&mut self) -> Option<EffectCallback> {
        self.on_complete.take()
    }
}

impl fmt::Debug for AlphaTween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlphaTween")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("time", &self.time)
            .field("playing", &self.playing)
            .field("persistent", &self.persistent)
            .field("has_on_complete", &self.on_complete.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    // ==================== EASING FUNCTION TESTS ====================

    #[test]
    fn test_ease_all_types_at_endpoints() {
        let types = [
            Easing::Linear,
            Easing::QuadIn,
            Easing::QuadOut,
            Easing::QuadInOut,
            Easing::CubicIn,
            Easing::CubicOut,
            Easing::CubicInOut,
        ];
        for easing in types {
            assert!(
                approx_eq(ease(easing, 0.0), 0.0),
                "{:?} at t=0.0 should be 0.0",
                easing
            );
            assert!(
                approx_eq(ease(easing, 1.0), 1.0),
                "{:?} at t=1.0 should be 1.0",
                easing
            );
        }
    }

    #[test]
    fn test_ease_clamps_out_of_range_input() {
        let types = [
            Easing::Linear,
            Easing::QuadIn,
            Easing::QuadOut,
            Easing::QuadInOut,
            Easing::CubicIn,
            Easing::CubicOut,
            Easing::CubicInOut,
        ];
        for easing in types {
            assert!(approx_eq(ease(easing, -0.5), 0.0));
            assert!(approx_eq(ease(easing, 1.5), 1.0));
        }
    }

    #[test]
    fn test_ease_quad_midpoints() {
        assert!(approx_eq(ease(Easing::QuadIn, 0.5), 0.25));
        assert!(approx_eq(ease(Easing::QuadOut, 0.5), 0.75));
        assert!(approx_eq(ease(Easing::QuadInOut, 0.5), 0.5));
    }

    #[test]
    fn test_ease_cubic_midpoints() {
        assert!(approx_eq(ease(Easing::CubicIn, 0.5), 0.125));
        assert!(approx_eq(ease(Easing::CubicOut, 0.5), 0.875));
        assert!(approx_eq(ease(Easing::CubicInOut, 0.5), 0.5));
    }

    // ==================== ALPHA TWEEN TESTS ====================

    #[test]
    fn test_new_defaults() {
        let tw = AlphaTween::new(1.0, 0.0, 2.0);
        assert!(approx_eq(tw.from, 1.0));
        assert!(approx_eq(tw.to, 0.0));
        assert!(approx_eq(tw.duration, 2.0));
        assert!(matches!(tw.easing, Easing::Linear));
        assert!(tw.playing);
        assert!(!tw.persistent);
        assert!(!tw.finished());
    }

    #[test]
    fn test_advance_interpolates_linearly() {
        let mut tw = AlphaTween::new(0.0, 1.0, 2.0);
        assert!(approx_eq(tw.advance(0.5), 0.25));
        assert!(approx_eq(tw.advance(0.5), 0.5));
        assert!(approx_eq(tw.advance(1.0), 1.0));
        assert!(tw.finished());
    }

    #[test]
    fn test_advance_clamps_at_terminal_value() {
        let mut tw = AlphaTween::new(1.0, 0.0, 1.0);
        tw.advance(10.0);
        assert!(tw.finished());
        assert!(approx_eq(tw.value(), 0.0));
        // Sampling past the end stays at the terminal value.
        assert!(approx_eq(tw.advance(1.0), 0.0));
    }

    #[test]
    fn test_monotone_decrease_for_fade_out() {
        let mut tw = AlphaTween::new(1.0, 0.0, 1.0);
        let mut prev = tw.value();
        for _ in 0..20 {
            let v = tw.advance(0.05);
            assert!(v <= prev + EPSILON, "alpha should not increase");
            prev = v;
        }
        assert!(approx_eq(prev, 0.0));
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut tw = AlphaTween::new(0.0, 1.0, 0.0);
        assert!(approx_eq(tw.advance(0.0), 1.0));
        assert!(tw.finished());
    }

    #[test]
    fn test_on_complete_taken_once() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = Arc::clone(&fired);
        let mut tw = AlphaTween::new(0.0, 1.0, 1.0).with_on_complete(Box::new(move || {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        }));

        tw.advance(2.0);
        assert!(tw.finished());
        if let Some(cb) = tw.take_on_complete() {
            cb();
        }
        assert!(tw.take_on_complete().is_none());
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_builder_chaining() {
        let tw = AlphaTween::new(0.0, 1.0, 1.0)
            .with_easing(Easing::CubicOut)
            .persistent();
        assert!(matches!(tw.easing, Easing::CubicOut));
        assert!(tw.persistent);
    }
}
