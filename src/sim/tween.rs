//! Time-boxed interpolation
//!
//! A `Tween` blends from `start` to `end` over `duration` seconds. It owns no
//! reference to what it animates: the caller applies each yielded value, so
//! dropping a tween half way is always safe.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::normalize_degrees;

/// Values a tween can blend
pub trait Lerp: Copy {
    /// Value at fraction `t` in [0, 1] between `self` and `end`
    fn lerp_to(self, end: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp_to(self, end: Self, t: f32) -> Self {
        self + (end - self) * t
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp_to(self, end: Self, t: f32) -> Self {
        self.lerp(end, t)
    }
}

/// A rotation in degrees. Blends along the shorter arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angle(pub f32);

impl Angle {
    /// Signed rotation from `self` to `end` along the shorter arc, in (-180, 180]
    #[inline]
    pub fn delta_to(self, end: Angle) -> f32 {
        normalize_degrees(end.0 - self.0)
    }
}

impl Lerp for Angle {
    #[inline]
    fn lerp_to(self, end: Self, t: f32) -> Self {
        Angle(self.0 + self.delta_to(end) * t)
    }
}

/// Result of advancing a timed sequence by one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step<T> {
    /// Still in flight; apply this value
    Running(T),
    /// Finished; apply this final value and drop the sequence
    Done(T),
}

impl<T: Copy> Step<T> {
    pub fn value(&self) -> T {
        match *self {
            Step::Running(v) | Step::Done(v) => v,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done(_))
    }
}

/// Linear (or shortest-arc) blend over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tween<T> {
    pub start: T,
    pub end: T,
    pub duration: f32,
    pub elapsed: f32,
}

impl<T: Lerp> Tween<T> {
    pub fn new(start: T, end: T, duration: f32) -> Self {
        Self {
            start,
            end,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    /// Value at the current elapsed time (start before any tick)
    pub fn value(&self) -> T {
        if self.is_finished() {
            self.end
        } else {
            self.start.lerp_to(self.end, self.elapsed / self.duration)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt` seconds. Yields exactly `end` once elapsed >= duration.
    pub fn advance(&mut self, dt: f32) -> Step<T> {
        self.elapsed += dt.max(0.0);
        if self.is_finished() {
            Step::Done(self.end)
        } else {
            Step::Running(self.value())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let mut tween = Tween::new(0.0_f32, 10.0, 1.0);
        assert_eq!(tween.value(), 0.0);
        assert_eq!(tween.advance(0.25), Step::Running(2.5));
        assert_eq!(tween.advance(0.25), Step::Running(5.0));
        assert_eq!(tween.advance(1.0), Step::Done(10.0));
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut tween = Tween::new(Vec2::ZERO, Vec2::new(3.0, 4.0), 0.0);
        assert!(tween.is_finished());
        assert_eq!(tween.advance(0.0), Step::Done(Vec2::new(3.0, 4.0)));
    }

    #[test]
    fn test_angle_takes_short_arc() {
        // 170 -> -170 is 20 degrees through 180, not 340 through 0
        let mut tween = Tween::new(Angle(170.0), Angle(-170.0), 1.0);
        let mid = tween.advance(0.5).value();
        assert!((normalize_degrees(mid.0) - 180.0).abs() < 1e-4);
        assert_eq!(tween.advance(0.5), Step::Done(Angle(-170.0)));
    }

    #[test]
    fn test_stick_fall_rotation() {
        let mut tween = Tween::new(Angle(0.0), Angle(-90.0), 0.4);
        let step = tween.advance(0.2);
        assert!((step.value().0 + 45.0).abs() < 1e-4);
        assert_eq!(tween.advance(0.2), Step::Done(Angle(-90.0)));
    }

    #[test]
    fn test_negative_dt_is_ignored() {
        let mut tween = Tween::new(0.0_f32, 1.0, 1.0);
        tween.advance(-5.0);
        assert_eq!(tween.elapsed, 0.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn linear_never_overshoots(
                start in -100.0f32..100.0,
                end in -100.0f32..100.0,
                duration in 0.01f32..5.0,
                dts in proptest::collection::vec(0.0f32..0.5, 1..64),
            ) {
                let mut tween = Tween::new(start, end, duration);
                prop_assert_eq!(tween.value(), start);
                let (lo, hi) = (start.min(end), start.max(end));
                for dt in dts {
                    let step = tween.advance(dt);
                    let v = step.value();
                    prop_assert!(v >= lo - 1e-3 && v <= hi + 1e-3);
                    if step.is_done() {
                        prop_assert_eq!(v, end);
                        break;
                    }
                }
                tween.advance(duration);
                prop_assert_eq!(tween.value(), end);
            }

            #[test]
            fn angular_arc_is_at_most_half_turn(
                start in -720.0f32..720.0,
                end in -720.0f32..720.0,
                t in 0.0f32..1.0,
            ) {
                let a = Angle(start);
                let b = Angle(end);
                prop_assert!(a.delta_to(b).abs() <= 180.0 + 1e-3);
                let v = a.lerp_to(b, t);
                prop_assert!((v.0 - start).abs() <= 180.0 + 1e-3);
            }
        }
    }
}
