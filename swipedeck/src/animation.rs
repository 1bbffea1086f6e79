// Copyright 2025 the SwipeDeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card poses and the animations that move between them.
//!
//! ## Overview
//!
//! Animations are plain values owned by a card. They never run on their own: the host advances
//! them from its frame loop (see [`Deck::advance`](crate::deck::Deck::advance)), and completion is
//! reported from that call. Nothing here blocks or spawns.
//!
//! Two animations exist:
//! - spring-back, after a cancelled drag: every channel returns to [`Pose::REST`] on a damped
//!   spring;
//! - exit, after a commit: the card travels horizontally on an ease-in-ease-out curve while its
//!   rotation turns linearly to the final angle.

use core::f64::consts::E;
use core::time::Duration;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, CubicBez, ParamCurve, Point, Vec2};
use swipedeck_decision::types::Direction;

use crate::config::SwipeConfig;

/// Presentational state of a card relative to its rest position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pose {
    /// Translation from the rest position.
    pub offset: Vec2,
    /// Rotation in radians, applied before [`offset`](Self::offset).
    pub rotation: f64,
    /// Opacity of the like icon, in `[0, 1]`.
    pub like_opacity: f64,
    /// Opacity of the dislike icon, in `[0, 1]`.
    pub dislike_opacity: f64,
}

impl Pose {
    /// Untransformed card with both icons hidden.
    pub const REST: Self = Self {
        offset: Vec2::ZERO,
        rotation: 0.0,
        like_opacity: 0.0,
        dislike_opacity: 0.0,
    };

    /// Center-relative transform: `rotate(rotation) * translate(offset)`.
    pub fn transform(&self) -> Affine {
        Affine::rotate(self.rotation) * Affine::translate(self.offset)
    }

    /// Opacity of the icon for `direction`.
    pub fn opacity(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Like => self.like_opacity,
            Direction::Dislike => self.dislike_opacity,
        }
    }

    pub(crate) fn set_opacity(&mut self, direction: Direction, opacity: f64) {
        match direction {
            Direction::Like => self.like_opacity = opacity,
            Direction::Dislike => self.dislike_opacity = opacity,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

/// Timing curve mapping normalized time to animation progress.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Curve {
    /// Progress equals time.
    Linear,
    /// Cubic Bézier `(0.42, 0) (0.58, 1)`.
    EaseInOut,
    /// Damped spring that settles at the end of the animation.
    Spring {
        /// Damping ratio in `(0, 1]`; lower values overshoot more.
        damping: f64,
        /// Starting velocity, in animated distances per second.
        initial_velocity: f64,
    },
}

const EASE_IN_OUT: CubicBez = CubicBez {
    p0: Point::new(0.0, 0.0),
    p1: Point::new(0.42, 0.0),
    p2: Point::new(0.58, 1.0),
    p3: Point::new(1.0, 1.0),
};

const EASE_BISECTION_STEPS: usize = 32;

/// `ln(1000)`: the spring envelope decays to 0.1% by the end of the animation.
const SPRING_SETTLE: f64 = 6.907_755_278_982_137;

impl Curve {
    /// Progress at normalized time `t` of an animation lasting `duration`.
    ///
    /// Always `0.0` at `t <= 0` and exactly `1.0` at `t >= 1`. A spring may overshoot in between.
    pub fn progress(&self, t: f64, duration: Duration) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match *self {
            Self::Linear => t,
            Self::EaseInOut => ease_in_out(t),
            Self::Spring {
                damping,
                initial_velocity,
            } => spring(t, damping, initial_velocity * duration.as_secs_f64()),
        }
    }
}

fn ease_in_out(t: f64) -> f64 {
    // x(s) is monotonic on this curve.
    let (mut lo, mut hi) = (0.0, 1.0);
    for _ in 0..EASE_BISECTION_STEPS {
        let mid = 0.5 * (lo + hi);
        if EASE_IN_OUT.eval(mid).x < t {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    EASE_IN_OUT.eval(0.5 * (lo + hi)).y
}

/// Damped oscillator from 0 to 1 over normalized time; `velocity` is per normalized time.
fn spring(t: f64, damping: f64, velocity: f64) -> f64 {
    let omega = SPRING_SETTLE / damping;
    let remaining = if damping >= 1.0 {
        decay(omega * t) * (1.0 + (omega - velocity) * t)
    } else {
        let rate = damping * omega;
        let damped = omega * (1.0 - damping * damping).sqrt();
        let (sin, cos) = (damped * t).sin_cos();
        decay(rate * t) * (cos + (rate - velocity) / damped * sin)
    };
    1.0 - remaining
}

/// `e^-x`. Written with `powf` so it also resolves through Kurbo's libm float functions.
fn decay(x: f64) -> f64 {
    E.powf(-x)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum AnimationKind {
    SpringBack,
    Exit(Direction),
}

/// A running transition between two poses.
#[derive(Clone, Debug)]
pub(crate) struct Animation {
    kind: AnimationKind,
    from: Pose,
    to: Pose,
    duration: Duration,
    elapsed: Duration,
    motion: Curve,
    rotation: Curve,
}

impl Animation {
    /// Return every channel of `from` to rest.
    pub(crate) fn spring_back(from: Pose, config: &SwipeConfig) -> Self {
        let curve = Curve::Spring {
            damping: config.cancel_damping,
            initial_velocity: config.cancel_initial_velocity,
        };
        Self {
            kind: AnimationKind::SpringBack,
            from,
            to: Pose::REST,
            duration: config.cancel_duration,
            elapsed: Duration::ZERO,
            motion: curve,
            rotation: curve,
        }
    }

    /// Throw the card out towards `direction`. Vertical offset and opacities are kept.
    pub(crate) fn exit(from: Pose, direction: Direction, config: &SwipeConfig) -> Self {
        let sign = direction.sign();
        let to = Pose {
            offset: Vec2::new(sign * config.commit_translation, from.offset.y),
            rotation: sign * config.commit_rotation(),
            ..from
        };
        Self {
            kind: AnimationKind::Exit(direction),
            from,
            to,
            duration: config.commit_duration,
            elapsed: Duration::ZERO,
            motion: Curve::EaseInOut,
            rotation: Curve::Linear,
        }
    }

    pub(crate) fn kind(&self) -> AnimationKind {
        self.kind
    }

    pub(crate) fn target(&self) -> Pose {
        self.to
    }

    /// Step the clock and return the pose to present, plus whether the animation finished.
    pub(crate) fn advance(&mut self, dt: Duration) -> (Pose, bool) {
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.duration {
            return (self.to, true);
        }
        (self.sample(), false)
    }

    fn sample(&self) -> Pose {
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let m = self.motion.progress(t, self.duration);
        let r = self.rotation.progress(t, self.duration);
        Pose {
            offset: self.from.offset.lerp(self.to.offset, m),
            rotation: lerp(self.from.rotation, self.to.rotation, r),
            like_opacity: lerp(self.from.like_opacity, self.to.like_opacity, m).clamp(0.0, 1.0),
            dislike_opacity: lerp(self.from.dislike_opacity, self.to.dislike_opacity, m)
                .clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn curves_pin_endpoints() {
        let d = Duration::from_millis(750);
        for curve in [
            Curve::Linear,
            Curve::EaseInOut,
            Curve::Spring {
                damping: 0.6,
                initial_velocity: 0.1,
            },
            Curve::Spring {
                damping: 1.0,
                initial_velocity: 0.0,
            },
        ] {
            assert_eq!(curve.progress(0.0, d), 0.0, "{curve:?} at start");
            assert_eq!(curve.progress(-1.0, d), 0.0, "{curve:?} before start");
            assert_eq!(curve.progress(1.0, d), 1.0, "{curve:?} at end");
            assert_eq!(curve.progress(3.0, d), 1.0, "{curve:?} after end");
        }
    }

    #[test]
    fn ease_in_out_is_symmetric_and_monotonic() {
        let d = Duration::from_millis(500);
        assert!((Curve::EaseInOut.progress(0.5, d) - 0.5).abs() < 1e-6);
        let a = Curve::EaseInOut.progress(0.2, d);
        let b = Curve::EaseInOut.progress(0.8, d);
        assert!((a + b - 1.0).abs() < 1e-6);
        // Slow start: behind linear early on.
        assert!(a < 0.2);
        let mut prev = 0.0;
        for i in 1..=100 {
            let p = Curve::EaseInOut.progress(f64::from(i) / 100.0, d);
            assert!(p >= prev, "ease must not go backwards");
            prev = p;
        }
    }

    #[test]
    fn decay_tracks_exp() {
        for x in [0.0, 0.5, 1.0, 4.2, SPRING_SETTLE] {
            let expected = (-x).exp();
            assert!((decay(x) - expected).abs() <= 1e-12 * expected.max(1.0), "x = {x}");
        }
        assert!((decay(SPRING_SETTLE) - 1e-3).abs() < 1e-12);
    }

    #[test]
    fn underdamped_spring_overshoots_then_settles() {
        let d = Duration::from_millis(750);
        let curve = Curve::Spring {
            damping: 0.6,
            initial_velocity: 0.1,
        };
        let peak = (1..100)
            .map(|i| curve.progress(f64::from(i) / 100.0, d))
            .fold(0.0_f64, f64::max);
        assert!(peak > 1.0, "damping 0.6 overshoots, peak {peak}");
        assert!((curve.progress(0.99, d) - 1.0).abs() < 0.01);
    }

    #[test]
    fn spring_back_returns_to_rest() {
        let from = Pose {
            offset: Vec2::new(-50.0, 5.0),
            rotation: -0.04,
            like_opacity: 0.3,
            dislike_opacity: 0.5,
        };
        let mut anim = Animation::spring_back(from, &SwipeConfig::default());
        assert_eq!(anim.kind(), AnimationKind::SpringBack);
        let (mid, done) = anim.advance(100 * MS);
        assert!(!done);
        assert!((0.0..=1.0).contains(&mid.dislike_opacity));
        let (end, done) = anim.advance(650 * MS);
        assert!(done);
        assert_eq!(end, Pose::REST);
    }

    #[test]
    fn exit_moves_out_and_turns() {
        let config = SwipeConfig::default();
        let from = Pose {
            offset: Vec2::new(150.0, 10.0),
            rotation: 150.0_f64.to_radians() / 20.0,
            like_opacity: 1.0,
            dislike_opacity: 0.2,
        };
        let mut anim = Animation::exit(from, Direction::Like, &config);
        let target = anim.target();
        assert_eq!(target.offset, Vec2::new(700.0, 10.0));
        assert_eq!(target.rotation, 15.0_f64.to_radians());
        assert_eq!(target.like_opacity, 1.0);
        assert_eq!(target.dislike_opacity, 0.2);

        let (mid, done) = anim.advance(250 * MS);
        assert!(!done);
        assert!(mid.offset.x > 150.0 && mid.offset.x < 700.0);
        let (end, done) = anim.advance(250 * MS);
        assert!(done);
        assert_eq!(end, target);

        let left = Animation::exit(Pose::REST, Direction::Dislike, &config).target();
        assert_eq!(left.offset, Vec2::new(-700.0, 0.0));
        assert_eq!(left.rotation, -(15.0_f64.to_radians()));
    }

    #[test]
    fn pose_transform_matches_drag_transform() {
        let v = Vec2::new(30.0, -12.0);
        let pose = Pose {
            offset: v,
            rotation: swipedeck_decision::classify::drag_rotation(v),
            ..Pose::REST
        };
        assert_eq!(
            pose.transform(),
            swipedeck_decision::classify::drag_transform(v)
        );
    }
}
