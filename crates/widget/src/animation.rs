//! Settle a transition from the release point to its target.
//!
//! A [`Settle`] animation carries the transition progress from wherever the
//! gesture ended to `0.0` or `1.0`. It is sampled once per frame with the
//! current [`Instant`] and starts counting on its first sample, so the first
//! frame always reproduces the starting progress exactly.
//!
//! # Spring Model
//!
//! Springs use the analytic solution of the damped harmonic oscillator
//!
//! ```text
//! x''(t) + 2ζω₀x'(t) + ω₀²x(t) = ω₀²
//! ```
//!
//! with `x(0) = 0` and `x'(0) = v₀`, where `v₀` is the initial velocity in
//! units of the total distance per second. The natural frequency `ω₀` is
//! derived from the animation duration so the oscillation has decayed to 1%
//! of the distance when the duration elapses.
use crate::core::Easing;
use crate::core::SpringParams;
use crate::core::time::{self, Duration, Instant};

/// Envelope decay factor: `e^(-4.6) ≈ 0.01`.
const UNDERDAMPED_SETTLE_FACTOR: f32 = 4.6;

/// Settling factor of a critically damped spring.
///
/// Solves `e^(-ω₀T)(1 + ω₀T) = 0.01`.
const CRITICALLY_DAMPED_SETTLE_FACTOR: f32 = 6.6;

/// The curve followed by a [`Settle`] animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    /// A timed curve.
    Timed(Easing),
    /// A damped spring.
    Spring(SpringParams),
}

impl Curve {
    /// Returns the fraction of the distance covered after `elapsed` seconds
    /// of an animation lasting `duration` seconds.
    ///
    /// Springs may overshoot `1.0` before settling.
    pub fn fraction(&self, elapsed: f32, duration: f32) -> f32 {
        if duration <= 0.0 || elapsed >= duration {
            return 1.0;
        }

        let elapsed = elapsed.max(0.0);

        match self {
            Curve::Timed(easing) => easing.apply(elapsed / duration),
            Curve::Spring(params) => spring_position(
                elapsed,
                duration,
                params.damping_ratio(),
                params.initial_velocity(),
            ),
        }
    }
}

fn spring_position(t: f32, duration: f32, zeta: f32, velocity: f32) -> f32 {
    if (zeta - 1.0).abs() < 0.001 {
        // Critically damped: fastest approach without overshoot
        let omega = CRITICALLY_DAMPED_SETTLE_FACTOR / duration;
        let decay = (-omega * t).exp();

        1.0 - decay * (1.0 + (omega - velocity) * t)
    } else {
        let omega = UNDERDAMPED_SETTLE_FACTOR / (zeta * duration);
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let b = (zeta * omega - velocity) / omega_d;
        let decay = (-zeta * omega * t).exp();

        1.0 - decay * ((omega_d * t).cos() + b * (omega_d * t).sin())
    }
}

/// An animation moving the transition progress towards a target.
#[derive(Debug, Clone, PartialEq)]
pub struct Settle {
    from: f32,
    to: f32,
    duration: Duration,
    curve: Curve,
    started_at: Option<Instant>,
}

impl Settle {
    /// Creates a new [`Settle`] animation.
    pub fn new(from: f32, to: f32, duration: Duration, curve: Curve) -> Self {
        Self {
            from,
            to,
            duration,
            curve,
            started_at: None,
        }
    }

    /// Returns the starting progress.
    pub fn from(&self) -> f32 {
        self.from
    }

    /// Returns the target progress.
    pub fn to(&self) -> f32 {
        self.to
    }

    /// Returns the duration of the animation.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the [`Curve`] of the animation.
    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// Returns the progress after `elapsed` time.
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        let fraction = self
            .curve
            .fraction(time::seconds(elapsed), time::seconds(self.duration));

        self.from + (self.to - self.from) * fraction
    }

    /// Samples the animation at `now`.
    ///
    /// Returns the current progress and whether the animation has finished.
    /// A finished animation always lands exactly on its target.
    pub fn sample(&mut self, now: Instant) -> (f32, bool) {
        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started_at);

        if elapsed >= self.duration {
            (self.to, true)
        } else {
            (self.value_at(elapsed), false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spring(damping_ratio: f32, initial_velocity: f32) -> Curve {
        Curve::Spring(SpringParams::new(damping_ratio, initial_velocity).expect("valid spring"))
    }

    #[test]
    fn test_curves_start_at_zero() {
        for curve in [
            Curve::Timed(Easing::EaseInOut),
            Curve::Timed(Easing::Linear),
            spring(0.7, 0.3),
            spring(1.0, 0.0),
        ] {
            assert_eq!(curve.fraction(0.0, 0.5), 0.0, "{curve:?}");
            assert_eq!(curve.fraction(0.5, 0.5), 1.0, "{curve:?}");
        }
    }

    #[test]
    fn test_spring_settles_near_target() {
        for curve in [spring(0.7, 0.3), spring(0.8, 0.0), spring(1.0, 0.0)] {
            let near_end = curve.fraction(0.49, 0.5);
            assert!((near_end - 1.0).abs() < 0.05, "{curve:?}: {near_end}");
        }
    }

    #[test]
    fn test_underdamped_spring_overshoots() {
        let curve = spring(0.3, 0.0);

        let peak = (1..100)
            .map(|step| curve.fraction(step as f32 * 0.005, 0.5))
            .fold(0.0_f32, f32::max);

        assert!(peak > 1.0);
    }

    #[test]
    fn test_settle_first_frame_is_start() {
        let mut settle = Settle::new(0.35, 1.0, Duration::from_millis(300), spring(0.7, 0.3));
        let start = Instant::now();

        assert_eq!(settle.sample(start), (0.35, false));

        let (value, finished) = settle.sample(start + Duration::from_millis(150));
        assert!(!finished);
        assert!(value > 0.35);

        assert_eq!(settle.sample(start + Duration::from_millis(300)), (1.0, true));
    }

    #[test]
    fn test_settle_backwards() {
        let mut settle = Settle::new(
            0.3,
            0.0,
            Duration::from_millis(200),
            Curve::Timed(Easing::Linear),
        );
        let start = Instant::now();

        let _ = settle.sample(start);
        let (value, _) = settle.sample(start + Duration::from_millis(100));
        assert!((value - 0.15).abs() < 1e-4);

        assert_eq!(settle.sample(start + Duration::from_secs(1)), (0.0, true));
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut settle = Settle::new(0.0, 1.0, Duration::ZERO, Curve::Timed(Easing::EaseInOut));

        assert_eq!(settle.sample(Instant::now()), (1.0, true));
    }
}
