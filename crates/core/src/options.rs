//! Configure the side menu transition.
use crate::Error;
use crate::gesture::Direction;
use crate::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The parameters of a spring animation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpringParams {
    damping_ratio: f32,
    initial_velocity: f32,
}

impl SpringParams {
    /// Creates new [`SpringParams`].
    ///
    /// The damping ratio must be in `(0, 1]`, where `1` settles without
    /// oscillation. The initial velocity is expressed in units of the total
    /// animation distance per second.
    pub fn new(damping_ratio: f32, initial_velocity: f32) -> Result<Self, Error> {
        let params = Self {
            damping_ratio,
            initial_velocity,
        };

        params.validate()?;

        Ok(params)
    }

    const fn new_unchecked(damping_ratio: f32, initial_velocity: f32) -> Self {
        Self {
            damping_ratio,
            initial_velocity,
        }
    }

    /// Returns the damping ratio.
    pub fn damping_ratio(&self) -> f32 {
        self.damping_ratio
    }

    /// Returns the initial velocity.
    pub fn initial_velocity(&self) -> f32 {
        self.initial_velocity
    }

    fn validate(&self) -> Result<(), Error> {
        if !(self.damping_ratio > 0.0 && self.damping_ratio <= 1.0) {
            return Err(Error::invalid(
                "damping_ratio",
                self.damping_ratio,
                "it must be in (0, 1]",
            ));
        }

        if !self.initial_velocity.is_finite() {
            return Err(Error::invalid(
                "initial_velocity",
                self.initial_velocity,
                "it must be finite",
            ));
        }

        Ok(())
    }
}

/// Spring parameters for both transition directions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpringSettings {
    /// The spring used when presenting the menu.
    pub present: SpringParams,
    /// The spring used when dismissing the menu.
    pub dismiss: SpringParams,
}

impl SpringSettings {
    /// Creates new [`SpringSettings`].
    pub const fn new(present: SpringParams, dismiss: SpringParams) -> Self {
        Self { present, dismiss }
    }

    /// Returns the [`SpringParams`] for the given [`Direction`].
    pub fn get(&self, direction: Direction) -> SpringParams {
        match direction {
            Direction::Present => self.present,
            Direction::Dismiss => self.dismiss,
        }
    }

    const FINISHING: Self = Self::new(
        SpringParams::new_unchecked(0.7, 0.3),
        SpringParams::new_unchecked(0.8, 0.3),
    );

    const CANCELLING: Self = Self::new(
        SpringParams::new_unchecked(0.7, 0.0),
        SpringParams::new_unchecked(0.7, 0.0),
    );
}

/// The timing curve of a non-spring animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Starts slowly.
    EaseIn,
    /// Ends slowly.
    EaseOut,
    /// Starts and ends slowly.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Maps the linear time fraction `t` in `[0, 1]` to an eased fraction.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// The options of the side menu transition.
///
/// The options may be changed at any time between gestures; every
/// transition takes a copy when it starts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransitionOptions {
    duration: f32,
    content_scale: f32,
    visible_content_width: f32,
    /// Whether a spring is used when a transition finishes.
    pub use_finishing_spring: bool,
    /// Whether a spring is used when a transition is cancelled.
    pub use_cancelling_spring: bool,
    /// The springs used when a transition finishes.
    pub finishing_spring: SpringSettings,
    /// The springs used when a transition is cancelled.
    pub cancelling_spring: SpringSettings,
    /// The [`Easing`] of non-spring animations.
    pub easing: Easing,
}

impl TransitionOptions {
    /// The default duration, in seconds.
    pub const DEFAULT_DURATION: f32 = 0.5;

    /// The default content scale.
    pub const DEFAULT_CONTENT_SCALE: f32 = 0.86;

    /// The default visible content width, in logical pixels.
    pub const DEFAULT_VISIBLE_CONTENT_WIDTH: f32 = 56.0;

    /// Creates new [`TransitionOptions`] with default springs and easing.
    pub fn new(
        duration: f32,
        content_scale: f32,
        visible_content_width: f32,
    ) -> Result<Self, Error> {
        let options = Self {
            duration,
            content_scale,
            visible_content_width,
            ..Self::default()
        };

        options.validate()?;

        Ok(options)
    }

    /// Sets the duration, in seconds.
    pub fn with_duration(mut self, duration: f32) -> Result<Self, Error> {
        self.set_duration(duration)?;
        Ok(self)
    }

    /// Sets the content scale.
    pub fn with_content_scale(mut self, content_scale: f32) -> Result<Self, Error> {
        self.set_content_scale(content_scale)?;
        Ok(self)
    }

    /// Sets the visible content width.
    pub fn with_visible_content_width(mut self, width: f32) -> Result<Self, Error> {
        self.set_visible_content_width(width)?;
        Ok(self)
    }

    /// Sets the duration of a full transition, in seconds.
    pub fn set_duration(&mut self, duration: f32) -> Result<(), Error> {
        validate_duration(duration)?;
        self.duration = duration;
        Ok(())
    }

    /// Sets the scale of the content while the menu is open.
    pub fn set_content_scale(&mut self, content_scale: f32) -> Result<(), Error> {
        validate_non_negative("content_scale", content_scale)?;
        self.content_scale = content_scale;
        Ok(())
    }

    /// Sets the width of the content strip that stays visible while the
    /// menu is open.
    pub fn set_visible_content_width(&mut self, width: f32) -> Result<(), Error> {
        validate_non_negative("visible_content_width", width)?;
        self.visible_content_width = width;
        Ok(())
    }

    /// Returns the duration of a full transition.
    pub fn duration(&self) -> Duration {
        seconds_to_duration(self.duration)
    }

    /// Returns the duration of a full transition, in seconds.
    pub fn duration_secs(&self) -> f32 {
        self.duration
    }

    /// Returns the scale of the content while the menu is open.
    pub fn content_scale(&self) -> f32 {
        self.content_scale
    }

    /// Returns the width of the content strip that stays visible while the
    /// menu is open.
    pub fn visible_content_width(&self) -> f32 {
        self.visible_content_width
    }

    /// Returns the time left to animate a transition that has already
    /// covered `progress`.
    pub fn remaining_duration(&self, progress: f32) -> Duration {
        let progress = progress.clamp(0.0, 1.0);

        seconds_to_duration(self.duration - self.duration * progress)
    }

    /// Checks every invariant of the options.
    ///
    /// Options built through the setters are always valid; this is useful
    /// for options that were deserialized.
    pub fn validate(&self) -> Result<(), Error> {
        validate_duration(self.duration)?;
        validate_non_negative("content_scale", self.content_scale)?;
        validate_non_negative("visible_content_width", self.visible_content_width)?;

        for settings in [self.finishing_spring, self.cancelling_spring] {
            settings.present.validate()?;
            settings.dismiss.validate()?;
        }

        Ok(())
    }
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            duration: Self::DEFAULT_DURATION,
            content_scale: Self::DEFAULT_CONTENT_SCALE,
            visible_content_width: Self::DEFAULT_VISIBLE_CONTENT_WIDTH,
            use_finishing_spring: true,
            use_cancelling_spring: true,
            finishing_spring: SpringSettings::FINISHING,
            cancelling_spring: SpringSettings::CANCELLING,
            easing: Easing::default(),
        }
    }
}

fn validate_duration(duration: f32) -> Result<(), Error> {
    validate_non_negative("duration", duration)?;

    if Duration::try_from_secs_f32(duration).is_err() {
        return Err(Error::invalid(
            "duration",
            duration,
            "it must fit in a time span",
        ));
    }

    Ok(())
}

fn seconds_to_duration(seconds: f32) -> Duration {
    Duration::try_from_secs_f32(seconds).unwrap_or(Duration::MAX)
}

fn validate_non_negative(field: &'static str, value: f32) -> Result<(), Error> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(field, value, "it must be non negative"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TransitionOptions::default();

        assert_eq!(options.duration_secs(), 0.5);
        assert_eq!(options.content_scale(), 0.86);
        assert_eq!(options.visible_content_width(), 56.0);
        assert!(options.use_finishing_spring);
        assert!(options.use_cancelling_spring);
        assert_eq!(options.easing, Easing::EaseInOut);
        assert_eq!(options.finishing_spring.dismiss.damping_ratio(), 0.8);
        assert_eq!(options.cancelling_spring.present.initial_velocity(), 0.0);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_negative_duration_is_rejected() {
        let result = TransitionOptions::new(-1.0, 0.88, 56.0);

        assert!(matches!(
            result,
            Err(Error::InvalidConfiguration {
                field: "duration",
                ..
            })
        ));
    }

    #[test]
    fn test_huge_duration_is_rejected() {
        let result = TransitionOptions::new(1.0e30, 0.88, 56.0);

        assert!(matches!(
            result,
            Err(Error::InvalidConfiguration {
                field: "duration",
                ..
            })
        ));

        let mut options = TransitionOptions::default();
        assert!(options.set_duration(f32::MAX).is_err());
        assert_eq!(options.duration_secs(), TransitionOptions::DEFAULT_DURATION);
        assert_eq!(options.remaining_duration(0.5), Duration::from_secs_f32(0.25));
    }

    #[test]
    fn test_negative_scale_is_rejected() {
        let mut options = TransitionOptions::default();

        assert!(options.set_content_scale(-0.1).is_err());
        assert!(options.set_content_scale(f32::NAN).is_err());
        assert_eq!(options.content_scale(), 0.86);
    }

    #[test]
    fn test_values_round_trip() {
        let options = TransitionOptions::default()
            .with_content_scale(0.88)
            .and_then(|options| options.with_visible_content_width(56.0))
            .expect("valid options");

        assert_eq!(options.content_scale(), 0.88);
        assert_eq!(options.visible_content_width(), 56.0);
    }

    #[test]
    fn test_spring_params_validation() {
        assert!(SpringParams::new(0.0, 0.0).is_err());
        assert!(SpringParams::new(1.2, 0.0).is_err());
        assert!(SpringParams::new(0.5, f32::INFINITY).is_err());

        let params = SpringParams::new(1.0, 0.3).expect("valid spring");
        assert_eq!(params.damping_ratio(), 1.0);
        assert_eq!(params.initial_velocity(), 0.3);
    }

    #[test]
    fn test_remaining_duration() {
        let options = TransitionOptions::new(1.0, 0.88, 56.0).expect("valid options");

        assert_eq!(options.remaining_duration(0.0), Duration::from_secs(1));
        assert_eq!(options.remaining_duration(1.0), Duration::ZERO);
        assert!(
            (options.remaining_duration(0.25).as_secs_f32() - 0.75).abs() < 1e-6,
            "remaining duration should shrink with progress"
        );
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }

        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
    }
}
