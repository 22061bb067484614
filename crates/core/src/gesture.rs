//! Drag gesture samples fed into the side menu.

/// The phase of a continuous drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The finger (or pointer) started dragging.
    Began,
    /// The finger moved.
    Changed,
    /// The finger was lifted.
    Ended,
    /// The gesture was interrupted by the system.
    Cancelled,
}

/// A single sample of a horizontal drag gesture, as reported by the host.
///
/// Both the translation and the velocity are measured along the horizontal
/// axis, in logical pixels and logical pixels per second, with the raw sign
/// of the host (positive towards the right).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// The translation since the gesture began.
    pub translation: f32,
    /// The current velocity.
    pub velocity: f32,
    /// The [`Phase`] of the gesture.
    pub phase: Phase,
}

impl Sample {
    /// Creates a new [`Sample`].
    pub const fn new(phase: Phase, translation: f32, velocity: f32) -> Self {
        Self {
            translation,
            velocity,
            phase,
        }
    }

    /// Creates a [`Phase::Began`] sample.
    pub const fn began(translation: f32, velocity: f32) -> Self {
        Self::new(Phase::Began, translation, velocity)
    }

    /// Creates a [`Phase::Changed`] sample.
    pub const fn changed(translation: f32, velocity: f32) -> Self {
        Self::new(Phase::Changed, translation, velocity)
    }

    /// Creates a [`Phase::Ended`] sample.
    pub const fn ended(translation: f32, velocity: f32) -> Self {
        Self::new(Phase::Ended, translation, velocity)
    }

    /// Creates a [`Phase::Cancelled`] sample.
    pub const fn cancelled(translation: f32, velocity: f32) -> Self {
        Self::new(Phase::Cancelled, translation, velocity)
    }

    /// Returns the progress of the gesture over the given axis length,
    /// clamped to `[0, 1]`.
    pub fn progress(&self, axis_length: f32) -> f32 {
        if axis_length <= 0.0 {
            return 0.0;
        }

        (self.translation / axis_length).abs().clamp(0.0, 1.0)
    }
}

/// The direction of a side menu transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Opening the menu.
    Present,
    /// Closing the menu.
    Dismiss,
}

impl Direction {
    /// Normalizes a raw horizontal velocity so that moving towards the
    /// target state of the transition is always positive.
    pub fn normalize(self, velocity: f32) -> f32 {
        match self {
            Direction::Present => velocity,
            Direction::Dismiss => -velocity,
        }
    }

    /// Returns `true` if the raw horizontal displacement moves towards the
    /// target state of the transition.
    pub fn is_forward(self, translation: f32) -> bool {
        match self {
            Direction::Present => translation > 0.0,
            Direction::Dismiss => translation < 0.0,
        }
    }

    /// Returns the opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Direction::Present => Direction::Dismiss,
            Direction::Dismiss => Direction::Present,
        }
    }
}
