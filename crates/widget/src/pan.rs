//! Horizontal pan detection.
//!
//! A [`PanTracker`] watches raw pointer events and turns them into gesture
//! [`Sample`]s for the side menu, for hosts that do not have a pan
//! recognizer of their own.
use crate::core::gesture::{Direction, Sample};
use crate::core::time::{self, Duration, Instant};

/// Moves older than this do not contribute to the release velocity.
const STALE_MOVE: Duration = Duration::from_millis(100);

/// A raw pointer event, in logical pixels relative to the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The pointer was pressed.
    Pressed {
        /// The horizontal position of the pointer.
        x: f32,
        /// When the event happened.
        time: Instant,
    },
    /// The pointer moved.
    Moved {
        /// The horizontal position of the pointer.
        x: f32,
        /// When the event happened.
        time: Instant,
    },
    /// The pointer was released.
    Released {
        /// The horizontal position of the pointer.
        x: f32,
        /// When the event happened.
        time: Instant,
    },
    /// The pointer was lost, e.g. captured by another surface.
    Lost,
}

/// Configuration for pan detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanConfig {
    /// Width of the region along the leading edge where a press may start
    /// a presenting pan.
    pub edge_width: f32,
    /// Minimum distance the pointer must move before a pan is recognized.
    pub threshold: f32,
}

impl Default for PanConfig {
    fn default() -> Self {
        Self {
            edge_width: 20.0,
            threshold: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    start_x: f32,
    time: Instant,
}

#[derive(Debug, Clone, Copy)]
struct Active {
    start_x: f32,
    last_x: f32,
    last_time: Instant,
    velocity: f32,
}

/// Detects horizontal pans from pointer events.
#[derive(Debug, Clone)]
pub struct PanTracker {
    direction: Direction,
    config: PanConfig,
    pending: Option<Pending>,
    active: Option<Active>,
}

impl PanTracker {
    /// Creates a tracker for pans that present the menu from the leading edge.
    pub fn edge() -> Self {
        Self::new(Direction::Present)
    }

    /// Creates a tracker for pans that dismiss the menu from anywhere.
    pub fn content() -> Self {
        Self::new(Direction::Dismiss)
    }

    /// Creates a tracker for the given [`Direction`] with the default
    /// [`PanConfig`].
    pub fn new(direction: Direction) -> Self {
        Self::with_config(direction, PanConfig::default())
    }

    /// Creates a tracker with the given [`PanConfig`].
    pub fn with_config(direction: Direction, config: PanConfig) -> Self {
        Self {
            direction,
            config,
            pending: None,
            active: None,
        }
    }

    /// Returns the [`Direction`] of the pans detected by this tracker.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns `true` if a pan is in progress.
    pub fn is_panning(&self) -> bool {
        self.active.is_some()
    }

    /// Processes a pointer [`Event`] and returns the gesture [`Sample`] it
    /// produces, if any.
    pub fn process(&mut self, event: Event) -> Option<Sample> {
        match event {
            Event::Pressed { x, time } => {
                let in_region = match self.direction {
                    Direction::Present => x <= self.config.edge_width,
                    Direction::Dismiss => true,
                };

                if in_region && self.active.is_none() {
                    self.pending = Some(Pending { start_x: x, time });
                }

                None
            }
            Event::Moved { x, time } => {
                if let Some(active) = &mut self.active {
                    active.velocity = velocity(active.last_x, active.last_time, x, time)
                        .unwrap_or(active.velocity);
                    active.last_x = x;
                    active.last_time = time;

                    Some(Sample::changed(x - active.start_x, active.velocity))
                } else if let Some(pending) = self.pending {
                    let translation = x - pending.start_x;

                    if translation.abs() < self.config.threshold {
                        return None;
                    }

                    let velocity = velocity(pending.start_x, pending.time, x, time).unwrap_or(0.0);

                    self.pending = None;
                    self.active = Some(Active {
                        start_x: pending.start_x,
                        last_x: x,
                        last_time: time,
                        velocity,
                    });

                    log::trace!("PanTracker: {:?} pan began", self.direction);

                    Some(Sample::began(translation, velocity))
                } else {
                    None
                }
            }
            Event::Released { x, time } => {
                self.pending = None;

                let active = self.active.take()?;
                let velocity = if time.saturating_duration_since(active.last_time) > STALE_MOVE {
                    0.0
                } else {
                    active.velocity
                };

                Some(Sample::ended(x - active.start_x, velocity))
            }
            Event::Lost => {
                self.pending = None;

                let active = self.active.take()?;

                Some(Sample::cancelled(active.last_x - active.start_x, 0.0))
            }
        }
    }
}

fn velocity(from_x: f32, from_time: Instant, to_x: f32, to_time: Instant) -> Option<f32> {
    let elapsed = time::seconds(to_time.saturating_duration_since(from_time));

    (elapsed > 0.0).then(|| (to_x - from_x) / elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;

    fn at(start: Instant, millis: u64) -> Instant {
        start + Duration::from_millis(millis)
    }

    #[test]
    fn test_edge_press_outside_region_is_ignored() {
        let mut tracker = PanTracker::edge();
        let start = Instant::now();

        assert_eq!(tracker.process(Event::Pressed { x: 100.0, time: start }), None);
        assert_eq!(
            tracker.process(Event::Moved {
                x: 200.0,
                time: at(start, 16)
            }),
            None
        );
        assert!(!tracker.is_panning());
    }

    #[test]
    fn test_edge_pan_produces_samples() {
        let mut tracker = PanTracker::edge();
        let start = Instant::now();

        let _ = tracker.process(Event::Pressed { x: 10.0, time: start });

        assert_eq!(
            tracker.process(Event::Moved {
                x: 12.0,
                time: at(start, 10)
            }),
            None
        );

        let began = tracker
            .process(Event::Moved {
                x: 30.0,
                time: at(start, 100),
            })
            .expect("pan began");
        assert_eq!(began.phase, Phase::Began);
        assert_eq!(began.translation, 20.0);
        assert!((began.velocity - 200.0).abs() < 1e-2);

        let changed = tracker
            .process(Event::Moved {
                x: 50.0,
                time: at(start, 200),
            })
            .expect("pan changed");
        assert_eq!(changed.phase, Phase::Changed);
        assert_eq!(changed.translation, 40.0);
        assert!((changed.velocity - 200.0).abs() < 1e-2);

        let ended = tracker
            .process(Event::Released {
                x: 50.0,
                time: at(start, 210),
            })
            .expect("pan ended");
        assert_eq!(ended.phase, Phase::Ended);
        assert!((ended.velocity - 200.0).abs() < 1e-2);
        assert!(!tracker.is_panning());
    }

    #[test]
    fn test_late_release_has_no_velocity() {
        let mut tracker = PanTracker::content();
        let start = Instant::now();

        let _ = tracker.process(Event::Pressed { x: 300.0, time: start });
        let _ = tracker.process(Event::Moved {
            x: 250.0,
            time: at(start, 50),
        });

        let ended = tracker
            .process(Event::Released {
                x: 250.0,
                time: at(start, 500),
            })
            .expect("pan ended");

        assert_eq!(ended.translation, -50.0);
        assert_eq!(ended.velocity, 0.0);
    }

    #[test]
    fn test_lost_pointer_cancels() {
        let mut tracker = PanTracker::content();
        let start = Instant::now();

        let _ = tracker.process(Event::Pressed { x: 300.0, time: start });
        let _ = tracker.process(Event::Moved {
            x: 200.0,
            time: at(start, 50),
        });

        let cancelled = tracker.process(Event::Lost).expect("pan cancelled");

        assert_eq!(cancelled.phase, Phase::Cancelled);
        assert_eq!(cancelled.translation, -100.0);
        assert_eq!(tracker.process(Event::Lost), None);
    }
}
