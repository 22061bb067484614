//! Keep track of time, both in native and web platforms!

pub use web_time::{Duration, Instant};

/// Returns the given [`Duration`] as fractional seconds.
///
/// Shorthand used by the animation code, which works in `f32`.
pub fn seconds(duration: Duration) -> f32 {
    duration.as_secs_f32()
}
