//! Time-parameterized player movement along a timestamped path.

use crate::foundation::geom::FieldPosition;
use crate::scene::play::Player;

/// Interpolated field position of `player` at `time` seconds into a play of
/// `duration` seconds.
///
/// Before the first segment and after the last, the position clamps to the
/// nearest endpoint. A player with an empty path is stationary at
/// `start_position` for all `time`. Non-positive durations degenerate to the
/// start position rather than an error.
pub fn position_at(player: &Player, time: f64, duration: f64) -> FieldPosition {
    if player.path.is_empty() || duration <= 0.0 {
        return player.start_position;
    }

    let progress = (time / duration).clamp(0.0, 1.0);

    // Normalized (position, t) sequence with the implicit start at t=0.
    let mut prev = (player.start_position, 0.0);
    for point in &player.path {
        let t = (point.timestamp / duration).clamp(0.0, 1.0);
        if progress <= t {
            let span = t - prev.1;
            if span <= 0.0 {
                return prev.0;
            }
            let local = (progress - prev.1) / span;
            return FieldPosition::lerp(prev.0, point.position, local);
        }
        prev = (point.position, t);
    }

    // Past the final path point.
    prev.0
}
