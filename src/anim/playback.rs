//! Playback state for the animation engine: a clamped `current_time` cursor
//! over `[0, duration]` with play/pause/scrub/speed controls.

use tracing::debug;

/// Default play length in seconds when the caller supplies none.
pub const DEFAULT_DURATION_SECS: f64 = 5.0;

/// Playback rate multiplier. Cycles Normal -> Half -> Double -> Normal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackSpeed {
    Half,
    #[default]
    Normal,
    Double,
}

impl PlaybackSpeed {
    /// Wall-clock multiplier applied to elapsed time.
    pub fn factor(self) -> f64 {
        match self {
            Self::Half => 0.5,
            Self::Normal => 1.0,
            Self::Double => 2.0,
        }
    }

    /// Next speed in the cycle.
    pub fn cycled(self) -> Self {
        match self {
            Self::Normal => Self::Half,
            Self::Half => Self::Double,
            Self::Double => Self::Normal,
        }
    }
}

/// Animation playback cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playback {
    current_time: f64,
    duration: f64,
    is_playing: bool,
    speed: PlaybackSpeed,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}

impl Playback {
    pub fn new(duration: f64) -> Self {
        Self {
            current_time: 0.0,
            duration,
            is_playing: false,
            speed: PlaybackSpeed::default(),
        }
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    /// Start playing. Restarts from 0 when the cursor already sits at the
    /// end. A non-positive duration makes this a no-op: there is nothing to
    /// animate and erroring would gain the caller nothing.
    pub fn play(&mut self) {
        if self.duration <= 0.0 {
            debug!(duration = self.duration, "play() ignored for degenerate duration");
            return;
        }
        if self.current_time >= self.duration {
            self.current_time = 0.0;
        }
        self.is_playing = true;
    }

    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    pub fn reset(&mut self) {
        self.is_playing = false;
        self.current_time = 0.0;
    }

    /// Jump the cursor, clamped into `[0, duration]`. Works while playing or
    /// paused and does not change the play state.
    pub fn scrub(&mut self, time: f64) {
        self.current_time = time.clamp(0.0, self.duration.max(0.0));
    }

    pub fn cycle_speed(&mut self) {
        self.speed = self.speed.cycled();
    }

    /// Advance by an elapsed wall-clock delta (seconds), scaled by the
    /// current speed and clamped at `duration`. Reaching the end stops
    /// playback. Returns `true` when `current_time` changed and a render is
    /// due.
    pub fn advance(&mut self, delta_secs: f64) -> bool {
        if !self.is_playing || delta_secs <= 0.0 {
            return false;
        }
        let next = self.current_time + delta_secs * self.speed.factor();
        let clamped = next.min(self.duration);
        let changed = clamped != self.current_time;
        self.current_time = clamped;
        if self.current_time >= self.duration {
            self.is_playing = false;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_clamps_at_duration_and_autostops() {
        let mut pb = Playback::new(5.0);
        pb.play();
        assert!(pb.advance(3.0));
        assert_eq!(pb.current_time(), 3.0);
        assert!(pb.advance(10.0));
        assert_eq!(pb.current_time(), 5.0);
        assert!(!pb.is_playing());
        // No further movement once stopped.
        assert!(!pb.advance(1.0));
    }

    #[test]
    fn play_at_end_resets_to_zero_first() {
        let mut pb = Playback::new(5.0);
        pb.scrub(5.0);
        pb.play();
        assert_eq!(pb.current_time(), 0.0);
        assert!(pb.is_playing());
    }

    #[test]
    fn speed_cycle_order() {
        let mut pb = Playback::new(5.0);
        assert_eq!(pb.speed(), PlaybackSpeed::Normal);
        pb.cycle_speed();
        assert_eq!(pb.speed(), PlaybackSpeed::Half);
        pb.cycle_speed();
        assert_eq!(pb.speed(), PlaybackSpeed::Double);
        pb.cycle_speed();
        assert_eq!(pb.speed(), PlaybackSpeed::Normal);
    }

    #[test]
    fn speed_scales_elapsed_time() {
        let mut pb = Playback::new(10.0);
        pb.play();
        pb.cycle_speed(); // Half
        pb.advance(2.0);
        assert_eq!(pb.current_time(), 1.0);
        pb.cycle_speed(); // Double
        pb.advance(2.0);
        assert_eq!(pb.current_time(), 5.0);
    }

    #[test]
    fn scrub_is_clamped_and_keeps_play_state() {
        let mut pb = Playback::new(5.0);
        pb.scrub(-2.0);
        assert_eq!(pb.current_time(), 0.0);
        pb.scrub(99.0);
        assert_eq!(pb.current_time(), 5.0);
        pb.play();
        pb.scrub(2.0);
        assert!(pb.is_playing());
        assert_eq!(pb.current_time(), 2.0);
    }

    #[test]
    fn degenerate_duration_makes_play_a_noop() {
        let mut pb = Playback::new(0.0);
        pb.play();
        assert!(!pb.is_playing());
        assert!(!pb.advance(1.0));
    }
}
