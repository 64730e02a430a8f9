//! Session-oriented driver for play animation: the playback cursor plus the
//! single cooperative ticker that advances it.

use crate::anim::playback::{Playback, PlaybackSpeed};
use std::time::Instant;

/// Wall-clock delta source for the cooperative animation loop.
#[derive(Debug)]
struct Ticker {
    last: Instant,
}

impl Ticker {
    fn arm() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous tick (or since arming).
    fn delta(&mut self, now: Instant) -> f64 {
        let dt = now.saturating_duration_since(self.last).as_secs_f64();
        self.last = now;
        dt
    }
}

/// Cooperative animation driver.
///
/// The host environment calls [`AnimationSession::tick`] once per frame (e.g.
/// from its repaint loop); everything else is synchronous state on the
/// calling thread.
pub struct AnimationSession {
    playback: Playback,
    ticker: Option<Ticker>,
    on_frame: Box<dyn FnMut(f64)>,
}

impl AnimationSession {
    /// Create a session over a play of `duration` seconds. `on_frame`
    /// receives the new `current_time` for every change and is expected to
    /// invoke the renderer in time-parameterized mode.
    pub fn new(duration: f64, on_frame: impl FnMut(f64) + 'static) -> Self {
        Self {
            playback: Playback::new(duration),
            ticker: None,
            on_frame: Box::new(on_frame),
        }
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn current_time(&self) -> f64 {
        self.playback.current_time()
    }

    /// Start (or restart) playback and arm a fresh ticker epoch, cancelling
    /// any previous one.
    pub fn play(&mut self) {
        let was_at_end = self.playback.current_time() >= self.playback.duration();
        self.playback.play();
        if self.playback.is_playing() {
            self.ticker = Some(Ticker::arm());
            if was_at_end {
                // The restart rewound the cursor; reflect that immediately.
                (self.on_frame)(self.playback.current_time());
            }
        }
    }

    pub fn pause(&mut self) {
        self.playback.pause();
        self.ticker = None;
    }

    pub fn reset(&mut self) {
        self.playback.reset();
        self.ticker = None;
        (self.on_frame)(self.playback.current_time());
    }

    /// Jump the cursor, independent of play state, and render the new time.
    pub fn scrub(&mut self, time: f64) {
        self.playback.scrub(time);
        (self.on_frame)(self.playback.current_time());
    }

    pub fn cycle_speed(&mut self) {
        self.playback.cycle_speed();
    }

    pub fn speed(&self) -> PlaybackSpeed {
        self.playback.speed()
    }

    /// Advance by the wall-clock delta since the previous tick. No-op unless
    /// an epoch is armed. Disarms itself when playback reaches the end.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&mut self, now: Instant) {
        let Some(ticker) = self.ticker.as_mut() else {
            return;
        };
        let dt = ticker.delta(now);
        if self.playback.advance(dt) {
            (self.on_frame)(self.playback.current_time());
        }
        if !self.playback.is_playing() {
            self.ticker = None;
        }
    }

    /// Cancel any armed ticker without touching the cursor. Used on host
    /// teardown; also implied by dropping the session.
    pub fn cancel(&mut self) {
        self.ticker = None;
        self.playback.pause();
    }
}
