//! Playback clock: time/speed/loop/running state advanced by host ticks.
//!
//! The clock never schedules anything itself. The host rendering loop calls
//! `advance(delta)` once per displayed frame with the wall-clock delta in
//! seconds; everything else is plain synchronous state.

use serde::{Deserialize, Serialize};

/// Mutable playback state for one recording.
///
/// `time` lives in `[0, duration]` where `duration` is supplied per call by
/// the owning controller (recordings are pre-normalized to start at 0).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PlaybackClock {
    /// Current playback position in seconds.
    pub time: f32,
    /// Rate multiplier applied to wall-clock deltas.
    pub speed: f32,
    /// Wrap past the end instead of clamping.
    pub looping: bool,
    /// Whether `advance` moves time at all.
    pub running: bool,
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self {
            time: 0.0,
            speed: 1.0,
            looping: true,
            running: true,
        }
    }
}

/// Euclidean-style float modulo: result has the sign of `b`.
fn fmod(a: f32, b: f32) -> f32 {
    if b == 0.0 {
        return 0.0;
    }
    let m = a % b;
    if (m < 0.0 && b > 0.0) || (m > 0.0 && b < 0.0) {
        m + b
    } else {
        m
    }
}

impl PlaybackClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the start of the timeline. Speed/loop/running are untouched;
    /// the controller decides those at recording-swap time.
    #[inline]
    pub fn reset(&mut self) {
        self.time = 0.0;
    }

    /// Advance by a wall-clock delta (seconds), scaled by `speed`.
    ///
    /// No-op unless running and the timeline has positive length. Past the
    /// end: looping wraps via modulo (a single wrap regardless of how large
    /// the delta was, e.g. after a backgrounded tab); non-looping clamps to
    /// the end and leaves `running` set, so time freezes while the playing
    /// flag stays on until a caller changes it.
    pub fn advance(&mut self, wall_delta: f32, duration: f32) {
        if !self.running || duration <= 0.0 {
            return;
        }
        let next = self.time + wall_delta * self.speed;
        self.time = if self.looping {
            // Reaching the end exactly wraps to 0; the loop is seamless.
            if next >= duration || next < 0.0 {
                fmod(next, duration)
            } else {
                next
            }
        } else {
            next.clamp(0.0, duration)
        };
    }

    /// Jump to an absolute time, clamped into `[0, duration]`. Applies
    /// regardless of the running flag.
    #[inline]
    pub fn seek(&mut self, new_time: f32, duration: f32) {
        self.time = new_time.clamp(0.0, duration);
    }

    /// Nudge by a signed delta (discrete frame-advance controls); clamps at
    /// both bounds.
    #[inline]
    pub fn step(&mut self, signed_delta: f32, duration: f32) {
        self.seek(self.time + signed_delta, duration);
    }

    #[inline]
    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    #[inline]
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    #[inline]
    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }
}
