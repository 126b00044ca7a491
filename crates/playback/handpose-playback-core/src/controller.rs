//! Controller: single owning scope for the active recording and its clock.
//!
//! Mirrors the host loop contract: one `tick(delta)` per displayed frame,
//! which advances the clock and samples the pose to hand to the renderer.
//! The controller is plain synchronous state and is fully testable without
//! any rendering environment.

use crate::clock::PlaybackClock;
use crate::data::{Frame, Recording};
use crate::sampling::sample;

/// Owns the current `Recording` and the `PlaybackClock`. No other component
/// mutates either.
#[derive(Clone, Debug, Default)]
pub struct PlaybackController {
    recording: Recording,
    clock: PlaybackClock,
}

impl PlaybackController {
    /// Start in the empty "nothing loaded" state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active recording wholesale and reset the clock in the
    /// same call, so no time or bracket state from the previous recording is
    /// ever observable against the new one. Playback restarts immediately.
    pub fn set_recording(&mut self, recording: Recording) {
        log::debug!(
            "recording swap: {} frames, {:.3}s",
            recording.len(),
            recording.duration()
        );
        self.recording = recording;
        self.clock.reset();
        self.clock.running = true;
    }

    /// Drop back to the empty state.
    pub fn clear_recording(&mut self) {
        self.recording = Recording::default();
        self.clock.reset();
    }

    pub fn recording(&self) -> &Recording {
        &self.recording
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.recording.duration()
    }

    /// Advance the clock by a wall-clock delta and sample the resulting
    /// pose. With nothing loaded this returns the degenerate empty frame.
    pub fn tick(&mut self, wall_delta: f32) -> Frame {
        self.clock.advance(wall_delta, self.recording.duration());
        sample(&self.recording, self.clock.time)
    }

    /// Sample at an arbitrary time without touching the clock.
    #[inline]
    pub fn sample_at(&self, t: f32) -> Frame {
        sample(&self.recording, t)
    }

    // Clock accessors and mutator passthroughs (the UI layer binds these to
    // its transport controls).

    #[inline]
    pub fn time(&self) -> f32 {
        self.clock.time
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.clock.speed
    }

    #[inline]
    pub fn looping(&self) -> bool {
        self.clock.looping
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.clock.running
    }

    #[inline]
    pub fn seek(&mut self, t: f32) {
        self.clock.seek(t, self.recording.duration());
    }

    #[inline]
    pub fn step(&mut self, signed_delta: f32) {
        self.clock.step(signed_delta, self.recording.duration());
    }

    #[inline]
    pub fn toggle_running(&mut self) {
        self.clock.toggle_running();
    }

    #[inline]
    pub fn set_speed(&mut self, speed: f32) {
        self.clock.set_speed(speed);
    }

    #[inline]
    pub fn set_looping(&mut self, looping: bool) {
        self.clock.set_looping(looping);
    }
}
