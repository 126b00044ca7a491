//! Handpose Playback Core (renderer-agnostic)
//!
//! Playback and interpolation engine for recorded time-series hand-skeleton
//! poses. Given a loaded `Recording` and a query time it produces a
//! continuous, deterministic pose: boundary clamping at the ends, binary
//! search for the bracketing frame pair, per-joint position blending, and a
//! host-driven playback clock with loop wraparound.
//!
//! Rendering, camera framing, and UI wiring live in adapter crates; this
//! crate is a pure synchronous state machine.

pub mod blend;
pub mod clock;
pub mod controller;
pub mod data;
pub mod error;
pub mod loader;
pub mod sampling;

// Re-exports for consumers (adapters)
pub use clock::PlaybackClock;
pub use controller::PlaybackController;
pub use data::{Frame, Joint, Recording};
pub use error::PoseError;
pub use loader::{parse_recording_json, recording_from_frames};
pub use sampling::{duration, sample};
