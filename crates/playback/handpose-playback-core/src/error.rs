//! Error types for recording ingestion.
//!
//! The sampling/playback core itself never fails: empty recordings produce
//! degenerate frames and the equal-timestamp hazard is handled with an
//! epsilon floor. Everything here is loader-side and carries a message fit
//! to show the user directly.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PoseError {
    /// The document is not valid JSON at all.
    #[error("recording parse error: {reason}")]
    Parse { reason: String },

    /// Valid JSON, but none of the accepted document shapes
    /// (bare array, `frames`, `data.frames`).
    #[error("unrecognized recording shape: expected a frame array, a 'frames' field, or 'data.frames'")]
    UnrecognizedShape,

    /// A frame carries a NaN or infinite timestamp.
    #[error("invalid frame timestamp: {time}")]
    InvalidTime { time: f32 },

    /// A joint carries a NaN or infinite position component.
    #[error("invalid position for joint '{joint}' in frame at {time}")]
    InvalidPosition { joint: String, time: f32 },
}

impl From<serde_json::Error> for PoseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}
