//! Recording ingestion: JSON parsing, shape normalization, time
//! normalization.
//!
//! Three document shapes are accepted, checked in order from most to least
//! specific:
//! 1. `{ "data": { "frames": [...] } }`
//! 2. `{ "frames": [...] }`
//! 3. a bare `[...]` array of frame objects
//!
//! Each frame object: `{ time, joints: [{ name, px, py, pz, ox?, oy?, oz?,
//! ow? }] }`. Frames are stable-sorted by timestamp and shifted so the first
//! timestamp is exactly 0 before the `Recording` is handed to the core; the
//! core never branches on input shape and assumes the normalization holds.

use serde::Deserialize;
use serde_json::Value;

use crate::data::{Frame, Joint, Recording};
use crate::error::PoseError;

#[derive(Debug, Deserialize)]
struct RawJoint {
    name: String,
    px: f64,
    py: f64,
    pz: f64,
    #[serde(default)]
    ox: Option<f64>,
    #[serde(default)]
    oy: Option<f64>,
    #[serde(default)]
    oz: Option<f64>,
    #[serde(default)]
    ow: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawFrame {
    time: f64,
    #[serde(default)]
    joints: Vec<RawJoint>,
}

/// Pull the frame array out of whichever accepted shape the document uses.
/// Checks run most-specific first: `data.frames`, then `frames`, then a bare
/// array.
fn extract_frames(doc: Value) -> Result<Value, PoseError> {
    match doc {
        Value::Object(mut obj) => {
            if let Some(Value::Object(mut data)) = obj.remove("data") {
                return match data.remove("frames") {
                    Some(frames @ Value::Array(_)) => Ok(frames),
                    _ => Err(PoseError::UnrecognizedShape),
                };
            }
            match obj.remove("frames") {
                Some(frames @ Value::Array(_)) => Ok(frames),
                _ => Err(PoseError::UnrecognizedShape),
            }
        }
        arr @ Value::Array(_) => Ok(arr),
        _ => Err(PoseError::UnrecognizedShape),
    }
}

fn to_frame(raw: RawFrame) -> Frame {
    let joints = raw
        .joints
        .into_iter()
        .map(|j| Joint {
            name: j.name,
            px: j.px as f32,
            py: j.py as f32,
            pz: j.pz as f32,
            ox: j.ox.map(|v| v as f32),
            oy: j.oy.map(|v| v as f32),
            oz: j.oz.map(|v| v as f32),
            ow: j.ow.map(|v| v as f32),
        })
        .collect();
    Frame::new(raw.time as f32, joints)
}

/// Validate and normalize a frame list into the canonical `Recording`:
/// reject non-finite values, stable-sort by timestamp, shift the whole
/// timeline so the first frame sits at exactly 0.
///
/// Also the entry point for recordings assembled in memory rather than
/// parsed from JSON.
pub fn recording_from_frames(mut frames: Vec<Frame>) -> Result<Recording, PoseError> {
    for frame in &frames {
        if !frame.time.is_finite() {
            return Err(PoseError::InvalidTime { time: frame.time });
        }
        for joint in &frame.joints {
            if !(joint.px.is_finite() && joint.py.is_finite() && joint.pz.is_finite()) {
                return Err(PoseError::InvalidPosition {
                    joint: joint.name.clone(),
                    time: frame.time,
                });
            }
        }
    }

    // Stable sort keeps the relative order of equal-timestamp frames.
    frames.sort_by(|a, b| a.time.total_cmp(&b.time));
    if let Some(start) = frames.first().map(|f| f.time) {
        if start != 0.0 {
            for frame in &mut frames {
                frame.time -= start;
            }
        }
    }
    Ok(Recording::new(frames))
}

/// Parse a recording document into the canonical, time-normalized
/// `Recording`.
///
/// An empty frame array is a valid document and yields the empty recording
/// ("no file loaded" is a normal state, not an error).
pub fn parse_recording_json(s: &str) -> Result<Recording, PoseError> {
    let doc: Value = serde_json::from_str(s)?;
    let raw_frames: Vec<RawFrame> = serde_json::from_value(extract_frames(doc)?)?;
    let recording = recording_from_frames(raw_frames.into_iter().map(to_frame).collect())?;

    log::debug!(
        "parsed recording: {} frames, {:.3}s",
        recording.len(),
        recording.duration()
    );
    Ok(recording)
}
