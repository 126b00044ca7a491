//! Canonical pose data model (Joint / Frame / Recording).
//!
//! Values are immutable once constructed. A `Recording` is always replaced
//! wholesale by the owning controller; nothing mutates one in place.

use serde::{Deserialize, Serialize};

/// One tracked joint of a hand skeleton at a single instant.
///
/// Orientation components are independently optional: a capture source may
/// provide any subset of the quaternion fields for a joint, or none at all.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Joint {
    /// Joint name, unique within its frame (e.g. "wrist", "index_tip").
    pub name: String,
    pub px: f32,
    pub py: f32,
    pub pz: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ox: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oy: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oz: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ow: Option<f32>,
}

impl Joint {
    /// Build a joint with position only.
    pub fn new(name: impl Into<String>, px: f32, py: f32, pz: f32) -> Self {
        Self {
            name: name.into(),
            px,
            py,
            pz,
            ox: None,
            oy: None,
            oz: None,
            ow: None,
        }
    }

    #[inline]
    pub fn position(&self) -> [f32; 3] {
        [self.px, self.py, self.pz]
    }

    /// True if any orientation component is present.
    #[inline]
    pub fn has_orientation(&self) -> bool {
        self.ox.is_some() || self.oy.is_some() || self.oz.is_some() || self.ow.is_some()
    }
}

/// One timestamped snapshot of all tracked joints.
///
/// Joint sets need not be identical across frames; a skeleton may gain or
/// lose tracked joints over time.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Frame {
    /// Seconds from the start of the recording.
    pub time: f32,
    pub joints: Vec<Joint>,
}

impl Frame {
    pub fn new(time: f32, joints: Vec<Joint>) -> Self {
        Self { time, joints }
    }

    /// The degenerate frame returned when no recording is loaded.
    pub fn empty() -> Self {
        Self {
            time: 0.0,
            joints: Vec::new(),
        }
    }

    /// Look up a joint by name (linear scan; frames are small).
    pub fn joint(&self, name: &str) -> Option<&Joint> {
        self.joints.iter().find(|j| j.name == name)
    }
}

/// The full ordered frame sequence for one loaded session.
///
/// Invariants after ingestion (see `loader`):
/// - timestamps are non-decreasing in sequence order (ties allowed),
/// - the first frame's timestamp is exactly 0.
///
/// An empty recording is the normal "nothing loaded" state, not an error;
/// every operation answers it with a degenerate result.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Recording {
    pub frames: Vec<Frame>,
}

impl Recording {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Span between the first and last frame timestamps, in seconds.
    /// Zero for empty and single-frame recordings.
    pub fn duration(&self) -> f32 {
        match (self.frames.first(), self.frames.last()) {
            (Some(first), Some(last)) => (last.time - first.time).max(0.0),
            _ => 0.0,
        }
    }

    /// Validate the ordering/normalization invariants.
    /// The loader establishes them; this exists for callers that construct
    /// recordings directly.
    pub fn validate_basic(&self) -> Result<(), String> {
        if let Some(first) = self.frames.first() {
            if first.time != 0.0 {
                return Err(format!(
                    "Recording must start at time 0, first frame is at {}",
                    first.time
                ));
            }
        }
        let mut last = f32::NEG_INFINITY;
        for frame in &self.frames {
            if !frame.time.is_finite() {
                return Err(format!("Frame timestamp must be finite, got {}", frame.time));
            }
            if frame.time < last {
                return Err(format!(
                    "Frame timestamps must be non-decreasing, {} follows {}",
                    frame.time, last
                ));
            }
            last = frame.time;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_of_empty_and_single_frame() {
        assert_eq!(Recording::default().duration(), 0.0);
        let single = Recording::new(vec![Frame::new(0.0, vec![])]);
        assert_eq!(single.duration(), 0.0);
    }

    #[test]
    fn duration_spans_first_to_last() {
        let rec = Recording::new(vec![
            Frame::new(0.0, vec![]),
            Frame::new(0.5, vec![]),
            Frame::new(2.0, vec![]),
        ]);
        assert_eq!(rec.duration(), 2.0);
    }

    #[test]
    fn validate_rejects_unsorted_and_nonzero_start() {
        let unsorted = Recording::new(vec![Frame::new(0.0, vec![]), Frame::new(-1.0, vec![])]);
        assert!(unsorted.validate_basic().is_err());

        let shifted = Recording::new(vec![Frame::new(1.0, vec![]), Frame::new(2.0, vec![])]);
        assert!(shifted.validate_basic().is_err());
    }

    #[test]
    fn orientation_components_are_independent() {
        let mut j = Joint::new("wrist", 0.0, 0.0, 0.0);
        assert!(!j.has_orientation());
        j.oy = Some(0.5);
        assert!(j.has_orientation());
        assert!(j.ox.is_none() && j.oz.is_none() && j.ow.is_none());
    }
}
