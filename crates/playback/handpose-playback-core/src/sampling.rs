//! Frame sampling: bracket lookup plus blending.
//!
//! Model:
//! - A `Recording` holds frames sorted by non-decreasing timestamp.
//! - `sample` locates the two frames bracketing a query time with a binary
//!   search (O(log n)), computes the local blend parameter, and delegates the
//!   joint set to `blend::blend_joints`.
//! - Outside the recorded range the nearest end frame is returned verbatim,
//!   with no blending.

use crate::blend::blend_joints;
use crate::data::{Frame, Recording};

/// Floor for the bracket span to avoid division by zero when adjacent frame
/// timestamps coincide; the blend parameter then resolves to 0.
const MIN_SPAN: f32 = 1e-9;

/// Find the bracketing pair `(lo, hi = lo + 1)` for an interior query time,
/// assuming `frames[0].time < t < frames[last].time`.
///
/// Narrows `[lo, hi]` until adjacent, at each step keeping
/// `frames[lo].time <= t`. At a tied timestamp the lower bracket lands on
/// the last equal frame, so the blend parameter is 0 there.
fn find_bracket(frames: &[Frame], t: f32) -> (usize, usize) {
    let mut lo = 0usize;
    let mut hi = frames.len() - 1;
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if frames[mid].time <= t {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    (lo, hi)
}

/// Sample the recording at time `t`, producing a frame stamped with `t`.
///
/// Edge cases:
/// - empty recording: degenerate frame at time 0 with no joints,
/// - `t` at or before the first frame: first frame verbatim,
/// - `t` at or after the last frame: last frame verbatim.
pub fn sample(recording: &Recording, t: f32) -> Frame {
    let frames = &recording.frames;
    let n = frames.len();
    if n == 0 {
        return Frame::empty();
    }
    if t <= frames[0].time || n == 1 {
        return frames[0].clone();
    }
    if t >= frames[n - 1].time {
        return frames[n - 1].clone();
    }

    let (lo, hi) = find_bracket(frames, t);
    let f0 = &frames[lo];
    let f1 = &frames[hi];
    let span = (f1.time - f0.time).max(MIN_SPAN);
    let dt = (t - f0.time) / span;

    Frame::new(t, blend_joints(f0, f1, dt))
}

/// Convenience passthrough mirroring the controller surface.
#[inline]
pub fn duration(recording: &Recording) -> f32 {
    recording.duration()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames_at(times: &[f32]) -> Vec<Frame> {
        times.iter().map(|&t| Frame::new(t, vec![])).collect()
    }

    #[test]
    fn bracket_keeps_lower_bound_at_or_below_query() {
        let frames = frames_at(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        for (t, want) in [(0.5, (0, 1)), (1.0, (1, 2)), (2.7, (2, 3)), (3.9, (3, 4))] {
            assert_eq!(find_bracket(&frames, t), want, "t={t}");
        }
    }

    #[test]
    fn bracket_handles_duplicate_timestamps() {
        // Two frames share t=1.0. The search invariant (lo moves while
        // frames[mid].time <= t) keeps the blend parameter at 0 across the
        // tie, so the query resolves to a frame's own values, never a blend
        // across a zero-length span.
        let frames = frames_at(&[0.0, 1.0, 1.0, 2.0]);
        let (lo, hi) = find_bracket(&frames, 1.0);
        assert_eq!(hi, lo + 1);
        assert!(frames[lo].time <= 1.0);
        assert!((1.0 - frames[lo].time).abs() < f32::EPSILON);

        // Just past the tie the bracket spans the gap to the next frame.
        let (lo2, hi2) = find_bracket(&frames, 1.5);
        assert_eq!((lo2, hi2), (2, 3));
    }
}
