//! Per-joint blending policy for a pair of bracket frames.
//!
//! Policy (reproduced exactly from the recorded-viewer behavior):
//! - joints present in both frames: componentwise position lerp,
//! - joints present only in the earlier frame: held at their last value,
//! - joints present only in the later frame: dropped until the query time
//!   reaches that frame,
//! - orientation is never interpolated; the earlier frame's components are
//!   carried through unchanged (piecewise-constant orientation, continuous
//!   position).

use std::collections::HashMap;

use crate::data::{Frame, Joint};

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
    ]
}

/// Produce the joint set for a frame between `f0` (earlier) and `f1` (later)
/// at blend parameter `dt`. Output order is `f0`'s insertion order.
pub fn blend_joints(f0: &Frame, f1: &Frame, dt: f32) -> Vec<Joint> {
    let later: HashMap<&str, &Joint> = f1.joints.iter().map(|j| (j.name.as_str(), j)).collect();

    let mut out = Vec::with_capacity(f0.joints.len());
    for j0 in &f0.joints {
        match later.get(j0.name.as_str()) {
            Some(j1) => {
                let [px, py, pz] = lerp_vec3(j0.position(), j1.position(), dt);
                out.push(Joint {
                    name: j0.name.clone(),
                    px,
                    py,
                    pz,
                    // Orientation holds the earlier value; never a blend.
                    ox: j0.ox,
                    oy: j0.oy,
                    oz: j0.oz,
                    ow: j0.ow,
                });
            }
            // Joint disappeared from the later frame: stationary, not removed.
            None => out.push(j0.clone()),
        }
    }
    // Joints that exist only in f1 are intentionally omitted.
    out
}
