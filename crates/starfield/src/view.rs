//! Render boundary: packed per-star instance data for the presentation
//! layer. The simulation owns no GPU resources; the renderer reads these
//! records plus the shared display size and the camera pose.

use crate::field::StarField;
use bytemuck::{Pod, Zeroable};

/// One star as the renderer consumes it.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct StarInstance {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Pack the whole field into `out`, reusing its allocation. Call once per
/// frame with a scratch buffer owned by the caller.
pub fn fill_instances(field: &StarField, out: &mut Vec<StarInstance>) {
    out.clear();
    out.reserve(field.len());
    for i in 0..field.len() {
        out.push(StarInstance {
            position: field.position(i).to_array(),
            color: field.color(i).to_array(),
        });
    }
}
