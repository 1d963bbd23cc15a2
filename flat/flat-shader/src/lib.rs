//! Flat-color 2D shaders: two vertex variants that lift a 2D position into
//! clip space (one with aspect-ratio correction, one plain pass-through) and
//! two fragment variants that emit a constant color.
//!
//! The entry points compile to SPIR-V with rust-gpu (target
//! `spirv-unknown-vulkan1.2`). Off the spirv target they are ordinary Rust
//! functions, so the shading math runs and tests on the host CPU.
#![cfg_attr(target_arch = "spirv", no_std)]

use bytemuck::{Pod, Zeroable};
use spirv_std::glam::{vec4, Vec2, Vec4};
use spirv_std::spirv;

/// Uniform block at descriptor set 0, binding 0. The host updates it between
/// frames; it is immutable for the duration of a draw call.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct AspectRatio {
    pub ratio: f32,
}

pub const WHITE: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);
pub const RED: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);

/// Clip-space position with the x component scaled by the aspect ratio.
pub fn corrected_position(position: Vec2, ratio: f32) -> Vec4 {
    vec4(position.x * ratio, position.y, 0.0, 1.0)
}

/// Clip-space position with x and y copied through unchanged.
pub fn clip_position(position: Vec2) -> Vec4 {
    position.extend(0.0).extend(1.0)
}

#[spirv(vertex)]
pub fn aspect_vs(
    position: Vec2,
    #[spirv(uniform, descriptor_set = 0, binding = 0)] aspect: &AspectRatio,
    #[spirv(position, invariant)] out_pos: &mut Vec4,
) {
    *out_pos = corrected_position(position, aspect.ratio);
}

#[spirv(vertex)]
pub fn passthrough_vs(position: Vec2, #[spirv(position, invariant)] out_pos: &mut Vec4) {
    *out_pos = clip_position(position);
}

#[spirv(fragment)]
pub fn white_fs(output: &mut Vec4) {
    *output = WHITE;
}

#[spirv(fragment)]
pub fn red_fs(output: &mut Vec4) {
    *output = RED;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use spirv_std::glam::vec2;

    proptest! {
        #[test]
        fn corrected_scales_x_only(x in -10.0f32..10.0, y in -10.0f32..10.0, a in 0.1f32..10.0) {
            let out = corrected_position(vec2(x, y), a);
            prop_assert_eq!(out, vec4(x * a, y, 0.0, 1.0));
        }

        #[test]
        fn passthrough_copies_xy(x in -10.0f32..10.0, y in -10.0f32..10.0) {
            let out = clip_position(vec2(x, y));
            prop_assert_eq!(out, vec4(x, y, 0.0, 1.0));
        }

        #[test]
        fn unit_ratio_matches_passthrough(x in -10.0f32..10.0, y in -10.0f32..10.0) {
            let pos = vec2(x, y);
            prop_assert_eq!(corrected_position(pos, 1.0), clip_position(pos));
        }
    }

    #[test]
    fn vertex_entry_points_write_position_builtin() {
        let mut out = Vec4::ZERO;
        aspect_vs(vec2(0.5, -0.25), &AspectRatio { ratio: 2.0 }, &mut out);
        assert_eq!(out, vec4(1.0, -0.25, 0.0, 1.0));

        passthrough_vs(vec2(0.5, -0.25), &mut out);
        assert_eq!(out, vec4(0.5, -0.25, 0.0, 1.0));
    }

    #[test]
    fn fragment_entry_points_emit_constants() {
        let mut out = Vec4::ZERO;
        white_fs(&mut out);
        assert_eq!(out, vec4(1.0, 1.0, 1.0, 1.0));

        red_fs(&mut out);
        assert_eq!(out, vec4(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn aspect_ratio_is_one_plain_float() {
        assert_eq!(core::mem::size_of::<AspectRatio>(), 4);
        let bytes = 1.5f32.to_ne_bytes();
        assert_eq!(bytemuck::bytes_of(&AspectRatio { ratio: 1.5 }), bytes.as_slice());
    }
}
