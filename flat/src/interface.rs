//! Buffer types and binding constants a host must match to drive the shaders.

use vulkano::{buffer::BufferContents, pipeline::graphics::vertex_input::Vertex};

/// Location of the `position` vertex attribute in both vertex variants.
pub const POSITION_LOCATION: u32 = 0;

/// Descriptor set holding the aspect-ratio uniform of `aspect_vs`.
pub const ASPECT_SET: u32 = 0;

/// Binding of the aspect-ratio uniform within [`ASPECT_SET`].
pub const ASPECT_BINDING: u32 = 0;

/// Location of the color output written by both fragment variants.
pub const COLOR_LOCATION: u32 = 0;

/// Per-vertex input: a 2D position, read once per invocation.
#[derive(BufferContents, Vertex)]
#[repr(C)]
pub struct PlanarVertex {
    #[format(R32G32_SFLOAT)]
    pub position: [f32; 2],
}

/// Uniform-buffer counterpart of `flat_shader::AspectRatio`, shared read-only
/// across all vertex invocations of a draw call.
#[derive(BufferContents)]
#[repr(C)]
pub struct AspectUniform {
    pub aspect_ratio: f32,
}
