//! GLSL source renditions of the four stages, for hosts that compile GLSL
//! (vulkano-shaders, shaderc, naga) instead of consuming SPIR-V directly.
//! The interface declared here is identical to the rust-gpu entry points.

/// Vertex stage scaling x by the aspect-ratio uniform at set 0, binding 0.
pub const VERTEX_ASPECT: &str = r"
    #version 460

    layout(location = 0) in vec2 position;

    layout(set = 0, binding = 0) uniform Aspect {
        float aspect_ratio;
    };

    void main() {
        gl_Position = vec4(position.x * aspect_ratio, position.y, 0.0, 1.0);
    }
";

/// Vertex stage copying the 2D position straight into clip space.
pub const VERTEX_PASSTHROUGH: &str = r"
    #version 460

    layout(location = 0) in vec2 position;

    void main() {
        gl_Position = vec4(position, 0.0, 1.0);
    }
";

/// Fragment stage emitting opaque white.
pub const FRAGMENT_WHITE: &str = r"
    #version 460

    layout(location = 0) out vec4 f_color;

    void main() {
        f_color = vec4(1.0, 1.0, 1.0, 1.0);
    }
";

/// Fragment stage emitting opaque red.
pub const FRAGMENT_RED: &str = r"
    #version 460

    layout(location = 0) out vec4 f_color;

    void main() {
        f_color = vec4(1.0, 0.0, 0.0, 1.0);
    }
";
