//! Host-side contract for the flat-color 2D shader pair.
//!
//! The shaders themselves live in the `flat-shader` crate. This crate carries
//! what a rendering host needs to bind them: the vertex and uniform buffer
//! types, the attribute/binding constants, GLSL source renditions of the same
//! four stages, and the SPIR-V word preparation done before shader-module
//! creation. Everything past that point — device, pipeline, render pass,
//! presentation — belongs to the host.

pub mod glsl;
pub mod interface;
pub mod module;

pub use flat_shader::{AspectRatio, RED, WHITE};
pub use interface::{AspectUniform, PlanarVertex};
pub use module::{spirv_words, ModuleError};
