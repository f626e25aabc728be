//! # prism-shader
//!
//! The Prism shader description compiler.
//!
//! Takes a single textual shader description containing a vertex-stage
//! function, a pixel-stage function, their input/output record structs, and
//! optional uniform blocks, and produces two complete GLSL programs for the
//! fixed two-stage pipeline. Compilation is a pure function of the input
//! text: no caching, no shared state, identical input always yields an
//! identical pair or the identical failure.

pub mod analyzer;
pub mod codegen;
pub mod compiler;
pub mod gradient;
pub mod model;
pub mod template;

pub use analyzer::{FunctionBlock, Stage, UniformBlock};
pub use compiler::{compile_default, compile_shader, CompiledShaderPair};
pub use gradient::{gradient, GradientShader};
pub use model::{Field, StructDefinition};
