//! Shader compilation orchestration — source text in, GLSL program pair out.

use crate::analyzer::{self, Stage};
use crate::codegen::{self, PIXEL_STAGE_BINDINGS, VERTEX_INPUT_BINDINGS};
use crate::template::{substitute, Definitions};
use prism_core::{PrismError, PrismResult};
use serde::{Deserialize, Serialize};

/// Vertex stage output template. Process-wide immutable constant.
pub const VERTEX_TEMPLATE: &str = include_str!("templates/vertex.glsl");

/// Pixel stage output template. Process-wide immutable constant.
pub const PIXEL_TEMPLATE: &str = include_str!("templates/pixel.glsl");

/// Built-in shader description: textured quad with diffuse tint. Also the
/// source of the fallback vertex function when a description omits its own.
pub const DEFAULT_SOURCE: &str = include_str!("shaders/default.prism");

/// The fixed 4-component color type every pixel shader must return.
pub const COLOR_TYPE: &str = "vec4";

/// A fully compiled shader pair, one complete GLSL program per stage. Never
/// partially populated: compilation either produces both texts or fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledShaderPair {
    pub vertex_source: String,
    pub pixel_source: String,
}

/// Compile a shader description into a vertex/pixel GLSL program pair.
///
/// Pure and deterministic: re-invoking with unchanged input reproduces the
/// identical pair or the identical failure. The vertex function may be
/// absent (the built-in default is substituted); the pixel function is
/// mandatory.
pub fn compile_shader(source: &str) -> PrismResult<CompiledShaderPair> {
    let definitions = build_definitions(source)?;
    Ok(CompiledShaderPair {
        vertex_source: substitute(VERTEX_TEMPLATE, &definitions),
        pixel_source: substitute(PIXEL_TEMPLATE, &definitions),
    })
}

/// Run extraction, validation, and synthesis for a shader description and
/// assemble the full definitions mapping the two templates are substituted
/// with. The map is the single source of the placeholder key set.
pub fn build_definitions(source: &str) -> PrismResult<Definitions> {
    let vertex = match analyzer::extract_function(source, Stage::Vertex) {
        Some(block) => block,
        None => analyzer::extract_function(DEFAULT_SOURCE, Stage::Vertex).ok_or_else(|| {
            PrismError::Compile("built-in default source has no vertex function".to_string())
        })?,
    };
    let pixel = analyzer::extract_function(source, Stage::Pixel)
        .ok_or(PrismError::MissingPixelFunction)?;

    let vertex_input_type = vertex.input_type.clone().ok_or_else(|| {
        PrismError::Compile("vertex shader function requires an input parameter".to_string())
    })?;
    // A pixel function without an input parameter can never match the vertex
    // output type.
    let pixel_input_type = pixel.input_type.as_deref().unwrap_or("void").to_string();
    if pixel_input_type != vertex.output_type {
        return Err(PrismError::TypeMismatch {
            vertex_output: vertex.output_type.clone(),
            pixel_input: pixel_input_type,
        });
    }
    if pixel.output_type != COLOR_TYPE {
        return Err(PrismError::InvalidPixelOutput(pixel.output_type.clone()));
    }

    // Struct lookup is always against the input text, even when the vertex
    // stage fell back to the default function.
    let vertex_struct = analyzer::extract_struct(source, &vertex_input_type)
        .ok_or_else(|| PrismError::UndefinedStruct(vertex_input_type.clone()))?;
    let pixel_struct = analyzer::extract_struct(source, &pixel_input_type)
        .ok_or_else(|| PrismError::UndefinedStruct(pixel_input_type.clone()))?;

    let vertex_code = codegen::synthesize_struct(&vertex_struct, &VERTEX_INPUT_BINDINGS);
    let pixel_code = codegen::synthesize_struct(&pixel_struct, &PIXEL_STAGE_BINDINGS);

    let vertex_uniforms =
        codegen::uniform_declarations(&analyzer::extract_uniform_block(source, Stage::Vertex));
    let pixel_uniforms =
        codegen::uniform_declarations(&analyzer::extract_uniform_block(source, Stage::Pixel));

    tracing::debug!(
        "compiling shader: vertex input '{}', inter-stage struct '{}'",
        vertex_struct.name,
        pixel_struct.name
    );

    let mut definitions = Definitions::new();
    definitions.insert("VertexShaderCode", vertex.text);
    definitions.insert("PixelShaderCode", pixel.text);
    definitions.insert("VertexStruct", vertex_code.declaration);
    definitions.insert("PixelStruct", pixel_code.declaration);
    definitions.insert("VertexStructAssign", vertex_code.forward_assign);
    definitions.insert("PixelStructAssign", pixel_code.forward_assign);
    definitions.insert("PixelStructAssignInverted", pixel_code.reverse_assign);
    definitions.insert("VertexVaryings", vertex_code.varying_declarations);
    definitions.insert("PixelVaryings", pixel_code.varying_declarations);
    definitions.insert("VertexStructName", vertex_struct.name);
    definitions.insert("PixelStructName", pixel_struct.name);
    definitions.insert("VertexVaryingsAssign", vertex_code.varying_assignments);
    definitions.insert("PixelVaryingsAssign", pixel_code.varying_assignments);
    definitions.insert("PixelStructLoad", pixel_code.varying_loads);
    definitions.insert("VertexUniforms", vertex_uniforms);
    definitions.insert("PixelUniforms", pixel_uniforms);

    Ok(definitions)
}

/// Compile the built-in default shader description.
pub fn compile_default() -> PrismResult<CompiledShaderPair> {
    compile_shader(DEFAULT_SOURCE)
}
