//! Source analysis — locating function blocks, struct blocks, and uniform
//! blocks in the raw shader description text.
//!
//! The accepted grammar is deliberately shallow: a function body runs from
//! its opening brace to the first closing brace, so bodies containing nested
//! brace pairs are not guaranteed to match. This matches the grammar the
//! bundled shaders are written against and is part of the compiler's
//! observable acceptance behavior.

use crate::model::{self, StructDefinition};
use serde::{Deserialize, Serialize};

/// One of the two pipeline phases a compiled program targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Vertex,
    Pixel,
}

impl Stage {
    /// Name of the stage entry function in the shader description.
    pub fn function_name(&self) -> &'static str {
        match self {
            Stage::Vertex => "vertexShaderFunction",
            Stage::Pixel => "pixelShaderFunction",
        }
    }

    /// Name of the stage's optional uniform block struct.
    pub fn uniform_struct_name(&self) -> &'static str {
        match self {
            Stage::Vertex => "VertexUniforms",
            Stage::Pixel => "PixelUniforms",
        }
    }
}

/// A stage entry function extracted from the source text. `text` is the
/// complete function definition, re-emitted verbatim into the generated
/// program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionBlock {
    pub stage: Stage,
    pub output_type: String,
    pub input_type: Option<String>,
    pub text: String,
}

/// A per-stage uniform block. Absence of the block in the source yields an
/// empty field list, never a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniformBlock {
    pub stage: Stage,
    pub fields: Vec<model::Field>,
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Locate the first `<ReturnType> <stageFunctionName>(<params>) { <body> }`
/// occurrence for the given stage.
///
/// The return type must be a single word separated from the function name by
/// exactly one space; parameters run to the first `)`; the body runs to the
/// first `}`. Vertex functions must declare a parameter list with at least
/// one character, pixel functions may have empty parentheses.
pub fn extract_function(source: &str, stage: Stage) -> Option<FunctionBlock> {
    let name = stage.function_name();
    let bytes = source.as_bytes();

    for (idx, _) in source.match_indices(name) {
        if bytes.get(idx + name.len()) != Some(&b'(') {
            continue;
        }
        if idx == 0 || bytes[idx - 1] != b' ' {
            continue;
        }

        // Return type: the word run immediately before the space.
        let mut ty_start = idx - 1;
        while ty_start > 0 && is_word_byte(bytes[ty_start - 1]) {
            ty_start -= 1;
        }
        if ty_start == idx - 1 {
            continue;
        }
        let output_type = &source[ty_start..idx - 1];

        let params_start = idx + name.len() + 1;
        let params_end = params_start + source[params_start..].find(')')?;
        let params = &source[params_start..params_end];
        if stage == Stage::Vertex && params.is_empty() {
            continue;
        }

        let mut brace = params_end + 1;
        while brace < bytes.len() && bytes[brace].is_ascii_whitespace() {
            brace += 1;
        }
        if bytes.get(brace) != Some(&b'{') {
            continue;
        }
        let close = brace + 1 + source[brace + 1..].find('}')?;
        if close == brace + 1 {
            continue;
        }

        // The parameter is `<Type> <name>`; only the type participates in
        // cross-stage validation.
        let mut tokens = params.split_whitespace();
        let input_type = match (tokens.next(), tokens.next()) {
            (Some(ty), Some(_)) => Some(ty.to_string()),
            _ => None,
        };

        return Some(FunctionBlock {
            stage,
            output_type: output_type.to_string(),
            input_type,
            text: source[ty_start..=close].to_string(),
        });
    }
    None
}

/// Locate `struct <name> { <body> }` and return the raw body text (up to the
/// first closing brace, exclusive).
fn find_struct_body<'a>(source: &'a str, name: &str) -> Option<&'a str> {
    let pattern = format!("struct {name}");
    for (idx, _) in source.match_indices(&pattern) {
        let rest = &source[idx + pattern.len()..];
        let bytes = rest.as_bytes();
        // Reject prefix hits: `struct VSOut` inside `struct VSOutput`.
        if bytes.first().copied().is_some_and(is_word_byte) {
            continue;
        }
        let mut i = 0;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if bytes.get(i) != Some(&b'{') {
            continue;
        }
        let body_start = i + 1;
        let close = rest[body_start..].find('}')?;
        if close == 0 {
            continue;
        }
        return Some(&rest[body_start..body_start + close]);
    }
    None
}

/// Locate and parse the struct definition with the given name. Malformed
/// field declarations inside the body are dropped, not reported.
pub fn extract_struct(source: &str, name: &str) -> Option<StructDefinition> {
    let body = find_struct_body(source, name)?;
    let parsed = model::parse_struct_body(body);
    for skipped in &parsed.skipped {
        tracing::debug!("dropping malformed field declaration in '{}': {}", name, skipped);
    }
    Some(StructDefinition {
        name: name.to_string(),
        fields: parsed.fields,
    })
}

/// Parse the stage's optional uniform block.
pub fn extract_uniform_block(source: &str, stage: Stage) -> UniformBlock {
    let fields = match find_struct_body(source, stage.uniform_struct_name()) {
        Some(body) => model::parse_struct_body(body).fields,
        None => Vec::new(),
    };
    UniformBlock { stage, fields }
}
