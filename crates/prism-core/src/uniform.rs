//! Uniform value types for the renderer's "set named uniform value"
//! interface.
//!
//! A compiled shader pair declares its uniforms by name; for every draw the
//! renderer supplies each one through this closed set of kinds. The set is
//! exhaustive on purpose: an unrecognized kind tag is a typed failure, not a
//! silent no-op.

use crate::color::Color;
use crate::error::PrismError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of uniform kinds a shader program can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UniformKind {
    Float,
    Int,
    Bool,
    Vec2,
    Vec3,
    Vec4,
    Matrix,
    Texture,
}

impl fmt::Display for UniformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UniformKind::Float => "float",
            UniformKind::Int => "int",
            UniformKind::Bool => "bool",
            UniformKind::Vec2 => "vec2",
            UniformKind::Vec3 => "vec3",
            UniformKind::Vec4 => "vec4",
            UniformKind::Matrix => "matrix",
            UniformKind::Texture => "texture",
        };
        write!(f, "{name}")
    }
}

impl FromStr for UniformKind {
    type Err = PrismError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "float" => Ok(UniformKind::Float),
            "int" => Ok(UniformKind::Int),
            "bool" => Ok(UniformKind::Bool),
            "vec2" => Ok(UniformKind::Vec2),
            "vec3" => Ok(UniformKind::Vec3),
            "vec4" => Ok(UniformKind::Vec4),
            "matrix" => Ok(UniformKind::Matrix),
            "texture" => Ok(UniformKind::Texture),
            other => Err(PrismError::UnknownUniformKind(other.to_string())),
        }
    }
}

/// A uniform value, tagged with its kind. One case per [`UniformKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum UniformValue {
    Float(f32),
    Int(i32),
    Bool(bool),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Vec4([f32; 4]),
    /// Column-major 4x4 matrix.
    Matrix([f32; 16]),
    /// Texture unit index.
    Texture(u32),
}

impl UniformValue {
    /// The kind tag of this value.
    pub fn kind(&self) -> UniformKind {
        match self {
            UniformValue::Float(_) => UniformKind::Float,
            UniformValue::Int(_) => UniformKind::Int,
            UniformValue::Bool(_) => UniformKind::Bool,
            UniformValue::Vec2(_) => UniformKind::Vec2,
            UniformValue::Vec3(_) => UniformKind::Vec3,
            UniformValue::Vec4(_) => UniformKind::Vec4,
            UniformValue::Matrix(_) => UniformKind::Matrix,
            UniformValue::Texture(_) => UniformKind::Texture,
        }
    }
}

impl From<Color> for UniformValue {
    fn from(color: Color) -> Self {
        UniformValue::Vec4(color.to_array())
    }
}
