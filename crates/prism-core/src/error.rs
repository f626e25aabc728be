//! Core error types for the Prism renderer.

/// A specialized Result type for Prism operations.
pub type PrismResult<T> = Result<T, PrismError>;

/// Top-level error type encompassing all Prism subsystems.
///
/// Every shader compilation failure is fatal to that compile call and
/// produces no output; callers must never consume a partially built shader
/// pair.
#[derive(Debug, thiserror::Error)]
pub enum PrismError {
    /// The mandatory pixel shader function is absent from the source text.
    #[error("pixel shader function not found in source")]
    MissingPixelFunction,

    /// A struct name referenced by a shader function has no definition.
    #[error("no struct definition found for '{0}'")]
    UndefinedStruct(String),

    /// The vertex shader output type does not match the pixel shader input
    /// type.
    #[error("vertex shader output type '{vertex_output}' does not match pixel shader input type '{pixel_input}'")]
    TypeMismatch {
        vertex_output: String,
        pixel_input: String,
    },

    /// The pixel shader does not return the fixed color type.
    #[error("pixel shader must return 'vec4', found '{0}'")]
    InvalidPixelOutput(String),

    /// A uniform kind tag outside the closed set of supported kinds.
    #[error("unknown uniform kind: '{0}'")]
    UnknownUniformKind(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("compile error: {0}")]
    Compile(String),
}
