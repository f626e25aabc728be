//! # prism-core
//!
//! Core types and primitives for the Prism renderer.
//! This crate contains foundational types shared across all Prism crates:
//! colors, uniform values, and error types.

pub mod color;
pub mod error;
pub mod uniform;

pub use color::Color;
pub use error::{PrismError, PrismResult};
pub use uniform::{UniformKind, UniformValue};
