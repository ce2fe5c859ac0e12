//! Foundation types for Trellis.
//!
//! This crate contains the toolkit-agnostic value types shared by all Trellis
//! crates: geometry, colors, key events, configuration, and error types.

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;

pub use color::Color;
pub use geometry::{Position, Size};
