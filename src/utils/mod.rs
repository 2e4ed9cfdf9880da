//! Utility functions and helpers

pub mod color;
pub mod text;
