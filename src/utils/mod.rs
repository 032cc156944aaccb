//! Utility functions and helpers.
//!
//! This module contains helpers used throughout the application, such as the
//! byte-count formatter for the line output.

pub mod size;

pub use size::format_bytes;
