//! Selection configuration for the top-N report.
//!
//! This module defines the threshold ratio and result limit used by the
//! selector, along with the parsers that validate them.

use anyhow::{Result, bail};

/// Default dominance threshold.
pub const DEFAULT_THRESHOLD: f64 = 0.9;

/// Default number of results.
pub const DEFAULT_TOP: usize = 20;

/// Configuration for the top-N selection.
///
/// Passed explicitly down the recursion so the selector has no ambient state.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SelectOptions {
    /// Ratio in the open interval (0.0, 1.0). A child whose total exceeds
    /// `threshold * parent total` is dominant and excludes its parent.
    pub threshold: f64,

    /// Maximum number of results (0 = no limit)
    pub limit: usize,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            limit: DEFAULT_TOP,
        }
    }
}

impl SelectOptions {
    /// Build validated selection options.
    ///
    /// # Errors
    ///
    /// Returns an error if `threshold` is not strictly between 0.0 and 1.0.
    pub fn new(threshold: f64, limit: usize) -> Result<Self> {
        Ok(Self {
            threshold: check_threshold(threshold)?,
            limit,
        })
    }
}

/// Ensure a threshold lies in the open interval (0.0, 1.0).
///
/// # Errors
///
/// Returns an error for values outside the interval, including NaN.
pub fn check_threshold(threshold: f64) -> Result<f64> {
    if threshold > 0.0 && threshold < 1.0 {
        Ok(threshold)
    } else {
        bail!("Threshold not in range (0.0 - 1.0): {threshold}")
    }
}

/// Parse a threshold argument such as `"0.75"`.
///
/// # Errors
///
/// Returns an error if the string is not a float or is out of range.
pub fn parse_threshold(value: &str) -> Result<f64> {
    let threshold: f64 = value
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid threshold '{value}': {e}"))?;

    check_threshold(threshold)
}

/// Parse a result count argument; it must be a positive integer.
///
/// # Errors
///
/// Returns an error if the string is not an integer or is not greater than 0.
pub fn parse_top(value: &str) -> Result<usize> {
    let top: i64 = value
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid count '{value}': {e}"))?;

    if top <= 0 {
        bail!("N must be greater than 0.");
    }

    Ok(usize::try_from(top)?)
}
