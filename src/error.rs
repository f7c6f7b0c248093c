//! Error types for Cobweb.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Cobweb operations.
pub type Result<T> = std::result::Result<T, CobwebError>;

/// Errors that can occur in Cobweb.
///
/// The trajectory generator itself never fails; these errors come from
/// validating user input before it reaches the generator.
#[derive(Debug, Error)]
pub enum CobwebError {
    /// Iteration count text is not a non-negative integer.
    #[error("Invalid iteration count: '{input}' is not a non-negative integer")]
    InvalidIterationCount {
        /// Text as given.
        input: String,
    },

    /// Iteration count outside the slider bounds.
    #[error("Iteration count {value} out of range [{min}, {max}]")]
    IterationsOutOfRange {
        /// Requested count.
        value: usize,
        /// Lower bound.
        min: usize,
        /// Upper bound.
        max: usize,
    },

    /// Growth rate text is not a finite number.
    #[error("Invalid growth rate: '{input}' is not a finite number")]
    InvalidGrowthRate {
        /// Text as given.
        input: String,
    },

    /// Growth rate outside the slider bounds.
    #[error("Growth rate {value} out of range [{min}, {max}]")]
    GrowthRateOutOfRange {
        /// Requested rate.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// Curve sample count too small to draw a line.
    #[error("Sample count {value} is below the minimum of {min}")]
    TooFewSamples {
        /// Requested sample count.
        value: usize,
        /// Smallest accepted count.
        min: usize,
    },
}

impl CobwebError {
    /// Create an InvalidIterationCount error.
    pub fn invalid_iteration_count(input: impl Into<String>) -> Self {
        Self::InvalidIterationCount {
            input: input.into(),
        }
    }

    /// Create an InvalidGrowthRate error.
    pub fn invalid_growth_rate(input: impl Into<String>) -> Self {
        Self::InvalidGrowthRate {
            input: input.into(),
        }
    }
}
