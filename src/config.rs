//! View configuration for the plots.

use crate::error::{CobwebError, Result};
use crate::sampling::DEFAULT_CURVE_SAMPLES;

/// Fewest curve samples that still draw a line.
pub const MIN_CURVE_SAMPLES: usize = 2;

/// Configuration for chart rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    /// Number of samples for the map curve and diagonal.
    pub curve_samples: usize,
    /// Fraction of the data span added on each side of the axes.
    pub axis_padding_factor: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            curve_samples: DEFAULT_CURVE_SAMPLES,
            axis_padding_factor: 0.05, // 5% margin so lines don't touch the frame
        }
    }
}

impl ViewConfig {
    /// Override the curve sample count.
    pub fn with_curve_samples(mut self, samples: usize) -> Result<Self> {
        if samples < MIN_CURVE_SAMPLES {
            return Err(CobwebError::TooFewSamples {
                value: samples,
                min: MIN_CURVE_SAMPLES,
            });
        }
        self.curve_samples = samples;
        Ok(self)
    }
}
