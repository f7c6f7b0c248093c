//! Slider parameters and input validation.
//!
//! The generator in [`crate::logistic`] accepts any input. Everything that
//! reaches it from the user goes through here first, so the iteration count
//! and growth rate always stay inside the slider bounds.

use crate::error::{CobwebError, Result};

/// Fixed initial state of every trajectory.
pub const INITIAL_STATE: f64 = 0.1;

/// Smallest selectable iteration count.
pub const MIN_ITERATIONS: usize = 2;
/// Largest selectable iteration count.
pub const MAX_ITERATIONS: usize = 100;
/// Iteration count on startup.
pub const DEFAULT_ITERATIONS: usize = 20;

/// Smallest selectable growth rate.
pub const MIN_GROWTH_RATE: f64 = 0.95;
/// Largest selectable growth rate.
pub const MAX_GROWTH_RATE: f64 = 4.0;
/// Growth rate on startup.
pub const DEFAULT_GROWTH_RATE: f64 = 2.0;
/// Growth rate slider step.
pub const GROWTH_RATE_STEP: f64 = 0.02;

/// Which slider has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    /// Iteration count slider.
    #[default]
    Iterations,
    /// Growth rate slider.
    GrowthRate,
}

impl Control {
    /// Get the other control.
    pub fn next(self) -> Self {
        match self {
            Control::Iterations => Control::GrowthRate,
            Control::GrowthRate => Control::Iterations,
        }
    }

    /// Get the control label.
    pub fn name(self) -> &'static str {
        match self {
            Control::Iterations => "Iterations",
            Control::GrowthRate => "Growth rate (r)",
        }
    }
}

/// Current slider values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    iterations: usize,
    growth_rate: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            growth_rate: DEFAULT_GROWTH_RATE,
        }
    }
}

impl Parameters {
    /// Create parameters, rejecting values outside the slider bounds.
    pub fn new(iterations: usize, growth_rate: f64) -> Result<Self> {
        Ok(Self {
            iterations: check_iterations(iterations)?,
            growth_rate: check_growth_rate(growth_rate)?,
        })
    }

    /// Number of map applications.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Growth rate `r`.
    pub fn growth_rate(&self) -> f64 {
        self.growth_rate
    }

    /// Initial state `x_0`.
    pub fn initial_state(&self) -> f64 {
        INITIAL_STATE
    }

    /// Move the iteration slider by `delta` steps. Returns `true` if the value changed.
    pub fn step_iterations(&mut self, delta: i64) -> bool {
        let target = (self.iterations as i64).saturating_add(delta);
        let clamped = target.clamp(MIN_ITERATIONS as i64, MAX_ITERATIONS as i64) as usize;
        let changed = clamped != self.iterations;
        self.iterations = clamped;
        changed
    }

    /// Move the growth-rate slider by `steps` steps. Returns `true` if the value changed.
    ///
    /// The result is rounded to two decimals so repeated steps never drift
    /// off the slider grid.
    pub fn step_growth_rate(&mut self, steps: i64) -> bool {
        let target = self.growth_rate + steps as f64 * GROWTH_RATE_STEP;
        let rounded = (target * 100.0).round() / 100.0;
        let clamped = rounded.clamp(MIN_GROWTH_RATE, MAX_GROWTH_RATE);
        let changed = clamped != self.growth_rate;
        self.growth_rate = clamped;
        changed
    }

    /// Move whichever slider `control` names.
    pub fn step(&mut self, control: Control, steps: i64) -> bool {
        match control {
            Control::Iterations => self.step_iterations(steps),
            Control::GrowthRate => self.step_growth_rate(steps),
        }
    }

    /// Slider position of `control` as a ratio in `[0, 1]`.
    pub fn ratio(&self, control: Control) -> f64 {
        let ratio = match control {
            Control::Iterations => {
                (self.iterations - MIN_ITERATIONS) as f64
                    / (MAX_ITERATIONS - MIN_ITERATIONS) as f64
            },
            Control::GrowthRate => {
                (self.growth_rate - MIN_GROWTH_RATE) / (MAX_GROWTH_RATE - MIN_GROWTH_RATE)
            },
        };
        ratio.clamp(0.0, 1.0)
    }
}

fn check_iterations(value: usize) -> Result<usize> {
    if (MIN_ITERATIONS..=MAX_ITERATIONS).contains(&value) {
        Ok(value)
    } else {
        Err(CobwebError::IterationsOutOfRange {
            value,
            min: MIN_ITERATIONS,
            max: MAX_ITERATIONS,
        })
    }
}

fn check_growth_rate(value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(CobwebError::invalid_growth_rate(value.to_string()));
    }
    if (MIN_GROWTH_RATE..=MAX_GROWTH_RATE).contains(&value) {
        Ok(value)
    } else {
        Err(CobwebError::GrowthRateOutOfRange {
            value,
            min: MIN_GROWTH_RATE,
            max: MAX_GROWTH_RATE,
        })
    }
}

/// Parse an iteration count from user text.
///
/// Negative and fractional input is rejected rather than truncated.
pub fn parse_iteration_count(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    let value = trimmed
        .parse::<usize>()
        .map_err(|_| CobwebError::invalid_iteration_count(trimmed))?;
    check_iterations(value)
}

/// Parse a growth rate from user text.
pub fn parse_growth_rate(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| CobwebError::invalid_growth_rate(trimmed))?;
    check_growth_rate(value)
}
