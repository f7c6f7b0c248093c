//! Chart payloads handed to the renderer.
//!
//! This module turns a [`Trajectory`] and the reference curves into plain
//! series plus axis bounds and labels. It knows nothing about the terminal;
//! [`crate::ui`] draws whatever it is given.

use crate::config::ViewConfig;
use crate::logistic::Trajectory;
use crate::sampling::{linspace, CurveSamples};

/// Cobweb chart x axis label.
pub const COBWEB_X_LABEL: &str = "x(kT)";
/// Cobweb chart y axis label.
pub const COBWEB_Y_LABEL: &str = "x((k+1)T)";
/// Time series x axis label.
pub const TIME_X_LABEL: &str = "time";
/// Time series y axis label.
pub const TIME_Y_LABEL: &str = "x(t)";
/// Labelled ticks per axis, endpoints included.
pub const AXIS_TICKS: usize = 5;

/// Page title for the given growth rate.
pub fn title(growth_rate: f64) -> String {
    format!("Discrete logistic model (May, 1976), r = {:.2}", growth_rate)
}

/// A named line series.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend name.
    pub name: &'static str,
    /// Vertices in draw order.
    pub points: Vec<(f64, f64)>,
}

impl Series {
    /// Create a series.
    pub fn new(name: &'static str, points: Vec<(f64, f64)>) -> Self {
        Self { name, points }
    }
}

/// Closed axis interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Lower end.
    pub min: f64,
    /// Upper end.
    pub max: f64,
}

impl Bounds {
    /// As the `[min, max]` array ratatui axes expect.
    pub fn as_array(self) -> [f64; 2] {
        [self.min, self.max]
    }

    /// `count` evenly spaced tick positions from `min` to `max`.
    pub fn ticks(self, count: usize) -> Vec<f64> {
        linspace(self.min, self.max, count).to_vec()
    }

    /// Smallest interval holding every finite value, widened by `padding`
    /// times its span on each side. Falls back to `[0, 1]` when nothing is
    /// finite and to a unit-wide window around a single value.
    pub fn enclosing(values: impl IntoIterator<Item = f64>, padding: f64) -> Self {
        let (lo, hi) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });

        if lo > hi {
            return Self { min: 0.0, max: 1.0 };
        }
        if lo == hi {
            return Self {
                min: lo - 0.5,
                max: hi + 0.5,
            };
        }

        let pad = (hi - lo) * padding;
        Self {
            min: lo - pad,
            max: hi + pad,
        }
    }
}

/// Background grid segments at the interior ticks of both axes.
///
/// Each segment spans the full opposite axis. Endpoint ticks are skipped
/// since they coincide with the chart frame.
pub fn grid_lines(x_bounds: Bounds, y_bounds: Bounds) -> Vec<[(f64, f64); 2]> {
    let interior = |b: Bounds| {
        let ticks = b.ticks(AXIS_TICKS);
        ticks[1..ticks.len() - 1].to_vec()
    };

    let vertical = interior(x_bounds)
        .into_iter()
        .map(|x| [(x, y_bounds.min), (x, y_bounds.max)]);
    let horizontal = interior(y_bounds)
        .into_iter()
        .map(|y| [(x_bounds.min, y), (x_bounds.max, y)]);

    vertical.chain(horizontal).collect()
}

/// Cobweb diagram: staircase, map curve and identity line.
#[derive(Debug, Clone, PartialEq)]
pub struct CobwebChart {
    /// Staircase between curve and diagonal.
    pub cobweb: Series,
    /// Sampled `y = r x (1 - x)`.
    pub curve: Series,
    /// Sampled `y = x`.
    pub diagonal: Series,
    /// X axis bounds.
    pub x_bounds: Bounds,
    /// Y axis bounds.
    pub y_bounds: Bounds,
    /// Grid segments.
    pub grid: Vec<[(f64, f64); 2]>,
}

impl CobwebChart {
    /// Build the payload for `trajectory` at `growth_rate`.
    pub fn new(trajectory: &Trajectory, growth_rate: f64, config: &ViewConfig) -> Self {
        let samples = CurveSamples::new(growth_rate, config.curve_samples);
        let cobweb = Series::new("cobweb", trajectory.cobweb_points());
        let curve = Series::new("f(x)", samples.curve);
        let diagonal = Series::new("y = x", samples.diagonal);

        let all = || {
            cobweb
                .points
                .iter()
                .chain(curve.points.iter())
                .chain(diagonal.points.iter())
        };
        let x_bounds = Bounds::enclosing(all().map(|p| p.0), config.axis_padding_factor);
        let y_bounds = Bounds::enclosing(all().map(|p| p.1), config.axis_padding_factor);

        Self {
            cobweb,
            curve,
            diagonal,
            x_bounds,
            y_bounds,
            grid: grid_lines(x_bounds, y_bounds),
        }
    }

    /// Series in draw order, back to front.
    pub fn series(&self) -> [&Series; 3] {
        [&self.curve, &self.diagonal, &self.cobweb]
    }
}

/// State against time.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesChart {
    /// `(t, x(t))` points.
    pub series: Series,
    /// X axis bounds.
    pub x_bounds: Bounds,
    /// Y axis bounds.
    pub y_bounds: Bounds,
    /// Grid segments.
    pub grid: Vec<[(f64, f64); 2]>,
}

impl TimeSeriesChart {
    /// Build the payload for `trajectory`.
    pub fn new(trajectory: &Trajectory, config: &ViewConfig) -> Self {
        let series = Series::new("x(t)", trajectory.series_points());
        let x_bounds = Bounds {
            min: 0.0,
            max: trajectory.iterations().max(1) as f64,
        };
        let y_bounds = Bounds::enclosing(
            series.points.iter().map(|p| p.1),
            config.axis_padding_factor,
        );

        Self {
            series,
            x_bounds,
            y_bounds,
            grid: grid_lines(x_bounds, y_bounds),
        }
    }
}
