//! Evenly spaced sampling of the reference curves.

use ndarray::Array1;

use crate::logistic::logistic_map;

/// Default number of samples for the map curve and diagonal.
pub const DEFAULT_CURVE_SAMPLES: usize = 50;

/// `count` evenly spaced values from `start` to `stop`, both inclusive.
///
/// The last element is set to `stop` exactly so rounding in the step never
/// leaves the endpoint short.
pub fn linspace(start: f64, stop: f64, count: usize) -> Array1<f64> {
    match count {
        0 => Array1::zeros(0),
        1 => Array1::from_elem(1, start),
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut values = Array1::from_shape_fn(count, |i| start + i as f64 * step);
            values[count - 1] = stop;
            values
        },
    }
}

/// Map curve and identity line sampled over `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSamples {
    /// Points `(x, r x (1 - x))`.
    pub curve: Vec<(f64, f64)>,
    /// Points `(x, x)`.
    pub diagonal: Vec<(f64, f64)>,
}

impl CurveSamples {
    /// Sample both reference lines for `growth_rate`.
    pub fn new(growth_rate: f64, count: usize) -> Self {
        let xs = linspace(0.0, 1.0, count);
        Self {
            curve: xs.iter().map(|&x| (x, logistic_map(x, growth_rate))).collect(),
            diagonal: xs.iter().map(|&x| (x, x)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_interval_with_fifty_points() {
        let xs = linspace(0.0, 1.0, 50);
        assert_eq!(xs.len(), 50);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[49], 1.0);

        let step = 1.0 / 49.0;
        for w in xs.as_slice().unwrap().windows(2) {
            assert!(w[1] > w[0]);
            assert!((w[1] - w[0] - step).abs() < 1e-12);
        }
    }

    #[test]
    fn degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.3, 1.0, 1).to_vec(), vec![0.3]);
        assert_eq!(linspace(0.0, 1.0, 2).to_vec(), vec![0.0, 1.0]);
    }

    #[test]
    fn curve_peaks_at_quarter_rate() {
        let samples = CurveSamples::new(4.0, 51);
        assert_eq!(samples.curve.len(), 51);
        assert_eq!(samples.diagonal.len(), 51);

        let peak = samples
            .curve
            .iter()
            .map(|&(_, y)| y)
            .fold(f64::MIN, f64::max);
        assert!((peak - 1.0).abs() < 1e-12);
        assert_eq!(samples.curve[0], (0.0, 0.0));
        assert_eq!(samples.curve[50], (1.0, 0.0));
        assert!(samples.diagonal.iter().all(|&(x, y)| x == y));
    }
}
