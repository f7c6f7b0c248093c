//! Trajectory generation for the discrete logistic map.
//!
//! The map is `x_{k+1} = r * x_k * (1 - x_k)`. A [`Trajectory`] holds the
//! state sequence, its time index and the cobweb polyline derived from it.
//! Everything here is a pure function of its inputs; bounds checking lives
//! in [`crate::params`].

use ndarray::Array1;

/// Apply the logistic map once.
///
/// The multiplication order matches `r * x * (1 - x)` evaluated left to
/// right, so results are reproducible bit for bit.
#[inline]
pub fn logistic_map(x: f64, growth_rate: f64) -> f64 {
    growth_rate * x * (1.0 - x)
}

/// Non-zero fixed point `1 - 1/r` of the map, if it exists.
pub fn fixed_point(growth_rate: f64) -> Option<f64> {
    if growth_rate == 0.0 || !growth_rate.is_finite() {
        None
    } else {
        Some(1.0 - 1.0 / growth_rate)
    }
}

/// A computed trajectory of the logistic map.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// States `x_0..=x_n`, with `x_0` the initial state.
    pub states: Array1<f64>,
    /// Time index `0..=n`, one entry per state.
    pub time: Array1<usize>,
    /// Cobweb polyline abscissae.
    pub cobweb_x: Array1<f64>,
    /// Cobweb polyline ordinates.
    pub cobweb_y: Array1<f64>,
}

impl Trajectory {
    /// Number of map applications that produced this trajectory.
    pub fn iterations(&self) -> usize {
        self.states.len() - 1
    }

    /// Last state of the sequence.
    pub fn final_state(&self) -> f64 {
        self.states[self.states.len() - 1]
    }

    /// Cobweb vertices as `(x, y)` pairs.
    pub fn cobweb_points(&self) -> Vec<(f64, f64)> {
        self.cobweb_x
            .iter()
            .zip(self.cobweb_y.iter())
            .map(|(&x, &y)| (x, y))
            .collect()
    }

    /// Time series as `(t, x(t))` pairs.
    pub fn series_points(&self) -> Vec<(f64, f64)> {
        self.time
            .iter()
            .zip(self.states.iter())
            .map(|(&t, &x)| (t as f64, x))
            .collect()
    }
}

/// Iterate the map `iterations` times starting from `initial_state`.
pub fn generate_states(initial_state: f64, growth_rate: f64, iterations: usize) -> Array1<f64> {
    let mut states = Array1::zeros(iterations + 1);
    states[0] = initial_state;
    for k in 0..iterations {
        states[k + 1] = logistic_map(states[k], growth_rate);
    }
    states
}

/// Build the cobweb polyline from a state sequence.
///
/// With `D` the states each repeated twice, `x = D[..len - 1]` and
/// `y = [0] ++ D[2..]`. The path starts at `(s0, 0)`, then alternates
/// `(s_k, s_{k+1})` and `(s_{k+1}, s_{k+1})`. The final vertex is
/// `(s_n, s_n)` on the diagonal. An empty sequence yields an empty path.
pub fn cobweb_path(states: &Array1<f64>) -> (Array1<f64>, Array1<f64>) {
    if states.is_empty() {
        return (Array1::zeros(0), Array1::zeros(0));
    }

    let doubled: Vec<f64> = states.iter().flat_map(|&s| [s, s]).collect();
    let len = doubled.len() - 1;

    let xs = Array1::from_iter(doubled[..len].iter().copied());
    let ys = Array1::from_iter(std::iter::once(0.0).chain(doubled[2..].iter().copied()));
    debug_assert_eq!(xs.len(), ys.len());

    (xs, ys)
}

/// Generate the full trajectory: states, time index and cobweb path.
pub fn generate_trajectory(initial_state: f64, growth_rate: f64, iterations: usize) -> Trajectory {
    let states = generate_states(initial_state, growth_rate, iterations);
    let time = Array1::from_iter(0..=iterations);
    let (cobweb_x, cobweb_y) = cobweb_path(&states);

    Trajectory {
        states,
        time,
        cobweb_x,
        cobweb_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{:?} vs {:?}", actual, expected);
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-12, "{:?} vs {:?}", actual, expected);
        }
    }

    #[test]
    fn zero_iterations_keeps_only_the_initial_state() {
        let traj = generate_trajectory(0.1, 3.3, 0);
        assert_eq!(traj.states.to_vec(), vec![0.1]);
        assert_eq!(traj.time.to_vec(), vec![0]);
        assert_eq!(traj.cobweb_x.to_vec(), vec![0.1]);
        assert_eq!(traj.cobweb_y.to_vec(), vec![0.0]);
        assert_eq!(traj.iterations(), 0);
    }

    #[test]
    fn lengths_follow_iteration_count() {
        for n in [1, 2, 20, 100] {
            let traj = generate_trajectory(0.1, 3.7, n);
            assert_eq!(traj.states.len(), n + 1);
            assert_eq!(traj.time.len(), n + 1);
            assert_eq!(traj.cobweb_x.len(), 2 * (n + 1) - 1);
            assert_eq!(traj.cobweb_y.len(), 2 * (n + 1) - 1);
        }
    }

    #[test]
    fn time_index_enumerates_steps() {
        let traj = generate_trajectory(0.1, 2.0, 5);
        assert_eq!(traj.time.to_vec(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn identical_inputs_give_identical_bits() {
        let a = generate_trajectory(0.1, 3.91, 100);
        let b = generate_trajectory(0.1, 3.91, 100);
        let bits = |v: &Array1<f64>| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a.states), bits(&b.states));
        assert_eq!(bits(&a.cobweb_x), bits(&b.cobweb_x));
        assert_eq!(bits(&a.cobweb_y), bits(&b.cobweb_y));
    }

    #[test]
    fn growth_rate_two_from_point_one() {
        let traj = generate_trajectory(0.1, 2.0, 2);
        assert_close(traj.states.as_slice().unwrap(), &[0.1, 0.18, 0.2952]);
        assert_close(
            traj.cobweb_x.as_slice().unwrap(),
            &[0.1, 0.1, 0.18, 0.18, 0.2952],
        );
        assert_close(
            traj.cobweb_y.as_slice().unwrap(),
            &[0.0, 0.18, 0.18, 0.2952, 0.2952],
        );
    }

    #[test]
    fn cobweb_reuses_state_values_exactly() {
        let traj = generate_trajectory(0.1, 3.57, 30);
        let s = &traj.states;
        let n = traj.iterations();

        assert_eq!(traj.cobweb_points()[0], (s[0], 0.0));
        for k in 0..n {
            assert_eq!(traj.cobweb_x[2 * k + 1].to_bits(), s[k].to_bits());
            assert_eq!(traj.cobweb_y[2 * k + 1].to_bits(), s[k + 1].to_bits());
            assert_eq!(traj.cobweb_x[2 * k + 2].to_bits(), s[k + 1].to_bits());
            assert_eq!(traj.cobweb_y[2 * k + 2].to_bits(), s[k + 1].to_bits());
        }
        let last = *traj.cobweb_points().last().unwrap();
        assert_eq!(last, (s[n], s[n]));
    }

    #[test]
    fn cobweb_path_ends_on_curve_then_diagonal() {
        // Odd vertices lie on the map curve, even ones (after the first) on the diagonal.
        let r = 2.8;
        let traj = generate_trajectory(0.1, r, 10);
        for (i, (x, y)) in traj.cobweb_points().into_iter().enumerate().skip(1) {
            if i % 2 == 1 {
                assert_eq!(y.to_bits(), logistic_map(x, r).to_bits());
            } else {
                assert_eq!(x.to_bits(), y.to_bits());
            }
        }
    }

    #[test]
    fn empty_states_give_empty_path() {
        let (xs, ys) = cobweb_path(&Array1::zeros(0));
        assert!(xs.is_empty());
        assert!(ys.is_empty());
    }

    #[test]
    fn fixed_point_is_stationary() {
        let r = 2.0;
        let x_star = fixed_point(r).unwrap();
        assert_eq!(x_star, 0.5);

        let traj = generate_trajectory(x_star, r, 25);
        assert!(traj.states.iter().all(|&x| x == 0.5));
    }

    #[test]
    fn no_fixed_point_for_zero_rate() {
        assert_eq!(fixed_point(0.0), None);
        assert_eq!(fixed_point(f64::NAN), None);
    }

    #[test]
    fn chaotic_rate_does_not_settle() {
        let traj = generate_trajectory(0.1, 3.9, 100);
        let tail: Vec<f64> = traj.states.iter().skip(80).copied().collect();

        let mut distinct: Vec<f64> = Vec::new();
        for &x in &tail {
            if distinct.iter().all(|&d| (d - x).abs() > 1e-6) {
                distinct.push(x);
            }
        }
        assert!(distinct.len() > 8, "tail collapsed to {:?}", distinct);
    }

    #[test]
    fn moderate_rate_converges() {
        let r = 2.5;
        let traj = generate_trajectory(0.1, r, 100);
        let x_star = fixed_point(r).unwrap();
        assert!((traj.final_state() - x_star).abs() < 1e-9);
    }

    #[test]
    fn recurrence_is_not_clamped() {
        let traj = generate_trajectory(1.5, 4.0, 1);
        assert_eq!(traj.states[1], 4.0 * 1.5 * (1.0 - 1.5));
        assert!(traj.states[1] < 0.0);
    }

    #[test]
    fn series_points_pair_time_and_state() {
        let traj = generate_trajectory(0.1, 2.0, 2);
        let pts = traj.series_points();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[0], (0.0, 0.1));
        assert_eq!(pts[2].0, 2.0);
    }
}
