//! Cobweb - A terminal visualizer for the discrete logistic map.
//!
//! Cobweb iterates `x_{k+1} = r * x_k * (1 - x_k)` and shows the result two
//! ways: a cobweb diagram that bounces between the map curve and the
//! identity line, and the state plotted against time. Two sliders control
//! the iteration count and the growth rate `r`.
//!
//! # Features
//!
//! - Bit-reproducible trajectory and cobweb construction
//! - Interactive sliders with clamped stepping
//! - Braille line charts via ratatui
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```
//! use cobweb::logistic::generate_trajectory;
//!
//! let traj = generate_trajectory(0.1, 2.0, 2);
//! assert_eq!(traj.states.len(), 3);
//! assert_eq!(traj.cobweb_x.len(), 5);
//! assert_eq!(traj.cobweb_y[0], 0.0);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod error;
pub mod logistic;
pub mod params;
pub mod plot;
pub mod sampling;
pub mod ui;

pub use error::{CobwebError, Result};
