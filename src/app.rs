//! Application state and logic.

use crate::config::ViewConfig;
use crate::logistic::{fixed_point, generate_trajectory, Trajectory};
use crate::params::{Control, Parameters};
use crate::plot::{self, CobwebChart, TimeSeriesChart};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    #[value(name = "dark")]
    GruvboxDark,
    /// Gruvbox light theme.
    #[value(name = "light")]
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
///
/// `App` owns the slider values. Every change goes through
/// [`App::on_parameters_changed`], which rebuilds the trajectory and both
/// chart payloads from scratch.
#[derive(Debug)]
pub struct App {
    /// Current slider values.
    pub params: Parameters,
    /// Slider with keyboard focus.
    pub focus: Control,
    /// Chart configuration.
    pub config: ViewConfig,
    /// Latest trajectory.
    pub trajectory: Trajectory,
    /// Latest cobweb payload.
    pub cobweb_chart: CobwebChart,
    /// Latest time series payload.
    pub time_chart: TimeSeriesChart,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create a new application instance.
    pub fn new(params: Parameters, config: ViewConfig, theme: Theme) -> Self {
        let trajectory = generate_trajectory(
            params.initial_state(),
            params.growth_rate(),
            params.iterations(),
        );
        let cobweb_chart = CobwebChart::new(&trajectory, params.growth_rate(), &config);
        let time_chart = TimeSeriesChart::new(&trajectory, &config);

        Self {
            params,
            focus: Control::default(),
            config,
            trajectory,
            cobweb_chart,
            time_chart,
            status: "Ready".to_string(),
            theme,
        }
    }

    /// Recompute the whole pipeline for the current parameters.
    pub fn on_parameters_changed(&mut self) {
        let p = self.params;
        self.trajectory = generate_trajectory(p.initial_state(), p.growth_rate(), p.iterations());
        self.cobweb_chart = CobwebChart::new(&self.trajectory, p.growth_rate(), &self.config);
        self.time_chart = TimeSeriesChart::new(&self.trajectory, &self.config);

        tracing::debug!(
            iterations = p.iterations(),
            growth_rate = p.growth_rate(),
            final_state = self.trajectory.final_state(),
            "Trajectory recomputed"
        );
    }

    /// Page title for the current growth rate.
    pub fn title(&self) -> String {
        plot::title(self.params.growth_rate())
    }

    /// Non-zero fixed point for the current growth rate.
    pub fn fixed_point(&self) -> Option<f64> {
        fixed_point(self.params.growth_rate())
    }

    /// Move the focused slider by `steps`.
    pub fn step_focused(&mut self, steps: i64) {
        self.step_control(self.focus, steps);
    }

    /// Move a specific slider by `steps`, recomputing if it moved.
    pub fn step_control(&mut self, control: Control, steps: i64) {
        if self.params.step(control, steps) {
            self.on_parameters_changed();
            self.status = match control {
                Control::Iterations => format!("Iterations: {}", self.params.iterations()),
                Control::GrowthRate => format!("r = {:.2}", self.params.growth_rate()),
            };
        } else {
            self.status = format!("{} at limit", control.name());
        }
    }

    /// Switch keyboard focus to the other slider.
    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
        self.status = format!("Focus: {}", self.focus.name());
    }

    /// Restore default slider values.
    pub fn reset(&mut self) {
        self.params = Parameters::default();
        self.on_parameters_changed();
        self.status = "Reset to defaults".to_string();
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Show key help in the status bar.
    pub fn show_help(&mut self) {
        self.status =
            "Help: Tab=switch slider, h/l=step, H/L=step x10, j/k=iterations, r=reset, T=theme, q=quit"
                .to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Parameters::default(), ViewConfig::default(), Theme::default())
    }

    #[test]
    fn starts_with_default_trajectory() {
        let app = app();
        assert_eq!(app.trajectory.states.len(), 21);
        assert_eq!(app.trajectory.states[0], 0.1);
        assert_eq!(app.title(), "Discrete logistic model (May, 1976), r = 2.00");
        assert_eq!(app.fixed_point(), Some(0.5));
    }

    #[test]
    fn smallest_window_holds_exact_states() {
        let params = Parameters::new(2, 2.0).unwrap();
        let app = App::new(params, ViewConfig::default(), Theme::default());

        let expected = [0.1, 2.0 * 0.1 * (1.0 - 0.1)];
        let expected = [expected[0], expected[1], 2.0 * expected[1] * (1.0 - expected[1])];
        assert_eq!(app.trajectory.states.to_vec(), expected.to_vec());
        assert!((app.trajectory.final_state() - 0.2952).abs() < 1e-12);
        assert_eq!(app.time_chart.series.points[2], (2.0, expected[2]));
        assert_eq!(app.cobweb_chart.cobweb.points.last(), Some(&(expected[2], expected[2])));
    }

    #[test]
    fn stepping_recomputes_everything() {
        let mut app = app();
        app.step_control(Control::Iterations, 5);
        assert_eq!(app.trajectory.states.len(), 26);
        assert_eq!(app.cobweb_chart.cobweb.points.len(), 2 * 26 - 1);
        assert_eq!(app.time_chart.series.points.len(), 26);
        assert_eq!(app.status, "Iterations: 25");

        app.step_control(Control::GrowthRate, 50);
        assert_eq!(app.params.growth_rate(), 3.0);
        assert_eq!(app.title(), "Discrete logistic model (May, 1976), r = 3.00");
        let expected = generate_trajectory(0.1, 3.0, 25);
        assert_eq!(app.trajectory, expected);
    }

    #[test]
    fn focus_selects_the_slider() {
        let mut app = app();
        app.step_focused(1);
        assert_eq!(app.params.iterations(), 21);

        app.cycle_focus();
        assert_eq!(app.focus, Control::GrowthRate);
        app.step_focused(-1);
        assert_eq!(app.params.growth_rate(), 1.98);
        assert_eq!(app.params.iterations(), 21);
    }

    #[test]
    fn limit_leaves_trajectory_untouched() {
        let params = Parameters::new(100, 4.0).unwrap();
        let mut app = App::new(params, ViewConfig::default(), Theme::default());
        let before = app.trajectory.clone();
        app.step_control(Control::Iterations, 1);
        assert_eq!(app.trajectory, before);
        assert_eq!(app.status, "Iterations at limit");
    }

    #[test]
    fn reset_restores_defaults() {
        let mut app = app();
        app.step_control(Control::GrowthRate, 40);
        app.reset();
        assert_eq!(app.params, Parameters::default());
        assert_eq!(app.trajectory, generate_trajectory(0.1, 2.0, 20));
    }

    #[test]
    fn theme_cycles() {
        let mut app = app();
        app.cycle_theme();
        assert_eq!(app.theme, Theme::GruvboxLight);
        app.cycle_theme();
        assert_eq!(app.theme, Theme::GruvboxDark);
    }
}
