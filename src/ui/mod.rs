//! User interface rendering.

mod charts;
mod formatters;
mod keymap_bar;
mod sliders;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

pub use formatters::{format_axis_label, format_stat_value};
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    f.render_widget(Block::default().style(Style::default().bg(colors.bg)), f.area());

    // Title, sliders, charts, readout, status bar, key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_title(f, chunks[0], app, &colors);
    sliders::draw_sliders(f, chunks[1], &app.params, app.focus, &colors);

    let plots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    charts::draw_cobweb(f, plots[0], &app.cobweb_chart, &colors);
    charts::draw_time_series(f, plots[1], &app.time_chart, &colors);

    draw_readout(f, chunks[3], app, &colors);
    status_bar::draw_status(f, chunks[4], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[5], &colors);
}

fn draw_title(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let title = Paragraph::new(app.title())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(title, area);
}

fn draw_readout(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let fixed = app
        .fixed_point()
        .map(format_stat_value)
        .unwrap_or_else(|| "-".to_string());

    let pair = |label: &'static str, value: String| {
        [
            Span::styled(label, Style::default().fg(colors.label)),
            Span::styled(value, Style::default().fg(colors.value)),
        ]
    };

    let mut spans = vec![Span::raw(" ")];
    spans.extend(pair("x(0) = ", format_stat_value(app.params.initial_state())));
    spans.push(Span::raw("   "));
    spans.extend(pair(
        "x(n) = ",
        format_stat_value(app.trajectory.final_state()),
    ));
    spans.push(Span::raw("   "));
    spans.extend(pair("x* = 1 - 1/r = ", fixed));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Theme;
    use crate::config::ViewConfig;
    use crate::params::Parameters;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn renders_title_labels_and_readout() {
        let app = App::new(Parameters::default(), ViewConfig::default(), Theme::default());
        let screen = render(&app, 140, 40);

        assert!(screen.contains("Discrete logistic model (May, 1976), r = 2.00"));
        assert!(screen.contains("Cobweb"));
        assert!(screen.contains("Time series"));
        assert!(screen.contains("x((k+1)T)"));
        assert!(screen.contains("x(t)"));
        // Time axis 0..=20 with five ticks puts a label at 5.
        assert!(screen.contains("5.00"), "interior tick label missing");
        assert!(screen.contains("x* = 1 - 1/r = 0.50000"));
        assert!(screen.contains("Ready"));
    }

    #[test]
    fn light_theme_and_small_terminal_do_not_panic() {
        let params = Parameters::new(100, 4.0).unwrap();
        let app = App::new(params, ViewConfig::default(), Theme::GruvboxLight);
        let screen = render(&app, 40, 12);
        assert!(!screen.is_empty());
    }
}
