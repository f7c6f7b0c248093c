//! Parameter sliders.

use super::ThemeColors;
use crate::params::{
    Control, Parameters, MAX_GROWTH_RATE, MAX_ITERATIONS, MIN_GROWTH_RATE, MIN_ITERATIONS,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    widgets::{Block, Borders, LineGauge},
    Frame,
};

/// Draw both sliders side by side, highlighting the focused one.
pub(super) fn draw_sliders(
    f: &mut Frame<'_>,
    area: Rect,
    params: &Parameters,
    focus: Control,
    colors: &ThemeColors,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (control, chunk) in [Control::Iterations, Control::GrowthRate]
        .into_iter()
        .zip(chunks.iter())
    {
        draw_slider(f, *chunk, params, control, control == focus, colors);
    }
}

fn draw_slider(
    f: &mut Frame<'_>,
    area: Rect,
    params: &Parameters,
    control: Control,
    focused: bool,
    colors: &ThemeColors,
) {
    let (value, range) = match control {
        Control::Iterations => (
            params.iterations().to_string(),
            format!("[{}, {}]", MIN_ITERATIONS, MAX_ITERATIONS),
        ),
        Control::GrowthRate => (
            format!("{:.2}", params.growth_rate()),
            format!("[{}, {}]", MIN_GROWTH_RATE, MAX_GROWTH_RATE),
        ),
    };

    let (border, fill) = if focused {
        (colors.focus, colors.focus)
    } else {
        (colors.border, colors.value)
    };

    let mut title_style = Style::default().fg(colors.label);
    if focused {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    let gauge = LineGauge::default()
        .block(
            Block::default()
                .title(format!(" {} {} ", control.name(), range))
                .title_style(title_style)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(colors.bg)),
        )
        .filled_style(Style::default().fg(fill))
        .unfilled_style(Style::default().fg(colors.track))
        .line_set(symbols::line::THICK)
        .label(format!("{:>6} ", value))
        .ratio(params.ratio(control));

    f.render_widget(gauge, area);
}
