//! Cobweb and time series chart widgets.

use super::formatters::format_axis_label;
use super::ThemeColors;
use crate::plot::{
    Bounds, CobwebChart, Series, TimeSeriesChart, AXIS_TICKS, COBWEB_X_LABEL, COBWEB_Y_LABEL,
    TIME_X_LABEL, TIME_Y_LABEL,
};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

fn line<'a>(series: &'a Series, color: Color) -> Dataset<'a> {
    Dataset::default()
        .name(series.name)
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&series.points)
}

fn grid<'a>(segments: &'a [[(f64, f64); 2]], colors: &ThemeColors) -> Vec<Dataset<'a>> {
    segments
        .iter()
        .map(|segment| {
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors.track))
                .data(&segment[..])
        })
        .collect()
}

fn axis<'a>(title: &'a str, bounds: Bounds, colors: &ThemeColors) -> Axis<'a> {
    Axis::default()
        .title(title)
        .style(Style::default().fg(colors.text))
        .bounds(bounds.as_array())
        .labels(
            bounds
                .ticks(AXIS_TICKS)
                .into_iter()
                .map(format_axis_label)
                .collect::<Vec<_>>(),
        )
}

fn frame<'a>(title: &'a str, colors: &ThemeColors) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(title)
        .title_style(Style::default().fg(colors.heading))
        .style(Style::default().bg(colors.bg))
}

/// Draw the cobweb diagram.
pub(super) fn draw_cobweb(f: &mut Frame<'_>, area: Rect, chart: &CobwebChart, colors: &ThemeColors) {
    let mut datasets = grid(&chart.grid, colors);
    datasets.extend([
        line(&chart.curve, colors.curve),
        line(&chart.diagonal, colors.diagonal),
        line(&chart.cobweb, colors.trajectory),
    ]);

    let widget = Chart::new(datasets)
        .block(frame(" Cobweb ", colors))
        .x_axis(axis(COBWEB_X_LABEL, chart.x_bounds, colors))
        .y_axis(axis(COBWEB_Y_LABEL, chart.y_bounds, colors));

    f.render_widget(widget, area);
}

/// Draw the state against time.
pub(super) fn draw_time_series(
    f: &mut Frame<'_>,
    area: Rect,
    chart: &TimeSeriesChart,
    colors: &ThemeColors,
) {
    let mut datasets = grid(&chart.grid, colors);
    datasets.push(line(&chart.series, colors.trajectory));

    let widget = Chart::new(datasets)
        .block(frame(" Time series ", colors))
        .x_axis(axis(TIME_X_LABEL, chart.x_bounds, colors))
        .y_axis(axis(TIME_Y_LABEL, chart.y_bounds, colors));

    f.render_widget(widget, area);
}
