use crate::app::App;
use crate::ui::theme;
use leaderboard_core::chart::{decade_ticks, log_bounds, ScatterPoint};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

/// Both axes are log10 of the dollar amount.
fn plot_point(point: &ScatterPoint) -> (f64, f64) {
    (point.total_funding.log10(), point.growth_rate.log10())
}

pub fn render_growth_chart(app: &App, f: &mut Frame<'_>, area: Rect) {
    let series = app.dashboard.series();
    let selected_name = app.selected_record().map(|record| record.name());
    let selected_point = selected_name.and_then(|name| {
        series
            .iter()
            .flat_map(|series| &series.points)
            .find(|point| point.name == name)
    });

    let title = selected_point.map_or_else(
        || " Funding Growth Rate vs Total Funding ".to_string(),
        |point| format!(" {} ", point.tooltip()),
    );
    let block = Block::default()
        .title(title)
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_style(theme::border_style(false));

    if series.is_empty() {
        let paragraph = Paragraph::new("No companies with positive funding and growth")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme::MUTED));
        f.render_widget(paragraph, area);
        return;
    }

    let points: Vec<Vec<(f64, f64)>> = series
        .iter()
        .map(|series| series.points.iter().map(plot_point).collect())
        .collect();
    let highlight: Vec<(f64, f64)> = selected_point.map(plot_point).into_iter().collect();

    let all_points = series.iter().flat_map(|series| &series.points);
    let x_bounds = log_bounds(all_points.clone().map(|point| point.total_funding));
    let y_bounds = log_bounds(all_points.map(|point| point.growth_rate));

    let mut datasets: Vec<Dataset<'_>> = series
        .iter()
        .zip(&points)
        .map(|(series, data)| {
            Dataset::default()
                .name(series.label)
                .marker(Marker::Braille)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(theme::rgb(series.color)))
                .data(data)
        })
        .collect();
    if !highlight.is_empty() {
        datasets.push(
            Dataset::default()
                .marker(Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
                .data(&highlight),
        );
    }

    let labels = |bounds| -> Vec<Span<'static>> {
        decade_ticks(bounds).into_iter().map(Span::raw).collect()
    };

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Total Funding")
                .style(Style::default().fg(theme::MUTED))
                .bounds(x_bounds)
                .labels(labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title("FGR ($/day)")
                .style(Style::default().fg(theme::MUTED))
                .bounds(y_bounds)
                .labels(labels(y_bounds)),
        );

    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_are_plotted_in_decades() {
        let point = ScatterPoint {
            name: "Acme".to_string(),
            stage: "Seed".to_string(),
            total_funding: 1_000_000.0,
            growth_rate: 100.0,
        };
        assert_eq!(plot_point(&point), (6.0, 2.0));
    }
}
