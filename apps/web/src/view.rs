use crate::state::{Focus, WebState, PANEL_TITLES};
use leaderboard_core::cells::{CellContent, LOGO_PLACEHOLDER};
use leaderboard_core::chart::{decade_ticks, log_bounds};
use leaderboard_core::stats::{StatsPanel, UNAVAILABLE_MESSAGE};
use leaderboard_core::ticker::scroll_offset;
use leaderboard_core::word_cloud::{flow_lines, revealed_count};
use leaderboard_core::{Dashboard, RankChange, Rgb, DISPLAY_COLUMNS};
use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line as TextLine, Span},
    widgets::{
        canvas::{Canvas, Map, MapResolution, Points},
        Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Scrollbar,
        ScrollbarOrientation, ScrollbarState, Table, Tabs, Wrap,
    },
    Frame,
};

const HIGHLIGHT: Color = Color::Rgb(0, 0, 238);

const fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

const fn change_color(change: RankChange) -> Color {
    match change {
        RankChange::Gain(_) => Color::Green,
        RankChange::Drop(_) => Color::Red,
        RankChange::Unchanged => Color::Gray,
    }
}

fn panel_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Cyan } else { Color::Gray }))
}

pub fn render_dashboard(state: &WebState, dashboard: &Dashboard, f: &mut Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(12),
            Constraint::Length(3),
        ])
        .split(area);

    render_ticker(state, f, rows[0]);
    render_stats(dashboard, f, rows[1]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(rows[2]);
    render_table(state, dashboard, f, content[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(8), Constraint::Length(6)])
        .split(content[1]);
    let tabs = Tabs::new(PANEL_TITLES)
        .select(state.tab_index)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));
    f.render_widget(tabs, side[0]);
    match state.tab_index {
        0 => render_chart(state, dashboard, f, side[1]),
        1 => render_map(state, dashboard, f, side[1]),
        _ => render_word_cloud(state, dashboard, f, side[1]),
    }
    render_calculator(state, f, side[2]);

    render_footer(state, f, rows[3]);
}

fn render_ticker(state: &WebState, f: &mut Frame<'_>, area: Rect) {
    let block = panel_block("Ranking Ticker", false);
    let inner = block.inner(area);
    f.render_widget(block, area);
    if state.ticker.is_empty() {
        return;
    }

    let pass: Vec<char> = state.ticker.strip().chars().collect();
    let offset = scroll_offset(state.clock.elapsed, WebState::loop_seconds(), pass.len());
    let visible: String = pass
        .iter()
        .cycle()
        .skip(offset)
        .take(usize::from(inner.width))
        .collect();
    f.render_widget(
        Paragraph::new(visible).style(Style::default().fg(Color::White)),
        inner,
    );
}

fn render_stats(dashboard: &Dashboard, f: &mut Frame<'_>, area: Rect) {
    let StatsPanel::Cards(cards) = dashboard.stats() else {
        f.render_widget(
            Paragraph::new(UNAVAILABLE_MESSAGE)
                .alignment(Alignment::Center)
                .block(panel_block("Statistics", false)),
            area,
        );
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, 5); cards.len()])
        .split(area);
    for (card, column) in cards.iter().zip(columns.iter()) {
        let mut spans = vec![Span::styled(
            card.value.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )];
        if let Some(by) = &card.by {
            spans.push(Span::styled(format!(" by {by}"), Style::default().fg(Color::Gray)));
        }
        f.render_widget(
            Paragraph::new(TextLine::from(spans)).block(panel_block(card.title, false)),
            *column,
        );
    }
}

fn web_cell(content: CellContent) -> Cell<'static> {
    match content {
        CellContent::Logo { path } => Cell::from(if path.is_some() { "■" } else { LOGO_PLACEHOLDER }),
        CellContent::Company { name, url } => {
            let style = Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD);
            let style = if url.is_some() {
                style.add_modifier(Modifier::UNDERLINED)
            } else {
                style
            };
            Cell::from(Span::styled(name, style))
        }
        CellContent::Rank { rank, change } => {
            let mut spans = vec![Span::raw(rank)];
            if let Some(indicator) = change.indicator() {
                spans.push(Span::styled(
                    format!(" {indicator}"),
                    Style::default().fg(change_color(change)),
                ));
            }
            Cell::from(TextLine::from(spans))
        }
        CellContent::Stage { label, style } => style.map_or_else(
            || Cell::from(""),
            |style| {
                Cell::from(Span::styled(
                    label,
                    Style::default().fg(Color::Black).bg(rgb(style.color)),
                ))
            },
        ),
        CellContent::Amount { text, emphasised } => {
            if emphasised {
                Cell::from(Span::styled(text, Style::default().add_modifier(Modifier::BOLD)))
            } else {
                Cell::from(text)
            }
        }
        CellContent::Tags { tags } => Cell::from(tags.join(", ")),
        CellContent::Text { text } => Cell::from(text),
    }
}

fn render_table(state: &WebState, dashboard: &Dashboard, f: &mut Frame<'_>, area: Rect) {
    let block = panel_block("Leaderboard", state.focus == Focus::Table);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if state.visible.is_empty() {
        f.render_widget(
            Paragraph::new("No companies match")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray)),
            inner,
        );
        return;
    }

    let header = Row::new(DISPLAY_COLUMNS.iter().map(|column| Cell::from(column.header())))
        .style(
            Style::default()
                .fg(HIGHLIGHT)
                .bg(Color::Rgb(200, 200, 200))
                .add_modifier(Modifier::BOLD),
        );

    let max_rows = usize::from(inner.height.saturating_sub(1));
    let offset = (state.selected + 1).saturating_sub(max_rows);
    let rows = state
        .visible
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_rows)
        .filter_map(|(position, index)| {
            let row = Row::new(dashboard.table_row(*index)?.into_iter().map(web_cell));
            Some(if position == state.selected {
                row.style(Style::default().bg(Color::DarkGray))
            } else {
                row.style(Style::default().fg(Color::White))
            })
        });

    let widths = [
        Constraint::Length(2),
        Constraint::Length(18),
        Constraint::Length(8),
        Constraint::Length(9),
        Constraint::Length(14),
        Constraint::Length(5),
        Constraint::Length(9),
        Constraint::Length(9),
        Constraint::Length(14),
        Constraint::Length(24),
        Constraint::Min(10),
    ];
    f.render_widget(
        Table::new(rows, widths).header(header).column_spacing(1),
        inner,
    );

    let mut scrollbar_state = ScrollbarState::new(state.visible.len())
        .position(state.selected)
        .viewport_content_length(max_rows);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_style(Style::default().fg(HIGHLIGHT));
    f.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
}

fn render_chart(state: &WebState, dashboard: &Dashboard, f: &mut Frame<'_>, area: Rect) {
    let series = dashboard.series();
    let selected_name = state
        .selected_index()
        .and_then(|index| dashboard.record(index))
        .map(|record| record.name());
    let selected = series
        .iter()
        .flat_map(|series| &series.points)
        .find(|point| Some(point.name.as_str()) == selected_name);
    let title = selected.map_or_else(|| "FGR vs Total Funding".to_string(), |point| point.tooltip());

    if series.is_empty() {
        f.render_widget(
            Paragraph::new("No plottable companies")
                .alignment(Alignment::Center)
                .block(panel_block(&title, false)),
            area,
        );
        return;
    }

    let data: Vec<Vec<(f64, f64)>> = series
        .iter()
        .map(|series| {
            series
                .points
                .iter()
                .map(|point| (point.total_funding.log10(), point.growth_rate.log10()))
                .collect()
        })
        .collect();
    let highlight: Vec<(f64, f64)> = selected
        .map(|point| (point.total_funding.log10(), point.growth_rate.log10()))
        .into_iter()
        .collect();

    let points = series.iter().flat_map(|series| &series.points);
    let x_bounds = log_bounds(points.clone().map(|point| point.total_funding));
    let y_bounds = log_bounds(points.map(|point| point.growth_rate));

    let mut datasets: Vec<Dataset<'_>> = series
        .iter()
        .zip(&data)
        .map(|(series, data)| {
            Dataset::default()
                .name(series.label)
                .marker(Marker::Braille)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(rgb(series.color)))
                .data(data)
        })
        .collect();
    datasets.push(
        Dataset::default()
            .marker(Marker::Block)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::White))
            .data(&highlight),
    );

    let chart = Chart::new(datasets)
        .block(panel_block(&title, false))
        .x_axis(
            Axis::default()
                .title("Total Funding")
                .bounds(x_bounds)
                .labels(decade_ticks(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title("FGR")
                .bounds(y_bounds)
                .labels(decade_ticks(y_bounds)),
        );
    f.render_widget(chart, area);
}

fn render_map(state: &WebState, dashboard: &Dashboard, f: &mut Frame<'_>, area: Rect) {
    let markers = dashboard.markers();
    let coords: Vec<(f64, f64)> = markers.iter().map(|marker| (marker.lon, marker.lat)).collect();
    let selected = state
        .selected_index()
        .and_then(|index| markers.iter().find(|marker| marker.record_index == index));

    let canvas = Canvas::default()
        .block(panel_block("Company Map", false))
        .marker(Marker::Braille)
        .x_bounds([-180.0, 180.0])
        .y_bounds([-90.0, 90.0])
        .paint(|ctx| {
            ctx.draw(&Map {
                resolution: MapResolution::High,
                color: Color::DarkGray,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &coords,
                color: Color::Yellow,
            });
            if let Some(marker) = selected {
                ctx.print(
                    marker.lon,
                    marker.lat,
                    Span::styled(format!("● {}", marker.name), Style::default().fg(Color::Cyan)),
                );
            }
        });
    f.render_widget(canvas, area);
}

fn render_word_cloud(state: &WebState, dashboard: &Dashboard, f: &mut Frame<'_>, area: Rect) {
    let block = panel_block("Company Word Cloud", false);
    let inner = block.inner(area);
    let words = dashboard.cloud_words();
    let mut remaining = revealed_count(state.cloud_clock.elapsed_duration(), words.len());

    let lines: Vec<TextLine<'_>> = flow_lines(words, usize::from(inner.width.max(1)))
        .into_iter()
        .map(|line| {
            let spans: Vec<Span<'_>> = line
                .into_iter()
                .map(|index| {
                    let word = &words[index];
                    let text = format!("{} ", word.text);
                    if remaining == 0 {
                        return Span::raw(" ".repeat(text.chars().count()));
                    }
                    remaining -= 1;
                    let style = Style::default().fg(rgb(word.group.color()));
                    let style = match word.tier(3) {
                        0 => style.add_modifier(Modifier::DIM),
                        1 => style,
                        _ => style.add_modifier(Modifier::BOLD),
                    };
                    Span::styled(text, style)
                })
                .collect();
            TextLine::from(spans)
        })
        .collect();

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_calculator(state: &WebState, f: &mut Frame<'_>, area: Rect) {
    let field = |label: &'static str, value: &str, focus: Focus| {
        let style = if state.focus == focus {
            Style::default().fg(HIGHLIGHT).bg(Color::White)
        } else {
            Style::default()
        };
        TextLine::from(vec![
            Span::styled(label, Style::default().fg(Color::Gray)),
            Span::styled(value.to_string(), style),
        ])
    };

    let result = state.calculator.map_or_else(
        || TextLine::from(Span::styled("Press c and enter $M and months", Style::default().fg(Color::Gray))),
        |result| {
            let mut text = result.velocity_label();
            if let Some(rank) = result.rank {
                text.push_str(&format!("  {} ({})", rank.rank_label(), rank.top_label()));
            }
            TextLine::from(Span::styled(text, Style::default().add_modifier(Modifier::BOLD)))
        },
    );

    let focused = matches!(state.focus, Focus::Amount | Focus::Months);
    f.render_widget(
        Paragraph::new(vec![
            field("Amount ($M):     ", &state.amount_input, Focus::Amount),
            field("Months:          ", &state.months_input, Focus::Months),
            TextLine::from(""),
            result,
        ])
        .block(panel_block("FGR Calculator", focused)),
        area,
    );
}

fn render_footer(state: &WebState, f: &mut Frame<'_>, area: Rect) {
    let search = if state.focus == Focus::Search || !state.search_input.is_empty() {
        format!("Search: {}", state.search_input)
    } else {
        "/ search".to_string()
    };
    let line = TextLine::from(vec![
        Span::styled(search, Style::default().fg(Color::White)),
        Span::raw("  "),
        Span::styled(
            "↑/↓ select  ←/→ 1-3 panel  c calculator  p pause  r reshuffle",
            Style::default().fg(Color::Gray),
        ),
    ]);
    f.render_widget(
        Paragraph::new(line).block(panel_block("", state.focus == Focus::Search)),
        area,
    );
}
