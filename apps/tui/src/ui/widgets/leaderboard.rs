use crate::app::state::Focus;
use crate::app::App;
use crate::ui::theme;
use crate::ui::widgets::tables::scroll_offset;
use leaderboard_core::cells::{CellContent, LOGO_PLACEHOLDER};
use leaderboard_core::{Column, DISPLAY_COLUMNS};
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{
    Block, Borders, Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table,
};
use ratatui::Frame;

const LOGO_MARK: &str = "■";

const fn column_width(column: Column) -> Constraint {
    match column {
        Column::Logo => Constraint::Length(4),
        Column::CompanyName => Constraint::Length(22),
        Column::Ranking => Constraint::Length(10),
        Column::FundingGrowthRate => Constraint::Length(10),
        Column::FundingStage => Constraint::Length(16),
        Column::DaysSinceLastFunding => Constraint::Length(6),
        Column::LastFundingRound | Column::TotalFunding => Constraint::Length(10),
        Column::Location => Constraint::Length(18),
        Column::Industries => Constraint::Length(28),
        Column::Description => Constraint::Min(20),
    }
}

/// Short headers; the full names do not fit a terminal column.
const fn column_title(column: Column) -> &'static str {
    match column {
        Column::Logo => "",
        Column::CompanyName => "Company",
        Column::Ranking => "Rank",
        Column::FundingGrowthRate => "FGR $/day",
        Column::FundingStage => "Stage",
        Column::DaysSinceLastFunding => "Days",
        Column::LastFundingRound => "Last Round",
        Column::TotalFunding => "Total",
        Column::Location => "Location",
        Column::Industries => "Industries",
        Column::Description => "Description",
    }
}

fn render_cell(content: CellContent, has_logo: bool) -> Cell<'static> {
    match content {
        CellContent::Logo { path } => {
            if path.is_some() && has_logo {
                Cell::from(Span::styled(LOGO_MARK, Style::default().fg(theme::ACCENT)))
            } else {
                Cell::from(Span::styled(LOGO_PLACEHOLDER, Style::default().fg(theme::MUTED)))
            }
        }
        CellContent::Company { name, url } => {
            let style = if url.is_some() {
                Style::default().fg(theme::LINK).add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme::LINK)
            };
            Cell::from(Span::styled(name, style.add_modifier(Modifier::BOLD)))
        }
        CellContent::Rank { rank, change } => {
            let mut spans = vec![Span::raw(rank)];
            if let Some(indicator) = change.indicator() {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(
                    indicator,
                    Style::default()
                        .fg(theme::change_color(change))
                        .add_modifier(Modifier::BOLD),
                ));
            }
            Cell::from(TextLine::from(spans))
        }
        CellContent::Stage { label, style } => match style {
            Some(style) => Cell::from(Span::styled(
                format!(" {label} "),
                Style::default().fg(Color::Black).bg(theme::rgb(style.color)),
            )),
            None => Cell::from(""),
        },
        CellContent::Amount { text, emphasised } => {
            let style = if emphasised {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Cell::from(Span::styled(text, style))
        }
        CellContent::Tags { tags } => Cell::from(Span::styled(
            tags.join(" · "),
            Style::default().fg(theme::MUTED),
        )),
        CellContent::Text { text } => Cell::from(text),
    }
}

pub fn render_leaderboard(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title = format!(
        " Leaderboard ({} of {}) ",
        app.visible.len(),
        app.dashboard.records().len()
    );
    let block = Block::default()
        .title(title)
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_style(theme::border_style(app.focus == Focus::Table));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.visible.is_empty() {
        let message = if app.dashboard.records().is_empty() {
            "No companies in the dataset"
        } else {
            "No companies match the search"
        };
        let paragraph = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme::MUTED));
        f.render_widget(paragraph, inner);
        return;
    }

    let header = Row::new(
        DISPLAY_COLUMNS
            .iter()
            .map(|column| Cell::from(column_title(*column))),
    )
    .style(
        Style::default()
            .fg(theme::HIGHLIGHT)
            .bg(Color::Rgb(200, 200, 200))
            .add_modifier(Modifier::BOLD),
    );

    let max_rows = usize::from(inner.height.saturating_sub(1));
    let offset = scroll_offset(app.visible.len(), max_rows, app.selected);

    let rows = app
        .visible
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_rows)
        .filter_map(|(position, index)| {
            let cells = app.dashboard.table_row(*index)?;
            let has_logo = app.has_logo(*index);
            let row = Row::new(cells.into_iter().map(|cell| render_cell(cell, has_logo)));
            Some(if position == app.selected {
                row.style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            } else {
                row.style(Style::default().fg(Color::White))
            })
        });

    let widths = DISPLAY_COLUMNS.map(column_width);
    let table = Table::new(rows, widths).header(header).column_spacing(1);
    f.render_widget(table, inner);

    let mut scrollbar_state = ScrollbarState::new(app.visible.len())
        .position(app.selected)
        .viewport_content_length(max_rows);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_style(Style::default().fg(theme::HIGHLIGHT));
    f.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_column_has_a_title_and_width() {
        assert_eq!(DISPLAY_COLUMNS.map(column_title).len(), DISPLAY_COLUMNS.len());
        assert_eq!(column_title(Column::TotalFunding), "Total");
        assert_eq!(column_width(Column::Description), Constraint::Min(20));
    }
}
