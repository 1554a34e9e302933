use crate::app::App;
use crate::ui::theme;
use leaderboard_core::stats::{StatCard, StatsPanel, UNAVAILABLE_MESSAGE};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

fn card_text(card: &StatCard) -> Text<'_> {
    let mut lines = vec![TextLine::from(Span::styled(
        card.value.as_str(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))];
    if let Some(by) = &card.by {
        lines.push(TextLine::from(Span::styled(
            format!("by {by}"),
            Style::default().fg(theme::MUTED),
        )));
    }
    Text::from(lines)
}

pub fn render_stats(app: &App, f: &mut Frame<'_>, area: Rect) {
    let cards = match app.dashboard.stats() {
        StatsPanel::Cards(cards) if !cards.is_empty() => cards,
        _ => {
            let paragraph = Paragraph::new(UNAVAILABLE_MESSAGE)
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme::MUTED))
                .block(Block::default().borders(Borders::ALL).border_style(theme::border_style(false)));
            f.render_widget(paragraph, area);
            return;
        }
    };

    let share = u32::try_from(cards.len()).unwrap_or(1);
    let constraints = vec![Constraint::Ratio(1, share); cards.len()];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, column) in cards.iter().zip(columns.iter()) {
        let block = Block::default()
            .title(format!(" {} ", card.title))
            .title_style(Style::default().fg(theme::MUTED))
            .borders(Borders::ALL)
            .border_style(theme::border_style(false));
        f.render_widget(
            Paragraph::new(card_text(card)).alignment(Alignment::Center).block(block),
            *column,
        );
    }
}
