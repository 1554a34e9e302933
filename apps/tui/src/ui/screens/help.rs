use crate::ui::theme;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use funding_leaderboard::CliArgs;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const KEYS: &[(&str, &str)] = &[
    ("↑/↓ j/k", "Move through the leaderboard"),
    ("PgUp/PgDn", "Move ten rows"),
    ("Home/End", "First or last company"),
    ("/", "Search by company name"),
    ("Esc", "Clear the search or leave a field"),
    ("f", "Toggle fuzzy search"),
    ("c", "Open the FGR calculator"),
    ("Tab ←/→ 1-3", "Switch chart, map and word cloud"),
    ("r", "Reshuffle the ticker"),
    ("F1 ?", "Toggle this help"),
    ("q", "Quit"),
];

fn help_lines() -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(Span::styled(
            "Keys",
            Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
    ];
    lines.extend(KEYS.iter().map(|(key, action)| {
        TextLine::from(vec![
            Span::styled(format!("{key:<14}"), theme::key_style()),
            Span::raw(*action),
        ])
    }));
    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        "Command line",
        Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
    )));
    lines.push(TextLine::from(""));
    lines.extend(CliArgs::help_text().lines().map(|line| TextLine::from(line.to_string())));
    lines
}

pub fn render_help_popup(f: &mut Frame<'_>) {
    let area = centered_rect(70, 80, f.area());
    f.render_widget(ClearWidget, area);

    let paragraph = Paragraph::new(help_lines())
        .block(
            Block::default()
                .title(" Help ")
                .title_style(theme::title_style())
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(theme::border_style(true)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
