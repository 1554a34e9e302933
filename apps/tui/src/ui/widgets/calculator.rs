use crate::app::state::{CalculatorField, Focus};
use crate::app::App;
use crate::ui::theme;
use leaderboard_core::velocity::CalculatorResult;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

fn field_line<'a>(label: &'a str, value: &'a str, active: bool, unit: &'a str) -> TextLine<'a> {
    let value_style = if active {
        Style::default()
            .fg(theme::HIGHLIGHT)
            .bg(ratatui::style::Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let cursor = if active { "_" } else { "" };
    TextLine::from(vec![
        Span::styled(format!("{label:<18}"), Style::default().fg(theme::MUTED)),
        Span::styled(format!("{value}{cursor}"), value_style),
        Span::raw(" "),
        Span::styled(unit, Style::default().fg(theme::MUTED)),
    ])
}

/// Result lines; nothing at all while the inputs are invalid.
fn result_lines(result: Option<&CalculatorResult>) -> Vec<TextLine<'static>> {
    let Some(result) = result else {
        return vec![TextLine::from(Span::styled(
            "Enter an amount and a positive number of months",
            Style::default().fg(theme::MUTED),
        ))];
    };

    let mut line = vec![Span::styled(
        result.velocity_label(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if let Some(rank) = result.rank {
        line.push(Span::raw("  "));
        line.push(Span::styled(rank.rank_label(), Style::default().fg(theme::ACCENT)));
        line.push(Span::raw(format!(" ({})", rank.top_label())));
    }
    vec![TextLine::from(line)]
}

pub fn render_calculator(app: &App, f: &mut Frame<'_>, area: Rect) {
    let focused = app.focus == Focus::Calculator;
    let mut lines = vec![
        field_line(
            "Amount raised",
            &app.amount_input,
            focused && app.calculator_field == CalculatorField::Amount,
            "$M",
        ),
        field_line(
            "Since founding",
            &app.months_input,
            focused && app.calculator_field == CalculatorField::Months,
            "months",
        ),
        TextLine::from(""),
    ];
    lines.extend(result_lines(app.calculator_result.as_ref()));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" FGR Calculator ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_style(theme::border_style(focused)),
    );
    f.render_widget(paragraph, area);
}
