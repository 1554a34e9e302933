use crate::app::state::{Focus, Panel};
use crate::app::App;
use crate::ui::theme;
use crate::ui::widgets::calculator::render_calculator;
use crate::ui::widgets::charts::render_growth_chart;
use crate::ui::widgets::leaderboard::render_leaderboard;
use crate::ui::widgets::map::render_map;
use crate::ui::widgets::stats::render_stats;
use crate::ui::widgets::ticker::render_ticker;
use crate::ui::widgets::word_cloud::render_word_cloud;
use leaderboard_core::Column;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

pub fn render_dashboard(app: &App, f: &mut Frame<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Ticker
            Constraint::Length(5), // Stats cards
            Constraint::Min(10),   // Table and panels
            Constraint::Length(3), // Search
            Constraint::Length(1), // Shortcuts
        ])
        .split(f.area());

    render_title(app, f, rows[0]);
    render_ticker(app, f, rows[1]);
    render_stats(app, f, rows[2]);
    render_body(app, f, rows[3]);
    render_search(app, f, rows[4]);
    render_shortcuts(app, f, rows[5]);
}

fn render_title(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title = TextLine::from(vec![
        Span::styled(
            "Funding Growth ",
            Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("Leaderboard", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  {} companies", app.dashboard.records().len()),
            Style::default().fg(theme::MUTED),
        ),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn render_body(app: &App, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(4)])
        .split(columns[0]);
    render_leaderboard(app, f, left[0]);
    render_selection(app, f, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Panel tabs
            Constraint::Min(5),    // Active panel
            Constraint::Length(6), // Calculator
        ])
        .split(columns[1]);

    render_panel_tabs(app, f, right[0]);
    match app.panel {
        Panel::Chart => render_growth_chart(app, f, right[1]),
        Panel::Map => render_map(app, f, right[1]),
        Panel::WordCloud => render_word_cloud(app, f, right[1]),
    }
    render_calculator(app, f, right[2]);
}

fn render_panel_tabs(app: &App, f: &mut Frame<'_>, area: Rect) {
    let titles = Panel::ALL
        .iter()
        .enumerate()
        .map(|(i, panel)| format!("{} {}", i + 1, panel.title()));
    let tabs = Tabs::new(titles)
        .select(app.panel.index())
        .style(Style::default().fg(theme::MUTED))
        .highlight_style(
            Style::default()
                .fg(ratatui::style::Color::White)
                .bg(theme::HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

/// Description and website of the highlighted company.
fn render_selection(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme::border_style(false));

    let lines = app.selected_record().map_or_else(Vec::new, |record| {
        let mut heading = vec![Span::styled(
            record.name().to_string(),
            Style::default().fg(theme::LINK).add_modifier(Modifier::BOLD),
        )];
        if let Some(url) = &record.url {
            heading.push(Span::raw("  "));
            heading.push(Span::styled(
                url.clone(),
                Style::default()
                    .fg(theme::LINK)
                    .add_modifier(Modifier::UNDERLINED),
            ));
        }
        vec![
            TextLine::from(heading),
            TextLine::from(record.cell(Column::Description).to_string()),
        ]
    });

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_search(app: &App, f: &mut Frame<'_>, area: Rect) {
    let focused = app.focus == Focus::Search;
    let mode = if app.fuzzy_search { "fuzzy" } else { "exact" };
    let cursor = if focused { "_" } else { "" };

    let line = if app.search_input.is_empty() && !focused {
        TextLine::from(Span::styled(
            "Press / to search by company name",
            Style::default().fg(theme::MUTED),
        ))
    } else {
        TextLine::from(format!("{}{cursor}", app.search_input))
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(format!(" Search ({mode}) "))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_style(theme::border_style(focused)),
    );
    f.render_widget(paragraph, area);
}

fn shortcut_hints(focus: Focus) -> &'static [(&'static str, &'static str)] {
    match focus {
        Focus::Table => &[
            ("↑/↓", "Select"),
            ("/", "Search"),
            ("c", "Calculator"),
            ("Tab", "Panel"),
            ("f", "Fuzzy"),
            ("r", "Reshuffle"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
        Focus::Search => &[("Enter", "Done"), ("Esc", "Clear")],
        Focus::Calculator => &[("Tab", "Next field"), ("Esc", "Done")],
    }
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let mut spans = Vec::new();
    for (key, action) in shortcut_hints(app.focus) {
        spans.push(Span::styled(*key, theme::key_style()));
        spans.push(Span::raw(format!(": {action}  ")));
    }
    if !app.status_message.is_empty() {
        spans.push(Span::styled(
            format!("| {}", app.status_message),
            Style::default().fg(theme::ACCENT),
        ));
    }
    f.render_widget(Paragraph::new(TextLine::from(spans)), area);
}
