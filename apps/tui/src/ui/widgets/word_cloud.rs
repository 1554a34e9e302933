use crate::app::App;
use crate::ui::theme;
use leaderboard_core::word_cloud::{flow_lines, revealed_count, CloudWord};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const TIERS: u8 = 3;

fn word_style(word: &CloudWord) -> Style {
    let style = Style::default().fg(theme::rgb(word.group.color()));
    match word.tier(TIERS) {
        0 => style.add_modifier(Modifier::DIM),
        1 => style,
        _ => style.add_modifier(Modifier::BOLD),
    }
}

/// Largest tier words are drawn in capitals, which is as close to a bigger
/// font as a terminal cell gets.
fn word_text(word: &CloudWord) -> String {
    if word.tier(TIERS) + 1 == TIERS {
        word.text.to_uppercase()
    } else {
        word.text.clone()
    }
}

/// Lines of the cloud with only the first `revealed` words (in packing
/// order) drawn; the rest keep their slot as blanks so nothing jumps.
fn cloud_lines(words: &[CloudWord], width: usize, revealed: usize) -> Vec<TextLine<'static>> {
    let mut shown = 0;
    flow_lines(words, width)
        .into_iter()
        .map(|line| {
            let mut spans = Vec::with_capacity(line.len() * 2);
            for (position, index) in line.into_iter().enumerate() {
                if position > 0 {
                    spans.push(Span::raw(" "));
                }
                let word = &words[index];
                let text = word_text(word);
                if shown < revealed {
                    spans.push(Span::styled(text, word_style(word)));
                } else {
                    spans.push(Span::raw(" ".repeat(text.chars().count())));
                }
                shown += 1;
            }
            TextLine::from(spans)
        })
        .collect()
}

pub fn render_word_cloud(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Company Word Cloud ")
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_style(theme::border_style(false));
    let inner = block.inner(area);

    let words = app.dashboard.cloud_words();
    let revealed = revealed_count(app.cloud_elapsed(), words.len());
    let lines = cloud_lines(words, usize::from(inner.width.max(1)), revealed);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use leaderboard_core::StageGroup;

    fn word(text: &str, size: f64) -> CloudWord {
        CloudWord {
            text: text.to_string(),
            size,
            group: StageGroup::Seed,
        }
    }

    fn line_text(line: &TextLine<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn biggest_words_are_capitalised() {
        assert_eq!(word_text(&word("acme", 120.0)), "ACME");
        assert_eq!(word_text(&word("acme", 10.0)), "acme");
    }

    #[test]
    fn unrevealed_words_keep_their_space() {
        let words = [word("small", 10.0), word("big", 120.0)];
        let lines = cloud_lines(&words, 20, 1);

        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "BIG      ");
    }
}
