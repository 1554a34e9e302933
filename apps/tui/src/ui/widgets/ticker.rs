use crate::app::App;
use crate::ui::theme;
use leaderboard_core::ticker::{scroll_offset, TickerTrack};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// The looped track as styled characters, ready to be windowed.
fn styled_chars(track: &TickerTrack) -> Vec<(char, Style)> {
    let rank_style = Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD);
    let name_style = Style::default().fg(Color::White);
    let plain = Style::default();

    let mut chars = Vec::new();
    let mut push = |text: &str, style: Style| chars.extend(text.chars().map(|ch| (ch, style)));
    for item in track.looped() {
        push(&format!("#{}", item.rank), rank_style);
        push(" ", plain);
        push(&item.name, name_style);
        if let Some(indicator) = item.change.indicator() {
            push(" ", plain);
            push(&indicator, Style::default().fg(theme::change_color(item.change)));
        }
        push(TickerTrack::separator(), plain);
    }
    chars
}

/// `width` characters of the track starting at `offset`, merged back into
/// spans of equal style.
fn window(chars: &[(char, Style)], offset: usize, width: usize) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut run_style = Style::default();

    for (ch, style) in chars.iter().cycle().skip(offset).take(width) {
        if *style != run_style && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), run_style));
        }
        run_style = *style;
        run.push(*ch);
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, run_style));
    }
    spans
}

pub fn render_ticker(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Ranking Ticker ")
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_style(theme::border_style(false));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.ticker.is_empty() || inner.width == 0 {
        return;
    }

    let chars = styled_chars(&app.ticker);
    // One pass is half of the looped track
    let pass_len = chars.len() / 2;
    let offset = scroll_offset(
        app.elapsed().as_secs_f64(),
        app.ticker_loop.as_secs_f64(),
        pass_len,
    );
    let line = TextLine::from(window(&chars, offset, usize::from(inner.width)));
    f.render_widget(Paragraph::new(line), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span<'_>]) -> String {
        spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn window_wraps_around_the_track() {
        let plain = Style::default();
        let chars: Vec<_> = "abcdef".chars().map(|ch| (ch, plain)).collect();
        assert_eq!(text(&window(&chars, 4, 4)), "efab");
    }

    #[test]
    fn window_merges_equal_styles() {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let chars = vec![('a', bold), ('b', bold), ('c', Style::default())];
        let spans = window(&chars, 0, 3);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "ab");
    }

    #[test]
    fn empty_track_renders_nothing() {
        assert!(window(&[], 0, 10).is_empty());
    }
}
