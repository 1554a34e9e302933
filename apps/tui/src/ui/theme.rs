use leaderboard_core::{RankChange, Rgb};
use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Cyan;
pub const HIGHLIGHT: Color = Color::Rgb(0, 0, 238);
pub const MUTED: Color = Color::Gray;
pub const KEY_HINT: Color = Color::Yellow;
pub const GAIN: Color = Color::Green;
pub const DROP: Color = Color::Red;
pub const LINK: Color = Color::LightBlue;

pub const fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

pub const fn change_color(change: RankChange) -> Color {
    match change {
        RankChange::Gain(_) => GAIN,
        RankChange::Drop(_) => DROP,
        RankChange::Unchanged => MUTED,
    }
}

pub fn title_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(KEY_HINT)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn key_style() -> Style {
    Style::default().fg(KEY_HINT).add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_colors_map_to_terminal_rgb() {
        assert_eq!(rgb(Rgb(0xa7, 0x8b, 0xfa)), Color::Rgb(167, 139, 250));
    }

    #[test]
    fn rank_movement_colors() {
        assert_eq!(change_color(RankChange::Gain(1)), GAIN);
        assert_eq!(change_color(RankChange::Drop(4)), DROP);
        assert_eq!(change_color(RankChange::Unchanged), MUTED);
    }
}
