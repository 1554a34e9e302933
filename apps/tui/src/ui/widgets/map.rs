use crate::app::App;
use crate::ui::theme;
use leaderboard_core::placement::MarkerPlacement;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Map, MapResolution, Points};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

const MARKER_COLOR: Color = Color::Yellow;

/// Title text for the map panel: the selected company when it has a marker.
fn map_title(markers: &[MarkerPlacement], selected: Option<usize>) -> String {
    selected
        .and_then(|index| markers.iter().find(|marker| marker.record_index == index))
        .map_or_else(
            || format!(" Company Map ({} markers) ", markers.len()),
            |marker| format!(" {} ({:.2}, {:.2}) ", marker.name, marker.lat, marker.lon),
        )
}

pub fn render_map(app: &App, f: &mut Frame<'_>, area: Rect) {
    let markers = app.dashboard.markers();
    let selected = app.selected_index();
    let highlighted = selected.and_then(|index| {
        markers
            .iter()
            .find(|marker| marker.record_index == index)
    });

    let coords: Vec<(f64, f64)> = markers.iter().map(|marker| (marker.lon, marker.lat)).collect();

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(map_title(markers, selected))
                .title_style(theme::title_style())
                .borders(Borders::ALL)
                .border_style(theme::border_style(false)),
        )
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
                color: MARKER_COLOR,
            });
            if let Some(marker) = highlighted {
                ctx.print(
                    marker.lon,
                    marker.lat,
                    Span::styled(
                        format!("● {}", marker.name),
                        Style::default()
                            .fg(theme::ACCENT)
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });

    f.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(record_index: usize, name: &str) -> MarkerPlacement {
        MarkerPlacement {
            record_index,
            name: name.to_string(),
            logo: String::new(),
            lat: 51.5,
            lon: -0.12,
        }
    }

    #[test]
    fn title_names_the_selected_marker() {
        let markers = [marker(0, "Acme"), marker(3, "Globex")];
        assert_eq!(map_title(&markers, Some(3)), " Globex (51.50, -0.12) ");
    }

    #[test]
    fn title_counts_markers_without_a_located_selection() {
        let markers = [marker(0, "Acme")];
        assert_eq!(map_title(&markers, Some(1)), " Company Map (1 markers) ");
        assert_eq!(map_title(&markers, None), " Company Map (1 markers) ");
    }
}
