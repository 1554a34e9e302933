use crate::app::input::helpers::{step_selection, wrap_decrement, wrap_increment};
use crate::app::state::{App, Focus, Panel};
use crossterm::event::KeyCode;

const PAGE_ROWS: isize = 10;

pub fn handle_table_input(app: &mut App, key: KeyCode) {
    let total_rows = app.visible.len();

    match key {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Esc => {
            if !app.search_input.is_empty() {
                app.search_input.clear();
                app.refresh_search();
            }
        }
        KeyCode::Char('/') => {
            app.focus = Focus::Search;
        }
        KeyCode::Char('c') => {
            app.focus = Focus::Calculator;
        }
        KeyCode::Char('f') => app.toggle_fuzzy(),
        KeyCode::Char('r') => app.reshuffle_ticker(),
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.selected = step_selection(app.selected, -1, total_rows);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.selected = step_selection(app.selected, 1, total_rows);
        }
        KeyCode::PageUp => {
            app.selected = step_selection(app.selected, -PAGE_ROWS, total_rows);
        }
        KeyCode::PageDown => {
            app.selected = step_selection(app.selected, PAGE_ROWS, total_rows);
        }
        KeyCode::Home => {
            app.selected = 0;
        }
        KeyCode::End => {
            app.selected = total_rows.saturating_sub(1);
        }
        KeyCode::Tab | KeyCode::Right => {
            app.panel = Panel::ALL[wrap_increment(app.panel.index(), Panel::ALL.len())];
        }
        KeyCode::BackTab | KeyCode::Left => {
            app.panel = Panel::ALL[wrap_decrement(app.panel.index(), Panel::ALL.len())];
        }
        KeyCode::Char('1') => app.panel = Panel::Chart,
        KeyCode::Char('2') => app.panel = Panel::Map,
        KeyCode::Char('3') => app.panel = Panel::WordCloud,
        _ => {}
    }
}
