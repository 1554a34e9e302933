use crate::app::state::{App, Focus};
use crossterm::event::KeyCode;

pub fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            app.search_input.clear();
            app.refresh_search();
            app.focus = Focus::Table;
        }
        KeyCode::Enter | KeyCode::Down => {
            app.focus = Focus::Table;
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.refresh_search();
        }
        KeyCode::Char(ch) => {
            app.search_input.push(ch);
            app.refresh_search();
        }
        _ => {}
    }
}
