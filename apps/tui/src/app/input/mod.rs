mod calculator;
mod help;
mod helpers;
mod search;
mod table;

use crate::app::state::{App, Focus};
use crossterm::event::KeyCode;

pub fn handle_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    match app.focus {
        Focus::Table => table::handle_table_input(app, key),
        Focus::Search => search::handle_search_input(app, key),
        Focus::Calculator => calculator::handle_calculator_input(app, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{sample_app, CalculatorField, Panel};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            handle_input(app, *key);
        }
    }

    #[test]
    fn typing_a_query_filters_on_every_key() {
        let mut app = sample_app();
        press(&mut app, &[KeyCode::Char('/'), KeyCode::Char('I')]);
        assert_eq!(app.focus, Focus::Search);
        assert_eq!(app.visible, [2]);

        press(&mut app, &[KeyCode::Backspace]);
        assert_eq!(app.visible, [0, 1, 2]);

        press(&mut app, &[KeyCode::Char('x'), KeyCode::Esc]);
        assert_eq!(app.focus, Focus::Table);
        assert!(app.search_input.is_empty());
        assert_eq!(app.visible.len(), 3);
    }

    #[test]
    fn calculator_recomputes_on_every_key() {
        let mut app = sample_app();
        press(&mut app, &[KeyCode::Char('c'), KeyCode::Char('2')]);
        assert_eq!(app.focus, Focus::Calculator);
        assert!(app.calculator_result.is_none());

        press(&mut app, &[KeyCode::Tab, KeyCode::Char('6')]);
        assert_eq!(app.calculator_field, CalculatorField::Months);
        let result = app.calculator_result.map(|result| result.velocity_label());
        assert_eq!(result.as_deref(), Some("$10,951 / day"));
    }

    #[test]
    fn selection_stays_inside_visible_rows() {
        let mut app = sample_app();
        press(&mut app, &[KeyCode::End, KeyCode::Down, KeyCode::Down]);
        assert_eq!(app.selected, 2);
        press(&mut app, &[KeyCode::PageUp]);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn panels_cycle_and_jump() {
        let mut app = sample_app();
        press(&mut app, &[KeyCode::BackTab]);
        assert_eq!(app.panel, Panel::WordCloud);
        press(&mut app, &[KeyCode::Char('2')]);
        assert_eq!(app.panel, Panel::Map);
    }

    #[test]
    fn help_swallows_keys_until_closed() {
        let mut app = sample_app();
        press(&mut app, &[KeyCode::F(1), KeyCode::Char('q')]);
        assert!(app.running);
        press(&mut app, &[KeyCode::Esc, KeyCode::Char('q')]);
        assert!(!app.running);
    }
}
