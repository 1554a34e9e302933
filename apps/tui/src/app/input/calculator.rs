use crate::app::state::{App, CalculatorField, Focus};
use crossterm::event::KeyCode;

pub fn handle_calculator_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Enter => {
            app.focus = Focus::Table;
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.calculator_field = match app.calculator_field {
                CalculatorField::Amount => CalculatorField::Months,
                CalculatorField::Months => CalculatorField::Amount,
            };
        }
        KeyCode::Backspace => {
            app.active_input_mut().pop();
            app.refresh_calculator();
        }
        KeyCode::Char(ch) => {
            app.active_input_mut().push(ch);
            app.refresh_calculator();
        }
        _ => {}
    }
}
