use crate::animation::{AnimationClock, AnimationMode};
use leaderboard_core::ticker::{TickerTrack, DEFAULT_LOOP_SECONDS};
use leaderboard_core::velocity::CalculatorResult;
use leaderboard_core::Dashboard;
use ratzilla::event::KeyCode;

pub const PANEL_TITLES: [&str; 3] = ["Growth vs Funding", "Map", "Word Cloud"];
const PAGE_ROWS: usize = 10;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Focus {
    Table,
    Search,
    Amount,
    Months,
}

/// Everything the page keeps between frames. `dashboard` stays `None`
/// until `data.json` has been fetched and parsed.
#[derive(Debug)]
pub struct WebState {
    pub dashboard: Option<Dashboard>,
    pub ticker: TickerTrack,
    pub clock: AnimationClock,
    pub cloud_clock: AnimationClock,
    pub mode: AnimationMode,
    pub focus: Focus,
    pub tab_index: usize,
    pub selected: usize,
    pub search_input: String,
    pub visible: Vec<usize>,
    pub amount_input: String,
    pub months_input: String,
    pub calculator: Option<CalculatorResult>,
}

impl Default for WebState {
    fn default() -> Self {
        Self {
            dashboard: None,
            ticker: TickerTrack::default(),
            clock: AnimationClock::default(),
            cloud_clock: AnimationClock::default(),
            mode: AnimationMode::Running,
            focus: Focus::Table,
            tab_index: 0,
            selected: 0,
            search_input: String::new(),
            visible: Vec::new(),
            amount_input: String::new(),
            months_input: String::new(),
            calculator: None,
        }
    }
}

impl WebState {
    pub fn load(&mut self, dashboard: Dashboard) {
        self.ticker = dashboard.ticker(&mut rand::thread_rng());
        self.visible = (0..dashboard.records().len()).collect();
        self.dashboard = Some(dashboard);
        self.selected = 0;
        self.clock.reset();
        self.cloud_clock.reset();
    }

    pub fn tick(&mut self, now_seconds: f64) {
        self.clock.tick(now_seconds, self.mode);
        self.cloud_clock.tick(now_seconds, AnimationMode::Running);
    }

    pub const fn loop_seconds() -> f64 {
        DEFAULT_LOOP_SECONDS as f64
    }

    fn refresh_search(&mut self) {
        if let Some(dashboard) = &self.dashboard {
            self.visible = dashboard.search(&self.search_input);
        }
        self.selected = self.selected.min(self.visible.len().saturating_sub(1));
    }

    fn refresh_calculator(&mut self) {
        self.calculator = self
            .dashboard
            .as_ref()
            .and_then(|dashboard| dashboard.calculate(&self.amount_input, &self.months_input));
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.visible.get(self.selected).copied()
    }

    fn select_tab(&mut self, index: usize) {
        if index != self.tab_index {
            self.tab_index = index;
            // Word cloud plays its reveal again whenever it comes into view
            self.cloud_clock.reset();
        }
    }

    pub fn on_key(&mut self, code: KeyCode) {
        match self.focus {
            Focus::Table => self.on_table_key(code),
            Focus::Search => self.on_text_key(code),
            Focus::Amount | Focus::Months => self.on_calculator_key(code),
        }
    }

    fn on_table_key(&mut self, code: KeyCode) {
        let last = self.visible.len().saturating_sub(1);
        match code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last),
            KeyCode::PageUp => self.selected = self.selected.saturating_sub(PAGE_ROWS),
            KeyCode::PageDown => self.selected = (self.selected + PAGE_ROWS).min(last),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = last,
            KeyCode::Left => {
                self.select_tab((self.tab_index + PANEL_TITLES.len() - 1) % PANEL_TITLES.len());
            }
            KeyCode::Right | KeyCode::Tab => {
                self.select_tab((self.tab_index + 1) % PANEL_TITLES.len());
            }
            KeyCode::Char('1') => self.select_tab(0),
            KeyCode::Char('2') => self.select_tab(1),
            KeyCode::Char('3') => self.select_tab(2),
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Char('c') => self.focus = Focus::Amount,
            KeyCode::Char('p') => {
                self.mode = match self.mode {
                    AnimationMode::Running => AnimationMode::Paused,
                    AnimationMode::Paused => AnimationMode::Running,
                };
            }
            KeyCode::Char('r') => {
                if let Some(dashboard) = &self.dashboard {
                    self.ticker = dashboard.ticker(&mut rand::thread_rng());
                    self.clock.reset();
                }
            }
            _ => {}
        }
    }

    fn on_text_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.search_input.clear();
                self.refresh_search();
                self.focus = Focus::Table;
            }
            KeyCode::Enter | KeyCode::Down => self.focus = Focus::Table,
            KeyCode::Backspace => {
                self.search_input.pop();
                self.refresh_search();
            }
            KeyCode::Char(ch) => {
                self.search_input.push(ch);
                self.refresh_search();
            }
            _ => {}
        }
    }

    fn on_calculator_key(&mut self, code: KeyCode) {
        let input = if self.focus == Focus::Amount {
            &mut self.amount_input
        } else {
            &mut self.months_input
        };
        match code {
            KeyCode::Esc | KeyCode::Enter => {
                self.focus = Focus::Table;
                return;
            }
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                self.focus = if self.focus == Focus::Amount {
                    Focus::Months
                } else {
                    Focus::Amount
                };
                return;
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '.' || ch == '-' => input.push(ch),
            _ => return,
        }
        self.refresh_calculator();
    }
}
