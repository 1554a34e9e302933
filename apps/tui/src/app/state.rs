use crate::app::debounce::Debouncer;
use crate::app::search::visible_rows;
use funding_leaderboard::Settings;
use leaderboard_core::velocity::CalculatorResult;
use leaderboard_core::word_cloud::RELAYOUT_DEBOUNCE;
use leaderboard_core::{CompanyRecord, Dashboard};
use leaderboard_core::ticker::TickerTrack;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Table,
    Search,
    Calculator,
}

/// Right-hand visualisation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Chart,
    Map,
    WordCloud,
}

impl Panel {
    pub const ALL: [Self; 3] = [Self::Chart, Self::Map, Self::WordCloud];

    pub const fn title(self) -> &'static str {
        match self {
            Self::Chart => "Growth vs Funding",
            Self::Map => "Map",
            Self::WordCloud => "Word Cloud",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorField {
    Amount,
    Months,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub dashboard: Dashboard,
    pub logos: Vec<bool>,
    pub focus: Focus,
    pub panel: Panel,
    pub show_help: bool,
    pub search_input: String,
    pub fuzzy_search: bool,
    pub visible: Vec<usize>,
    pub selected: usize,
    pub amount_input: String,
    pub months_input: String,
    pub calculator_field: CalculatorField,
    pub calculator_result: Option<CalculatorResult>,
    pub ticker: TickerTrack,
    pub ticker_loop: Duration,
    pub started: Instant,
    pub last_frame: Instant,
    pub cloud_drawn_at: Instant,
    pub relayout: Debouncer,
    pub status_message: String,
}

impl App {
    pub fn new(dashboard: Dashboard, logos: Vec<bool>, settings: &Settings) -> Self {
        let ticker = dashboard.ticker(&mut rand::thread_rng());
        let visible = (0..dashboard.records().len()).collect();
        let now = Instant::now();
        Self {
            running: true,
            dashboard,
            logos,
            focus: Focus::Table,
            panel: Panel::Chart,
            show_help: false,
            search_input: String::new(),
            fuzzy_search: settings.fuzzy_search,
            visible,
            selected: 0,
            amount_input: String::new(),
            months_input: String::new(),
            calculator_field: CalculatorField::Amount,
            calculator_result: None,
            ticker,
            ticker_loop: Duration::from_secs(settings.ticker_seconds),
            started: now,
            last_frame: now,
            cloud_drawn_at: now,
            relayout: Debouncer::new(RELAYOUT_DEBOUNCE),
            status_message: String::new(),
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        self.last_frame = now;

        if self.relayout.fire(now) {
            debug!("word cloud relayout");
            self.cloud_drawn_at = now;
        }
    }

    pub fn on_resize(&mut self) {
        self.relayout.trigger(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        self.last_frame.saturating_duration_since(self.started)
    }

    pub fn cloud_elapsed(&self) -> Duration {
        self.last_frame.saturating_duration_since(self.cloud_drawn_at)
    }

    pub fn selected_record(&self) -> Option<&CompanyRecord> {
        self.visible
            .get(self.selected)
            .and_then(|index| self.dashboard.record(*index))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.visible.get(self.selected).copied()
    }

    /// Re-runs the search filter; called on every search keystroke.
    pub fn refresh_search(&mut self) {
        self.visible = visible_rows(&self.dashboard, &self.search_input, self.fuzzy_search);
        self.selected = self.selected.min(self.visible.len().saturating_sub(1));
        self.status_message = if self.search_input.trim().is_empty() {
            String::new()
        } else {
            format!(
                "{} of {} companies match",
                self.visible.len(),
                self.dashboard.records().len()
            )
        };
    }

    /// Re-runs the calculator; called on every calculator keystroke.
    pub fn refresh_calculator(&mut self) {
        self.calculator_result = self
            .dashboard
            .calculate(&self.amount_input, &self.months_input);
    }

    pub fn reshuffle_ticker(&mut self) {
        self.ticker = self.dashboard.ticker(&mut rand::thread_rng());
        self.started = Instant::now();
        self.status_message = "Ticker reshuffled".to_string();
    }

    pub fn toggle_fuzzy(&mut self) {
        self.fuzzy_search = !self.fuzzy_search;
        self.refresh_search();
        self.status_message = if self.fuzzy_search {
            "Fuzzy search on".to_string()
        } else {
            "Fuzzy search off".to_string()
        };
    }

    pub fn active_input_mut(&mut self) -> &mut String {
        match self.calculator_field {
            CalculatorField::Amount => &mut self.amount_input,
            CalculatorField::Months => &mut self.months_input,
        }
    }

    pub fn has_logo(&self, index: usize) -> bool {
        self.logos.get(index).copied().unwrap_or(false)
    }
}

#[cfg(test)]
pub fn sample_app() -> App {
    use leaderboard_core::RawDataset;
    use std::path::PathBuf;

    let dataset = RawDataset::from_json_str(
        r#"{"headerData": [["Ranking", "Company Name", "Funding Growth Rate ($/day)"]],
            "companyData": [["1", "Acme", "9000"], ["2", "Globex", "4000"], ["3", "Initech", "100"]]}"#,
    )
    .unwrap_or_default();
    let settings = Settings {
        data_path: PathBuf::from("data.json"),
        logo_root: PathBuf::from("."),
        ticker_seconds: 360,
        fuzzy_search: false,
        debug: false,
    };
    App::new(Dashboard::from_dataset(&dataset), vec![true, false], &settings)
}
