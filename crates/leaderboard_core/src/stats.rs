use std::collections::HashMap;

use serde::Serialize;

use crate::format::format_number;

pub const UNAVAILABLE_MESSAGE: &str = "Statistics data is not available.";
pub const MISSING_VALUE: &str = "N/A";

/// Label/value pairs from the summary statistics rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryStats {
    values: HashMap<String, String>,
}

impl SummaryStats {
    /// Reads row 0 as labels and row 1 as values. `None` with fewer than two
    /// rows. Labels without a value are treated as missing.
    pub fn from_rows(rows: &[Vec<String>]) -> Option<Self> {
        let [labels, values, ..] = rows else {
            return None;
        };
        let values = labels
            .iter()
            .zip(values)
            .map(|(label, value)| (label.clone(), value.clone()))
            .collect();
        Some(Self { values })
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.values.get(label).map(String::as_str)
    }

    /// Display form of one statistic: `N/A` when absent, `$` + compact
    /// number for currency values, raw text otherwise.
    pub fn display(&self, label: &str, currency: bool) -> String {
        match self.get(label) {
            None => MISSING_VALUE.to_string(),
            Some(value) if currency => format!("${}", format_number(value)),
            Some(value) => value.to_string(),
        }
    }

    pub fn cards(&self) -> Vec<StatCard> {
        CARD_SPECS
            .iter()
            .map(|spec| StatCard {
                title: spec.title,
                value: self.display(spec.key, spec.currency),
                by: spec.by_key.map(|key| self.display(key, false)),
            })
            .collect()
    }
}

struct CardSpec {
    title: &'static str,
    key: &'static str,
    currency: bool,
    by_key: Option<&'static str>,
}

const CARD_SPECS: [CardSpec; 5] = [
    CardSpec {
        title: "Companies Tracked",
        key: "Number of Companies Tracked",
        currency: false,
        by_key: None,
    },
    CardSpec {
        title: "Avg FGR (daily)",
        key: "Average Funding Growth Rate (daily)",
        currency: true,
        by_key: None,
    },
    CardSpec {
        title: "Max Funding Gain",
        key: "Max Funding Gain Since Last Round",
        currency: true,
        by_key: Some("By (Max Funding Gain Since Last Round)"),
    },
    CardSpec {
        title: "Max Total Funding",
        key: "Max Funding",
        currency: true,
        by_key: Some("By (Max Funding)"),
    },
    CardSpec {
        title: "Avg Total Funding",
        key: "Average Funding",
        currency: true,
        by_key: None,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    /// Shown as `by <name>` under the value.
    pub by: Option<String>,
}

/// What the statistics panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "cards", rename_all = "snake_case")]
pub enum StatsPanel {
    Cards(Vec<StatCard>),
    Unavailable,
}

impl StatsPanel {
    pub fn from_rows(rows: &[Vec<String>]) -> Self {
        SummaryStats::from_rows(rows).map_or(Self::Unavailable, |stats| Self::Cards(stats.cards()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(labels: &[&str], values: &[&str]) -> Vec<Vec<String>> {
        let to_row = |row: &[&str]| -> Vec<String> { row.iter().map(|s| (*s).to_string()).collect() };
        vec![to_row(labels), to_row(values)]
    }

    #[test]
    fn short_stats_are_unavailable() {
        assert_eq!(StatsPanel::from_rows(&[]), StatsPanel::Unavailable);
        assert_eq!(
            StatsPanel::from_rows(&[vec!["Max Funding".to_string()]]),
            StatsPanel::Unavailable
        );
    }

    #[test]
    fn missing_keys_show_not_available() {
        let stats = SummaryStats::from_rows(&rows(&["Max Funding"], &["2000000000"]));
        let cards = stats.map(|stats| stats.cards()).unwrap_or_default();

        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].value, MISSING_VALUE);
        assert_eq!(cards[3].title, "Max Total Funding");
        assert_eq!(cards[3].value, "$2B");
        assert_eq!(cards[3].by.as_deref(), Some(MISSING_VALUE));
        assert_eq!(cards[4].by, None);
    }

    #[test]
    fn counts_are_shown_raw_and_amounts_compact() {
        let stats = SummaryStats::from_rows(&rows(
            &[
                "Number of Companies Tracked",
                "Average Funding Growth Rate (daily)",
                "Max Funding Gain Since Last Round",
                "By (Max Funding Gain Since Last Round)",
            ],
            &["1234", "54321.5", "not disclosed", "Acme"],
        ));
        let cards = stats.map(|stats| stats.cards()).unwrap_or_default();

        assert_eq!(cards[0].value, "1234");
        assert_eq!(cards[1].value, "$54.3K");
        assert_eq!(cards[2].value, "$not disclosed");
        assert_eq!(cards[2].by.as_deref(), Some("Acme"));
    }

    #[test]
    fn labels_without_values_are_missing() {
        let stats = SummaryStats::from_rows(&rows(&["Average Funding", "Max Funding"], &["10"]));
        assert_eq!(stats.as_ref().and_then(|s| s.get("Max Funding")), None);
        assert_eq!(stats.map(|s| s.display("Average Funding", true)).as_deref(), Some("$10"));
    }
}
