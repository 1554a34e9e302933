use crate::projector::CompanyRecord;

/// Case-insensitive substring filter over company names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    pub fn matches(&self, company_name: &str) -> bool {
        self.is_empty() || company_name.to_lowercase().contains(&self.needle)
    }
}

/// Indices of the visible records, in leaderboard order.
pub fn filter_indices(records: &[CompanyRecord], query: &SearchQuery) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| query.matches(record.name()))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::{Column, DISPLAY_COLUMNS};

    fn records(names: &[&str]) -> Vec<CompanyRecord> {
        names
            .iter()
            .map(|name| {
                let mut cells = vec![String::new(); DISPLAY_COLUMNS.len()];
                cells[Column::CompanyName.index()] = (*name).to_string();
                CompanyRecord {
                    cells,
                    url: None,
                    rank_change: 0,
                    lat: None,
                    lon: None,
                }
            })
            .collect()
    }

    #[test]
    fn empty_query_shows_everything() {
        let records = records(&["Acme", "Globex"]);
        assert_eq!(filter_indices(&records, &SearchQuery::new("   ")), [0, 1]);
    }

    #[test]
    fn matching_ignores_case_and_padding() {
        let records = records(&["Acme Robotics", "Globex", "ACME Health", "Initech"]);
        assert_eq!(filter_indices(&records, &SearchQuery::new("  aCmE ")), [0, 2]);
    }

    #[test]
    fn substring_anywhere_in_the_name() {
        let query = SearchQuery::new("tech");
        assert!(query.matches("Initech"));
        assert!(!query.matches("Umbrella"));
    }
}
