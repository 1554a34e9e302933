use serde::Serialize;

use crate::columns::{Column, DISPLAY_COLUMNS, LATITUDE_HEADER, LONGITUDE_HEADER, WEBSITE_HEADER};
use crate::dataset::RawDataset;
use crate::format::{leading_float, leading_int, parse_numeric};
use crate::stage::FundingStage;

/// Movement in the ranking since the previous export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "direction", content = "places")]
pub enum RankChange {
    Gain(u64),
    Drop(u64),
    Unchanged,
}

impl RankChange {
    pub const fn from_delta(delta: i64) -> Self {
        if delta > 0 {
            Self::Gain(delta.unsigned_abs())
        } else if delta < 0 {
            Self::Drop(delta.unsigned_abs())
        } else {
            Self::Unchanged
        }
    }

    /// `▲ 3` / `▼ 2`; no indicator at all when the rank did not move.
    pub fn indicator(self) -> Option<String> {
        match self {
            Self::Gain(places) => Some(format!("▲ {places}")),
            Self::Drop(places) => Some(format!("▼ {places}")),
            Self::Unchanged => None,
        }
    }
}

/// One leaderboard row, projected onto [`DISPLAY_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyRecord {
    pub cells: Vec<String>,
    pub url: Option<String>,
    pub rank_change: i64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl CompanyRecord {
    pub fn cell(&self, column: Column) -> &str {
        self.cells.get(column.index()).map_or("", String::as_str)
    }

    pub fn name(&self) -> &str {
        self.cell(Column::CompanyName)
    }

    pub fn rank(&self) -> &str {
        self.cell(Column::Ranking)
    }

    pub fn logo(&self) -> &str {
        self.cell(Column::Logo)
    }

    pub fn stage(&self) -> FundingStage {
        FundingStage::classify(Some(self.cell(Column::FundingStage)))
    }

    pub const fn change(&self) -> RankChange {
        RankChange::from_delta(self.rank_change)
    }

    /// Growth rate read with currency noise stripped; unreadable counts as 0.
    pub fn growth_rate(&self) -> f64 {
        parse_numeric(self.cell(Column::FundingGrowthRate)).unwrap_or(0.0)
    }

    pub fn total_funding(&self) -> f64 {
        parse_numeric(self.cell(Column::TotalFunding)).unwrap_or(0.0)
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.lat?, self.lon?))
    }

    /// Comma separated industries, trimmed, empty entries dropped.
    pub fn industries(&self) -> Vec<&str> {
        self.cell(Column::Industries)
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}

/// `logos/<name>.png` with everything but ASCII alphanumerics, space,
/// underscore and hyphen removed and spaces turned into underscores.
pub fn local_logo_path(company_name: &str) -> Option<String> {
    if company_name.is_empty() {
        return None;
    }
    let file_stem: String = company_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect();
    Some(format!("logos/{file_stem}.png"))
}

/// Header positions resolved once per dataset.
#[derive(Debug, Clone)]
struct HeaderIndex {
    columns: Vec<Option<usize>>,
    name: Option<usize>,
    website: Option<usize>,
    latitude: Option<usize>,
    longitude: Option<usize>,
}

impl HeaderIndex {
    fn new(headers: &[String]) -> Self {
        let find = |wanted: &str| headers.iter().position(|header| header == wanted);
        Self {
            columns: DISPLAY_COLUMNS
                .iter()
                .map(|column| find(column.header()))
                .collect(),
            name: find(Column::CompanyName.header()),
            website: find(WEBSITE_HEADER),
            latitude: find(LATITUDE_HEADER),
            longitude: find(LONGITUDE_HEADER),
        }
    }
}

fn raw_cell(row: &[String], index: Option<usize>) -> &str {
    index
        .and_then(|index| row.get(index))
        .map_or("", String::as_str)
}

fn project_row(index: &HeaderIndex, row: &[String], rank_change: Option<&str>) -> CompanyRecord {
    let company_name = raw_cell(row, index.name);

    let cells = DISPLAY_COLUMNS
        .iter()
        .zip(&index.columns)
        .map(|(column, position)| match column {
            Column::Logo => local_logo_path(company_name).unwrap_or_default(),
            _ => raw_cell(row, *position).to_string(),
        })
        .collect();

    let url = Some(raw_cell(row, index.website))
        .filter(|url| !url.trim().is_empty())
        .map(str::to_string);

    CompanyRecord {
        cells,
        url,
        rank_change: rank_change.and_then(leading_int).unwrap_or(0),
        lat: leading_float(raw_cell(row, index.latitude)),
        lon: leading_float(raw_cell(row, index.longitude)),
    }
}

/// Projects every company row, keeping input order. Never fails: unknown or
/// missing columns simply come out as empty cells.
pub fn project_rows(dataset: &RawDataset) -> Vec<CompanyRecord> {
    let index = HeaderIndex::new(dataset.headers());
    let rank_changes = dataset.rank_changes();

    dataset
        .company_data
        .iter()
        .enumerate()
        .map(|(row_index, row)| project_row(&index, row, rank_changes.get(row_index).copied()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(headers: &[&str], rows: &[&[&str]], changes: &[&str]) -> RawDataset {
        let to_row = |row: &[&str]| -> Vec<String> {
            row.iter().map(|cell| (*cell).to_string()).collect()
        };
        RawDataset {
            header_data: vec![to_row(headers)],
            company_data: rows.iter().map(|row| to_row(*row)).collect(),
            rank_changes_data: vec![to_row(changes)],
            stats_data: Vec::new(),
        }
    }

    #[test]
    fn missing_columns_become_empty_cells() {
        let data = dataset(&["Company Name", "Ranking"], &[&["Acme", "1"]], &[]);
        let records = project_rows(&data);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].cells.len(), DISPLAY_COLUMNS.len());
        assert_eq!(records[0].name(), "Acme");
        assert_eq!(records[0].rank(), "1");
        assert_eq!(records[0].cell(Column::TotalFunding), "");
        assert_eq!(records[0].cell(Column::Description), "");
    }

    #[test]
    fn short_rows_do_not_panic() {
        let data = dataset(&["Ranking", "Company Name", "Location"], &[&["4"]], &[]);
        let records = project_rows(&data);
        assert_eq!(records[0].rank(), "4");
        assert_eq!(records[0].name(), "");
        assert_eq!(records[0].logo(), "");
    }

    #[test]
    fn derived_fields_are_resolved() {
        let data = dataset(
            &["Company Name", "Website", "Latitude", "Longitude"],
            &[
                &["Acme Labs, Inc.", "acme.io", "37.77", "-122.41"],
                &["Blank", "", "north", ""],
            ],
            &["3", "oops"],
        );
        let records = project_rows(&data);

        assert_eq!(records[0].logo(), "logos/Acme_Labs_Inc.png");
        assert_eq!(records[0].url.as_deref(), Some("acme.io"));
        assert_eq!(records[0].rank_change, 3);
        assert_eq!(records[0].coordinates(), Some((37.77, -122.41)));

        assert_eq!(records[1].url, None);
        assert_eq!(records[1].rank_change, 0);
        assert_eq!(records[1].coordinates(), None);
    }

    #[test]
    fn row_order_is_preserved() {
        let data = dataset(&["Company Name"], &[&["B"], &["A"], &["C"]], &[]);
        let names: Vec<_> = project_rows(&data)
            .iter()
            .map(|record| record.name().to_string())
            .collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn logo_path_sanitizes_names() {
        assert_eq!(
            local_logo_path("Über AI (beta)"),
            Some("logos/ber_AI_beta.png".to_string())
        );
        assert_eq!(local_logo_path("snake_case-co"), Some("logos/snake_case-co.png".to_string()));
        assert_eq!(local_logo_path(""), None);
    }

    #[test]
    fn rank_change_indicators() {
        assert_eq!(RankChange::from_delta(4).indicator().as_deref(), Some("▲ 4"));
        assert_eq!(RankChange::from_delta(-2).indicator().as_deref(), Some("▼ 2"));
        assert_eq!(RankChange::from_delta(0).indicator(), None);
    }

    #[test]
    fn industries_are_split_and_trimmed() {
        let mut record = project_rows(&dataset(&["Industries"], &[&[" AI , Robotics,,Health "]], &[]))
            .remove(0);
        assert_eq!(record.industries(), ["AI", "Robotics", "Health"]);
        record.cells[Column::Industries.index()] = String::new();
        assert!(record.industries().is_empty());
    }
}
