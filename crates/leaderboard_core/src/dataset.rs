use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dataset has no header row")]
    MissingHeaderRow,
}

/// The document exported for the dashboard, kept as plain text cells.
///
/// Cells may arrive as strings, numbers, booleans or `null`; they are all
/// normalised to text on the way in (`null` becomes an empty string).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDataset {
    #[serde(default, deserialize_with = "text_rows")]
    pub header_data: Vec<Vec<String>>,
    #[serde(default, deserialize_with = "text_rows")]
    pub company_data: Vec<Vec<String>>,
    #[serde(default, deserialize_with = "text_rows")]
    pub rank_changes_data: Vec<Vec<String>>,
    #[serde(default, deserialize_with = "text_rows")]
    pub stats_data: Vec<Vec<String>>,
}

impl RawDataset {
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        serde_json::from_str::<Self>(json)?.validate()
    }

    /// Rejects documents that have company rows but nothing to label them with.
    pub fn validate(self) -> Result<Self, LoadError> {
        if self.header_data.is_empty() && !self.company_data.is_empty() {
            return Err(LoadError::MissingHeaderRow);
        }
        Ok(self)
    }

    /// The first header row; the only one the projector reads.
    pub fn headers(&self) -> &[String] {
        self.header_data.first().map_or(&[], Vec::as_slice)
    }

    /// Rank changes flattened into one sequence parallel to the company rows.
    pub fn rank_changes(&self) -> Vec<&str> {
        self.rank_changes_data
            .iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

fn text_rows<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Vec<String>>, D::Error> {
    let rows = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(rows
        .iter()
        .map(|row| match row {
            Value::Array(cells) => cells.iter().map(cell_text).collect(),
            single => vec![cell_text(single)],
        })
        .collect())
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number_text(number),
        nested => nested.to_string(),
    }
}

/// Largest magnitude below which every integer is exactly representable.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Whole floats print without a fraction (`1.0` becomes `"1"`), the way
/// spreadsheet exports show them.
fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER => {
            // -0.0 prints as "-0"
            let value = if value == 0.0 { 0.0 } else { value };
            format!("{value:.0}")
        }
        _ => number.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_normalised_to_text() -> Result<(), LoadError> {
        let dataset = RawDataset::from_json_str(
            r#"{
                "headerData": [["Company Name", "Ranking"]],
                "companyData": [["Acme", 1], [null, "2"]],
                "rankChangesData": [["3"], ["-1"]],
                "statsData": [["Max Funding"], [1200000]]
            }"#,
        )?;

        assert_eq!(dataset.headers(), ["Company Name", "Ranking"]);
        assert_eq!(dataset.company_data[0], ["Acme", "1"]);
        assert_eq!(dataset.company_data[1], ["", "2"]);
        assert_eq!(dataset.rank_changes(), ["3", "-1"]);
        assert_eq!(dataset.stats_data[1], ["1200000"]);
        Ok(())
    }

    #[test]
    fn whole_floats_lose_their_fraction() -> Result<(), LoadError> {
        let dataset = RawDataset::from_json_str(
            r#"{
                "headerData": [["Ranking", "Company Name", "Funding Growth Rate ($/day)"]],
                "companyData": [[1.0, "Acme", 2500.5], [-0.0, "Globex", 12345678.0]],
                "statsData": [["Companies Tracked"], [1234.0]]
            }"#,
        )?;

        assert_eq!(dataset.company_data[0], ["1", "Acme", "2500.5"]);
        assert_eq!(dataset.company_data[1], ["0", "Globex", "12345678"]);
        assert_eq!(dataset.stats_data[1], ["1234"]);
        Ok(())
    }

    #[test]
    fn flat_rank_changes_are_accepted() -> Result<(), LoadError> {
        let dataset = RawDataset::from_json_str(
            r#"{"headerData": [["Company Name"]], "companyData": [], "rankChangesData": ["1", 2]}"#,
        )?;
        assert_eq!(dataset.rank_changes(), ["1", "2"]);
        Ok(())
    }

    #[test]
    fn optional_sections_default_to_empty() -> Result<(), LoadError> {
        let dataset = RawDataset::from_json_str(r#"{"headerData": [["Company Name"]]}"#)?;
        assert!(dataset.company_data.is_empty());
        assert!(dataset.rank_changes().is_empty());
        assert!(dataset.stats_data.is_empty());
        Ok(())
    }

    #[test]
    fn rows_without_headers_are_rejected() {
        let result = RawDataset::from_json_str(r#"{"companyData": [["Acme"]]}"#);
        assert!(matches!(result, Err(LoadError::MissingHeaderRow)));
    }

    #[test]
    fn malformed_json_is_a_load_error() {
        let result = RawDataset::from_json_str("{not json");
        assert!(matches!(result, Err(LoadError::Json(_))));
    }
}
