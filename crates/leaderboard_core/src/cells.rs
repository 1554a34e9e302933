use serde::Serialize;

use crate::columns::{Column, DISPLAY_COLUMNS};
use crate::format::{ceil_days, format_number, leading_float};
use crate::projector::{CompanyRecord, RankChange};
use crate::stage::{FundingStage, StageStyle};

/// What a table cell shows, independent of how a front end draws it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellContent {
    /// Local logo asset; `None` means the placeholder is shown.
    Logo { path: Option<String> },
    Company { name: String, url: Option<String> },
    Rank { rank: String, change: RankChange },
    /// Empty stage cells carry no badge at all.
    Stage { label: String, style: Option<StageStyle> },
    Amount { text: String, emphasised: bool },
    Tags { tags: Vec<String> },
    Text { text: String },
}

pub const LOGO_PLACEHOLDER: &str = "?";

impl CellContent {
    pub fn for_column(record: &CompanyRecord, column: Column) -> Self {
        let raw = record.cell(column);
        match column {
            Column::Logo => Self::Logo {
                path: Some(raw).filter(|path| !path.is_empty()).map(str::to_string),
            },
            Column::CompanyName => Self::Company {
                name: raw.to_string(),
                url: record.url.clone(),
            },
            Column::Ranking => Self::Rank {
                rank: raw.to_string(),
                change: record.change(),
            },
            Column::FundingStage => {
                let label = raw.trim();
                Self::Stage {
                    label: label.to_string(),
                    style: (!label.is_empty())
                        .then(|| FundingStage::classify(Some(label)).style()),
                }
            }
            Column::DaysSinceLastFunding => Self::Text {
                text: ceil_days(raw),
            },
            Column::FundingGrowthRate | Column::LastFundingRound | Column::TotalFunding => {
                let formatted = format_number(raw).into_string();
                let text = if column.is_currency() && leading_float(raw).is_some() {
                    format!("${formatted}")
                } else {
                    formatted
                };
                Self::Amount {
                    text,
                    emphasised: column == Column::FundingGrowthRate,
                }
            }
            Column::Industries => Self::Tags {
                tags: record.industries().into_iter().map(str::to_string).collect(),
            },
            Column::Location | Column::Description => Self::Text {
                text: raw.to_string(),
            },
        }
    }

    /// Every display column of `record`, in display order.
    pub fn row(record: &CompanyRecord) -> Vec<Self> {
        DISPLAY_COLUMNS
            .iter()
            .map(|column| Self::for_column(record, *column))
            .collect()
    }

    /// Single-line text form, used by the terminal table and headless output.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Logo { path } => path.clone().unwrap_or_else(|| LOGO_PLACEHOLDER.to_string()),
            Self::Company { name, .. } => name.clone(),
            Self::Rank { rank, change } => match change.indicator() {
                Some(indicator) => format!("{rank} {indicator}"),
                None => rank.clone(),
            },
            Self::Stage { label, .. } => label.clone(),
            Self::Amount { text, .. } | Self::Text { text } => text.clone(),
            Self::Tags { tags } => tags.join(", "),
        }
    }
}
