use serde::Serialize;

use crate::format::group_digits;
use crate::projector::CompanyRecord;

/// Strictly positive growth rates of every record, kept sorted so each
/// lookup is two binary searches instead of a full scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrowthPopulation {
    sorted: Vec<f64>,
}

/// Where a candidate growth rate would land on the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankResult {
    pub precise_rank: usize,
    pub top_percent: f64,
}

impl GrowthPopulation {
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut sorted: Vec<f64> = values.into_iter().filter(|value| *value > 0.0).collect();
        sorted.sort_by(f64::total_cmp);
        Self { sorted }
    }

    pub fn from_records(records: &[CompanyRecord]) -> Self {
        Self::from_values(records.iter().map(CompanyRecord::growth_rate))
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Members strictly greater than `candidate`.
    pub fn count_above(&self, candidate: f64) -> usize {
        self.sorted.len() - self.sorted.partition_point(|value| *value <= candidate)
    }

    /// Members strictly less than `candidate`.
    pub fn count_below(&self, candidate: f64) -> usize {
        self.sorted.partition_point(|value| *value < candidate)
    }

    /// `None` when there is nothing to compare against.
    pub fn rank(&self, candidate: f64) -> Option<RankResult> {
        if self.is_empty() {
            return None;
        }
        let beaten = self.count_below(candidate) as f64 / self.len() as f64 * 100.0;
        Some(RankResult {
            precise_rank: self.count_above(candidate) + 1,
            top_percent: 100.0 - beaten,
        })
    }
}

impl RankResult {
    pub fn rank_label(&self) -> String {
        format!("Rank {}", group_digits(&self.precise_rank.to_string()))
    }

    pub fn top_label(&self) -> String {
        if self.top_percent <= 0.0 {
            "Top 0%".to_string()
        } else {
            format!("Top {:.1}%", self.top_percent)
        }
    }
}
