use std::collections::HashMap;

use serde::Serialize;

use crate::format::format_amount;
use crate::projector::CompanyRecord;
use crate::stage::{Rgb, StageGroup};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub name: String,
    pub stage: String,
    pub total_funding: f64,
    pub growth_rate: f64,
}

impl ScatterPoint {
    pub fn tooltip(&self) -> String {
        format!(
            "{} | Total Funding: ${} | FGR: ${}/day",
            self.name,
            format_amount(self.total_funding),
            format_amount(self.growth_rate)
        )
    }
}

/// All points of one stage group, drawn in one color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub group: StageGroup,
    pub label: &'static str,
    pub color: Rgb,
    pub points: Vec<ScatterPoint>,
}

/// Groups plottable records by stage group. Both axes are logarithmic, so
/// only strictly positive points survive. Series come out in
/// [`StageGroup::PREFERRED_ORDER`] and empty groups are left out.
pub fn group_series(records: &[CompanyRecord]) -> Vec<ChartSeries> {
    let mut grouped: HashMap<StageGroup, Vec<ScatterPoint>> = HashMap::new();

    for record in records {
        let point = ScatterPoint {
            name: record.name().to_string(),
            stage: record.cell(crate::Column::FundingStage).trim().to_string(),
            total_funding: record.total_funding(),
            growth_rate: record.growth_rate(),
        };
        if point.total_funding > 0.0 && point.growth_rate > 0.0 {
            grouped.entry(record.stage().group()).or_default().push(point);
        }
    }

    StageGroup::PREFERRED_ORDER
        .iter()
        .filter_map(|group| {
            let points = grouped.remove(group)?;
            Some(ChartSeries {
                group: *group,
                label: group.label(),
                color: group.color(),
                points,
            })
        })
        .collect()
}

/// Whole decades covering `values`, as `[floor(log10 min), ceil(log10 max)]`.
pub fn log_bounds(values: impl IntoIterator<Item = f64>) -> [f64; 2] {
    let (min, max) = values
        .into_iter()
        .filter(|value| *value > 0.0)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
            (min.min(value), max.max(value))
        });
    if !min.is_finite() {
        return [0.0, 1.0];
    }
    let low = min.log10().floor();
    let high = max.log10().ceil().max(low + 1.0);
    [low, high]
}

/// Axis labels for a log axis: one per power of ten, e.g. `$1K`, `$10K`.
pub fn decade_ticks(bounds: [f64; 2]) -> Vec<String> {
    #[allow(clippy::cast_possible_truncation)]
    let (low, high) = (bounds[0] as i32, bounds[1] as i32);
    (low..=high)
        .map(|exponent| format!("${}", format_amount(10_f64.powi(exponent))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::{Column, DISPLAY_COLUMNS};

    fn record(name: &str, stage: &str, total: &str, growth: &str) -> CompanyRecord {
        let mut cells = vec![String::new(); DISPLAY_COLUMNS.len()];
        cells[Column::CompanyName.index()] = name.to_string();
        cells[Column::FundingStage.index()] = stage.to_string();
        cells[Column::TotalFunding.index()] = total.to_string();
        cells[Column::FundingGrowthRate.index()] = growth.to_string();
        CompanyRecord {
            cells,
            url: None,
            rank_change: 0,
            lat: None,
            lon: None,
        }
    }

    #[test]
    fn late_stages_share_one_series() {
        let records = [
            record("D", "Series D", "1000", "10"),
            record("E", "Series E", "2000", "20"),
            record("F", " Series F ", "3000", "30"),
        ];
        let series = group_series(&records);

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].group, StageGroup::LateStage);
        assert_eq!(series[0].label, "Late Stage (D+)");
        assert_eq!(series[0].points.len(), 3);
        assert_eq!(series[0].points[2].stage, "Series F");
    }

    #[test]
    fn other_sorts_last_and_empty_groups_are_omitted() {
        let records = [
            record("Mystery", "Stealth", "$5,000", "$50"),
            record("Angel Co", "Angel", "100", "1"),
            record("Seed Co", "Seed", "100", "1"),
        ];
        let groups: Vec<_> = group_series(&records).iter().map(|s| s.group).collect();
        assert_eq!(
            groups,
            [StageGroup::EarlySupport, StageGroup::Seed, StageGroup::Other]
        );
    }

    #[test]
    fn non_positive_points_are_dropped() {
        let records = [
            record("Zero", "Seed", "0", "10"),
            record("Negative", "Seed", "100", "-5"),
            record("Text", "Seed", "n/a", "10"),
        ];
        assert!(group_series(&records).is_empty());
    }

    #[test]
    fn log_bounds_cover_whole_decades() {
        assert_eq!(log_bounds([150.0, 2_500_000.0]), [2.0, 7.0]);
        assert_eq!(log_bounds([1000.0]), [3.0, 4.0]);
        assert_eq!(log_bounds([]), [0.0, 1.0]);
    }

    #[test]
    fn ticks_are_powers_of_ten() {
        assert_eq!(decade_ticks([2.0, 4.0]), ["$100", "$1K", "$10K"]);
    }

    #[test]
    fn tooltip_formats_both_axes() {
        let point = ScatterPoint {
            name: "Acme".to_string(),
            stage: "Seed".to_string(),
            total_funding: 2_500_000.0,
            growth_rate: 1_200.0,
        };
        assert_eq!(
            point.tooltip(),
            "Acme | Total Funding: $2.5M | FGR: $1.2K/day"
        );
    }
}
