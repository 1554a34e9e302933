use std::time::Duration;

use serde::Serialize;

use crate::format::leading_float;
use crate::projector::CompanyRecord;
use crate::stage::StageGroup;
use crate::Column;

pub const MIN_FONT_SIZE: f64 = 10.0;
pub const FONT_SIZE_RANGE: f64 = 110.0;
/// Delay between two words appearing.
pub const REVEAL_INTERVAL: Duration = Duration::from_millis(50);
/// Quiet period after the last resize before the cloud is laid out again.
pub const RELAYOUT_DEBOUNCE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudWord {
    pub text: String,
    pub size: f64,
    pub group: StageGroup,
}

impl CloudWord {
    /// Size bucket from 0 (smallest) to `tiers - 1`, for renderers that can
    /// only draw a handful of sizes.
    pub fn tier(&self, tiers: u8) -> u8 {
        let tiers = tiers.max(1);
        let share = ((self.size - MIN_FONT_SIZE) / FONT_SIZE_RANGE).clamp(0.0, 1.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let tier = (share * f64::from(tiers)).floor() as u8;
        tier.min(tiers - 1)
    }
}

/// One word per record, sized by the square root of its growth rate's
/// position between the smallest and largest rate.
pub fn cloud_words(records: &[CompanyRecord]) -> Vec<CloudWord> {
    let rates: Vec<f64> = records
        .iter()
        .map(|record| leading_float(record.cell(Column::FundingGrowthRate)).unwrap_or(0.0))
        .collect();
    let min = rates.iter().copied().fold(f64::INFINITY, f64::min);
    let max = rates.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let spread = max - min;

    records
        .iter()
        .zip(rates)
        .map(|(record, rate)| {
            let share = if spread > 0.0 { (rate - min) / spread } else { 0.0 };
            CloudWord {
                text: record.name().to_string(),
                size: share.sqrt().mul_add(FONT_SIZE_RANGE, MIN_FONT_SIZE),
                group: record.stage().group(),
            }
        })
        .collect()
}

/// Words visible `elapsed` after the cloud was drawn. The first word shows
/// immediately, then one more every [`REVEAL_INTERVAL`].
pub fn revealed_count(elapsed: Duration, total: usize) -> usize {
    let steps = elapsed.as_millis() / REVEAL_INTERVAL.as_millis();
    usize::try_from(steps)
        .map_or(total, |steps| steps.saturating_add(1))
        .min(total)
}

/// Greedy line packing, largest words first. Returns word indices per line;
/// a word wider than `width` gets a line of its own.
pub fn flow_lines(words: &[CloudWord], width: usize) -> Vec<Vec<usize>> {
    let mut order: Vec<usize> = (0..words.len()).collect();
    order.sort_by(|a, b| words[*b].size.total_cmp(&words[*a].size));

    let mut lines: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut used = 0;
    for index in order {
        let len = words[index].text.chars().count();
        if len == 0 {
            continue;
        }
        let needed = if current.is_empty() { len } else { used + 1 + len };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            used = len;
        } else {
            used = needed;
        }
        current.push(index);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::DISPLAY_COLUMNS;

    fn record(name: &str, growth: &str) -> CompanyRecord {
        let mut cells = vec![String::new(); DISPLAY_COLUMNS.len()];
        cells[Column::CompanyName.index()] = name.to_string();
        cells[Column::FundingGrowthRate.index()] = growth.to_string();
        CompanyRecord {
            cells,
            url: None,
            rank_change: 0,
            lat: None,
            lon: None,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn extremes_map_to_min_and_max_size() {
        let words = cloud_words(&[record("Low", "100"), record("Mid", "325"), record("High", "1000")]);
        assert_close(words[0].size, 10.0);
        assert_close(words[1].size, 65.0);
        assert_close(words[2].size, 120.0);
    }

    #[test]
    fn unreadable_rates_count_as_zero() {
        let words = cloud_words(&[record("Blank", ""), record("Some", "$500"), record("Top", "400")]);
        assert_close(words[0].size, 10.0);
        assert_close(words[1].size, 10.0);
        assert_close(words[2].size, 120.0);
    }

    #[test]
    fn equal_rates_do_not_produce_nan() {
        let words = cloud_words(&[record("A", "5"), record("B", "5")]);
        assert!(words.iter().all(|word| word.size.is_finite()));
        assert_close(words[1].size, MIN_FONT_SIZE);
    }

    #[test]
    fn words_reveal_every_fifty_millis() {
        assert_eq!(revealed_count(Duration::ZERO, 10), 1);
        assert_eq!(revealed_count(Duration::from_millis(49), 10), 1);
        assert_eq!(revealed_count(Duration::from_millis(100), 10), 3);
        assert_eq!(revealed_count(Duration::from_secs(60), 10), 10);
        assert_eq!(revealed_count(Duration::ZERO, 0), 0);
    }

    #[test]
    fn tiers_split_the_size_range() {
        let word = |size| CloudWord {
            text: String::new(),
            size,
            group: StageGroup::Other,
        };
        assert_eq!(word(10.0).tier(3), 0);
        assert_eq!(word(70.0).tier(3), 1);
        assert_eq!(word(120.0).tier(3), 2);
    }

    #[test]
    fn lines_pack_biggest_first() {
        let words = cloud_words(&[record("aaaa", "1"), record("bbbb", "3"), record("cc", "2")]);
        assert_eq!(flow_lines(&words, 9), [vec![1, 2], vec![0]]);
        assert_eq!(flow_lines(&words, 2), [vec![1], vec![2], vec![0]]);
    }
}
