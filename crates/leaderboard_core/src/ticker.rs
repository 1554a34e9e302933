use rand::Rng;
use serde::Serialize;

use crate::projector::{CompanyRecord, RankChange};

/// Companies taken from the top of the leaderboard for the ticker.
pub const TICKER_SIZE: usize = 50;
/// Seconds for one full pass of the ticker.
pub const DEFAULT_LOOP_SECONDS: u64 = 360;
const ITEM_SEPARATOR: &str = "   ";

/// Uniform Fisher-Yates shuffle of a copy of `items`.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickerItem {
    pub rank: String,
    pub name: String,
    pub change: RankChange,
}

impl TickerItem {
    pub fn from_record(record: &CompanyRecord) -> Self {
        Self {
            rank: record.rank().to_string(),
            name: record.name().to_string(),
            change: record.change(),
        }
    }

    /// `#3 Acme ▲ 2`
    pub fn label(&self) -> String {
        let mut label = format!("#{} {}", self.rank, self.name);
        if let Some(indicator) = self.change.indicator() {
            label.push(' ');
            label.push_str(&indicator);
        }
        label
    }
}

/// One shuffled pass of the ticker. Renderers draw it twice back to back so
/// the scroll can wrap without a visible seam.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickerTrack {
    items: Vec<TickerItem>,
}

impl TickerTrack {
    pub fn shuffled<R: Rng + ?Sized>(records: &[CompanyRecord], rng: &mut R) -> Self {
        let top: Vec<TickerItem> = records
            .iter()
            .take(TICKER_SIZE)
            .map(TickerItem::from_record)
            .collect();
        Self {
            items: shuffled(&top, rng),
        }
    }

    pub fn items(&self) -> &[TickerItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The shuffled sequence followed by itself.
    pub fn looped(&self) -> impl Iterator<Item = &TickerItem> + '_ {
        self.items.iter().chain(self.items.iter())
    }

    /// One pass rendered as text, each item followed by a separator.
    pub fn strip(&self) -> String {
        self.items
            .iter()
            .map(|item| format!("{}{ITEM_SEPARATOR}", item.label()))
            .collect()
    }

    pub const fn separator() -> &'static str {
        ITEM_SEPARATOR
    }
}

/// Character offset into the looped strip after `elapsed_secs`, wrapping
/// every `loop_secs` so the view never runs past the second copy.
pub fn scroll_offset(elapsed_secs: f64, loop_secs: f64, strip_len: usize) -> usize {
    if strip_len == 0 || loop_secs <= 0.0 {
        return 0;
    }
    let progress = (elapsed_secs / loop_secs).rem_euclid(1.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let offset = (progress * strip_len as f64).floor() as usize;
    offset.min(strip_len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::{Column, DISPLAY_COLUMNS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record(rank: usize, change: i64) -> CompanyRecord {
        let mut cells = vec![String::new(); DISPLAY_COLUMNS.len()];
        cells[Column::Ranking.index()] = rank.to_string();
        cells[Column::CompanyName.index()] = format!("Company {rank}");
        CompanyRecord {
            cells,
            url: None,
            rank_change: change,
            lat: None,
            lon: None,
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let input: Vec<u32> = (0..50).collect();
        let mut output = shuffled(&input, &mut rng);

        assert_eq!(output.len(), input.len());
        output.sort_unstable();
        assert_eq!(output, input);
    }

    #[test]
    fn shuffle_leaves_source_untouched() {
        let mut rng = StdRng::seed_from_u64(1);
        let input = vec!["a", "b", "c", "d"];
        let _ = shuffled(&input, &mut rng);
        assert_eq!(input, ["a", "b", "c", "d"]);
    }

    #[test]
    fn track_takes_the_top_fifty() {
        let records: Vec<_> = (1..=80).map(|rank| record(rank, 0)).collect();
        let mut rng = StdRng::seed_from_u64(3);
        let track = TickerTrack::shuffled(&records, &mut rng);

        assert_eq!(track.items().len(), TICKER_SIZE);
        let mut ranks: Vec<usize> = track
            .items()
            .iter()
            .filter_map(|item| item.rank.parse().ok())
            .collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (1..=50).collect::<Vec<_>>());
    }

    #[test]
    fn looped_track_is_the_sequence_twice() {
        let records: Vec<_> = (1..=5).map(|rank| record(rank, 0)).collect();
        let mut rng = StdRng::seed_from_u64(11);
        let track = TickerTrack::shuffled(&records, &mut rng);

        let looped: Vec<_> = track.looped().cloned().collect();
        let expected: Vec<_> = track.items().iter().chain(track.items()).cloned().collect();
        assert_eq!(looped, expected);
    }

    #[test]
    fn labels_carry_rank_movement() {
        assert_eq!(TickerItem::from_record(&record(3, 2)).label(), "#3 Company 3 ▲ 2");
        assert_eq!(TickerItem::from_record(&record(4, -1)).label(), "#4 Company 4 ▼ 1");
        assert_eq!(TickerItem::from_record(&record(5, 0)).label(), "#5 Company 5");
    }

    #[test]
    fn scroll_offset_wraps_each_loop() {
        assert_eq!(scroll_offset(0.0, 360.0, 100), 0);
        assert_eq!(scroll_offset(180.0, 360.0, 100), 50);
        assert_eq!(scroll_offset(540.0, 360.0, 100), 50);
        assert_eq!(scroll_offset(10.0, 360.0, 0), 0);
    }
}
