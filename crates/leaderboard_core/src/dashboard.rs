use rand::Rng;
use tracing::debug;

use crate::cells::CellContent;
use crate::chart::{group_series, ChartSeries};
use crate::dataset::RawDataset;
use crate::placement::{place_markers, MarkerPlacement};
use crate::projector::{project_rows, CompanyRecord};
use crate::rank::GrowthPopulation;
use crate::search::{filter_indices, SearchQuery};
use crate::stats::StatsPanel;
use crate::ticker::TickerTrack;
use crate::velocity::{calculate, CalculatorResult};
use crate::word_cloud::{cloud_words, CloudWord};

/// Everything derived from one load of the dataset. Built once and then only
/// read by the panels.
#[derive(Debug, Clone)]
pub struct Dashboard {
    records: Vec<CompanyRecord>,
    population: GrowthPopulation,
    stats: StatsPanel,
    series: Vec<ChartSeries>,
    markers: Vec<MarkerPlacement>,
    words: Vec<CloudWord>,
}

impl Dashboard {
    pub fn from_dataset(dataset: &RawDataset) -> Self {
        let records = project_rows(dataset);
        let population = GrowthPopulation::from_records(&records);
        let stats = StatsPanel::from_rows(&dataset.stats_data);
        let series = group_series(&records);
        let markers = place_markers(&records);
        let words = cloud_words(&records);

        debug!(
            records = records.len(),
            population = population.len(),
            series = series.len(),
            markers = markers.len(),
            "dashboard built"
        );

        Self {
            records,
            population,
            stats,
            series,
            markers,
            words,
        }
    }

    pub fn records(&self) -> &[CompanyRecord] {
        &self.records
    }

    pub fn record(&self, index: usize) -> Option<&CompanyRecord> {
        self.records.get(index)
    }

    pub const fn population(&self) -> &GrowthPopulation {
        &self.population
    }

    pub const fn stats(&self) -> &StatsPanel {
        &self.stats
    }

    pub fn series(&self) -> &[ChartSeries] {
        &self.series
    }

    pub fn markers(&self) -> &[MarkerPlacement] {
        &self.markers
    }

    pub fn cloud_words(&self) -> &[CloudWord] {
        &self.words
    }

    /// A freshly shuffled ticker; call again for a new order.
    pub fn ticker<R: Rng + ?Sized>(&self, rng: &mut R) -> TickerTrack {
        TickerTrack::shuffled(&self.records, rng)
    }

    pub fn calculate(&self, amount_text: &str, months_text: &str) -> Option<CalculatorResult> {
        calculate(amount_text, months_text, &self.population)
    }

    pub fn search(&self, query: &str) -> Vec<usize> {
        filter_indices(&self.records, &SearchQuery::new(query))
    }

    pub fn table_row(&self, index: usize) -> Option<Vec<CellContent>> {
        self.record(index).map(CellContent::row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SAMPLE: &str = r#"{
        "headerData": [["Ranking", "Company Name", "Funding Growth Rate ($/day)", "Funding Stage",
                        "Total Funding ($)", "Website", "Latitude", "Longitude"]],
        "companyData": [
            ["1", "Acme", "5000", "Series D", "9000000", "acme.io", "37.0", "-122.0"],
            ["2", "Globex", "2500", "Seed", "1200000", "", "37.0", "-122.0"],
            ["3", "Initech", "n/a", "Stealth", "", "", "", ""]
        ],
        "rankChangesData": [["1", "-2", "0"]],
        "statsData": [["Number of Companies Tracked"], [3]]
    }"#;

    fn dashboard() -> Result<Dashboard, crate::LoadError> {
        Ok(Dashboard::from_dataset(&RawDataset::from_json_str(SAMPLE)?))
    }

    #[test]
    fn builds_every_panel_from_one_document() -> Result<(), crate::LoadError> {
        let dashboard = dashboard()?;

        assert_eq!(dashboard.records().len(), 3);
        assert_eq!(dashboard.population().len(), 2);
        assert_eq!(dashboard.series().len(), 2);
        assert_eq!(dashboard.markers().len(), 2);
        assert_eq!(dashboard.cloud_words().len(), 3);
        match dashboard.stats() {
            StatsPanel::Cards(cards) => assert_eq!(cards[0].value, "3"),
            StatsPanel::Unavailable => panic!("stats should be available"),
        }
        Ok(())
    }

    #[test]
    fn calculator_and_search_use_the_cached_data() -> Result<(), crate::LoadError> {
        let dashboard = dashboard()?;

        let result = dashboard.calculate("1", "1");
        assert!(result.is_some_and(|result| result.rank.is_some_and(|rank| rank.precise_rank == 1)));
        assert_eq!(dashboard.calculate("", "1"), None);
        assert_eq!(dashboard.search("GLO"), [1]);
        Ok(())
    }

    #[test]
    fn ticker_holds_every_company_once() -> Result<(), crate::LoadError> {
        let dashboard = dashboard()?;
        let track = dashboard.ticker(&mut StdRng::seed_from_u64(5));
        assert_eq!(track.items().len(), 3);
        Ok(())
    }

    #[test]
    fn table_rows_cover_every_column() -> Result<(), crate::LoadError> {
        let dashboard = dashboard()?;
        let row = dashboard.table_row(0).unwrap_or_default();
        assert_eq!(row.len(), crate::DISPLAY_COLUMNS.len());
        assert_eq!(dashboard.table_row(9), None);
        Ok(())
    }
}
