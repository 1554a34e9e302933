use std::collections::HashMap;

use serde::Serialize;

use crate::projector::CompanyRecord;

/// Only the top of the leaderboard is placed on the map.
pub const MAP_MARKER_LIMIT: usize = 50;
/// Longitude step between markers that share an exact location.
pub const LONGITUDE_OFFSET: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerPlacement {
    pub record_index: usize,
    pub name: String,
    pub logo: String,
    pub lat: f64,
    pub lon: f64,
}

/// Fans co-located markers out eastwards, in the order they are placed.
#[derive(Debug, Clone)]
pub struct DuplicateOffsetter {
    offset: f64,
    seen: HashMap<String, u32>,
}

impl DuplicateOffsetter {
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            seen: HashMap::new(),
        }
    }

    /// The first marker at a location keeps it; the n-th repeat is shifted
    /// by `n * offset` degrees of longitude.
    pub fn place(&mut self, lat: f64, lon: f64) -> (f64, f64) {
        let count = self.seen.entry(format!("{lat},{lon}")).or_insert(0);
        let placed = (lat, f64::from(*count).mul_add(self.offset, lon));
        *count += 1;
        placed
    }
}

impl Default for DuplicateOffsetter {
    fn default() -> Self {
        Self::new(LONGITUDE_OFFSET)
    }
}

/// Markers for the first [`MAP_MARKER_LIMIT`] records that have coordinates.
pub fn place_markers(records: &[CompanyRecord]) -> Vec<MarkerPlacement> {
    let mut offsetter = DuplicateOffsetter::default();
    records
        .iter()
        .take(MAP_MARKER_LIMIT)
        .enumerate()
        .filter_map(|(record_index, record)| {
            let (lat, lon) = record.coordinates()?;
            let (lat, lon) = offsetter.place(lat, lon);
            Some(MarkerPlacement {
                record_index,
                name: record.name().to_string(),
                logo: record.logo().to_string(),
                lat,
                lon,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::DISPLAY_COLUMNS;

    fn record(name: &str, coordinates: Option<(f64, f64)>) -> CompanyRecord {
        let mut cells = vec![String::new(); DISPLAY_COLUMNS.len()];
        cells[crate::Column::CompanyName.index()] = name.to_string();
        CompanyRecord {
            cells,
            url: None,
            rank_change: 0,
            lat: coordinates.map(|(lat, _)| lat),
            lon: coordinates.map(|(_, lon)| lon),
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn duplicates_drift_east() {
        let mut offsetter = DuplicateOffsetter::default();
        let first = offsetter.place(37.0, -122.0);
        let second = offsetter.place(37.0, -122.0);
        let third = offsetter.place(37.0, -122.0);

        assert_eq!(first, (37.0, -122.0));
        assert_close(second.1, -121.99);
        assert_close(third.1, -121.98);
        assert_close(second.0, 37.0);
    }

    #[test]
    fn distinct_locations_are_untouched() {
        let mut offsetter = DuplicateOffsetter::default();
        assert_eq!(offsetter.place(1.0, 2.0), (1.0, 2.0));
        assert_eq!(offsetter.place(2.0, 1.0), (2.0, 1.0));
    }

    #[test]
    fn only_the_top_fifty_with_coordinates_are_placed() {
        let mut records = vec![record("No Location", None)];
        records.extend((0..60).map(|i| record(&format!("Co {i}"), Some((f64::from(i), 0.0)))));

        let markers = place_markers(&records);
        assert_eq!(markers.len(), MAP_MARKER_LIMIT - 1);
        assert_eq!(markers[0].name, "Co 0");
        assert_eq!(markers[0].record_index, 1);
    }
}
