//! Turns a raw station list into what the dashboard shows: the stations inside
//! the region of interest, keyed by id for the map, and the cross-station
//! [`AggregateSummary`] for the stat cards.

use crate::types::bounds::GeographicBounds;
use crate::types::marker::StationMarker;
use crate::types::station::StationRecord;
use crate::types::summary::{AggregateSummary, DirectionBucket, BUCKET_DEGREES};
use crate::utils::normalize_heading;
use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

/// Keeps the stations whose position lies inside `bounds`, preserving upstream order.
pub fn filter_within_bounds(
    stations: &[StationRecord],
    bounds: &GeographicBounds,
) -> Vec<StationRecord> {
    stations
        .iter()
        .filter(|station| bounds.contains(station.position()))
        .cloned()
        .collect()
}

/// Start of the 45° sector a heading falls into: 0, 45, ..., 315.
pub fn direction_bucket(heading: f64) -> u16 {
    ((normalize_heading(heading) / BUCKET_DEGREES).floor() * BUCKET_DEGREES) as u16
}

/// Computes the dashboard statistics for stations already filtered to the region.
///
/// Only active stations (status code 0) contribute to speeds, gust, direction and
/// pressure; `total_stations` counts everything passed in.
///
/// # Examples
///
/// ```
/// use windbird::summarize;
///
/// let summary = summarize(&[]);
/// assert_eq!(summary.active_stations, 0);
/// assert_eq!(summary.avg_speed_kmh, 0.0);
/// ```
pub fn summarize(stations: &[StationRecord]) -> AggregateSummary {
    let active: Vec<&StationRecord> = stations.iter().filter(|s| s.is_active()).collect();

    let avg_speed_kmh = mean(active.iter().map(|s| s.measurements.wind_speed_avg));

    // Strict comparison keeps the first station on ties.
    let gust_station = active.iter().copied().reduce(|best, station| {
        if OrderedFloat(station.measurements.wind_speed_max)
            > OrderedFloat(best.measurements.wind_speed_max)
        {
            station
        } else {
            best
        }
    });

    let avg_pressure_hpa = mean(
        active
            .iter()
            .map(|s| s.measurements.pressure)
            .filter(|pressure| *pressure > 0.0),
    );

    AggregateSummary {
        avg_speed_kmh,
        max_gust_kmh: gust_station.map_or(0.0, |s| s.measurements.wind_speed_max),
        max_gust_station: gust_station.map(|s| s.name.clone()),
        dominant_direction: dominant_direction(&active),
        active_stations: active.len(),
        total_stations: stations.len(),
        avg_pressure_hpa,
    }
}

/// Most common 45° sector; ties go to the sector encountered first.
fn dominant_direction(active: &[&StationRecord]) -> Option<DirectionBucket> {
    // Insertion-ordered counts so that the tie-break follows upstream order.
    let mut buckets: Vec<DirectionBucket> = Vec::new();
    for station in active {
        let degrees = direction_bucket(station.measurements.wind_heading);
        match buckets.iter_mut().find(|bucket| bucket.degrees == degrees) {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(DirectionBucket { degrees, count: 1 }),
        }
    }
    buckets
        .into_iter()
        .reduce(|best, bucket| if bucket.count > best.count { bucket } else { best })
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// One refresh worth of dashboard data.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Stations inside the bounds, keyed by id so map markers keep their identity.
    pub stations: BTreeMap<u32, StationRecord>,
    pub summary: AggregateSummary,
    /// When the snapshot was computed; `None` before the first refresh.
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// A snapshot with no stations, used before the first refresh completes.
    pub fn empty() -> Self {
        Self {
            stations: BTreeMap::new(),
            summary: AggregateSummary::default(),
            refreshed_at: None,
        }
    }

    /// Filters `raw` to `bounds` and derives the summary.
    ///
    /// If upstream repeats a station id, the last record wins on the map while
    /// the summary still counts every row.
    pub fn from_stations(raw: &[StationRecord], bounds: &GeographicBounds) -> Self {
        let in_bounds = filter_within_bounds(raw, bounds);
        let summary = summarize(&in_bounds);
        let stations = in_bounds
            .into_iter()
            .map(|station| (station.id, station))
            .collect();
        Self {
            stations,
            summary,
            refreshed_at: Some(Utc::now()),
        }
    }

    /// Map markers ordered by station id.
    pub fn markers(&self) -> impl Iterator<Item = StationMarker> + '_ {
        self.stations.values().map(StationMarker::from)
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::types::station::{Measurement, StationStatusReport};
    use crate::types::status::{SeverityColor, StationStatus};
    use crate::types::wind_scale::WindDescriptor;

    pub(crate) fn station(
        id: u32,
        latitude: f64,
        heading: f64,
        speed: f64,
        status: i64,
    ) -> StationRecord {
        StationRecord {
            id,
            name: format!("Station {}", id),
            description: None,
            latitude,
            longitude: 1.5,
            elevation: None,
            location_name: None,
            status: StationStatusReport {
                value: status,
                date: None,
                text: None,
            },
            measurements: Measurement {
                date: None,
                pressure: 1010.0,
                wind_heading: heading,
                wind_speed_avg: speed,
                wind_speed_min: speed / 2.0,
                wind_speed_max: speed * 1.5,
            },
        }
    }

    #[test]
    fn test_three_station_snapshot() {
        let raw = vec![
            station(1, 41.0, 10.0, 5.0, 0),
            station(2, 41.5, 50.0, 15.0, 0),
            station(3, 42.0, 95.0, 25.0, 1),
        ];
        let snapshot = Snapshot::from_stations(&raw, &GeographicBounds::CATALONIA);
        let summary = &snapshot.summary;

        assert_eq!(summary.total_stations, 3);
        assert_eq!(summary.active_stations, 2);
        assert_eq!(summary.avg_speed_kmh, 10.0);
        assert_eq!(summary.max_gust_kmh, 22.5);
        assert_eq!(summary.max_gust_station.as_deref(), Some("Station 2"));
        assert_eq!(
            summary.dominant_direction,
            Some(DirectionBucket { degrees: 0, count: 1 })
        );
        assert_eq!(summary.avg_pressure_hpa, 1010.0);
        // The inactive station is still on the map.
        assert!(snapshot.stations.contains_key(&3));
        assert!(snapshot.refreshed_at.is_some());
    }

    #[test]
    fn test_out_of_bounds_station_is_dropped_everywhere() {
        let raw = vec![station(1, 40.0, 10.0, 50.0, 0), station(2, 41.0, 200.0, 8.0, 0)];
        let snapshot = Snapshot::from_stations(&raw, &GeographicBounds::CATALONIA);
        assert_eq!(snapshot.stations.keys().copied().collect::<Vec<_>>(), vec![2]);
        assert_eq!(snapshot.summary.total_stations, 1);
        assert_eq!(snapshot.summary.avg_speed_kmh, 8.0);
        assert_eq!(snapshot.summary.max_gust_kmh, 12.0);
        assert_eq!(
            snapshot.summary.dominant_direction.map(|b| b.degrees),
            Some(180)
        );
    }

    #[test]
    fn test_empty_snapshot_has_zero_aggregates() {
        let snapshot = Snapshot::from_stations(&[], &GeographicBounds::CATALONIA);
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.summary.active_stations, 0);
        assert_eq!(snapshot.summary.total_stations, 0);
        assert_eq!(snapshot.summary.avg_speed_kmh, 0.0);
        assert_eq!(snapshot.summary.avg_pressure_hpa, 0.0);
        assert_eq!(snapshot.summary.max_gust_kmh, 0.0);
        assert_eq!(snapshot.summary.max_gust_station, None);
        assert_eq!(snapshot.summary.dominant_direction, None);
    }

    #[test]
    fn test_no_active_stations() {
        let raw = vec![station(1, 41.0, 10.0, 5.0, 2), station(2, 41.0, 10.0, 5.0, 3)];
        let summary = summarize(&raw);
        assert_eq!(summary.total_stations, 2);
        assert_eq!(summary.active_stations, 0);
        assert_eq!(summary.avg_speed_kmh, 0.0);
        assert_eq!(summary.dominant_direction, None);
    }

    #[test]
    fn test_pressure_ignores_missing_readings() {
        let mut a = station(1, 41.0, 0.0, 5.0, 0);
        let mut b = station(2, 41.0, 0.0, 5.0, 0);
        let mut c = station(3, 41.0, 0.0, 5.0, 0);
        a.measurements.pressure = 1000.0;
        b.measurements.pressure = 0.0;
        c.measurements.pressure = -1.0;
        assert_eq!(summarize(&[a.clone(), b.clone(), c.clone()]).avg_pressure_hpa, 1000.0);

        a.measurements.pressure = 0.0;
        assert_eq!(summarize(&[a, b, c]).avg_pressure_hpa, 0.0);
    }

    #[test]
    fn test_gust_tie_keeps_first_station() {
        let raw = vec![
            station(7, 41.0, 0.0, 10.0, 0),
            station(3, 41.0, 0.0, 10.0, 0),
        ];
        let summary = summarize(&raw);
        assert_eq!(summary.max_gust_kmh, 15.0);
        assert_eq!(summary.max_gust_station.as_deref(), Some("Station 7"));
    }

    #[test]
    fn test_dominant_direction_counts_and_ties() {
        let raw = vec![
            station(1, 41.0, 100.0, 5.0, 0), // 90
            station(2, 41.0, 300.0, 5.0, 0), // 270
            station(3, 41.0, 280.0, 5.0, 0), // 270
            station(4, 41.0, 95.0, 5.0, 0),  // 90
            station(5, 41.0, 359.9, 5.0, 0), // 315
        ];
        let bucket = summarize(&raw).dominant_direction.unwrap();
        assert_eq!(bucket, DirectionBucket { degrees: 90, count: 2 });
        assert_eq!(bucket.label(), "E");
    }

    #[test]
    fn test_direction_bucket() {
        assert_eq!(direction_bucket(0.0), 0);
        assert_eq!(direction_bucket(44.9), 0);
        assert_eq!(direction_bucket(45.0), 45);
        assert_eq!(direction_bucket(359.9), 315);
        assert_eq!(direction_bucket(-10.0), 315);
    }

    #[test]
    fn test_markers_are_keyed_by_id() {
        let raw = vec![
            station(9, 41.0, 180.0, 12.0, 0),
            station(2, 41.0, 90.0, 0.5, 2),
            station(9, 41.2, 0.0, 30.0, 0),
        ];
        let snapshot = Snapshot::from_stations(&raw, &GeographicBounds::CATALONIA);
        let markers: Vec<StationMarker> = snapshot.markers().collect();
        assert_eq!(markers.iter().map(|m| m.id).collect::<Vec<_>>(), vec![2, 9]);

        assert_eq!(markers[0].descriptor, WindDescriptor::Calm);
        assert_eq!(markers[0].status, StationStatus::Error);
        assert_eq!(markers[0].status_color, SeverityColor::Red);
        // Repeated id: the last record is shown.
        assert_eq!(markers[1].wind_speed_kmh, 30.0);
        assert_eq!(markers[1].direction.label(), "N");
        // ...but every row still counts towards the summary.
        assert_eq!(snapshot.summary.total_stations, 3);
    }
}
