//! Aggregate statistics shown on the dashboard stat cards.

use crate::types::compass::CompassDirection;
use serde::Serialize;

/// Width of a dominant-direction bucket in degrees.
pub const BUCKET_DEGREES: f64 = 45.0;

/// A 45°-wide heading sector and how many active stations fell into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirectionBucket {
    /// Start of the sector in degrees: 0, 45, ..., 315.
    pub degrees: u16,
    /// Number of active stations whose heading falls into this sector.
    pub count: usize,
}

impl DirectionBucket {
    /// Compass point at the start of the sector, e.g. `NE` for the 45° bucket.
    pub fn direction(&self) -> CompassDirection {
        CompassDirection::from_heading(f64::from(self.degrees))
    }

    pub fn label(&self) -> &'static str {
        self.direction().label()
    }
}

/// Cross-station statistics derived from one snapshot.
///
/// Every field except `total_stations` is computed from active stations only.
/// Averages are `0.0` when there is nothing to average.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AggregateSummary {
    /// Mean of the average wind speed readings, km/h.
    pub avg_speed_kmh: f64,
    /// Highest gust reading, km/h.
    pub max_gust_kmh: f64,
    /// Name of the station that reported `max_gust_kmh`.
    pub max_gust_station: Option<String>,
    /// Most frequent 45° heading sector.
    pub dominant_direction: Option<DirectionBucket>,
    /// Stations with status code 0.
    pub active_stations: usize,
    /// All stations inside the bounding box, whatever their status.
    pub total_stations: usize,
    /// Mean of the strictly positive pressure readings, hPa.
    pub avg_pressure_hpa: f64,
}

impl AggregateSummary {
    /// Whether the snapshot had no stations at all.
    pub fn is_empty(&self) -> bool {
        self.total_stations == 0
    }
}
