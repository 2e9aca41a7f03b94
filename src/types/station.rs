//! Defines the data structures representing live Windbird stations as returned by the
//! Pioupiou `live-with-meta` endpoints: identity, location, latest status and latest
//! measurement.

use crate::types::bounds::LatLon;
use crate::types::status::StationStatus;
use crate::utils::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Data Structures ---

/// Represents a single Windbird station and its latest reported state.
///
/// A fresh list of these is produced on every poll; records are never mutated,
/// each poll replaces the previous snapshot wholesale.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StationRecord {
    /// The unique station identifier.
    pub id: u32,
    /// The station name chosen by its owner.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Free-form description of the station, if any.
    #[serde(default)]
    pub description: Option<String>,
    /// Latitude in decimal degrees (positive for North, negative for South).
    #[serde(default, deserialize_with = "null_as_default")]
    pub latitude: f64,
    /// Longitude in decimal degrees (positive for East, negative for West).
    #[serde(default, deserialize_with = "null_as_default")]
    pub longitude: f64,
    /// Elevation above sea level in meters, if available.
    #[serde(default)]
    pub elevation: Option<f64>,
    /// Human readable place name, if available.
    #[serde(default)]
    pub location_name: Option<String>,
    /// Latest status report.
    pub status: StationStatusReport,
    /// Latest measurement.
    #[serde(alias = "measurement")]
    pub measurements: Measurement,
}

/// The latest status report of a station.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StationStatusReport {
    /// Raw status code (0: OK, 1: warning, 2: error, 3: no data). Other codes may appear.
    pub value: i64,
    /// When the status was reported.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// Upstream human readable status, if provided.
    #[serde(default)]
    pub text: Option<String>,
}

/// The latest measurement of a station.
///
/// Numeric fields that upstream reports as `null` are decoded as `0.0`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Measurement {
    /// When the measurement was taken.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// Atmospheric pressure in hPa. `0.0` or negative means "no reading".
    #[serde(default, deserialize_with = "null_as_default")]
    pub pressure: f64,
    /// Wind direction in degrees, `[0, 360)`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub wind_heading: f64,
    /// Average wind speed over the measurement interval, km/h.
    #[serde(default, deserialize_with = "null_as_default")]
    pub wind_speed_avg: f64,
    /// Minimum wind speed over the measurement interval, km/h.
    #[serde(default, deserialize_with = "null_as_default")]
    pub wind_speed_min: f64,
    /// Maximum wind speed (gust) over the measurement interval, km/h.
    #[serde(default, deserialize_with = "null_as_default")]
    pub wind_speed_max: f64,
}

impl StationRecord {
    /// The station position as a [`LatLon`].
    pub fn position(&self) -> LatLon {
        LatLon(self.latitude, self.longitude)
    }

    /// The decoded status of this station.
    pub fn status(&self) -> StationStatus {
        StationStatus::from_code(self.status.value)
    }

    /// Whether the station is operational (status code 0).
    pub fn is_active(&self) -> bool {
        self.status() == StationStatus::Operational
    }
}
