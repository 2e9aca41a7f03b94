use crate::types::bounds::LatLon;
use crate::types::compass::CompassDirection;
use crate::types::station::StationRecord;
use crate::types::status::{SeverityColor, StationStatus};
use crate::types::wind_scale::WindDescriptor;
use serde::Serialize;

/// Everything the map widget needs to draw one station and its popup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationMarker {
    pub id: u32,
    pub name: String,
    pub position: LatLon,
    pub wind_speed_kmh: f64,
    pub wind_gust_kmh: f64,
    pub wind_heading: f64,
    pub direction: CompassDirection,
    pub descriptor: WindDescriptor,
    pub status: StationStatus,
    pub status_color: SeverityColor,
}

impl From<&StationRecord> for StationMarker {
    fn from(station: &StationRecord) -> Self {
        let measurement = &station.measurements;
        let status = station.status();
        Self {
            id: station.id,
            name: station.name.clone(),
            position: station.position(),
            wind_speed_kmh: measurement.wind_speed_avg,
            wind_gust_kmh: measurement.wind_speed_max,
            wind_heading: measurement.wind_heading,
            direction: CompassDirection::from_heading(measurement.wind_heading),
            descriptor: WindDescriptor::from_speed(measurement.wind_speed_avg),
            status,
            status_color: status.color(),
        }
    }
}
