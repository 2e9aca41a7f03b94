mod aggregate;
mod config;
mod dashboard;
mod error;
mod source;
mod types;
mod utils;

pub use error::{BoundsError, WindbirdError};

pub use aggregate::{direction_bucket, filter_within_bounds, summarize, Snapshot};
pub use config::{DashboardConfig, DEFAULT_REFRESH_INTERVAL, MIN_REFRESH_INTERVAL};
pub use dashboard::{Dashboard, DashboardHandle, DashboardPhase, DashboardState};

pub use source::client::{StationClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use source::error::StationSourceError;
pub use source::StationSource;

pub use types::bounds::{GeographicBounds, LatLon};
pub use types::compass::{wind_direction_label, CompassDirection};
pub use types::marker::StationMarker;
pub use types::station::{Measurement, StationRecord, StationStatusReport};
pub use types::status::{status_label, status_severity_color, SeverityColor, StationStatus};
pub use types::summary::{AggregateSummary, DirectionBucket};
pub use types::wind_scale::{wind_descriptor, WindDescriptor};
