use crate::types::bounds::GeographicBounds;
use bon::Builder;
use std::time::Duration;

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Shortest refresh period the dashboard will honour.
pub const MIN_REFRESH_INTERVAL: Duration = Duration::from_millis(10);

/// Settings for a [`crate::Dashboard`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use windbird::{DashboardConfig, GeographicBounds};
///
/// let config = DashboardConfig::builder()
///     .refresh_interval(Duration::from_secs(60))
///     .build();
/// assert_eq!(config.bounds, GeographicBounds::CATALONIA);
/// assert_eq!(config.refresh_interval, Duration::from_secs(60));
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct DashboardConfig {
    /// Region of interest; stations outside it are ignored.
    #[builder(default)]
    pub bounds: GeographicBounds,
    /// Time between two refresh cycles.
    #[builder(default = DEFAULT_REFRESH_INTERVAL)]
    pub refresh_interval: Duration,
}

impl DashboardConfig {
    /// The refresh period actually used, never shorter than [`MIN_REFRESH_INTERVAL`].
    pub fn effective_refresh_interval(&self) -> Duration {
        self.refresh_interval.max(MIN_REFRESH_INTERVAL)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.bounds, GeographicBounds::CATALONIA);
        assert_eq!(config.refresh_interval, Duration::from_secs(30));
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let config = DashboardConfig::builder()
            .refresh_interval(Duration::ZERO)
            .build();
        assert_eq!(config.effective_refresh_interval(), MIN_REFRESH_INTERVAL);
    }
}
