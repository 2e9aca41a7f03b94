//! Beaufort-like wind descriptors for wind speeds in km/h.

use serde::Serialize;
use std::fmt;

/// Descriptive wind strength, ordered from calmest to strongest.
///
/// Variants derive `Ord`, so comparing descriptors compares severity.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize)]
pub enum WindDescriptor {
    /// Below 1 km/h.
    Calm,
    /// 1 to 6 km/h.
    VeryLight,
    /// 6 to 12 km/h.
    Light,
    /// 12 to 20 km/h.
    Moderate,
    /// 20 to 29 km/h.
    Strong,
    /// 29 to 39 km/h.
    VeryStrong,
    /// 39 to 50 km/h.
    Storm,
    /// 50 to 62 km/h.
    SevereStorm,
    /// 62 to 75 km/h.
    ViolentStorm,
    /// 75 km/h and above.
    HurricaneForce,
}

/// Lower bound (inclusive, km/h) of every band above `Calm`.
const THRESHOLDS: [(f64, WindDescriptor); 9] = [
    (1.0, WindDescriptor::VeryLight),
    (6.0, WindDescriptor::Light),
    (12.0, WindDescriptor::Moderate),
    (20.0, WindDescriptor::Strong),
    (29.0, WindDescriptor::VeryStrong),
    (39.0, WindDescriptor::Storm),
    (50.0, WindDescriptor::SevereStorm),
    (62.0, WindDescriptor::ViolentStorm),
    (75.0, WindDescriptor::HurricaneForce),
];

impl WindDescriptor {
    /// Classifies a wind speed in km/h.
    ///
    /// Bands are half-open: a speed exactly on a threshold belongs to the
    /// stronger band. Negative and NaN speeds are treated as calm.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use windbird::WindDescriptor;
    ///
    /// assert_eq!(WindDescriptor::from_speed(0.0), WindDescriptor::Calm);
    /// assert_eq!(WindDescriptor::from_speed(11.9), WindDescriptor::Light);
    /// assert_eq!(WindDescriptor::from_speed(12.0), WindDescriptor::Moderate);
    /// assert_eq!(WindDescriptor::from_speed(120.0).label(), "Temporal huracanat");
    /// ```
    pub fn from_speed(speed_kmh: f64) -> Self {
        THRESHOLDS
            .iter()
            .rev()
            .find(|(lower, _)| speed_kmh >= *lower)
            .map(|(_, descriptor)| *descriptor)
            .unwrap_or(WindDescriptor::Calm)
    }

    pub fn label(&self) -> &'static str {
        match self {
            WindDescriptor::Calm => "Calma",
            WindDescriptor::VeryLight => "Vent molt fluix",
            WindDescriptor::Light => "Vent fluix",
            WindDescriptor::Moderate => "Vent moderat",
            WindDescriptor::Strong => "Vent fort",
            WindDescriptor::VeryStrong => "Vent molt fort",
            WindDescriptor::Storm => "Temporal",
            WindDescriptor::SevereStorm => "Temporal fort",
            WindDescriptor::ViolentStorm => "Temporal molt fort",
            WindDescriptor::HurricaneForce => "Temporal huracanat",
        }
    }
}

impl fmt::Display for WindDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Descriptor label for a wind speed in km/h.
pub fn wind_descriptor(speed_kmh: f64) -> &'static str {
    WindDescriptor::from_speed(speed_kmh).label()
}
