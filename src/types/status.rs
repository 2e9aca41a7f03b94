//! Defines the `StationStatus` enum, mapping Windbird's numeric status codes to
//! descriptive variants, display labels and severity colours.

use serde::Serialize;
use std::fmt;

/// Represents the status code reported by a Windbird station.
///
/// Upstream documents four codes; every other integer is mapped to
/// [`StationStatus::Unknown`], so conversion never fails.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum StationStatus {
    /// Code 0: the station is reporting normally.
    Operational,
    /// Code 1: the station reports a warning.
    Warning,
    /// Code 2: the station reports an error.
    Error,
    /// Code 3: the station has no recent data.
    NoData,
    /// Any other code.
    Unknown,
}

/// Severity colour token for a station status.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityColor {
    Green,
    Yellow,
    Red,
    Gray,
}

impl StationStatus {
    /// Converts a Windbird status code into a `StationStatus`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use windbird::StationStatus;
    ///
    /// assert_eq!(StationStatus::from_code(0), StationStatus::Operational);
    /// assert_eq!(StationStatus::from_code(3), StationStatus::NoData);
    /// assert_eq!(StationStatus::from_code(-1), StationStatus::Unknown);
    /// assert_eq!(StationStatus::from_code(99), StationStatus::Unknown);
    /// ```
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => StationStatus::Operational,
            1 => StationStatus::Warning,
            2 => StationStatus::Error,
            3 => StationStatus::NoData,
            _ => StationStatus::Unknown,
        }
    }

    /// Display label shown next to a station.
    pub fn label(&self) -> &'static str {
        match self {
            StationStatus::Operational => "Operatiu",
            StationStatus::Warning => "Advertència",
            StationStatus::Error => "Error",
            StationStatus::NoData => "Sense dades",
            StationStatus::Unknown => "Estat desconegut",
        }
    }

    pub fn color(&self) -> SeverityColor {
        match self {
            StationStatus::Operational => SeverityColor::Green,
            StationStatus::Warning => SeverityColor::Yellow,
            StationStatus::Error => SeverityColor::Red,
            StationStatus::NoData | StationStatus::Unknown => SeverityColor::Gray,
        }
    }
}

impl SeverityColor {
    pub fn name(&self) -> &'static str {
        match self {
            SeverityColor::Green => "green",
            SeverityColor::Yellow => "yellow",
            SeverityColor::Red => "red",
            SeverityColor::Gray => "gray",
        }
    }

    /// Tailwind background class used by the web dashboard.
    pub fn css_class(&self) -> &'static str {
        match self {
            SeverityColor::Green => "bg-green-500",
            SeverityColor::Yellow => "bg-yellow-500",
            SeverityColor::Red => "bg-red-500",
            SeverityColor::Gray => "bg-gray-500",
        }
    }
}

impl fmt::Display for StationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for SeverityColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Display label for a raw status code. Total over all integers.
pub fn status_label(code: i64) -> &'static str {
    StationStatus::from_code(code).label()
}

/// Severity colour for a raw status code. Total over all integers.
pub fn status_severity_color(code: i64) -> SeverityColor {
    StationStatus::from_code(code).color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(status_label(0), "Operatiu");
        assert_eq!(status_label(1), "Advertència");
        assert_eq!(status_label(2), "Error");
        assert_eq!(status_label(3), "Sense dades");
        assert_eq!(status_severity_color(0), SeverityColor::Green);
        assert_eq!(status_severity_color(1), SeverityColor::Yellow);
        assert_eq!(status_severity_color(2), SeverityColor::Red);
        assert_eq!(status_severity_color(3), SeverityColor::Gray);
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        for code in [-1, 4, 17, i64::MIN, i64::MAX] {
            assert_eq!(status_label(code), "Estat desconegut");
            assert_eq!(status_severity_color(code), SeverityColor::Gray);
        }
    }

    #[test]
    fn test_css_class() {
        assert_eq!(status_severity_color(0).css_class(), "bg-green-500");
        assert_eq!(status_severity_color(2).css_class(), "bg-red-500");
        assert_eq!(SeverityColor::Yellow.to_string(), "yellow");
    }
}
