//! 16-point compass rose used to label wind headings.

use crate::utils::normalize_heading;
use serde::Serialize;
use std::fmt;

const SECTOR_DEGREES: f64 = 22.5;

/// One of the 16 compass points, clockwise from North.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum CompassDirection {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl CompassDirection {
    /// All points in clockwise order starting at North.
    pub const ALL: [CompassDirection; 16] = [
        CompassDirection::N,
        CompassDirection::NNE,
        CompassDirection::NE,
        CompassDirection::ENE,
        CompassDirection::E,
        CompassDirection::ESE,
        CompassDirection::SE,
        CompassDirection::SSE,
        CompassDirection::S,
        CompassDirection::SSW,
        CompassDirection::SW,
        CompassDirection::WSW,
        CompassDirection::W,
        CompassDirection::WNW,
        CompassDirection::NW,
        CompassDirection::NNW,
    ];

    /// Maps a heading in degrees onto the nearest compass point.
    ///
    /// Each point owns a 22.5° sector centred on it, so 349 through 11 all read
    /// as North. Headings outside `[0, 360)` are wrapped first; non-finite
    /// headings read as North.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use windbird::CompassDirection;
    ///
    /// assert_eq!(CompassDirection::from_heading(0.0), CompassDirection::N);
    /// assert_eq!(CompassDirection::from_heading(359.9), CompassDirection::N);
    /// assert_eq!(CompassDirection::from_heading(45.0), CompassDirection::NE);
    /// assert_eq!(CompassDirection::from_heading(180.0), CompassDirection::S);
    /// ```
    pub fn from_heading(degrees: f64) -> Self {
        let sector = (normalize_heading(degrees) / SECTOR_DEGREES).round() as usize;
        Self::ALL[sector % Self::ALL.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompassDirection::N => "N",
            CompassDirection::NNE => "NNE",
            CompassDirection::NE => "NE",
            CompassDirection::ENE => "ENE",
            CompassDirection::E => "E",
            CompassDirection::ESE => "ESE",
            CompassDirection::SE => "SE",
            CompassDirection::SSE => "SSE",
            CompassDirection::S => "S",
            CompassDirection::SSW => "SSW",
            CompassDirection::SW => "SW",
            CompassDirection::WSW => "WSW",
            CompassDirection::W => "W",
            CompassDirection::WNW => "WNW",
            CompassDirection::NW => "NW",
            CompassDirection::NNW => "NNW",
        }
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compass label for a wind heading in degrees.
pub fn wind_direction_label(degrees: f64) -> &'static str {
    CompassDirection::from_heading(degrees).label()
}
