//! Geographic types: a plain coordinate pair and the fixed bounding box that
//! restricts the dashboard to one region.

use crate::error::BoundsError;
use serde::Serialize;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use windbird::LatLon;
///
/// let barcelona_port = LatLon(41.3651, 2.1684);
/// assert_eq!(barcelona_port.0, 41.3651); // Latitude
/// assert_eq!(barcelona_port.1, 2.1684); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon(pub f64, pub f64);

/// An immutable latitude/longitude rectangle, inclusive on all four edges.
///
/// Construct with [`GeographicBounds::new`], which guarantees `min <= max` on
/// both axes, or use the [`GeographicBounds::CATALONIA`] preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeographicBounds {
    min_latitude: f64,
    max_latitude: f64,
    min_longitude: f64,
    max_longitude: f64,
}

/// Map centre used by the Catalonia dashboard.
const CATALONIA_CENTER: LatLon = LatLon(41.8183, 1.8276);

impl GeographicBounds {
    /// Catalonia, the default region of interest.
    pub const CATALONIA: GeographicBounds = GeographicBounds {
        min_latitude: 40.5,
        max_latitude: 42.9,
        min_longitude: 0.15,
        max_longitude: 3.35,
    };

    /// Creates a bounding box.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::NotFinite`] if any edge is NaN or infinite, and
    /// [`BoundsError::Inverted`] if a minimum exceeds its maximum.
    ///
    /// # Examples
    ///
    /// ```
    /// use windbird::{GeographicBounds, LatLon};
    ///
    /// let bounds = GeographicBounds::new(40.0, 41.0, 0.0, 1.0).unwrap();
    /// assert!(bounds.contains(LatLon(40.0, 1.0)));
    /// assert!(GeographicBounds::new(41.0, 40.0, 0.0, 1.0).is_err());
    /// ```
    pub fn new(
        min_latitude: f64,
        max_latitude: f64,
        min_longitude: f64,
        max_longitude: f64,
    ) -> Result<Self, BoundsError> {
        let edges = [min_latitude, max_latitude, min_longitude, max_longitude];
        if edges.iter().any(|edge| !edge.is_finite()) {
            return Err(BoundsError::NotFinite);
        }
        if min_latitude > max_latitude {
            return Err(BoundsError::Inverted {
                axis: "latitude",
                min: min_latitude,
                max: max_latitude,
            });
        }
        if min_longitude > max_longitude {
            return Err(BoundsError::Inverted {
                axis: "longitude",
                min: min_longitude,
                max: max_longitude,
            });
        }
        Ok(Self {
            min_latitude,
            max_latitude,
            min_longitude,
            max_longitude,
        })
    }

    /// Whether `point` lies inside the box, edges included.
    pub fn contains(&self, point: LatLon) -> bool {
        let LatLon(latitude, longitude) = point;
        latitude >= self.min_latitude
            && latitude <= self.max_latitude
            && longitude >= self.min_longitude
            && longitude <= self.max_longitude
    }

    /// Initial map centre for this region.
    pub fn center(&self) -> LatLon {
        if *self == Self::CATALONIA {
            return CATALONIA_CENTER;
        }
        LatLon(
            (self.min_latitude + self.max_latitude) / 2.0,
            (self.min_longitude + self.max_longitude) / 2.0,
        )
    }

    pub fn min_latitude(&self) -> f64 {
        self.min_latitude
    }

    pub fn max_latitude(&self) -> f64 {
        self.max_latitude
    }

    pub fn min_longitude(&self) -> f64 {
        self.min_longitude
    }

    pub fn max_longitude(&self) -> f64 {
        self.max_longitude
    }
}

impl Default for GeographicBounds {
    fn default() -> Self {
        Self::CATALONIA
    }
}
