use crate::source::error::StationSourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WindbirdError {
    #[error(transparent)]
    StationSource(#[from] StationSourceError),

    #[error(transparent)]
    Bounds(#[from] BoundsError),
}

#[derive(Debug, Error, PartialEq)]
pub enum BoundsError {
    #[error("Bounding box edges must be finite numbers")]
    NotFinite,

    #[error("Bounding box {axis} minimum {min} exceeds maximum {max}")]
    Inverted {
        axis: &'static str,
        min: f64,
        max: f64,
    },
}
