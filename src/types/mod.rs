pub mod bounds;
pub mod compass;
pub mod marker;
pub mod station;
pub mod status;
pub mod summary;
pub mod wind_scale;
