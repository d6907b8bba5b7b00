//! Value Objects - Immutable, identity-less domain primitives

mod cloud_cover;
mod temperature_range;
mod wind;

pub use cloud_cover::CloudCover;
pub use temperature_range::TemperatureRange;
pub use wind::{Wind, WindDirection};
