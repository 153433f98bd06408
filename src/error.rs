use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::PolarCondition;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolarError {
    #[error("latitude {value}° is outside the legal range [-90°, 90°]")]
    LatitudeOutOfRange { value: Decimal },

    #[error("longitude {value}° is outside the legal range [-180°, 180°]")]
    LongitudeOutOfRange { value: Decimal },

    #[error("UTC offset {hours}h is outside [-14h, 14h] or not a whole number of seconds")]
    UtcOffsetOutOfRange { hours: Decimal },

    #[error("refraction correction {value}° is outside [0°, 90°)")]
    RefractionOutOfRange { value: Decimal },

    #[error("{field} has not been set")]
    LocationUnset { field: &'static str },

    /// The sun stays above the sunrise threshold all day.
    #[error("no sunset: polar day at latitude {latitude}° (declination {declination}°)")]
    PolarDay { latitude: Decimal, declination: Decimal },

    /// The sun never reaches the sunrise threshold.
    #[error("no sunrise: polar night at latitude {latitude}° (declination {declination}°)")]
    PolarNight { latitude: Decimal, declination: Decimal },

    #[error("derived instant is outside the representable date range")]
    DateOutOfRange,
}

impl SolarError {
    pub fn is_polar(&self) -> bool {
        self.polar_condition().is_some()
    }

    pub fn polar_condition(&self) -> Option<PolarCondition> {
        match self {
            SolarError::PolarDay { .. } => Some(PolarCondition::PolarDay),
            SolarError::PolarNight { .. } => Some(PolarCondition::PolarNight),
            _ => None,
        }
    }
}
