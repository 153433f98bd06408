use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

use crate::angle::Angle;
use crate::error::SolarError;
use crate::serial_date;

/// Standard refraction plus solar semi-diameter at the horizon.
pub const DEFAULT_REFRACTION: Angle = Angle::from_degrees(dec!(0.833));

pub const MAX_UTC_OFFSET_HOURS: Decimal = dec!(14);

const SECONDS_PER_HOUR: Decimal = dec!(3600);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarCondition {
    /// Midnight sun: the sun never drops below the sunrise threshold.
    PolarDay,
    /// The sun never rises above the sunrise threshold.
    PolarNight,
}

pub fn validate_latitude(latitude: Angle) -> Result<Angle, SolarError> {
    if latitude.is_within(dec!(-90), dec!(90)) {
        Ok(latitude)
    } else {
        Err(SolarError::LatitudeOutOfRange {
            value: latitude.degrees(),
        })
    }
}

pub fn validate_longitude(longitude: Angle) -> Result<Angle, SolarError> {
    if longitude.is_within(dec!(-180), dec!(180)) {
        Ok(longitude)
    } else {
        Err(SolarError::LongitudeOutOfRange {
            value: longitude.degrees(),
        })
    }
}

pub fn validate_refraction(refraction: Angle) -> Result<Angle, SolarError> {
    if refraction >= Angle::ZERO && refraction < Angle::RIGHT {
        Ok(refraction)
    } else {
        Err(SolarError::RefractionOutOfRange {
            value: refraction.degrees(),
        })
    }
}

pub fn utc_offset_hours(offset: &FixedOffset) -> Decimal {
    Decimal::from(offset.local_minus_utc()) / SECONDS_PER_HOUR
}

/// Fixed offset for a whole number of seconds within ±14h.
pub fn fixed_offset(hours: Decimal) -> Result<FixedOffset, SolarError> {
    let out_of_range = SolarError::UtcOffsetOutOfRange { hours };
    if hours.abs() > MAX_UTC_OFFSET_HOURS {
        return Err(out_of_range);
    }
    let seconds = hours * SECONDS_PER_HOUR;
    if !seconds.fract().is_zero() {
        return Err(out_of_range);
    }
    seconds
        .to_i32()
        .and_then(FixedOffset::east_opt)
        .ok_or(out_of_range)
}

pub fn validate_date(date: DateTime<FixedOffset>) -> Result<DateTime<FixedOffset>, SolarError> {
    fixed_offset(utc_offset_hours(date.offset()))?;
    Ok(date)
}

/// One validated calculation request: local date and time with its UTC offset,
/// observer location and horizon refraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarInput {
    date: DateTime<FixedOffset>,
    latitude: Angle,
    longitude: Angle,
    refraction: Angle,
}

impl SolarInput {
    pub fn new(
        local: NaiveDateTime,
        utc_offset_hours: Decimal,
        latitude: impl Into<Angle>,
        longitude: impl Into<Angle>,
    ) -> Result<Self, SolarError> {
        let offset = fixed_offset(utc_offset_hours)?;
        let date = offset
            .from_local_datetime(&local)
            .single()
            .ok_or(SolarError::DateOutOfRange)?;
        Self::from_datetime(date, latitude, longitude)
    }

    pub fn from_datetime(
        date: DateTime<FixedOffset>,
        latitude: impl Into<Angle>,
        longitude: impl Into<Angle>,
    ) -> Result<Self, SolarError> {
        Ok(SolarInput {
            date: validate_date(date)?,
            latitude: validate_latitude(latitude.into())?,
            longitude: validate_longitude(longitude.into())?,
            refraction: DEFAULT_REFRACTION,
        })
    }

    pub fn with_refraction(mut self, refraction: impl Into<Angle>) -> Result<Self, SolarError> {
        self.refraction = validate_refraction(refraction.into())?;
        Ok(self)
    }

    pub fn date(&self) -> DateTime<FixedOffset> {
        self.date
    }

    pub fn local_date(&self) -> NaiveDate {
        self.date.date_naive()
    }

    pub fn utc_offset_hours(&self) -> Decimal {
        utc_offset_hours(self.date.offset())
    }

    pub fn latitude(&self) -> Angle {
        self.latitude
    }

    pub fn longitude(&self) -> Angle {
        self.longitude
    }

    pub fn refraction(&self) -> Angle {
        self.refraction
    }

    pub fn serial_date(&self) -> Decimal {
        serial_date::to_serial_date(&self.date.naive_local())
    }

    /// Fraction of the local day elapsed at `date`.
    pub fn time_past_midnight(&self) -> Decimal {
        serial_date::day_fraction(self.date.time())
    }
}

/// Location-independent quantities for one instant, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarGeometry {
    pub julian_day: Decimal,
    pub julian_century: Decimal,
    pub sun_geometric_mean_longitude: Angle,
    pub sun_mean_anomaly: Angle,
    pub earth_orbit_eccentricity: Decimal,
    pub sun_equation_of_center: Angle,
    pub sun_true_longitude: Angle,
    pub sun_true_anomaly: Angle,
    /// Astronomical units.
    pub sun_radius_vector: Decimal,
    pub sun_apparent_longitude: Angle,
    pub mean_ecliptic_obliquity: Angle,
    pub obliquity_correction: Angle,
    pub sun_right_ascension: Angle,
    pub solar_declination: Angle,
    pub var_y: Decimal,
    /// Minutes.
    pub equation_of_time: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Daylight {
    pub hour_angle_sunrise: Angle,
    pub sunrise: DateTime<FixedOffset>,
    pub sunset: DateTime<FixedOffset>,
    pub duration_minutes: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolarReport {
    pub input: SolarInput,
    pub geometry: SolarGeometry,
    pub solar_noon: DateTime<FixedOffset>,
    /// Minutes in `[0, 1440)`.
    pub true_solar_time: Decimal,
    pub hour_angle: Angle,
    pub solar_zenith_angle: Angle,
    pub solar_elevation: Angle,
    /// Clockwise from north, `[0, 360)`.
    pub solar_azimuth: Angle,
    pub daylight: Result<Daylight, SolarError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Normal {
        sunrise_minutes: i32,
        sunset_minutes: i32,
    },
    PolarDay,
    PolarNight,
}

impl DayStatus {
    pub fn daylight_minutes(&self) -> i32 {
        match *self {
            DayStatus::Normal {
                sunrise_minutes,
                sunset_minutes,
            } => sunset_minutes - sunrise_minutes,
            DayStatus::PolarDay => 1440,
            DayStatus::PolarNight => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayData {
    pub day_of_year: u32,
    pub date: NaiveDate,
    pub solar_noon_minutes: i32,
    pub status: DayStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableMetadata {
    pub generated_at: String,
    pub total_days: usize,
    pub polar_days: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaylightTableConfig {
    pub latitude: Angle,
    pub longitude: Angle,
    pub utc_offset_hours: Decimal,
    pub year: i32,
    pub refraction: Angle,
}

impl Default for DaylightTableConfig {
    fn default() -> Self {
        Self {
            latitude: Angle::from_degrees(dec!(39.8)),
            longitude: Angle::from_degrees(dec!(-89.6)),
            utc_offset_hours: dec!(-6),
            year: 2026,
            refraction: DEFAULT_REFRACTION,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DaylightTable {
    pub config: DaylightTableConfig,
    pub days: Vec<DayData>,
    pub metadata: TableMetadata,
}
