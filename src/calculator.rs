//! Evaluation of the formula pipeline.
//!
//! [`solar_geometry`] and [`evaluate`] are stateless: the same input always
//! yields the same report. [`SolarTimeCalculator`] wraps them for callers that
//! want to adjust one input at a time and read individual values back.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone};
use log::{debug, trace};
use rust_decimal::Decimal;

use crate::angle::Angle;
use crate::angles;
use crate::error::SolarError;
use crate::serial_date;
use crate::types::{
    fixed_offset, utc_offset_hours, validate_date, validate_latitude, validate_longitude,
    validate_refraction, Daylight, SolarGeometry, SolarInput, SolarReport, DEFAULT_REFRACTION,
};

/// Every location-independent quantity for the instant at `julian_day`.
pub fn solar_geometry(julian_day: Decimal) -> SolarGeometry {
    let t = angles::julian_century(julian_day);
    let mean_longitude = angles::sun_geometric_mean_longitude(t);
    let mean_anomaly = angles::sun_mean_anomaly(t);
    let eccentricity = angles::earth_orbit_eccentricity(t);
    let center = angles::sun_equation_of_center(t, mean_anomaly);
    let true_longitude = angles::sun_true_longitude(mean_longitude, center);
    let true_anomaly = angles::sun_true_anomaly(mean_anomaly, center);
    let apparent_longitude = angles::sun_apparent_longitude(t, true_longitude);
    let mean_obliquity = angles::mean_ecliptic_obliquity(t);
    let obliquity = angles::obliquity_correction(t, mean_obliquity);
    let var_y = angles::var_y(obliquity);

    let geometry = SolarGeometry {
        julian_day,
        julian_century: t,
        sun_geometric_mean_longitude: mean_longitude,
        sun_mean_anomaly: mean_anomaly,
        earth_orbit_eccentricity: eccentricity,
        sun_equation_of_center: center,
        sun_true_longitude: true_longitude,
        sun_true_anomaly: true_anomaly,
        sun_radius_vector: angles::sun_radius_vector(eccentricity, true_anomaly),
        sun_apparent_longitude: apparent_longitude,
        mean_ecliptic_obliquity: mean_obliquity,
        obliquity_correction: obliquity,
        sun_right_ascension: angles::sun_right_ascension(apparent_longitude, obliquity),
        solar_declination: angles::solar_declination(obliquity, apparent_longitude),
        var_y,
        equation_of_time: angles::equation_of_time(
            var_y,
            eccentricity,
            mean_longitude,
            mean_anomaly,
        ),
    };
    trace!(
        "jd={} declination={} equation_of_time={}min",
        julian_day,
        geometry.solar_declination,
        geometry.equation_of_time
    );
    geometry
}

pub fn geometry_at(date: &DateTime<FixedOffset>) -> SolarGeometry {
    let serial = serial_date::to_serial_date(&date.naive_local());
    solar_geometry(angles::julian_day(serial, utc_offset_hours(date.offset())))
}

/// Instant `day_fraction` days after local midnight of the input's date.
fn local_instant(
    input: &SolarInput,
    day_fraction: Decimal,
) -> Result<DateTime<FixedOffset>, SolarError> {
    let naive = serial_date::from_serial_date(input.serial_date().floor() + day_fraction)
        .ok_or(SolarError::DateOutOfRange)?;
    input
        .date()
        .offset()
        .from_local_datetime(&naive)
        .single()
        .ok_or(SolarError::DateOutOfRange)
}

fn daylight(
    input: &SolarInput,
    geometry: &SolarGeometry,
    noon: Decimal,
) -> Result<Daylight, SolarError> {
    let hour_angle_sunrise = angles::hour_angle_sunrise(
        input.latitude(),
        geometry.solar_declination,
        input.refraction(),
    )
    .inspect_err(|e| debug!("{} on {}", e, input.local_date()))?;
    Ok(Daylight {
        hour_angle_sunrise,
        sunrise: local_instant(input, angles::sunrise(noon, hour_angle_sunrise))?,
        sunset: local_instant(input, angles::sunset(noon, hour_angle_sunrise))?,
        duration_minutes: angles::daylight_duration(hour_angle_sunrise),
    })
}

/// Runs the whole pipeline for one input.
///
/// A polar day or night does not fail the report; it lands in
/// [`SolarReport::daylight`] and only the sunrise-dependent values are missing.
pub fn evaluate(input: &SolarInput) -> Result<SolarReport, SolarError> {
    let geometry = geometry_at(&input.date());
    let offset = input.utc_offset_hours();
    let noon = angles::solar_noon(input.longitude(), geometry.equation_of_time, offset);
    let true_solar_time = angles::true_solar_time(
        input.time_past_midnight(),
        geometry.equation_of_time,
        input.longitude(),
        offset,
    );
    let hour_angle = angles::hour_angle(true_solar_time);
    let declination = geometry.solar_declination;
    let zenith = angles::solar_zenith_angle(input.latitude(), declination, hour_angle);

    Ok(SolarReport {
        input: *input,
        geometry,
        solar_noon: local_instant(input, noon)?,
        true_solar_time,
        hour_angle,
        solar_zenith_angle: zenith,
        solar_elevation: angles::solar_elevation(zenith),
        solar_azimuth: angles::solar_azimuth(input.latitude(), declination, hour_angle),
        daylight: daylight(input, &geometry, noon),
    })
}

/// Mutable set of inputs with every derived value available as a method.
///
/// Nothing is cached: each read recomputes from the current inputs. Location
/// readouts fail with [`SolarError::LocationUnset`] until latitude and
/// longitude are assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolarTimeCalculator {
    date: DateTime<FixedOffset>,
    latitude: Option<Angle>,
    longitude: Option<Angle>,
    refraction: Angle,
}

impl Default for SolarTimeCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl SolarTimeCalculator {
    /// Current local time, location unset.
    pub fn new() -> Self {
        let now = Local::now();
        SolarTimeCalculator {
            date: now.with_timezone(now.offset()),
            latitude: None,
            longitude: None,
            refraction: DEFAULT_REFRACTION,
        }
    }

    pub fn with_location(
        local: NaiveDateTime,
        utc_offset_hours: Decimal,
        latitude: impl Into<Angle>,
        longitude: impl Into<Angle>,
    ) -> Result<Self, SolarError> {
        SolarInput::new(local, utc_offset_hours, latitude, longitude).map(Self::from_input)
    }

    pub fn from_datetime(
        date: DateTime<FixedOffset>,
        latitude: impl Into<Angle>,
        longitude: impl Into<Angle>,
    ) -> Result<Self, SolarError> {
        SolarInput::from_datetime(date, latitude, longitude).map(Self::from_input)
    }

    pub fn from_input(input: SolarInput) -> Self {
        SolarTimeCalculator {
            date: input.date(),
            latitude: Some(input.latitude()),
            longitude: Some(input.longitude()),
            refraction: input.refraction(),
        }
    }

    pub fn date(&self) -> DateTime<FixedOffset> {
        self.date
    }

    pub fn latitude(&self) -> Option<Angle> {
        self.latitude
    }

    pub fn longitude(&self) -> Option<Angle> {
        self.longitude
    }

    pub fn refraction(&self) -> Angle {
        self.refraction
    }

    pub fn set_date(&mut self, date: DateTime<FixedOffset>) -> Result<(), SolarError> {
        self.date = validate_date(date)?;
        Ok(())
    }

    pub fn set_local_date(
        &mut self,
        local: NaiveDateTime,
        utc_offset_hours: Decimal,
    ) -> Result<(), SolarError> {
        self.date = fixed_offset(utc_offset_hours)?
            .from_local_datetime(&local)
            .single()
            .ok_or(SolarError::DateOutOfRange)?;
        Ok(())
    }

    pub fn set_latitude(&mut self, latitude: impl Into<Angle>) -> Result<(), SolarError> {
        self.latitude = Some(validate_latitude(latitude.into())?);
        Ok(())
    }

    pub fn set_longitude(&mut self, longitude: impl Into<Angle>) -> Result<(), SolarError> {
        self.longitude = Some(validate_longitude(longitude.into())?);
        Ok(())
    }

    pub fn set_refraction(&mut self, refraction: impl Into<Angle>) -> Result<(), SolarError> {
        self.refraction = validate_refraction(refraction.into())?;
        Ok(())
    }

    pub fn utc_offset_hours(&self) -> Decimal {
        utc_offset_hours(self.date.offset())
    }

    pub fn input(&self) -> Result<SolarInput, SolarError> {
        let latitude = self.latitude.ok_or(SolarError::LocationUnset { field: "latitude" })?;
        let longitude = self
            .longitude
            .ok_or(SolarError::LocationUnset { field: "longitude" })?;
        SolarInput::from_datetime(self.date, latitude, longitude)?.with_refraction(self.refraction)
    }

    pub fn evaluate(&self) -> Result<SolarReport, SolarError> {
        evaluate(&self.input()?)
    }

    pub fn geometry(&self) -> SolarGeometry {
        geometry_at(&self.date)
    }

    pub fn julian_day(&self) -> Decimal {
        self.geometry().julian_day
    }

    pub fn julian_century(&self) -> Decimal {
        self.geometry().julian_century
    }

    pub fn sun_geometric_mean_longitude(&self) -> Angle {
        self.geometry().sun_geometric_mean_longitude
    }

    pub fn sun_mean_anomaly(&self) -> Angle {
        self.geometry().sun_mean_anomaly
    }

    pub fn earth_orbit_eccentricity(&self) -> Decimal {
        self.geometry().earth_orbit_eccentricity
    }

    pub fn sun_equation_of_center(&self) -> Angle {
        self.geometry().sun_equation_of_center
    }

    pub fn sun_true_longitude(&self) -> Angle {
        self.geometry().sun_true_longitude
    }

    pub fn sun_true_anomaly(&self) -> Angle {
        self.geometry().sun_true_anomaly
    }

    pub fn sun_radius_vector(&self) -> Decimal {
        self.geometry().sun_radius_vector
    }

    pub fn sun_apparent_longitude(&self) -> Angle {
        self.geometry().sun_apparent_longitude
    }

    pub fn mean_ecliptic_obliquity(&self) -> Angle {
        self.geometry().mean_ecliptic_obliquity
    }

    pub fn obliquity_correction(&self) -> Angle {
        self.geometry().obliquity_correction
    }

    pub fn sun_right_ascension(&self) -> Angle {
        self.geometry().sun_right_ascension
    }

    pub fn solar_declination(&self) -> Angle {
        self.geometry().solar_declination
    }

    pub fn var_y(&self) -> Decimal {
        self.geometry().var_y
    }

    pub fn equation_of_time(&self) -> Decimal {
        self.geometry().equation_of_time
    }

    pub fn hour_angle_sunrise(&self) -> Result<Angle, SolarError> {
        let input = self.input()?;
        angles::hour_angle_sunrise(
            input.latitude(),
            self.solar_declination(),
            input.refraction(),
        )
    }

    pub fn solar_noon(&self) -> Result<DateTime<FixedOffset>, SolarError> {
        Ok(self.evaluate()?.solar_noon)
    }

    pub fn sunrise(&self) -> Result<DateTime<FixedOffset>, SolarError> {
        Ok(self.evaluate()?.daylight?.sunrise)
    }

    pub fn sunset(&self) -> Result<DateTime<FixedOffset>, SolarError> {
        Ok(self.evaluate()?.daylight?.sunset)
    }

    pub fn daylight_duration(&self) -> Result<Decimal, SolarError> {
        self.hour_angle_sunrise().map(angles::daylight_duration)
    }

    pub fn true_solar_time(&self) -> Result<Decimal, SolarError> {
        Ok(self.evaluate()?.true_solar_time)
    }

    pub fn hour_angle(&self) -> Result<Angle, SolarError> {
        Ok(self.evaluate()?.hour_angle)
    }

    pub fn solar_zenith_angle(&self) -> Result<Angle, SolarError> {
        Ok(self.evaluate()?.solar_zenith_angle)
    }

    pub fn solar_elevation(&self) -> Result<Angle, SolarError> {
        Ok(self.evaluate()?.solar_elevation)
    }

    pub fn solar_azimuth(&self) -> Result<Angle, SolarError> {
        Ok(self.evaluate()?.solar_azimuth)
    }
}
