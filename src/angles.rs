use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::angle::Angle;
use crate::error::SolarError;
use crate::math::decimal_mod;
use crate::types::PolarCondition;

/// Julian day of serial date 0 (1899-12-30 00:00).
pub const JULIAN_EPOCH_BRIDGE: Decimal = dec!(2415018.5);
pub const J2000_JULIAN_DAY: Decimal = dec!(2451545);
pub const DAYS_PER_JULIAN_CENTURY: Decimal = dec!(36525);
pub const MINUTES_PER_DAY: Decimal = dec!(1440);
pub const MINUTES_PER_DEGREE: Decimal = dec!(4);

pub fn julian_day(serial_date: Decimal, utc_offset_hours: Decimal) -> Decimal {
    serial_date + JULIAN_EPOCH_BRIDGE - utc_offset_hours / dec!(24)
}

pub fn julian_century(julian_day: Decimal) -> Decimal {
    (julian_day - J2000_JULIAN_DAY) / DAYS_PER_JULIAN_CENTURY
}

pub fn sun_geometric_mean_longitude(t: Decimal) -> Angle {
    Angle::from_degrees(dec!(280.46646) + t * (dec!(36000.76983) + t * dec!(0.0003032)))
        .normalized()
}

pub fn sun_mean_anomaly(t: Decimal) -> Angle {
    Angle::from_degrees(dec!(357.52911) + t * (dec!(35999.05029) - dec!(0.0001537) * t))
}

pub fn earth_orbit_eccentricity(t: Decimal) -> Decimal {
    dec!(0.016708634) - t * (dec!(0.000042037) + dec!(0.0000001267) * t)
}

pub fn sun_equation_of_center(t: Decimal, mean_anomaly: Angle) -> Angle {
    let m = mean_anomaly;
    Angle::from_degrees(
        m.sin() * (dec!(1.914602) - t * (dec!(0.004817) + dec!(0.000014) * t))
            + (m * dec!(2)).sin() * (dec!(0.019993) - dec!(0.000101) * t)
            + (m * dec!(3)).sin() * dec!(0.000289),
    )
}

pub fn sun_true_longitude(mean_longitude: Angle, equation_of_center: Angle) -> Angle {
    mean_longitude + equation_of_center
}

pub fn sun_true_anomaly(mean_anomaly: Angle, equation_of_center: Angle) -> Angle {
    mean_anomaly + equation_of_center
}

/// Earth–sun distance in astronomical units.
pub fn sun_radius_vector(eccentricity: Decimal, true_anomaly: Angle) -> Decimal {
    let e = eccentricity;
    (dec!(1.000001018) * (Decimal::ONE - e * e)) / (Decimal::ONE + e * true_anomaly.cos())
}

/// Longitude of the moon's ascending node, driving the nutation terms.
fn ascending_node(t: Decimal) -> Angle {
    Angle::from_degrees(dec!(125.04) - dec!(1934.136) * t)
}

pub fn sun_apparent_longitude(t: Decimal, true_longitude: Angle) -> Angle {
    true_longitude
        - Angle::from_degrees(dec!(0.00569) + dec!(0.00478) * ascending_node(t).sin())
}

/// 23°26'21.448" less the secular drift, folded into decimal degrees.
pub fn mean_ecliptic_obliquity(t: Decimal) -> Angle {
    let seconds = dec!(21.448) - t * (dec!(46.815) + t * (dec!(0.00059) - t * dec!(0.001813)));
    Angle::from_degrees(dec!(23) + (dec!(26) + seconds / dec!(60)) / dec!(60))
}

pub fn obliquity_correction(t: Decimal, mean_obliquity: Angle) -> Angle {
    mean_obliquity + Angle::from_degrees(dec!(0.00256) * ascending_node(t).cos())
}

pub fn sun_right_ascension(apparent_longitude: Angle, obliquity: Angle) -> Angle {
    let lambda = apparent_longitude;
    Angle::atan2(obliquity.cos() * lambda.sin(), lambda.cos())
}

pub fn solar_declination(obliquity: Angle, apparent_longitude: Angle) -> Angle {
    Angle::asin_clamped(obliquity.sin() * apparent_longitude.sin())
}

pub fn var_y(obliquity: Angle) -> Decimal {
    let half = (obliquity / dec!(2)).tan();
    half * half
}

/// Apparent minus mean solar time, in minutes.
pub fn equation_of_time(
    var_y: Decimal,
    eccentricity: Decimal,
    mean_longitude: Angle,
    mean_anomaly: Angle,
) -> Decimal {
    let (y, e, l0, m) = (var_y, eccentricity, mean_longitude, mean_anomaly);
    let radians = y * (l0 * dec!(2)).sin() - dec!(2) * e * m.sin()
        + dec!(4) * e * y * m.sin() * (l0 * dec!(2)).cos()
        - dec!(0.5) * y * y * (l0 * dec!(4)).sin()
        - dec!(1.25) * e * e * (m * dec!(2)).sin();
    MINUTES_PER_DEGREE * Angle::from_radians(radians).degrees()
}

/// Hour angle between solar noon and the moment the sun's centre sits
/// `refraction` below the geometric horizon.
///
/// Fails with [`SolarError::PolarDay`] or [`SolarError::PolarNight`] when the
/// arc-cosine argument leaves `[-1, 1]`. At the poles, where `cos(latitude)`
/// vanishes, the sun's altitude is the declination and decides directly.
pub fn hour_angle_sunrise(
    latitude: Angle,
    declination: Angle,
    refraction: Angle,
) -> Result<Angle, SolarError> {
    let cos_latitude = latitude.cos();
    let condition = if latitude.abs() >= Angle::RIGHT || cos_latitude <= Decimal::ZERO {
        polar_condition_at_pole(latitude, declination, refraction)
    } else {
        let horizon = (Angle::RIGHT + refraction).cos();
        let argument = cos_latitude
            .checked_mul(declination.cos())
            .and_then(|d| horizon.checked_div(d))
            .and_then(|q| {
                let p = latitude
                    .checked_tan()?
                    .checked_mul(declination.checked_tan()?)?;
                q.checked_sub(p)
            });
        match argument {
            Some(x) => match Angle::acos(x) {
                Some(h) => return Ok(h),
                None if x > Decimal::ONE => PolarCondition::PolarNight,
                None => PolarCondition::PolarDay,
            },
            None => polar_condition_at_pole(latitude, declination, refraction),
        }
    };

    let (latitude, declination) = (latitude.degrees(), declination.degrees());
    Err(match condition {
        PolarCondition::PolarDay => SolarError::PolarDay {
            latitude,
            declination,
        },
        PolarCondition::PolarNight => SolarError::PolarNight {
            latitude,
            declination,
        },
    })
}

fn polar_condition_at_pole(
    latitude: Angle,
    declination: Angle,
    refraction: Angle,
) -> PolarCondition {
    let altitude = if latitude.degrees().is_sign_negative() {
        -declination
    } else {
        declination
    };
    if altitude > -refraction {
        PolarCondition::PolarDay
    } else {
        PolarCondition::PolarNight
    }
}

/// Local solar noon as a fraction of the day.
pub fn solar_noon(
    longitude: Angle,
    equation_of_time: Decimal,
    utc_offset_hours: Decimal,
) -> Decimal {
    (dec!(720) - MINUTES_PER_DEGREE * longitude.degrees() - equation_of_time
        + utc_offset_hours * dec!(60))
        / MINUTES_PER_DAY
}

pub fn sunrise(solar_noon: Decimal, hour_angle_sunrise: Angle) -> Decimal {
    solar_noon - hour_angle_sunrise.degrees() * MINUTES_PER_DEGREE / MINUTES_PER_DAY
}

pub fn sunset(solar_noon: Decimal, hour_angle_sunrise: Angle) -> Decimal {
    solar_noon + hour_angle_sunrise.degrees() * MINUTES_PER_DEGREE / MINUTES_PER_DAY
}

/// Minutes between sunrise and sunset.
pub fn daylight_duration(hour_angle_sunrise: Angle) -> Decimal {
    dec!(8) * hour_angle_sunrise.degrees()
}

/// Minutes in `[0, 1440)`.
pub fn true_solar_time(
    time_past_midnight: Decimal,
    equation_of_time: Decimal,
    longitude: Angle,
    utc_offset_hours: Decimal,
) -> Decimal {
    decimal_mod(
        time_past_midnight * MINUTES_PER_DAY + equation_of_time
            + MINUTES_PER_DEGREE * longitude.degrees()
            - dec!(60) * utc_offset_hours,
        MINUTES_PER_DAY,
    )
}

pub fn hour_angle(true_solar_time: Decimal) -> Angle {
    let quarter = true_solar_time / MINUTES_PER_DEGREE;
    if quarter.is_sign_negative() {
        Angle::from_degrees(quarter + dec!(180))
    } else {
        Angle::from_degrees(quarter - dec!(180))
    }
}

pub fn solar_zenith_angle(latitude: Angle, declination: Angle, hour_angle: Angle) -> Angle {
    Angle::acos_clamped(
        latitude.sin() * declination.sin()
            + latitude.cos() * declination.cos() * hour_angle.cos(),
    )
}

pub fn solar_elevation(zenith: Angle) -> Angle {
    Angle::RIGHT - zenith
}

/// Clockwise from north.
pub fn solar_azimuth(latitude: Angle, declination: Angle, hour_angle: Angle) -> Angle {
    let sin_az = -declination.cos() * hour_angle.sin();
    let cos_az = declination.sin() * latitude.cos()
        - declination.cos() * latitude.sin() * hour_angle.cos();
    Angle::atan2(sin_az, cos_az).normalized()
}
