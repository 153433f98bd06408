pub mod angle;
pub mod angles;
pub mod calculator;
pub mod daylight_table;
pub mod error;
pub mod math;
pub mod serial_date;
pub mod types;

pub use angle::Angle;

pub use angles::{
    daylight_duration, earth_orbit_eccentricity, equation_of_time, hour_angle,
    hour_angle_sunrise, julian_century, julian_day, mean_ecliptic_obliquity,
    obliquity_correction, solar_azimuth, solar_declination, solar_elevation, solar_noon,
    solar_zenith_angle, sun_apparent_longitude, sun_equation_of_center,
    sun_geometric_mean_longitude, sun_mean_anomaly, sun_radius_vector, sun_right_ascension,
    sun_true_anomaly, sun_true_longitude, sunrise, sunset, true_solar_time, var_y,
    JULIAN_EPOCH_BRIDGE, MINUTES_PER_DAY,
};

pub use calculator::{evaluate, geometry_at, solar_geometry, SolarTimeCalculator};

pub use daylight_table::{
    daylight_table_to_compact, generate_daylight_table, longest_day, lookup_date, lookup_day,
    minutes_to_time, shortest_day, time_to_minutes,
};

pub use error::SolarError;

pub use math::{acos, asin, atan, atan2, decimal_mod};

pub use serial_date::{day_fraction, from_serial_date, to_serial_date};

pub use types::{
    DayData, DayStatus, Daylight, DaylightTable, DaylightTableConfig, PolarCondition,
    SolarGeometry, SolarInput, SolarReport, TableMetadata, DEFAULT_REFRACTION,
};
