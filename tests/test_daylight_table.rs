#[macro_use]
mod common;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use common::deg;
use solar_time::{
    daylight_table_to_compact, generate_daylight_table, longest_day, lookup_date, lookup_day,
    minutes_to_time, shortest_day, time_to_minutes, Angle, DayStatus, DaylightTableConfig,
    SolarError, DEFAULT_REFRACTION,
};

fn springfield() -> DaylightTableConfig {
    DaylightTableConfig::default()
}

fn arctic() -> DaylightTableConfig {
    DaylightTableConfig {
        latitude: deg(dec!(80)),
        longitude: Angle::ZERO,
        utc_offset_hours: dec!(0),
        ..DaylightTableConfig::default()
    }
}

fn normal_times(status: DayStatus) -> (i32, i32) {
    match status {
        DayStatus::Normal {
            sunrise_minutes,
            sunset_minutes,
        } => (sunrise_minutes, sunset_minutes),
        other => panic!("expected sunrise and sunset, got {:?}", other),
    }
}

#[test]
fn test_default_config() {
    let config = DaylightTableConfig::default();
    assert_eq!(config.latitude, deg(dec!(39.8)));
    assert_eq!(config.longitude, deg(dec!(-89.6)));
    assert_eq!(config.utc_offset_hours, dec!(-6));
    assert_eq!(config.year, 2026);
    assert_eq!(config.refraction, DEFAULT_REFRACTION);
}

#[test]
fn test_time_conversions() {
    assert_eq!(minutes_to_time(0), (0, 0));
    assert_eq!(minutes_to_time(726), (12, 6));
    assert_eq!(minutes_to_time(1439), (23, 59));
    assert_eq!(minutes_to_time(-30), (-1, 30));
    assert_eq!(time_to_minutes((6, 0)), 360);
    for minutes in [0, 1, 59, 60, 361, 1091, 1439] {
        assert_eq!(time_to_minutes(minutes_to_time(minutes)), minutes);
    }
}

#[test]
fn test_table_covers_calendar_year() {
    let table = generate_daylight_table(&springfield()).unwrap();
    assert_eq!(table.days.len(), 365);
    assert_eq!(table.metadata.total_days, 365);
    assert_eq!(table.metadata.polar_days, 0);
    assert!(!table.metadata.generated_at.is_empty());
    assert_eq!(table.days[0].date, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    assert_eq!(table.days[364].date, NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());
    for (i, day) in table.days.iter().enumerate() {
        assert_eq!(day.day_of_year as usize, i + 1);
    }

    let leap = generate_daylight_table(&DaylightTableConfig {
        year: 2024,
        ..springfield()
    })
    .unwrap();
    assert_eq!(leap.days.len(), 366);
}

#[test]
fn test_springfield_equinox_row() {
    let table = generate_daylight_table(&springfield()).unwrap();
    let day = lookup_date(&table, NaiveDate::from_ymd_opt(2026, 3, 21).unwrap()).unwrap();
    let (sunrise, sunset) = normal_times(day.status);
    assert_approx!(sunrise, 360.0, 2.0);
    assert_approx!(sunset, 1091.0, 2.0);
    assert_approx!(day.solar_noon_minutes, 726.0, 1.0);
    assert_approx!(day.status.daylight_minutes(), 720.0, 15.0);
}

#[test]
fn test_springfield_summer_row() {
    let table = generate_daylight_table(&springfield()).unwrap();
    let day = lookup_date(&table, NaiveDate::from_ymd_opt(2026, 6, 21).unwrap()).unwrap();
    let (sunrise, sunset) = normal_times(day.status);
    assert_eq!(minutes_to_time(sunrise), (4, 30));
    assert_approx!(sunset, time_to_minutes((19, 30)), 2.0);
}

#[test]
fn test_seasonal_daylight() {
    let table = generate_daylight_table(&springfield()).unwrap();
    let summer = lookup_day(&table, 172).unwrap().status.daylight_minutes();
    let winter = lookup_day(&table, 355).unwrap().status.daylight_minutes();
    assert!(summer > 850, "summer {}", summer);
    assert!(winter < 600, "winter {}", winter);

    let longest = longest_day(&table).unwrap();
    let shortest = shortest_day(&table).unwrap();
    assert!((165..=179).contains(&longest.day_of_year), "{}", longest.day_of_year);
    assert!((348..=362).contains(&shortest.day_of_year), "{}", shortest.day_of_year);
}

#[test]
fn test_solar_noon_tracks_equation_of_time() {
    let table = generate_daylight_table(&springfield()).unwrap();
    for day in &table.days {
        assert!(
            (700..=760).contains(&day.solar_noon_minutes),
            "day {} noon {}",
            day.day_of_year,
            day.solar_noon_minutes
        );
        let (sunrise, sunset) = normal_times(day.status);
        assert!(sunrise < day.solar_noon_minutes && day.solar_noon_minutes < sunset);
    }
}

#[test]
fn test_arctic_polar_rows() {
    let table = generate_daylight_table(&arctic()).unwrap();
    assert_eq!(lookup_day(&table, 172).unwrap().status, DayStatus::PolarDay);
    assert_eq!(lookup_day(&table, 355).unwrap().status, DayStatus::PolarNight);
    assert!(table.metadata.polar_days > 100, "{}", table.metadata.polar_days);

    assert_eq!(longest_day(&table).unwrap().status.daylight_minutes(), 1440);
    assert_eq!(shortest_day(&table).unwrap().status.daylight_minutes(), 0);

    let compact = daylight_table_to_compact(&table);
    assert_eq!(compact.len(), table.days.len());
    assert_eq!(compact[171], None);
    assert_eq!(compact[354], None);
    // equinox still has a sunrise and sunset
    let (sunrise, sunset) = compact[79].unwrap();
    assert!(sunrise < 720 && sunset > 720);
}

#[test]
fn test_lookup_bounds() {
    let table = generate_daylight_table(&springfield()).unwrap();
    assert!(lookup_day(&table, 0).is_none());
    assert!(lookup_day(&table, 366).is_none());
    assert_eq!(lookup_day(&table, 365).unwrap().day_of_year, 365);
    assert!(lookup_date(&table, NaiveDate::from_ymd_opt(2025, 3, 21).unwrap()).is_none());
}

#[test]
fn test_invalid_config_rejected() {
    let result = generate_daylight_table(&DaylightTableConfig {
        latitude: deg(dec!(95)),
        ..springfield()
    });
    assert_eq!(
        result.unwrap_err(),
        SolarError::LatitudeOutOfRange { value: dec!(95) }
    );
}
