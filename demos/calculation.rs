use chrono::{Offset, TimeZone};
use chrono_tz::America::Chicago;
use log::LevelFilter;
use rust_decimal_macros::dec;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use solar_time::{
    generate_daylight_table, longest_day, minutes_to_time, shortest_day, Angle, DayStatus,
    DaylightTableConfig, SolarError, SolarTimeCalculator,
};

fn hhmm(minutes: i32) -> String {
    let (h, m) = minutes_to_time(minutes);
    format!("{:02}:{:02}", h, m)
}

fn main() -> Result<(), SolarError> {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap_or_else(|e| eprintln!("logger unavailable: {}", e));

    let latitude = Angle::from_degrees(dec!(39.8));
    let longitude = Angle::from_degrees(dec!(-89.6));

    let zoned = Chicago.with_ymd_and_hms(2026, 3, 21, 12, 0, 0).unwrap();
    let dt = zoned.with_timezone(&zoned.offset().fix());

    let calc = SolarTimeCalculator::from_datetime(dt, latitude, longitude)?;
    let report = calc.evaluate()?;
    let g = &report.geometry;

    println!("=== Solar Time Calculation Example ===");
    println!("Location: Springfield, IL ({:.1}, {:.1})", latitude, longitude);
    println!("Date/Time: {}", dt);
    println!();
    println!("--- Sun Geometry ---");
    println!("Julian day: {}", g.julian_day.round_dp(6));
    println!("Julian century: {}", g.julian_century.round_dp(10));
    println!("Mean longitude: {:.4}", g.sun_geometric_mean_longitude);
    println!("Apparent longitude: {:.4}", g.sun_apparent_longitude);
    println!("Right ascension: {:.4}", g.sun_right_ascension);
    println!("Declination: {:.4}", g.solar_declination);
    println!("Radius vector: {} AU", g.sun_radius_vector.round_dp(6));
    println!("Equation of time: {} minutes", g.equation_of_time.round_dp(3));
    println!();
    println!("--- Sun in the Sky ---");
    println!("True solar time: {} minutes", report.true_solar_time.round_dp(2));
    println!("Hour angle: {:.2}", report.hour_angle);
    println!("Zenith: {:.2}", report.solar_zenith_angle);
    println!("Elevation: {:.2}", report.solar_elevation);
    println!("Azimuth: {:.2} (0°=N, 90°=E, 180°=S)", report.solar_azimuth);
    println!();
    println!("--- Day ---");
    println!("Solar noon: {}", report.solar_noon.format("%H:%M:%S"));
    match &report.daylight {
        Ok(day) => {
            println!("Sunrise: {}", day.sunrise.format("%H:%M:%S"));
            println!("Sunset: {}", day.sunset.format("%H:%M:%S"));
            println!("Daylight: {} minutes", day.duration_minutes.round_dp(1));
        }
        Err(e) => println!("No sunrise or sunset: {}", e),
    }

    let table = generate_daylight_table(&DaylightTableConfig::default())?;
    println!();
    println!("--- {} Daylight Table ---", table.config.year);
    for (label, day) in [("Longest", longest_day(&table)), ("Shortest", shortest_day(&table))] {
        if let Some(day) = day {
            if let DayStatus::Normal {
                sunrise_minutes,
                sunset_minutes,
            } = day.status
            {
                println!(
                    "{} day: {} ({} to {}, {} minutes)",
                    label,
                    day.date,
                    hhmm(sunrise_minutes),
                    hhmm(sunset_minutes),
                    day.status.daylight_minutes()
                );
            }
        }
    }
    Ok(())
}
