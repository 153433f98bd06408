use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, Utc};
use log::debug;

use crate::calculator;
use crate::error::SolarError;
use crate::types::{
    DayData, DayStatus, DaylightTable, DaylightTableConfig, PolarCondition, SolarInput,
    TableMetadata,
};

pub fn minutes_to_time(total_minutes: i32) -> (i32, i32) {
    (total_minutes.div_euclid(60), total_minutes.rem_euclid(60))
}

pub fn time_to_minutes(time: (i32, i32)) -> i32 {
    time.0 * 60 + time.1
}

/// Whole minutes from local midnight of `date` to `instant`, rounded to nearest.
fn minutes_after_midnight(date: NaiveDate, instant: &DateTime<FixedOffset>) -> i32 {
    let seconds = (instant.naive_local() - date.and_time(NaiveTime::MIN)).num_seconds();
    (seconds + 30).div_euclid(60) as i32
}

fn day_data(config: &DaylightTableConfig, date: NaiveDate) -> Result<DayData, SolarError> {
    // each row is evaluated at local noon
    let noon = NaiveTime::from_hms_opt(12, 0, 0).ok_or(SolarError::DateOutOfRange)?;
    let input = SolarInput::new(
        date.and_time(noon),
        config.utc_offset_hours,
        config.latitude,
        config.longitude,
    )?
    .with_refraction(config.refraction)?;
    let report = calculator::evaluate(&input)?;

    let status = match report.daylight {
        Ok(daylight) => DayStatus::Normal {
            sunrise_minutes: minutes_after_midnight(date, &daylight.sunrise),
            sunset_minutes: minutes_after_midnight(date, &daylight.sunset),
        },
        Err(e) => match e.polar_condition() {
            Some(PolarCondition::PolarDay) => DayStatus::PolarDay,
            Some(PolarCondition::PolarNight) => DayStatus::PolarNight,
            None => return Err(e),
        },
    };

    Ok(DayData {
        day_of_year: date.ordinal(),
        date,
        solar_noon_minutes: minutes_after_midnight(date, &report.solar_noon),
        status,
    })
}

/// One row per calendar day of `config.year`.
pub fn generate_daylight_table(config: &DaylightTableConfig) -> Result<DaylightTable, SolarError> {
    let first = NaiveDate::from_ymd_opt(config.year, 1, 1).ok_or(SolarError::DateOutOfRange)?;
    let days = first
        .iter_days()
        .take_while(|d| d.year() == config.year)
        .map(|date| day_data(config, date))
        .collect::<Result<Vec<_>, _>>()?;

    let polar_days = days
        .iter()
        .filter(|d| !matches!(d.status, DayStatus::Normal { .. }))
        .count();
    debug!(
        "daylight table for {}: {} days, {} without sunrise or sunset",
        config.year,
        days.len(),
        polar_days
    );

    Ok(DaylightTable {
        config: *config,
        metadata: TableMetadata {
            generated_at: Utc::now().to_rfc3339(),
            total_days: days.len(),
            polar_days,
        },
        days,
    })
}

pub fn lookup_day(table: &DaylightTable, day_of_year: u32) -> Option<&DayData> {
    let index = usize::try_from(day_of_year).ok()?.checked_sub(1)?;
    table.days.get(index)
}

pub fn lookup_date(table: &DaylightTable, date: NaiveDate) -> Option<&DayData> {
    if date.year() != table.config.year {
        return None;
    }
    lookup_day(table, date.ordinal())
}

pub fn longest_day(table: &DaylightTable) -> Option<&DayData> {
    table.days.iter().max_by_key(|d| d.status.daylight_minutes())
}

pub fn shortest_day(table: &DaylightTable) -> Option<&DayData> {
    table.days.iter().min_by_key(|d| d.status.daylight_minutes())
}

/// `(sunrise, sunset)` minutes per day, `None` for polar days and nights.
pub fn daylight_table_to_compact(table: &DaylightTable) -> Vec<Option<(i32, i32)>> {
    table
        .days
        .iter()
        .map(|day| match day.status {
            DayStatus::Normal {
                sunrise_minutes,
                sunset_minutes,
            } => Some((sunrise_minutes, sunset_minutes)),
            DayStatus::PolarDay | DayStatus::PolarNight => None,
        })
        .collect()
}
