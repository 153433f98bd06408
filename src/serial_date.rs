//! Calendar dates as spreadsheet serial numbers.
//!
//! Day 0 is 1899-12-30 (the OLE automation epoch), so 1900-03-01 onward agrees
//! with spreadsheet day numbers and 2000-01-01 12:00 is 36526.5. The fractional
//! part is the time of day. Dates before the epoch continue the same linear
//! count rather than OLE's sign-magnitude encoding.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

/// `NaiveDate::num_days_from_ce` of 1899-12-30.
pub const OLE_EPOCH_DAYS_FROM_CE: i32 = 693_594;

pub const NANOS_PER_DAY: Decimal = dec!(86400000000000);

/// Time of day as a fraction of a day, to nanosecond resolution.
pub fn day_fraction(time: NaiveTime) -> Decimal {
    let nanos =
        i64::from(time.num_seconds_from_midnight()) * 1_000_000_000 + i64::from(time.nanosecond());
    Decimal::from(nanos) / NANOS_PER_DAY
}

pub fn to_serial_date(dt: &NaiveDateTime) -> Decimal {
    let days = dt.date().num_days_from_ce() - OLE_EPOCH_DAYS_FROM_CE;
    Decimal::from(days) + day_fraction(dt.time())
}

/// Inverse of [`to_serial_date`], rounded to the nearest nanosecond.
pub fn from_serial_date(serial: Decimal) -> Option<NaiveDateTime> {
    let days = serial.floor();
    let nanos = ((serial - days) * NANOS_PER_DAY).round().to_i64()?;
    let day_number = i32::try_from(days.to_i64()?)
        .ok()?
        .checked_add(OLE_EPOCH_DAYS_FROM_CE)?;
    let midnight = NaiveDate::from_num_days_from_ce_opt(day_number)?.and_hms_opt(0, 0, 0)?;
    midnight.checked_add_signed(Duration::nanoseconds(nanos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn epoch_and_known_serials() {
        assert_eq!(to_serial_date(&at(1899, 12, 30, 0, 0, 0)), dec!(0));
        assert_eq!(to_serial_date(&at(1900, 3, 1, 0, 0, 0)), dec!(61));
        assert_eq!(to_serial_date(&at(2000, 1, 1, 12, 0, 0)), dec!(36526.5));
        assert_eq!(to_serial_date(&at(2024, 6, 20, 6, 0, 0)), dec!(45463.25));
    }

    #[test]
    fn day_fraction_of_whole_seconds() {
        let t = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
        assert_eq!(day_fraction(t), dec!(0.75));
        // 1/86400 rounds at the 28th decimal place
        let t = NaiveTime::from_hms_opt(0, 0, 1).unwrap();
        assert_eq!(day_fraction(t), Decimal::ONE / dec!(86400));
        let drift = (day_fraction(t) * dec!(86400) - Decimal::ONE).abs();
        assert!(drift < dec!(0.00000000000000000001), "{}", drift);
    }

    #[test]
    fn serial_back_to_date() {
        for dt in [
            at(1899, 12, 30, 0, 0, 0),
            at(1850, 7, 4, 9, 30, 15),
            at(2024, 2, 29, 23, 59, 59),
            at(2100, 1, 1, 0, 0, 1),
        ] {
            assert_eq!(from_serial_date(to_serial_date(&dt)), Some(dt));
        }
    }

    #[test]
    fn fraction_past_one_rolls_into_next_day() {
        let serial = to_serial_date(&at(2024, 6, 20, 0, 0, 0)) + dec!(1.25);
        assert_eq!(from_serial_date(serial), Some(at(2024, 6, 21, 6, 0, 0)));
    }
}
