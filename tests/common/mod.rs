#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::prelude::*;
use solar_time::Angle;

pub trait Approx {
    fn approx(self) -> f64;
}

impl Approx for Decimal {
    fn approx(self) -> f64 {
        self.to_f64().unwrap()
    }
}

impl Approx for Angle {
    fn approx(self) -> f64 {
        self.to_f64_degrees()
    }
}

impl Approx for f64 {
    fn approx(self) -> f64 {
        self
    }
}

impl Approx for i32 {
    fn approx(self) -> f64 {
        self as f64
    }
}

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = (
            common::Approx::approx($left),
            common::Approx::approx($right),
        );
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

pub fn deg(degrees: Decimal) -> Angle {
    Angle::from_degrees(degrees)
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub fn hms(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap()
}

/// Absolute difference in seconds.
pub fn seconds_apart(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    (a - b).num_seconds().abs()
}
