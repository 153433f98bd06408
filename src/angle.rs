use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

use crate::math;

const DEGREES_PER_HALF_TURN: Decimal = dec!(180);
const DEGREES_PER_TURN: Decimal = dec!(360);

/// An angle held as decimal degrees.
///
/// Radian values are derived on demand and never stored. Nothing here wraps the
/// value into `[0, 360)`; call [`Angle::normalized`] where a formula asks for it.
/// A bare `Decimal` converts into an `Angle` as degrees, never radians.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Angle {
    degrees: Decimal,
}

impl Angle {
    pub const ZERO: Angle = Angle { degrees: Decimal::ZERO };
    pub const RIGHT: Angle = Angle { degrees: dec!(90) };

    pub const fn from_degrees(degrees: Decimal) -> Self {
        Angle { degrees }
    }

    pub fn from_radians(radians: Decimal) -> Self {
        Angle {
            degrees: radians * DEGREES_PER_HALF_TURN / Decimal::PI,
        }
    }

    /// `None` for NaN or infinite input.
    pub fn from_f64_degrees(degrees: f64) -> Option<Self> {
        Decimal::from_f64(degrees).map(Angle::from_degrees)
    }

    pub fn degrees(self) -> Decimal {
        self.degrees
    }

    pub fn to_radians(self) -> Decimal {
        self.degrees * Decimal::PI / DEGREES_PER_HALF_TURN
    }

    pub fn to_f64_degrees(self) -> f64 {
        self.degrees.to_f64().unwrap_or(f64::NAN)
    }

    pub fn sin(self) -> Decimal {
        self.to_radians().sin()
    }

    pub fn cos(self) -> Decimal {
        self.to_radians().cos()
    }

    /// Panics where the cosine rounds to zero; see [`Angle::checked_tan`].
    pub fn tan(self) -> Decimal {
        self.sin() / self.cos()
    }

    /// `sin / cos`, `None` where the cosine rounds to zero (odd multiples of 90°).
    ///
    /// `rust_decimal`'s own tangent keeps only about nine digits.
    pub fn checked_tan(self) -> Option<Decimal> {
        let cos = self.cos();
        if cos.is_zero() {
            return None;
        }
        self.sin().checked_div(cos)
    }

    /// `Angle::from_radians(asin(x))`, `None` outside `[-1, 1]`.
    pub fn asin(x: Decimal) -> Option<Self> {
        math::asin(x).map(Angle::from_radians)
    }

    pub fn acos(x: Decimal) -> Option<Self> {
        math::acos(x).map(Angle::from_radians)
    }

    pub fn asin_clamped(x: Decimal) -> Self {
        Angle::from_radians(math::asin_clamped(x))
    }

    pub fn acos_clamped(x: Decimal) -> Self {
        Angle::from_radians(math::acos_clamped(x))
    }

    pub fn atan2(y: Decimal, x: Decimal) -> Self {
        Angle::from_radians(math::atan2(y, x))
    }

    /// Wrapped into `[0, 360)`.
    pub fn normalized(self) -> Self {
        Angle {
            degrees: math::decimal_mod(self.degrees, DEGREES_PER_TURN),
        }
    }

    pub fn abs(self) -> Self {
        Angle {
            degrees: self.degrees.abs(),
        }
    }

    pub fn is_within(self, min: Decimal, max: Decimal) -> bool {
        self.degrees >= min && self.degrees <= max
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::from_degrees(self.degrees + rhs.degrees)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_degrees(self.degrees - rhs.degrees)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::from_degrees(-self.degrees)
    }
}

/// Scales the degree value, so `m * dec!(2)` is the angle whose radians are `2·M`.
impl Mul<Decimal> for Angle {
    type Output = Angle;

    fn mul(self, rhs: Decimal) -> Angle {
        Angle::from_degrees(self.degrees * rhs)
    }
}

impl Div<Decimal> for Angle {
    type Output = Angle;

    fn div(self, rhs: Decimal) -> Angle {
        Angle::from_degrees(self.degrees / rhs)
    }
}

/// Decimal degrees.
impl From<Decimal> for Angle {
    fn from(degrees: Decimal) -> Self {
        Angle::from_degrees(degrees)
    }
}

impl From<Angle> for Decimal {
    fn from(angle: Angle) -> Self {
        angle.degrees
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(precision) = f.precision() {
            write!(f, "{:.*}°", precision, self.degrees)
        } else {
            write!(f, "{}°", self.degrees)
        }
    }
}
