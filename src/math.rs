//! Decimal arithmetic the formula pipeline needs beyond what `rust_decimal` ships:
//! an exact modulo and the inverse trigonometric functions.

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

/// Below this magnitude the arctangent series converges to full precision in
/// a couple of dozen terms.
const ATAN_SERIES_LIMIT: Decimal = dec!(0.125);
const ATAN_MAX_TERMS: u32 = 64;

/// `value - modulus * floor(value / modulus)`.
///
/// For a positive modulus the result lies in `[0, modulus)`, unlike the
/// truncating `%` operator. Panics if `modulus` is zero.
pub fn decimal_mod(value: Decimal, modulus: Decimal) -> Decimal {
    let r = value - modulus * (value / modulus).floor();
    if modulus.is_sign_negative() {
        return r;
    }
    // 28-digit rounding of the quotient can land one step off
    if r.is_sign_negative() && !r.is_zero() {
        r + modulus
    } else if r >= modulus {
        r - modulus
    } else {
        r
    }
}

/// Square root of a value the caller knows is non-negative.
pub(crate) fn sqrt(x: Decimal) -> Decimal {
    x.sqrt().unwrap_or(Decimal::ZERO)
}

/// Arctangent in radians.
pub fn atan(x: Decimal) -> Decimal {
    if x.is_sign_negative() {
        return -atan(-x);
    }
    if x > Decimal::ONE {
        return Decimal::HALF_PI - atan(Decimal::ONE / x);
    }

    // atan(z) = 2·atan(z / (1 + sqrt(1 + z²)))
    let mut z = x;
    let mut halvings = 0u32;
    while z > ATAN_SERIES_LIMIT {
        z = z / (Decimal::ONE + sqrt(Decimal::ONE + z * z));
        halvings += 1;
    }

    let z2 = z * z;
    let mut power = z;
    let mut sum = z;
    for n in 1..=ATAN_MAX_TERMS {
        power = -power * z2;
        let term = power / Decimal::from(2 * n + 1);
        if term.is_zero() {
            break;
        }
        sum += term;
    }
    sum * Decimal::from(1u64 << halvings)
}

/// Four-quadrant arctangent of `y / x` in radians, in `(-π, π]`.
pub fn atan2(y: Decimal, x: Decimal) -> Decimal {
    if x.is_zero() && y.is_zero() {
        return Decimal::ZERO;
    }
    let (ay, ax) = (y.abs(), x.abs());
    let mut angle = if ay <= ax {
        atan(ay / ax)
    } else {
        Decimal::HALF_PI - atan(ax / ay)
    };
    if x.is_sign_negative() && !x.is_zero() {
        angle = Decimal::PI - angle;
    }
    if y.is_sign_negative() && !y.is_zero() {
        angle = -angle;
    }
    angle
}

/// Arcsine in radians; `None` outside `[-1, 1]`.
pub fn asin(x: Decimal) -> Option<Decimal> {
    if x.abs() > Decimal::ONE {
        return None;
    }
    Some(asin_in_domain(x))
}

/// Arccosine in radians; `None` outside `[-1, 1]`.
pub fn acos(x: Decimal) -> Option<Decimal> {
    asin(x).map(|a| Decimal::HALF_PI - a)
}

/// Arcsine of a value that is a sine by construction, where rounding may
/// have pushed it a unit past `±1`.
pub fn asin_clamped(x: Decimal) -> Decimal {
    asin_in_domain(x.clamp(-Decimal::ONE, Decimal::ONE))
}

pub fn acos_clamped(x: Decimal) -> Decimal {
    Decimal::HALF_PI - asin_clamped(x)
}

fn asin_in_domain(x: Decimal) -> Decimal {
    let cos = sqrt((Decimal::ONE - x) * (Decimal::ONE + x));
    atan2(x, cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Decimal, b: Decimal, tol: Decimal) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn mod_is_floored_not_truncated() {
        assert_eq!(decimal_mod(dec!(370), dec!(360)), dec!(10));
        assert_eq!(decimal_mod(dec!(-10), dec!(360)), dec!(350));
        assert_eq!(decimal_mod(dec!(360), dec!(360)), dec!(0));
        assert_eq!(decimal_mod(dec!(-1440.5), dec!(1440)), dec!(1439.5));
        assert_eq!(decimal_mod(dec!(8808.123456789), dec!(360)), dec!(168.123456789));
    }

    #[test]
    fn mod_keeps_decimal_digits() {
        let v = dec!(36000.769830000000000000001);
        let r = decimal_mod(v, dec!(360));
        assert_eq!(r, dec!(0.769830000000000000001));
    }

    #[test]
    fn atan_known_values() {
        let tol = dec!(0.000000000000000000001);
        assert!(close(atan(Decimal::ONE), Decimal::QUARTER_PI, tol));
        assert!(close(atan(-Decimal::ONE), -Decimal::QUARTER_PI, tol));
        assert_eq!(atan(Decimal::ZERO), Decimal::ZERO);
        // atan(√3) = π/3
        let sqrt3 = sqrt(dec!(3));
        assert!(close(atan(sqrt3), Decimal::PI / dec!(3), tol));
    }

    #[test]
    fn atan2_quadrants() {
        let tol = dec!(0.000000000000000000001);
        let q = Decimal::QUARTER_PI;
        assert!(close(atan2(dec!(1), dec!(1)), q, tol));
        assert!(close(atan2(dec!(1), dec!(-1)), q * dec!(3), tol));
        assert!(close(atan2(dec!(-1), dec!(-1)), -q * dec!(3), tol));
        assert!(close(atan2(dec!(-1), dec!(1)), -q, tol));
        assert_eq!(atan2(dec!(2), Decimal::ZERO), Decimal::HALF_PI);
        assert_eq!(atan2(dec!(-2), Decimal::ZERO), -Decimal::HALF_PI);
        assert!(close(atan2(Decimal::ZERO, dec!(-3)), Decimal::PI, tol));
    }

    #[test]
    fn asin_acos_known_values() {
        let tol = dec!(0.000000000000000000001);
        assert!(close(asin(dec!(0.5)).unwrap(), Decimal::PI / dec!(6), tol));
        assert_eq!(asin(Decimal::ONE).unwrap(), Decimal::HALF_PI);
        assert!(close(acos(-Decimal::ONE).unwrap(), Decimal::PI, tol));
        assert!(close(acos(Decimal::ONE).unwrap(), Decimal::ZERO, tol));
        assert!(close(acos(dec!(0.5)).unwrap(), Decimal::PI / dec!(3), tol));
    }

    #[test]
    fn inverse_trig_rejects_out_of_domain() {
        assert!(asin(dec!(1.0000000001)).is_none());
        assert!(acos(dec!(-1.5)).is_none());
    }

    #[test]
    fn clamped_variants_saturate() {
        assert_eq!(asin_clamped(dec!(1.0000000001)), Decimal::HALF_PI);
        assert_eq!(acos_clamped(dec!(1.0000000001)), Decimal::ZERO);
    }
}
