//! Unsigned and signed rational numbers
//!
//! Components are stored exactly as read; no simplification happens unless
//! requested through `from_f64`.

use std::fmt;

/// Continued fraction expansion of `value`, bounded by `max`
fn approximate(value: f64, max: f64) -> (f64, f64) {
    const EPSILON: f64 = 1e-9;

    let (mut h0, mut h1) = (0.0, 1.0);
    let (mut k0, mut k1) = (1.0, 0.0);
    let mut x = value;

    for _ in 0..64 {
        let a = x.floor();
        let h2 = a * h1 + h0;
        let k2 = a * k1 + k0;
        if h2 > max || k2 > max {
            break;
        }

        (h0, h1) = (h1, h2);
        (k0, k1) = (k1, k2);

        let fraction = x - a;
        if fraction < EPSILON || (h1 / k1 - value).abs() < EPSILON * value.max(1.0) {
            break;
        }
        x = 1.0 / fraction;
    }

    if k1 == 0.0 { (value.round(), 1.0) } else { (h1, k1) }
}

/// Unsigned rational (TIFF RATIONAL)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

impl Rational {
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Closest fraction to `value`
    ///
    /// Infinity maps to `1/0`, NaN and negative values to `0/1`.
    pub fn from_f64(value: f64) -> Self {
        if value.is_infinite() && value > 0.0 {
            return Self::new(1, 0);
        }
        if value.is_nan() || value <= 0.0 {
            return Self::new(0, 1);
        }

        let (n, d) = approximate(value, f64::from(u32::MAX));
        Self::new(n as u32, d as u32)
    }

    /// Floating point value; `n/0` is infinite
    pub fn to_f64(&self) -> f64 {
        if self.denominator == 0 {
            return if self.numerator == 0 { f64::NAN } else { f64::INFINITY };
        }
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// Signed rational (TIFF SRATIONAL)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SignedRational {
    pub numerator: i32,
    pub denominator: i32,
}

impl SignedRational {
    pub const fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Closest fraction to `value`
    ///
    /// Infinities map to `±1/0`, NaN to `0/1`.
    pub fn from_f64(value: f64) -> Self {
        if value.is_infinite() {
            return Self::new(if value > 0.0 { 1 } else { -1 }, 0);
        }
        if value.is_nan() || value == 0.0 {
            return Self::new(0, 1);
        }

        let (n, d) = approximate(value.abs(), f64::from(i32::MAX));
        let n = n as i32;
        Self::new(if value < 0.0 { -n } else { n }, d as i32)
    }

    pub fn to_f64(&self) -> f64 {
        if self.denominator == 0 {
            return match self.numerator.signum() {
                1 => f64::INFINITY,
                -1 => f64::NEG_INFINITY,
                _ => f64::NAN,
            };
        }
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

impl fmt::Display for SignedRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Rational::new(300, 1).to_string(), "300");
        assert_eq!(Rational::new(1, 250).to_string(), "1/250");
        assert_eq!(SignedRational::new(-19, 2).to_string(), "-19/2");
        assert_eq!(SignedRational::new(-3, 1).to_string(), "-3");
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(Rational::from_f64(0.5), Rational::new(1, 2));
        assert_eq!(Rational::from_f64(300.0), Rational::new(300, 1));
        assert_eq!(Rational::from_f64(0.008), Rational::new(1, 125));
        assert_eq!(SignedRational::from_f64(-9.5), SignedRational::new(-19, 2));
        assert!((Rational::from_f64(59.38).to_f64() - 59.38).abs() < 1e-9);
    }

    #[test]
    fn test_infinity() {
        assert_eq!(Rational::from_f64(f64::INFINITY), Rational::new(1, 0));
        assert_eq!(Rational::new(1, 0).to_f64(), f64::INFINITY);
        assert_eq!(SignedRational::from_f64(f64::NEG_INFINITY), SignedRational::new(-1, 0));
        assert_eq!(SignedRational::new(-1, 0).to_f64(), f64::NEG_INFINITY);
        assert!(Rational::new(0, 0).to_f64().is_nan());
    }
}
