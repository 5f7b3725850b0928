//! Exact rational numbers using dashu
//!
//! Uses dashu-ratio (RBig) so that chains of conversion factors
//! (prefixes, powers, quotients) compose without any rounding.
//! 1 g/cm³ is exactly 1000 kg/m³, not 999.9999999.

use dashu_base::Approximation;
use dashu_int::{IBig, UBig};
use dashu_ratio::RBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// Decimal places used by `Display` for non-integer values
pub const DEFAULT_DECIMAL_PLACES: u32 = 12;

/// Arbitrary precision rational number
///
/// Always stored in lowest terms, so equality is exact value equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Number {
    inner: RBig,
}

impl Number {
    // ========== Construction ==========

    /// Create from string representation
    /// Supports: "123", "3.14", "1/3", "1.9891e30", "-42"
    pub fn from_str(s: &str) -> Result<Self, NumberError> {
        let s = s.trim();

        // Handle rational format "a/b"
        if let Some((num_str, den_str)) = s.split_once('/') {
            let num = Self::parse_decimal(num_str.trim())
                .ok_or_else(|| NumberError::ParseError(s.to_string()))?;
            let den = Self::parse_decimal(den_str.trim())
                .ok_or_else(|| NumberError::ParseError(s.to_string()))?;
            return num.checked_div(&den);
        }

        Self::parse_decimal(s).ok_or_else(|| NumberError::ParseError(s.to_string()))
    }

    /// Parse "[-]digits[.digits][e[-]digits]" exactly
    fn parse_decimal(s: &str) -> Option<Self> {
        let (mantissa, exp) = match s.find(['e', 'E']) {
            Some(pos) => (&s[..pos], s[pos + 1..].parse::<i32>().ok()?),
            None => (s, 0),
        };

        let (negative, mantissa) = match mantissa.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
        };

        let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }
        if !int_part.chars().chain(frac_part.chars()).all(|c| c.is_ascii_digit()) {
            return None;
        }

        let digits = format!("{}{}", int_part, frac_part);
        let mut significand: IBig = digits.parse().ok()?;
        if negative {
            significand = -significand;
        }

        let scale = exp.checked_sub(i32::try_from(frac_part.len()).ok()?)?;
        let value = Self { inner: RBig::from(significand) };
        Some(value.mul(&Self::pow10(scale)))
    }

    /// Create from i64
    pub fn from_i64(n: i64) -> Self {
        Self { inner: RBig::from(IBig::from(n)) }
    }

    /// Create from ratio (exact division); a zero denominator yields zero
    pub fn from_ratio(num: i64, den: i64) -> Self {
        if den == 0 {
            return Self::zero();
        }
        let mut numerator = IBig::from(num);
        if den < 0 {
            numerator = -numerator;
        }
        Self { inner: RBig::from_parts(numerator, UBig::from(den.unsigned_abs())) }
    }

    /// Exact power of ten: 10^exp
    pub fn pow10(exp: i32) -> Self {
        let magnitude = UBig::from(10u8).pow(exp.unsigned_abs() as usize);
        if exp >= 0 {
            Self { inner: RBig::from(IBig::from(magnitude)) }
        } else {
            Self { inner: RBig::from_parts(IBig::ONE, magnitude) }
        }
    }

    pub fn zero() -> Self {
        Self { inner: RBig::ZERO }
    }

    pub fn one() -> Self {
        Self { inner: RBig::ONE }
    }

    // ========== Predicates ==========

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.inner == RBig::ZERO
    }

    /// Check if negative
    pub fn is_negative(&self) -> bool {
        self.inner < RBig::ZERO
    }

    /// Check if value is an integer
    pub fn is_integer(&self) -> bool {
        *self.inner.denominator() == UBig::ONE
    }

    // ========== Basic Arithmetic ==========

    /// Addition
    pub fn add(&self, other: &Self) -> Self {
        Self { inner: &self.inner + &other.inner }
    }

    /// Subtraction
    pub fn sub(&self, other: &Self) -> Self {
        Self { inner: &self.inner - &other.inner }
    }

    /// Multiplication
    pub fn mul(&self, other: &Self) -> Self {
        Self { inner: &self.inner * &other.inner }
    }

    /// Safe division (returns Result, never panics)
    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            Err(NumberError::DivisionByZero)
        } else {
            Ok(Self { inner: &self.inner / &other.inner })
        }
    }

    /// Integer power (exact). Negative powers of zero are a division by zero.
    pub fn pow(&self, exp: i32) -> Result<Self, NumberError> {
        let mut result = Self::one();
        for _ in 0..exp.unsigned_abs() {
            result = result.mul(self);
        }

        if exp < 0 {
            Self::one().checked_div(&result)
        } else {
            Ok(result)
        }
    }

    // ========== Conversion ==========

    /// Convert to the nearest f64
    pub fn to_f64(&self) -> f64 {
        match self.inner.to_f64() {
            Approximation::Exact(f) => f,
            Approximation::Inexact(f, _) => f,
        }
    }

    /// Convert to i64 if this is an integer in range
    pub fn to_i64(&self) -> Option<i64> {
        if !self.is_integer() {
            return None;
        }
        i64::try_from(self.inner.numerator().clone()).ok()
    }

    // ========== Display ==========

    /// Render as decimal string with the given number of places,
    /// rounding half away from zero
    pub fn as_decimal(&self, places: u32) -> String {
        let scale = IBig::from(UBig::from(10u8).pow(places as usize));
        let numerator = self.inner.numerator() * &scale;
        let denominator = IBig::from(self.inner.denominator().clone());

        let two = IBig::from(2u8);
        let doubled = &numerator * &two;
        let adjusted = if numerator < IBig::ZERO {
            doubled - &denominator
        } else {
            doubled + &denominator
        };
        let scaled = adjusted / (&denominator * &two);

        let text = scaled.to_string();
        let (sign, digits) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text.as_str()),
        };

        if places == 0 {
            return format!("{}{}", sign, digits);
        }

        let places = places as usize;
        let padded = format!("{:0>width$}", digits, width = places + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - places);
        format!("{}{}.{}", sign, int_part, frac_part)
    }
}

// ========== Trait Implementations ==========

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_integer() {
            return write!(f, "{}", self.inner.numerator());
        }
        let decimal = self.as_decimal(DEFAULT_DECIMAL_PLACES);
        write!(f, "{}", decimal.trim_end_matches('0').trim_end_matches('.'))
    }
}

impl std::str::FromStr for Number {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Number::from_str(s)
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // "a/b" keeps the value exact
        serializer.serialize_str(&self.inner.to_string())
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}
