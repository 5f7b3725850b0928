//! Astro Core - Fundamental types
//!
//! This crate provides the core types used throughout astro-units:
//! - `Number`: Exact arbitrary precision rational numbers
//! - `NumberError`: Parse and division failures

mod number;

pub use number::{Number, NumberError, DEFAULT_DECIMAL_PLACES};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Number, NumberError};
}

#[cfg(test)]
mod tests {
    use super::*;

    mod number_tests {
        use super::*;

        #[test]
        fn test_from_i64() {
            let n = Number::from_i64(42);
            assert_eq!(n.to_i64(), Some(42));
        }

        #[test]
        fn test_from_str_integer() {
            let n = Number::from_str("123").unwrap();
            assert_eq!(n.to_i64(), Some(123));
        }

        #[test]
        fn test_from_str_decimal() {
            let n = Number::from_str("3.14").unwrap();
            assert!(!n.is_integer());
            assert_eq!(n, Number::from_ratio(157, 50));
        }

        #[test]
        fn test_from_str_fraction() {
            let n = Number::from_str("1/3").unwrap();
            assert!(!n.is_integer());
            assert_eq!(n, Number::from_ratio(1, 3));
        }

        #[test]
        fn test_from_str_scientific() {
            let n = Number::from_str("1.5e2").unwrap();
            assert_eq!(n.to_i64(), Some(150));

            let small = Number::from_str("25e-3").unwrap();
            assert_eq!(small, Number::from_ratio(1, 40));
        }

        #[test]
        fn test_from_str_solar_mass_is_exact() {
            // 1.9891 × 10^30 has no binary floating point representation
            let n = Number::from_str("1.9891e30").unwrap();
            let expected = Number::from_i64(19891).mul(&Number::pow10(26));
            assert_eq!(n, expected);
            assert!(n.is_integer());
        }

        #[test]
        fn test_from_str_trailing_point() {
            let n = Number::from_str("149597871000.0").unwrap();
            assert_eq!(n.to_i64(), Some(149_597_871_000));
        }

        #[test]
        fn test_from_str_negative() {
            let n = Number::from_str("-42").unwrap();
            assert!(n.is_negative());
            assert_eq!(n.to_i64(), Some(-42));
        }

        #[test]
        fn test_from_str_invalid() {
            assert!(matches!(Number::from_str("abc"), Err(NumberError::ParseError(_))));
            assert!(matches!(Number::from_str(""), Err(NumberError::ParseError(_))));
            assert!(matches!(Number::from_str("1e"), Err(NumberError::ParseError(_))));
            assert_eq!(Number::from_str("1/0"), Err(NumberError::DivisionByZero));
        }

        #[test]
        fn test_pow10() {
            assert_eq!(Number::pow10(3).to_i64(), Some(1000));
            assert_eq!(Number::pow10(-2), Number::from_ratio(1, 100));
            assert_eq!(Number::pow10(0), Number::one());
        }

        #[test]
        fn test_add() {
            let a = Number::from_i64(10);
            let b = Number::from_i64(32);
            assert_eq!(a.add(&b).to_i64(), Some(42));
        }

        #[test]
        fn test_sub() {
            let a = Number::from_i64(50);
            let b = Number::from_i64(8);
            assert_eq!(a.sub(&b).to_i64(), Some(42));
        }

        #[test]
        fn test_mul() {
            let a = Number::from_i64(6);
            let b = Number::from_i64(7);
            assert_eq!(a.mul(&b).to_i64(), Some(42));
        }

        #[test]
        fn test_checked_div() {
            let a = Number::from_i64(84);
            let b = Number::from_i64(2);
            assert_eq!(a.checked_div(&b).unwrap().to_i64(), Some(42));
        }

        #[test]
        fn test_div_by_zero() {
            let a = Number::from_i64(42);
            let b = Number::zero();
            assert_eq!(a.checked_div(&b), Err(NumberError::DivisionByZero));
        }

        #[test]
        fn test_thirds_sum_exactly() {
            let third = Number::from_ratio(1, 3);
            let sum = third.add(&third).add(&third);
            assert_eq!(sum, Number::one());
        }

        #[test]
        fn test_pow_positive() {
            let n = Number::from_i64(2);
            assert_eq!(n.pow(10).unwrap().to_i64(), Some(1024));
        }

        #[test]
        fn test_pow_negative() {
            let n = Number::from_i64(2);
            assert_eq!(n.pow(-2).unwrap(), Number::from_ratio(1, 4));
        }

        #[test]
        fn test_pow_zero_negative() {
            assert_eq!(Number::zero().pow(-1), Err(NumberError::DivisionByZero));
            assert_eq!(Number::zero().pow(0).unwrap(), Number::one());
        }

        #[test]
        fn test_from_ratio_negative_denominator() {
            assert_eq!(Number::from_ratio(1, -2), Number::from_ratio(-1, 2));
            assert!(Number::from_ratio(5, 0).is_zero());
        }

        #[test]
        fn test_to_f64() {
            assert_eq!(Number::from_ratio(1, 4).to_f64(), 0.25);
            assert_eq!(Number::from_i64(149_597_871_000).to_f64(), 149_597_871_000.0);
        }

        #[test]
        fn test_as_decimal() {
            assert_eq!(Number::from_ratio(1, 3).as_decimal(4), "0.3333");
            assert_eq!(Number::from_ratio(2, 3).as_decimal(2), "0.67");
            assert_eq!(Number::from_ratio(-1, 8).as_decimal(2), "-0.13");
            assert_eq!(Number::from_i64(5).as_decimal(0), "5");
            assert_eq!(Number::from_ratio(1, 1000).as_decimal(3), "0.001");
        }

        #[test]
        fn test_display() {
            assert_eq!(Number::from_i64(1000).to_string(), "1000");
            assert_eq!(Number::from_ratio(1, 4).to_string(), "0.25");
            assert_eq!(Number::from_ratio(-3, 2).to_string(), "-1.5");
        }

        #[test]
        fn test_ordering() {
            assert!(Number::from_ratio(1, 3) < Number::from_ratio(1, 2));
            assert!(Number::from_i64(-1) < Number::zero());
        }

        #[test]
        fn test_serde_keeps_exact_value() {
            let third = Number::from_ratio(1, 3);
            let json = serde_json::to_string(&third).unwrap();
            let back: Number = serde_json::from_str(&json).unwrap();
            assert_eq!(back, third);
        }
    }
}
