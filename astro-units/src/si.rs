//! Primitive SI units
//!
//! The seven base units, plus the gram, which the astronomical
//! catalog needs for its density unit.

use std::sync::{Arc, LazyLock};
use astro_core::Number;
use crate::{Dimension, Unit};

pub static METRE: LazyLock<Arc<Unit>> =
    LazyLock::new(|| Arc::new(Unit::base("m", "metre", Dimension::LENGTH)));

pub static KILOGRAM: LazyLock<Arc<Unit>> =
    LazyLock::new(|| Arc::new(Unit::base("kg", "kilogram", Dimension::MASS)));

pub static SECOND: LazyLock<Arc<Unit>> =
    LazyLock::new(|| Arc::new(Unit::base("s", "second", Dimension::TIME)));

pub static AMPERE: LazyLock<Arc<Unit>> =
    LazyLock::new(|| Arc::new(Unit::base("A", "ampere", Dimension::CURRENT)));

pub static KELVIN: LazyLock<Arc<Unit>> =
    LazyLock::new(|| Arc::new(Unit::base("K", "kelvin", Dimension::TEMPERATURE)));

pub static MOLE: LazyLock<Arc<Unit>> =
    LazyLock::new(|| Arc::new(Unit::base("mol", "mole", Dimension::AMOUNT)));

pub static CANDELA: LazyLock<Arc<Unit>> =
    LazyLock::new(|| Arc::new(Unit::base("cd", "candela", Dimension::LUMINOSITY)));

/// One thousandth of a kilogram
pub static GRAM: LazyLock<Arc<Unit>> =
    LazyLock::new(|| Arc::new(Unit::scaled("g", "gram", &KILOGRAM, Number::from_ratio(1, 1000))));

/// All base units, in dimension-vector order
pub fn base_units() -> [&'static Arc<Unit>; 7] {
    [&*METRE, &*KILOGRAM, &*SECOND, &*AMPERE, &*KELVIN, &*MOLE, &*CANDELA]
}
