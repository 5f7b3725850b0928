//! SI metric prefixes

use std::sync::Arc;
use astro_core::Number;
use crate::Unit;

/// An SI prefix, applied to a unit to scale it by a power of ten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricPrefix {
    Quetta,
    Ronna,
    Yotta,
    Zetta,
    Exa,
    Peta,
    Tera,
    Giga,
    Mega,
    Kilo,
    Hecto,
    Deka,
    Deci,
    Centi,
    Milli,
    Micro,
    Nano,
    Pico,
    Femto,
    Atto,
    Zepto,
    Yocto,
    Ronto,
    Quecto,
}

impl MetricPrefix {
    pub const ALL: [MetricPrefix; 24] = [
        MetricPrefix::Quetta,
        MetricPrefix::Ronna,
        MetricPrefix::Yotta,
        MetricPrefix::Zetta,
        MetricPrefix::Exa,
        MetricPrefix::Peta,
        MetricPrefix::Tera,
        MetricPrefix::Giga,
        MetricPrefix::Mega,
        MetricPrefix::Kilo,
        MetricPrefix::Hecto,
        MetricPrefix::Deka,
        MetricPrefix::Deci,
        MetricPrefix::Centi,
        MetricPrefix::Milli,
        MetricPrefix::Micro,
        MetricPrefix::Nano,
        MetricPrefix::Pico,
        MetricPrefix::Femto,
        MetricPrefix::Atto,
        MetricPrefix::Zepto,
        MetricPrefix::Yocto,
        MetricPrefix::Ronto,
        MetricPrefix::Quecto,
    ];

    /// Symbol prepended to the unit symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            MetricPrefix::Quetta => "Q",
            MetricPrefix::Ronna => "R",
            MetricPrefix::Yotta => "Y",
            MetricPrefix::Zetta => "Z",
            MetricPrefix::Exa => "E",
            MetricPrefix::Peta => "P",
            MetricPrefix::Tera => "T",
            MetricPrefix::Giga => "G",
            MetricPrefix::Mega => "M",
            MetricPrefix::Kilo => "k",
            MetricPrefix::Hecto => "h",
            MetricPrefix::Deka => "da",
            MetricPrefix::Deci => "d",
            MetricPrefix::Centi => "c",
            MetricPrefix::Milli => "m",
            MetricPrefix::Micro => "µ",
            MetricPrefix::Nano => "n",
            MetricPrefix::Pico => "p",
            MetricPrefix::Femto => "f",
            MetricPrefix::Atto => "a",
            MetricPrefix::Zepto => "z",
            MetricPrefix::Yocto => "y",
            MetricPrefix::Ronto => "r",
            MetricPrefix::Quecto => "q",
        }
    }

    /// Prefix prepended to the unit name
    pub fn name(&self) -> &'static str {
        match self {
            MetricPrefix::Quetta => "quetta",
            MetricPrefix::Ronna => "ronna",
            MetricPrefix::Yotta => "yotta",
            MetricPrefix::Zetta => "zetta",
            MetricPrefix::Exa => "exa",
            MetricPrefix::Peta => "peta",
            MetricPrefix::Tera => "tera",
            MetricPrefix::Giga => "giga",
            MetricPrefix::Mega => "mega",
            MetricPrefix::Kilo => "kilo",
            MetricPrefix::Hecto => "hecto",
            MetricPrefix::Deka => "deka",
            MetricPrefix::Deci => "deci",
            MetricPrefix::Centi => "centi",
            MetricPrefix::Milli => "milli",
            MetricPrefix::Micro => "micro",
            MetricPrefix::Nano => "nano",
            MetricPrefix::Pico => "pico",
            MetricPrefix::Femto => "femto",
            MetricPrefix::Atto => "atto",
            MetricPrefix::Zepto => "zepto",
            MetricPrefix::Yocto => "yocto",
            MetricPrefix::Ronto => "ronto",
            MetricPrefix::Quecto => "quecto",
        }
    }

    /// Power of ten this prefix stands for
    pub fn exponent(&self) -> i32 {
        match self {
            MetricPrefix::Quetta => 30,
            MetricPrefix::Ronna => 27,
            MetricPrefix::Yotta => 24,
            MetricPrefix::Zetta => 21,
            MetricPrefix::Exa => 18,
            MetricPrefix::Peta => 15,
            MetricPrefix::Tera => 12,
            MetricPrefix::Giga => 9,
            MetricPrefix::Mega => 6,
            MetricPrefix::Kilo => 3,
            MetricPrefix::Hecto => 2,
            MetricPrefix::Deka => 1,
            MetricPrefix::Deci => -1,
            MetricPrefix::Centi => -2,
            MetricPrefix::Milli => -3,
            MetricPrefix::Micro => -6,
            MetricPrefix::Nano => -9,
            MetricPrefix::Pico => -12,
            MetricPrefix::Femto => -15,
            MetricPrefix::Atto => -18,
            MetricPrefix::Zepto => -21,
            MetricPrefix::Yocto => -24,
            MetricPrefix::Ronto => -27,
            MetricPrefix::Quecto => -30,
        }
    }

    /// Exact scale factor, 10^exponent
    pub fn factor(&self) -> Number {
        Number::pow10(self.exponent())
    }

    /// Scaled copy of `unit`: kilo applied to metre gives km
    pub fn apply(&self, unit: &Arc<Unit>) -> Unit {
        Unit::scaled(
            &format!("{}{}", self.symbol(), unit.symbol()),
            &format!("{}{}", self.name(), unit.name()),
            unit,
            self.factor(),
        )
    }
}
