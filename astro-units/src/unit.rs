//! Unit representation with conversion rules
//!
//! A unit is either a primitive SI unit, a scaled copy of another unit,
//! or a product of powers of other units. Units refer to the units they
//! are built from through `Arc`, so the derivation graph is shared and
//! read-only once built.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use astro_core::{Number, NumberError};
use crate::Dimension;

/// How a unit relates to the units it is built from
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionRule {
    /// A primitive SI unit (metre, kilogram, ...)
    Base(Dimension),
    /// value_in_base = value * factor
    Scaled { base: Arc<Unit>, factor: Number },
    /// Product of powers of other units, e.g. g·cm⁻³
    Product(Vec<ProductFactor>),
}

/// One `unit^exponent` term of a product unit
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFactor {
    pub unit: Arc<Unit>,
    pub exponent: i32,
}

impl ProductFactor {
    pub fn new(unit: Arc<Unit>, exponent: i32) -> Self {
        ProductFactor { unit, exponent }
    }
}

/// A unit of measure
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    symbol: String,
    name: String,
    rule: ConversionRule,
}

impl Unit {
    /// Create a primitive unit for a base dimension
    pub fn base(symbol: &str, name: &str, dimension: Dimension) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            rule: ConversionRule::Base(dimension),
        }
    }

    /// Create a unit worth `factor` of `base`
    pub fn scaled(symbol: &str, name: &str, base: &Arc<Unit>, factor: Number) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            rule: ConversionRule::Scaled { base: Arc::clone(base), factor },
        }
    }

    /// Create a product unit. Equal units are merged by adding their
    /// exponents and zero exponents are dropped; symbol and name are
    /// derived from what remains.
    pub fn product(factors: Vec<ProductFactor>) -> Self {
        let mut merged: Vec<ProductFactor> = Vec::with_capacity(factors.len());
        for factor in factors {
            match merged.iter_mut().find(|f| *f.unit == *factor.unit) {
                Some(existing) => existing.exponent += factor.exponent,
                None => merged.push(factor),
            }
        }
        merged.retain(|f| f.exponent != 0);

        Unit {
            symbol: product_symbol(&merged),
            name: product_name(&merged),
            rule: ConversionRule::Product(merged),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rule(&self) -> &ConversionRule {
        &self.rule
    }

    /// True for primitive SI units
    pub fn is_primitive(&self) -> bool {
        matches!(self.rule, ConversionRule::Base(_))
    }

    /// Dimension, resolved through the derivation graph
    pub fn dimension(&self) -> Dimension {
        match &self.rule {
            ConversionRule::Base(dimension) => *dimension,
            ConversionRule::Scaled { base, .. } => base.dimension(),
            ConversionRule::Product(factors) => factors
                .iter()
                .fold(Dimension::DIMENSIONLESS, |acc, f| {
                    acc.multiply(&f.unit.dimension().power(f.exponent))
                }),
        }
    }

    /// Factor to convert a value in this unit to primitive SI units
    pub fn to_si_factor(&self) -> Result<Number, ConversionError> {
        match &self.rule {
            ConversionRule::Base(_) => Ok(Number::one()),
            ConversionRule::Scaled { base, factor } => Ok(factor.mul(&base.to_si_factor()?)),
            ConversionRule::Product(factors) => {
                let mut total = Number::one();
                for f in factors {
                    total = total.mul(&f.unit.to_si_factor()?.pow(f.exponent)?);
                }
                Ok(total)
            }
        }
    }

    /// Check if two units are dimensionally compatible (can be converted)
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension() == other.dimension()
    }

    /// Convert a value from this unit to SI units
    pub fn to_si(&self, value: &Number) -> Result<Number, ConversionError> {
        Ok(value.mul(&self.to_si_factor()?))
    }

    /// Convert a value from SI units to this unit
    pub fn from_si(&self, value_si: &Number) -> Result<Number, ConversionError> {
        Ok(value_si.checked_div(&self.to_si_factor()?)?)
    }

    /// Multiplier taking values in this unit to values in `target`
    pub fn converter_to(&self, target: &Unit) -> Result<Number, ConversionError> {
        if !self.is_compatible(target) {
            return Err(ConversionError::IncompatibleDimensions {
                from: self.symbol.clone(),
                to: target.symbol.clone(),
                from_dim: self.dimension(),
                to_dim: target.dimension(),
            });
        }

        Ok(self.to_si_factor()?.checked_div(&target.to_si_factor()?)?)
    }

    /// Convert a value from this unit to another unit
    pub fn convert_to(&self, value: &Number, target: &Unit) -> Result<Number, ConversionError> {
        Ok(value.mul(&self.converter_to(target)?))
    }

    /// Multiply two units (e.g. km * km -> km²)
    pub fn multiply(self: &Arc<Self>, other: &Arc<Unit>) -> Unit {
        let mut factors = self.factors();
        factors.extend(other.factors());
        Unit::product(factors)
    }

    /// Divide two units (e.g. g / cm³ -> g/cm³)
    pub fn divide(self: &Arc<Self>, other: &Arc<Unit>) -> Unit {
        let mut factors = self.factors();
        factors.extend(other.factors().into_iter().map(|f| ProductFactor::new(f.unit, -f.exponent)));
        Unit::product(factors)
    }

    /// Raise unit to an integer power (e.g. cm -> cm³)
    pub fn pow(self: &Arc<Self>, exp: i32) -> Unit {
        let factors = self
            .factors()
            .into_iter()
            .map(|f| ProductFactor::new(f.unit, f.exponent * exp))
            .collect();
        Unit::product(factors)
    }

    /// This unit as product terms: its own factors if it is a product,
    /// otherwise itself to the first power
    fn factors(self: &Arc<Self>) -> Vec<ProductFactor> {
        match &self.rule {
            ConversionRule::Product(factors) => factors.clone(),
            _ => vec![ProductFactor::new(Arc::clone(self), 1)],
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

fn superscript(exp: i32) -> String {
    exp.to_string()
        .chars()
        .map(|c| match c {
            '-' => '⁻',
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            other => other,
        })
        .collect()
}

fn term_symbol(symbol: &str, exp: i32) -> String {
    if exp == 1 {
        symbol.to_string()
    } else {
        format!("{}{}", symbol, superscript(exp))
    }
}

fn product_symbol(factors: &[ProductFactor]) -> String {
    if factors.is_empty() {
        return "1".to_string();
    }

    let (numerator, denominator): (Vec<_>, Vec<_>) = factors.iter().partition(|f| f.exponent > 0);

    // Only negative powers: s⁻¹ rather than 1/s
    if numerator.is_empty() {
        return denominator
            .iter()
            .map(|f| term_symbol(f.unit.symbol(), f.exponent))
            .collect::<Vec<_>>()
            .join("·");
    }

    let top = numerator
        .iter()
        .map(|f| term_symbol(f.unit.symbol(), f.exponent))
        .collect::<Vec<_>>()
        .join("·");
    let bottom = denominator
        .iter()
        .map(|f| term_symbol(f.unit.symbol(), -f.exponent))
        .collect::<Vec<_>>();

    match bottom.len() {
        0 => top,
        1 => format!("{}/{}", top, bottom[0]),
        _ => format!("{}/({})", top, bottom.join("·")),
    }
}

fn term_name(name: &str, exp: i32) -> String {
    match exp {
        1 => name.to_string(),
        2 => format!("square {}", name),
        3 => format!("cubic {}", name),
        _ => format!("{} to the power {}", name, exp),
    }
}

fn product_name(factors: &[ProductFactor]) -> String {
    if factors.is_empty() {
        return "one".to_string();
    }

    let top: Vec<String> = factors
        .iter()
        .filter(|f| f.exponent > 0)
        .map(|f| term_name(f.unit.name(), f.exponent))
        .collect();
    let bottom: Vec<String> = factors
        .iter()
        .filter(|f| f.exponent < 0)
        .map(|f| term_name(f.unit.name(), -f.exponent))
        .collect();

    match (top.is_empty(), bottom.is_empty()) {
        (false, true) => top.join(" "),
        (true, false) => format!("per {}", bottom.join(" ")),
        _ => format!("{} per {}", top.join(" "), bottom.join(" ")),
    }
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Units have incompatible dimensions
    #[error("cannot convert {from} ({from_dim}) to {to} ({to_dim}): incompatible dimensions")]
    IncompatibleDimensions {
        from: String,
        to: String,
        from_dim: Dimension,
        to_dim: Dimension,
    },

    /// Numeric error during conversion
    #[error("numeric error: {0}")]
    Number(#[from] NumberError),
}
