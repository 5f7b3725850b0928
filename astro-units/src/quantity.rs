//! Quantity type - a value with an associated unit

use std::fmt;
use std::sync::Arc;
use astro_core::Number;
use crate::{ConversionError, Dimension, Unit};

/// A physical quantity: an exact value in a shared unit
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub value: Number,
    pub unit: Arc<Unit>,
}

impl Quantity {
    pub fn new(value: Number, unit: Arc<Unit>) -> Self {
        Quantity { value, unit }
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// Check if two quantities have compatible dimensions
    pub fn is_compatible(&self, other: &Quantity) -> bool {
        self.unit.is_compatible(&other.unit)
    }

    /// The value in primitive SI units
    pub fn si_value(&self) -> Result<Number, ConversionError> {
        self.unit.to_si(&self.value)
    }

    /// Convert to another unit
    pub fn convert_to(&self, target: &Arc<Unit>) -> Result<Quantity, ConversionError> {
        let value = self.unit.convert_to(&self.value, target)?;
        Ok(Quantity::new(value, Arc::clone(target)))
    }

    /// Add a compatible quantity, keeping this quantity's unit
    pub fn add(&self, other: &Quantity) -> Result<Quantity, ConversionError> {
        let converted = other.convert_to(&self.unit)?;
        Ok(Quantity::new(self.value.add(&converted.value), Arc::clone(&self.unit)))
    }

    /// Subtract a compatible quantity, keeping this quantity's unit
    pub fn sub(&self, other: &Quantity) -> Result<Quantity, ConversionError> {
        let converted = other.convert_to(&self.unit)?;
        Ok(Quantity::new(self.value.sub(&converted.value), Arc::clone(&self.unit)))
    }

    /// Multiply two quantities (units are multiplied)
    pub fn mul(&self, other: &Quantity) -> Quantity {
        Quantity::new(
            self.value.mul(&other.value),
            Arc::new(self.unit.multiply(&other.unit)),
        )
    }

    /// Divide two quantities (units are divided)
    pub fn div(&self, other: &Quantity) -> Result<Quantity, ConversionError> {
        let value = self.value.checked_div(&other.value)?;
        Ok(Quantity::new(value, Arc::new(self.unit.divide(&other.unit))))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astronomical::{ASTRONOMICAL_UNIT, CUBIC_KILOMETRE, GRAM_PER_CUBIC_CENTIMETRE, SOLAR_MASS, SQUARE_KILOMETRE};
    use crate::si::{KILOGRAM, METRE};

    fn q(value: i64, unit: &Arc<Unit>) -> Quantity {
        Quantity::new(Number::from_i64(value), Arc::clone(unit))
    }

    #[test]
    fn test_display() {
        assert_eq!(q(3, &SQUARE_KILOMETRE).to_string(), "3 km²");
    }

    #[test]
    fn test_si_value() {
        assert_eq!(q(2, &CUBIC_KILOMETRE).si_value().unwrap(), Number::from_i64(2_000_000_000));
    }

    #[test]
    fn test_convert_to() {
        let in_metres = q(1, &ASTRONOMICAL_UNIT).convert_to(&METRE).unwrap();
        assert_eq!(in_metres.value, Number::from_i64(149_597_871_000));
        assert!(Arc::ptr_eq(&in_metres.unit, &METRE));
    }

    #[test]
    fn test_add_mixed_units() {
        let au = q(1, &ASTRONOMICAL_UNIT);
        let metres = q(149_597_871_000, &METRE);
        let sum = au.add(&metres).unwrap();
        assert_eq!(sum.value, Number::from_i64(2));
        assert_eq!(sum.unit.symbol(), "AU");
    }

    #[test]
    fn test_sub_incompatible() {
        let mass = q(1, &SOLAR_MASS);
        let length = q(1, &ASTRONOMICAL_UNIT);
        assert!(!mass.is_compatible(&length));
        assert!(matches!(mass.sub(&length), Err(ConversionError::IncompatibleDimensions { .. })));
    }

    #[test]
    fn test_volume_from_area_times_length() {
        let area = q(2, &SQUARE_KILOMETRE);
        let depth = Quantity::new(Number::from_i64(3), Arc::new(crate::MetricPrefix::Kilo.apply(&METRE)));
        let volume = area.mul(&depth);

        assert_eq!(volume.unit.symbol(), "km³");
        let in_cubic_km = volume.convert_to(&CUBIC_KILOMETRE).unwrap();
        assert_eq!(in_cubic_km.value, Number::from_i64(6));
    }

    #[test]
    fn test_density_of_water_like_body() {
        // 10^12 kg in 1 km³ is 1 g/cm³
        let mass = Quantity::new(Number::pow10(12), Arc::clone(&KILOGRAM));
        let volume = q(1, &CUBIC_KILOMETRE);
        let density = mass.div(&volume).unwrap();

        let converted = density.convert_to(&GRAM_PER_CUBIC_CENTIMETRE).unwrap();
        assert_eq!(converted.value, Number::one());
    }

    #[test]
    fn test_div_by_zero_value() {
        let mass = q(1, &SOLAR_MASS);
        let volume = q(0, &CUBIC_KILOMETRE);
        assert!(matches!(mass.div(&volume), Err(ConversionError::Number(_))));
    }
}
