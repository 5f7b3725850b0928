//! Astro Units - Astronomical System of Units
//!
//! Units of measure defined as exact transformations of SI base units,
//! and the astronomical catalog built on them:
//! - Solar mass (M☉)
//! - Astronomical unit (AU)
//! - Gram per cubic centimetre (g/cm³), canonical for density
//! - Square kilometre (km²), canonical for area
//! - Cubic kilometre (km³), canonical for volume
//!
//! ```
//! use astro_units::{astronomical, QuantityKind};
//!
//! let system = astronomical::instance();
//! assert_eq!(system.name(), "ASTRONOMICALSYSTEMOFUNITS");
//! assert_eq!(system.unit(QuantityKind::Area).unwrap().symbol(), "km²");
//! ```

mod dimension;
mod kind;
mod prefix;
mod quantity;
mod system;
mod unit;

pub mod astronomical;
pub mod si;

pub use dimension::Dimension;
pub use kind::QuantityKind;
pub use prefix::MetricPrefix;
pub use quantity::Quantity;
pub use system::{SystemOfUnits, UnitInfo};
pub use unit::{ConversionError, ConversionRule, ProductFactor, Unit};
pub use astronomical::{
    ASTRONOMICAL_UNIT, CUBIC_KILOMETRE, GRAM_PER_CUBIC_CENTIMETRE, SOLAR_MASS, SQUARE_KILOMETRE,
};
