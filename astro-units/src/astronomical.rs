//! The astronomical system of units
//!
//! Solar mass and astronomical unit, plus the density, area and volume
//! units astronomy uses for planetary bodies. The constants are shared
//! `Arc<Unit>`s; the system registers those same `Arc`s, so a unit
//! fetched from [`instance`] is pointer-equal to the constant.

use std::sync::{Arc, LazyLock};
use tracing::debug;
use astro_core::Number;
use crate::si::{GRAM, KILOGRAM, METRE};
use crate::{MetricPrefix, QuantityKind, SystemOfUnits, Unit};

/// Name reported by the astronomical system
pub const SYSTEM_NAME: &str = "ASTRONOMICALSYSTEMOFUNITS";

/// Mass of the Sun, 1.9891 × 10^30 kg. Used for the masses of stars,
/// clusters, nebulae and galaxies.
pub static SOLAR_MASS: LazyLock<Arc<Unit>> = LazyLock::new(|| {
    let factor = Number::from_i64(19_891).mul(&Number::pow10(26));
    Arc::new(Unit::scaled("M☉", "solar mass", &KILOGRAM, factor))
});

/// Astronomical unit, 149 597 871 000 m
pub static ASTRONOMICAL_UNIT: LazyLock<Arc<Unit>> = LazyLock::new(|| {
    Arc::new(Unit::scaled(
        "AU",
        "astronomical unit",
        &METRE,
        Number::from_i64(149_597_871_000),
    ))
});

/// g/cm³
pub static GRAM_PER_CUBIC_CENTIMETRE: LazyLock<Arc<Unit>> = LazyLock::new(|| {
    let cubic_centimetre = Arc::new(prefixed(MetricPrefix::Centi).pow(3));
    Arc::new(GRAM.divide(&cubic_centimetre))
});

/// km²
pub static SQUARE_KILOMETRE: LazyLock<Arc<Unit>> = LazyLock::new(|| {
    let kilometre = prefixed(MetricPrefix::Kilo);
    Arc::new(kilometre.multiply(&kilometre))
});

/// km³, built on [`SQUARE_KILOMETRE`]
pub static CUBIC_KILOMETRE: LazyLock<Arc<Unit>> = LazyLock::new(|| {
    Arc::new(SQUARE_KILOMETRE.multiply(&prefixed(MetricPrefix::Kilo)))
});

fn prefixed(prefix: MetricPrefix) -> Arc<Unit> {
    Arc::new(prefix.apply(&METRE))
}

static INSTANCE: LazyLock<SystemOfUnits> = LazyLock::new(|| {
    let mut system = SystemOfUnits::new(SYSTEM_NAME);

    // Order matters: CUBIC_KILOMETRE forces SQUARE_KILOMETRE first
    system.add_unit(Arc::clone(&SOLAR_MASS));
    system.add_unit(Arc::clone(&ASTRONOMICAL_UNIT));
    system.add_unit_for(Arc::clone(&GRAM_PER_CUBIC_CENTIMETRE), QuantityKind::Density);
    system.add_unit_for(Arc::clone(&SQUARE_KILOMETRE), QuantityKind::Area);
    system.add_unit_for(Arc::clone(&CUBIC_KILOMETRE), QuantityKind::Volume);

    debug!(system = SYSTEM_NAME, units = system.units().len(), "initialized system of units");
    system
});

/// The shared astronomical system, built on first access
pub fn instance() -> &'static SystemOfUnits {
    &INSTANCE
}
