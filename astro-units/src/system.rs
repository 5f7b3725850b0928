//! Systems of units: an ordered set of units plus the canonical unit
//! for each quantity kind

use std::collections::HashMap;
use std::sync::Arc;
use serde::{Serialize, Deserialize};
use tracing::{debug, trace};
use astro_core::Number;
use crate::{ConversionError, Dimension, QuantityKind, Unit};

/// Registry of units belonging to one named system
#[derive(Debug, Clone)]
pub struct SystemOfUnits {
    name: String,
    units: Vec<Arc<Unit>>,
    by_kind: HashMap<QuantityKind, Arc<Unit>>,
}

/// Serializable summary of a registered unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitInfo {
    pub symbol: String,
    pub name: String,
    pub dimension: Dimension,
    pub to_si_factor: Number,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<QuantityKind>,
}

impl SystemOfUnits {
    pub fn new(name: &str) -> Self {
        SystemOfUnits {
            name: name.to_string(),
            units: Vec::new(),
            by_kind: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a unit not mapped to any quantity kind. Returns `unit`.
    pub fn add_unit(&mut self, unit: Arc<Unit>) -> Arc<Unit> {
        trace!(system = %self.name, unit = %unit, "registering unit");
        self.units.push(Arc::clone(&unit));
        unit
    }

    /// Add a unit and make it the canonical unit for `kind`.
    /// A previous mapping for `kind` is replaced. Returns `unit`.
    pub fn add_unit_for(&mut self, unit: Arc<Unit>, kind: QuantityKind) -> Arc<Unit> {
        let unit = self.add_unit(unit);
        if let Some(previous) = self.by_kind.insert(kind, Arc::clone(&unit)) {
            debug!(system = %self.name, %kind, from = %previous, to = %unit, "replacing canonical unit");
        }
        unit
    }

    /// Canonical unit for a quantity kind
    pub fn unit(&self, kind: QuantityKind) -> Option<&Arc<Unit>> {
        self.by_kind.get(&kind)
    }

    /// All units, in registration order
    pub fn units(&self) -> &[Arc<Unit>] {
        &self.units
    }

    /// Units with the given dimension, in registration order
    pub fn units_of(&self, dimension: Dimension) -> Vec<&Arc<Unit>> {
        self.units.iter()
            .filter(|u| u.dimension() == dimension)
            .collect()
    }

    /// First registered unit with the given symbol
    pub fn find(&self, symbol: &str) -> Option<&Arc<Unit>> {
        self.units.iter().find(|u| u.symbol() == symbol)
    }

    /// Kind this unit is canonical for, if any
    pub fn kind_of(&self, unit: &Arc<Unit>) -> Option<QuantityKind> {
        QuantityKind::ALL
            .into_iter()
            .find(|kind| self.by_kind.get(kind).is_some_and(|u| Arc::ptr_eq(u, unit)))
    }

    /// Summaries of all units, in registration order
    pub fn catalog(&self) -> Result<Vec<UnitInfo>, ConversionError> {
        self.units.iter()
            .map(|unit| -> Result<UnitInfo, ConversionError> {
                Ok(UnitInfo {
                    symbol: unit.symbol().to_string(),
                    name: unit.name().to_string(),
                    dimension: unit.dimension(),
                    to_si_factor: unit.to_si_factor()?,
                    kind: self.kind_of(unit),
                })
            })
            .collect()
    }
}
