//! Quantity kinds a system of units can name a canonical unit for

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::Dimension;

/// What physical quantity a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityKind {
    Mass,
    Length,
    Area,
    Volume,
    Density,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 5] = [
        QuantityKind::Mass,
        QuantityKind::Length,
        QuantityKind::Area,
        QuantityKind::Volume,
        QuantityKind::Density,
    ];

    /// The dimension a unit of this kind is expected to have
    pub fn dimension(&self) -> Dimension {
        match self {
            QuantityKind::Mass => Dimension::MASS,
            QuantityKind::Length => Dimension::LENGTH,
            QuantityKind::Area => Dimension::AREA,
            QuantityKind::Volume => Dimension::VOLUME,
            QuantityKind::Density => Dimension::DENSITY,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            QuantityKind::Mass => "mass",
            QuantityKind::Length => "length",
            QuantityKind::Area => "area",
            QuantityKind::Volume => "volume",
            QuantityKind::Density => "density",
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
