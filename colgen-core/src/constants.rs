//! Physical constants for the surface flux conversion.
//!
//! Centralised in one bundle that is passed explicitly into the builders, so
//! tests can substitute values without touching builder logic.

use crate::timeseries::FloatValue;
use serde::{Deserialize, Serialize};

/// Thermodynamic constants of the case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// Gas constant of dry air [J/kg/K].
    pub rd: FloatValue,
    /// Specific heat of dry air at constant pressure [J/kg/K].
    pub cp: FloatValue,
    /// Latent heat of vaporization [J/kg].
    pub lv: FloatValue,
    /// Surface pressure [Pa].
    pub p0: FloatValue,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            rd: 287.0,
            cp: 1005.0,
            lv: 2.5e6,
            p0: 97000.0,
        }
    }
}
