//! Initial vertical profiles evaluated from sounding tables.
//!
//! The case sounding prescribes liquid-water potential temperature, total
//! water, and wind as piecewise-linear functions of height. Evaluating the
//! tables on a [`VerticalGrid`] yields the cell-centered initial state in SI
//! units: `thl` [K], `qt` [kg/kg], `u` and `ug` [m/s].

use crate::errors::CaseResult;
use crate::grid::VerticalGrid;
use crate::interpolate::BreakpointTable;
use crate::timeseries::FloatValue;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Grams per kilogram, for converting the sounding's moisture values to SI.
pub const G_PER_KG: FloatValue = 1000.0;

/// Breakpoint tables defining the initial sounding.
///
/// The moisture table is given in g/kg as in the case definition; conversion
/// to kg/kg happens after evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundingTables {
    pub thl: BreakpointTable<FloatValue>,
    pub qt: BreakpointTable<FloatValue>,
    pub u: BreakpointTable<FloatValue>,
    pub ug: BreakpointTable<FloatValue>,
}

/// Cell-centered initial profiles, aligned to the grid that built them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialProfiles {
    /// Liquid-water potential temperature [K].
    pub thl: Array1<FloatValue>,
    /// Total water content [kg/kg].
    pub qt: Array1<FloatValue>,
    /// Horizontal wind [m/s].
    pub u: Array1<FloatValue>,
    /// Geostrophic wind [m/s].
    pub ug: Array1<FloatValue>,
}

impl SoundingTables {
    /// Evaluate the sounding at every grid level.
    ///
    /// Any level outside a table's height range is an error before any
    /// profile is returned; no level is ever silently left at zero.
    pub fn evaluate(&self, grid: &VerticalGrid) -> CaseResult<InitialProfiles> {
        let thl = sample(&self.thl, grid)?;
        let mut qt = sample(&self.qt, grid)?;
        let u = sample(&self.u, grid)?;
        let ug = sample(&self.ug, grid)?;

        // g/kg to kg/kg
        qt.mapv_inplace(|v| v / G_PER_KG);

        Ok(InitialProfiles { thl, qt, u, ug })
    }
}

fn sample(
    table: &BreakpointTable<FloatValue>,
    grid: &VerticalGrid,
) -> CaseResult<Array1<FloatValue>> {
    grid.z()
        .iter()
        .map(|&z| table.at(z))
        .collect::<CaseResult<Vec<_>>>()
        .map(Array1::from_vec)
}
