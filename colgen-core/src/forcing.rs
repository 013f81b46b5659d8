//! Large-scale forcing tendencies on the (time, height) plane.
//!
//! Advective and radiative tendencies are prescribed per time bin as scalar
//! rates for the boundary layer. Each scalar is spread over the column with
//! a height-dependent attenuation: full strength up to 1000 m, then a linear
//! decay that reaches exactly zero at 5500 m. The result is a pair of
//! (time × height) tables in SI rates.

use crate::errors::{CaseError, CaseResult};
use crate::grid::VerticalGrid;
use crate::interpolate::BreakpointTable;
use crate::profiles::G_PER_KG;
use crate::timeseries::{FloatValue, Time, SECONDS_PER_HOUR};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Height up to which tendencies apply unattenuated [m].
pub const FULL_FORCING_TOP: FloatValue = 1000.0;
/// Height at which the attenuated tendencies vanish [m].
pub const FORCING_TOP: FloatValue = 5500.0;

/// Per-time-bin scalar tendencies, on a shared time axis in hours.
///
/// Temperature forcing combines an advective and a radiative contribution
/// [K/h]; moisture forcing is advective only [g/kg/h].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForcingTendencies {
    time_h: Array1<Time>,
    advthl: Array1<FloatValue>,
    radthl: Array1<FloatValue>,
    advqt: Array1<FloatValue>,
}

/// Time-height forcing tables in SI rates, aligned to the grid that built
/// them. Row `n` holds the column at forcing time `n`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForcingTables {
    /// Forcing time axis [s].
    pub time_ls: Array1<Time>,
    /// thl tendency [K/s], shape (time, height).
    pub thl_ls: Array2<FloatValue>,
    /// qt tendency [kg/kg/s], shape (time, height).
    pub qt_ls: Array2<FloatValue>,
}

impl ForcingTendencies {
    /// Build the tendency set, checking every table against the time axis.
    ///
    /// A tendency table longer or shorter than the time axis is rejected
    /// outright rather than truncated or broadcast.
    pub fn new(
        time_h: Array1<Time>,
        advthl: Array1<FloatValue>,
        radthl: Array1<FloatValue>,
        advqt: Array1<FloatValue>,
    ) -> CaseResult<Self> {
        for (name, table) in [("advthl", &advthl), ("radthl", &radthl), ("advqt", &advqt)] {
            if table.len() != time_h.len() {
                return Err(CaseError::MismatchedTableLength {
                    name: name.to_string(),
                    expected: time_h.len(),
                    actual: table.len(),
                });
            }
        }
        if time_h.windows(2).into_iter().any(|w| w[1] <= w[0]) {
            return Err(CaseError::InvalidConfiguration(
                "forcing time axis is not strictly increasing".to_string(),
            ));
        }
        Ok(Self {
            time_h,
            advthl,
            radthl,
            advqt,
        })
    }

    pub fn time_h(&self) -> &Array1<Time> {
        &self.time_h
    }

    /// Spread the scalar tendencies over the column and convert to SI.
    ///
    /// Grid levels above the attenuation profile's top are an error; past
    /// that height the linear decay would change sign instead of forcing
    /// anything physical.
    pub fn build(&self, grid: &VerticalGrid) -> CaseResult<ForcingTables> {
        let attenuation = attenuation_profile()?;
        let weights = grid
            .z()
            .iter()
            .map(|&z| attenuation.at(z))
            .collect::<CaseResult<Vec<_>>>()?;

        let ntime = self.time_h.len();
        let kmax = grid.len();
        let mut thl_ls = Array2::zeros((ntime, kmax));
        let mut qt_ls = Array2::zeros((ntime, kmax));

        for n in 0..ntime {
            let tendthl = self.advthl[n] + self.radthl[n];
            let tendqt = self.advqt[n];
            for (k, &w) in weights.iter().enumerate() {
                thl_ls[[n, k]] = tendthl * w / SECONDS_PER_HOUR;
                qt_ls[[n, k]] = tendqt * w / SECONDS_PER_HOUR / G_PER_KG;
            }
        }

        let time_ls = self.time_h.mapv(|t| t * SECONDS_PER_HOUR);
        Ok(ForcingTables {
            time_ls,
            thl_ls,
            qt_ls,
        })
    }
}

/// The attenuation rule as a breakpoint table: 1 through the boundary layer,
/// decaying linearly to 0 at the forcing top.
fn attenuation_profile() -> CaseResult<BreakpointTable<FloatValue>> {
    BreakpointTable::new(&[
        (0.0, 1.0),
        (FULL_FORCING_TOP, 1.0),
        (FORCING_TOP, 0.0),
    ])
}
