//! Surface energy fluxes and their conversion to boundary values.
//!
//! The case prescribes sensible and latent heat fluxes [W/m²] at a handful
//! of time points. The simulation engine wants material surface values
//! instead: a kinematic temperature flux [K·m/s] and a moisture flux
//! [kg/kg·m/s]. The conversion divides by `rho*cp` and `rho*Lv`, with the
//! air density diagnosed from the initial state's lowest level.

use crate::constants::PhysicalConstants;
use crate::errors::{CaseError, CaseResult};
use crate::timeseries::{FloatValue, Time, Timeseries, SECONDS_PER_HOUR};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Prescribed surface energy fluxes on a shared time axis in hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceFluxTable {
    time_h: Array1<Time>,
    sensible: Array1<FloatValue>,
    latent: Array1<FloatValue>,
}

/// Surface boundary values derived from the energy fluxes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceFluxes {
    /// Surface air density [kg/m³].
    pub rho: FloatValue,
    /// Surface thl flux [K·m/s], time axis in seconds.
    pub thl_sbot: Timeseries,
    /// Surface qt flux [kg/kg·m/s], time axis in seconds.
    pub qt_sbot: Timeseries,
}

/// Surface air density from the ideal gas law with a virtual temperature
/// correction: `rho = p0 / (Rd * thl0 * (1 + 0.61 * qt0))`.
pub fn surface_density(
    thl0: FloatValue,
    qt0: FloatValue,
    constants: &PhysicalConstants,
) -> FloatValue {
    constants.p0 / (constants.rd * thl0 * (1.0 + 0.61 * qt0))
}

impl SurfaceFluxTable {
    /// Build the flux table, checking both series against the time axis.
    pub fn new(
        time_h: Array1<Time>,
        sensible: Array1<FloatValue>,
        latent: Array1<FloatValue>,
    ) -> CaseResult<Self> {
        check_length("H", time_h.len(), sensible.len())?;
        check_length("LE", time_h.len(), latent.len())?;
        if time_h.windows(2).into_iter().any(|w| w[1] <= w[0]) {
            return Err(CaseError::InvalidConfiguration(
                "surface flux time axis is not strictly increasing".to_string(),
            ));
        }
        Ok(Self {
            time_h,
            sensible,
            latent,
        })
    }

    pub fn time_h(&self) -> &Array1<Time> {
        &self.time_h
    }

    pub fn sensible(&self) -> &Array1<FloatValue> {
        &self.sensible
    }

    pub fn latent(&self) -> &Array1<FloatValue> {
        &self.latent
    }

    /// Convert the energy fluxes to surface values using the initial state's
    /// lowest-level `thl` [K] and `qt` [kg/kg].
    ///
    /// Values stay at the prescribed time points; the time axis is converted
    /// from hours to seconds.
    pub fn to_surface_values(
        &self,
        thl0: FloatValue,
        qt0: FloatValue,
        constants: &PhysicalConstants,
    ) -> CaseResult<SurfaceFluxes> {
        let rho = surface_density(thl0, qt0, constants);
        let time_s = self.time_h.mapv(|t| t * SECONDS_PER_HOUR);

        let thl_sbot = Timeseries::from_values(
            "thl_sbot",
            self.sensible.mapv(|h| h / (rho * constants.cp)),
            time_s.clone(),
        )?;
        let qt_sbot = Timeseries::from_values(
            "qt_sbot",
            self.latent.mapv(|le| le / (rho * constants.lv)),
            time_s,
        )?;

        Ok(SurfaceFluxes {
            rho,
            thl_sbot,
            qt_sbot,
        })
    }
}

fn check_length(name: &str, expected: usize, actual: usize) -> CaseResult<()> {
    if expected != actual {
        return Err(CaseError::MismatchedTableLength {
            name: name.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arm;
    use is_close::is_close;
    use ndarray::array;

    #[test]
    fn density_matches_the_reference_value() {
        let rho = surface_density(299.0, 0.0152, &PhysicalConstants::default());
        // Regression fixture: 97000 / (287 * 299 * (1 + 0.61 * 0.0152))
        assert!((rho - 1.122).abs() / 1.122 < 0.01);
        assert!(is_close!(rho, 1.1199804048191426, rel_tol = 1e-12));
    }

    #[test]
    fn fluxes_are_scaled_by_rho_cp_and_rho_lv() {
        let constants = PhysicalConstants::default();
        let table = SurfaceFluxTable::new(
            array![0.0, 4.0],
            array![-30.0, 90.0],
            array![5.0, 250.0],
        )
        .unwrap();
        let surface = table.to_surface_values(299.0, 0.0152, &constants).unwrap();

        assert!(is_close!(
            surface.thl_sbot.values()[1],
            90.0 / (surface.rho * constants.cp)
        ));
        assert!(is_close!(
            surface.qt_sbot.values()[0],
            5.0 / (surface.rho * constants.lv)
        ));
    }

    #[test]
    fn time_axis_is_converted_to_seconds() {
        let surface = arm::surface_fluxes()
            .unwrap()
            .to_surface_values(300.25, 15.185e-3, &PhysicalConstants::default())
            .unwrap();
        assert_eq!(surface.thl_sbot.time()[0], 0.0);
        assert_eq!(surface.thl_sbot.time()[1], 4.0 * 3600.0);
        assert_eq!(surface.qt_sbot.time()[6], 14.5 * 3600.0);
    }

    #[test]
    fn flux_series_shorter_than_the_time_axis_is_rejected() {
        let err = SurfaceFluxTable::new(
            array![0.0, 4.0, 6.5],
            array![-30.0, 90.0],
            array![5.0, 250.0, 450.0],
        )
        .unwrap_err();
        assert_eq!(
            err,
            CaseError::MismatchedTableLength {
                name: "H".to_string(),
                expected: 3,
                actual: 2,
            }
        );
    }
}
