//! The ARM continental shallow-cumulus case.
//!
//! A convective boundary layer over the Southern Great Plains site: a
//! morning sounding, a diurnal cycle of surface heat fluxes, and weak
//! large-scale drying and cooling. The breakpoint tables below are the case
//! definition; they are fixed and not meant to be configured at runtime.

use crate::case::Case;
use crate::config::GridConfig;
use crate::constants::PhysicalConstants;
use crate::errors::CaseResult;
use crate::forcing::ForcingTendencies;
use crate::grid::VerticalGrid;
use crate::interpolate::BreakpointTable;
use crate::profiles::SoundingTables;
use crate::surface::SurfaceFluxTable;
use log::{debug, info};
use ndarray::array;

/// Top of the initial sounding [m].
pub const SOUNDING_TOP: f64 = 5500.0;

/// The initial sounding: thl [K] and qt [g/kg] on eight height breakpoints,
/// uniform westerly wind.
pub fn sounding() -> CaseResult<SoundingTables> {
    let thl = BreakpointTable::new(&[
        (0.0, 299.0),
        (50.0, 301.5),
        (350.0, 302.5),
        (650.0, 303.53),
        (700.0, 303.7),
        (1300.0, 307.13),
        (2500.0, 314.0),
        (SOUNDING_TOP, 343.2),
    ])?;
    // qt repeats 3.00 so the 2500-5500 m segment stays at a constant value.
    let qt = BreakpointTable::new(&[
        (0.0, 15.20),
        (50.0, 15.17),
        (350.0, 14.98),
        (650.0, 14.80),
        (700.0, 14.70),
        (1300.0, 13.50),
        (2500.0, 3.00),
        (SOUNDING_TOP, 3.00),
    ])?;
    let u = BreakpointTable::constant(10.0, 0.0, SOUNDING_TOP)?;
    let ug = BreakpointTable::constant(10.0, 0.0, SOUNDING_TOP)?;
    Ok(SoundingTables { thl, qt, u, ug })
}

/// Sensible and latent surface heat fluxes [W/m²] over the diurnal cycle.
pub fn surface_fluxes() -> CaseResult<SurfaceFluxTable> {
    SurfaceFluxTable::new(
        array![0.0, 4.0, 6.5, 7.5, 10.0, 12.5, 14.5],
        array![-30.0, 90.0, 140.0, 140.0, 100.0, -10.0, -10.0],
        array![5.0, 250.0, 450.0, 500.0, 420.0, 180.0, 0.0],
    )
}

/// Advective and radiative tendencies [K/h, g/kg/h] per forcing time bin.
pub fn tendencies() -> CaseResult<ForcingTendencies> {
    ForcingTendencies::new(
        array![0.0, 3.0, 6.0, 9.0, 12.0, 14.5],
        array![0.0, 0.0, 0.0, -0.08, -0.16, -0.16],
        array![-0.125, 0.0, 0.0, 0.0, 0.0, -0.1],
        array![0.08, 0.02, -0.04, -0.10, -0.16, -0.30],
    )
}

/// Run the full pipeline for the configured grid: grid, initial profiles,
/// surface boundary values, and large-scale forcing.
pub fn build(config: &GridConfig) -> CaseResult<Case> {
    let constants = PhysicalConstants::default();
    let grid = VerticalGrid::new(config.ktot, config.zsize)?;
    debug!(
        "vertical grid: {} levels, dz = {} m, top at {} m",
        grid.len(),
        grid.dz(),
        grid.top()
    );

    let profiles = sounding()?.evaluate(&grid)?;
    let surface =
        surface_fluxes()?.to_surface_values(profiles.thl[0], profiles.qt[0], &constants)?;
    info!("rho = {}", surface.rho);
    let forcing = tendencies()?.build(&grid)?;

    Ok(Case {
        grid,
        profiles,
        surface,
        forcing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forcing::FORCING_TOP;

    #[test]
    fn sounding_and_forcing_share_their_top() {
        assert_eq!(SOUNDING_TOP, FORCING_TOP);
        let tables = sounding().unwrap();
        assert_eq!(tables.thl.hi(), SOUNDING_TOP);
        assert_eq!(tables.qt.hi(), SOUNDING_TOP);
    }

    #[test]
    fn tables_have_the_expected_lengths() {
        assert_eq!(sounding().unwrap().thl.len(), 8);
        assert_eq!(surface_fluxes().unwrap().time_h().len(), 7);
        assert_eq!(tendencies().unwrap().time_h().len(), 6);
    }

    #[test]
    fn build_runs_the_whole_pipeline() {
        let case = build(&GridConfig {
            ktot: 32,
            zsize: 4400.0,
        })
        .unwrap();
        assert_eq!(case.grid.len(), 32);
        assert_eq!(case.profiles.thl.len(), 32);
        assert_eq!(case.surface.thl_sbot.len(), 7);
        assert_eq!(case.forcing.thl_ls.dim(), (6, 32));
    }
}
