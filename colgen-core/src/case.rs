//! Assembled case input.
//!
//! [`Case`] is the complete payload handed to the export side: the vertical
//! grid, the initial profiles, the surface boundary values, and the forcing
//! tables. Everything in it is finished data in SI units; writers only
//! serialize, they never transform.

use crate::forcing::ForcingTables;
use crate::grid::VerticalGrid;
use crate::profiles::InitialProfiles;
use crate::surface::SurfaceFluxes;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub grid: VerticalGrid,
    pub profiles: InitialProfiles,
    pub surface: SurfaceFluxes,
    pub forcing: ForcingTables,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arm;
    use crate::config::GridConfig;

    #[test]
    fn case_round_trips_through_toml() {
        let case = arm::build(&GridConfig {
            ktot: 4,
            zsize: 200.0,
        })
        .unwrap();

        let serialised = toml::to_string(&case).unwrap();
        let deserialised = toml::from_str::<Case>(&serialised).unwrap();
        assert_eq!(deserialised, case);
    }
}
