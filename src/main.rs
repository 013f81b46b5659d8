//! One-shot case-input generator.
//!
//! Reads the grid parameters from the case `.ini` file in the working
//! directory, builds the initial profiles, surface boundary values, and
//! large-scale forcing, and writes the text tables plus the NetCDF dataset.
//! No flags; any failure exits non-zero, and the case is fully built and
//! validated before the first file is created.

use anyhow::Context;
use colgen::export;
use colgen_core::arm;
use colgen_core::config::GridConfig;
use log::{info, warn};
use std::fs;
use std::path::Path;

/// Configuration consumed from the working directory.
const CONFIG_FILE: &str = "arm.ini";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let text =
        fs::read_to_string(CONFIG_FILE).with_context(|| format!("reading {}", CONFIG_FILE))?;
    let config = GridConfig::from_ini_str(&text)?;
    let case = arm::build(&config)?;

    let dir = Path::new(".");
    export::write_text_tables(&case, dir)?;
    info!(
        "wrote {}, {}, {}, {}, {}",
        export::PROFILE_FILE,
        export::THL_SBOT_FILE,
        export::QT_SBOT_FILE,
        export::THL_LS_FILE,
        export::QT_LS_FILE
    );

    match export::dataset::write_dataset(&dir.join(export::DATASET_FILE), &case) {
        Ok(()) => info!("wrote {}", export::DATASET_FILE),
        Err(export::ExportError::FeatureDisabled) => {
            warn!(
                "built without the netcdf feature; skipping {}",
                export::DATASET_FILE
            );
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
