//! Export adapters for the assembled case.
//!
//! The core hands over a finished [`Case`]; everything here is pure
//! serialization: fixed-width text tables for the simulation engine, plus a
//! NetCDF dataset (behind the `netcdf` feature) for everything else.

pub mod dataset;
pub mod tables;

use colgen_core::case::Case;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Initial profile table.
pub const PROFILE_FILE: &str = "arm.prof";
/// Surface thl flux time series.
pub const THL_SBOT_FILE: &str = "thl_sbot.time";
/// Surface qt flux time series.
pub const QT_SBOT_FILE: &str = "qt_sbot.time";
/// Large-scale thl forcing table.
pub const THL_LS_FILE: &str = "thl_ls.time";
/// Large-scale qt forcing table.
pub const QT_LS_FILE: &str = "qt_ls.time";
/// Structured dataset.
pub const DATASET_FILE: &str = "arm.nc";

/// Error type for export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// NetCDF library error
    #[cfg(feature = "netcdf")]
    #[error("NetCDF error: {0}")]
    NetCDF(#[from] netcdf::Error),

    /// Feature not enabled
    #[error("NetCDF feature not enabled")]
    FeatureDisabled,
}

/// Write the five plain-text tables into `dir`.
pub fn write_text_tables(case: &Case, dir: &Path) -> Result<(), ExportError> {
    let mut prof = BufWriter::new(File::create(dir.join(PROFILE_FILE))?);
    tables::write_profiles(&mut prof, case)?;
    prof.flush()?;

    for (name, series) in [
        (THL_SBOT_FILE, &case.surface.thl_sbot),
        (QT_SBOT_FILE, &case.surface.qt_sbot),
    ] {
        let mut file = BufWriter::new(File::create(dir.join(name))?);
        tables::write_time_series(&mut file, series)?;
        file.flush()?;
    }

    for (name, table) in [
        (THL_LS_FILE, &case.forcing.thl_ls),
        (QT_LS_FILE, &case.forcing.qt_ls),
    ] {
        let mut file = BufWriter::new(File::create(dir.join(name))?);
        tables::write_time_profiles(&mut file, case.grid.z(), &case.forcing.time_ls, table)?;
        file.flush()?;
    }

    Ok(())
}
