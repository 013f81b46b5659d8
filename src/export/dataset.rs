//! Structured dataset output.
//!
//! Writes the whole case into one NetCDF file, grouping variables by their
//! natural dimension: the profiles on `z`, the surface series on `time_h`,
//! and the forcing tables on `time_ls × z`. Everything is stored as 8-byte
//! floats. Requires the `netcdf` feature.

use super::ExportError;
use colgen_core::case::Case;
use std::path::Path;

#[cfg(feature = "netcdf")]
use ndarray::{Array1, Array2};

/// Create the dataset at `path` and write every case variable into it.
///
/// Refuses to overwrite an existing file.
#[cfg(feature = "netcdf")]
pub fn write_dataset(path: &Path, case: &Case) -> Result<(), ExportError> {
    if path.exists() {
        return Err(ExportError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("{} already exists", path.display()),
        )));
    }
    let mut file = netcdf::create(path)?;

    file.add_dimension("z", case.grid.len())?;
    file.add_dimension("time_h", case.surface.thl_sbot.len())?;
    file.add_dimension("time_ls", case.forcing.time_ls.len())?;

    put_profile(&mut file, "z", case.grid.z())?;
    put_profile(&mut file, "thl", &case.profiles.thl)?;
    put_profile(&mut file, "qt", &case.profiles.qt)?;
    put_profile(&mut file, "u", &case.profiles.u)?;
    put_profile(&mut file, "ug", &case.profiles.ug)?;

    put_series(&mut file, "time_h", case.surface.thl_sbot.time())?;
    put_series(&mut file, "thl_sbot", case.surface.thl_sbot.values())?;
    put_series(&mut file, "qt_sbot", case.surface.qt_sbot.values())?;

    put_1d(&mut file, "time_ls", "time_ls", &case.forcing.time_ls)?;
    put_forcing(&mut file, "thl_ls", &case.forcing.thl_ls)?;
    put_forcing(&mut file, "qt_ls", &case.forcing.qt_ls)?;

    Ok(())
}

/// Stub used when the crate is built without NetCDF support.
#[cfg(not(feature = "netcdf"))]
pub fn write_dataset(_path: &Path, _case: &Case) -> Result<(), ExportError> {
    Err(ExportError::FeatureDisabled)
}

#[cfg(feature = "netcdf")]
fn put_profile(
    file: &mut netcdf::FileMut,
    name: &str,
    values: &Array1<f64>,
) -> Result<(), ExportError> {
    put_1d(file, name, "z", values)
}

#[cfg(feature = "netcdf")]
fn put_series(
    file: &mut netcdf::FileMut,
    name: &str,
    values: &Array1<f64>,
) -> Result<(), ExportError> {
    put_1d(file, name, "time_h", values)
}

#[cfg(feature = "netcdf")]
fn put_1d(
    file: &mut netcdf::FileMut,
    name: &str,
    dim: &str,
    values: &Array1<f64>,
) -> Result<(), ExportError> {
    let mut var = file.add_variable::<f64>(name, &[dim])?;
    let values = values.as_slice().expect("1-D arrays are contiguous");
    var.put_values(values, ..)?;
    Ok(())
}

#[cfg(feature = "netcdf")]
fn put_forcing(
    file: &mut netcdf::FileMut,
    name: &str,
    table: &Array2<f64>,
) -> Result<(), ExportError> {
    let mut var = file.add_variable::<f64>(name, &["time_ls", "z"])?;
    // Freshly built tables are in standard row-major layout, rows = time.
    let values = table.as_slice().expect("forcing tables are contiguous");
    var.put_values(values, ..)?;
    Ok(())
}
