//! Fixed-width text tables for the simulation engine.
//!
//! Headers are centered in 20-character fields; every number is written in
//! scientific notation with 14 digits after the decimal point and a signed,
//! at-least-two-digit exponent (`3.00250000000000E+02`). Columns are
//! separated by a single space.

use colgen_core::case::Case;
use colgen_core::timeseries::{FloatValue, Time, Timeseries};
use ndarray::{Array1, Array2};
use std::io::{self, Write};

/// Width of a centered header field; matches the width of one formatted
/// number.
const FIELD_WIDTH: usize = 20;

/// Format a value like C's `%1.14E`.
pub fn format_scientific(value: FloatValue) -> String {
    // fold negative zero
    let value = if value == 0.0 { 0.0 } else { value };
    let formatted = format!("{:.14e}", value);
    let (mantissa, exponent) = formatted
        .split_once('e')
        .expect("float formatting always yields an exponent");
    match exponent.strip_prefix('-') {
        Some(digits) => format!("{}E-{:0>2}", mantissa, digits),
        None => format!("{}E+{:0>2}", mantissa, exponent),
    }
}

/// Write the initial profile table: `z thl qt u ug`, one row per level.
pub fn write_profiles<W: Write>(w: &mut W, case: &Case) -> io::Result<()> {
    writeln!(
        w,
        "{:^w$} {:^w$} {:^w$} {:^w$} {:^w$}",
        "z",
        "thl",
        "qt",
        "u",
        "ug",
        w = FIELD_WIDTH
    )?;
    let profiles = &case.profiles;
    for (k, &z) in case.grid.z().iter().enumerate() {
        writeln!(
            w,
            "{} {} {} {} {}",
            format_scientific(z),
            format_scientific(profiles.thl[k]),
            format_scientific(profiles.qt[k]),
            format_scientific(profiles.u[k]),
            format_scientific(profiles.ug[k]),
        )?;
    }
    Ok(())
}

/// Write a `time value` table for one surface boundary series.
pub fn write_time_series<W: Write>(w: &mut W, series: &Timeseries) -> io::Result<()> {
    writeln!(w, "{:^w$} {:^w$}", "time", series.name(), w = FIELD_WIDTH)?;
    for (&t, &v) in series.time().iter().zip(series.values()) {
        writeln!(w, "{} {}", format_scientific(t), format_scientific(v))?;
    }
    Ok(())
}

/// Write a forcing table: header `z` plus the forcing times, then one row
/// per level holding the height and the tendencies at that height.
pub fn write_time_profiles<W: Write>(
    w: &mut W,
    z: &Array1<FloatValue>,
    time: &Array1<Time>,
    table: &Array2<FloatValue>,
) -> io::Result<()> {
    write!(w, "{:^w$}", "z", w = FIELD_WIDTH)?;
    for &t in time {
        write!(w, " {}", format_scientific(t))?;
    }
    writeln!(w)?;

    for (k, &zk) in z.iter().enumerate() {
        write!(w, "{}", format_scientific(zk))?;
        for n in 0..time.len() {
            write!(w, " {}", format_scientific(table[[n, k]]))?;
        }
        writeln!(w)?;
    }
    Ok(())
}
