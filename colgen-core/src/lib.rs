pub mod arm;
pub mod case;
pub mod config;
pub mod constants;
pub mod forcing;
pub mod grid;
pub mod interpolate;
pub mod profiles;
pub mod surface;
pub mod timeseries;

pub mod errors;
