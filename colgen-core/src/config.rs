//! Case configuration input.
//!
//! The simulation engine's `.ini` file is a plain `key=value` text format,
//! one pair per line. Only two entries matter here: `ktot`, the number of
//! vertical levels, and `zsize`, the domain height in meters. Section
//! headers, comments, and unrelated keys are skipped.

use crate::errors::{CaseError, CaseResult};
use crate::timeseries::FloatValue;
use log::debug;
use serde::{Deserialize, Serialize};

/// Grid parameters read from the case configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of vertical levels.
    pub ktot: usize,
    /// Domain height [m].
    pub zsize: FloatValue,
}

impl GridConfig {
    /// Parse `ktot` and `zsize` from `key=value` configuration text.
    ///
    /// A relevant key that appears more than once keeps its last value, as
    /// the simulation engine does. Missing or unparseable entries are an
    /// [`CaseError::InvalidConfiguration`]; positivity is checked later by
    /// [`VerticalGrid::new`](crate::grid::VerticalGrid::new).
    pub fn from_ini_str(text: &str) -> CaseResult<Self> {
        let mut ktot = None;
        let mut zsize = None;

        for raw in text.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            match key.trim() {
                "ktot" => {
                    ktot = Some(parse_entry::<usize>("ktot", value)?);
                }
                "zsize" => {
                    zsize = Some(parse_entry::<FloatValue>("zsize", value)?);
                }
                _ => {}
            }
        }

        let ktot = ktot.ok_or_else(|| missing("ktot"))?;
        let zsize = zsize.ok_or_else(|| missing("zsize"))?;
        debug!("configuration: ktot={}, zsize={} m", ktot, zsize);
        Ok(Self { ktot, zsize })
    }
}

fn parse_entry<T: std::str::FromStr>(key: &str, value: &str) -> CaseResult<T> {
    value.trim().parse().map_err(|_| {
        CaseError::InvalidConfiguration(format!("malformed value for {}: {:?}", key, value.trim()))
    })
}

fn missing(key: &str) -> CaseError {
    CaseError::InvalidConfiguration(format!("{} not found in configuration", key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_relevant_keys() {
        let text = "[grid]\nitot=64\nktot=32\nzsize=3300.\n\n[time]\nendtime=52200\n";
        let config = GridConfig::from_ini_str(text).unwrap();
        assert_eq!(config.ktot, 32);
        assert_eq!(config.zsize, 3300.0);
    }

    #[test]
    fn later_entries_win() {
        let config = GridConfig::from_ini_str("ktot=8\nzsize=100\nktot=16\n").unwrap();
        assert_eq!(config.ktot, 16);
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let config = GridConfig::from_ini_str("# case setup\n\nktot=4\nzsize=200\n").unwrap();
        assert_eq!(config.ktot, 4);
        assert_eq!(config.zsize, 200.0);
    }

    #[test]
    fn missing_key_is_rejected() {
        let err = GridConfig::from_ini_str("zsize=3300.\n").unwrap_err();
        assert_eq!(
            err,
            CaseError::InvalidConfiguration("ktot not found in configuration".to_string())
        );
    }

    #[test]
    fn malformed_value_is_rejected() {
        assert!(GridConfig::from_ini_str("ktot=many\nzsize=3300.\n").is_err());
        assert!(GridConfig::from_ini_str("ktot=32\nzsize=tall\n").is_err());
    }
}
