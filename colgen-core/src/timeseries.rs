//! Named time series for boundary-condition data.
//!
//! A [`Timeseries`] pairs a strictly increasing time axis with one value per
//! time point. Values apply exactly at their time points; interpolating
//! between them is the consuming simulation's concern, not ours.

use crate::errors::{CaseError, CaseResult};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

pub type FloatValue = f64;
pub type Time = f64;

/// Seconds per hour, used when converting case time axes to SI.
pub const SECONDS_PER_HOUR: Time = 3600.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeseries {
    name: String,
    time: Array1<Time>,
    values: Array1<FloatValue>,
}

impl Timeseries {
    /// Build a series from aligned value and time arrays.
    ///
    /// Fails if the arrays differ in length or the time axis is not strictly
    /// increasing.
    pub fn from_values(
        name: &str,
        values: Array1<FloatValue>,
        time: Array1<Time>,
    ) -> CaseResult<Self> {
        if values.len() != time.len() {
            return Err(CaseError::MismatchedTableLength {
                name: name.to_string(),
                expected: time.len(),
                actual: values.len(),
            });
        }
        if time.windows(2).into_iter().any(|w| w[1] <= w[0]) {
            return Err(CaseError::InvalidConfiguration(format!(
                "time axis of {} is not strictly increasing",
                name
            )));
        }
        Ok(Self {
            name: name.to_string(),
            time,
            values,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn time(&self) -> &Array1<Time> {
        &self.time
    }

    pub fn values(&self) -> &Array1<FloatValue> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn from_values() {
        let ts = Timeseries::from_values(
            "thl_sbot",
            array![1.0, 2.0, 3.0],
            array![0.0, 3600.0, 7200.0],
        )
        .unwrap();
        assert_eq!(ts.name(), "thl_sbot");
        assert_eq!(ts.len(), 3);
        assert_eq!(ts.values()[1], 2.0);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = Timeseries::from_values("H", array![1.0, 2.0], array![0.0, 1.0, 2.0])
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

    #[test]
    fn non_increasing_time_axis_is_rejected() {
        let err = Timeseries::from_values("H", array![1.0, 2.0, 3.0], array![0.0, 2.0, 2.0])
            .unwrap_err();
        assert!(matches!(err, CaseError::InvalidConfiguration(_)));
    }
}
