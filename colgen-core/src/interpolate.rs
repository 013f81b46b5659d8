//! Piecewise-linear breakpoint tables.
//!
//! The initial sounding, the wind profiles, and the forcing attenuation are
//! all piecewise-linear functions of height. Each is declared as an ordered
//! table of `(coordinate, value)` breakpoints and evaluated by one shared
//! segment-location routine.
//!
//! Evaluation outside the table's domain is an error; tables are never
//! extrapolated past their first or last breakpoint.

use crate::errors::{CaseError, CaseResult};
use num::Float;
use serde::{Deserialize, Serialize};

/// An ordered set of `(x, value)` breakpoints defining a piecewise-linear
/// function on the closed interval `[lo, hi]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakpointTable<F> {
    xs: Vec<F>,
    values: Vec<F>,
}

impl<F: Float> BreakpointTable<F> {
    /// Build a table from breakpoint pairs.
    ///
    /// Requires at least two points with strictly increasing coordinates;
    /// two breakpoints sharing a coordinate would make the table ambiguous.
    pub fn new(points: &[(F, F)]) -> CaseResult<Self> {
        if points.len() < 2 {
            return Err(CaseError::InvalidConfiguration(format!(
                "a breakpoint table needs at least two points, got {}",
                points.len()
            )));
        }
        if points.windows(2).any(|w| w[1].0 <= w[0].0) {
            return Err(CaseError::InvalidConfiguration(
                "breakpoint coordinates must be strictly increasing".to_string(),
            ));
        }
        Ok(Self {
            xs: points.iter().map(|p| p.0).collect(),
            values: points.iter().map(|p| p.1).collect(),
        })
    }

    /// A degenerate table holding `value` constant over `[lo, hi]`.
    pub fn constant(value: F, lo: F, hi: F) -> CaseResult<Self> {
        Self::new(&[(lo, value), (hi, value)])
    }

    /// Lower edge of the table domain.
    pub fn lo(&self) -> F {
        self.xs[0]
    }

    /// Upper edge of the table domain.
    pub fn hi(&self) -> F {
        self.xs[self.xs.len() - 1]
    }

    /// Number of breakpoints.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Evaluate the table at `x`.
    ///
    /// Locates the containing segment (upper-edge `<=` comparisons, first
    /// match in increasing order wins) and interpolates linearly between its
    /// endpoints. `x` outside `[lo, hi]` is an [`CaseError::OutOfRangeHeight`].
    pub fn at(&self, x: F) -> CaseResult<F> {
        if x < self.lo() || x > self.hi() {
            return Err(out_of_range(x, self.lo(), self.hi()));
        }
        let i = self
            .xs
            .windows(2)
            .position(|w| x <= w[1])
            .expect("x is inside the table domain");
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (v0, v1) = (self.values[i], self.values[i + 1]);
        Ok(v0 + (x - x0) * (v1 - v0) / (x1 - x0))
    }
}

fn out_of_range<F: Float>(x: F, lo: F, hi: F) -> CaseError {
    CaseError::OutOfRangeHeight {
        target: x.to_f64().unwrap_or(f64::NAN),
        lo: lo.to_f64().unwrap_or(f64::NAN),
        hi: hi.to_f64().unwrap_or(f64::NAN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    fn two_segment_table() -> BreakpointTable<f64> {
        BreakpointTable::new(&[(0.0, 299.0), (50.0, 301.5), (350.0, 302.5)]).unwrap()
    }

    #[test]
    fn breakpoints_are_reproduced_exactly() {
        let table = two_segment_table();
        assert_eq!(table.at(0.0).unwrap(), 299.0);
        assert_eq!(table.at(50.0).unwrap(), 301.5);
        assert_eq!(table.at(350.0).unwrap(), 302.5);
    }

    #[test]
    fn interior_points_lie_on_the_segment_line() {
        let table = two_segment_table();
        assert!(is_close!(table.at(25.0).unwrap(), 300.25));
        // Halfway through the second segment.
        assert!(is_close!(table.at(200.0).unwrap(), 302.0));
    }

    #[test]
    fn constant_table_is_flat() {
        let table = BreakpointTable::constant(10.0, 0.0, 5500.0).unwrap();
        assert_eq!(table.at(0.0).unwrap(), 10.0);
        assert_eq!(table.at(1234.5).unwrap(), 10.0);
        assert_eq!(table.at(5500.0).unwrap(), 10.0);
    }

    #[test]
    fn out_of_domain_is_an_error() {
        let table = two_segment_table();
        assert!(matches!(
            table.at(-1.0),
            Err(CaseError::OutOfRangeHeight { .. })
        ));
        let err = table.at(351.0).unwrap_err();
        assert_eq!(
            err,
            CaseError::OutOfRangeHeight {
                target: 351.0,
                lo: 0.0,
                hi: 350.0,
            }
        );
    }

    #[test]
    fn non_increasing_coordinates_are_rejected() {
        let err = BreakpointTable::new(&[(0.0, 1.0), (50.0, 2.0), (50.0, 3.0)]).unwrap_err();
        assert!(matches!(err, CaseError::InvalidConfiguration(_)));
    }

    #[test]
    fn single_point_is_rejected() {
        assert!(BreakpointTable::new(&[(0.0, 1.0)]).is_err());
    }
}
