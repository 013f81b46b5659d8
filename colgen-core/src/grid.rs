//! Cell-centered vertical grid.

use crate::errors::{CaseError, CaseResult};
use crate::timeseries::FloatValue;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// A uniformly spaced vertical grid of cell-center heights.
///
/// With `kmax` levels over a domain of height `zsize`, the spacing is
/// `dz = zsize / kmax` and level `k` sits at `z[k] = (k + 0.5) * dz`.
/// Heights are strictly increasing with `0 < z[0]` and `z[kmax-1] < zsize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalGrid {
    z: Array1<FloatValue>,
    dz: FloatValue,
    zsize: FloatValue,
}

impl VerticalGrid {
    pub fn new(kmax: usize, zsize: FloatValue) -> CaseResult<Self> {
        if kmax == 0 {
            return Err(CaseError::InvalidConfiguration(
                "ktot must be a positive integer".to_string(),
            ));
        }
        if !zsize.is_finite() || zsize <= 0.0 {
            return Err(CaseError::InvalidConfiguration(format!(
                "zsize must be a positive number, got {}",
                zsize
            )));
        }
        let dz = zsize / kmax as FloatValue;
        let z = Array1::from_iter((0..kmax).map(|k| (k as FloatValue + 0.5) * dz));
        Ok(Self { z, dz, zsize })
    }

    /// Cell-center heights, low to high.
    pub fn z(&self) -> &Array1<FloatValue> {
        &self.z
    }

    /// Grid spacing.
    pub fn dz(&self) -> FloatValue {
        self.dz
    }

    /// Domain height.
    pub fn zsize(&self) -> FloatValue {
        self.zsize
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.z.len()
    }

    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }

    /// Height of the topmost cell center.
    pub fn top(&self) -> FloatValue {
        self.z[self.z.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    #[test]
    fn cell_centers_follow_the_grid_law() {
        let grid = VerticalGrid::new(4, 200.0).unwrap();
        assert_eq!(grid.len(), 4);
        assert_eq!(grid.dz(), 50.0);
        assert_eq!(grid.z().to_vec(), vec![25.0, 75.0, 125.0, 175.0]);
    }

    #[test]
    fn heights_are_strictly_increasing_and_inside_the_domain() {
        let grid = VerticalGrid::new(37, 3300.0).unwrap();
        let z = grid.z();
        assert!(z.windows(2).into_iter().all(|w| w[0] < w[1]));
        assert!(z[0] > 0.0);
        assert!(grid.top() < grid.zsize());
        for (k, &zk) in z.iter().enumerate() {
            assert!(is_close!(zk, (k as f64 + 0.5) * 3300.0 / 37.0));
        }
    }

    #[test]
    fn zero_levels_is_rejected() {
        assert!(matches!(
            VerticalGrid::new(0, 200.0),
            Err(CaseError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn non_positive_domain_height_is_rejected() {
        assert!(VerticalGrid::new(4, 0.0).is_err());
        assert!(VerticalGrid::new(4, -100.0).is_err());
        assert!(VerticalGrid::new(4, f64::NAN).is_err());
    }
}
