//! Grid-to-world coordinate transforms.
//!
//! Transforms only annotate reported maxima; they never affect the
//! statistics themselves.

use ndarray::Array2;

use crate::error::{Error, Result};

/// Pure mapping from a grid index to physical coordinates.
pub trait GridTransform {
    /// Maps a grid index tuple to a physical-space coordinate.
    fn coordinate(&self, index: &[usize]) -> Vec<f64>;
}

impl<F> GridTransform for F
where
    F: Fn(&[usize]) -> Vec<f64>,
{
    fn coordinate(&self, index: &[usize]) -> Vec<f64> {
        self(index)
    }
}

/// Identity transform: physical coordinates equal grid indices.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTransform;

impl GridTransform for IdentityTransform {
    fn coordinate(&self, index: &[usize]) -> Vec<f64> {
        index.iter().map(|&i| i as f64).collect()
    }
}

/// Affine transform given as a homogeneous `(D + 1) x (D + 1)` matrix for a
/// `D`-dimensional grid.
#[derive(Debug, Clone, PartialEq)]
pub struct AffineTransform {
    matrix: Array2<f64>,
}

impl AffineTransform {
    /// Creates an affine transform from a homogeneous matrix.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the matrix is not square or has fewer
    /// than two rows.
    pub fn new(matrix: Array2<f64>) -> Result<Self> {
        if matrix.nrows() != matrix.ncols() || matrix.nrows() < 2 {
            return Err(Error::Config(format!(
                "affine matrix must be square and at least 2x2, got {}x{}",
                matrix.nrows(),
                matrix.ncols()
            )));
        }
        Ok(Self { matrix })
    }

    /// Number of spatial dimensions this transform maps.
    #[must_use]
    pub fn ndim(&self) -> usize {
        self.matrix.nrows() - 1
    }
}

impl GridTransform for AffineTransform {
    /// # Panics
    /// Panics if `index.len()` does not equal [`ndim`](Self::ndim).
    fn coordinate(&self, index: &[usize]) -> Vec<f64> {
        let ndim = self.ndim();
        assert_eq!(
            index.len(),
            ndim,
            "affine transform expects {ndim}-dimensional indices"
        );
        (0..ndim)
            .map(|row| {
                let translation = self.matrix[[row, ndim]];
                index
                    .iter()
                    .enumerate()
                    .fold(translation, |acc, (col, &i)| {
                        acc + self.matrix[[row, col]] * i as f64
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_identity() {
        let t = IdentityTransform;
        assert_eq!(t.coordinate(&[2, 3, 4]), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_closure_transform() {
        let t = |index: &[usize]| index.iter().map(|&i| 2.0 * i as f64).collect::<Vec<_>>();
        assert_eq!(t.coordinate(&[1, 2]), vec![2.0, 4.0]);
    }

    #[test]
    fn test_affine_scale_and_translate() {
        let t = AffineTransform::new(array![
            [2.0, 0.0, -1.0],
            [0.0, 3.0, 5.0],
            [0.0, 0.0, 1.0]
        ])
        .unwrap();
        let coord = t.coordinate(&[4, 2]);
        assert_relative_eq!(coord[0], 7.0);
        assert_relative_eq!(coord[1], 11.0);
    }

    #[test]
    fn test_affine_rejects_non_square() {
        let matrix = Array2::zeros((3, 4));
        assert!(AffineTransform::new(matrix).is_err());
    }
}
