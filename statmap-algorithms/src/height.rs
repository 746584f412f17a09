//! Cluster-forming threshold policies.

use statmap_core::HeightControl;

use crate::corrections::{fdr_threshold, inverse_survival};

/// Converts a control mode and level into a cutoff on the statistic scale.
///
/// `masked_values` are the statistic values inside the mask; they drive the
/// FDR procedure and the Bonferroni voxel count. For
/// [`HeightControl::None`] the level is already a statistic-scale value and
/// is returned verbatim.
#[must_use]
pub fn height_threshold(
    masked_values: &[f64],
    height_control: HeightControl,
    threshold: f64,
) -> f64 {
    match height_control {
        HeightControl::Fpr => inverse_survival(threshold),
        HeightControl::Fdr => fdr_threshold(masked_values, threshold),
        HeightControl::Bonferroni => {
            if masked_values.is_empty() {
                // Empty mask: nothing can pass.
                return f64::INFINITY;
            }
            inverse_survival(threshold / masked_values.len() as f64)
        }
        HeightControl::None => threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fpr_is_inverse_survival() {
        let z = height_threshold(&[], HeightControl::Fpr, 0.05);
        assert_relative_eq!(z, 1.644_853_626_951_472, epsilon = 1e-6);
    }

    #[test]
    fn test_bonferroni_divides_by_voxel_count() {
        let values = vec![0.0; 100];
        let z = height_threshold(&values, HeightControl::Bonferroni, 0.05);
        assert_relative_eq!(z, inverse_survival(0.0005), epsilon = 1e-12);
    }

    #[test]
    fn test_bonferroni_empty_mask() {
        assert_eq!(
            height_threshold(&[], HeightControl::Bonferroni, 0.05),
            f64::INFINITY
        );
    }

    #[test]
    fn test_fdr_delegates() {
        let values = [4.0, 3.5, 3.0, 2.5, 2.0];
        assert_eq!(
            height_threshold(&values, HeightControl::Fdr, 0.05),
            fdr_threshold(&values, 0.05)
        );
    }

    #[test]
    fn test_none_is_verbatim() {
        assert_eq!(height_threshold(&[1.0], HeightControl::None, 3.25), 3.25);
        assert_eq!(height_threshold(&[], HeightControl::None, -1.0), -1.0);
    }
}
