//! Null-distribution configuration for corrected significance values.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reference distribution for voxel-level family-wise correction.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VoxelNull {
    /// Bonferroni correction over the masked voxel count.
    #[default]
    Bonferroni,
    /// Empirical null of voxel-maximum statistics (e.g. from permutations).
    Empirical(Vec<f64>),
    /// No voxel-level family-wise correction.
    Disabled,
}

/// Null distributions enabling the optional corrected p-values.
///
/// Each entry independently enables one correction; the defaults are the
/// resolved per-call policy, so a freshly built value carries no state from
/// any previous analysis. The engine only ever reads this configuration.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NullDistributions {
    /// Voxel-maximum null; defaults to Bonferroni correction.
    pub zmax: VoxelNull,
    /// Cluster-size-maximum null (corrected cluster p-values); disabled by
    /// default.
    pub smax: Option<Vec<f64>>,
    /// Cluster-size null (uncorrected cluster p-values); disabled by
    /// default.
    pub s: Option<Vec<f64>>,
}

impl NullDistributions {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the voxel-maximum null.
    #[must_use]
    pub fn with_zmax(mut self, zmax: VoxelNull) -> Self {
        self.zmax = zmax;
        self
    }

    /// Sets an empirical voxel-maximum null.
    #[must_use]
    pub fn with_empirical_zmax(mut self, values: Vec<f64>) -> Self {
        self.zmax = VoxelNull::Empirical(values);
        self
    }

    /// Sets the cluster-size-maximum null.
    #[must_use]
    pub fn with_smax(mut self, values: Vec<f64>) -> Self {
        self.smax = Some(values);
        self
    }

    /// Sets the cluster-size null.
    #[must_use]
    pub fn with_s(mut self, values: Vec<f64>) -> Self {
        self.s = Some(values);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve_spec_policy() {
        let nulls = NullDistributions::new();
        assert_eq!(nulls.zmax, VoxelNull::Bonferroni);
        assert_eq!(nulls.smax, None);
        assert_eq!(nulls.s, None);
    }

    #[test]
    fn test_builder() {
        let nulls = NullDistributions::new()
            .with_empirical_zmax(vec![1.0, 2.0])
            .with_smax(vec![10.0])
            .with_s(vec![5.0]);
        assert_eq!(nulls.zmax, VoxelNull::Empirical(vec![1.0, 2.0]));
        assert_eq!(nulls.smax, Some(vec![10.0]));
        assert_eq!(nulls.s, Some(vec![5.0]));
    }
}
