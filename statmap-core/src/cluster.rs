//! Cluster, local-maximum and summary records.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A local maximum of the statistic field inside one cluster.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocalMaximum {
    /// Physical-space coordinate (grid index mapped through the transform).
    pub coordinate: Vec<f64>,
    /// Statistic value at the maximum.
    pub zscore: f64,
    /// Uncorrected p-value (survival function of the zscore).
    pub pvalue: f64,
    /// FDR step-up corrected p-value over all masked voxels.
    pub fdr_pvalue: f64,
    /// Voxel-level family-wise corrected p-value, when enabled.
    pub fwer_pvalue: Option<f64>,
}

/// A connected group of above-threshold cells.
///
/// Maxima are sorted by descending statistic value; equal values keep
/// detection order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cluster {
    /// Number of cells in the cluster.
    pub size: usize,
    /// Local maxima, strongest first.
    pub maxima: Vec<LocalMaximum>,
    /// Cluster-level corrected p-value (empirical, from the size-maximum
    /// null), when enabled.
    pub fwer_pvalue: Option<f64>,
    /// Cluster-level uncorrected p-value (empirical, from the size null),
    /// when enabled.
    pub pvalue: Option<f64>,
}

impl Cluster {
    /// Returns the strongest local maximum, if any.
    #[must_use]
    pub fn peak(&self) -> Option<&LocalMaximum> {
        self.maxima.first()
    }
}

/// Summary of one analysis run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisInfo {
    /// Number of cells inside the mask.
    pub n_voxels: usize,
    /// Cluster-forming threshold on the statistic scale.
    pub threshold_z: f64,
    /// Uncorrected p-value of the threshold.
    pub threshold_p: f64,
    /// Bonferroni-corrected p-value of the threshold.
    pub threshold_pcorr: f64,
}
