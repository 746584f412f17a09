//! statmap-algorithms: Cluster-level analysis of statistical maps.
//!
//! This crate provides the analysis pipeline:
//! - **corrections** - FDR threshold / p-values, Bonferroni, empirical nulls
//! - **height** - cluster-forming threshold policies
//! - **labeling** - union-find connected components, full connectivity
//! - **maxima** - sliding-window local maxima detection
//! - **analysis** - the `cluster_stats` orchestration
//!
#![warn(missing_docs)]

mod analysis;
pub mod corrections;
mod height;
mod labeling;
mod maxima;

pub use analysis::cluster_stats;
pub use corrections::{
    bonferroni_pvalues, empirical_pvalue, empirical_pvalues, fdr_pvalues, fdr_threshold,
    inverse_survival, survival,
};
pub use height::height_threshold;
pub use labeling::{component_sizes, label_components};
pub use maxima::local_maxima;

// Re-export core types
pub use statmap_core::{
    AffineTransform, AnalysisInfo, Cluster, Error, GridTransform, HeightControl, IdentityTransform,
    LocalMaximum, NullDistributions, Result, VoxelNull,
};
