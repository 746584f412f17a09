//! statmap-core: Core types for cluster-level analysis of statistical maps.
//!
//! This crate provides the foundational abstractions shared by the analysis
//! algorithms: the error taxonomy, the height-control policy, the
//! null-distribution configuration, the cluster/maximum/summary records,
//! and the grid-to-world transform trait.
//!

pub mod cluster;
pub mod control;
pub mod error;
pub mod nulls;
pub mod transform;

pub use cluster::{AnalysisInfo, Cluster, LocalMaximum};
pub use control::HeightControl;
pub use error::{Error, Result};
pub use nulls::{NullDistributions, VoxelNull};
pub use transform::{AffineTransform, GridTransform, IdentityTransform};
