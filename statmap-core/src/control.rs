//! Height-control policy for the cluster-forming threshold.

use std::str::FromStr;

use crate::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interpretation of the cluster-forming threshold.
///
/// For [`Fpr`](HeightControl::Fpr), [`Fdr`](HeightControl::Fdr) and
/// [`Bonferroni`](HeightControl::Bonferroni) the threshold is a p-value;
/// for [`None`](HeightControl::None) it is already on the statistic scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HeightControl {
    /// Voxel-wise false positive rate: inverse survival of the threshold
    /// under the standard normal.
    #[default]
    Fpr,
    /// Benjamini-Hochberg false discovery rate over the masked voxels.
    Fdr,
    /// Family-wise control: inverse survival of `threshold / n_voxels`.
    Bonferroni,
    /// No control; the threshold is used verbatim.
    None,
}

impl FromStr for HeightControl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fpr" => Ok(Self::Fpr),
            "fdr" => Ok(Self::Fdr),
            "bonferroni" => Ok(Self::Bonferroni),
            "none" => Ok(Self::None),
            other => Err(Error::Config(format!(
                "unknown height control '{other}' (expected fpr|fdr|bonferroni|none)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_modes() {
        assert_eq!("fpr".parse::<HeightControl>().unwrap(), HeightControl::Fpr);
        assert_eq!("fdr".parse::<HeightControl>().unwrap(), HeightControl::Fdr);
        assert_eq!(
            "bonferroni".parse::<HeightControl>().unwrap(),
            HeightControl::Bonferroni
        );
        assert_eq!(
            "none".parse::<HeightControl>().unwrap(),
            HeightControl::None
        );
    }

    #[test]
    fn test_parse_unknown_mode_is_config_error() {
        let err = "fwe".parse::<HeightControl>().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("fwe"));
    }
}
