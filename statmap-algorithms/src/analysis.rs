//! Cluster-level analysis of a statistical map.

use ndarray::{ArrayD, Dimension, Zip};
use rayon::prelude::*;

use statmap_core::{
    AnalysisInfo, Cluster, Error, GridTransform, HeightControl, LocalMaximum, NullDistributions,
    Result, VoxelNull,
};

use crate::corrections::{
    bonferroni_pvalues, empirical_pvalue, empirical_pvalues, fdr_pvalues, survival,
};
use crate::height::height_threshold;
use crate::labeling::{component_sizes, label_components};
use crate::maxima::local_maxima;

/// A local maximum as detected on the grid, before cluster assembly.
struct Detection {
    index: Vec<usize>,
    label: u32,
    zscore: f64,
    fdr_pvalue: f64,
}

/// Runs the full cluster-level analysis of a statistical map.
///
/// Thresholds the masked field according to `height_control`, extracts
/// connected components of above-threshold cells (full neighborhood
/// connectivity), and attaches uncorrected, FDR-corrected, and family-wise
/// corrected significance values to the local maxima of each component
/// with at least `cluster_threshold` cells, plus cluster-level p-values
/// from the null distributions in `nulls`.
///
/// Clusters are returned sorted by descending size; within each cluster,
/// maxima are sorted by descending statistic value. An empty cluster list
/// is a normal outcome, not an error. The inputs are only borrowed for the
/// duration of the call and are never mutated.
///
/// # Errors
/// Returns [`Error::ShapeMismatch`] if the statistic field and mask grids
/// disagree.
pub fn cluster_stats<T>(
    stat_map: &ArrayD<f64>,
    mask: &ArrayD<bool>,
    transform: &T,
    threshold: f64,
    height_control: HeightControl,
    cluster_threshold: usize,
    nulls: &NullDistributions,
) -> Result<(Vec<Cluster>, AnalysisInfo)>
where
    T: GridTransform + Sync + ?Sized,
{
    if stat_map.shape() != mask.shape() {
        return Err(Error::ShapeMismatch {
            stat: stat_map.shape().to_vec(),
            mask: mask.shape().to_vec(),
        });
    }

    // Masked statistic values, raster order.
    let masked_values: Vec<f64> = stat_map
        .iter()
        .zip(mask.iter())
        .filter_map(|(&v, &m)| m.then_some(v))
        .collect();
    let n_voxels = masked_values.len();

    let threshold_z = height_threshold(&masked_values, height_control, threshold);
    let threshold_p = survival(threshold_z);
    let info = AnalysisInfo {
        n_voxels,
        threshold_z,
        threshold_p,
        threshold_pcorr: (threshold_p * n_voxels as f64).min(1.0),
    };

    // Above-threshold set, restricted to the mask so masked-out cells
    // never enter labeling even for negative cutoffs.
    let above = Zip::from(stat_map)
        .and(mask)
        .map_collect(|&v, &m| m && v > threshold_z);
    if !above.iter().any(|&a| a) {
        return Ok((Vec::new(), info));
    }
    let above_values = Zip::from(stat_map)
        .and(&above)
        .map_collect(|&v, &a| if a { v } else { 0.0 });

    let (labels, n_labels) = label_components(&above);
    let sizes = component_sizes(&labels, n_labels);
    let maxima_mask = local_maxima(&above_values, threshold_z);

    // FDR p-values over all masked voxels, sliced to maxima positions.
    let fdr_all = fdr_pvalues(&masked_values);
    let mut detections: Vec<Detection> = Vec::new();
    let mut masked_pos = 0usize;
    for (((idx, &m), &is_max), (&label, &zscore)) in mask
        .indexed_iter()
        .zip(maxima_mask.iter())
        .zip(labels.iter().zip(above_values.iter()))
    {
        if m {
            if is_max && label > 0 {
                detections.push(Detection {
                    index: idx.slice().to_vec(),
                    label,
                    zscore,
                    fdr_pvalue: fdr_all[masked_pos],
                });
            }
            masked_pos += 1;
        }
    }

    // Detection (raster) order per component.
    let mut per_label: Vec<Vec<usize>> = vec![Vec::new(); n_labels + 1];
    for (i, detection) in detections.iter().enumerate() {
        per_label[detection.label as usize].push(i);
    }

    // Components are independent; assemble them in parallel, collected in
    // label order so the result is identical to a sequential pass.
    let mut clusters: Vec<Cluster> = (1..=n_labels)
        .into_par_iter()
        .filter_map(|k| {
            let size = sizes[k];
            if size < cluster_threshold {
                return None;
            }

            let mut members: Vec<&Detection> =
                per_label[k].iter().map(|&i| &detections[i]).collect();
            // Stable: equal statistics keep detection order.
            members.sort_by(|a, b| b.zscore.total_cmp(&a.zscore));

            let zscores: Vec<f64> = members.iter().map(|d| d.zscore).collect();
            let pvalues: Vec<f64> = zscores.iter().map(|&z| survival(z)).collect();
            let fwer_pvalues: Vec<Option<f64>> = match &nulls.zmax {
                VoxelNull::Bonferroni => bonferroni_pvalues(&pvalues, n_voxels)
                    .into_iter()
                    .map(Some)
                    .collect(),
                VoxelNull::Empirical(reference) => empirical_pvalues(&zscores, reference)
                    .into_iter()
                    .map(Some)
                    .collect(),
                VoxelNull::Disabled => vec![None; members.len()],
            };

            let maxima = members
                .iter()
                .zip(pvalues)
                .zip(fwer_pvalues)
                .map(|((detection, pvalue), fwer_pvalue)| LocalMaximum {
                    coordinate: transform.coordinate(&detection.index),
                    zscore: detection.zscore,
                    pvalue,
                    fdr_pvalue: detection.fdr_pvalue,
                    fwer_pvalue,
                })
                .collect();

            Some(Cluster {
                size,
                maxima,
                fwer_pvalue: nulls
                    .smax
                    .as_deref()
                    .map(|reference| empirical_pvalue(size as f64, reference)),
                pvalue: nulls
                    .s
                    .as_deref()
                    .map(|reference| empirical_pvalue(size as f64, reference)),
            })
        })
        .collect();

    // Canonical order: descending size, ties keep label order.
    clusters.sort_by(|a, b| b.size.cmp(&a.size));

    Ok((clusters, info))
}
