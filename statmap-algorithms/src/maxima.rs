//! Local-maxima detection via a sliding-window maximum.
#![allow(clippy::float_cmp)]

use ndarray::{ArrayD, Dimension, IxDyn};

/// Detects local maxima of the above-threshold field.
///
/// A cell is a maximum iff its value equals the maximum of the in-bounds
/// radius-1 window around it, floored at `floor` (the cluster-forming
/// cutoff), so flat zero regions outside a cluster can never pull a
/// maximum below threshold. Every cell of a tied plateau is reported as a
/// separate maximum.
#[must_use]
pub fn local_maxima(values: &ArrayD<f64>, floor: f64) -> ArrayD<bool> {
    let mut out = ArrayD::from_elem(IxDyn(values.shape()), false);
    for (idx, &value) in values.indexed_iter() {
        let is_max = value == window_max(values, idx.slice()).max(floor);
        out[idx] = is_max;
    }
    out
}

/// Maximum over the in-bounds radius-1 box centered at `center`.
fn window_max(values: &ArrayD<f64>, center: &[usize]) -> f64 {
    let shape = values.shape();
    let lo: Vec<usize> = center.iter().map(|&c| c.saturating_sub(1)).collect();
    let hi: Vec<usize> = center
        .iter()
        .zip(shape)
        .map(|(&c, &n)| (c + 1).min(n - 1))
        .collect();

    let mut cursor = lo.clone();
    let mut best = f64::NEG_INFINITY;
    'cells: loop {
        best = best.max(values[IxDyn(&cursor)]);
        for d in (0..cursor.len()).rev() {
            if cursor[d] < hi[d] {
                cursor[d] += 1;
                cursor[d + 1..].copy_from_slice(&lo[d + 1..]);
                continue 'cells;
            }
        }
        break;
    }
    best
}
