//! Connected-component labeling over N-dimensional grids.
//!
//! Uses a union-find data structure over a raster scan of the grid, with
//! full neighborhood connectivity: cells adjacent by any face, edge, or
//! corner belong to the same component.

use ndarray::{ArrayD, Dimension, IxDyn};

/// Union-Find data structure for connected component detection.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    fn union(&mut self, x: usize, y: usize) {
        let px = self.find(x);
        let py = self.find(y);

        if px == py {
            return;
        }

        match self.rank[px].cmp(&self.rank[py]) {
            std::cmp::Ordering::Less => self.parent[px] = py,
            std::cmp::Ordering::Greater => self.parent[py] = px,
            std::cmp::Ordering::Equal => {
                self.parent[py] = px;
                self.rank[px] += 1;
            }
        }
    }
}

/// Neighbor offsets in `{-1, 0, 1}^D` that precede the center cell in
/// raster order (first nonzero component is -1).
fn preceding_offsets(ndim: usize) -> Vec<Vec<i64>> {
    let total = 3usize.pow(u32::try_from(ndim).expect("grid rank fits in u32"));
    let mut offsets = Vec::with_capacity(total / 2);
    for code in 0..total {
        let mut offset = vec![0i64; ndim];
        let mut c = code;
        for d in (0..ndim).rev() {
            offset[d] = (c % 3) as i64 - 1;
            c /= 3;
        }
        if offset.iter().find(|&&o| o != 0).is_some_and(|&o| o < 0) {
            offsets.push(offset);
        }
    }
    offsets
}

/// Labels connected components of the foreground.
///
/// Returns an integer label field (0 = background, 1..=K = components) and
/// the component count K. Components are numbered by the raster position
/// of their first cell.
#[must_use]
pub fn label_components(foreground: &ArrayD<bool>) -> (ArrayD<u32>, usize) {
    let shape = foreground.shape().to_vec();
    let ndim = shape.len();
    let flat: Vec<bool> = foreground.iter().copied().collect();
    let n = flat.len();

    // Row-major strides over the logical shape.
    let mut strides = vec![1usize; ndim];
    for d in (0..ndim.saturating_sub(1)).rev() {
        strides[d] = strides[d + 1] * shape[d + 1];
    }

    let offsets = preceding_offsets(ndim);
    let mut uf = UnionFind::new(n);

    for (cell, (idx, &fg)) in foreground.indexed_iter().enumerate() {
        if !fg {
            continue;
        }
        let index = idx.slice();
        'offsets: for offset in &offsets {
            let mut neighbor = 0usize;
            for d in 0..ndim {
                let pos = index[d] as i64 + offset[d];
                if pos < 0 || pos >= shape[d] as i64 {
                    continue 'offsets;
                }
                neighbor += pos as usize * strides[d];
            }
            if flat[neighbor] {
                uf.union(cell, neighbor);
            }
        }
    }

    let mut labels = vec![0u32; n];
    let mut root_label = vec![0u32; n];
    let mut n_labels = 0u32;
    for cell in 0..n {
        if flat[cell] {
            let root = uf.find(cell);
            if root_label[root] == 0 {
                n_labels += 1;
                root_label[root] = n_labels;
            }
            labels[cell] = root_label[root];
        }
    }

    let labels =
        ArrayD::from_shape_vec(IxDyn(&shape), labels).expect("label buffer matches grid shape");
    (labels, n_labels as usize)
}

/// Cell count per label; index 0 is the background.
#[must_use]
pub fn component_sizes(labels: &ArrayD<u32>, n_labels: usize) -> Vec<usize> {
    let mut sizes = vec![0usize; n_labels + 1];
    for &label in labels {
        sizes[label as usize] += 1;
    }
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3};

    fn grid_2d(rows: &[&[bool]]) -> ArrayD<bool> {
        let data: Vec<bool> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Array2::from_shape_vec((rows.len(), rows[0].len()), data)
            .unwrap()
            .into_dyn()
    }

    #[test]
    fn test_diagonal_cells_are_connected() {
        let fg = grid_2d(&[&[true, false], &[false, true]]);
        let (labels, n) = label_components(&fg);
        assert_eq!(n, 1);
        assert_eq!(labels[[0, 0]], 1);
        assert_eq!(labels[[1, 1]], 1);
    }

    #[test]
    fn test_separated_cells_are_distinct() {
        let fg = grid_2d(&[&[true, false, false], &[false, false, true]]);
        let (labels, n) = label_components(&fg);
        assert_eq!(n, 2);
        // Labels numbered by first raster occurrence.
        assert_eq!(labels[[0, 0]], 1);
        assert_eq!(labels[[1, 2]], 2);
    }

    #[test]
    fn test_corner_adjacency_in_3d() {
        let mut fg = Array3::from_elem((2, 2, 2), false);
        fg[[0, 0, 0]] = true;
        fg[[1, 1, 1]] = true;
        let (_, n) = label_components(&fg.into_dyn());
        assert_eq!(n, 1);
    }

    #[test]
    fn test_background_stays_zero() {
        let fg = grid_2d(&[&[false, true], &[false, false]]);
        let (labels, n) = label_components(&fg);
        assert_eq!(n, 1);
        assert_eq!(labels[[0, 0]], 0);
        assert_eq!(labels[[1, 0]], 0);
    }

    #[test]
    fn test_all_background() {
        let fg = grid_2d(&[&[false, false]]);
        let (labels, n) = label_components(&fg);
        assert_eq!(n, 0);
        assert!(labels.iter().all(|&l| l == 0));
    }

    #[test]
    fn test_component_sizes() {
        let fg = grid_2d(&[&[true, true, false, true]]);
        let (labels, n) = label_components(&fg);
        assert_eq!(n, 2);
        let sizes = component_sizes(&labels, n);
        assert_eq!(sizes, vec![1, 2, 1]);
    }
}
