//! # Single-Linkage Clustering
//!
//! $$
//! d(A,B)=\min_{a\in A,\ b\in B} d(a,b)
//! $$
//!
//! Agglomerative single-linkage over a distance matrix, producing the merge
//! sequence and the quasi-diagonal leaf ordering.

use ndarray::Array2;

/// One agglomeration step of the dendrogram.
///
/// Node ids follow the usual dendrogram convention: ids `0..n` are original
/// assets, and the merge recorded at position `k` creates cluster id `n + k`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MergeEvent {
  /// Id of the first merged cluster.
  pub left: usize,
  /// Id of the second merged cluster.
  pub right: usize,
  /// Single-linkage distance at which the merge occurred.
  pub distance: f64,
}

/// Single-linkage agglomeration over `dist`, returning `n - 1` merge events.
///
/// Candidate pairs are scanned in ascending index order and replaced only on
/// strictly smaller distance, so equidistant pairs always resolve to the
/// lowest pair and the merge sequence is fully deterministic.
pub fn single_linkage(dist: &Array2<f64>) -> Vec<MergeEvent> {
  let n = dist.nrows();
  if n < 2 {
    return Vec::new();
  }

  let mut d = dist.clone();
  let mut active = vec![true; n];
  let mut node_id: Vec<usize> = (0..n).collect();
  let mut events = Vec::with_capacity(n - 1);

  for step in 0..(n - 1) {
    let mut min_d = f64::INFINITY;
    let mut mi = 0;
    let mut mj = 0;

    for i in 0..n {
      if !active[i] {
        continue;
      }
      for j in (i + 1)..n {
        if !active[j] {
          continue;
        }
        if d[[i, j]] < min_d {
          min_d = d[[i, j]];
          mi = i;
          mj = j;
        }
      }
    }

    events.push(MergeEvent {
      left: node_id[mi],
      right: node_id[mj],
      distance: min_d,
    });
    node_id[mi] = n + step;
    active[mj] = false;

    // Lance-Williams update for single linkage: the merged cluster sits at
    // the minimum of its parents' distances to every other active cluster.
    for k in 0..n {
      if !active[k] || k == mi {
        continue;
      }
      let m = d[[mi, k]].min(d[[mj, k]]);
      d[[mi, k]] = m;
      d[[k, mi]] = m;
    }
  }

  events
}

/// Quasi-diagonal leaf ordering of the dendrogram.
///
/// Depth-first traversal emitting each merge's left subtree before its
/// right subtree; an explicit stack keeps the walk independent of tree
/// depth. The right child is pushed first so the left is popped first.
pub fn leaf_order(n: usize, events: &[MergeEvent]) -> Vec<usize> {
  if n == 0 {
    return Vec::new();
  }
  if events.is_empty() {
    return (0..n).collect();
  }

  let root = n + events.len() - 1;
  let mut order = Vec::with_capacity(n);
  let mut stack = vec![root];

  while let Some(node) = stack.pop() {
    if node < n {
      order.push(node);
    } else {
      let event = &events[node - n];
      stack.push(event.right);
      stack.push(event.left);
    }
  }

  order
}
