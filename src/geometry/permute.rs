//! Triangle-strip vertex reordering between the tier-2 and tier-1 winding
//! conventions.
//!
//! Tier-2 stores strip vertices in "advanced" order; tier-1 and tier-0.5
//! expect them as `0`, ascending odd indices, then descending even indices.
//! For `N = 6` that is `[0, 1, 3, 5, 4, 2]`.

use crate::document::model::Document;

/// Index sequence `seq` such that `legacy[k] = advanced[seq[k]]`.
///
/// Returns an empty sequence for `n == 0`.
pub fn legacy_vertex_order(n: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }

    let mut seq = Vec::with_capacity(n);
    seq.push(0);

    let even_bound = (n / 2) * 2;
    seq.extend((1..even_bound).step_by(2));

    let desc_start = ((n - 1) / 2) * 2;
    seq.extend((1..=desc_start).rev().step_by(2));

    debug_assert!(
        is_permutation(&seq, n),
        "legacy vertex order for n={n} is not a bijection: {seq:?}"
    );
    seq
}

/// True when `seq` contains every index in `0..n` exactly once.
pub fn is_permutation(seq: &[usize], n: usize) -> bool {
    if seq.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &i in seq {
        if i >= n || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}

/// Inverse of a permutation: `inv[seq[k]] = k`.
pub fn inverse_permutation(seq: &[usize]) -> Vec<usize> {
    let mut inv = vec![0; seq.len()];
    for (k, &i) in seq.iter().enumerate() {
        inv[i] = k;
    }
    inv
}

/// Reorder `items` in place so that `new[k] = old[seq[k]]`.
///
/// # Panics
///
/// Panics if `seq` is not a permutation of `0..items.len()`. Callers only
/// pass sequences from [`legacy_vertex_order`] or its inverse, so this is
/// an internal logic defect rather than bad input.
pub fn apply_permutation<T: Clone>(items: &mut [T], seq: &[usize]) {
    assert!(
        is_permutation(seq, items.len()),
        "permutation of length {} does not match {} items",
        seq.len(),
        items.len()
    );
    let old = items.to_vec();
    for (slot, &src) in items.iter_mut().zip(seq) {
        *slot = old[src].clone();
    }
}

/// Reorder every draw command from advanced to legacy order.
///
/// Commands without vertices are left alone. Returns the number of commands
/// that were reordered.
pub fn fix_vertex_order(document: &mut Document) -> usize {
    let mut reordered = 0;
    for shape in &mut document.shapes {
        for command in &mut shape.commands {
            let n = command.vertices.len();
            if n == 0 {
                continue;
            }
            apply_permutation(&mut command.vertices, &legacy_vertex_order(n));
            reordered += 1;
        }
    }
    reordered
}

/// Undo [`fix_vertex_order`], restoring advanced order.
pub fn restore_advanced_order(document: &mut Document) -> usize {
    let mut restored = 0;
    for shape in &mut document.shapes {
        for command in &mut shape.commands {
            let n = command.vertices.len();
            if n == 0 {
                continue;
            }
            let inv = inverse_permutation(&legacy_vertex_order(n));
            apply_permutation(&mut command.vertices, &inv);
            restored += 1;
        }
    }
    restored
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/permute.rs"]
mod tests;
