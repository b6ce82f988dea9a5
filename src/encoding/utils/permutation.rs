// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array2;

use super::factorial::factorial;

/// Largest order for which [`pattern_table`] materialises all patterns.
pub const MAX_TABLE_ORDER: usize = 10;

/// Rewrite `tuple` in place into the next permutation in lexicographic order.
///
/// Returns `true` if no such permutation exists (the tuple is sorted in
/// descending order), in which case the tuple is left untouched. Starting from
/// an ascending tuple and calling this until it returns `true` visits all
/// `len!` permutations exactly once, e.g. for three elements:
///
/// ```text
/// (1, 2, 3) -> (1, 3, 2) -> (2, 1, 3) -> (2, 3, 1) -> (3, 1, 2) -> (3, 2, 1)
/// ```
///
/// All elements must be pairwise distinct; the resulting order is unspecified
/// otherwise. Slices with fewer than two elements have no successor.
pub fn next_perm<T: PartialOrd>(tuple: &mut [T]) -> bool {
    let len = tuple.len();
    if len < 2 {
        return true;
    }

    // Rightmost ascent: tuple[pivot] < tuple[pivot + 1]
    let mut pivot = len - 1;
    while pivot > 0 && tuple[pivot] < tuple[pivot - 1] {
        pivot -= 1;
    }
    if pivot == 0 {
        return true;
    }
    pivot -= 1;

    // Rightmost element larger than the pivot; exists since tuple[pivot + 1] is one
    let mut succ = len - 1;
    while succ != pivot && tuple[succ] < tuple[pivot] {
        succ -= 1;
    }

    tuple.swap(pivot, succ);
    tuple[pivot + 1..].reverse();
    false
}

/// All ordinal patterns of order `order` in rank representation.
///
/// Row `k` holds the ranks `1..=order` permuted into the `k`-th permutation in
/// lexicographic order, so row `k` is exactly the pattern with code `k`.
/// Returns `None` for orders outside `1..=10`.
pub fn pattern_table(order: usize) -> Option<Array2<f64>> {
    if !(1..=MAX_TABLE_ORDER).contains(&order) {
        return None;
    }
    let rows = factorial(order) as usize;
    let mut tuple: Vec<f64> = (1..=order).map(|r| r as f64).collect();
    let mut data: Vec<f64> = Vec::with_capacity(rows * order);

    loop {
        data.extend_from_slice(&tuple);
        if next_perm(&mut tuple) {
            break;
        }
    }

    Array2::from_shape_vec((rows, order), data).ok()
}
