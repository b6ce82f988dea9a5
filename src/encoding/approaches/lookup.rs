// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::encoding::error::{OrdpatError, Result};
use crate::encoding::lookup_table::{LookupTable, MAX_ORDER};
use crate::encoding::utils::ordinal_utils::{encode_pattern, inversion_count};
use crate::encoding::utils::validation::{MIN_ORDER, check_encoding_args};

/// Encode `input` into ordinal pattern codes with the 'lookup' algorithm.
///
/// The first `lag` patterns are encoded directly. Every later pattern follows
/// from the pattern `lag` samples earlier and the inversion count of the
/// entering sample against the `order - 1` retained ones, via a single read of
/// the transition `table`. Per pattern this costs `O(order)` comparisons and
/// one table access, at the price of `order! * order` words of table memory.
///
/// Orders `2..=10` and lags `>= 1` are supported. The table must have been
/// built for the same order; a mismatch is reported as
/// [`OrdpatError::TableOrderMismatch`]. Returns the number of codes written.
pub fn encode_lookup(
    input: &[f64],
    out: &mut [u64],
    order: usize,
    lag: usize,
    table: &LookupTable,
) -> Result<usize> {
    let len = check_encoding_args(input.len(), out.len(), order, lag, MAX_ORDER)?;
    if table.order() != order {
        return Err(OrdpatError::TableOrderMismatch {
            order,
            table_order: table.order(),
        });
    }
    run(input, &mut out[..len], order, lag, table.as_slice());
    Ok(len)
}

/// Variant of [`encode_lookup`] reading a raw table slice.
///
/// Only tables produced by
/// [`create_lookup_table`](crate::encoding::lookup_table::create_lookup_table)
/// for the same `order` yield meaningful codes; no other bijection between
/// patterns and codes is supported. A table that is too short or holds codes
/// `>= order!` makes this function panic. Use
/// [`check_lookup_table`](crate::encoding::lookup_table::check_lookup_table)
/// to validate foreign tables first.
pub fn encode_lookup_raw(
    input: &[f64],
    out: &mut [u64],
    order: usize,
    lag: usize,
    table: &[u64],
) -> Result<usize> {
    let len = check_encoding_args(input.len(), out.len(), order, lag, MAX_ORDER)?;
    debug_assert!(order >= MIN_ORDER);
    run(input, &mut out[..len], order, lag, table);
    Ok(len)
}

fn run(input: &[f64], out: &mut [u64], order: usize, lag: usize, table: &[u64]) {
    let len = out.len();
    let warm_up = lag.min(len);

    // no predecessor yet
    for t in 0..warm_up {
        out[t] = encode_pattern(&input[t..], order, lag);
    }

    for t in warm_up..len {
        let count = inversion_count(&input[t..], order, lag);
        let prior = out[t - lag] as usize;
        out[t] = table[prior * order + count];
    }
}
