// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use tracing::debug;

use crate::encoding::error::{OrdpatError, Result};
use crate::encoding::utils::factorial::factorial;
use crate::encoding::utils::ordinal_utils::encode_pattern;
use crate::encoding::utils::permutation::next_perm;
use crate::encoding::utils::validation::check_order;

/// Largest order for which a lookup table can be built. A table for order 11
/// would already occupy more than 3 GiB.
pub const MAX_ORDER: usize = 10;

/// Number of entries of the lookup table for `order`: `order! * order`.
/// Returns `0` for orders outside `2..=10`.
pub fn lookup_table_len(order: usize) -> usize {
    if !(2..=MAX_ORDER).contains(&order) {
        return 0;
    }
    factorial(order) as usize * order
}

/// Fill `table` with the transition table of the 'lookup' algorithm.
///
/// On success the first `order! * order` entries satisfy
///
/// ```text
/// table[code(x_0, ..., x_{order-1}) * order + inv] == code(x_1, ..., x_order)
/// ```
///
/// where `inv` is the number of `x_1, ..., x_{order-1}` greater than `x_order`.
/// Orders `2..=10` are supported; `table` must hold at least `order! * order`
/// entries.
///
/// The table is built by enumerating all `(order - 1)!` tails in lexicographic
/// order and, for each tail, appending a new element at every relative rank.
/// Because the successor code only depends on the relative order of the
/// retained elements and the new one, never on the leading element, the block
/// produced for one leading element is replicated for the other `order - 1`.
pub fn create_lookup_table(table: &mut [u64], order: usize) -> Result<()> {
    check_order(order, MAX_ORDER)?;

    let block = factorial(order) as usize;
    let required = block * order;
    if table.len() < required {
        return Err(OrdpatError::OutputTooShort {
            len: table.len(),
            required,
        });
    }

    // tail (2, 4, ..., 2 * (order - 1)); odd values rank the appended element
    let mut tuple: Vec<f64> = (1..=order).map(|k| 2.0 * k as f64).collect();
    let tails = factorial(order - 1) as usize;

    let mut pos = 0;
    for _ in 0..tails {
        // descending value, ascending inversion count
        for rank in (0..order).rev() {
            tuple[order - 1] = (2 * rank + 1) as f64;
            table[pos] = encode_pattern(&tuple, order, 1);
            pos += 1;
        }
        next_perm(&mut tuple[..order - 1]);
    }

    replicate_base_block(&mut table[..required], block);
    Ok(())
}

/// Copy the leading `block` entries over the remainder of `table`.
fn replicate_base_block(table: &mut [u64], block: usize) {
    let (base, rest) = table.split_at_mut(block);
    for chunk in rest.chunks_exact_mut(block) {
        chunk.copy_from_slice(base);
    }
}

/// Validate a lookup table for `order` that did not come from this crate.
///
/// The table must have exactly `order! * order` entries, all of which must be
/// valid codes below `order!`. This does not prove that the table encodes the
/// transitions [`create_lookup_table`] produces, only that using it cannot read
/// out of bounds.
pub fn check_lookup_table(table: &[u64], order: usize) -> Result<()> {
    check_order(order, MAX_ORDER)?;

    let patterns = factorial(order);
    let required = lookup_table_len(order);
    if table.len() != required {
        return Err(OrdpatError::InvalidTable {
            reason: format!(
                "expected {required} entries for order {order}, got {}",
                table.len()
            ),
        });
    }
    if let Some(pos) = table.iter().position(|&code| code >= patterns) {
        return Err(OrdpatError::InvalidTable {
            reason: format!(
                "entry {pos} holds code {} >= {patterns}",
                table[pos]
            ),
        });
    }
    Ok(())
}

/// Owned, immutable transition table for the 'lookup' algorithm.
///
/// Built once per order and shareable between any number of concurrent
/// [`encode_lookup`](crate::encoding::approaches::lookup::encode_lookup) calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    order: usize,
    table: Vec<u64>,
}

impl LookupTable {
    /// Build the table for `order` in `2..=10`.
    pub fn new(order: usize) -> Result<Self> {
        check_order(order, MAX_ORDER)?;
        let mut table = vec![0u64; lookup_table_len(order)];
        create_lookup_table(&mut table, order)?;
        debug!(order, entries = table.len(), "built ordinal pattern lookup table");
        Ok(Self { order, table })
    }

    /// Wrap a table obtained elsewhere after validating it with
    /// [`check_lookup_table`].
    pub fn from_vec(table: Vec<u64>, order: usize) -> Result<Self> {
        check_lookup_table(&table, order)?;
        Ok(Self { order, table })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.table
    }

    /// Code of the pattern following `code` when the entering sample is
    /// smaller than `inversions` of the retained ones.
    ///
    /// # Panics
    ///
    /// Panics if `code >= order!` or `inversions >= order`.
    pub fn successor(&self, code: u64, inversions: usize) -> u64 {
        assert!(inversions < self.order, "inversion count out of range");
        self.table[code as usize * self.order + inversions]
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.table
    }
}
