// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::encoding::error::Result;
use crate::encoding::utils::factorial::MAX_NATIVE_ORDER;
use crate::encoding::utils::ordinal_utils::encode_pattern;
use crate::encoding::utils::validation::check_encoding_args;

/// Largest order accepted by [`encode_plain`].
pub const MAX_ORDER: usize = MAX_NATIVE_ORDER;

/// Encode `input` into ordinal pattern codes with the 'plain' algorithm.
///
/// Every window is encoded independently by [`encode_pattern`], which costs
/// `O(order²)` comparisons per pattern. This is the reference all other
/// algorithms reproduce exactly.
///
/// Orders `2..=20` and lags `>= 1` are supported. `out` must hold at least
/// `input.len() - (order - 1) * lag` codes. Returns the number of codes written.
pub fn encode_plain(input: &[f64], out: &mut [u64], order: usize, lag: usize) -> Result<usize> {
    let len = check_encoding_args(input.len(), out.len(), order, lag, MAX_ORDER)?;

    for (t, code) in out[..len].iter_mut().enumerate() {
        *code = encode_pattern(&input[t..], order, lag);
    }
    Ok(len)
}
