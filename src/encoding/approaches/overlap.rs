// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::encoding::error::Result;
use crate::encoding::utils::factorial::MAX_NATIVE_ORDER;
use crate::encoding::utils::inversion_ring::InversionRing;
use crate::encoding::utils::validation::check_encoding_args;

/// Largest order accepted by [`encode_overlap`].
pub const MAX_ORDER: usize = MAX_NATIVE_ORDER;

/// Encode `input` into ordinal pattern codes with the 'overlap' algorithm.
///
/// Consecutive windows of the same lag phase share `order - 1` elements, so
/// their inversion counts are carried over in an [`InversionRing`] and each
/// step only compares the retained elements against the entering sample. The
/// cost per pattern is `O(order)`; the codes are bit-identical to
/// [`encode_plain`](super::plain::encode_plain).
///
/// Orders `2..=20` and lags `>= 1` are supported. `out` must hold at least
/// `input.len() - (order - 1) * lag` codes. Returns the number of codes written.
pub fn encode_overlap(input: &[f64], out: &mut [u64], order: usize, lag: usize) -> Result<usize> {
    let len = check_encoding_args(input.len(), out.len(), order, lag, MAX_ORDER)?;
    let mut ring = InversionRing::new(order, lag);
    Ok(run(input, &mut out[..len], order, &mut ring))
}

/// Same as [`encode_overlap`], but reuses a caller-owned ring buffer instead of
/// allocating one, which pays off when encoding many short series in a loop.
/// The ring is reset to `order` and `lag` before use.
pub fn encode_overlap_with_ring(
    input: &[f64],
    out: &mut [u64],
    order: usize,
    lag: usize,
    ring: &mut InversionRing,
) -> Result<usize> {
    let len = check_encoding_args(input.len(), out.len(), order, lag, MAX_ORDER)?;
    ring.reset(order, lag);
    Ok(run(input, &mut out[..len], order, ring))
}

fn run(input: &[f64], out: &mut [u64], order: usize, ring: &mut InversionRing) -> usize {
    let relations = order - 1;
    ring.prime(input);

    for (t, code) in out.iter_mut().enumerate() {
        let mut acc: u64 = 0;
        ring.step(&input[t..], |i, count| {
            // Horner form of sum(c_i * (relations - i)!)
            if i > 0 {
                acc *= (relations - i + 1) as u64;
            }
            acc += count as u64;
        });
        *code = acc;
    }
    out.len()
}
