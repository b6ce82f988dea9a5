// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::encoding::error::{OrdpatError, Result};
use crate::encoding::utils::factorial::{MAX_MP_ORDER, pattern_width};
use crate::encoding::utils::inversion_ring::InversionRing;
use crate::encoding::utils::multiprecision::{add_mp, multiply_mp};
use crate::encoding::utils::validation::check_encoding_args;

/// Largest order accepted by [`encode_overlap_mp`].
pub const MAX_ORDER: usize = MAX_MP_ORDER;

/// Encode `input` into ordinal pattern codes with the 'overlap_mp' algorithm.
///
/// Works exactly like [`encode_overlap`](super::overlap::encode_overlap) but
/// accumulates every code with multi-precision arithmetic, so orders up to 255
/// are supported. Each code occupies `width = pattern_width(order)` consecutive
/// words of `out`, least significant word first; for orders up to 20 the width
/// is 1 and the output equals the single-word encoders.
///
/// `out` must hold at least `width * (input.len() - (order - 1) * lag)` words.
/// Returns the number of codes (not words) written.
pub fn encode_overlap_mp(
    input: &[f64],
    out: &mut [u64],
    order: usize,
    lag: usize,
) -> Result<usize> {
    let (len, width) = check_mp_args(input.len(), out.len(), order, lag)?;
    let mut ring = InversionRing::new(order, lag);
    Ok(run(input, &mut out[..len * width], order, width, &mut ring))
}

/// Same as [`encode_overlap_mp`], but reuses a caller-owned ring buffer.
/// The ring is reset to `order` and `lag` before use.
pub fn encode_overlap_mp_with_ring(
    input: &[f64],
    out: &mut [u64],
    order: usize,
    lag: usize,
    ring: &mut InversionRing,
) -> Result<usize> {
    let (len, width) = check_mp_args(input.len(), out.len(), order, lag)?;
    ring.reset(order, lag);
    Ok(run(input, &mut out[..len * width], order, width, ring))
}

fn check_mp_args(n_in: usize, n_out: usize, order: usize, lag: usize) -> Result<(usize, usize)> {
    // capacity is checked below against the full code width
    let len = check_encoding_args(n_in, usize::MAX, order, lag, MAX_ORDER)?;
    let width = pattern_width(order);
    let required = len * width;
    if n_out < required {
        return Err(OrdpatError::OutputTooShort {
            len: n_out,
            required,
        });
    }
    Ok((len, width))
}

fn run(
    input: &[f64],
    out: &mut [u64],
    order: usize,
    width: usize,
    ring: &mut InversionRing,
) -> usize {
    let relations = order - 1;
    ring.prime(input);

    for (t, code) in out.chunks_exact_mut(width).enumerate() {
        code.fill(0);
        ring.step(&input[t..], |i, count| {
            if i > 0 {
                multiply_mp(code, (relations - i + 1) as u32);
            }
            add_mp(code, count as u64);
        });
    }
    out.len() / width
}
