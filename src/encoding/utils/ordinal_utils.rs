// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Unchecked per-window primitives shared by all encoders.
//!
//! FOR REASONS OF EFFICIENCY THESE FUNCTIONS DO NOT VALIDATE THEIR ARGUMENTS.
//! Preconditions are only asserted in debug builds; use the encoders in
//! [`approaches`](crate::encoding::approaches) for checked entry points.

/// Compute the Lehmer code (factoradic ranking) of the ordinal pattern formed by
/// `window[0], window[lag], ..., window[(order - 1) * lag]`.
///
/// For each position from first to penultimate, the number of later positions
/// holding a strictly smaller value is accumulated with descending factorial
/// place values:
///
/// ```text
/// code = c_0 * (order-1)! + c_1 * (order-2)! + ... + c_{order-2} * 1!
/// ```
///
/// Ties are never counted as inversions. The result lies in `0..order!`.
///
/// Preconditions: `2 <= order <= 20`, `lag >= 1` and
/// `window.len() > (order - 1) * lag`. Out-of-bounds windows panic.
#[inline]
pub fn encode_pattern(window: &[f64], order: usize, lag: usize) -> u64 {
    debug_assert!((2..=20).contains(&order), "order must be in 2..=20");
    debug_assert!(lag >= 1, "lag must be positive");
    debug_assert!(window.len() > (order - 1) * lag, "window too short");

    let relations = order - 1;
    let mut code: u64 = 0;
    for i in 0..relations {
        let x = window[i * lag];
        let mut count = 0u64;
        for j in (i + 1)..order {
            count += (x > window[j * lag]) as u64;
        }
        code = (code + count) * (relations - i) as u64;
    }
    code
}

/// Number of the first `order - 1` lag-spaced samples of `window` that are
/// strictly greater than the last one, `window[(order - 1) * lag]`.
///
/// This is the rightmost inversion count the lookup algorithm feeds into its
/// transition table. Same preconditions as [`encode_pattern`], except that
/// orders above 20 are fine.
#[inline]
pub fn inversion_count(window: &[f64], order: usize, lag: usize) -> usize {
    debug_assert!(order >= 2 && lag >= 1);
    let relations = order - 1;
    let last = window[relations * lag];
    let mut count = 0;
    for i in 0..relations {
        count += (window[i * lag] > last) as usize;
    }
    count
}
