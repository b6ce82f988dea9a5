// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::multiprecision::MpUint;

/// Largest order whose codes fit into a single `u64`.
pub const MAX_NATIVE_ORDER: usize = 20;

/// Largest order supported by the multi-precision encoder.
pub const MAX_MP_ORDER: usize = 255;

const FACTORIALS: [u64; 21] = [
    1,
    1,
    2,
    6,
    24,
    120,
    720,
    5040,
    40320,
    362880,
    3628800,
    39916800,
    479001600,
    6227020800,
    87178291200,
    1307674368000,
    20922789888000,
    355687428096000,
    6402373705728000,
    121645100408832000,
    2432902008176640000,
];

/// Exact factorial of `x` for `x <= 20`, or `0` if `x!` does not fit into a `u64`.
pub fn factorial(x: usize) -> u64 {
    FACTORIALS.get(x).copied().unwrap_or(0)
}

/// Number of 64-bit words needed to store any pattern code of order `order`,
/// i.e. the width of `order! - 1`.
///
/// Supported orders are `2..=255`; `0` is returned otherwise. The factorial is
/// built incrementally in multi-precision form, always keeping one zero word on
/// top so that a product spilling into it is noticed and the value grown.
pub fn pattern_width(order: usize) -> usize {
    if !(2..=MAX_MP_ORDER).contains(&order) {
        return 0;
    }

    let mut fact = MpUint::from_u64(order as u64, 2);
    for k in (2..order).rev() {
        fact.multiply(k as u32);
        if fact.words()[fact.width() - 1] != 0 {
            fact.grow();
        }
    }

    // order! - 1 is the largest code
    fact.subtract(1);
    fact.significant_words()
}

/// Smallest native unsigned integer width in bits (8, 16, 32 or 64) that can
/// hold every code of order `order`, for `2 <= order <= 20`; `0` otherwise.
pub fn pattern_word_size(order: usize) -> usize {
    if !(2..=MAX_NATIVE_ORDER).contains(&order) {
        return 0;
    }
    let max_code = factorial(order) - 1;
    let bits = (u64::BITS - max_code.leading_zeros()) as usize;
    bits.next_power_of_two().max(8)
}
