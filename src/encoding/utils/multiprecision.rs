// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-operation multi-precision arithmetic on 64-bit word arrays.
//!
//! Values are stored least significant word first: `words[0]` holds bits 0..64,
//! `words[1]` bits 64..128, and so forth, independent of the host endianness.
//! Only the three operations the encoders need are provided; this is not a
//! general-purpose bignum type.

/// Add `op` to the value stored in `dst`, propagating the carry word by word
/// until no overflow remains.
///
/// Returns `true` if a carry was left over after the last word, i.e. the
/// result did not fit into `dst.len()` words. Callers that size `dst`
/// correctly never observe `true`.
pub fn add_mp(dst: &mut [u64], op: u64) -> bool {
    let mut carry = op;
    for word in dst.iter_mut() {
        if carry == 0 {
            break;
        }
        let (sum, overflow) = word.overflowing_add(carry);
        *word = sum;
        carry = overflow as u64;
    }
    carry != 0
}

/// Subtract `op` from the value stored in `dst`, propagating the borrow word
/// by word until no underflow remains.
///
/// The caller guarantees that the result is non-negative. Returns `true` if
/// that contract was violated and a borrow was left over after the last word.
pub fn subtract_mp(dst: &mut [u64], op: u64) -> bool {
    let mut borrow = op;
    for word in dst.iter_mut() {
        if borrow == 0 {
            break;
        }
        let (diff, underflow) = word.overflowing_sub(borrow);
        *word = diff;
        borrow = underflow as u64;
    }
    borrow != 0
}

/// Multiply the `dst.len()`-word value in place by the 32-bit scalar `op`.
///
/// Words are processed from most significant toward least significant. Each
/// lower word is split into 32-bit halves so that no partial product exceeds
/// 64 bits; the high half's product is folded into the upper words via
/// [`add_mp`]. The result is silently truncated to `dst.len()` words, so
/// overflow wraps around modulo `2^(64 * dst.len())`.
pub fn multiply_mp(dst: &mut [u64], op: u32) {
    let n = dst.len();
    if n == 0 {
        return;
    }
    let op = op as u64;
    dst[n - 1] = dst[n - 1].wrapping_mul(op);

    for i in (0..n - 1).rev() {
        let word = dst[i];
        let high = (word >> 32) * op;
        dst[i] = (word & 0xFFFF_FFFF) * op;

        add_mp(&mut dst[i..], high << 32);
        add_mp(&mut dst[i + 1..], high >> 32);
    }
}

/// Growable non-negative integer built on the word-array kernel.
///
/// Used where the required width is not known up front, e.g. when computing
/// `order!` for [`pattern_width`](super::factorial::pattern_width).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MpUint {
    words: Vec<u64>,
}

impl MpUint {
    /// A value of `width` zero words.
    pub fn zeros(width: usize) -> Self {
        Self {
            words: vec![0; width],
        }
    }

    /// A single-word value, padded with zero words to `width` (at least 1).
    pub fn from_u64(value: u64, width: usize) -> Self {
        let mut words = vec![0; width.max(1)];
        words[0] = value;
        Self { words }
    }

    pub fn from_words(words: Vec<u64>) -> Self {
        Self { words }
    }

    /// All words, including leading zero words.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Number of allocated words.
    pub fn width(&self) -> usize {
        self.words.len()
    }

    /// Number of words up to and including the most significant non-zero one.
    pub fn significant_words(&self) -> usize {
        self.words
            .iter()
            .rposition(|&w| w != 0)
            .map_or(0, |pos| pos + 1)
    }

    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Append a zero word so the value can grow.
    pub fn grow(&mut self) {
        self.words.push(0);
    }

    /// See [`add_mp`]. Returns `true` on carry out of the top word.
    pub fn add(&mut self, op: u64) -> bool {
        add_mp(&mut self.words, op)
    }

    /// See [`subtract_mp`]. Returns `true` on borrow out of the top word.
    pub fn subtract(&mut self, op: u64) -> bool {
        subtract_mp(&mut self.words, op)
    }

    /// See [`multiply_mp`]. Truncates to the current width.
    pub fn multiply(&mut self, op: u32) {
        multiply_mp(&mut self.words, op);
    }

    pub fn into_words(self) -> Vec<u64> {
        self.words
    }
}
