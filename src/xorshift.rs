// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic xorshift generator for reproducible synthetic test series.
//!
//! Not cryptographically secure. Every function is a pure function of its
//! seed and output length; no state survives between calls.

use ndarray::Array1;

/// The xorshift state following `x`, using the shift triple (13, 17, 5).
#[inline]
pub fn xorshift32(mut x: u32) -> u32 {
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    x
}

/// Fill `dst` with successive xorshift states. The first element is the
/// state immediately following `seed`, never the seed itself.
pub fn fill_uint32(dst: &mut [u32], seed: u32) {
    for (value, state) in dst.iter_mut().zip(XorShift32::new(seed)) {
        *value = state;
    }
}

/// Same as [`fill_uint32`], storing the values as `f64`.
pub fn fill_f64(dst: &mut [f64], seed: u32) {
    for (value, state) in dst.iter_mut().zip(XorShift32::new(seed)) {
        *value = state as f64;
    }
}

/// A series of `len` pseudo-random samples in `[0, 2^32)`.
pub fn random_series(len: usize, seed: u32) -> Array1<f64> {
    let mut data = vec![0.0; len];
    fill_f64(&mut data, seed);
    Array1::from(data)
}

/// Endless iterator over the xorshift states following a seed.
///
/// A zero seed is a fixed point of xorshift and yields only zeros.
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }
}

impl Iterator for XorShift32 {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.state = xorshift32(self.state);
        Some(self.state)
    }
}
