// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Shared building blocks of the encoders: multi-precision kernel, factorial
// and width oracle, permutation enumerator, unchecked pattern primitives,
// argument validation and the overlap ring buffer.

pub mod factorial;
pub mod inversion_ring;
pub mod multiprecision;
pub mod ordinal_utils;
pub mod permutation;
pub mod validation;

pub use factorial::{factorial, pattern_width, pattern_word_size};
pub use inversion_ring::InversionRing;
pub use multiprecision::{MpUint, add_mp, multiply_mp, subtract_mp};
pub use ordinal_utils::{encode_pattern, inversion_count};
pub use permutation::{next_perm, pattern_table};
pub use validation::{check_encoding_args, sequence_length};
