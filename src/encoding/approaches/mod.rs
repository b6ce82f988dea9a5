// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod lookup;
pub mod overlap;
pub mod overlap_mp;
pub mod plain;

// Unified re-exports so users can import
// ordpat::encoding::approaches::* ergonomically.
pub use lookup::{encode_lookup, encode_lookup_raw};
pub use overlap::{encode_overlap, encode_overlap_with_ring};
pub use overlap_mp::{encode_overlap_mp, encode_overlap_mp_with_ring};
pub use plain::encode_plain;
