// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # ordpat
//!
//! Extraction and encoding of ordinal patterns from time series.
//!
//! An ordinal pattern of order `m` describes the rank order of `m` samples
//! spaced `lag` steps apart. Each pattern is represented by its Lehmer code,
//! a unique integer in `0..m!`. Consumers derive permutation entropy and
//! related statistics from the code sequence.
//!
//! ## Quick Start
//!
//! ```rust
//! use ndarray::array;
//! use ordpat::encoding::{Algorithm, OrdinalEncoder};
//!
//! let series = array![4.0, 7.0, 9.0, 10.0, 6.0, 11.0, 3.0];
//! let encoder = OrdinalEncoder::with_algorithm(3, 1, Algorithm::Lookup).unwrap();
//! let codes = encoder.encode(&series).unwrap();
//! assert_eq!(codes.to_vec(), vec![0, 0, 3, 2, 3]);
//! ```
//!
//! ## Algorithms
//!
//! | Algorithm | Max order | Cost per pattern | Extra memory |
//! |-----------|-----------|------------------|--------------|
//! | Plain | 20 | `O(m²)` | none |
//! | Overlap | 20 | `O(m)` | `lag * (m - 2)` bytes |
//! | Overlap-MP | 255 | `O(m * width)` | `lag * (m - 2)` bytes |
//! | Lookup | 10 | `O(m)` + one table read | `m! * m` words |
//!
//! All four produce identical codes. Codes of orders above 20 do not fit into
//! a `u64` and are emitted as `pattern_width(m)` little-endian 64-bit words.
//!
//! ## Architecture
//!
//! 1. **Facade**: [`encoding::OrdinalEncoder`] over `ndarray` series
//! 2. **Algorithms**: slice-level encoders in [`encoding::approaches`]
//! 3. **Building blocks**: multi-precision kernel, permutation enumerator,
//!    factorial and width oracle, validation in [`encoding::utils`]
//! 4. **Test data**: the [`xorshift`] generator
//!
//! Argument errors are reported as [`encoding::OrdpatError`]. Diagnostics go
//! through the `tracing` facade; install a subscriber to see them.
//!
//! For a description of the algorithms see Berger S, Kravtsiv A, Schneider G,
//! Jordan D. *Teaching Ordinal Patterns to a Computer: Efficient Encoding
//! Algorithms Based on the Lehmer Code.* Entropy 2019; 21(10):1023.

pub mod encoding;
pub mod xorshift;

pub use encoding::utils::{factorial, pattern_width};
pub use encoding::{Algorithm, LookupTable, OrdinalEncoder, OrdpatError};
