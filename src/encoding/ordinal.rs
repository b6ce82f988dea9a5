// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, Array2, ArrayView1};
use tracing::debug;

use crate::encoding::approaches::{encode_lookup, encode_overlap, encode_overlap_mp, encode_plain};
use crate::encoding::error::{OrdpatError, Result};
use crate::encoding::lookup_table::{self, LookupTable};
use crate::encoding::utils::factorial::{MAX_MP_ORDER, MAX_NATIVE_ORDER, pattern_width};
use crate::encoding::utils::validation::{MIN_ORDER, check_encoding_args, check_order, sequence_length};

/// The encoding algorithms. All of them yield identical codes; they differ in
/// speed, memory use and the largest order they support.
///
/// | Algorithm | Max order | Remarks |
/// |-----------|-----------|---------|
/// | `Plain` | 20 | Reference, `O(order²)` per pattern |
/// | `Overlap` | 20 | Good general-purpose choice |
/// | `OverlapMp` | 255 | Multi-word codes for orders > 20 |
/// | `Lookup` | 10 | Fastest for small orders, needs `order! * order` words |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Plain,
    Overlap,
    OverlapMp,
    Lookup,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Plain,
        Algorithm::Overlap,
        Algorithm::OverlapMp,
        Algorithm::Lookup,
    ];

    /// Largest pattern order the algorithm supports.
    pub fn max_order(self) -> usize {
        match self {
            Algorithm::Plain | Algorithm::Overlap => MAX_NATIVE_ORDER,
            Algorithm::OverlapMp => MAX_MP_ORDER,
            Algorithm::Lookup => lookup_table::MAX_ORDER,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Plain => "plain",
            Algorithm::Overlap => "overlap",
            Algorithm::OverlapMp => "overlap_mp",
            Algorithm::Lookup => "lookup",
        }
    }

    /// Default choice for `order`: 'overlap' up to order 20, 'overlap_mp' above.
    pub fn auto(order: usize) -> Self {
        if order <= MAX_NATIVE_ORDER {
            Algorithm::Overlap
        } else {
            Algorithm::OverlapMp
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = OrdpatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(Algorithm::Plain),
            "overlap" => Ok(Algorithm::Overlap),
            "overlap_mp" | "overlap-mp" => Ok(Algorithm::OverlapMp),
            "lookup" => Ok(Algorithm::Lookup),
            _ => Err(OrdpatError::UnknownAlgorithm(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
enum Engine {
    Plain,
    Overlap,
    OverlapMp,
    Lookup(LookupTable),
}

/// Ordinal pattern encoder for `ndarray` time series.
///
/// Fixes the pattern order, time lag and algorithm once; the arguments are
/// validated on construction and, for the 'lookup' algorithm, the transition
/// table is built a single time and reused by every `encode` call. The encoder
/// is immutable and can be shared between threads.
///
/// ```rust
/// use ndarray::array;
/// use ordpat::encoding::ordinal::OrdinalEncoder;
///
/// let series = array![4.0, 7.0, 9.0, 10.0, 6.0, 11.0, 3.0];
/// let codes = OrdinalEncoder::new(3, 1).unwrap().encode(&series).unwrap();
/// assert_eq!(codes.to_vec(), vec![0, 0, 3, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct OrdinalEncoder {
    order: usize,
    lag: usize,
    width: usize,
    engine: Engine,
}

impl OrdinalEncoder {
    /// Encoder using the default algorithm for `order` (see [`Algorithm::auto`]).
    pub fn new(order: usize, lag: usize) -> Result<Self> {
        Self::with_algorithm(order, lag, Algorithm::auto(order))
    }

    /// Encoder using a specific algorithm.
    pub fn with_algorithm(order: usize, lag: usize, algorithm: Algorithm) -> Result<Self> {
        check_order(order, algorithm.max_order())?;
        if lag < 1 {
            return Err(OrdpatError::InvalidLag { lag });
        }

        let engine = match algorithm {
            Algorithm::Plain => Engine::Plain,
            Algorithm::Overlap => Engine::Overlap,
            Algorithm::OverlapMp => Engine::OverlapMp,
            Algorithm::Lookup => Engine::Lookup(LookupTable::new(order)?),
        };
        debug!(%algorithm, order, lag, "configured ordinal pattern encoder");

        Ok(Self {
            order,
            lag,
            width: pattern_width(order),
            engine,
        })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn lag(&self) -> usize {
        self.lag
    }

    pub fn algorithm(&self) -> Algorithm {
        match self.engine {
            Engine::Plain => Algorithm::Plain,
            Engine::Overlap => Algorithm::Overlap,
            Engine::OverlapMp => Algorithm::OverlapMp,
            Engine::Lookup(_) => Algorithm::Lookup,
        }
    }

    /// Number of 64-bit words per pattern code.
    pub fn pattern_width(&self) -> usize {
        self.width
    }

    /// The transition table, for the 'lookup' algorithm.
    pub fn table(&self) -> Option<&LookupTable> {
        match &self.engine {
            Engine::Lookup(table) => Some(table),
            _ => None,
        }
    }

    /// Number of patterns a series of `n_in` samples yields.
    pub fn sequence_length(&self, n_in: usize) -> usize {
        sequence_length(n_in, self.order, self.lag)
    }

    /// Encode a raw series into `out`, which must hold
    /// `pattern_width() * sequence_length(input.len())` words. Returns the
    /// number of patterns written.
    pub fn encode_into(&self, input: &[f64], out: &mut [u64]) -> Result<usize> {
        match &self.engine {
            Engine::Plain => encode_plain(input, out, self.order, self.lag),
            Engine::Overlap => encode_overlap(input, out, self.order, self.lag),
            Engine::OverlapMp => encode_overlap_mp(input, out, self.order, self.lag),
            Engine::Lookup(table) => encode_lookup(input, out, self.order, self.lag, table),
        }
    }

    /// Encode a series into single-word codes.
    ///
    /// Only available for orders up to 20; use [`encode_wide`](Self::encode_wide)
    /// for wider codes.
    pub fn encode(&self, series: &Array1<f64>) -> Result<Array1<u64>> {
        self.check_native_width()?;
        let input = contiguous(series.view());
        let len = self.check_len(input.len())?;

        let mut out = vec![0u64; len];
        self.encode_into(&input, &mut out)?;
        debug!(algorithm = %self.algorithm(), order = self.order, lag = self.lag, patterns = len, "encoded series");
        Ok(Array1::from(out))
    }

    /// Encode a series into codes of `pattern_width()` words each.
    ///
    /// Row `t` of the result holds the code of window `t`, least significant
    /// word first.
    pub fn encode_wide(&self, series: &Array1<f64>) -> Result<Array2<u64>> {
        let input = contiguous(series.view());
        let len = self.check_len(input.len())?;

        let mut out = vec![0u64; len * self.width];
        self.encode_into(&input, &mut out)?;
        debug!(algorithm = %self.algorithm(), order = self.order, lag = self.lag, patterns = len, width = self.width, "encoded series");
        Ok(Array2::from_shape_vec((len, self.width), out)
            .expect("output length matches patterns times width"))
    }

    /// Encode every row of `data` as an independent series.
    ///
    /// The result has one row per input row and `sequence_length(data.ncols())`
    /// columns. Only available for orders up to 20.
    pub fn encode_rows(&self, data: &Array2<f64>) -> Result<Array2<u64>> {
        self.check_native_width()?;
        let len = self.check_len(data.ncols())?;

        let mut out = vec![0u64; data.nrows() * len];
        for (row, codes) in data.rows().into_iter().zip(out.chunks_exact_mut(len)) {
            self.encode_into(&contiguous(row), codes)?;
        }
        debug!(algorithm = %self.algorithm(), order = self.order, lag = self.lag, rows = data.nrows(), patterns = len, "encoded rows");
        Ok(Array2::from_shape_vec((data.nrows(), len), out)
            .expect("output length matches rows times patterns"))
    }

    fn check_native_width(&self) -> Result<()> {
        if self.width > 1 {
            return Err(OrdpatError::InvalidOrder {
                order: self.order,
                min: MIN_ORDER,
                max: MAX_NATIVE_ORDER,
            });
        }
        Ok(())
    }

    fn check_len(&self, n_in: usize) -> Result<usize> {
        check_encoding_args(n_in, usize::MAX, self.order, self.lag, self.algorithm().max_order())
    }
}

fn contiguous(view: ArrayView1<'_, f64>) -> Cow<'_, [f64]> {
    match view.to_slice() {
        Some(slice) => Cow::Borrowed(slice),
        None => Cow::Owned(view.to_vec()),
    }
}
