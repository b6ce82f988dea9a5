// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Errors returned by the encoders, the lookup-table builder and the
/// [`OrdinalEncoder`](crate::encoding::ordinal::OrdinalEncoder) facade.
///
/// Every encoder validates its arguments before touching the output buffer, so
/// an `Err` always means nothing has been written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrdpatError {
    /// Pattern order outside the range supported by the algorithm.
    #[error("invalid pattern order {order}; supported orders are {min}..={max}")]
    InvalidOrder { order: usize, min: usize, max: usize },

    /// A lookup table built for another order than the one requested.
    #[error("lookup table was built for order {table_order}, not for order {order}")]
    TableOrderMismatch { order: usize, table_order: usize },

    /// Time lag smaller than one.
    #[error("invalid time lag {lag}; the lag must be positive")]
    InvalidLag { lag: usize },

    /// The series does not contain even a single window.
    #[error("input too short: {len} samples, at least {required} required")]
    InputTooShort { len: usize, required: usize },

    /// The output buffer cannot hold all codes (in 64-bit words).
    #[error("output too short: capacity {len}, {required} required")]
    OutputTooShort { len: usize, required: usize },

    /// A user-supplied lookup table is malformed.
    #[error("invalid lookup table: {reason}")]
    InvalidTable { reason: String },

    /// Algorithm name not recognised.
    #[error("unknown algorithm: '{0}'")]
    UnknownAlgorithm(String),
}

impl OrdpatError {
    /// Numeric status code for binding layers: 1 invalid order (including a
    /// table/order mismatch), 2 invalid lag, 3 input too short, 4 output too
    /// short, 5 anything else. `0` is reserved for success.
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidOrder { .. } | Self::TableOrderMismatch { .. } => 1,
            Self::InvalidLag { .. } => 2,
            Self::InputTooShort { .. } => 3,
            Self::OutputTooShort { .. } => 4,
            Self::InvalidTable { .. } | Self::UnknownAlgorithm(_) => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, OrdpatError>;
