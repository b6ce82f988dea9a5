// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::encoding::error::{OrdpatError, Result};

/// Smallest supported pattern order for every algorithm.
pub const MIN_ORDER: usize = 2;

/// Number of ordinal patterns a series of `n_in` samples yields for the given
/// order and lag: `max(0, n_in - (order - 1) * lag)`.
pub fn sequence_length(n_in: usize, order: usize, lag: usize) -> usize {
    let span = order.saturating_sub(1).saturating_mul(lag);
    n_in.saturating_sub(span)
}

/// Validate the common encoding arguments and return the number of patterns.
///
/// Checks are applied in this order: `order` in `2..=max_order`, `lag >= 1`,
/// at least one complete window in the input, and an output capacity `n_out`
/// of at least one word per pattern. Encoders producing multi-word codes check
/// the full width themselves afterwards.
pub fn check_encoding_args(
    n_in: usize,
    n_out: usize,
    order: usize,
    lag: usize,
    max_order: usize,
) -> Result<usize> {
    check_order(order, max_order)?;

    if lag < 1 {
        return Err(OrdpatError::InvalidLag { lag });
    }

    let len = sequence_length(n_in, order, lag);
    if len == 0 {
        // saturates for lags whose window span exceeds usize
        let span = (order - 1).saturating_mul(lag);
        return Err(OrdpatError::InputTooShort {
            len: n_in,
            required: span.saturating_add(1),
        });
    }

    if n_out < len {
        return Err(OrdpatError::OutputTooShort {
            len: n_out,
            required: len,
        });
    }

    Ok(len)
}

/// Reject orders outside `2..=max_order`.
pub fn check_order(order: usize, max_order: usize) -> Result<()> {
    if order < MIN_ORDER || order > max_order {
        return Err(OrdpatError::InvalidOrder {
            order,
            min: MIN_ORDER,
            max: max_order,
        });
    }
    Ok(())
}
