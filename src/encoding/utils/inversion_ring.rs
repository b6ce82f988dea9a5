// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Circular store of partial inversion counts for the overlap encoders.
///
/// Windows that start `lag` samples apart share all but one element, so the
/// series is split into `lag` phases and each phase keeps the inversion counts
/// of its active window. For a window `(x_0, ..., x_m)` the phase holds, for
/// every position `i < m - 1`, how many of `x_{i+1}, ..., x_{m-1}` are smaller
/// than `x_i`. Only comparisons against the entering sample `x_m` are needed to
/// complete the counts, which then shift down by one position for the window
/// `lag` steps later.
///
/// Counts never exceed `order - 1 <= 254` and are stored as `u8`. The buffer
/// can be reused across calls through [`InversionRing::reset`].
#[derive(Debug, Clone, Default)]
pub struct InversionRing {
    counts: Vec<u8>,
    order: usize,
    lag: usize,
    stride: usize,
    phase: usize,
}

impl InversionRing {
    /// A zeroed ring sized for `lag` phases of `order - 2` counts each.
    pub fn new(order: usize, lag: usize) -> Self {
        let mut ring = Self::default();
        ring.reset(order, lag);
        ring
    }

    /// Resize and zero the ring for another order and lag, keeping the
    /// allocation when it is large enough.
    pub fn reset(&mut self, order: usize, lag: usize) {
        debug_assert!(order >= 2 && lag >= 1);
        self.order = order;
        self.lag = lag;
        self.stride = order.saturating_sub(2);
        self.phase = 0;
        self.counts.clear();
        self.counts.resize(self.stride * lag, 0);
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn lag(&self) -> usize {
        self.lag
    }

    /// Number of counts kept, `lag * (order - 2)`.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Fill every phase with the inversion counts among the first `order - 1`
    /// elements of the first `lag` windows of `input`.
    ///
    /// `input` must contain at least one complete window.
    pub fn prime(&mut self, input: &[f64]) {
        let retained = self.order - 1;
        for phase in 0..self.lag {
            let counts = &mut self.counts[phase * self.stride..(phase + 1) * self.stride];
            for (i, count) in counts.iter_mut().enumerate() {
                let x = input[phase + i * self.lag];
                let mut c = 0u8;
                for j in (i + 1)..retained {
                    c += (x > input[phase + j * self.lag]) as u8;
                }
                *count = c;
            }
        }
        self.phase = 0;
    }

    /// Complete the inversion counts of the window starting at `window[0]`,
    /// reporting each full count to `digit(position, count)` from the leftmost
    /// position to the penultimate one, and move on to the next phase.
    ///
    /// Windows must be fed in series order, starting with the first window
    /// after [`prime`](Self::prime).
    #[inline]
    pub fn step<F: FnMut(usize, u8)>(&mut self, window: &[f64], mut digit: F) {
        let relations = self.order - 1;
        let lag = self.lag;
        let next = window[relations * lag];
        let start = self.phase * self.stride;
        let counts = &mut self.counts[start..start + self.stride];

        // the leftmost count leaves the ring
        let head = counts.first().copied().unwrap_or(0) + (window[0] > next) as u8;
        digit(0, head);

        for i in 1..relations {
            // the rightmost count has no earlier comparisons
            let carried = if i + 1 < relations { counts[i] } else { 0 };
            let count = carried + (window[i * lag] > next) as u8;
            counts[i - 1] = count;
            digit(i, count);
        }

        self.phase += 1;
        if self.phase == lag {
            self.phase = 0;
        }
    }
}
