// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ordpat::encoding::approaches::{
    encode_overlap, encode_overlap_mp, encode_overlap_mp_with_ring, encode_overlap_with_ring,
};
use ordpat::encoding::utils::{InversionRing, MpUint, pattern_width, sequence_length};
use rstest::rstest;

use crate::test_helpers::{
    generate_gaussian_series, generate_series_with_ties, reference_codes, to_words,
};

fn encode_wide(series: &[f64], order: usize, lag: usize) -> Vec<u64> {
    let width = pattern_width(order);
    let len = sequence_length(series.len(), order, lag);
    let mut out = vec![u64::MAX; len * width];
    assert_eq!(encode_overlap_mp(series, &mut out, order, lag).unwrap(), len);
    out
}

/// `order! - 1` in `width` words
fn max_code(order: usize) -> Vec<u64> {
    let mut fact = MpUint::from_u64(1, pattern_width(order));
    for k in 2..=order {
        fact.multiply(k as u32);
    }
    fact.subtract(1);
    fact.into_words()
}

#[rstest]
#[case(21, 1)]
#[case(22, 2)]
#[case(25, 1)]
#[case(28, 3)]
#[case(31, 1)]
#[case(34, 1)]
#[case(34, 4)]
fn test_wide_codes_match_reference(#[case] order: usize, #[case] lag: usize) {
    assert_eq!(pattern_width(order), 2);
    let series = generate_gaussian_series(400, order as u64 + lag as u64);
    let codes = encode_wide(&series, order, lag);
    let expected: Vec<u64> = reference_codes(&series, order, lag)
        .into_iter()
        .flat_map(to_words)
        .collect();
    assert_eq!(codes, expected, "order={order}, lag={lag}");
}

#[test]
fn test_wide_codes_with_ties() {
    let series = generate_series_with_ties(300, 4, 17);
    let expected: Vec<u64> = reference_codes(&series, 30, 2)
        .into_iter()
        .flat_map(to_words)
        .collect();
    assert_eq!(encode_wide(&series, 30, 2), expected);
}

#[rstest]
#[case(21)]
#[case(35)]
#[case(100)]
#[case(255)]
fn test_extreme_codes(#[case] order: usize) {
    let width = pattern_width(order);
    let rising: Vec<f64> = (0..order + 10).map(|x| x as f64).collect();
    let falling: Vec<f64> = rising.iter().rev().copied().collect();

    assert!(encode_wide(&rising, order, 1).iter().all(|&w| w == 0));

    let codes = encode_wide(&falling, order, 1);
    let expected = max_code(order);
    assert_eq!(expected.len(), width);
    assert_ne!(expected[width - 1], 0, "top word must be significant");
    for code in codes.chunks_exact(width) {
        assert_eq!(code, expected.as_slice(), "order={order}");
    }
}

#[test]
fn test_single_word_orders_match_overlap() {
    let series = generate_gaussian_series(300, 8);
    for order in [2, 9, 20] {
        let len = sequence_length(series.len(), order, 3);
        let mut narrow = vec![0u64; len];
        encode_overlap(&series, &mut narrow, order, 3).unwrap();
        assert_eq!(encode_wide(&series, order, 3), narrow);
    }
}

#[test]
fn test_ring_reuse_across_orders_and_lags() {
    let series = generate_gaussian_series(500, 21);
    let mut ring = InversionRing::new(2, 1);

    for &(order, lag) in &[(5, 3), (12, 1), (3, 7), (5, 3)] {
        let len = sequence_length(series.len(), order, lag);
        let mut fresh = vec![0u64; len];
        let mut reused = vec![0u64; len];
        encode_overlap(&series, &mut fresh, order, lag).unwrap();
        encode_overlap_with_ring(&series, &mut reused, order, lag, &mut ring).unwrap();
        assert_eq!(fresh, reused, "order={order}, lag={lag}");
        assert_eq!(ring.order(), order);
        assert_eq!(ring.lag(), lag);
    }

    for &(order, lag) in &[(40, 2), (25, 1)] {
        let mut reused = vec![0u64; sequence_length(series.len(), order, lag) * pattern_width(order)];
        encode_overlap_mp_with_ring(&series, &mut reused, order, lag, &mut ring).unwrap();
        assert_eq!(reused, encode_wide(&series, order, lag));
        assert_eq!(ring.len(), (order - 2) * lag);
    }
}
