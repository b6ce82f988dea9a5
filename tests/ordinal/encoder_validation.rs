// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ordpat::encoding::OrdpatError;
use ordpat::encoding::approaches::{
    encode_lookup, encode_lookup_raw, encode_overlap, encode_overlap_mp, encode_plain,
};
use ordpat::encoding::lookup_table::LookupTable;
use rstest::rstest;

type Encoder = fn(&[f64], &mut [u64], usize, usize) -> Result<usize, OrdpatError>;

const NATIVE_ENCODERS: [(&str, Encoder); 3] = [
    ("plain", encode_plain),
    ("overlap", encode_overlap),
    ("overlap_mp", encode_overlap_mp),
];

#[rstest]
#[case(0, 20)]
#[case(1, 20)]
#[case(21, 20)]
fn test_native_order_out_of_range(#[case] order: usize, #[case] max: usize) {
    let series = vec![1.0; 100];
    let mut out = vec![0u64; 100];
    for (name, encode) in NATIVE_ENCODERS.iter().take(2) {
        let err = encode(&series, &mut out, order, 1).unwrap_err();
        assert_eq!(err, OrdpatError::InvalidOrder { order, min: 2, max }, "{name}");
        assert_eq!(err.code(), 1);
    }
}

#[test]
fn test_overlap_mp_order_out_of_range() {
    let series = vec![1.0; 600];
    let mut out = vec![0u64; 600 * 30];
    for order in [1, 256] {
        assert_eq!(
            encode_overlap_mp(&series, &mut out, order, 1),
            Err(OrdpatError::InvalidOrder { order, min: 2, max: 255 })
        );
    }
}

#[test]
fn test_lookup_order_out_of_range() {
    let series = vec![1.0; 100];
    let mut out = vec![0u64; 100];
    let table = LookupTable::new(3).unwrap();
    assert_eq!(
        encode_lookup(&series, &mut out, 11, 1, &table),
        Err(OrdpatError::InvalidOrder { order: 11, min: 2, max: 10 })
    );
    assert_eq!(
        encode_lookup_raw(&series, &mut out, 1, 1, table.as_slice()),
        Err(OrdpatError::InvalidOrder { order: 1, min: 2, max: 10 })
    );
}

#[test]
fn test_lookup_table_order_mismatch() {
    let series = vec![1.0; 20];
    let mut out = vec![0u64; 20];
    let table = LookupTable::new(4).unwrap();
    let err = encode_lookup(&series, &mut out, 3, 1, &table).unwrap_err();
    assert_eq!(err, OrdpatError::TableOrderMismatch { order: 3, table_order: 4 });
    assert_eq!(
        err.to_string(),
        "lookup table was built for order 4, not for order 3"
    );
    assert_eq!(err.code(), 1);
}

#[test]
fn test_zero_lag() {
    let series = vec![1.0; 20];
    let mut out = vec![0u64; 20];
    let table = LookupTable::new(3).unwrap();
    for (name, encode) in NATIVE_ENCODERS {
        let err = encode(&series, &mut out, 3, 0).unwrap_err();
        assert_eq!(err, OrdpatError::InvalidLag { lag: 0 }, "{name}");
        assert_eq!(err.code(), 2);
    }
    assert_eq!(
        encode_lookup(&series, &mut out, 3, 0, &table),
        Err(OrdpatError::InvalidLag { lag: 0 })
    );
}

#[test]
fn test_order_checked_before_lag() {
    let series = vec![1.0; 20];
    let mut out = vec![0u64; 20];
    assert!(matches!(
        encode_plain(&series, &mut out, 1, 0),
        Err(OrdpatError::InvalidOrder { .. })
    ));
}

#[rstest]
#[case(3, 4, 1, 4)]
#[case(0, 2, 1, 2)]
#[case(6, 3, 3, 7)]
#[case(7, 3, 3, 7)]
fn test_input_too_short(
    #[case] n_in: usize,
    #[case] order: usize,
    #[case] lag: usize,
    #[case] required: usize,
) {
    let series = vec![1.0; n_in];
    let mut out = vec![0u64; 10];
    let table = LookupTable::new(order).unwrap();
    let expected = OrdpatError::InputTooShort { len: n_in, required };

    if n_in < required {
        for (name, encode) in NATIVE_ENCODERS {
            assert_eq!(encode(&series, &mut out, order, lag), Err(expected.clone()), "{name}");
        }
        assert_eq!(encode_lookup(&series, &mut out, order, lag, &table), Err(expected));
    } else {
        // exactly one window
        for (name, encode) in NATIVE_ENCODERS {
            assert_eq!(encode(&series, &mut out, order, lag), Ok(1), "{name}");
        }
    }
}

/// Window spans beyond `usize` saturate instead of overflowing
#[rstest]
#[case(2, usize::MAX)]
#[case(2, usize::MAX / 4)]
#[case(30, usize::MAX)]
#[case(30, usize::MAX / 4)]
fn test_input_too_short_huge_lag(#[case] order: usize, #[case] lag: usize) {
    let series = [1.0, 2.0, 3.0];
    let expected = OrdpatError::InputTooShort {
        len: 3,
        required: (order - 1).saturating_mul(lag).saturating_add(1),
    };
    let mut out = [0u64; 3];
    if order <= 20 {
        for (name, encode) in NATIVE_ENCODERS {
            assert_eq!(encode(&series, &mut out, order, lag), Err(expected.clone()), "{name}");
        }
        let table = LookupTable::new(order).unwrap();
        assert_eq!(
            encode_lookup(&series, &mut out, order, lag, &table),
            Err(expected.clone())
        );
    }
    assert_eq!(encode_overlap_mp(&series, &mut out, order, lag), Err(expected));
}

#[test]
fn test_huge_lag_reports_saturated_requirement() {
    let mut out = [0u64; 3];
    assert_eq!(
        encode_plain(&[1.0, 2.0, 3.0], &mut out, 2, usize::MAX),
        Err(OrdpatError::InputTooShort { len: 3, required: usize::MAX })
    );
    assert_eq!(
        encode_overlap_mp(&[1.0, 2.0, 3.0], &mut out, 30, usize::MAX / 4),
        Err(OrdpatError::InputTooShort { len: 3, required: usize::MAX })
    );
}

#[test]
fn test_output_too_short() {
    let series: Vec<f64> = (0..10).map(|x| x as f64).collect();
    let table = LookupTable::new(3).unwrap();
    for capacity in [0, 7] {
        let mut out = vec![u64::MAX; capacity];
        let expected = OrdpatError::OutputTooShort { len: capacity, required: 8 };
        for (name, encode) in NATIVE_ENCODERS {
            let err = encode(&series, &mut out, 3, 1).unwrap_err();
            assert_eq!(err, expected, "{name}");
            assert_eq!(err.code(), 4);
        }
        assert_eq!(encode_lookup(&series, &mut out, 3, 1, &table), Err(expected));
        assert!(out.iter().all(|&c| c == u64::MAX), "output modified on error");
    }
}

#[test]
fn test_overlap_mp_capacity_counts_words() {
    let series: Vec<f64> = (0..30).map(|x| x as f64).collect();
    // order 21 needs two words per code, 10 codes
    let mut out = vec![u64::MAX; 10];
    assert_eq!(
        encode_overlap_mp(&series, &mut out, 21, 1),
        Err(OrdpatError::OutputTooShort { len: 10, required: 20 })
    );
    assert!(out.iter().all(|&c| c == u64::MAX));

    let mut out = vec![u64::MAX; 20];
    assert_eq!(encode_overlap_mp(&series, &mut out, 21, 1), Ok(10));
    assert!(out.iter().all(|&c| c == 0));
}

#[test]
fn test_no_writes_on_invalid_arguments() {
    let series = vec![2.0, 1.0, 0.0];
    let mut out = vec![42u64; 4];
    for (_, encode) in NATIVE_ENCODERS {
        assert!(encode(&series, &mut out, 3, 0).is_err());
        assert!(encode(&series, &mut out, 4, 1).is_err());
    }
    assert_eq!(out, vec![42; 4]);
}

#[test]
fn test_error_messages() {
    let err = OrdpatError::InvalidOrder { order: 21, min: 2, max: 20 };
    assert_eq!(
        err.to_string(),
        "invalid pattern order 21; supported orders are 2..=20"
    );
    let err = OrdpatError::InputTooShort { len: 3, required: 4 };
    assert_eq!(err.to_string(), "input too short: 3 samples, at least 4 required");
    assert_eq!(OrdpatError::UnknownAlgorithm("fast".into()).code(), 5);
}
