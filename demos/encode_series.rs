use ndarray::array;
use ordpat::encoding::{Algorithm, OrdinalEncoder};
use ordpat::factorial;
use ordpat::xorshift::random_series;
use std::collections::HashMap;
use std::time::Instant;

fn main() {
    // A short series and its ordinal patterns of order 3
    let series = array![4.0, 7.0, 9.0, 10.0, 6.0, 11.0, 3.0];
    let encoder = OrdinalEncoder::new(3, 1).unwrap();
    let codes = encoder.encode(&series).unwrap();
    println!("Series: {series}");
    println!("Order-3 pattern codes: {codes}");

    // A longer pseudo-random series, encoded with every algorithm
    let order = 6;
    let lag = 2;
    let series = random_series(1_000_000, 42);
    println!("\nEncoding {} samples, order {order}, lag {lag}", series.len());

    let mut reference = None;
    for algorithm in Algorithm::ALL {
        let encoder = OrdinalEncoder::with_algorithm(order, lag, algorithm).unwrap();
        let start = Instant::now();
        let codes = encoder.encode(&series).unwrap();
        let elapsed = start.elapsed();
        println!("  {algorithm:<11} {:>8.2} ms", elapsed.as_secs_f64() * 1e3);

        match &reference {
            None => reference = Some(codes),
            Some(expected) => assert_eq!(&codes, expected, "{algorithm} disagrees"),
        }
    }

    // Normalised permutation entropy from the pattern frequencies
    let codes = reference.unwrap();
    let mut counts: HashMap<u64, usize> = HashMap::new();
    for &code in &codes {
        *counts.entry(code).or_insert(0) += 1;
    }
    let n = codes.len() as f64;
    let entropy: f64 = counts
        .values()
        .map(|&count| {
            let p = count as f64 / n;
            -p * p.ln()
        })
        .sum();
    let max_entropy = (factorial(order) as f64).ln();
    println!("\nDistinct patterns: {} of {}", counts.len(), factorial(order));
    println!("Permutation entropy: {entropy:.6} nats ({:.6} normalised)", entropy / max_entropy);

    // Orders above 20 need multi-word codes
    let encoder = OrdinalEncoder::new(30, 1).unwrap();
    let wide = encoder.encode_wide(&series.slice(ndarray::s![..40]).to_owned()).unwrap();
    println!("\nOrder 30 uses {} words per code; first code: {:?}", encoder.pattern_width(), wide.row(0).to_vec());
}
