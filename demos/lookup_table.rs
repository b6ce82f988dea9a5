use ordpat::encoding::lookup_table::{LookupTable, check_lookup_table};
use ordpat::encoding::utils::{encode_pattern, pattern_table};

fn main() {
    // The transition table for order 3 has 3! * 3 entries
    let order = 3;
    let table = LookupTable::new(order).unwrap();
    println!("Lookup table for order {order}: {:?}", table.as_slice());

    // Each row pairs a pattern with the inversion count of a new sample
    let patterns = pattern_table(order).unwrap();
    println!("\n{:<12} {:>5} {:>10} {:>10}", "pattern", "code", "inversions", "successor");
    for row in patterns.rows() {
        let row = row.to_vec();
        let code = encode_pattern(&row, order, 1);
        for inversions in 0..order {
            println!(
                "{:<12} {:>5} {:>10} {:>10}",
                format!("{row:?}"),
                code,
                inversions,
                table.successor(code, inversions)
            );
        }
    }

    // Tables from elsewhere can be validated before use
    let mut corrupted = table.clone().into_vec();
    corrupted[4] = 6;
    match check_lookup_table(&corrupted, order) {
        Ok(()) => println!("\nCorrupted table accepted"),
        Err(err) => println!("\nCorrupted table rejected: {err}"),
    }

    // Memory footprint grows as order! * order words
    println!("\n{:<6} {:>12} {:>12}", "order", "entries", "bytes");
    for order in 2..=10 {
        let entries = ordpat::encoding::lookup_table::lookup_table_len(order);
        println!("{order:<6} {entries:>12} {:>12}", entries * size_of::<u64>());
    }
}
