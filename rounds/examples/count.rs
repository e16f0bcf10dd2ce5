//! Counts the rounds of a permutation given on the command line or on standard input.
//!
//!     cargo run --example count -- 2 1 4 7 5 3 6 8
//!     echo "[4, 3, 2, 1]" | cargo run --example count -- ranges

extern crate rounds;

use std::io::Read;

use rounds::{round_ranges, Permutation, RoundsError};

fn main() {

    let ranges = std::env::args().any(|x| x == "ranges");
    let values = std::env::args().skip(1).filter(|x| x != "ranges").collect::<Vec<_>>().join(" ");

    let text = if values.trim().is_empty() {
        let mut text = String::new();
        if let Err(error) = std::io::stdin().read_to_string(&mut text) {
            eprintln!("failed to read standard input: {}", error);
            std::process::exit(1);
        }
        text
    }
    else { values };

    if let Err(error) = report(&text, ranges) {
        eprintln!("not a permutation: {}", error);
        std::process::exit(1);
    }
}

fn report(text: &str, ranges: bool) -> Result<(), RoundsError> {
    let perm: Permutation = text.parse()?;
    println!("{}", perm.rounds());
    if ranges {
        for range in round_ranges(perm.as_slice())? {
            println!("{}..={}", range.start(), range.end());
        }
    }
    Ok(())
}
