use wordspin_cli::render::{render_json, render_plain, render_table, segments_table};
use wordspin_core::spin::selected_index;

use crate::cli::CombosFormatArg;
use crate::types::{CombosResult, SpinResult};

pub fn print_combos(result: &CombosResult) {
    match result.format {
        CombosFormatArg::Plain => println!("{}", render_plain(&result.combinations)),
        CombosFormatArg::Table => {
            println!("{}", render_table(&result.combinations));
            println!("Total: {}", result.combinations.len());
        }
        CombosFormatArg::Json => match render_json(&result.combinations) {
            Ok(json) => println!("{json}"),
            Err(error) => eprintln!("error: failed to encode combinations: {error}"),
        },
    }
}

pub fn print_spin(result: &SpinResult) {
    let outcome = &result.outcome;
    if result.json {
        match serde_json::to_string_pretty(outcome) {
            Ok(json) => println!("{json}"),
            Err(error) => eprintln!("error: failed to encode spin outcome: {error}"),
        }
        return;
    }
    // Layout table only for small wheels.
    if result.segments.len() <= 24 {
        let winner = selected_index(outcome.angle, result.segments.len());
        println!("{}", segments_table(&result.segments, winner));
    }
    println!("Angle: {:.2}°", outcome.angle);
    if let Some(seed) = outcome.seed {
        println!("Seed: {seed}");
    }
    println!("Winner: {}", outcome.winner);
}
