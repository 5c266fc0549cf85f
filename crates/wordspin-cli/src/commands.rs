use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};
use wordspin_core::{
    SpinConfig, SpinWheel, WordList, generate_combinations, generate_combinations_array,
};
use wordspin_cli::input::WordSource;
use wordspin_cli::plan::{expected_output, is_large, normalize_mode};
use wordspin_cli::render::modes_table;
use wordspin_cli::session::{spin_progress_bar, spin_with_progress};

use crate::cli::{CombosArgs, InputArgs, SpinArgs};
use crate::types::{CombosResult, SpinResult};

pub fn run_modes() -> Result<()> {
    println!("{}", modes_table());
    Ok(())
}

pub fn run_combos(args: &CombosArgs) -> Result<CombosResult> {
    let span = info_span!("combos", mode = %args.input.mode, unique = args.unique);
    let _guard = span.enter();
    let combinations = combinations_from(&args.input, args.unique)?;
    info!(count = combinations.len(), "combinations ready");
    Ok(CombosResult {
        combinations,
        format: args.format,
    })
}

pub fn run_spin(args: &SpinArgs) -> Result<SpinResult> {
    let span = info_span!("spin", mode = %args.input.mode, seed = ?args.seed);
    let _guard = span.enter();
    let combinations = combinations_from(&args.input, false)?;

    let config = SpinConfig::default()
        .with_duration(Duration::from_millis(args.duration_ms))
        .with_frame_interval(Duration::from_millis(args.frame_ms));
    config.validate().context("spin settings")?;
    let wheel = match args.seed {
        Some(seed) => SpinWheel::seeded(seed),
        None => SpinWheel::new(),
    }
    .with_config(config);
    wheel.set_candidates(combinations);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("start async runtime")?;
    let progress = spin_progress_bar(wheel.config().duration, !args.quiet_progress && !args.json);
    let mut outcome = runtime
        .block_on(spin_with_progress(&wheel, &progress))
        .context("spin the wheel")?;
    outcome.seed = args.seed;

    Ok(SpinResult {
        outcome,
        segments: wheel.segments(),
        json: args.json,
    })
}

/// Reads the word source and builds combinations with the selected builder.
fn combinations_from(input: &InputArgs, unique: bool) -> Result<Vec<String>> {
    let raw = WordSource::from_flags(input.input.as_deref(), &input.words).read()?;
    let words = WordList::parse(&raw)?;
    let mode = normalize_mode(&input.mode);
    if is_large(words.len(), &mode, unique) {
        warn!(
            expected = ?expected_output(words.len(), &mode, unique),
            "large combination set, generation may take a moment"
        );
    }
    if unique {
        Ok(generate_combinations_array(&words, &mode))
    } else {
        Ok(generate_combinations(&raw, &mode)?)
    }
}
