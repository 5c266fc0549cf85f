use wordspin_cli::session::SpinOutcome;
use wordspin_core::Segment;

use crate::cli::CombosFormatArg;

#[derive(Debug)]
pub struct CombosResult {
    pub combinations: Vec<String>,
    pub format: CombosFormatArg,
}

#[derive(Debug)]
pub struct SpinResult {
    pub outcome: SpinOutcome,
    pub segments: Vec<Segment>,
    pub json: bool,
}
