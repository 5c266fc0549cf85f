//! Library components of the `wordspin` command-line tool.

pub mod input;
pub mod logging;
pub mod plan;
pub mod render;
pub mod session;
