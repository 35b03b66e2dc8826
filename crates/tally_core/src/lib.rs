//! Tally core: pure frequency-counting types and report rendering.
mod report;
mod tally;
mod token;

pub use report::{render, write_report, ReportError};
pub use tally::{tally_all, Tally};
pub use token::Token;
