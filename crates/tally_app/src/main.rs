//! Counts a fixed list of words and prints the frequency table.

use std::io;

use anyhow::Result;
use log::info;
use tally_core::{tally_all, write_report};

/// The literal input sequence; tokens are pre-split words.
const WORDS: [&str; 5] = ["apple", "banana", "apple", "mango", "apple"];

fn main() -> Result<()> {
    tally_logging::initialize(log::LevelFilter::Info);

    let tally = tally_all(WORDS);
    info!(
        "tallied {} tokens into {} distinct entries",
        tally.total(),
        tally.distinct()
    );

    // The report line is the program's only stdout output.
    let stdout = io::stdout();
    write_report(&tally, &mut stdout.lock())?;
    Ok(())
}
