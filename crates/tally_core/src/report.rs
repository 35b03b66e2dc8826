use std::collections::BTreeMap;
use std::io::{self, Write};

use thiserror::Error;

use crate::Tally;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to serialize tally: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Renders the tally as a single-line JSON object mapping token to count.
///
/// Entries are emitted in the ordered-map key order, so rendering the same
/// tally twice produces identical output. The tally itself is not mutated.
pub fn render(tally: &Tally) -> Result<String, ReportError> {
    let ordered: BTreeMap<&str, u64> = tally
        .iter()
        .map(|(token, count)| (token.as_str(), count))
        .collect();
    Ok(serde_json::to_string(&ordered)?)
}

/// Renders the tally and writes it to `out` as one line.
pub fn write_report(tally: &Tally, out: &mut impl Write) -> Result<(), ReportError> {
    let line = render(tally)?;
    writeln!(out, "{line}")?;
    out.flush()?;
    Ok(())
}
