use std::collections::HashMap;

use crate::Token;

/// Mapping from distinct token to the number of times it has been observed.
///
/// Tokens never seen have no entry and read as a count of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: HashMap<Token, u64>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `token`.
    ///
    /// An absent entry is treated as zero before the increment, so after the
    /// call the stored count is one more than before (or 1 if the token was
    /// previously unseen).
    pub fn increment(&mut self, token: Token) {
        *self.counts.entry(token).or_insert(0) += 1;
    }

    /// Returns the count for `token`, zero when it was never observed.
    /// Reading never inserts an entry.
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens observed.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the input sequence so far.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Token, u64)> {
        self.counts.iter().map(|(token, count)| (token, *count))
    }
}

impl Extend<Token> for Tally {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, tokens: I) {
        for token in tokens {
            self.increment(token);
        }
    }
}

/// Counts every token in `tokens` in a single linear pass.
///
/// The empty sequence yields an empty tally. Input order does not affect the
/// resulting counts.
pub fn tally_all<I, T>(tokens: I) -> Tally
where
    I: IntoIterator<Item = T>,
    T: Into<Token>,
{
    let mut tally = Tally::new();
    tally.extend(tokens.into_iter().map(Into::into));
    tally
}
