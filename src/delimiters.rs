//! Tables mapping closing delimiters to the opening delimiter they require.

use std::sync::LazyLock;
use thiserror::Error;

/// The pairs recognized by [`DelimiterPairTable::standard`].
pub const STANDARD_PAIRS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('{', '}')];

static STANDARD: LazyLock<DelimiterPairTable> = LazyLock::new(|| DelimiterPairTable {
    pairs: STANDARD_PAIRS.to_vec(),
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("delimiter '{0}' cannot open and close the same pair")]
    SelfClosing(char),
    #[error("delimiter '{0}' appears in more than one pair")]
    Duplicate(char),
}

/// How a single character takes part in delimiter matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Open,
    /// A closing delimiter and the opening one it must match.
    Close { expects: char },
    Other,
}

/// Immutable set of `(open, close)` delimiter pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterPairTable {
    pairs: Vec<(char, char)>,
}

impl DelimiterPairTable {
    /// Build a table from `(open, close)` pairs.
    ///
    /// Every character may appear at most once across all pairs, and no pair
    /// may use the same character on both sides.
    pub fn new(pairs: impl IntoIterator<Item = (char, char)>) -> Result<Self, TableError> {
        let mut table = Vec::new();
        for (open, close) in pairs {
            if open == close {
                return Err(TableError::SelfClosing(open));
            }
            for ch in [open, close] {
                if table.iter().any(|&(o, c)| o == ch || c == ch) {
                    return Err(TableError::Duplicate(ch));
                }
            }
            table.push((open, close));
        }
        Ok(Self { pairs: table })
    }

    /// The shared `()`, `[]`, `{}` table.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// The opening delimiter required by `close`, if `close` is a closing delimiter.
    pub fn opening_for(&self, close: char) -> Option<char> {
        self.pairs
            .iter()
            .find(|&&(_, c)| c == close)
            .map(|&(o, _)| o)
    }

    pub fn is_opening(&self, ch: char) -> bool {
        self.pairs.iter().any(|&(o, _)| o == ch)
    }

    pub fn classify(&self, ch: char) -> Delimiter {
        if self.is_opening(ch) {
            Delimiter::Open
        } else if let Some(expects) = self.opening_for(ch) {
            Delimiter::Close { expects }
        } else {
            Delimiter::Other
        }
    }

    pub fn pairs(&self) -> &[(char, char)] {
        &self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_lookup() {
        let table = DelimiterPairTable::standard();
        assert_eq!(table.opening_for(')'), Some('('));
        assert_eq!(table.opening_for(']'), Some('['));
        assert_eq!(table.opening_for('}'), Some('{'));
        assert_eq!(table.opening_for('('), None);
        assert_eq!(table.opening_for('a'), None);
    }

    #[test]
    fn test_classify() {
        let table = DelimiterPairTable::standard();
        assert_eq!(table.classify('['), Delimiter::Open);
        assert_eq!(table.classify('}'), Delimiter::Close { expects: '{' });
        assert_eq!(table.classify('<'), Delimiter::Other);
        assert_eq!(table.classify('é'), Delimiter::Other);
    }

    #[test]
    fn test_custom_table() {
        let table = DelimiterPairTable::new([('<', '>'), ('(', ')')]).unwrap();
        assert_eq!(table.classify('<'), Delimiter::Open);
        assert_eq!(table.classify('>'), Delimiter::Close { expects: '<' });
        assert_eq!(table.classify('['), Delimiter::Other);
    }

    #[test]
    fn test_rejects_self_closing() {
        assert_eq!(
            DelimiterPairTable::new([('|', '|')]),
            Err(TableError::SelfClosing('|'))
        );
    }

    #[test]
    fn test_rejects_duplicates() {
        assert_eq!(
            DelimiterPairTable::new([('(', ')'), ('(', ']')]),
            Err(TableError::Duplicate('('))
        );
        assert_eq!(
            DelimiterPairTable::new([('(', ')'), (')', '(')]),
            Err(TableError::Duplicate(')'))
        );
    }

    #[test]
    fn test_standard_pairs() {
        assert_eq!(DelimiterPairTable::standard().pairs(), &STANDARD_PAIRS);
    }
}
