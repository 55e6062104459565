//! Balanced-delimiter checking.
//!
//! [`BalanceChecker`] walks an expression once, pushing every opening
//! delimiter onto a [`Stack`] and popping on every closing delimiter. The
//! first closing delimiter that finds the stack empty, or finds an opening
//! delimiter of a different type on top, ends the walk. Openings still on the
//! stack once the input runs out are reported as unclosed.
//!
//! ```
//! use stacky::{BalanceChecker, Unbalance};
//!
//! let checker = BalanceChecker::default();
//! assert!(checker.check("{[()()]}").is_balanced());
//!
//! let report = checker.check("{[(])}");
//! match report.unbalance() {
//!     Some(Unbalance::UnexpectedClose { index, found, .. }) => {
//!         assert_eq!((*index, *found), (3, ']'));
//!     }
//!     other => panic!("unexpected report: {other:?}"),
//! }
//! ```

use crate::delimiters::{Delimiter, DelimiterPairTable};
use crate::event::StackEvent;
use crate::stack::Stack;
use std::borrow::Cow;
use std::fmt;
use std::str::Utf8Error;
use thiserror::Error;

/// An opening delimiter and its zero-based character index in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opening {
    pub index: usize,
    pub ch: char,
}

/// Why an expression is not balanced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unbalance {
    /// A closing delimiter at `index` did not match. `open` is the opening
    /// delimiter it was paired with, or `None` when nothing was open.
    UnexpectedClose {
        index: usize,
        found: char,
        open: Option<Opening>,
    },

    /// Openings left without a closing delimiter, bottom of the stack first.
    Unclosed(Vec<Opening>),
}

impl fmt::Display for Unbalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unbalance::UnexpectedClose {
                index,
                found,
                open: None,
            } => write!(f, "unexpected '{found}' at index {index}: nothing is open"),
            Unbalance::UnexpectedClose {
                index,
                found,
                open: Some(open),
            } => write!(
                f,
                "mismatched '{found}' at index {index}: the innermost open delimiter is '{}' at index {}",
                open.ch, open.index
            ),
            Unbalance::Unclosed(openings) => {
                f.write_str("unclosed ")?;
                for (i, open) in openings.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{}' at index {}", open.ch, open.index)?;
                }
                Ok(())
            }
        }
    }
}

/// Result of checking one expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Balanced,
    Unbalanced(Unbalance),
}

impl Report {
    pub fn is_balanced(&self) -> bool {
        matches!(self, Report::Balanced)
    }

    /// The diagnostic for an unbalanced expression.
    pub fn unbalance(&self) -> Option<&Unbalance> {
        match self {
            Report::Balanced => None,
            Report::Unbalanced(reason) => Some(reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidExpression {
    #[error("expression is not valid UTF-8")]
    NotUtf8(#[from] Utf8Error),
}

/// Checks expressions against a [`DelimiterPairTable`].
///
/// The checker holds no per-call state; each check allocates its own stack,
/// so one checker can be reused freely. The default checker borrows the
/// shared standard table.
#[derive(Debug, Clone)]
pub struct BalanceChecker {
    table: Cow<'static, DelimiterPairTable>,
}

impl BalanceChecker {
    pub fn new(table: DelimiterPairTable) -> Self {
        Self {
            table: Cow::Owned(table),
        }
    }

    pub fn table(&self) -> &DelimiterPairTable {
        &self.table
    }

    pub fn check(&self, expression: &str) -> Report {
        self.check_chars(expression.chars())
    }

    pub fn check_chars(&self, chars: impl IntoIterator<Item = char>) -> Report {
        self.run(chars, &mut |_: &StackEvent<char>| {})
    }

    /// Like [`check`](Self::check), calling `observer` on every push and pop.
    pub fn check_with(
        &self,
        expression: &str,
        mut observer: impl FnMut(&StackEvent<char>),
    ) -> Report {
        self.run(expression.chars(), &mut observer)
    }

    /// Check raw bytes, rejecting input that is not UTF-8 before any matching.
    pub fn check_bytes(&self, bytes: &[u8]) -> Result<Report, InvalidExpression> {
        self.check_bytes_with(bytes, |_| {})
    }

    /// Like [`check_bytes`](Self::check_bytes), calling `observer` on every
    /// push and pop. Nothing is observed for input that is not UTF-8.
    pub fn check_bytes_with(
        &self,
        bytes: &[u8],
        observer: impl FnMut(&StackEvent<char>),
    ) -> Result<Report, InvalidExpression> {
        let expression = std::str::from_utf8(bytes)?;
        Ok(self.check_with(expression, observer))
    }

    fn run(
        &self,
        chars: impl IntoIterator<Item = char>,
        observer: &mut dyn FnMut(&StackEvent<char>),
    ) -> Report {
        let mut stack: Stack<Opening> = Stack::new();

        for (index, ch) in chars.into_iter().enumerate() {
            match self.table.classify(ch) {
                Delimiter::Open => {
                    stack.push(Opening { index, ch });
                    observer(&StackEvent::push(ch, stack.len()));
                }
                Delimiter::Close { expects } => {
                    let open = match stack.pop() {
                        Ok(open) => open,
                        Err(_) => {
                            observer(&StackEvent::PopEmpty);
                            tracing::debug!(index, found = %ch, "closing delimiter with empty stack");
                            return Report::Unbalanced(Unbalance::UnexpectedClose {
                                index,
                                found: ch,
                                open: None,
                            });
                        }
                    };
                    observer(&StackEvent::pop(open.ch, stack.len()));
                    if open.ch != expects {
                        tracing::debug!(index, found = %ch, open = %open.ch, "mismatched delimiter");
                        return Report::Unbalanced(Unbalance::UnexpectedClose {
                            index,
                            found: ch,
                            open: Some(open),
                        });
                    }
                }
                Delimiter::Other => {}
            }
        }

        if stack.is_empty() {
            Report::Balanced
        } else {
            tracing::debug!(unclosed = stack.len(), "input ended with open delimiters");
            Report::Unbalanced(Unbalance::Unclosed(stack.into_bottom_up()))
        }
    }
}

impl Default for BalanceChecker {
    fn default() -> Self {
        Self {
            table: Cow::Borrowed(DelimiterPairTable::standard()),
        }
    }
}

/// Check `expression` against the standard `()`, `[]`, `{}` table.
pub fn is_balanced(expression: &str) -> bool {
    BalanceChecker::default().check(expression).is_balanced()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_balanced() {
        assert!(is_balanced(""));
    }

    #[test]
    fn test_nested_balanced() {
        assert!(is_balanced("{[()()]}"));
        assert!(is_balanced("()[]{}"));
        assert!(is_balanced("abc(def)ghi"));
    }

    #[test]
    fn test_mismatch_reports_first_offender() {
        let report = BalanceChecker::default().check("{[(])}");
        assert_eq!(
            report,
            Report::Unbalanced(Unbalance::UnexpectedClose {
                index: 3,
                found: ']',
                open: Some(Opening { index: 2, ch: '(' }),
            })
        );
    }

    #[test]
    fn test_close_before_open() {
        let report = BalanceChecker::default().check(")(");
        assert_eq!(
            report.unbalance(),
            Some(&Unbalance::UnexpectedClose {
                index: 0,
                found: ')',
                open: None,
            })
        );
    }

    #[test]
    fn test_unclosed_lists_remaining_openings() {
        let report = BalanceChecker::default().check("(()");
        assert_eq!(
            report.unbalance(),
            Some(&Unbalance::Unclosed(vec![Opening { index: 0, ch: '(' }]))
        );

        let report = BalanceChecker::default().check("{a[b(");
        assert_eq!(
            report.unbalance(),
            Some(&Unbalance::Unclosed(vec![
                Opening { index: 0, ch: '{' },
                Opening { index: 2, ch: '[' },
                Opening { index: 4, ch: '(' },
            ]))
        );
    }

    #[test]
    fn test_lone_delimiters() {
        assert!(!is_balanced("("));
        assert!(!is_balanced("]"));
    }

    #[test]
    fn test_mismatched_type_is_never_balanced() {
        assert!(!is_balanced("(]"));
        assert!(!is_balanced("([)]"));
    }

    #[test]
    fn test_indices_count_chars_not_bytes() {
        let report = BalanceChecker::default().check("ü)");
        assert_eq!(
            report.unbalance(),
            Some(&Unbalance::UnexpectedClose {
                index: 1,
                found: ')',
                open: None,
            })
        );
    }

    #[test]
    fn test_observer_sees_pushes_and_pops() {
        let mut events = Vec::new();
        let report = BalanceChecker::default().check_with("([])", |e| events.push(e.clone()));
        assert!(report.is_balanced());
        assert_eq!(
            events,
            vec![
                StackEvent::push('(', 1),
                StackEvent::push('[', 2),
                StackEvent::pop('[', 1),
                StackEvent::pop('(', 0),
            ]
        );
    }

    #[test]
    fn test_observer_sees_empty_pop() {
        let mut events = Vec::new();
        let report = BalanceChecker::default().check_with("x]", |e| events.push(e.clone()));
        assert!(!report.is_balanced());
        assert_eq!(events, vec![StackEvent::PopEmpty]);
    }

    #[test]
    fn test_custom_table() {
        let table = DelimiterPairTable::new([('<', '>')]).unwrap();
        let checker = BalanceChecker::new(table);
        assert_eq!(checker.table().pairs(), &[('<', '>')]);
        assert!(checker.check("<<a>>").is_balanced());
        assert!(!checker.check("<<a>").is_balanced());
        // Standard brackets are plain characters here.
        assert!(checker.check("(<]>").is_balanced());
    }

    #[test]
    fn test_default_shares_standard_table() {
        let checker = BalanceChecker::default();
        assert!(std::ptr::eq(checker.table(), DelimiterPairTable::standard()));
        assert!(std::ptr::eq(
            checker.clone().table(),
            DelimiterPairTable::standard()
        ));
    }

    #[test]
    fn test_check_bytes_with_observes_valid_input_only() {
        let checker = BalanceChecker::default();
        let mut events = Vec::new();
        let report = checker
            .check_bytes_with(b"(]", |e| events.push(e.clone()))
            .unwrap();
        assert!(!report.is_balanced());
        assert_eq!(events, vec![StackEvent::push('(', 1), StackEvent::pop('(', 0)]);

        events.clear();
        let err = checker
            .check_bytes_with(b"(\xff", |e| events.push(e.clone()))
            .unwrap_err();
        assert_eq!(err.to_string(), "expression is not valid UTF-8");
        assert!(events.is_empty());
    }

    #[test]
    fn test_check_bytes_rejects_invalid_utf8() {
        let checker = BalanceChecker::default();
        assert!(checker.check_bytes(b"(\xff)").is_err());
        assert_eq!(checker.check_bytes(b"(ok)"), Ok(Report::Balanced));
    }

    #[test]
    fn test_repeat_checks_agree() {
        let checker = BalanceChecker::default();
        for expr in ["", "{[()]}", "{[(])}", "(()", ")("] {
            assert_eq!(checker.check(expr), checker.check(expr));
        }
    }

    #[test]
    fn test_display() {
        let checker = BalanceChecker::default();
        let text = checker.check("{[(])}").unbalance().unwrap().to_string();
        assert!(text.contains("']' at index 3"), "got: {text}");
        let text = checker.check("(()").unbalance().unwrap().to_string();
        assert_eq!(text, "unclosed '(' at index 0");
        let text = checker.check(")").unbalance().unwrap().to_string();
        assert_eq!(text, "unexpected ')' at index 0: nothing is open");
    }
}
