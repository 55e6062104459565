//! # Stacky
//!
//! A small stack toolkit: a generic LIFO [`Stack`], a balanced-delimiter
//! checker built on it, string reversal, and a script runner that narrates
//! stack operations step by step.
//!
//! ## Checking delimiters
//!
//! ```
//! use stacky::{BalanceChecker, is_balanced};
//!
//! assert!(is_balanced("abc(def)ghi"));
//! assert!(!is_balanced(")("));
//!
//! let report = BalanceChecker::default().check("(()");
//! assert_eq!(report.unbalance().unwrap().to_string(), "unclosed '(' at index 0");
//! ```
//!
//! Matching is strictly nearest-open-first: `(]` is unbalanced even though the
//! counts of opening and closing characters agree. Characters that are not
//! delimiters are ignored. Use [`DelimiterPairTable::new`] to match other pairs,
//! and [`BalanceChecker::check_with`] to observe each push and pop.
//!
//! ## Stack scripts
//!
//! ```no_run
//! use stacky::{Engine, parse_str};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let script = r#"
//! push 10
//! push 20
//! peek
//! pop
//! empty
//! check "{[()()]}"
//! "#;
//!
//!     let mut engine = Engine::new();
//!     engine.execute(parse_str(script)?).await?;
//!     Ok(())
//! }
//! ```
//!
//! | Command | Description |
//! |---------|-------------|
//! | `push 10` / `push "text"` | Push a value and render the stack |
//! | `pop` | Pop the top value (an empty stack is reported, not fatal) |
//! | `peek` | Show the top value without removing it |
//! | `empty` | Say whether the stack is empty |
//! | `check "expr"` | Check `expr` for balanced delimiters |
//! | `reverse "text"` | Print `text` reversed through a stack |
//! | `show "text"` | Print a line of commentary |
//! | `wait 500ms` | Pause (`ms` or `s`, floats allowed; bare `wait` = one step) |
//! | `# comment` | Full-line or inline comment |

pub mod balance;
pub mod command;
pub mod commands;
pub mod delimiters;
pub mod engine;
pub mod event;
pub mod parser;
pub mod render;
pub mod reverse;
pub mod stack;

pub use balance::{BalanceChecker, InvalidExpression, Opening, Report, Unbalance, is_balanced};
pub use command::{Context, StackCommand};
pub use delimiters::{Delimiter, DelimiterPairTable, TableError};
pub use engine::Engine;
pub use event::StackEvent;
pub use parser::{demo, parse_str};
pub use render::render_stack;
pub use reverse::{reverse, reverse_with};
pub use stack::{EmptyStackError, Stack, StackOp};
