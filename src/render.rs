//! Text rendering of a stack for console narration.

use crate::stack::Stack;
use std::fmt::{Display, Write};

pub const HEADER: &str = "Current Stack (top -> bottom):";
pub const FOOTER: &str = " ----- ";

/// Render `stack` top first, one `| item |` line per element.
///
/// ```
/// use stacky::{Stack, render_stack};
///
/// let stack: Stack<i32> = [10, 20].into_iter().collect();
/// assert_eq!(
///     render_stack(&stack),
///     "Current Stack (top -> bottom):\n| 20 |\n| 10 |\n ----- \n"
/// );
/// ```
pub fn render_stack<T: Display>(stack: &Stack<T>) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    for item in stack.iter() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "| {item} |");
    }
    out.push_str(FOOTER);
    out.push('\n');
    out
}
