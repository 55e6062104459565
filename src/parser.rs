//! Parser for stack scripts.
//!
//! The top-level entry point is [`parse_str`].

use crate::command::StackCommand;
use crate::commands::{Check, Empty, Peek, Pop, Push, Reverse, Show, Wait};
use anyhow::{Context as _, Result, anyhow};
use std::time::Duration;

/// The walkthrough run by `stacky demo`.
pub const DEMO_SCRIPT: &str = include_str!("demo.script");

/// Parse a stack script from a string slice and return the resulting commands.
///
/// Lines that are empty or start with `#` are ignored. Inline comments (` # …`)
/// are stripped while preserving `#` characters inside quoted strings.
///
/// # Errors
///
/// Returns an error if any line contains an unknown command, a malformed
/// argument, or an unclosed quoted string.
///
/// # Example
///
/// ```
/// use stacky::parse_str;
///
/// let commands = parse_str("push 10\npush 20\npop\n").unwrap();
/// assert_eq!(commands.len(), 3);
/// ```
pub fn parse_str(content: &str) -> Result<Vec<Box<dyn StackCommand>>> {
    let mut commands = Vec::new();
    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = strip_inline_comment(line);
        let cmd = parse_line(line)
            .with_context(|| format!("Failed to parse line {}: {}", line_num + 1, line))?;
        commands.push(cmd);
    }
    Ok(commands)
}

/// Parse the built-in [`DEMO_SCRIPT`].
pub fn demo() -> Result<Vec<Box<dyn StackCommand>>> {
    parse_str(DEMO_SCRIPT).context("Built-in demo script is malformed")
}

type ParseFn = fn(&str) -> Result<Box<dyn StackCommand>>;

static REGISTRY: &[(&str, ParseFn)] = &[
    (Push::NAME, Push::parse_boxed),
    (Pop::NAME, Pop::parse_boxed),
    (Peek::NAME, Peek::parse_boxed),
    (Empty::NAME, Empty::parse_boxed),
    (Check::NAME, Check::parse_boxed),
    (Reverse::NAME, Reverse::parse_boxed),
    (Show::NAME, Show::parse_boxed),
    (Wait::NAME, Wait::parse_boxed),
];

/// Dispatch a single non-empty, non-comment line to the matching command's parser.
fn parse_line(line: &str) -> Result<Box<dyn StackCommand>> {
    let (name, args) = line.split_once(' ').unwrap_or((line, ""));
    REGISTRY
        .iter()
        .find(|(cmd_name, _)| *cmd_name == name)
        .map(|(_, parse)| parse(args))
        .unwrap_or_else(|| Err(anyhow!("Unknown command: {}", line)))
}

/// Strip inline comments from a line, preserving `#` inside quoted strings.
fn strip_inline_comment(line: &str) -> &str {
    let mut in_quotes = false;
    let mut escaped = false;
    for (i, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if ch == '\\' {
            escaped = true;
            continue;
        }
        if ch == '"' {
            in_quotes = !in_quotes;
            continue;
        }
        if ch == '#' && !in_quotes {
            return line[..i].trim();
        }
    }
    line
}

/// Parse a duration string: `1s`, `500ms`, `1.5s`.
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim();
    if let Some(ms_str) = s.strip_suffix("ms") {
        let ms: u64 = ms_str
            .trim()
            .parse()
            .context("Invalid milliseconds value")?;
        Ok(Duration::from_millis(ms))
    } else if let Some(s_str) = s.strip_suffix('s') {
        let secs: f64 = s_str.trim().parse().context("Invalid seconds value")?;
        Duration::try_from_secs_f64(secs).context("Seconds value out of range")
    } else {
        Err(anyhow!("Duration must end with 's' or 'ms', got: {}", s))
    }
}

/// Parse a double-quoted string, decoding `\n`, `\t`, `\"` and `\\`.
///
/// Escapes are decoded left to right, so `\\n` is a backslash followed by
/// `n`. Any other escaped character is kept as written, backslash included.
pub(crate) fn parse_quoted_string(s: &str) -> Result<String> {
    let s = s.trim();
    let inner = s
        .strip_prefix('"')
        .ok_or_else(|| anyhow!("Expected string to start with '\"'"))?;
    let inner = inner
        .strip_suffix('"')
        .ok_or_else(|| anyhow!("Expected string to end with '\"'"))?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            // The closing quote was escaped.
            None => return Err(anyhow!("Expected string to end with '\"'")),
        }
    }
    Ok(out)
}
