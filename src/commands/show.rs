//! [`Show`] command — prints a line of commentary.
//!
//! Script syntax: `show "This is a note"`

use crate::command::{Context, StackCommand};
use crate::parser::parse_quoted_string;
use anyhow::Result;
use async_trait::async_trait;

/// Prints `text` as its own paragraph without touching the stack.
pub struct Show {
    pub text: String,
}

impl Show {
    pub const NAME: &'static str = "show";

    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait(?Send)]
impl StackCommand for Show {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Result<Self> {
        Ok(Self::new(parse_quoted_string(args)?))
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        ctx.narrate(&self.text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::testing::{capture_context, output};

    #[test]
    fn test_parse() {
        assert_eq!(Show::parse(r#""a # note""#).unwrap().text, "a # note");
        assert!(Show::parse(r#""unclosed"#).is_err());
    }

    #[tokio::test]
    async fn test_execute_leaves_stack_alone() {
        let (mut ctx, captured) = capture_context();
        Show::new("Reversing a string:").execute(&mut ctx).await.unwrap();
        assert_eq!(output(&captured), "\nReversing a string:\n");
        assert!(ctx.stack().is_empty());
    }
}
