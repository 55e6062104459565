//! [`Check`] command — checks an expression for balanced delimiters.
//!
//! Script syntax: `check "{[()()]}"`

use crate::command::{Context, StackCommand};
use crate::parser::parse_quoted_string;
use anyhow::Result;
use async_trait::async_trait;

/// Runs the context's balance checker over `expression`, narrating each
/// push and pop, any diagnostic, and the final verdict.
///
/// The check uses its own stack; the script's stack is left untouched.
pub struct Check {
    pub expression: String,
}

impl Check {
    pub const NAME: &'static str = "check";

    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }
}

#[async_trait(?Send)]
impl StackCommand for Check {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Result<Self> {
        Ok(Self::new(parse_quoted_string(args)?))
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        let report = ctx
            .checker()
            .check_with(&self.expression, |event| ctx.emit(format!("{event}\n").as_bytes()));
        if let Some(reason) = report.unbalance() {
            ctx.emit(format!("Unbalanced: {reason}\n").as_bytes());
        }
        ctx.narrate(format!(
            "Expression '{}' is balanced: {}",
            self.expression,
            report.is_balanced()
        ));
        Ok(())
    }
}
