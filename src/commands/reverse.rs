//! [`Reverse`] command — reverses a string through a stack.
//!
//! Script syntax: `reverse "Hello, World!"`

use crate::command::{Context, StackCommand};
use crate::parser::parse_quoted_string;
use crate::reverse::reverse;
use anyhow::Result;
use async_trait::async_trait;

pub struct Reverse {
    pub text: String,
}

impl Reverse {
    pub const NAME: &'static str = "reverse";
}

#[async_trait(?Send)]
impl StackCommand for Reverse {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Result<Self> {
        Ok(Self {
            text: parse_quoted_string(args)?,
        })
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        ctx.narrate(reverse(&self.text));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::testing::{capture_context, output};

    #[tokio::test]
    async fn test_execute() {
        let (mut ctx, captured) = capture_context();
        let cmd = Reverse::parse(r#""Hello, World!""#).unwrap();
        cmd.execute(&mut ctx).await.unwrap();
        assert_eq!(output(&captured), "\n!dlroW ,olleH\n");
    }
}
