//! [`Empty`] command — says whether the stack is empty.
//!
//! Script syntax: `empty`

use crate::command::{Context, StackCommand, expect_no_args};
use anyhow::Result;
use async_trait::async_trait;

pub struct Empty;

impl Empty {
    pub const NAME: &'static str = "empty";
}

#[async_trait(?Send)]
impl StackCommand for Empty {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Result<Self> {
        expect_no_args(Self::NAME, args)?;
        Ok(Self)
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        if ctx.stack().is_empty() {
            ctx.narrate("The stack is currently empty.");
        } else {
            ctx.narrate("The stack is not empty.");
        }
        ctx.show_stack().await;
        Ok(())
    }
}
