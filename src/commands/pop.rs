//! [`Pop`] command — removes the top value.
//!
//! Script syntax: `pop`

use crate::command::{Context, StackCommand, expect_no_args};
use crate::event::StackEvent;
use anyhow::Result;
use async_trait::async_trait;

/// Pops the top value and renders the stack.
///
/// Popping an empty stack is narrated and the script carries on.
pub struct Pop;

impl Pop {
    pub const NAME: &'static str = "pop";
}

#[async_trait(?Send)]
impl StackCommand for Pop {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Result<Self> {
        expect_no_args(Self::NAME, args)?;
        Ok(Self)
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        match ctx.stack_mut().pop() {
            Ok(item) => {
                ctx.narrate(StackEvent::pop(item, ctx.stack().len()));
                ctx.show_stack().await;
            }
            Err(err) => {
                tracing::debug!(%err, "pop on empty stack");
                ctx.narrate(StackEvent::<String>::PopEmpty);
            }
        }
        Ok(())
    }
}
