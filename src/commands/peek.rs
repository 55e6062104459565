//! [`Peek`] command — reports the top value without removing it.
//!
//! Script syntax: `peek`

use crate::command::{Context, StackCommand, expect_no_args};
use crate::event::StackEvent;
use anyhow::Result;
use async_trait::async_trait;

pub struct Peek;

impl Peek {
    pub const NAME: &'static str = "peek";
}

#[async_trait(?Send)]
impl StackCommand for Peek {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Result<Self> {
        expect_no_args(Self::NAME, args)?;
        Ok(Self)
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        match ctx.stack().peek() {
            Ok(item) => {
                ctx.narrate(StackEvent::Peek { item });
                ctx.show_stack().await;
            }
            Err(_) => ctx.narrate(StackEvent::<String>::PeekEmpty),
        }
        Ok(())
    }
}
