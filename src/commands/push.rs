//! [`Push`] command — places a value on top of the stack.
//!
//! Script syntax: `push 10` or `push "two words"`

use crate::command::{Context, StackCommand};
use crate::event::StackEvent;
use crate::parser::parse_quoted_string;
use anyhow::{Result, anyhow};
use async_trait::async_trait;

/// Pushes `value` onto the stack, narrates it and renders the stack.
pub struct Push {
    pub value: String,
}

impl Push {
    pub const NAME: &'static str = "push";

    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

#[async_trait(?Send)]
impl StackCommand for Push {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Result<Self> {
        let args = args.trim();
        if args.is_empty() {
            return Err(anyhow!("'push' needs a value"));
        }
        if args.starts_with('"') {
            Ok(Self::new(parse_quoted_string(args)?))
        } else {
            Ok(Self::new(args))
        }
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        ctx.stack_mut().push(self.value.clone());
        ctx.narrate(StackEvent::push(&self.value, ctx.stack().len()));
        ctx.show_stack().await;
        Ok(())
    }
}
