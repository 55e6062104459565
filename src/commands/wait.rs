//! [`Wait`] command — pauses the script.
//!
//! Script syntax: `wait 500ms`, `wait 1.5s`, or a bare `wait` for one step delay.

use crate::command::{Context, StackCommand};
use crate::parser::parse_duration;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Pauses before the next command. `None` pauses for the engine's step delay.
pub struct Wait {
    pub duration: Option<Duration>,
}

impl Wait {
    pub const NAME: &'static str = "wait";
}

#[async_trait(?Send)]
impl StackCommand for Wait {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(args: &str) -> Result<Self> {
        let duration = if args.trim().is_empty() {
            None
        } else {
            Some(parse_duration(args)?)
        };
        Ok(Self { duration })
    }

    async fn execute(&self, ctx: &mut Context) -> Result<()> {
        let duration = self.duration.unwrap_or(ctx.step_delay);
        tokio::time::sleep(duration).await;
        Ok(())
    }
}
