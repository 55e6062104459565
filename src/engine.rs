use crate::balance::BalanceChecker;
use crate::command::{Context, OutputHandler, StackCommand};
use crate::stack::Stack;
use anyhow::{Context as _, Result};
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

/// Pause after each rendered step when none is configured.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_secs(1);

/// Runs stack scripts against a single [`Stack<String>`], narrating each step.
pub struct Engine {
    ctx: Context,
}

impl Engine {
    /// Create an engine that writes all output to stdout.
    pub fn new() -> Self {
        Self::with_handler(|data| {
            let mut stdout = io::stdout().lock();
            // Output is best-effort, like `print!` without the panic.
            let _ = stdout.write_all(data);
            let _ = stdout.flush();
        })
    }

    /// Create an engine that passes all output to `handler`.
    ///
    /// Useful for capturing narration in tests or routing it elsewhere.
    pub fn with_handler<F>(handler: F) -> Self
    where
        F: Fn(&[u8]) + Send + Sync + 'static,
    {
        let output_handler: OutputHandler = Arc::new(handler);
        Engine {
            ctx: Context {
                stack: Stack::new(),
                output_handler,
                step_delay: DEFAULT_STEP_DELAY,
                checker: BalanceChecker::default(),
            },
        }
    }

    /// Set the pause taken after each rendered step. Zero disables pacing.
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.ctx.step_delay = delay;
        self
    }

    /// Use `checker` for `check` commands instead of the standard table.
    pub fn with_checker(mut self, checker: BalanceChecker) -> Self {
        self.ctx.checker = checker;
        self
    }

    /// Execute commands in order, stopping at the first one that fails.
    pub async fn execute(&mut self, commands: Vec<Box<dyn StackCommand>>) -> Result<()> {
        for (step, cmd) in commands.iter().enumerate() {
            tracing::trace!(step = step + 1, command = cmd.name(), "executing");
            cmd.execute(&mut self.ctx)
                .await
                .with_context(|| format!("Command {} ('{}') failed", step + 1, cmd.name()))?;
        }
        tracing::debug!(
            steps = commands.len(),
            depth = self.ctx.stack.len(),
            "script finished"
        );
        Ok(())
    }

    /// The script stack as the executed commands left it.
    pub fn stack(&self) -> &Stack<String> {
        &self.ctx.stack
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
