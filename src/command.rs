//! The [`StackCommand`] trait and the [`Context`] type commands receive when executed.

use crate::balance::BalanceChecker;
use crate::render::render_stack;
use crate::stack::Stack;
use anyhow::Result;
use async_trait::async_trait;
use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

pub(crate) type OutputHandler = Arc<dyn Fn(&[u8]) + Send + Sync>;

/// Execution context passed to [`StackCommand::execute`].
///
/// Owns the script's stack and gives access to the output handler, the pause
/// taken after each rendered step, and the checker used by `check`.
pub struct Context {
    pub(crate) stack: Stack<String>,
    pub(crate) output_handler: OutputHandler,
    pub(crate) step_delay: Duration,
    pub(crate) checker: BalanceChecker,
}

impl Context {
    pub fn stack(&self) -> &Stack<String> {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut Stack<String> {
        &mut self.stack
    }

    pub fn checker(&self) -> &BalanceChecker {
        &self.checker
    }

    /// Pass bytes through the output handler (e.g. to stdout or a custom sink).
    pub fn emit(&self, data: &[u8]) {
        (self.output_handler)(data);
    }

    /// Emit `line` as its own paragraph.
    pub fn narrate(&self, line: impl Display) {
        self.emit(format!("\n{line}\n").as_bytes());
    }

    /// Render the stack, then pause for the step delay.
    pub async fn show_stack(&self) {
        self.emit(format!("\n{}", render_stack(&self.stack)).as_bytes());
        if !self.step_delay.is_zero() {
            tokio::time::sleep(self.step_delay).await;
        }
    }
}

/// A single stack-script command.
///
/// Implement this trait to add a new command to the engine. Then:
///
/// 1. Define `pub const NAME: &'static str` on your struct, the script
///    keyword (e.g. `"push"`, `"check"`) used by the parser.
/// 2. Re-export the struct from `src/commands/mod.rs`.
/// 3. Add one entry to the `REGISTRY` in [`crate::parser`]:
///    `(MyCmd::NAME, MyCmd::parse_boxed)`.
#[async_trait(?Send)]
pub trait StackCommand: 'static {
    /// The command name, accessible at runtime through a trait object.
    fn name(&self) -> &'static str;

    /// Parse this command from the argument string (everything after the
    /// command keyword on the script line).
    fn parse(args: &str) -> Result<Self>
    where
        Self: Sized;

    /// Parse and box this command. Used as the function-pointer type stored in
    /// the command registry.
    fn parse_boxed(args: &str) -> Result<Box<dyn StackCommand>>
    where
        Self: Sized,
    {
        Ok(Box::new(Self::parse(args)?))
    }

    /// Execute the command using the provided engine context.
    async fn execute(&self, ctx: &mut Context) -> Result<()>;
}

/// Fail if a command that takes no arguments was given some.
pub(crate) fn expect_no_args(name: &str, args: &str) -> Result<()> {
    if args.trim().is_empty() {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "'{}' takes no arguments, got: {}",
            name,
            args.trim()
        ))
    }
}
