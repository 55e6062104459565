use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use stacky::parser::parse_duration;
use stacky::{BalanceChecker, Engine, Report, demo, parse_str, reverse};
use std::io::{self, Read};
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "stacky",
    about = "Check balanced delimiters and walk through stack operations",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Check an expression for balanced (), [] and {}
    Check {
        /// Expression to check, or `-` to read it from stdin
        expression: String,

        /// Narrate every push and pop, and explain an unbalanced result
        #[arg(short, long)]
        trace: bool,
    },

    /// Reverse text by pushing and popping its characters
    Reverse {
        /// Text to reverse
        text: String,
    },

    /// Run a stack script read from stdin
    Run {
        /// Pause after each step (e.g. `500ms`, `1s`)
        #[arg(short, long, default_value = "1s", value_parser = parse_delay)]
        delay: Duration,
    },

    /// Run the built-in stack walkthrough
    Demo {
        /// Pause after each step (e.g. `500ms`, `1s`)
        #[arg(short, long, default_value = "1s", value_parser = parse_delay)]
        delay: Duration,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    match args.command {
        Cmd::Check { expression, trace } => check(&expression, trace)?,
        Cmd::Reverse { text } => println!("{}", reverse(&text)),
        Cmd::Run { delay } => {
            let mut script = String::new();
            io::stdin()
                .read_to_string(&mut script)
                .context("Failed to read script from stdin")?;
            let commands = parse_str(&script).context("Failed to parse script")?;
            Engine::new()
                .with_step_delay(delay)
                .execute(commands)
                .await
                .context("Failed to execute script")?;
        }
        Cmd::Demo { delay } => {
            println!("Self-Explanatory Stack Operations");
            println!("=================================");
            Engine::new()
                .with_step_delay(delay)
                .execute(demo()?)
                .await
                .context("Failed to execute demo")?;
        }
    }

    Ok(())
}

/// Print the verdict for `expression`. Unbalanced input is a normal result
/// and does not change the exit code.
fn check(expression: &str, trace: bool) -> Result<()> {
    let checker = BalanceChecker::default();
    let (expression, report) = if expression == "-" {
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read expression from stdin")?;
        let report = if trace {
            checker.check_bytes_with(&bytes, |event| println!("{event}"))?
        } else {
            checker.check_bytes(&bytes)?
        };
        let text = String::from_utf8_lossy(&bytes);
        (text.trim_end_matches(['\r', '\n']).to_string(), report)
    } else if trace {
        let report = checker.check_with(expression, |event| println!("{event}"));
        (expression.to_string(), report)
    } else {
        (expression.to_string(), checker.check(expression))
    };

    if trace && let Report::Unbalanced(reason) = &report {
        println!("Unbalanced: {reason}");
    }
    println!(
        "Expression '{}' is balanced: {}",
        expression,
        report.is_balanced()
    );
    Ok(())
}

fn parse_delay(s: &str) -> Result<Duration, String> {
    parse_duration(s).map_err(|e| format!("{e:#}"))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}
