//! CLI layer: argument parsing, command dispatch, and subcommand implementations.

pub mod args;
mod error;
mod snapshot;

use args::{CallArgs, LimitArgs};
use error::CliError;

use std::fs;
use std::time::Instant;

use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;

use repo_tools::{ToolCatalog, ToolConfig, ToolKind, UnconfiguredBackend};

// ─── CLI ─────────────────────────────────────────────────────────────

/// Repository exploration tools (ls, glob, grep, read, search) for LLM tool calling
#[derive(Parser, Debug)]
#[command(name = "repo-tools", version, about, after_help = "\
Run 'repo-tools <COMMAND> --help' for detailed options.\n\
Example: repo-tools call repository_grep -d . --args '{\"pattern\":\"fn main\"}'")]
pub(crate) struct Cli {
    /// Log level for stderr output (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Print the tool definitions (JSON Schema) as JSON
    Tools,

    /// Run one tool against a snapshot and print its text result
    Call(CallArgs),
}

// ─── Main entry point ───────────────────────────────────────────────

pub fn run() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let result = match cli.command {
        Commands::Tools => cmd_tools(),
        Commands::Call(args) => cmd_call(args),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(level: &str) {
    let log_level = match level {
        "error" => tracing::Level::ERROR,
        "info" => tracing::Level::INFO,
        "debug" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => tracing::Level::WARN,
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

// ─── Commands ───────────────────────────────────────────────────────

fn cmd_tools() -> Result<bool, CliError> {
    let definitions: Vec<_> = ToolKind::ALL.into_iter().map(ToolKind::definition).collect();
    println!("{}", serde_json::to_string_pretty(&definitions)?);
    Ok(true)
}

/// Returns `Ok(false)` when the tool produced an error payload.
fn cmd_call(args: CallArgs) -> Result<bool, CliError> {
    let kind = ToolKind::from_name(&args.tool).ok_or_else(|| CliError::UnknownTool(args.tool.clone()))?;
    let tool_args = parse_tool_args(&args.args)?;
    let config = build_config(&args.limits)?;

    let start = Instant::now();
    let files = snapshot::load_snapshot(&args.snapshot)?;
    info!(files = files.len(), elapsed_ms = start.elapsed().as_millis() as u64, "Snapshot ready");

    let catalog = ToolCatalog::new(files, UnconfiguredBackend, config);
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let result = runtime.block_on(catalog.call(kind, &tool_args));

    println!("{}", result.text());
    Ok(!result.is_error)
}

fn parse_tool_args(raw: &str) -> Result<Value, CliError> {
    let value: Value = serde_json::from_str(raw)?;
    if !value.is_object() {
        return Err(CliError::InvalidArgs("--args must be a JSON object".to_string()));
    }
    Ok(value)
}

/// `--config` file first, then individual flags on top.
fn build_config(limits: &LimitArgs) -> Result<ToolConfig, CliError> {
    let mut config = match &limits.config {
        Some(path) => serde_json::from_str::<ToolConfig>(&fs::read_to_string(path)?)?,
        None => ToolConfig::default(),
    };
    if let Some(n) = limits.max_read_lines {
        config.max_read_lines = n;
    }
    if let Some(n) = limits.max_read_chars {
        config.max_read_chars = n;
    }
    if let Some(n) = limits.grep_max_per_file {
        config.grep_max_per_file = n;
    }
    Ok(config)
}

// ─── Tests ───────────────────────────────────────────────────────────
