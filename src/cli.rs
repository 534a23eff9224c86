//! CLI argument parsing for the workflow simplifier.
//!
//! The CLI is intentionally thin: it reads files, hands text to the library,
//! and writes results, so the same core logic can be reused elsewhere.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "flowprep",
    version,
    about = "Simplify messy workflow text into clean, numbered steps",
    after_help = "Commands:\n  simplify <INPUT>   Rewrite a messy workflow file as a clean step list\n  analyze <INPUT>    Show how the simplifier interprets a workflow file\n\nExamples:\n  flowprep simplify messy.txt -o clean.txt\n  flowprep simplify messy.txt -c options.json --verbose\n  flowprep analyze messy.txt\n  flowprep analyze messy.txt --json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Simplify(SimplifyArgs),
    Analyze(AnalyzeArgs),
}

/// Simplify command inputs.
#[derive(Parser, Debug)]
#[command(about = "Rewrite a messy workflow file as a clean, numbered step list")]
pub struct SimplifyArgs {
    /// Input file with messy workflow text
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file for the clean workflow (default: <input stem>_clean.txt)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// JSON config file with simplifier options
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emit a verbose transcript of the run
    #[arg(short, long)]
    pub verbose: bool,
}

/// Analyze command inputs.
#[derive(Parser, Debug)]
#[command(about = "Show how the simplifier interprets a workflow file")]
pub struct AnalyzeArgs {
    /// Workflow file to analyze
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}
