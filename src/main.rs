use anyhow::{Context, Result};
use clap::Parser;
use flowprep::cli::{AnalyzeArgs, Command, RootArgs, SimplifyArgs};
use flowprep::config::{load_config, SimplifyConfig};
use flowprep::simplify::Simplifier;
use flowprep::step::{NumberedStep, StepKind};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let args = RootArgs::parse();
    let verbose = matches!(&args.command, Command::Simplify(cmd) if cmd.verbose);
    init_logging(verbose);

    let result = match args.command {
        Command::Simplify(args) => cmd_simplify(args),
        Command::Analyze(args) => cmd_analyze(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let default_level = if verbose { "debug" } else { "info" };
        EnvFilter::new(format!("flowprep={default_level}"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn cmd_simplify(args: SimplifyArgs) -> Result<()> {
    let messy_text = fs::read_to_string(&args.input)
        .with_context(|| format!("read input {}", args.input.display()))?;

    if args.verbose {
        println!("Reading from: {}", args.input.display());
        println!("Input length: {} characters", messy_text.len());
    }

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => SimplifyConfig::default(),
    };

    let simplifier = Simplifier::new(config)?;
    let clean_text = simplifier.simplify(&messy_text);

    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&args.input));
    fs::write(&output, &clean_text).with_context(|| format!("write output {}", output.display()))?;

    println!("Simplified workflow saved to: {}", output.display());

    if args.verbose {
        println!("Output length: {} characters", clean_text.len());
        println!();
        println!("Preview:");
        let lines: Vec<&str> = clean_text.lines().collect();
        for line in lines.iter().take(10) {
            println!("  {line}");
        }
        if lines.len() > 10 {
            println!("  ...");
        }
    }

    Ok(())
}

fn cmd_analyze(args: AnalyzeArgs) -> Result<()> {
    let messy_text = fs::read_to_string(&args.input)
        .with_context(|| format!("read input {}", args.input.display()))?;

    let simplifier = Simplifier::new(SimplifyConfig::default())?;
    let steps = simplifier.simplify_to_dict(&messy_text);

    if args.json {
        let json = serde_json::to_string_pretty(&steps).context("serialize analysis")?;
        println!("{json}");
        return Ok(());
    }

    println!("Workflow analysis");
    println!();
    println!("Total steps: {}", steps.len());

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for step in &steps {
        *counts.entry(step.kind.as_str()).or_default() += 1;
    }
    println!();
    println!("Step types:");
    for (kind, count) in &counts {
        println!("  - {kind}: {count}");
    }

    let decisions: Vec<&NumberedStep> = steps.iter().filter(|s| s.kind.is_decision()).collect();
    if !decisions.is_empty() {
        println!();
        println!("Decision points: {}", decisions.len());
        for decision in &decisions {
            println!("  {}. {}", decision.number, decision.text);
            print_branches(&decision.kind, "     ");
        }
    }

    println!();
    println!("All steps:");
    for step in &steps {
        println!("  [{}] {}. {}", step.kind, step.number, step.text);
        print_branches(&step.kind, "      ");
    }

    Ok(())
}

fn print_branches(kind: &StepKind, indent: &str) {
    if let StepKind::Decision { branches } = kind {
        for branch in branches {
            println!("{indent}- {branch}");
        }
    }
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "workflow".to_string());
    input.with_file_name(format!("{stem}_clean.txt"))
}
