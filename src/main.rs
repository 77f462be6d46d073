//! Scout: quadrant assessment scoring CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use scout::catalog::{self, builtin};
use scout::reporter::{ConsoleReporter, JsonReporter};
use scout::responses::{self, DEFAULT_DEFINITION};
use std::path::PathBuf;
use std::process::ExitCode;

/// Scout: quadrant-based assessment scoring engine
#[derive(Parser, Debug)]
#[command(name = "scout")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Response file to score (omit when using a subcommand)
    path: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, short)]
    json: bool,

    /// Quiet mode (one line per assessment)
    #[arg(long, short)]
    quiet: bool,

    /// Show the per-category breakdown
    #[arg(long, short)]
    verbose: bool,

    /// Score an incomplete response file (missing ratings count as 0)
    #[arg(long)]
    partial: bool,

    /// Definition name or path (overrides the response file's own)
    #[arg(long, short)]
    definition: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a definition's question catalog
    Questions {
        /// Definition name or path
        #[arg(long, short, default_value = DEFAULT_DEFINITION)]
        definition: String,

        /// Output as JSON
        #[arg(long, short)]
        json: bool,
    },

    /// List the built-in definitions
    Definitions,

    /// Write a blank response template
    Init {
        /// Definition name or path
        #[arg(long, short, default_value = DEFAULT_DEFINITION)]
        definition: String,

        /// Output file (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if let Some(cmd) = args.command {
        return match cmd {
            Commands::Questions { definition, json } => run_questions(&definition, json),
            Commands::Definitions => run_definitions(),
            Commands::Init { definition, output } => run_init(&definition, output.as_deref()),
        };
    }

    let Some(path) = args.path.clone() else {
        anyhow::bail!("missing response file path (or a subcommand; see --help)");
    };

    let file = responses::load(&path)?;
    let assessment = responses::open_assessment(&file, args.definition.as_deref())?;

    if !assessment.is_complete() && !args.partial {
        let progress = assessment.progress();
        eprintln!(
            "{}: {} of {} questions answered (use --partial to score anyway)",
            "Incomplete".yellow(),
            progress.answered,
            progress.total
        );
        return Ok(ExitCode::from(1));
    }

    let report = assessment.report();
    if args.json {
        println!("{}", JsonReporter::new().report(&report));
    } else if args.quiet {
        console_reporter(&args).report_quiet(&report);
    } else {
        console_reporter(&args).report(assessment.definition(), &report);
    }

    Ok(ExitCode::SUCCESS)
}

fn console_reporter(args: &Args) -> ConsoleReporter {
    let mut reporter = ConsoleReporter::new();
    if args.no_color {
        reporter = reporter.without_colors();
    }
    if args.verbose {
        reporter = reporter.verbose();
    }
    reporter
}

fn run_questions(definition: &str, json: bool) -> Result<ExitCode> {
    let definition = catalog::load_definition(definition)?;
    if json {
        println!("{}", JsonReporter::new().catalog(&definition));
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} ({})", definition.title, definition.name);
    let scale: Vec<String> = scout::Rating::ALL
        .iter()
        .map(|r| format!("{} ({:+})", r.label(), r.value()))
        .collect();
    println!("Scale: {}", scale.join("  "));
    for category in &definition.categories {
        println!();
        println!("{}", category.title.bold());
        for question in definition
            .questions
            .iter()
            .filter(|q| q.category_id == category.id)
        {
            let mut tags = Vec::new();
            if question.weight != 1.0 {
                tags.push(format!("weight {}", question.weight));
            }
            if question.optional {
                tags.push("optional".to_string());
            }
            let suffix = if tags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", tags.join(", "))
            };
            println!("  {:<4} {}{}", question.id, question.text, suffix);
            if let (Some(min), Some(max)) = (&question.min_label, &question.max_label) {
                println!("       {}", format!("{} … {}", min, max).dimmed());
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_definitions() -> Result<ExitCode> {
    for definition in builtin::all() {
        println!(
            "{:<24} {} ({} questions)",
            definition.name,
            definition.title,
            definition.questions.len()
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn run_init(definition: &str, output: Option<&std::path::Path>) -> Result<ExitCode> {
    let template = responses::template(definition)?;
    match output {
        Some(path) => {
            std::fs::write(path, template)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{}: wrote {}", "Created".green(), path.display());
        }
        None => println!("{}", template),
    }
    Ok(ExitCode::SUCCESS)
}
