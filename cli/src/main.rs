//! undocx CLI - DOCX tracked-change extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use undocx::{extract_file, render, JsonFormat};

#[derive(Parser)]
#[command(name = "undocx")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract tracked changes and comments from DOCX documents", long_about = None)]
struct Cli {
    /// Input DOCX file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value = "markdown")]
    format: ReportFormat,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    /// Markdown report
    Markdown,
    /// JSON report
    Json,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    // A progress bar only makes sense when the report goes to a file.
    let progress = cli.output.is_some().then(make_progress);

    if let Some(pb) = &progress {
        pb.set_message("Extracting changes...");
    }
    let report = extract_file(&cli.input)?;
    if let Some(pb) = &progress {
        pb.inc(1);
        pb.set_message("Rendering report...");
    }

    let output = match cli.format {
        ReportFormat::Markdown => render::to_markdown(&report),
        ReportFormat::Json => {
            let format = if cli.compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            render::to_json(&report, format)?
        }
    };
    if let Some(pb) = &progress {
        pb.inc(1);
    }

    match cli.output.as_deref() {
        Some(path) => {
            write_report(path, &output)?;
            if let Some(pb) = &progress {
                pb.finish_and_clear();
            }
            let summary = report.summary();
            println!("{} {}", "Saved to".green(), path.display());
            println!(
                "  {} comments, {} deletions, {} insertions, {} formatting, {} paragraph",
                summary.comments,
                summary.deletions,
                summary.insertions,
                summary.format_changes,
                summary.paragraph_changes
            );
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}

fn make_progress() -> ProgressBar {
    let pb = ProgressBar::new(2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}

fn write_report(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)
}
