//! CLI tool for extracting image descriptions from PowerPoint files.

use alttext_core::{is_supported_upload, Error, Report, ReportFormatter, ReportSlot};
use alttext_pptx::PptxParser;
use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Extract image descriptions (alt text) from PowerPoint slides.
#[derive(Parser, Debug)]
#[command(name = "pptx-alttext")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input PowerPoint file(s) (.pptx)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output directory for reports (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the report to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Print the extracted descriptions as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let parser = PptxParser::new();
    let formatter = ReportFormatter::new();
    let slot = ReportSlot::new();

    let mut failed = 0;
    for input_path in &args.input {
        if let Err(e) = process_file(input_path, &args, &parser, &slot, &formatter) {
            eprintln!("Error processing {}: {:#}", input_path.display(), e);
            failed += 1;
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} file(s) failed", failed, args.input.len());
    }

    Ok(())
}

/// Extract one file, store it as the latest result, and emit its report.
fn process_file(
    input_path: &Path,
    args: &Args,
    parser: &PptxParser,
    slot: &ReportSlot,
    formatter: &ReportFormatter,
) -> Result<()> {
    let filename = input_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown");

    log::info!("Received file: {}", filename);
    if !is_supported_upload(filename) {
        log::warn!("Rejected file (invalid extension): {}", filename);
        return Err(Error::UnsupportedUpload(filename.to_string()).into());
    }

    let content = std::fs::read(input_path)
        .with_context(|| format!("Failed to open {}", input_path.display()))?;

    let result = parser
        .extract(&content)
        .with_context(|| format!("Failed to parse file {}", filename))?;
    log::info!(
        "Extracted picture descriptions from {}: {} slide(s), {} image(s) without description",
        filename,
        result.slide_count(),
        result.missing_description_count()
    );

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize descriptions")?;
        println!("{}", json);
    }

    slot.store(filename, result);

    let Some(report) = slot.render(formatter, Local::now().naive_local()) else {
        log::warn!("No report available for {}", filename);
        return Ok(());
    };

    if args.print {
        print!("{}", report.content);
    } else if !args.json {
        let output_path = get_output_path(input_path, &report, args.output.as_ref())?;
        write_output(&output_path, &report.content)?;
        if args.verbose {
            eprintln!("Written to: {}", output_path.display());
        }
    }

    Ok(())
}

/// Determine where a report is written.
fn get_output_path(input_path: &Path, report: &Report, output_dir: Option<&PathBuf>) -> Result<PathBuf> {
    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(&report.file_name)
        }
        None => match input_path.parent() {
            Some(parent) => parent.join(&report.file_name),
            None => PathBuf::from(&report.file_name),
        },
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
