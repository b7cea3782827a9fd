//! Runners behind the `rebuild-outline` and `validate-outline` binaries.
//!
//! Each runner takes an argument iterator so the full flow is testable
//! without spawning a process. The flags only override the corpus' fixed
//! default filenames; with no flags the tools behave exactly like the
//! original editing workflow expects. Validation problems are part of the
//! console report, not the exit status, so both runners return `Ok` after a
//! run that printed errors.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, error::ErrorKind};
use tracing::warn;

use crate::constants::outline::{
    DEFAULT_DETAILS_PATH, DEFAULT_REBUILD_OUTPUT_PATH, PLACEHOLDER_FIELDS,
};
use crate::constants::report::{GLYPH_ERR, GLYPH_OK, PREVIEW_LIMIT};
use crate::constants::table::DEFAULT_TABLE_PATH;
use crate::grouping::{consecutive_runs, repeated_run_labels};
use crate::outline::{build_outline, read_outline, write_outline};
use crate::table::read_table;
use crate::validate::{EntryOutcome, ValidationReport, validate_outline};

#[derive(Debug, Parser)]
#[command(
    name = "rebuild-outline",
    disable_help_subcommand = true,
    about = "Rebuild the adhikarana outline from the sutra table",
    long_about = "Group consecutive sutra rows by adhikarana and write a fresh ordered \
                  JSON outline with empty placeholder fields for later editing."
)]
struct RebuildCli {
    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_TABLE_PATH,
        help = "Sutra table CSV to read"
    )]
    table: PathBuf,
    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_REBUILD_OUTPUT_PATH,
        help = "Outline JSON file to write"
    )]
    output: PathBuf,
}

#[derive(Debug, Parser)]
#[command(
    name = "validate-outline",
    disable_help_subcommand = true,
    about = "Validate declared adhikarana spans against the sutra table",
    long_about = "Recompute each adhikarana's sutra span from the table and compare it \
                  against the span declared in the outline document, reporting every \
                  mismatch or unknown adhikarana."
)]
struct ValidateCli {
    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_TABLE_PATH,
        help = "Sutra table CSV to read"
    )]
    table: PathBuf,
    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_DETAILS_PATH,
        help = "Outline JSON file to check"
    )]
    details: PathBuf,
}

/// Rebuild the outline from the table and print a summary of the result.
pub fn run_rebuild<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    init_tracing();

    let Some(cli) = parse_cli::<RebuildCli, _>(
        std::iter::once("rebuild-outline".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let rows = read_table(&cli.table)?;
    let runs = consecutive_runs(&rows);
    for (name, count) in repeated_run_labels(&runs) {
        warn!(
            adhikarana = %name,
            runs = count,
            "adhikarana occupies separated runs; the validator will use its full first-to-last span"
        );
    }

    let outline = build_outline(&runs);
    write_outline(&cli.output, &outline, &PLACEHOLDER_FIELDS)?;

    println!("Created {} adhikarana entries", outline.len());
    println!();
    println!("First {PREVIEW_LIMIT} entries:");
    for (key, entry) in outline.iter().take(PREVIEW_LIMIT) {
        println!("  {key}: {} - {}", entry.name, entry.sutras);
    }

    Ok(())
}

/// Validate the outline against the table and print a per-entry report.
pub fn run_validate<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    init_tracing();

    let Some(cli) = parse_cli::<ValidateCli, _>(
        std::iter::once("validate-outline".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let rows = read_table(&cli.table)?;
    let outline = read_outline(&cli.details)?;
    let report = validate_outline(&rows, &outline)?;

    println!("Checking adhikarana ranges...");
    println!();
    print_report(&report, &cli.table.display().to_string());

    if report.errors_found() {
        println!();
        println!("{GLYPH_ERR} Found errors in adhikarana ranges. Please fix them.");
    } else {
        println!();
        println!("{GLYPH_OK} All adhikarana ranges are correct!");
    }

    Ok(())
}

fn print_report(report: &ValidationReport, table_name: &str) {
    for check in &report.checks {
        match &check.outcome {
            EntryOutcome::Match { span } => {
                println!("{GLYPH_OK} {}: {} - {span}", check.key, check.name);
            }
            EntryOutcome::LabelNotFound => {
                println!("{GLYPH_ERR} {}: {}", check.key, check.name);
                println!("   Not found in {table_name}");
                println!();
            }
            EntryOutcome::SpanMismatch {
                declared,
                actual,
                sutra_ids,
            } => {
                println!("{GLYPH_ERR} {}: {}", check.key, check.name);
                println!("   Declared: {declared}");
                println!("   Actual:   {actual}");
                println!("   Sutras:   {}", sutra_ids.join(", "));
                println!();
            }
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
