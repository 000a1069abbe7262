//! # sheetrows-cli
//!
//! Command-line interface for extracting rows and records from Excel workbooks.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use serde_json::Value;
use sheetrows_reader::{json, ExcelReader, ReadOptions};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// sheetrows - Read one sheet of an Excel workbook as JSON
#[derive(Parser)]
#[command(name = "sheetrows")]
#[command(author, version, about = "Extract rows and records from Excel sheets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print every row, header row included
    Rows(SheetArgs),
    /// Print the header row
    Headers(SheetArgs),
    /// Print the rows after the header row
    Body(SheetArgs),
    /// Print one object per data row, keyed by the header row
    Records(SheetArgs),
}

#[derive(Args)]
struct SheetArgs {
    /// Workbook file (xlsx, xlsm, xlsb, xls, ods)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Zero-based sheet position
    #[arg(short, long, default_value_t = 0, conflicts_with = "sheet_name")]
    sheet: usize,

    /// Sheet name (instead of a position)
    #[arg(short = 'n', long = "sheet-name")]
    sheet_name: Option<String>,

    /// Keep empty cells in records as null
    #[arg(long)]
    include_empty: bool,

    /// Emit a record for data rows with no values
    #[arg(long)]
    keep_blank_rows: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pretty: bool,
}

impl SheetArgs {
    fn reader(&self) -> ExcelReader {
        let options = match &self.sheet_name {
            Some(name) => ReadOptions::default().with_sheet_name(name.clone()),
            None => ReadOptions::default().with_sheet_index(self.sheet),
        };
        let options = options
            .with_include_empty(self.include_empty)
            .with_skip_blank_records(!self.keep_blank_rows);
        tracing::debug!("Reading {} with {:?}", self.file.display(), options);
        ExcelReader::with_options(options)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    match run(&cli.command) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

/// Run a subcommand and render its result as JSON text.
fn run(command: &Command) -> Result<String> {
    let (args, value) = match command {
        Command::Rows(args) => {
            let rows = args.reader().rows(&args.file).with_context(|| failed(&args.file))?;
            (args, json::rows_to_json(&rows))
        }
        Command::Headers(args) => {
            let headers = args
                .reader()
                .headers(&args.file)
                .with_context(|| failed(&args.file))?;
            (args, json::row_to_json(&headers))
        }
        Command::Body(args) => {
            let body = args.reader().body(&args.file).with_context(|| failed(&args.file))?;
            (args, json::rows_to_json(&body))
        }
        Command::Records(args) => {
            let records = args
                .reader()
                .records(&args.file)
                .with_context(|| failed(&args.file))?;
            (args, json::records_to_json(&records))
        }
    };

    render(&value, args.pretty)
}

fn render(value: &Value, pretty: bool) -> Result<String> {
    Ok(json::to_json_string(value, pretty)?)
}

fn failed(path: &Path) -> String {
    format!("Failed to read workbook: {}", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_parse_records_by_name() {
        let cli = Cli::parse_from([
            "sheetrows",
            "records",
            "book.xlsx",
            "--sheet-name",
            "Data",
            "--include-empty",
        ]);
        let Command::Records(args) = cli.command else {
            panic!("expected records subcommand");
        };
        let reader = args.reader();
        assert_eq!(
            reader.options().sheet,
            sheetrows_reader::SheetSelector::Name("Data".to_string())
        );
        assert!(reader.options().include_empty);
        assert!(reader.options().skip_blank_records);
    }

    #[test]
    fn test_parse_rows_by_index() {
        let cli = Cli::parse_from(["sheetrows", "-v", "rows", "book.xlsx", "-s", "2", "-p"]);
        assert!(cli.verbose);
        let Command::Rows(args) = cli.command else {
            panic!("expected rows subcommand");
        };
        assert!(args.pretty);
        assert_eq!(
            args.reader().options().sheet,
            sheetrows_reader::SheetSelector::Index(2)
        );
    }

    fn write_people(path: &Path) {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let worksheet = workbook.add_worksheet();
        let rows = [["Name", "Age"], ["Alice", "30"], ["Bob", "25"]];
        for (row_idx, row) in rows.iter().enumerate() {
            for (col_idx, text) in row.iter().enumerate() {
                worksheet
                    .write_string(row_idx as u32, col_idx as u16, *text)
                    .unwrap();
            }
        }
        workbook.save(path).unwrap();
    }

    fn parse_with_file(command: &str, path: &Path) -> Cli {
        Cli::parse_from([
            OsStr::new("sheetrows"),
            OsStr::new(command),
            path.as_os_str(),
        ])
    }

    #[test]
    fn test_run_records_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("people.xlsx");
        write_people(&path);

        let cli = parse_with_file("records", &path);
        let text = run(&cli.command).unwrap();
        assert_eq!(
            text,
            r#"[{"Name":"Alice","Age":"30"},{"Name":"Bob","Age":"25"}]"#
        );
    }

    #[test]
    fn test_run_headers_and_body_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("people.xlsx");
        write_people(&path);

        let cli = parse_with_file("headers", &path);
        assert_eq!(run(&cli.command).unwrap(), r#"["Name","Age"]"#);

        let cli = parse_with_file("body", &path);
        assert_eq!(
            run(&cli.command).unwrap(),
            r#"[["Alice","30"],["Bob","25"]]"#
        );
    }

    #[test]
    fn test_run_missing_file() {
        let cli = Cli::parse_from(["sheetrows", "headers", "no-such-file.xlsx"]);
        let err = run(&cli.command).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read workbook"));
    }

    #[test]
    fn test_name_conflicts_with_index() {
        let result = Cli::try_parse_from([
            "sheetrows", "rows", "book.xlsx", "-s", "1", "-n", "Data",
        ]);
        assert!(result.is_err());
    }
}
