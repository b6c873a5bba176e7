//! CLI entry point for fanout

use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use fanout::{
    FILE_COUNT_THRESHOLD, Format, LargeDirScanner, Organizer, print_csv, print_json, print_table,
    walk,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "fanout")]
#[command(about = "Find oversized directories and fan their files out into single-character buckets")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report directories holding more than 50,000 direct files
    Scan {
        /// Directory to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Render output in a particular format
        #[arg(long, value_enum, default_value = "table")]
        format: Format,
    },
    /// Move files into subdirectories named after the first character of the filename
    Organize {
        /// Directory to organize
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Compute and report movements without touching the filesystem
        #[arg(long)]
        dry_run: bool,

        /// Render output in a particular format
        #[arg(long, value_enum, default_value = "table")]
        format: Format,

        /// Control color output: auto, always, never
        #[arg(long, value_name = "WHEN", default_value = "auto")]
        color: ColorMode,
    },
}

fn main() {
    let args = Args::parse();

    let result = match args.command {
        Command::Scan { path, format } => run_scan(&path, format),
        Command::Organize {
            path,
            dry_run,
            format,
            color,
        } => run_organize(&path, dry_run, format, should_use_color(color)),
    };

    if let Err(e) = result {
        eprintln!("fanout: {}", e);
        process::exit(1);
    }
}

/// Resolve the root argument to a canonical absolute path, so every path in
/// the output is absolute.
fn resolve_root(path: &Path) -> PathBuf {
    match fs::canonicalize(path) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("fanout: cannot access '{}': {}", path.display(), e);
            process::exit(1);
        }
    }
}

fn run_scan(path: &Path, format: Format) -> io::Result<()> {
    let root = resolve_root(path);
    let stdout = io::stdout();
    let mut scanner = LargeDirScanner::new(FILE_COUNT_THRESHOLD, format, stdout.lock());
    walk(&root, &mut scanner)
}

fn run_organize(path: &Path, dry_run: bool, format: Format, use_color: bool) -> io::Result<()> {
    let root = resolve_root(path);

    let mut organizer = Organizer::new(dry_run);
    walk(&root, &mut organizer)?;
    let records = organizer.into_records();

    if dry_run {
        println!("Dry run completed. No files were moved.");
    }

    match format {
        Format::Table => print_table(&records, use_color),
        Format::Csv => print_csv(&records),
        Format::Json => print_json(&records),
    }
}
