//! Command-line interface for sls.
//!
//! Maps flags onto a display configuration, lists every requested path and
//! prints the result, reporting unreadable paths on standard error.

use clap::{Parser, ValueEnum};
use sls::{DisplayBuilder, DisplayConfiguration, SortKey, list_targets};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::exit;

/// sls — list directory contents
#[derive(Parser)]
#[command(name = "sls", version, about, long_about = None)]
struct Cli {
    /// Display all files, including hidden
    #[arg(short, long)]
    all: bool,

    /// Display file attributes, one file per line (permissions, owner, group, links, size, date, time, name)
    #[arg(short, long)]
    long: bool,

    /// Recurse into directories
    #[arg(short, long)]
    recurse: bool,

    /// Colorize the output
    #[arg(short, long)]
    color: bool,

    /// Display icons denoting file type
    #[arg(short, long)]
    icons: bool,

    /// Display each file on its own line
    #[arg(short, long)]
    one_line: bool,

    /// Display human readable file sizes
    #[arg(long)]
    human_readable: bool,

    /// Sort by modification time
    #[arg(short = 't', long)]
    sort_time: bool,

    /// Sort by file size
    #[arg(short = 'S', long)]
    sort_size: bool,

    /// Sort key
    #[arg(long, value_enum, default_value_t = Sort::Name)]
    sort: Sort,

    /// List directories themselves, not their contents
    #[arg(short, long)]
    directory: bool,

    /// Append indicator (/, *) to entries
    #[arg(short = 'F', long)]
    classify: bool,

    /// Paths to list, current directory if omitted
    paths: Vec<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Sort {
    Name,
    Time,
    Size,
}

impl Cli {
    fn sort_key(&self) -> SortKey {
        if self.sort_time {
            SortKey::ModifiedTime
        } else if self.sort_size {
            SortKey::Size
        } else {
            match self.sort {
                Sort::Name => SortKey::Name,
                Sort::Time => SortKey::ModifiedTime,
                Sort::Size => SortKey::Size,
            }
        }
    }

    fn into_options(self) -> (DisplayConfiguration, Vec<PathBuf>) {
        let sort_key = self.sort_key();
        let options = DisplayBuilder::new()
            .show_hidden(self.all)
            .long_form(self.long)
            .recurse(self.recurse)
            .color(self.color)
            .icons(self.icons)
            .one_entry_per_line(self.one_line)
            .human_readable_sizes(self.human_readable)
            .directory_only(self.directory)
            .classify_indicator(self.classify)
            .sort_key(sort_key)
            .build();
        (options, self.paths)
    }
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    #[cfg(feature = "logging")]
    init_logging();

    let cli = Cli::parse();
    let (options, paths) = cli.into_options();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let mut failed = false;

    for section in list_targets(&options, &paths) {
        match section {
            Ok(text) => {
                let newline = if text.ends_with('\n') { "" } else { "\n" };
                if write!(handle, "{}{}", text, newline).is_err() {
                    eprintln!("sls: failed to write to stdout");
                    exit(1);
                }
            }
            Err(e) => {
                eprintln!("sls: {}", e);
                failed = true;
            }
        }
    }

    if failed {
        exit(1);
    }
}
