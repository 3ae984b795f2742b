mod index;
mod output;
mod sequence;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use index::SuffixIndex;
use sequence::{LoadOptions, SequenceStore};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "sfx")]
#[command(about = "Suffix-array exact-match search for genetic sequence files")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Sequence file (when no subcommand is given)
    file: Option<PathBuf>,

    /// Pattern to search for
    pattern: Option<String>,

    /// Fold sequence and pattern to uppercase before matching
    #[arg(short = 'i', long, global = true)]
    ignore_case: bool,

    /// Report load/build/search timings on stderr
    #[arg(long, global = true)]
    timings: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a sequence file for a pattern
    Search {
        /// FASTA or raw sequence file
        file: PathBuf,

        /// Pattern to search for
        pattern: String,
    },
    /// List all suffixes in sorted order (diagnostic)
    Suffixes {
        /// FASTA or raw sequence file
        file: PathBuf,
    },
    /// Show sequence and index statistics
    Stats {
        /// FASTA or raw sequence file
        file: PathBuf,

        /// Emit JSON instead of the human-readable report
        #[arg(long)]
        json: bool,
    },
}

/// Flags shared by every command.
struct Options {
    fold_case: bool,
    timings: bool,
    color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let opts = Options {
        fold_case: cli.ignore_case,
        timings: cli.timings,
        color: !cli.no_color,
    };

    match cli.command {
        Some(Commands::Search { file, pattern }) => run_search(&file, &pattern, &opts),
        Some(Commands::Suffixes { file }) => run_suffixes(&file, &opts),
        Some(Commands::Stats { file, json }) => run_stats(&file, json, &opts),
        None => match (cli.file, cli.pattern) {
            (Some(file), Some(pattern)) => run_search(&file, &pattern, &opts),
            (Some(file), None) => run_stats(&file, false, &opts),
            (None, _) => {
                Cli::command().print_help()?;
                Ok(())
            }
        },
    }
}

fn run_search(file: &Path, pattern: &str, opts: &Options) -> Result<()> {
    let (store, load_time) = load_store(file, opts)?;
    let (index, build_time) = build_index(&store);

    let pattern = if opts.fold_case {
        pattern.to_ascii_uppercase()
    } else {
        pattern.to_string()
    };

    let started = Instant::now();
    let mut hits = index
        .search(pattern.as_bytes())
        .context("Invalid search pattern")?;
    let search_time = started.elapsed();

    hits.sort_unstable();
    output::print_hits(&pattern, &hits, opts.color)?;

    if opts.timings {
        report_timings(&[
            ("load", load_time),
            ("build", build_time),
            ("search", search_time),
        ]);
    }

    Ok(())
}

fn run_suffixes(file: &Path, opts: &Options) -> Result<()> {
    let (store, load_time) = load_store(file, opts)?;
    let (index, build_time) = build_index(&store);

    output::print_suffix_listing(&index, opts.color)?;

    if opts.timings {
        report_timings(&[("load", load_time), ("build", build_time)]);
    }

    Ok(())
}

fn run_stats(file: &Path, json: bool, opts: &Options) -> Result<()> {
    let (store, load_time) = load_store(file, opts)?;
    let (index, build_time) = build_index(&store);

    let summary = index::stats::summarize(&store, &index, opts.fold_case);
    index::stats::show_stats(&summary, json)?;

    if opts.timings {
        report_timings(&[("load", load_time), ("build", build_time)]);
    }

    Ok(())
}

fn load_store(file: &Path, opts: &Options) -> Result<(SequenceStore, Duration)> {
    let options = LoadOptions {
        fold_case: opts.fold_case,
    };
    let started = Instant::now();
    let store = sequence::load_sequence_with(file, options)
        .with_context(|| format!("Failed to load sequence from {}", file.display()))?;
    Ok((store, started.elapsed()))
}

/// Build the index, with a spinner for sequences large enough to take a
/// noticeable moment.
fn build_index(store: &SequenceStore) -> (SuffixIndex<'_>, Duration) {
    let started = Instant::now();

    #[cfg(feature = "progress")]
    let spinner = (store.valid_len() > 1_000_000).then(|| {
        let spinner = indicatif::ProgressBar::new_spinner();
        spinner.set_style(
            indicatif::ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message(format!("Sorting {} suffixes...", store.valid_len()));
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    });

    let index = SuffixIndex::build(store);

    #[cfg(feature = "progress")]
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    (index, started.elapsed())
}

fn report_timings(phases: &[(&str, Duration)]) {
    let total: Duration = phases.iter().map(|(_, d)| *d).sum();
    for (name, duration) in phases {
        eprintln!("{:>7}: {:.2?}", name, duration);
    }
    eprintln!("{:>7}: {:.2?}", "total", total);
}
