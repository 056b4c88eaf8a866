// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use textindex::TextIndex;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    /// Log construction details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the suffix array of a file, one offset per line
    Sa { file: PathBuf },
    /// Print every suffix array row of a file as `offset<TAB>lcp`
    Lcp { file: PathBuf },
    /// Print the offsets of every occurrence of a pattern in a file
    Search { file: PathBuf, pattern: String },
    /// Print the longest substring occurring at least twice in a file
    Repeat { file: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let mut out = BufWriter::new(io::stdout().lock());

    match args.command {
        Command::Sa { file } => {
            let index = load(&file)?;
            for offset in index.suffix_array() {
                writeln!(out, "{offset}")?;
            }
        }
        Command::Lcp { file } => {
            let index = load(&file)?;
            for (offset, lcp) in index.suffix_array().iter().zip(index.lcp_array()) {
                writeln!(out, "{offset}\t{lcp}")?;
            }
        }
        Command::Search { file, pattern } => {
            let index = load(&file)?;
            let pattern: Vec<u32> = pattern.bytes().map(u32::from).collect();

            let mut offsets = index.occurrences(&pattern).to_vec();
            offsets.sort_unstable();
            if offsets.is_empty() {
                eprintln!("No occurrences found");
            }
            for offset in offsets {
                writeln!(out, "{offset}")?;
            }
        }
        Command::Repeat { file } => {
            let data = read(&file)?;
            let index = TextIndex::from_bytes(&data);

            match index.longest_repeated_substring() {
                Some(range) => writeln!(
                    out,
                    "{}\t{}\t{}",
                    range.start,
                    range.len(),
                    String::from_utf8_lossy(&data[range.clone()]),
                )?,
                None => eprintln!("No repeated substring found"),
            }
        }
    }

    out.flush()
        .context("I/O error occurred while writing output")?;

    Ok(())
}

fn read(path: &Path) -> anyhow::Result<Vec<u8>> {
    let data =
        fs::read(path).with_context(|| format!("Failed to read file '{}'", path.display()))?;
    anyhow::ensure!(
        data.len() <= u32::MAX as usize,
        "File '{}' is too large to index",
        path.display(),
    );

    Ok(data)
}

fn load(path: &Path) -> anyhow::Result<TextIndex> {
    let data = read(path)?;
    tracing::debug!(path = %path.display(), len = data.len(), "indexing file");

    Ok(TextIndex::from_bytes(&data))
}
