//! Build command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Build command arguments.
#[derive(Parser)]
pub struct BuildCommand {
    /// Language the counts belong to
    #[arg(short, long)]
    pub lang: String,

    /// Count files, one per corpus (`token,count` lines)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Number of centibel buckets to keep; more buckets keep rarer words
    #[arg(short, long, default_value_t = 600)]
    pub buckets: u32,

    /// Drop tokens seen fewer times than this in a corpus
    #[arg(long, default_value_t = 0)]
    pub min_count: u64,

    /// Output directory (defaults to the data directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

use crate::GlobalArgs;
use anyhow::{Context, Result as AnyhowResult};
use lexfreq_builder::{build_from_count_files, BuildConfig};
use lexfreq_tokenizer::{LanguageIdentity, TableSaver, Tokenizer};
use std::time::Instant;

pub fn run(cmd: BuildCommand, global: &GlobalArgs) -> AnyhowResult<()> {
    let language: LanguageIdentity = cmd
        .lang
        .parse()
        .with_context(|| format!("invalid language tag {:?}", cmd.lang))?;
    let config = BuildConfig {
        min_count: cmd.min_count,
        ..BuildConfig::with_buckets(cmd.buckets)?
    };

    let start = Instant::now();
    let table = build_from_count_files(&language, &cmd.inputs, &Tokenizer::new(), config)?;

    let output_dir = cmd.output.as_ref().unwrap_or(&global.data_dir);
    let path = TableSaver::new(&table).save_to_dir(output_dir, &global.wordlist)?;

    println!(
        "Built {} table with {} tokens in {} buckets: {} ({:.2}s)",
        language,
        table.len(),
        table.buckets().len(),
        path.display(),
        start.elapsed().as_secs_f64()
    );
    Ok(())
}
