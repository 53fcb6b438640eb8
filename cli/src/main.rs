//! Lexfreq CLI - Command-line interface for word frequency tables.
//!
//! This is the main entry point for the `lexfreq` command-line tool.

mod commands;

use clap::{Args, Parser, Subcommand};
use commands::{
    BuildCommand, FreqCommand, LanguagesCommand, RandomCommand, TokenizeCommand, TopCommand,
};
use lexfreq_tokenizer::{Lexicon, DEFAULT_WORDLIST};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lexfreq")]
#[command(about = "Word frequencies, tokenization and random words across languages", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Directory holding table files
    #[arg(long, global = true, env = "LEXFREQ_DATA", default_value = "data")]
    pub data_dir: PathBuf,

    /// Wordlist to use
    #[arg(long, global = true, default_value = DEFAULT_WORDLIST)]
    pub wordlist: String,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl GlobalArgs {
    /// Open the configured wordlist.
    pub fn lexicon(&self) -> anyhow::Result<Lexicon> {
        let lexicon = Lexicon::builder()
            .data_dir(&self.data_dir)
            .wordlist(self.wordlist.clone())
            .build()?;
        Ok(lexicon)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build a table from corpus count files
    Build(BuildCommand),
    /// Look up word or phrase frequencies
    Freq(FreqCommand),
    /// Split text into table tokens
    Tokenize(TokenizeCommand),
    /// List the most frequent words
    Top(TopCommand),
    /// Generate random words
    Random(RandomCommand),
    /// List languages with a table
    Languages(LanguagesCommand),
}

fn init_logging(global: &GlobalArgs) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if global.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if global.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.global);

    match cli.command {
        Commands::Build(cmd) => commands::build::run(cmd, &cli.global)?,
        Commands::Freq(cmd) => commands::freq::run(cmd, &cli.global)?,
        Commands::Tokenize(cmd) => commands::tokenize::run(cmd)?,
        Commands::Top(cmd) => commands::top::run(cmd, &cli.global)?,
        Commands::Random(cmd) => commands::random::run(cmd, &cli.global)?,
        Commands::Languages(cmd) => commands::languages::run(cmd, &cli.global)?,
    }

    Ok(())
}
