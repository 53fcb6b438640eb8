//! Random command implementation.

use clap::Parser;

/// Random command arguments.
#[derive(Parser)]
pub struct RandomCommand {
    /// Language tag
    #[arg(short, long, default_value = "en")]
    pub lang: String,

    /// Number of words
    #[arg(short, long, default_value_t = 5)]
    pub n: usize,

    /// Entropy per word, in bits
    #[arg(short, long, default_value_t = 12)]
    pub bits: u32,

    /// Only use ASCII words
    #[arg(long, default_value_t = false)]
    pub ascii: bool,
}

use crate::GlobalArgs;
use anyhow::Result as AnyhowResult;

pub fn run(cmd: RandomCommand, global: &GlobalArgs) -> AnyhowResult<()> {
    let lexicon = global.lexicon()?;
    let words = if cmd.ascii {
        lexicon.random_ascii_words(&cmd.lang, cmd.n, cmd.bits)?
    } else {
        lexicon.random_words(&cmd.lang, cmd.n, cmd.bits)?
    };
    log::debug!(
        "{} words at {} bits each: {} bits total",
        cmd.n,
        cmd.bits,
        cmd.n as u64 * u64::from(cmd.bits)
    );
    println!("{}", words);
    Ok(())
}
