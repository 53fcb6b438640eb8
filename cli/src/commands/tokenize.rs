//! Tokenize command implementation.

use clap::Parser;

/// Tokenize command arguments.
#[derive(Parser)]
pub struct TokenizeCommand {
    /// Language tag
    #[arg(short, long, default_value = "en")]
    pub lang: String,

    /// Text to tokenize (`-` reads stdin)
    pub input: String,
}

use super::read_input;
use anyhow::Result as AnyhowResult;
use lexfreq_tokenizer::Tokenizer;

/// Tokenizing needs no table, so no data directory is opened.
pub fn run(cmd: TokenizeCommand) -> AnyhowResult<()> {
    let tokenizer = Tokenizer::new();
    let text = read_input(cmd.input)?;

    for line in text.lines() {
        let tokens = tokenizer.tokenize_tag(line, &cmd.lang)?;
        println!("{}", tokens.join(" "));
    }
    Ok(())
}
