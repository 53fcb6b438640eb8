//! Top command implementation.

use clap::Parser;

/// Top command arguments.
#[derive(Parser)]
pub struct TopCommand {
    /// Language tag
    #[arg(short, long)]
    pub lang: String,

    /// Number of words to list
    #[arg(short, long, default_value_t = 10)]
    pub n: usize,

    /// Skip words with non-ASCII characters
    #[arg(long, default_value_t = false)]
    pub ascii: bool,
}

use crate::GlobalArgs;
use anyhow::Result as AnyhowResult;

pub fn run(cmd: TopCommand, global: &GlobalArgs) -> AnyhowResult<()> {
    let lexicon = global.lexicon()?;
    let language = lexicon.resolve(&cmd.lang)?;
    let table = lexicon.iter_wordlist(language.as_str())?;

    let words = lexicon.top_n_list(language.as_str(), cmd.n, cmd.ascii)?;
    for (rank, word) in words.iter().enumerate() {
        let cb = table.get_cb(word).unwrap_or_default();
        println!("{:>5}  {:>5} cB  {}", rank + 1, cb, word);
    }
    Ok(())
}
