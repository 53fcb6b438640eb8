//! Freq command implementation.

use clap::Parser;

/// Freq command arguments.
#[derive(Parser)]
pub struct FreqCommand {
    /// Language tag, e.g. `en`, `zh-TW`, `pt-BR`
    #[arg(short, long)]
    pub lang: String,

    /// Words or phrases to look up (`-` reads one per line from stdin)
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Value printed for unknown words
    #[arg(short, long, default_value_t = 0.0)]
    pub default: f64,

    /// Print centibels instead of frequencies
    #[arg(long, default_value_t = false)]
    pub cb: bool,
}

use super::read_input;
use crate::GlobalArgs;
use anyhow::Result as AnyhowResult;
use lexfreq_tokenizer::freq_to_cb;

pub fn run(cmd: FreqCommand, global: &GlobalArgs) -> AnyhowResult<()> {
    let lexicon = global.lexicon()?;

    let mut words = Vec::new();
    for word in cmd.words {
        if word == "-" {
            let input = read_input(word)?;
            words.extend(input.lines().map(str::to_string));
        } else {
            words.push(word);
        }
    }

    for word in &words {
        let freq = lexicon.word_frequency(word, &cmd.lang, cmd.default)?;
        if cmd.cb {
            match freq_to_cb(freq) {
                Ok(cb) => println!("{}\t{}", word, cb),
                Err(_) => println!("{}\t-", word),
            }
        } else {
            println!("{}\t{:e}", word, freq);
        }
    }
    Ok(())
}
