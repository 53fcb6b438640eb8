//! Languages command implementation.

use clap::Parser;

/// Languages command arguments.
#[derive(Parser)]
pub struct LanguagesCommand {
    /// Also print the number of tokens in each table
    #[arg(long, default_value_t = false)]
    pub sizes: bool,
}

use crate::GlobalArgs;
use anyhow::Result as AnyhowResult;

pub fn run(cmd: LanguagesCommand, global: &GlobalArgs) -> AnyhowResult<()> {
    let lexicon = global.lexicon()?;
    for language in lexicon.available_languages() {
        if cmd.sizes {
            let table = lexicon.store().load(language)?;
            println!("{}\t{}", language, table.len());
        } else {
            println!("{}", language);
        }
    }
    Ok(())
}
