//! CLI commands for lexfreq.

pub mod build;
pub mod freq;
pub mod languages;
pub mod random;
pub mod tokenize;
pub mod top;

pub use build::BuildCommand;
pub use freq::FreqCommand;
pub use languages::LanguagesCommand;
pub use random::RandomCommand;
pub use tokenize::TokenizeCommand;
pub use top::TopCommand;

use std::io::Read;

/// Read the argument, or all of stdin when it is `-`.
pub(crate) fn read_input(input: String) -> std::io::Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(input)
    }
}
