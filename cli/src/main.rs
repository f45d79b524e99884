//! `braille` — bidirectional English ↔ Braille command-line translator.
//!
//! Joins all arguments into one input string, auto-detects whether it is a
//! Braille cell sequence or English text, and prints the translation on
//! stdout.
//!
//! **Usage:**
//! ```text
//! braille Hello world
//! braille .....OO.....O.O...OO....
//! ```
//!
//! Exits non-zero with a descriptive message on stderr when the input
//! cannot be translated.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{Context, Result};
use clap::Parser;

/// Translate between English text and six-dot ASCII Braille.
#[derive(Parser)]
#[command(
    name = "braille",
    version,
    about = "Translate between English text and six-dot ASCII Braille"
)]
struct Args {
    /// Input to translate; multiple arguments are joined with single spaces.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    input: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let input = args.input.join(" ");

    let output = braille::translate(&input)
        .with_context(|| format!("cannot translate {input:?}"))?;

    println!("{output}");
    Ok(())
}
