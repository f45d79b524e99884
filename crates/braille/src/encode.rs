//! English → Braille encoding scan.

use alloc::string::String;

use crate::cell::Cell;
use crate::error::TranslateError;
use crate::table::{self, CAPS_FOLLOWS, NUMBER_FOLLOWS};

/// Encodes English text as a Braille cell sequence.
///
/// Scans left to right, one character at a time:
///
/// - An uppercase letter is preceded by the [`CAPS_FOLLOWS`] control cell.
/// - The first digit of a contiguous run is preceded by [`NUMBER_FOLLOWS`];
///   the marker is per run, not per digit, and any non-digit ends the run.
/// - Digits are looked up in the digit table while a run is active; all
///   other characters go through the letter table after upcasing.
///
/// The output is the concatenation of six-glyph cells with no delimiter.
/// No end-of-number marker exists in this notation; the decoder leaves
/// number mode only on a blank (space) cell.
///
/// # Errors
///
/// Fails with [`TranslateError::UnknownSymbol`] at the first character
/// without a table entry. The whole encode aborts; no partial output.
///
/// # Example
///
/// ```
/// use braille::encode;
///
/// assert_eq!(encode("Abc").unwrap(), ".....OO.....O.O...OO....");
/// assert_eq!(encode("123").unwrap(), ".O.OOOO.....O.O...OO....");
/// assert_eq!(encode(" ").unwrap(), "......");
/// ```
pub fn encode(input: &str) -> Result<String, TranslateError> {
    let mut out = String::with_capacity(input.len() * Cell::WIDTH);
    let mut number_run_active = false;

    for (position, character) in input.chars().enumerate() {
        if !character.is_ascii_digit() {
            number_run_active = false;
        }
        if character.is_ascii_uppercase() {
            push_cell(&mut out, CAPS_FOLLOWS);
        }
        if character.is_ascii_digit() && !number_run_active {
            number_run_active = true;
            push_cell(&mut out, NUMBER_FOLLOWS);
        }
        let cell = table::cell_for_char(character, number_run_active).ok_or(
            TranslateError::UnknownSymbol {
                character,
                position,
            },
        )?;
        push_cell(&mut out, cell);
    }

    Ok(out)
}

fn push_cell(out: &mut String, cell: Cell) {
    for glyph in cell.to_glyphs() {
        out.push(glyph as char);
    }
}
