//! Braille → English decoding state machine.

use alloc::string::String;

use crate::cell::Cell;
use crate::error::TranslateError;
use crate::table::{self, CAPS_FOLLOWS, NUMBER_FOLLOWS};

/// Case and number shift markers carried across one decode scan.
///
/// Rebuilt per invocation; never shared or persisted.
#[derive(Clone, Copy, Default)]
struct ShiftState {
    /// The next letter-table emission is uppercased.
    caps_pending: bool,
    /// Cells are read through the digit table until a blank cell.
    number_mode: bool,
}

/// Decodes a Braille cell sequence back to English text.
///
/// Consumes the input six glyphs at a time and runs a two-flag state
/// machine over the cells:
///
/// - [`CAPS_FOLLOWS`] sets the case shift and emits nothing; the shift is
///   consumed by exactly one following letter-table emission.
/// - [`NUMBER_FOLLOWS`] enters number mode and emits nothing; subsequent
///   cells are read through the digit table.
/// - The blank cell ends number mode and decodes to a space.
/// - Every other cell decodes through the table selected by the current
///   mode: digits emit as-is, letters emit lowercase unless the case shift
///   is pending.
///
/// Number mode ends **only** on a blank cell; the encoding carries no
/// explicit end-of-number marker. A digit run directly followed by a letter
/// cell therefore reads the letter through the digit table: cells shared
/// with A-J come back as digits, all others fail with
/// [`TranslateError::UnknownCell`]. This asymmetry is inherent to the
/// notation.
///
/// # Errors
///
/// - [`TranslateError::MalformedInput`] if the length is not a multiple of
///   [`Cell::WIDTH`].
/// - [`TranslateError::InvalidGlyph`] if any character is neither `O` nor
///   `.` (defensive; gated callers never hit this).
/// - [`TranslateError::UnknownCell`] if a cell has no entry in the table
///   selected by the current mode.
///
/// # Example
///
/// ```
/// use braille::decode;
///
/// assert_eq!(decode(".....OO.....O.O...OO....").unwrap(), "Abc");
/// assert_eq!(decode(".O.OOOO.....O.O...OO....").unwrap(), "123");
/// assert_eq!(decode("......").unwrap(), " ");
/// ```
pub fn decode(input: &str) -> Result<String, TranslateError> {
    if input.len() % Cell::WIDTH != 0 {
        return Err(TranslateError::MalformedInput {
            length: input.len(),
        });
    }

    let mut out = String::with_capacity(input.len() / Cell::WIDTH);
    let mut state = ShiftState::default();

    // Accumulate glyphs into a cell, emitting on every sixth.
    let mut bits = 0u8;
    let mut filled = 0usize;
    let mut index = 0usize;

    for (position, character) in input.chars().enumerate() {
        match character {
            'O' => bits |= 1 << filled,
            '.' => {}
            _ => {
                return Err(TranslateError::InvalidGlyph {
                    character,
                    position,
                })
            }
        }
        filled += 1;
        if filled == Cell::WIDTH {
            decode_cell(Cell::from_bits(bits), index, &mut state, &mut out)?;
            bits = 0;
            filled = 0;
            index += 1;
        }
    }

    Ok(out)
}

/// Applies one cell to the shift state, emitting at most one character.
fn decode_cell(
    cell: Cell,
    index: usize,
    state: &mut ShiftState,
    out: &mut String,
) -> Result<(), TranslateError> {
    if cell == CAPS_FOLLOWS {
        state.caps_pending = true;
        return Ok(());
    }
    if cell == NUMBER_FOLLOWS {
        state.number_mode = true;
        return Ok(());
    }
    if cell.is_blank() {
        // A blank always decodes as a space below, whatever the mode.
        state.number_mode = false;
    }

    if state.number_mode {
        let digit = table::char_for_cell(cell, true)
            .ok_or(TranslateError::UnknownCell { cell, index })?;
        out.push(digit);
        return Ok(());
    }

    let letter = table::char_for_cell(cell, false)
        .ok_or(TranslateError::UnknownCell { cell, index })?;
    if state.caps_pending {
        out.push(letter.to_ascii_uppercase());
    } else {
        out.push(letter.to_ascii_lowercase());
    }
    state.caps_pending = false;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_empty_input() {
        assert_eq!(decode("").unwrap(), "");
    }

    #[test]
    fn test_plain_letters_decode_lowercase() {
        assert_eq!(decode("O.....O.O...OO....").unwrap(), "abc");
    }

    #[test]
    fn test_caps_marker_uppercases_one_letter() {
        assert_eq!(decode(".....OO.....O.O...OO....").unwrap(), "Abc");
    }

    #[test]
    fn test_caps_marker_consumed_by_space() {
        // caps, blank, a: the blank consumes the shift, so 'a' stays lower.
        assert_eq!(decode(".....O......O.....").unwrap(), " a");
    }

    #[test]
    fn test_number_marker_reads_digit_table() {
        assert_eq!(decode(".O.OOOO.....O.O...OO....").unwrap(), "123");
    }

    #[test]
    fn test_blank_cell_ends_number_mode() {
        // number, 1, blank, a: the blank returns the scan to the letter table.
        assert_eq!(decode(".O.OOOO...........O.....").unwrap(), "1 a");
    }

    #[test]
    fn test_number_mode_persists_across_letter_cells() {
        // number, 1, cell(A): still in number mode, A's cell reads as '1'.
        assert_eq!(decode(".O.OOOO.....O.....").unwrap(), "11");
    }

    #[test]
    fn test_number_mode_rejects_cells_without_digit_reading() {
        // number, cell(K): K's pattern has no digit entry.
        let k = table::cell_for_char('K', false).unwrap();
        let mut input = String::from(".O.OOO");
        input.push_str(&k.to_string());
        assert_eq!(
            decode(&input),
            Err(TranslateError::UnknownCell { cell: k, index: 1 })
        );
    }

    #[test]
    fn test_punctuation_decodes_unchanged() {
        assert_eq!(decode("..OO.O").unwrap(), ".");
        assert_eq!(decode("..OOO.").unwrap(), "!");
    }

    #[test]
    fn test_space_round_trip() {
        assert_eq!(decode("......").unwrap(), " ");
    }

    #[test]
    fn test_malformed_length() {
        assert_eq!(
            decode("O...."),
            Err(TranslateError::MalformedInput { length: 5 })
        );
        assert_eq!(
            decode("......O"),
            Err(TranslateError::MalformedInput { length: 7 })
        );
    }

    #[test]
    fn test_invalid_glyph() {
        assert_eq!(
            decode("O....x"),
            Err(TranslateError::InvalidGlyph {
                character: 'x',
                position: 5,
            })
        );
    }

    #[test]
    fn test_unknown_cell_reports_cell_index() {
        // caps marker, then an unmapped pattern.
        let unmapped = Cell::from_bits(0b010000);
        assert_eq!(table::char_for_cell(unmapped, false), None);
        let mut input = String::from(".....O");
        input.push_str(&unmapped.to_string());
        assert_eq!(
            decode(&input),
            Err(TranslateError::UnknownCell {
                cell: unmapped,
                index: 1,
            })
        );
    }

    #[test]
    fn test_shared_cell_decodes_to_letter() {
        // 'O' and '>' share O..OO.; the letter wins.
        assert_eq!(decode("O..OO.").unwrap(), "o");
    }
}
