//! Translation failure modes.

use crate::cell::Cell;
use core::fmt;

/// Error raised when a translation cannot be completed.
///
/// Every variant is terminal for the current translation: the scan aborts at
/// the first failure, no partial output is produced, and no retry is
/// meaningful (there are no transient failure modes in a pure in-memory
/// scan).
///
/// # Example
///
/// ```
/// use braille::{decode, TranslateError};
///
/// assert_eq!(
///     decode("O...."),
///     Err(TranslateError::MalformedInput { length: 5 }),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// Braille input whose length is not a multiple of the cell width.
    MalformedInput {
        /// Length of the offending input, in characters.
        length: usize,
    },
    /// Braille input containing a character that is neither `O` nor `.`.
    InvalidGlyph {
        /// The offending character.
        character: char,
        /// Character position in the input.
        position: usize,
    },
    /// English input character with no entry in the selected table.
    UnknownSymbol {
        /// The offending character.
        character: char,
        /// Character position in the input.
        position: usize,
    },
    /// Braille cell with no entry in the table selected by the shift state.
    UnknownCell {
        /// The unmapped cell.
        cell: Cell,
        /// Cell index in the input (character position divided by the cell
        /// width).
        index: usize,
    },
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput { length } => {
                write!(
                    f,
                    "Braille input length {} is not a multiple of {}",
                    length,
                    Cell::WIDTH
                )
            }
            Self::InvalidGlyph {
                character,
                position,
            } => {
                write!(
                    f,
                    "invalid Braille glyph '{}' (U+{:04X}) at position {}",
                    character, *character as u32, position
                )
            }
            Self::UnknownSymbol {
                character,
                position,
            } => {
                write!(
                    f,
                    "no Braille cell for character '{}' at position {}",
                    character, position
                )
            }
            Self::UnknownCell { cell, index } => {
                write!(f, "no English mapping for cell \"{}\" at cell index {}", cell, index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TranslateError {}
