//! Bidirectional English ↔ six-dot Braille translation.
//!
//! Translates between plain English text and the two-glyph ASCII Braille
//! convention (`O` = raised dot, `.` = flat), auto-detecting direction from
//! the shape of the input. Everything is a pure function over compile-time
//! lookup tables; there is no I/O, no shared mutable state, and no heap
//! use beyond the output string.
//!
//! # Translation Model
//!
//! ```text
//! Cell      = 6 glyphs, one Braille character ("O.O..." etc.)
//! Input     → direction detector → encoder | decoder → output
//! Markers   = CAPS_FOLLOWS (.....O), NUMBER_FOLLOWS (.O.OOO)
//! ```
//!
//! Case is recorded by emitting [`CAPS_FOLLOWS`] before each uppercase
//! letter; digit runs are entered by a single [`NUMBER_FOLLOWS`] and left
//! only on a blank (space) cell. Digits 1-9 and 0 reuse the cell patterns
//! of letters A-J, the standard six-dot space-saving convention.
//!
//! # Components
//!
//! | Module | Role |
//! |--------|------|
//! | [`Cell`] | Six-dot cell as a transparent bit pattern |
//! | [`table`] | Fixed letter/punctuation and digit tables, control cells |
//! | [`is_braille`] | Direction detection |
//! | [`encode`] | English → Braille scan |
//! | [`decode`] | Braille → English state machine |
//! | [`translate`] | Auto-detecting entry point |
//!
//! # Example
//!
//! ```
//! use braille::translate;
//!
//! let cells = translate("Abc").unwrap();
//! assert_eq!(cells, ".....OO.....O.O...OO....");
//! assert_eq!(translate(&cells).unwrap(), "Abc");
//! ```
//!
//! # Design Principles
//!
//! - **Pure translation**: each call is a function of its input plus
//!   immutable tables; shift state never crosses invocations
//! - **Compile-time tables**: all lookups are O(1) indexes into read-only
//!   arrays built in const initializers
//! - **Abort on first error**: no partial output is ever reported as
//!   success
//! - **Zero dependencies**: the core is `no_std + alloc` capable
//!
//! # Features
//!
//! - `std` (default): implements [`std::error::Error`] for
//!   [`TranslateError`]. Disable for `no_std + alloc` builds.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Six-dot cell representation
mod cell;

// Braille-or-English classification
mod detect;

// Braille → English state machine
mod decode;

// English → Braille scan
mod encode;

// Translation failure modes
mod error;

// Fixed symbol tables and control cells
pub mod table;

pub use cell::Cell;
pub use decode::decode;
pub use detect::is_braille;
pub use encode::encode;
pub use error::TranslateError;
pub use table::{CAPS_FOLLOWS, NUMBER_FOLLOWS};

use alloc::string::String;

/// Translates `input` in the direction inferred by [`is_braille`].
///
/// Braille-shaped input (length a multiple of six, all `O`/`.`) is decoded
/// to English; everything else is encoded to Braille. The empty string
/// classifies as Braille and translates to itself.
///
/// # Errors
///
/// Propagates the first failure from [`encode`] or [`decode`]; see
/// [`TranslateError`]. No partial output is produced.
///
/// # Example
///
/// ```
/// use braille::translate;
///
/// assert_eq!(translate("x").unwrap(), "OO..OO");
/// assert_eq!(translate("OO..OO").unwrap(), "x");
/// ```
pub fn translate(input: &str) -> Result<String, TranslateError> {
    if is_braille(input) {
        decode(input)
    } else {
        encode(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_dispatches_to_encoder() {
        assert_eq!(translate("abc").unwrap(), "O.....O.O...OO....");
    }

    #[test]
    fn test_translate_dispatches_to_decoder() {
        assert_eq!(translate("O.....O.O...OO....").unwrap(), "abc");
    }

    #[test]
    fn test_translate_empty_string_decodes_to_empty() {
        assert_eq!(translate("").unwrap(), "");
    }

    #[test]
    fn test_translate_propagates_encode_errors() {
        assert_eq!(
            translate("@"),
            Err(TranslateError::UnknownSymbol {
                character: '@',
                position: 0,
            })
        );
    }
}
