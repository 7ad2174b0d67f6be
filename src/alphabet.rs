//! The RFC 4648 standard alphabet and the symbol indexer.
//!
//! Indexing turns alphabet characters into their 6-bit symbol values:
//!
//! ```
//! let (symbols, consumed) = vec64::index_symbols(b"hello=");
//! assert_eq!(symbols, [33, 30, 37, 37, 40, 64]);
//! assert_eq!(consumed, 6);
//! ```

use crate::errors::SymbolError;

/// Alphabet characters in symbol order, followed by the pad character.
pub const ALPHABET: &[u8; 65] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=";

/// Symbol value of the `=` pad.
pub const PAD_SYMBOL: u8 = 64;

/// The pad character.
pub const PAD_CHAR: u8 = b'=';

/// Marks bytes outside the alphabet in [`SYMBOL_INDEX`].
const INVALID: u8 = 0xFF;

const fn build_index_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut symbol = 0;
    // The pad is left out; the indexer treats it as a stop byte.
    while symbol < 64 {
        table[ALPHABET[symbol] as usize] = symbol as u8;
        symbol += 1;
    }
    table
}

/// Decoding LUT: byte → symbol value (256 entries, sparse, 0xFF = invalid)
static SYMBOL_INDEX: [u8; 256] = build_index_table();

/// Whether a value is a symbol (alphabet position or pad).
#[inline]
pub fn is_symbol(value: u8) -> bool {
    value <= PAD_SYMBOL
}

/// Rewrites the leading alphabet characters of `buf` as symbol values.
///
/// Scanning stops at the first byte outside the alphabet. If that byte is
/// `=`, it and at most one following `=` are consumed and written as
/// `pad_with`. Bytes from the returned length onwards are left untouched.
///
/// # Arguments
///
/// * `buf` - Text to index; rewritten in place
/// * `pad_with` - Value written for each consumed pad character
///
/// # Returns
///
/// The number of bytes consumed, which is also the length of the indexed prefix.
pub fn index_symbols_in_place_with_pad(buf: &mut [u8], pad_with: u8) -> usize {
    let mut pos = 0;

    while pos < buf.len() {
        let index = SYMBOL_INDEX[buf[pos] as usize];

        if index == INVALID {
            // Process up to two padding characters
            if buf[pos] == PAD_CHAR {
                buf[pos] = pad_with;
                pos += 1;

                if pos < buf.len() && buf[pos] == PAD_CHAR {
                    buf[pos] = pad_with;
                    pos += 1;
                }
            }
            break;
        }

        buf[pos] = index;
        pos += 1;
    }

    pos
}

/// In-place indexing with the pad written as [`PAD_SYMBOL`].
pub fn index_symbols_in_place(buf: &mut [u8]) -> usize {
    index_symbols_in_place_with_pad(buf, PAD_SYMBOL)
}

/// Like [`index_symbols`], but writes `pad_with` for each consumed `=`.
pub fn index_symbols_with_pad(input: &[u8], pad_with: u8) -> (Vec<u8>, usize) {
    let mut symbols = input.to_vec();
    let consumed = index_symbols_in_place_with_pad(&mut symbols, pad_with);
    symbols.truncate(consumed);
    (symbols, consumed)
}

/// Maps Base64 alphabet characters to their RFC 4648 symbol values.
///
/// Returns the symbol values and the number of input bytes consumed (always
/// equal to the number of symbols). Processing stops at the first byte
/// outside the alphabet; up to two trailing `=` pads are consumed and mapped
/// to [`PAD_SYMBOL`].
pub fn index_symbols(input: &[u8]) -> (Vec<u8>, usize) {
    index_symbols_with_pad(input, PAD_SYMBOL)
}

/// Turns symbol values back into alphabet text, `64` becoming `=`.
///
/// # Errors
///
/// Returns [`SymbolError::InvalidSymbol`] for the first value above 64.
pub fn symbols_to_text(symbols: &[u8]) -> Result<String, SymbolError> {
    symbols
        .iter()
        .enumerate()
        .map(|(position, &symbol)| {
            ALPHABET
                .get(symbol as usize)
                .map(|&c| c as char)
                .ok_or_else(|| SymbolError::invalid_symbol(symbol, position))
        })
        .collect()
}
