//! Packing adjacent symbols into 12-bit pair codes.
//!
//! A pair `(low, high)` packs as `low | high << 6`. Six low bits cannot hold
//! the pad value, so the `==` pair code ([`PAD_PAIR`]) is decoded specially.

use crate::alphabet::{PAD_SYMBOL, is_symbol};
use crate::errors::SymbolError;

/// Code of the `==` pair.
pub const PAD_PAIR: u16 = (PAD_SYMBOL as u16) | ((PAD_SYMBOL as u16) << 6);

/// Packs complete symbol pairs starting at `start`; a trailing odd symbol is dropped.
///
/// ```
/// use vec64::{index_symbols, pair_encode};
///
/// let (symbols, _) = index_symbols(b"hello=");
/// assert_eq!(pair_encode(&symbols, 0), [30 << 6 | 33, 37 << 6 | 37, 64 << 6 | 40]);
/// ```
pub fn pair_encode(symbols: &[u8], start: usize) -> Vec<u16> {
    symbols
        .get(start..)
        .unwrap_or_default()
        .chunks_exact(2)
        .map(|pair| u16::from(pair[0]) | (u16::from(pair[1]) << 6))
        .collect()
}

/// Unpacks pair codes back into symbol values.
///
/// # Errors
///
/// Returns [`SymbolError::InvalidPair`] for codes whose high half is not a
/// symbol value.
pub fn pair_decode(pairs: &[u16]) -> Result<Vec<u8>, SymbolError> {
    let mut symbols = Vec::with_capacity(pairs.len() * 2);

    for (position, &code) in pairs.iter().enumerate() {
        if code == PAD_PAIR {
            symbols.extend([PAD_SYMBOL, PAD_SYMBOL]);
            continue;
        }

        let high = u8::try_from(code >> 6)
            .ok()
            .filter(|&high| is_symbol(high))
            .ok_or_else(|| SymbolError::invalid_pair(code, position))?;
        symbols.extend([(code & 63) as u8, high]);
    }

    Ok(symbols)
}
