//! Symbol-level tools for Base64 text.
//!
//! Two primitives, usually run in sequence:
//!
//! 1. [`index_symbols`] maps RFC 4648 alphabet characters to their symbol
//!    values (0-63, with 64 for the `=` pad), stopping at the first byte
//!    outside the alphabet.
//! 2. [`classify_ranges`] partitions a sequence of symbol values into
//!    contiguous ranges whose symbols share a [`CharClass`].
//!
//! ```
//! use vec64::{CharClass, Range, classify_ranges, index_symbols};
//!
//! let (symbols, consumed) = index_symbols(b"XY12 tail");
//! assert_eq!(consumed, 4);
//!
//! let ranges = classify_ranges(&symbols, None, None).unwrap();
//! assert_eq!(
//!     ranges,
//!     [
//!         Range::new(0, 2, CharClass::UPPER),
//!         Range::new(2, 4, CharClass::UPPER_ALNUM),
//!     ]
//! );
//! ```

mod alphabet;
mod char_class;
mod config;
mod errors;
mod pair;
mod probability;
mod split;

pub mod prelude;

pub use alphabet::{
    ALPHABET, PAD_CHAR, PAD_SYMBOL, index_symbols, index_symbols_in_place,
    index_symbols_in_place_with_pad, index_symbols_with_pad, is_symbol, symbols_to_text,
};
pub use char_class::{CharClass, NAMED_CLASSES, NO_CLASS_BITS, SYMBOL_CLASS, symbol_class};
pub use config::{IndexSettings, OutputSettings, Settings, SplitSettings};
pub use errors::{SymbolError, UnknownClassError, should_use_color};
pub use pair::{PAD_PAIR, pair_decode, pair_encode};
pub use probability::class_probability;
pub use split::{Classification, Range, Splitter, classify_ranges};

#[cfg(test)]
mod tests;
