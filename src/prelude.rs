//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use vec64::prelude::*;
//!
//! let (symbols, _) = index_symbols(b"deadBEEF");
//! let ranges = Splitter::new().split_on(CharClass::UPPER_ALPHAHEX).classify(&symbols).unwrap();
//! assert_eq!(ranges.last().unwrap().class, CharClass::ALPHAHEX);
//! ```

pub use crate::{
    CharClass,
    Classification,
    Range,
    Settings,
    Splitter,
    SymbolError,

    // Core operations
    classify_ranges,
    index_symbols,

    // Supplementary helpers
    class_probability,
    pair_decode,
    pair_encode,
    symbols_to_text,
};
