//! Character classes of Base64 alphabet symbols.
//!
//! Every symbol value (0-63, plus 64 for padding) has one fixed *atomic*
//! class. A class is a set of properties shared by every symbol it covers,
//! so the class of a run of symbols is the bitwise AND of their atomic
//! classes. The atomic classes are chosen so that any such intersection
//! lands on one of the named classes below:
//!
//! ```
//! use vec64::CharClass;
//!
//! assert_eq!(CharClass::UPPER_ALPHAHEX & CharClass::DECIMAL, CharClass::UPPERHEX);
//! assert_eq!(CharClass::UPPER & CharClass::LOWER, CharClass::ALPHA);
//! assert_eq!(CharClass::ALPHA & CharClass::DECIMAL, CharClass::ALNUM);
//! assert_eq!(CharClass::ALNUM & CharClass::PUNCT, CharClass::BASE64);
//! ```

use crate::errors::{UnknownClassError, find_closest_name};
use bitflags::bitflags;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Raw property bits. A bit is set when every symbol in the run has the property.
mod flag {
    /// No lowercase letter (uppercase letters and digits).
    pub const UPPER: u8 = 1 << 0;
    /// No uppercase letter (lowercase letters and digits).
    pub const LOWER: u8 = 1 << 1;
    pub const ALPHA: u8 = 1 << 2;
    pub const DIGIT: u8 = 1 << 3;
    pub const HEX: u8 = 1 << 4;
    pub const ALNUM: u8 = 1 << 5;
    /// `+`, `/` and the `=` pad.
    pub const PUNCT: u8 = 1 << 6;
}

bitflags! {
    /// Character class of a symbol or of a run of symbols.
    ///
    /// The numeric value returned by [`CharClass::bits`] is stable and can be
    /// handed across process or language boundaries.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct CharClass: u8 {
        /// `A-F`
        const UPPER_ALPHAHEX = flag::UPPER | flag::ALPHA | flag::HEX | flag::ALNUM;
        /// `a-f`
        const LOWER_ALPHAHEX = flag::LOWER | flag::ALPHA | flag::HEX | flag::ALNUM;
        /// `A-Z`
        const UPPER = flag::UPPER | flag::ALPHA | flag::ALNUM;
        /// `a-z`
        const LOWER = flag::LOWER | flag::ALPHA | flag::ALNUM;
        /// `0-9`
        const DECIMAL = flag::UPPER | flag::LOWER | flag::DIGIT | flag::HEX | flag::ALNUM;
        /// `+`, `/` and `=`
        const PUNCT = flag::PUNCT;

        /// `A-Fa-f`
        const ALPHAHEX = flag::ALPHA | flag::HEX | flag::ALNUM;
        /// `A-F0-9`
        const UPPERHEX = flag::UPPER | flag::HEX | flag::ALNUM;
        /// `a-f0-9`
        const LOWERHEX = flag::LOWER | flag::HEX | flag::ALNUM;
        /// `A-Fa-f0-9`
        const HEX = flag::HEX | flag::ALNUM;
        /// `A-Za-z`
        const ALPHA = flag::ALPHA | flag::ALNUM;
        /// `A-Z0-9`
        const UPPER_ALNUM = flag::UPPER | flag::ALNUM;
        /// `a-z0-9`
        const LOWER_ALNUM = flag::LOWER | flag::ALNUM;
        /// `A-Za-z0-9`
        const ALNUM = flag::ALNUM;
        /// Every kind of symbol has been seen; nothing is shared.
        const BASE64 = 0;
    }
}

/// Every named class with its canonical name.
pub const NAMED_CLASSES: [(&str, CharClass); 15] = [
    ("ALPHA", CharClass::ALPHA),
    ("UPPER", CharClass::UPPER),
    ("LOWER", CharClass::LOWER),
    ("ALNUM", CharClass::ALNUM),
    ("UPPER_ALNUM", CharClass::UPPER_ALNUM),
    ("LOWER_ALNUM", CharClass::LOWER_ALNUM),
    ("HEX", CharClass::HEX),
    ("UPPERHEX", CharClass::UPPERHEX),
    ("LOWERHEX", CharClass::LOWERHEX),
    ("ALPHAHEX", CharClass::ALPHAHEX),
    ("UPPER_ALPHAHEX", CharClass::UPPER_ALPHAHEX),
    ("LOWER_ALPHAHEX", CharClass::LOWER_ALPHAHEX),
    ("DECIMAL", CharClass::DECIMAL),
    ("PUNCT", CharClass::PUNCT),
    ("BASE64", CharClass::BASE64),
];

/// Numeric spelling of "no class" used by callers that cannot pass an `Option`.
pub const NO_CLASS_BITS: u8 = 0xFF;

const fn atomic_class(symbol: u8) -> CharClass {
    match symbol {
        0..=5 => CharClass::UPPER_ALPHAHEX,
        6..=25 => CharClass::UPPER,
        26..=31 => CharClass::LOWER_ALPHAHEX,
        32..=51 => CharClass::LOWER,
        52..=61 => CharClass::DECIMAL,
        _ => CharClass::PUNCT,
    }
}

const fn build_class_table() -> [CharClass; 65] {
    let mut table = [CharClass::PUNCT; 65];
    let mut symbol = 0;
    while symbol < table.len() {
        table[symbol] = atomic_class(symbol as u8);
        symbol += 1;
    }
    table
}

/// Atomic class of each symbol value, padding included.
pub static SYMBOL_CLASS: [CharClass; 65] = build_class_table();

/// Atomic class of a symbol value, or `None` if the value is above 64.
#[inline]
pub fn symbol_class(symbol: u8) -> Option<CharClass> {
    SYMBOL_CLASS.get(symbol as usize).copied()
}

impl CharClass {
    /// The canonical name, if this is one of the named classes.
    pub fn name(self) -> Option<&'static str> {
        NAMED_CLASSES
            .iter()
            .find(|(_, class)| *class == self)
            .map(|(name, _)| *name)
    }

    /// Look up a named class by its numeric value.
    pub fn from_named_bits(bits: u8) -> Option<Self> {
        NAMED_CLASSES
            .iter()
            .map(|(_, class)| *class)
            .find(|class| class.bits() == bits)
    }

    /// Decode a numeric split target where [`NO_CLASS_BITS`] means "no splitting".
    ///
    /// Returns `Err(bits)` for values that are neither a named class nor the sentinel.
    pub fn split_target_from_bits(bits: u8) -> Result<Option<Self>, u8> {
        if bits == NO_CLASS_BITS {
            return Ok(None);
        }
        Self::from_named_bits(bits).map(Some).ok_or(bits)
    }

    /// Number of alphabet symbols (0-63, padding excluded) covered by this class.
    pub fn symbol_count(self) -> usize {
        SYMBOL_CLASS[..64]
            .iter()
            .filter(|class| class.contains(self))
            .count()
    }

    /// Whether this class is strictly narrower than `other` (covers fewer symbols).
    pub fn is_narrower_than(self, other: Self) -> bool {
        self != other && self.contains(other)
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:02x}", self.bits()),
        }
    }
}

impl FromStr for CharClass {
    type Err = UnknownClassError;

    /// Parses a class name, ignoring case and accepting `-` for `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        NAMED_CLASSES
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, class)| *class)
            .ok_or_else(|| {
                let names: Vec<String> = NAMED_CLASSES
                    .iter()
                    .map(|(name, _)| name.to_string())
                    .collect();
                UnknownClassError::new(s, find_closest_name(&normalized, &names))
            })
    }
}

impl Serialize for CharClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_u8(self.bits()),
        }
    }
}
