//! Range classifier: splits symbol sequences into runs of shared character class.
//!
//! The classifier keeps a running intersection of the atomic classes seen
//! since the current range opened. Whenever a symbol would narrow that
//! intersection, the open range is closed and a new one starts at the symbol,
//! seeded with the narrowed intersection rather than the symbol's own class.
//! Once the intersection is [`CharClass::BASE64`] nothing can narrow it
//! further, so the rest of the input becomes one final range.
//!
//! ```
//! use vec64::{CharClass, Range, classify_ranges, index_symbols};
//!
//! let (symbols, _) = index_symbols(b"cafe42");
//! let ranges = classify_ranges(&symbols, None, None).unwrap();
//! assert_eq!(
//!     ranges,
//!     [
//!         Range::new(0, 4, CharClass::LOWER_ALPHAHEX),
//!         Range::new(4, 6, CharClass::LOWERHEX),
//!     ]
//! );
//! ```

use crate::char_class::{CharClass, symbol_class};
use crate::errors::SymbolError;
use crate::probability::class_probability;
use serde::Serialize;

/// A run `[start, end)` of symbols whose atomic classes reduce to `class`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Range {
    pub start: usize,
    pub end: usize,
    pub class: CharClass,
}

impl Range {
    pub fn new(start: usize, end: usize, class: CharClass) -> Self {
        Self { start, end, class }
    }

    /// The number of symbols in this range.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Probability that a uniformly random symbol string of this range's
    /// length reduces to exactly this range's class.
    pub fn probability(&self) -> f64 {
        class_probability(self.class, self.len())
    }
}

/// Result of a classification: the ranges plus where split regions were entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub ranges: Vec<Range>,
    /// Positions at which a symbol of the split class opened a split region.
    pub split_entries: Vec<usize>,
}

/// Configurable range classifier.
///
/// # Example
///
/// ```
/// use vec64::{CharClass, Splitter};
///
/// let splitter = Splitter::new().split_on(CharClass::DECIMAL).max_splits(1);
/// let result = splitter.classify_regions(&[6, 52, 6, 53]).unwrap();
/// assert_eq!(result.split_entries, [1]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Splitter {
    split_on: Option<CharClass>,
    max_splits: u32,
}

impl Splitter {
    /// A splitter with no split class and no split limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat symbols whose atomic class equals `class` as split markers.
    pub fn split_on(mut self, class: impl Into<Option<CharClass>>) -> Self {
        self.split_on = class.into();
        self
    }

    /// Honour at most `limit` split entries; `0` means no limit.
    pub fn max_splits(mut self, limit: u32) -> Self {
        self.max_splits = limit;
        self
    }

    pub fn split_class(&self) -> Option<CharClass> {
        self.split_on
    }

    pub fn split_limit(&self) -> Option<u32> {
        Some(self.max_splits).filter(|&limit| limit > 0)
    }

    /// Classify `symbols` into ranges.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidSymbol`] if any value is above 64. No
    /// ranges are returned in that case.
    pub fn classify(&self, symbols: &[u8]) -> Result<Vec<Range>, SymbolError> {
        self.classify_regions(symbols).map(|result| result.ranges)
    }

    /// Classify `symbols`, also reporting where split regions were entered.
    pub fn classify_regions(&self, symbols: &[u8]) -> Result<Classification, SymbolError> {
        let mut result = Classification::default();
        let mut state: Option<CharClass> = None;
        let mut open_start = 0;
        let mut split_on = self.split_on;
        let mut remaining = self.split_limit();
        let mut in_split = false;

        for (pos, &symbol) in symbols.iter().enumerate() {
            let class =
                symbol_class(symbol).ok_or_else(|| SymbolError::invalid_symbol(symbol, pos))?;
            let candidate = state.map_or(class, |current| current & class);

            if state == Some(candidate) {
                continue;
            }

            if split_on == Some(class) {
                tracing::trace!(position = pos, %class, "entering split region");
                in_split = true;
                result.split_entries.push(pos);

                if let Some(left) = remaining.as_mut() {
                    *left -= 1;
                    if *left == 0 {
                        split_on = None;
                    }
                }
            } else if in_split {
                tracing::trace!(position = pos, %class, "leaving split region");
                in_split = false;
            }

            if let Some(current) = state {
                result.ranges.push(Range::new(open_start, pos, current));
                open_start = pos;
            }
            state = Some(candidate);

            if candidate.is_empty() {
                // Nothing is left to narrow; only validate the tail.
                let tail = &symbols[pos + 1..];
                if let Some(offset) = tail.iter().position(|&s| symbol_class(s).is_none()) {
                    let at = pos + 1 + offset;
                    return Err(SymbolError::invalid_symbol(symbols[at], at));
                }
                tracing::debug!(position = pos, len = symbols.len(), "class exhausted, stopping scan");
                break;
            }
        }

        if let Some(current) = state {
            result.ranges.push(Range::new(open_start, symbols.len(), current));
        }

        Ok(result)
    }
}

/// Split a sequence of symbol values into ranges of shared character class.
///
/// # Arguments
///
/// * `symbols` - Symbol values in `0..=64`, as produced by [`crate::index_symbols`]
/// * `split_on` - Class whose symbols mark split regions; `None` disables splitting
/// * `max_splits` - Maximum number of split regions; `None` or `Some(0)` means unlimited
///
/// # Errors
///
/// Returns [`SymbolError::InvalidSymbol`] if any value is above 64.
pub fn classify_ranges(
    symbols: &[u8],
    split_on: Option<CharClass>,
    max_splits: Option<u32>,
) -> Result<Vec<Range>, SymbolError> {
    Splitter::new()
        .split_on(split_on)
        .max_splits(max_splits.unwrap_or(0))
        .classify(symbols)
}
