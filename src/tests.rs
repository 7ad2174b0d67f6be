use crate::{
    CharClass, NAMED_CLASSES, Range, Splitter, SymbolError, classify_ranges, index_symbols,
    symbol_class, symbols_to_text,
};
use proptest::prelude::*;

fn split_text(text: &str) -> Vec<Range> {
    let (symbols, _) = index_symbols(text.as_bytes());
    classify_ranges(&symbols, None, None).unwrap()
}

fn permutations(items: &[u8]) -> Vec<Vec<u8>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }

    let mut result = Vec::new();
    for (i, &first) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, first);
            result.push(tail);
        }
    }
    result
}

fn assert_covers(ranges: &[Range], len: usize) {
    let mut expected_start = 0;
    for range in ranges {
        assert_eq!(range.start, expected_start, "gap or overlap in {:?}", ranges);
        assert!(range.end > range.start, "empty range in {:?}", ranges);
        expected_start = range.end;
    }
    assert_eq!(expected_start, len);
}

#[test]
fn test_ascending_alphabet() {
    let symbols: Vec<u8> = (0..64).collect();
    let ranges = classify_ranges(&symbols, None, None).unwrap();

    // The lowercase boundary at 32 is absorbed: ALPHA already covers a-z.
    assert_eq!(
        ranges,
        [
            Range::new(0, 6, CharClass::UPPER_ALPHAHEX),
            Range::new(6, 26, CharClass::UPPER),
            Range::new(26, 52, CharClass::ALPHA),
            Range::new(52, 62, CharClass::ALNUM),
            Range::new(62, 64, CharClass::BASE64),
        ]
    );

    let class_boundaries = [6, 26, 32, 52, 62];
    for range in &ranges[1..] {
        assert!(class_boundaries.contains(&range.start));
    }
}

#[test]
fn test_index_then_classify() {
    assert_eq!(
        split_text("UklGRgoGAABXRUJQVlA4TP4FAAAvKgEQEIcAEIT"),
        [
            Range::new(0, 1, CharClass::UPPER),
            Range::new(1, 19, CharClass::ALPHA),
            Range::new(19, 39, CharClass::ALNUM),
        ]
    );

    // Indexing stops at the space, so only "World4" is classified.
    assert_eq!(
        split_text("World4 /hello/"),
        [
            Range::new(0, 1, CharClass::UPPER),
            Range::new(1, 5, CharClass::ALPHA),
            Range::new(5, 6, CharClass::ALNUM),
        ]
    );
}

#[test]
fn test_padding_is_punctuation() {
    assert_eq!(
        split_text("SGk="),
        [
            Range::new(0, 2, CharClass::UPPER),
            Range::new(2, 3, CharClass::ALPHA),
            Range::new(3, 4, CharClass::BASE64),
        ]
    );
}

#[test]
fn test_all_transitions() {
    // One symbol of each atomic class, in every order.
    for order in permutations(b"AGag1+") {
        let text = std::str::from_utf8(&order).unwrap();
        let ranges = split_text(text);
        let punct_at = order.iter().position(|&c| c == b'+').unwrap();
        // A leading `+` forms its own PUNCT range; exhaustion follows one symbol later.
        let exhausted_at = punct_at.max(1);

        assert_covers(&ranges, 6);
        assert!(ranges.len() >= 2 && ranges.len() <= exhausted_at + 1, "{text}: {ranges:?}");
        assert_eq!(ranges.last(), Some(&Range::new(exhausted_at, 6, CharClass::BASE64)));
        assert!(
            ranges[..ranges.len() - 1]
                .iter()
                .all(|range| range.class != CharClass::BASE64),
            "{text}: {ranges:?}"
        );
    }
}

#[test]
fn test_split_limit_with_two_digit_runs() {
    let (symbols, _) = index_symbols(b"xy12ab34");
    let unlimited = Splitter::new().split_on(CharClass::DECIMAL);
    let limited = unlimited.max_splits(1);

    let first = limited.classify_regions(&symbols).unwrap();
    assert_eq!(first.split_entries, [2]);
    assert_eq!(
        first.ranges,
        [
            Range::new(0, 2, CharClass::LOWER),
            Range::new(2, 8, CharClass::LOWER_ALNUM),
        ]
    );

    // The second digit run never narrows LOWER_ALNUM, so it stays merged.
    assert_eq!(unlimited.classify_regions(&symbols).unwrap(), first);
}

#[test]
fn test_invalid_symbol_yields_no_ranges() {
    let result = classify_ranges(&[0, 26, 52, 64, 65], Some(CharClass::PUNCT), Some(2));
    assert_eq!(result, Err(SymbolError::invalid_symbol(65, 4)));
}

fn symbol_sequence() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..=64, 0..128)
}

fn text_bytes() -> impl Strategy<Value = Vec<u8>> {
    let alphabet_byte = prop::sample::select(crate::ALPHABET.to_vec());
    prop::collection::vec(prop_oneof![3 => alphabet_byte, 1 => any::<u8>()], 0..128)
}

proptest! {
    #[test]
    fn prop_index_output_bounded(input in text_bytes()) {
        let (symbols, consumed) = index_symbols(&input);
        prop_assert!(symbols.len() <= input.len());
        prop_assert_eq!(symbols.len(), consumed);
        prop_assert!(symbols.iter().all(|&s| s <= 64));
    }

    #[test]
    fn prop_index_reverses_to_consumed_prefix(input in text_bytes()) {
        let (symbols, consumed) = index_symbols(&input);
        let text = symbols_to_text(&symbols).unwrap();
        prop_assert_eq!(text.as_bytes(), &input[..consumed]);
    }

    #[test]
    fn prop_ranges_cover_input(symbols in symbol_sequence()) {
        let ranges = classify_ranges(&symbols, None, None).unwrap();
        let mut next = 0;
        for range in &ranges {
            prop_assert_eq!(range.start, next);
            prop_assert!(range.end > range.start);
            next = range.end;
        }
        prop_assert_eq!(next, symbols.len());
    }

    #[test]
    fn prop_range_class_shared_by_members(symbols in symbol_sequence()) {
        let ranges = classify_ranges(&symbols, None, None).unwrap();
        for range in &ranges {
            for &symbol in &symbols[range.start..range.end] {
                prop_assert!(symbol_class(symbol).unwrap().contains(range.class));
            }
        }
        for pair in ranges.windows(2) {
            prop_assert!(pair[0].class.is_narrower_than(pair[1].class));
        }
    }

    #[test]
    fn prop_deterministic(symbols in symbol_sequence(), named in prop::sample::select(NAMED_CLASSES.to_vec()), limit in 0u32..4) {
        let splitter = Splitter::new().split_on(named.1).max_splits(limit);
        prop_assert_eq!(splitter.classify_regions(&symbols), splitter.classify_regions(&symbols));
    }

    #[test]
    fn prop_split_entries_start_ranges(symbols in symbol_sequence(), named in prop::sample::select(NAMED_CLASSES.to_vec())) {
        let result = Splitter::new().split_on(named.1).classify_regions(&symbols).unwrap();
        for &entry in &result.split_entries {
            prop_assert_eq!(symbol_class(symbols[entry]), Some(named.1));
            prop_assert!(entry == 0 || result.ranges.iter().any(|r| r.start == entry));
        }
    }

    #[test]
    fn prop_invalid_symbol_rejected(
        symbols in symbol_sequence(),
        bad in 65u8..=255,
        at in any::<prop::sample::Index>(),
    ) {
        let mut symbols = symbols;
        let position = at.index(symbols.len() + 1);
        symbols.insert(position, bad);

        prop_assert_eq!(
            classify_ranges(&symbols, None, None),
            Err(SymbolError::invalid_symbol(bad, position))
        );
    }
}
