//! Script detection and extractor routing.
//!
//! Text containing Hiragana, Katakana or Han characters cannot be split on
//! whitespace, so it is routed to the tagged-noun extractor. Everything else
//! goes through the generic token extractor.

use std::ops::RangeInclusive;

/// Which candidate extractor handles a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorKind {
    /// Whitespace tokenization with stopwords and normalization.
    Generic,
    /// Morphological tagging, keeping noun-like tokens.
    TaggedNoun,
}

/// Selects the extractor for a piece of text.
///
/// The decision is made per call: any single CJK character routes the whole
/// text to the tagged-noun path.
pub fn select_extractor(text: &str) -> ExtractorKind {
    if contains_cjk(text) {
        ExtractorKind::TaggedNoun
    } else {
        ExtractorKind::Generic
    }
}

/// Returns true if the text contains at least one CJK character.
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk)
}

/// Returns true for Hiragana, Katakana and Han characters.
pub fn is_cjk(c: char) -> bool {
    is_han(c) || is_hiragana(c) || is_katakana(c)
}

/// Returns true for Han ideographs, including iteration and numeral marks.
pub fn is_han(c: char) -> bool {
    in_ranges(c, HAN)
}

/// Returns true for Hiragana characters.
pub fn is_hiragana(c: char) -> bool {
    in_ranges(c, HIRAGANA)
}

/// Returns true for Katakana characters, including halfwidth forms.
pub fn is_katakana(c: char) -> bool {
    in_ranges(c, KATAKANA)
}

/// Checks membership in a sorted list of ranges.
fn in_ranges(c: char, ranges: &[RangeInclusive<char>]) -> bool {
    ranges.iter().any(|r| r.contains(&c))
}

/// Han script blocks.
static HAN: &[RangeInclusive<char>] = &[
    '\u{2E80}'..='\u{2FDF}',   // CJK radicals, Kangxi radicals
    '\u{3005}'..='\u{3005}',   // ideographic iteration mark
    '\u{3007}'..='\u{3007}',   // ideographic number zero
    '\u{3021}'..='\u{3029}',   // Hangzhou numerals
    '\u{3038}'..='\u{303B}',   // Hangzhou numerals, vertical iteration mark
    '\u{3400}'..='\u{4DBF}',   // extension A
    '\u{4E00}'..='\u{9FFF}',   // unified ideographs
    '\u{F900}'..='\u{FAFF}',   // compatibility ideographs
    '\u{20000}'..='\u{2FA1F}', // extensions B-F, compatibility supplement
    '\u{30000}'..='\u{323AF}', // extensions G-H
];

/// Hiragana script blocks.
static HIRAGANA: &[RangeInclusive<char>] = &[
    '\u{3041}'..='\u{3096}',
    '\u{309D}'..='\u{309F}',
    '\u{1B001}'..='\u{1B11F}',
];

/// Katakana script blocks.
static KATAKANA: &[RangeInclusive<char>] = &[
    '\u{30A1}'..='\u{30FA}',
    '\u{30FD}'..='\u{30FF}',
    '\u{31F0}'..='\u{31FF}',
    '\u{32D0}'..='\u{32FE}',
    '\u{3300}'..='\u{3357}',
    '\u{FF66}'..='\u{FF6F}',
    '\u{FF71}'..='\u{FF9D}',
    '\u{1B000}'..='\u{1B000}',
];
