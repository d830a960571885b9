//! Character to emoji-token table used by the emoji cipher.
//!
//! A "unit" is one Unicode scalar value. Tokens are between one and
//! [`MAX_TOKEN_UNITS`] units long and are not prefix-free: `❤` and `❤️` are
//! both tokens. Greedy longest-match decoding stays unambiguous because a
//! longer token may only extend a shorter one with a unit that never starts a
//! token (variation selectors, skin tones, ZWJ).

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{ConverterError, Result};

/// Longest token, in units, the decoder will try to match
pub const MAX_TOKEN_UNITS: usize = 5;

/// Stands for one literal space in encoded text
pub const SPACE_MARKER: char = '\u{2B1C}'; // ⬜

/// Stands for a run of exactly three spaces in encoded text
pub const TRIPLE_SPACE_MARKER: &str = "\u{2B1B}\u{2B1B}\u{2B1B}"; // ⬛⬛⬛

/// The built-in alphabet: lowercase letters, digits and common punctuation
pub const DEFAULT_ENTRIES: [(char, &str); 48] = [
    ('a', "\u{1F34E}"),                                 // 🍎
    ('b', "\u{1F41D}"),                                 // 🐝
    ('c', "\u{1F431}"),                                 // 🐱
    ('d', "\u{1F436}"),                                 // 🐶
    ('e', "\u{1F95A}"),                                 // 🥚
    ('f', "\u{1F525}"),                                 // 🔥
    ('g', "\u{1F347}"),                                 // 🍇
    ('h', "\u{2764}\u{FE0F}"),                          // ❤️
    ('i', "\u{1F366}"),                                 // 🍦
    ('j', "\u{1F579}\u{FE0F}"),                         // 🕹️
    ('k', "\u{1F511}"),                                 // 🔑
    ('l', "\u{2764}"),                                  // ❤
    ('m', "\u{1F319}"),                                 // 🌙
    ('n', "\u{1F443}"),                                 // 👃
    ('o', "\u{1F419}"),                                 // 🐙
    ('p', "\u{1F427}"),                                 // 🐧
    ('q', "\u{1F478}"),                                 // 👸
    ('r', "\u{1F308}"),                                 // 🌈
    ('s', "\u{2600}\u{FE0F}"),                          // ☀️
    ('t', "\u{1F333}"),                                 // 🌳
    ('u', "\u{2602}\u{FE0F}"),                          // ☂️
    ('v', "\u{1F3BB}"),                                 // 🎻
    ('w', "\u{1F30A}"),                                 // 🌊
    ('x', "\u{274C}"),                                  // ❌
    ('y', "\u{1FA80}"),                                 // 🪀
    ('z', "\u{26A1}"),                                  // ⚡
    ('0', "\u{1F468}\u{200D}\u{1F4BB}"),                // 👨‍💻
    ('1', "\u{1F44D}"),                                 // 👍
    ('2', "\u{1F44D}\u{1F3FB}"),                        // 👍🏻
    ('3', "\u{1F44D}\u{1F3FD}"),                        // 👍🏽
    ('4', "\u{1F9D1}\u{200D}\u{1F680}"),                // 🧑‍🚀
    ('5', "\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}"),        // 🏳️‍🌈
    ('6', "\u{1F441}\u{FE0F}\u{200D}\u{1F5E8}\u{FE0F}"), // 👁️‍🗨️
    ('7', "\u{1F43B}\u{200D}\u{2744}\u{FE0F}"),         // 🐻‍❄️
    ('8', "\u{1F3B1}"),                                 // 🎱
    ('9', "\u{1F9D1}\u{200D}\u{1F373}"),                // 🧑‍🍳
    ('.', "\u{1F534}"),                                 // 🔴
    (',', "\u{1F538}"),                                 // 🔸
    ('!', "\u{2757}"),                                  // ❗
    ('?', "\u{2753}"),                                  // ❓
    ('\'', "\u{270F}\u{FE0F}"),                         // ✏️
    ('"', "\u{1F4AC}"),                                 // 💬
    (':', "\u{1F535}"),                                 // 🔵
    (';', "\u{1F536}"),                                 // 🔶
    ('-', "\u{2796}"),                                  // ➖
    ('(', "\u{1F31C}"),                                 // 🌜
    (')', "\u{1F31B}"),                                 // 🌛
    ('_', "\u{1F9F5}"),                                 // 🧵
];

static DEFAULT_TABLE: Lazy<MappingTable> = Lazy::new(|| {
    MappingTable::build(
        DEFAULT_ENTRIES.iter().map(|&(c, token)| (c, token.to_string())),
        SPACE_MARKER,
        TRIPLE_SPACE_MARKER.to_string(),
    )
});

/// What a single input character becomes when encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph<'a> {
    /// The character is in the table
    Mapped(&'a str),
    /// The character is not in the table and passes through as-is
    Literal(char),
}

/// Immutable bidirectional character/token table
#[derive(Debug, Clone)]
pub struct MappingTable {
    encode: HashMap<char, String>,
    decode: HashMap<String, char>,
    space_marker: char,
    triple_space_marker: String,
    longest_token: usize,
}

impl MappingTable {
    /// Build and validate a table using the default space markers
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        Self::with_markers(entries, SPACE_MARKER, TRIPLE_SPACE_MARKER)
    }

    /// Build and validate a table with custom space markers
    pub fn with_markers<I, S>(entries: I, space_marker: char, triple_space_marker: &str) -> Result<Self>
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let entries: Vec<(char, String)> = entries.into_iter().map(|(c, t)| (c, t.into())).collect();
        validate_markers(space_marker, triple_space_marker)?;
        validate_entries(&entries, space_marker, triple_space_marker)?;
        Ok(Self::build(entries, space_marker, triple_space_marker.to_string()))
    }

    /// The shared built-in table
    pub fn default_table() -> &'static MappingTable {
        &DEFAULT_TABLE
    }

    fn build<I>(entries: I, space_marker: char, triple_space_marker: String) -> Self
    where
        I: IntoIterator<Item = (char, String)>,
    {
        let mut encode = HashMap::new();
        let mut decode = HashMap::new();
        let mut longest_token = 0;
        for (c, token) in entries {
            longest_token = longest_token.max(token.chars().count());
            decode.insert(token.clone(), c);
            encode.insert(c, token);
        }
        tracing::trace!(entries = encode.len(), longest_token, "built mapping table");
        Self {
            encode,
            decode,
            space_marker,
            triple_space_marker,
            longest_token,
        }
    }

    /// Classify a character: table token for its lowercase form, or pass-through
    pub fn glyph(&self, c: char) -> Glyph<'_> {
        match single_lowercase(c).and_then(|lower| self.encode.get(&lower)) {
            Some(token) => Glyph::Mapped(token.as_str()),
            None => Glyph::Literal(c),
        }
    }

    /// Token for a character, ignoring case
    pub fn token_for(&self, c: char) -> Option<&str> {
        match self.glyph(c) {
            Glyph::Mapped(token) => Some(token),
            Glyph::Literal(_) => None,
        }
    }

    /// Character a complete token stands for
    pub fn char_for(&self, token: &str) -> Option<char> {
        self.decode.get(token).copied()
    }

    pub fn space_marker(&self) -> char {
        self.space_marker
    }

    pub fn triple_space_marker(&self) -> &str {
        &self.triple_space_marker
    }

    /// Length in units of the longest token in the table
    pub fn longest_token(&self) -> usize {
        self.longest_token
    }

    /// All entries, ordered by source character
    pub fn entries(&self) -> Vec<(char, &str)> {
        let mut entries: Vec<(char, &str)> = self.encode.iter().map(|(&c, t)| (c, t.as_str())).collect();
        entries.sort_by_key(|&(c, _)| c);
        entries
    }
}

impl Default for MappingTable {
    fn default() -> Self {
        DEFAULT_TABLE.clone()
    }
}

/// Lowercase form of `c` when it lowercases to exactly one character
fn single_lowercase(c: char) -> Option<char> {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => Some(l),
        _ => None,
    }
}

fn validate_markers(space_marker: char, triple_space_marker: &str) -> Result<()> {
    if space_marker.is_whitespace() {
        return Err(ConverterError::InvalidTable("space marker must not be whitespace".to_string()));
    }
    let triple: Vec<char> = triple_space_marker.chars().collect();
    if triple.len() != 3 {
        return Err(ConverterError::InvalidTable(format!(
            "triple-space marker must be 3 units, got {}",
            triple.len()
        )));
    }
    if triple[0] == space_marker {
        return Err(ConverterError::InvalidTable(
            "triple-space marker must not start with the space marker".to_string(),
        ));
    }
    if triple.iter().any(|c| c.is_whitespace()) {
        return Err(ConverterError::InvalidTable("triple-space marker must not contain whitespace".to_string()));
    }
    Ok(())
}

fn validate_entries(entries: &[(char, String)], space_marker: char, triple_space_marker: &str) -> Result<()> {
    let triple_start = triple_space_marker.chars().next();
    let mut keys: HashMap<char, &str> = HashMap::new();
    let mut tokens: HashMap<&str, char> = HashMap::new();

    for (c, token) in entries {
        if c.is_whitespace() {
            return Err(ConverterError::InvalidTable(format!("{:?} is reserved for the space markers", c)));
        }
        if single_lowercase(*c) != Some(*c) {
            return Err(ConverterError::InvalidTable(format!("key {:?} is not lowercase", c)));
        }
        let units = token.chars().count();
        if units == 0 || units > MAX_TOKEN_UNITS {
            return Err(ConverterError::InvalidTable(format!(
                "token for {:?} has {} units, expected 1 to {}",
                c, units, MAX_TOKEN_UNITS
            )));
        }
        if token.chars().any(char::is_whitespace) {
            return Err(ConverterError::InvalidTable(format!("token for {:?} contains whitespace", c)));
        }
        if token.chars().any(|u| u == space_marker || Some(u) == triple_start) {
            return Err(ConverterError::InvalidTable(format!("token for {:?} collides with a space marker", c)));
        }
        if keys.insert(*c, token).is_some() {
            return Err(ConverterError::InvalidTable(format!("key {:?} appears twice", c)));
        }
        if let Some(other) = tokens.insert(token, *c) {
            return Err(ConverterError::InvalidTable(format!(
                "keys {:?} and {:?} share token {}",
                other, c, token
            )));
        }
    }

    // A token extending a shorter one must continue with a unit no token starts with
    let starts: Vec<char> = tokens.keys().filter_map(|t| t.chars().next()).collect();
    for short in tokens.keys() {
        for long in tokens.keys() {
            if long.len() > short.len() && long.starts_with(*short) {
                let next = long[short.len()..].chars().next();
                if let Some(next) = next.filter(|n| starts.contains(n)) {
                    return Err(ConverterError::InvalidTable(format!(
                        "token {} extends {} with {:?}, which starts another token",
                        long, short, next
                    )));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_entries_are_valid() {
        let table = MappingTable::new(DEFAULT_ENTRIES.iter().copied()).unwrap();
        assert_eq!(table.entries().len(), DEFAULT_ENTRIES.len());
        assert_eq!(table.longest_token(), MAX_TOKEN_UNITS);
    }

    #[test]
    fn test_default_alphabet_is_total() {
        let table = MappingTable::default_table();
        for c in ('a'..='z').chain('0'..='9').chain(".,!?'\":;-()".chars()) {
            assert!(table.token_for(c).is_some(), "{:?} has no token", c);
        }
    }

    #[test]
    fn test_glyph_is_case_insensitive() {
        let table = MappingTable::default_table();
        assert_eq!(table.glyph('A'), Glyph::Mapped("\u{1F34E}"));
        assert_eq!(table.glyph('a'), Glyph::Mapped("\u{1F34E}"));
        assert_eq!(table.glyph('+'), Glyph::Literal('+'));
        assert_eq!(table.glyph('É'), Glyph::Literal('É'));
    }

    #[test]
    fn test_char_for() {
        let table = MappingTable::default_table();
        assert_eq!(table.char_for("\u{2764}"), Some('l'));
        assert_eq!(table.char_for("\u{2764}\u{FE0F}"), Some('h'));
        assert_eq!(table.char_for("\u{FE0F}"), None);
    }

    #[test]
    fn test_token_lengths() {
        for (c, token) in DEFAULT_ENTRIES {
            let units = token.chars().count();
            assert!((1..=MAX_TOKEN_UNITS).contains(&units), "{:?} -> {} units", c, units);
        }
    }

    #[test]
    fn test_entries_sorted() {
        let table = MappingTable::new([('b', "x"), ('a', "y")]).unwrap();
        assert_eq!(table.entries(), vec![('a', "y"), ('b', "x")]);
    }

    #[test]
    fn test_rejects_duplicate_token() {
        let err = MappingTable::new([('a', "\u{1F34E}"), ('b', "\u{1F34E}")]).unwrap_err();
        assert!(matches!(err, ConverterError::InvalidTable(_)));
    }

    #[test]
    fn test_rejects_duplicate_key() {
        assert!(MappingTable::new([('a', "\u{1F34E}"), ('a', "\u{1F41D}")]).is_err());
    }

    #[test]
    fn test_rejects_bad_keys() {
        assert!(MappingTable::new([('A', "\u{1F34E}")]).is_err());
        assert!(MappingTable::new([(' ', "\u{1F34E}")]).is_err());
    }

    #[test]
    fn test_rejects_bad_token_lengths() {
        assert!(MappingTable::new([('a', "")]).is_err());
        assert!(MappingTable::new([('a', "abcdef")]).is_err());
        assert!(MappingTable::new([('a', "abcde")]).is_ok());
    }

    #[test]
    fn test_rejects_marker_collisions() {
        assert!(MappingTable::new([('a', "\u{2B1C}")]).is_err());
        assert!(MappingTable::new([('a', "x\u{2B1B}")]).is_err());
        assert!(MappingTable::new([('a', "x y")]).is_err());
    }

    #[test]
    fn test_rejects_bad_markers() {
        let entries = [('a', "x")];
        assert!(MappingTable::with_markers(entries, ' ', "###").is_err());
        assert!(MappingTable::with_markers(entries, '#', "##").is_err());
        assert!(MappingTable::with_markers(entries, '#', "#@@").is_err());
        assert!(MappingTable::with_markers(entries, '#', "@@@").is_ok());
    }

    #[test]
    fn test_rejects_ambiguous_extension() {
        // "xy" could be read as 'c' or as 'a' followed by 'b'
        let err = MappingTable::new([('a', "x"), ('b', "y"), ('c', "xy")]).unwrap_err();
        assert!(matches!(err, ConverterError::InvalidTable(_)));

        // extending with a unit that starts no token is fine
        assert!(MappingTable::new([('a', "x"), ('c', "xz")]).is_ok());
    }
}
