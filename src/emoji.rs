//! Emoji cipher over a [`MappingTable`]
//!
//! Encoding lowercases mapped characters, so case is lost for everything in the
//! table. Characters the table does not know pass through unchanged in both
//! directions. Input that already contains marker symbols or token sequences
//! will not survive a round trip.

use crate::mapping::{Glyph, MappingTable};

/// Encoder/decoder bound to one mapping table
#[derive(Debug, Clone, Copy)]
pub struct EmojiCodec<'t> {
    table: &'t MappingTable,
}

impl Default for EmojiCodec<'static> {
    fn default() -> Self {
        Self::new(MappingTable::default_table())
    }
}

impl<'t> EmojiCodec<'t> {
    pub fn new(table: &'t MappingTable) -> Self {
        Self { table }
    }

    /// Replace every character with its token and every space with a marker.
    ///
    /// A run of exactly three spaces becomes the triple-space marker, any other
    /// run becomes one space marker per space.
    pub fn encode(&self, text: &str) -> String {
        let mut encoded = String::with_capacity(text.len() * 4);
        let mut chars = text.chars().peekable();
        let mut literals = 0usize;

        while let Some(c) = chars.next() {
            if c == ' ' {
                let mut run = 1;
                while chars.next_if_eq(&' ').is_some() {
                    run += 1;
                }
                self.push_spaces(&mut encoded, run);
                continue;
            }
            match self.table.glyph(c) {
                Glyph::Mapped(token) => encoded.push_str(token),
                Glyph::Literal(c) => {
                    literals += 1;
                    encoded.push(c);
                }
            }
        }

        tracing::debug!(chars = text.chars().count(), literals, "encoded text to emoji");
        encoded
    }

    fn push_spaces(&self, out: &mut String, run: usize) {
        if run == 3 {
            out.push_str(self.table.triple_space_marker());
        } else {
            out.extend(std::iter::repeat(self.table.space_marker()).take(run));
        }
    }

    /// Turn encoded text back into plain text using greedy longest-match.
    ///
    /// Units that start no token are copied through unchanged.
    pub fn decode(&self, encoded: &str) -> String {
        // byte offset of every unit, plus the end of the string
        let offsets: Vec<usize> = encoded
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(encoded.len()))
            .collect();
        let units = offsets.len() - 1;
        let triple = self.table.triple_space_marker();

        let mut decoded = String::with_capacity(units);
        let mut unmatched = 0usize;
        let mut i = 0;

        while i < units {
            let rest = &encoded[offsets[i]..];
            if rest.starts_with(self.table.space_marker()) {
                decoded.push(' ');
                i += 1;
                continue;
            }
            if rest.starts_with(triple) {
                decoded.push_str("   ");
                i += 3;
                continue;
            }

            let longest = self.table.longest_token().min(units - i);
            let matched = (1..=longest).rev().find_map(|len| {
                let candidate = &encoded[offsets[i]..offsets[i + len]];
                self.table.char_for(candidate).map(|c| (c, len))
            });

            match matched {
                Some((c, len)) => {
                    decoded.push(c);
                    i += len;
                }
                None => {
                    unmatched += 1;
                    decoded.push_str(&encoded[offsets[i]..offsets[i + 1]]);
                    i += 1;
                }
            }
        }

        tracing::debug!(units, unmatched, "decoded emoji text");
        decoded
    }

    /// True when every non-space character of `text` has a token
    pub fn is_encodable(&self, text: &str) -> bool {
        text.chars()
            .filter(|&c| c != ' ')
            .all(|c| matches!(self.table.glyph(c), Glyph::Mapped(_)))
    }
}

/// Encode with the built-in table
pub fn encode(text: &str) -> String {
    EmojiCodec::default().encode(text)
}

/// Decode with the built-in table
pub fn decode(encoded: &str) -> String {
    EmojiCodec::default().decode(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{SPACE_MARKER, TRIPLE_SPACE_MARKER};

    #[test]
    fn test_encode_known_word() {
        assert_eq!(encode("bee"), "\u{1F41D}\u{1F95A}\u{1F95A}");
        assert_eq!(encode("BeE"), "\u{1F41D}\u{1F95A}\u{1F95A}");
    }

    #[test]
    fn test_encode_spaces() {
        assert_eq!(encode("a b"), format!("\u{1F34E}{}\u{1F41D}", SPACE_MARKER));
        assert_eq!(encode("a   b"), format!("\u{1F34E}{}\u{1F41D}", TRIPLE_SPACE_MARKER));
        assert_eq!(encode("a  b"), format!("\u{1F34E}{0}{0}\u{1F41D}", SPACE_MARKER));
        assert_eq!(encode("    "), SPACE_MARKER.to_string().repeat(4));
    }

    #[test]
    fn test_decode_spaces() {
        assert_eq!(decode(&format!("{0}{1}{0}", SPACE_MARKER, TRIPLE_SPACE_MARKER)), "     ");
    }

    #[test]
    fn test_decode_cut_off_triple_marker() {
        let cut = "\u{2B1B}\u{2B1B}";
        assert_eq!(decode(cut), cut);
        assert_eq!(decode(&format!("\u{1F34E}{}", cut)), format!("a{}", cut));
    }

    #[test]
    fn test_decode_space_marker_before_triple() {
        assert_eq!(decode(&format!("{}{}", SPACE_MARKER, TRIPLE_SPACE_MARKER)), "    ");
        assert_eq!(decode("\u{2B1C}\u{2B1B}\u{2B1B}\u{2B1B}\u{1F41D}"), "    b");
    }

    #[test]
    fn test_roundtrip() {
        let text = "hello world 2024   it's (really) fine: yes; no - maybe?!";
        assert_eq!(decode(&encode(text)), text);
    }

    #[test]
    fn test_roundtrip_loses_case() {
        assert_eq!(decode(&encode("Hello World")), "hello world");
    }

    #[test]
    fn test_longest_match_on_default_table() {
        // 'l' is a prefix of 'h', '1' is a prefix of '2' and '3'
        assert_eq!(decode("\u{2764}\u{FE0F}"), "h");
        assert_eq!(decode("\u{2764}"), "l");
        assert_eq!(decode(&encode("lh1231")), "lh1231");
        assert_eq!(decode(&encode("hello")), "hello");
    }

    #[test]
    fn test_passthrough() {
        let encoded = encode("5+5=10");
        assert!(encoded.contains('+'));
        assert!(encoded.contains('='));
        assert_eq!(decode(&encoded), "5+5=10");
    }

    #[test]
    fn test_decode_foreign_text() {
        assert_eq!(decode("plain"), "plain");
        assert_eq!(decode(""), "");
        // a lone variation selector starts no token
        assert_eq!(decode("\u{FE0F}\u{1F34E}"), "\u{FE0F}a");
    }

    #[test]
    fn test_decode_truncated_token() {
        // first three units of the 5-unit token for '6'
        assert_eq!(decode("\u{1F441}\u{FE0F}\u{200D}"), "\u{1F441}\u{FE0F}\u{200D}");
    }

    #[test]
    fn test_custom_table() {
        let table = MappingTable::with_markers([('a', "1"), ('b', "22")], '_', "===").unwrap();
        let codec = EmojiCodec::new(&table);
        assert_eq!(codec.encode("ab ba   c"), "122_221===c");
        assert_eq!(codec.decode("122_221===c"), "ab ba   c");
    }

    #[test]
    fn test_is_encodable() {
        let codec = EmojiCodec::default();
        assert!(codec.is_encodable("Hello, World!"));
        assert!(!codec.is_encodable("5+5"));
        assert!(codec.is_encodable(""));
    }
}
