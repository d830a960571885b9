use crate::error::{ConverterError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Symbol of the default comment mode
pub const DEFAULT_COMMENT_SYMBOL: &str = "#";

/// A comment symbol and the languages that use it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommentStyle {
    pub symbol: &'static str,
    pub languages: &'static str,
}

/// Comment styles offered to users. The formatter itself accepts any symbol.
pub static COMMENT_STYLES: [CommentStyle; 6] = [
    CommentStyle { symbol: "#", languages: "Python, Ruby, Shell scripts, PowerShell" },
    CommentStyle { symbol: "//", languages: "C, C++, Java, JavaScript, C#, Swift, Go" },
    CommentStyle { symbol: "--", languages: "SQL" },
    CommentStyle { symbol: "%", languages: "MATLAB" },
    CommentStyle { symbol: ";", languages: "Lisp, Clojure" },
    CommentStyle { symbol: "'", languages: "Visual Basic" },
];

impl CommentStyle {
    /// Look up a known style by its symbol
    pub fn find(symbol: &str) -> Option<&'static CommentStyle> {
        COMMENT_STYLES.iter().find(|style| style.symbol == symbol)
    }

    pub fn mode(&self) -> ConversionMode {
        ConversionMode::Comment(self.symbol.to_string())
    }
}

impl std::fmt::Display for CommentStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<3} {}", self.symbol, self.languages)
    }
}

/// The one operation applied to a conversion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ConversionMode {
    /// Prefix every sentence with this comment symbol
    Comment(String),
    /// Text to emoji
    EmojiEncrypt,
    /// Emoji to text
    EmojiDecrypt,
}

impl ConversionMode {
    pub fn comment(symbol: impl Into<String>) -> Self {
        ConversionMode::Comment(symbol.into())
    }

    /// Comment symbol, for comment modes
    pub fn symbol(&self) -> Option<&str> {
        match self {
            ConversionMode::Comment(symbol) => Some(symbol.as_str()),
            _ => None,
        }
    }

}

impl Default for ConversionMode {
    fn default() -> Self {
        ConversionMode::Comment(DEFAULT_COMMENT_SYMBOL.to_string())
    }
}

impl FromStr for ConversionMode {
    type Err = ConverterError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        // everything after "comment" is the symbol, whitespace included
        if let Some(symbol) = value.trim_start().strip_prefix("comment") {
            return Ok(ConversionMode::Comment(symbol.to_string()));
        }
        match value.trim().to_lowercase().as_str() {
            "emojiencrypt" | "encrypt" | "encode" => Ok(ConversionMode::EmojiEncrypt),
            "emojidecrypt" | "decrypt" | "decode" => Ok(ConversionMode::EmojiDecrypt),
            _ => Err(ConverterError::InvalidMode(value.to_string())),
        }
    }
}

impl TryFrom<String> for ConversionMode {
    type Error = ConverterError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_str(value.as_str())
    }
}

impl From<ConversionMode> for String {
    fn from(mode: ConversionMode) -> Self {
        mode.to_string()
    }
}

impl std::fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionMode::Comment(symbol) => write!(f, "comment{}", symbol),
            ConversionMode::EmojiEncrypt => write!(f, "emojiEncrypt"),
            ConversionMode::EmojiDecrypt => write!(f, "emojiDecrypt"),
        }
    }
}
