use serde::{Deserialize, Serialize};

use crate::emoji::EmojiCodec;
use crate::error::{ConverterError, Result};
use crate::formatter::{cleanup_text, format_as_comment};
use crate::mapping::MappingTable;
use crate::mode::ConversionMode;

/// A finished conversion, as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub mode: ConversionMode,
    pub input: String,
    pub output: String,
}

/// Single entry point dispatching a request to the formatter or the cipher
#[derive(Debug, Clone, Copy)]
pub struct TextConverter<'t> {
    codec: EmojiCodec<'t>,
}

impl TextConverter<'static> {
    /// Converter using the built-in emoji table
    pub fn new() -> Self {
        Self {
            codec: EmojiCodec::default(),
        }
    }
}

impl Default for TextConverter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> TextConverter<'t> {
    /// Converter using a caller-supplied emoji table
    pub fn with_table(table: &'t MappingTable) -> Self {
        Self {
            codec: EmojiCodec::new(table),
        }
    }

    pub fn codec(&self) -> &EmojiCodec<'t> {
        &self.codec
    }

    /// Convert `input` according to `mode`.
    ///
    /// Input is trimmed first and must not be empty. Comment modes also drop
    /// blank lines and per-line indentation before splitting sentences.
    pub fn convert(&self, input: &str, mode: &ConversionMode) -> Result<String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ConverterError::EmptyInput);
        }

        tracing::debug!(%mode, bytes = input.len(), "converting");
        let output = match mode {
            ConversionMode::Comment(symbol) => format_as_comment(&cleanup_text(input), symbol),
            ConversionMode::EmojiEncrypt => self.codec.encode(input),
            ConversionMode::EmojiDecrypt => self.codec.decode(input),
        };
        Ok(output)
    }

    /// Like [`TextConverter::convert`], keeping the trimmed input next to the result
    pub fn convert_report(&self, input: &str, mode: &ConversionMode) -> Result<Conversion> {
        let output = self.convert(input, mode)?;
        Ok(Conversion {
            mode: mode.clone(),
            input: input.trim().to_string(),
            output,
        })
    }
}
