//! Text conversions for pasting into source code or passing notes.
//!
//! Two independent engines:
//! - [`formatter`] turns a paragraph into one comment line per sentence
//! - [`emoji`] encrypts text into emoji through a [`MappingTable`] and back
//!
//! [`TextConverter`] picks between them from a [`ConversionMode`].
//!
//! ```
//! use format_converter::{ConversionMode, TextConverter};
//!
//! let converter = TextConverter::new();
//! let out = converter
//!     .convert("Bees fly. They don't care.", &ConversionMode::comment("#"))
//!     .unwrap();
//! assert_eq!(out, "# Bees fly.\n# They don't care.");
//! ```

pub mod converter;
pub mod emoji;
pub mod error;
pub mod formatter;
pub mod mapping;
pub mod mode;
pub mod rain;

#[cfg(feature = "wasm-bindgen")]
pub mod wasm;


pub use converter::{Conversion, TextConverter};
pub use emoji::{decode, encode, EmojiCodec};
pub use error::{ConverterError, Result};
pub use formatter::{cleanup, cleanup_text, format_as_comment};
pub use mapping::{Glyph, MappingTable};
pub use mode::{CommentStyle, ConversionMode, COMMENT_STYLES};
pub use rain::{Rain, RainConfig};
