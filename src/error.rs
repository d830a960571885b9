use thiserror::Error;

/// Result type for format converter operations
pub type Result<T> = std::result::Result<T, ConverterError>;

/// Error types for text conversion
#[derive(Error, Debug)]
pub enum ConverterError {
    /// The caller supplied nothing but whitespace
    #[error("There is nothing to convert.")]
    EmptyInput,

    /// Unrecognised conversion mode
    #[error("No valid conversion option selected: {0}")]
    InvalidMode(String),

    /// A mapping table broke one of its construction rules
    #[error("Invalid mapping table: {0}")]
    InvalidTable(String),

    /// Rain canvas or particle settings that cannot be animated
    #[error("Invalid rain configuration: {0}")]
    InvalidRainConfig(String),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering of a conversion report failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
