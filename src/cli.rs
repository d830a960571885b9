use clap::Parser;
use format_converter::ConversionMode;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Format Converter: comment out paragraphs or EnMoji them")]
pub struct Args {
    /// Print the result as a JSON report
    #[clap(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Command to execute
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub enum Command {
    /// Convert text with an explicit mode (comment#, comment//, emojiEncrypt, emojiDecrypt, ...)
    Convert {
        /// Conversion mode
        #[clap(long, short)]
        mode: ConversionMode,

        /// Text to convert (read from stdin when omitted)
        text: Option<String>,
    },
    /// Turn each sentence into a comment line
    Comment {
        /// Comment symbol to prefix sentences with
        #[clap(long, short, default_value = "#", allow_hyphen_values = true)]
        symbol: String,

        /// Text to convert (read from stdin when omitted)
        text: Option<String>,
    },
    /// Encrypt text into emoji
    Encode {
        /// Text to encrypt (read from stdin when omitted)
        text: Option<String>,
    },
    /// Decrypt emoji back into text
    Decode {
        /// Emoji to decrypt (read from stdin when omitted)
        text: Option<String>,
    },
    /// List the known comment styles
    Styles,
    /// Take the red pill
    Rain {
        /// Columns
        #[clap(long, default_value_t = 80)]
        width: usize,

        /// Rows
        #[clap(long, default_value_t = 24)]
        height: usize,

        /// Number of falling characters
        #[clap(long, default_value_t = 200)]
        particles: usize,

        /// Frames to play before exiting
        #[clap(long, default_value_t = 100)]
        frames: usize,

        /// Delay between frames in milliseconds
        #[clap(long, default_value_t = 80)]
        interval_ms: u64,

        /// Seed for a reproducible animation
        #[clap(long)]
        seed: Option<u64>,
    },
}
