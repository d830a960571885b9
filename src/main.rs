mod cli;

use std::io::{Read, Write};
use std::time::Duration;

use clap::Parser;
use cli::{Args, Command};
use format_converter::{ConversionMode, ConverterError, Rain, RainConfig, TextConverter, COMMENT_STYLES};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Use the argument if given, otherwise everything on stdin
fn read_input(text: Option<String>) -> Result<String, ConverterError> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn run_conversion(mode: ConversionMode, text: Option<String>, json: bool) -> Result<(), ConverterError> {
    let input = read_input(text)?;
    let converter = TextConverter::new();
    let conversion = converter.convert_report(&input, &mode)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&conversion)?);
    } else {
        println!("{}", conversion.output);
    }
    Ok(())
}

fn play_rain(config: RainConfig, frames: usize, seed: Option<u64>) -> Result<(), ConverterError> {
    let interval = Duration::from_millis(config.update_rate_ms);
    let mut rain = match seed {
        Some(seed) => Rain::with_seed(config, seed)?,
        None => Rain::new(config)?,
    };

    let mut stdout = std::io::stdout().lock();
    for _ in 0..frames {
        rain.step();
        // clear, home, green
        write!(stdout, "\x1b[2J\x1b[H\x1b[32m{}\x1b[0m", rain.render())?;
        stdout.flush()?;
        std::thread::sleep(interval);
    }
    writeln!(stdout)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Convert { mode, text } => run_conversion(mode, text, args.json)?,
        Command::Comment { symbol, text } => run_conversion(ConversionMode::Comment(symbol), text, args.json)?,
        Command::Encode { text } => run_conversion(ConversionMode::EmojiEncrypt, text, args.json)?,
        Command::Decode { text } => run_conversion(ConversionMode::EmojiDecrypt, text, args.json)?,
        Command::Styles => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&COMMENT_STYLES)?);
            } else {
                println!("Comment styles:");
                for style in COMMENT_STYLES.iter() {
                    println!("  {}", style);
                }
                println!("\nEnMoji:");
                println!("  {}  text to emoji", ConversionMode::EmojiEncrypt);
                println!("  {}  emoji to text", ConversionMode::EmojiDecrypt);
            }
        }
        Command::Rain {
            width,
            height,
            particles,
            frames,
            interval_ms,
            seed,
        } => {
            let config = RainConfig {
                width,
                height,
                particles,
                update_rate_ms: interval_ms,
                ..RainConfig::default()
            };
            play_rain(config, frames, seed)?;
        }
    }

    Ok(())
}
