use basex::{AlphabetsConfig, Codec};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "basex", version)]
#[command(about = "Encode and decode binary data with any base-N alphabet", long_about = None)]
struct Cli {
    /// Named alphabet to use for encoding/decoding
    #[arg(short, long, default_value = "base58", conflicts_with = "chars")]
    alphabet: String,

    /// Literal alphabet: every character is one symbol, the first is zero
    #[arg(short, long)]
    chars: Option<String>,

    /// File to encode/decode (if not provided, reads from stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Decode instead of encode
    #[arg(short, long)]
    decode: bool,

    /// Extra alphabet definitions (TOML), applied after the standard locations
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// List available alphabets
    #[arg(short, long)]
    list: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = AlphabetsConfig::load_with_overrides()?;
    if let Some(path) = &cli.config {
        config.merge(AlphabetsConfig::load_from_file(path)?);
    }

    if cli.list {
        return list_alphabets(&config);
    }

    let codec = match &cli.chars {
        Some(chars) => Codec::from_chars(chars)?,
        None => config.codec(&cli.alphabet)?,
    };
    log::debug!("using base{} alphabet", codec.base());

    let input_data = match &cli.file {
        Some(file_path) => fs::read(file_path)?,
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };

    let mut stdout = io::stdout().lock();
    if cli.decode {
        let input_str = String::from_utf8(input_data)
            .map_err(|_| "input must be valid UTF-8 for decoding")?;
        // Only the line ending is dropped: whitespace can be a real symbol
        let decoded = codec.decode(input_str.trim_end_matches(['\n', '\r']))?;
        stdout.write_all(&decoded)?;
    } else {
        writeln!(stdout, "{}", codec.encode(&input_data))?;
    }
    stdout.flush()?;

    Ok(())
}

fn list_alphabets(config: &AlphabetsConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Available alphabets:\n")?;

    for name in config.names() {
        // Broken entries are listed too, so users can spot them
        match config.alphabet(name) {
            Ok(alphabet) => {
                let preview: String = alphabet.symbols().iter().take(20).collect();
                let suffix = if alphabet.base() > 20 { "..." } else { "" };
                writeln!(
                    stdout,
                    "  {:<18} base-{:<5} {}{}",
                    name,
                    alphabet.base(),
                    preview,
                    suffix
                )?;
            }
            Err(e) => writeln!(stdout, "  {:<18} invalid: {}", name, e)?,
        }
    }

    Ok(())
}
