//! Base-N encoding of byte sequences over any alphabet of two or more symbols.
//!
//! Input bytes are read as one big-endian unsigned integer and rewritten in the
//! radix given by the alphabet length, as base58 and base62 do. Leading `0x00`
//! bytes, which carry no magnitude, are kept as a prefix of zero symbols.
//!
//! ```
//! use basex::{Alphabet, decode, encode};
//!
//! let alphabet: Alphabet = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz".parse()?;
//! let encoded = encode(b"\x00hi", &alphabet);
//! assert_eq!(encoded, "06x7");
//! assert_eq!(decode(&encoded, &alphabet)?, b"\x00hi");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod alphabet;
mod codec;
mod config;
mod encoding;
mod error;

pub use alphabet::Alphabet;
pub use codec::Codec;
pub use config::{AlphabetConfig, AlphabetsConfig};
pub use error::{AlphabetError, ConfigError, DecodeError, find_closest_alphabet};

/// Encodes `data` with `alphabet`. Never fails; empty input yields an empty string.
pub fn encode(data: &[u8], alphabet: &Alphabet) -> String {
    encoding::encode(data, alphabet)
}

/// Decodes `encoded` with `alphabet`, rejecting any symbol outside it.
pub fn decode(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, DecodeError> {
    encoding::decode(encoded, alphabet)
}
