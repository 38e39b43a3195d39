use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::alphabet::Alphabet;
use crate::codec::Codec;
use crate::error::{ConfigError, find_closest_alphabet};

/// Configuration for a single alphabet loaded from TOML.
///
/// Symbols come either from `chars` or from a sequential Unicode range given
/// by `start` + `length`. `chars` wins when both are present.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AlphabetConfig {
    /// The symbols comprising the alphabet, in digit order
    #[serde(default)]
    pub chars: String,
    /// First character of a range-based alphabet
    #[serde(default)]
    pub start: Option<String>,
    /// Number of characters in a range-based alphabet
    #[serde(default)]
    pub length: Option<usize>,
    #[serde(default)]
    pub description: Option<String>,
}

impl AlphabetConfig {
    /// Returns the effective symbol string, generating it from the range if needed.
    pub fn effective_chars(&self) -> Result<String, String> {
        if !self.chars.is_empty() {
            return Ok(self.chars.clone());
        }

        match (&self.start, self.length) {
            (Some(start), Some(length)) => {
                let start_char = start
                    .chars()
                    .next()
                    .ok_or("start must contain at least one character")?;
                generate_range(start_char as u32, length)
            }
            (Some(_), None) => Err("start requires length".to_string()),
            (None, Some(_)) => Err("length requires start".to_string()),
            (None, None) => Ok(String::new()),
        }
    }
}

/// Generate a string of sequential Unicode characters from a range.
fn generate_range(start: u32, length: usize) -> Result<String, String> {
    const MAX_UNICODE: u32 = 0x10FFFF;
    const SURROGATE_START: u32 = 0xD800;
    const SURROGATE_END: u32 = 0xDFFF;

    if length == 0 {
        return Err("length must be greater than 0".to_string());
    }

    let end = u32::try_from(length - 1)
        .ok()
        .and_then(|span| start.checked_add(span))
        .ok_or("range exceeds maximum Unicode codepoint")?;

    if end > MAX_UNICODE {
        return Err(format!(
            "range end U+{:X} exceeds maximum Unicode codepoint U+{:X}",
            end, MAX_UNICODE
        ));
    }

    if start <= SURROGATE_END && end >= SURROGATE_START {
        return Err(format!(
            "range U+{:X}..U+{:X} crosses surrogate gap (U+D800..U+DFFF)",
            start, end
        ));
    }

    (start..=end)
        .map(|codepoint| {
            char::from_u32(codepoint).ok_or_else(|| format!("invalid codepoint U+{:X}", codepoint))
        })
        .collect()
}

/// Registry of named alphabets.
#[derive(Debug, Deserialize, Default)]
pub struct AlphabetsConfig {
    #[serde(default)]
    pub alphabets: HashMap<String, AlphabetConfig>,
}

impl AlphabetsConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Built-in alphabets shipped with the crate.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_toml(include_str!("../alphabets.toml"))
    }

    /// Load configuration from custom file path
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration with user overrides from standard locations
    /// 1. Start with built-in alphabets
    /// 2. Override with ~/.config/basex/alphabets.toml if it exists
    /// 3. Override with ./alphabets.toml if it exists in current directory
    ///
    /// Override files that fail to load are skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, ConfigError> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            config.merge_optional(&config_dir.join("basex").join("alphabets.toml"));
        }
        config.merge_optional(Path::new("alphabets.toml"));

        Ok(config)
    }

    fn merge_optional(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(overrides) => {
                log::debug!(
                    "merging {} alphabet(s) from {}",
                    overrides.alphabets.len(),
                    path.display()
                );
                self.merge(overrides);
            }
            Err(e) => log::warn!("skipping alphabet config {}: {}", path.display(), e),
        }
    }

    /// Merge another config into this one, overriding existing alphabets
    pub fn merge(&mut self, other: AlphabetsConfig) {
        self.alphabets.extend(other.alphabets);
    }

    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    /// Alphabet names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.alphabets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Builds the alphabet registered under `name`.
    pub fn alphabet(&self, name: &str) -> Result<Alphabet, ConfigError> {
        let config = self
            .get_alphabet(name)
            .ok_or_else(|| ConfigError::UnknownAlphabet {
                name: name.to_string(),
                suggestion: find_closest_alphabet(name, self.names()),
            })?;

        let chars = config
            .effective_chars()
            .map_err(|reason| ConfigError::InvalidRange {
                name: name.to_string(),
                reason,
            })?;

        chars
            .parse::<Alphabet>()
            .map_err(|source| ConfigError::InvalidAlphabet {
                name: name.to_string(),
                source,
            })
    }

    /// Builds a codec for the alphabet registered under `name`.
    pub fn codec(&self, name: &str) -> Result<Codec, ConfigError> {
        self.alphabet(name).map(Codec::new)
    }
}
