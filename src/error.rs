use thiserror::Error;

/// Errors raised while building an [`Alphabet`](crate::Alphabet).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// Fewer than two symbols were supplied; no positional numeral system exists below base 2.
    #[error("alphabet needs at least 2 symbols, got {len}")]
    TooShort { len: usize },
    /// The same symbol appears twice, so decoding could not tell the two digits apart.
    #[error("duplicate symbol {symbol:?} in alphabet at positions {first} and {second}")]
    DuplicateSymbol {
        symbol: char,
        first: usize,
        second: usize,
    },
}

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input contains a symbol that is not in the alphabet.
    /// `position` counts characters, not bytes.
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

/// Errors from loading or resolving named alphabets.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse alphabet config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("alphabet '{name}' not found{}", suggestion_hint(.suggestion))]
    UnknownAlphabet {
        name: String,
        suggestion: Option<String>,
    },
    #[error("alphabet '{name}' is invalid: {source}")]
    InvalidAlphabet {
        name: String,
        #[source]
        source: AlphabetError,
    },
    #[error("alphabet '{name}' has an invalid range: {reason}")]
    InvalidRange { name: String, reason: String },
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

/// Find the closest matching alphabet name, if any is within a couple of edits.
pub fn find_closest_alphabet<'a, I>(name: &str, available: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    // 1-2 character typos for short names, up to 3 for longer ones
    let threshold = if name.chars().count() < 5 { 2 } else { 3 };

    available
        .into_iter()
        .map(|candidate| (strsim::levenshtein(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)))
        .map(|(_, candidate)| candidate.to_string())
}
