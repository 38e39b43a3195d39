use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::AlphabetError;

/// Represents an encoding alphabet: an ordered symbol table plus its reverse lookup.
///
/// The symbol at position 0 is the zero symbol. It is both the digit `0` of the
/// numeral system and the marker for each leading `0x00` byte of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    char_to_index: HashMap<char, usize>,
}

impl Alphabet {
    /// Creates a new alphabet from its symbols, in digit order.
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet has fewer than two symbols or contains
    /// the same symbol twice.
    pub fn new(chars: Vec<char>) -> Result<Self, AlphabetError> {
        if chars.len() < 2 {
            return Err(AlphabetError::TooShort { len: chars.len() });
        }

        let mut char_to_index = HashMap::with_capacity(chars.len());
        for (i, &c) in chars.iter().enumerate() {
            if let Some(first) = char_to_index.insert(c, i) {
                return Err(AlphabetError::DuplicateSymbol {
                    symbol: c,
                    first,
                    second: i,
                });
            }
        }

        Ok(Alphabet {
            chars,
            char_to_index,
        })
    }

    /// Returns the base (radix) of the alphabet.
    pub fn base(&self) -> usize {
        self.chars.len()
    }

    /// Returns the zero symbol (position 0).
    pub fn zero(&self) -> char {
        self.chars[0]
    }

    /// Returns the symbols in digit order.
    pub fn symbols(&self) -> &[char] {
        &self.chars
    }

    /// Encodes a digit (0 to base-1) as a symbol.
    ///
    /// Returns `None` if the digit is out of range.
    pub fn encode_digit(&self, digit: usize) -> Option<char> {
        self.chars.get(digit).copied()
    }

    /// Decodes a symbol back to its digit value.
    ///
    /// Returns `None` if the symbol is not in the alphabet.
    pub fn decode_char(&self, c: char) -> Option<usize> {
        self.char_to_index.get(&c).copied()
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars().collect())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{}", c))
    }
}
