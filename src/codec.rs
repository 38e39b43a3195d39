use crate::alphabet::Alphabet;
use crate::encoding;
use crate::error::{AlphabetError, DecodeError};

/// A base-N encoder/decoder bound to one alphabet.
///
/// The symbol tables are fixed at construction, so a `Codec` can be shared
/// freely between threads and every call is a pure function of its input.
///
/// # Example
///
/// ```
/// use basex::Codec;
///
/// let base58 = Codec::from_chars("123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz")?;
/// assert_eq!(base58.encode(&[0x00, 0x01]), "12");
/// assert_eq!(base58.decode("12")?, vec![0x00, 0x01]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codec {
    alphabet: Alphabet,
}

impl Codec {
    /// Wraps an already validated alphabet.
    pub fn new(alphabet: Alphabet) -> Self {
        Codec { alphabet }
    }

    /// Builds a codec from a string whose characters form the alphabet.
    pub fn from_chars(chars: &str) -> Result<Self, AlphabetError> {
        Ok(Self::new(chars.parse()?))
    }

    /// Returns the alphabet the codec was built from.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the radix, i.e. the alphabet length.
    pub fn base(&self) -> usize {
        self.alphabet.base()
    }

    /// Encodes `data`. Total: every byte sequence, including the empty one, has an encoding.
    pub fn encode(&self, data: &[u8]) -> String {
        let encoded = encoding::encode(data, &self.alphabet);
        log::trace!(
            "base{} encode: {} bytes -> {} symbols",
            self.base(),
            data.len(),
            encoded.chars().count()
        );
        encoded
    }

    /// Decodes `encoded` back into the bytes it was produced from.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidSymbol`] for the first symbol outside the
    /// alphabet; no bytes are returned in that case.
    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        let decoded = encoding::decode(encoded, &self.alphabet)?;
        log::trace!(
            "base{} decode: {} symbols -> {} bytes",
            self.base(),
            encoded.chars().count(),
            decoded.len()
        );
        Ok(decoded)
    }
}

impl From<Alphabet> for Codec {
    fn from(alphabet: Alphabet) -> Self {
        Self::new(alphabet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Codec>();
    }

    #[test]
    fn test_concurrent_callers_agree() {
        let codec = Codec::from_chars("0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
        let data = b"shared read-only tables".to_vec();
        let expected = codec.encode(&data);

        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    let encoded = codec.encode(&data);
                    assert_eq!(encoded, expected);
                    assert_eq!(codec.decode(&encoded).unwrap(), data);
                });
            }
        });
    }

    #[test]
    fn test_from_alphabet_matches_new() {
        let alphabet: Alphabet = "01234567".parse().unwrap();
        let codec: Codec = alphabet.clone().into();
        assert_eq!(codec, Codec::new(alphabet));
        assert_eq!(codec.base(), 8);
        assert_eq!(codec.encode(&[0x00, 0x08]), "010");
    }

    #[test]
    fn test_from_chars_propagates_alphabet_error() {
        assert_eq!(
            Codec::from_chars("a"),
            Err(AlphabetError::TooShort { len: 1 })
        );
    }
}
