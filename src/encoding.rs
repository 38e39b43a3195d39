use crate::alphabet::Alphabet;
use crate::error::DecodeError;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

/// Encodes `data` as a base-N string over `alphabet`.
///
/// Each leading `0x00` byte becomes one zero symbol; the rest of the input is
/// read as a big-endian integer and written out most-significant digit first.
pub fn encode(data: &[u8], alphabet: &Alphabet) -> String {
    let leading_zeros = data.iter().take_while(|&&b| b == 0).count();
    let zero = alphabet.zero();

    let base = alphabet.base();
    let mut num = BigUint::from_bytes_be(&data[leading_zeros..]);
    let base_big = BigUint::from(base);

    // Pre-allocate with estimated capacity: ~8 / log2(base) digits per byte
    let max_digits =
        ((data.len() - leading_zeros) as f64 * 8.0 / (base as f64).log2()).ceil() as usize;
    let mut digits = Vec::with_capacity(max_digits);

    while !num.is_zero() {
        let (quotient, remainder) = num.div_rem(&base_big);
        let digit = remainder
            .to_usize()
            .and_then(|d| alphabet.encode_digit(d))
            .expect("remainder is below the radix");
        digits.push(digit);
        num = quotient;
    }

    let mut result = String::with_capacity((leading_zeros + digits.len()) * zero.len_utf8());
    result.extend(std::iter::repeat_n(zero, leading_zeros));
    result.extend(digits.iter().rev());
    result
}

/// Decodes a base-N string over `alphabet` back into bytes.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidSymbol`] for the first symbol that is not in
/// the alphabet. Nothing is returned for a partially decoded input.
pub fn decode(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, DecodeError> {
    let zero = alphabet.zero();
    let leading_zeros = encoded.chars().take_while(|&c| c == zero).count();

    let base_big = BigUint::from(alphabet.base());
    let mut num = BigUint::zero();

    for (position, c) in encoded.chars().enumerate().skip(leading_zeros) {
        let digit = alphabet
            .decode_char(c)
            .ok_or(DecodeError::InvalidSymbol {
                symbol: c,
                position,
            })?;

        num *= &base_big;
        num += digit;
    }

    // to_bytes_be() renders zero as [0], which must not leak into the output
    let bytes = if num.is_zero() {
        Vec::new()
    } else {
        num.to_bytes_be()
    };

    let mut result = Vec::with_capacity(leading_zeros + bytes.len());
    result.resize(leading_zeros, 0u8);
    result.extend_from_slice(&bytes);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary() -> Alphabet {
        "01".parse().unwrap()
    }

    #[test]
    fn test_encode_binary_digits() {
        assert_eq!(encode(&[0b1010_0101], &binary()), "10100101");
        assert_eq!(encode(&[0x01, 0x00], &binary()), "100000000");
    }

    #[test]
    fn test_encode_prefix_then_digits() {
        assert_eq!(encode(&[0x00, 0x00, 0x05], &binary()), "00101");
    }

    #[test]
    fn test_decode_skips_prefix_before_accumulating() {
        assert_eq!(decode("00101", &binary()).unwrap(), vec![0x00, 0x00, 0x05]);
    }

    #[test]
    fn test_decode_reports_character_position() {
        let alphabet: Alphabet = "αβγ".parse().unwrap();
        assert_eq!(
            decode("ααβxγ", &alphabet),
            Err(DecodeError::InvalidSymbol {
                symbol: 'x',
                position: 3,
            })
        );
    }

    #[test]
    fn test_encode_top_digit_of_wide_radix() {
        let chars: Vec<char> = ('\u{4E00}'..).take(1024).collect();
        let alphabet = Alphabet::new(chars).unwrap();
        // 0x03FF is exactly the largest single digit in base 1024
        assert_eq!(encode(&[0x03, 0xFF], &alphabet), "\u{51FF}");
        assert_eq!(encode(&[0x04, 0x00], &alphabet), "\u{4E01}\u{4E00}");
        assert_eq!(decode("\u{51FF}", &alphabet).unwrap(), vec![0x03, 0xFF]);
    }

    #[test]
    fn test_decode_value_wider_than_u128() {
        let data = [0xffu8; 40];
        let alphabet: Alphabet = "0123456789".parse().unwrap();
        let encoded = encode(&data, &alphabet);
        assert_eq!(encoded.len(), 97);
        assert_eq!(decode(&encoded, &alphabet).unwrap(), data);
    }
}
