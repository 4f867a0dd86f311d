// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: saltkdf
// File: codec.rs
// Author: saltkdf maintainers

//! Hex and integer encodings used for salts and derived keys.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexDecodingError {
	/// `position` counts characters of the zero-padded input.
	#[error("illegal hex value '{character}' at position {position}")]
	InvalidHexDigit { position: usize, character: char },
	#[error("malformed hex: {0}")]
	Malformed(String),
}

/// Decodes a hex string into bytes. Odd-length input is treated as if
/// it carried a leading `0` nibble, so `"abc"` decodes like `"0abc"`.
pub fn hex_decode(text: &str) -> Result<Vec<u8>, HexDecodingError> {
	let padded = if text.chars().count() % 2 == 1 {
		format!("0{}", text)
	} else {
		text.to_string()
	};

	if let Some((position, character)) = padded
		.chars()
		.enumerate()
		.find(|(_, c)| !c.is_ascii_hexdigit())
	{
		return Err(HexDecodingError::InvalidHexDigit {
			position,
			character,
		});
	}

	let mut bytes = vec![0u8; padded.len() / 2];
	hex::decode_to_slice(&padded, &mut bytes)
		.map_err(|err| HexDecodingError::Malformed(err.to_string()))?;
	Ok(bytes)
}

/// Renders bytes as upper-case hex pairs separated by single blanks,
/// e.g. `[0x04, 0xdf]` becomes `"04 DF"`.
pub fn hex_encode(bytes: &[u8]) -> String {
	let digits = hex::encode_upper(bytes);
	let mut output = String::with_capacity(bytes.len() * 3);
	for (i, pair) in digits.as_bytes().chunks(2).enumerate() {
		if i > 0 {
			output.push(' ');
		}
		output.push(pair[0] as char);
		output.push(pair[1] as char);
	}
	output
}

/// Big-endian four byte form of an integer salt; `1` becomes
/// `[0x00, 0x00, 0x00, 0x01]`.
pub fn integer_to_bytes(value: u32) -> [u8; 4] {
	value.to_be_bytes()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decode_even_length() {
		assert_eq!(
			hex_decode("04df0B92").unwrap(),
			vec![0x04, 0xdf, 0x0b, 0x92]
		);
	}

	#[test]
	fn decode_pads_odd_length() {
		assert_eq!(hex_decode("abc").unwrap(), vec![0x0a, 0xbc]);
		assert_eq!(hex_decode("f").unwrap(), vec![0x0f]);
	}

	#[test]
	fn decode_empty() {
		assert!(hex_decode("").unwrap().is_empty());
	}

	#[test]
	fn decode_reports_padded_position() {
		assert_eq!(
			hex_decode("12g4").unwrap_err(),
			HexDecodingError::InvalidHexDigit {
				position: 2,
				character: 'g'
			}
		);
		// "x12" is padded to "0x12"
		assert_eq!(
			hex_decode("x12").unwrap_err(),
			HexDecodingError::InvalidHexDigit {
				position: 1,
				character: 'x'
			}
		);
	}

	#[test]
	fn decode_reports_offending_character() {
		assert_eq!(
			hex_decode("1g").unwrap_err(),
			HexDecodingError::InvalidHexDigit {
				position: 1,
				character: 'g'
			}
		);
		assert_eq!(
			hex_decode("g1").unwrap_err(),
			HexDecodingError::InvalidHexDigit {
				position: 0,
				character: 'g'
			}
		);
	}

	#[test]
	fn decode_rejects_non_ascii() {
		assert_eq!(
			hex_decode("0ä").unwrap_err(),
			HexDecodingError::InvalidHexDigit {
				position: 1,
				character: 'ä'
			}
		);
	}

	#[test]
	fn encode_separates_bytes() {
		assert_eq!(hex_encode(&[0x04, 0xdf, 0x0b, 0x92]), "04 DF 0B 92");
		assert_eq!(hex_encode(&[0xff]), "FF");
		assert_eq!(hex_encode(&[]), "");
	}

	#[test]
	fn integer_is_big_endian() {
		assert_eq!(integer_to_bytes(1), [0, 0, 0, 1]);
		assert_eq!(integer_to_bytes(81_726_354), [0x04, 0xdf, 0x0b, 0x92]);
		assert_eq!(
			integer_to_bytes(i32::MAX as u32),
			[0x7f, 0xff, 0xff, 0xff]
		);
	}
}
