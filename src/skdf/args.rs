// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: saltkdf
// File: args.rs
// Author: saltkdf maintainers

//! Range-checked parsing of the numeric command line arguments.

use thiserror::Error;

/// Inclusive bounds for one numeric argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
	pub name: &'static str,
	pub min: i64,
	pub max: i64,
}

pub const HASH_TYPE_BOUNDS: Bounds = Bounds {
	name: "HashType",
	min: 1,
	max: 5,
};

pub const SALT_BOUNDS: Bounds = Bounds {
	name: "Salt",
	min: 0,
	max: i32::MAX as i64,
};

pub const ITERATION_BOUNDS: Bounds = Bounds {
	name: "IterationCount",
	min: 1,
	max: 5_000_000,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
	#[error("\"{0}\" is not an integer")]
	NotANumber(&'static str),
	#[error("\"{name}\" is smaller than minimum value of {min}")]
	BelowMinimum { name: &'static str, min: i64 },
	#[error("\"{name}\" is larger than maximum value of {max}")]
	AboveMaximum { name: &'static str, max: i64 },
}

/// Parses `raw` as a base-10 integer and checks it against `min..=max`.
pub fn parse_int(
	name: &'static str,
	raw: &str,
	min: i64,
	max: i64,
) -> Result<i64, ValidationError> {
	let value = raw
		.parse::<i64>()
		.map_err(|_| ValidationError::NotANumber(name))?;
	if value < min {
		return Err(ValidationError::BelowMinimum { name, min });
	}
	if value > max {
		return Err(ValidationError::AboveMaximum { name, max });
	}
	Ok(value)
}

impl Bounds {
	pub fn parse(&self, raw: &str) -> Result<i64, ValidationError> {
		parse_int(self.name, raw, self.min, self.max)
	}
}

/// Parses the 1-based hash type selector into a zero-based index.
pub fn parse_hash_type(raw: &str) -> Result<usize, ValidationError> {
	let selector = HASH_TYPE_BOUNDS.parse(raw)?;
	Ok((selector - HASH_TYPE_BOUNDS.min) as usize)
}

pub fn parse_iteration_count(raw: &str) -> Result<u32, ValidationError> {
	ITERATION_BOUNDS.parse(raw).map(|v| v as u32)
}

pub fn parse_integer_salt(raw: &str) -> Result<u32, ValidationError> {
	SALT_BOUNDS.parse(raw).map(|v| v as u32)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_value_in_range() {
		assert_eq!(parse_int("X", "42", 0, 100), Ok(42));
		assert_eq!(parse_int("X", "0", 0, 100), Ok(0));
		assert_eq!(parse_int("X", "100", 0, 100), Ok(100));
	}

	#[test]
	fn rejects_non_numeric() {
		for raw in ["", "abc", "1.5", "0x10", " 3"] {
			assert_eq!(
				parse_int("X", raw, 0, 10),
				Err(ValidationError::NotANumber("X")),
				"input {:?}",
				raw
			);
		}
	}

	#[test]
	fn iteration_count_boundaries() {
		assert_eq!(
			parse_iteration_count("0"),
			Err(ValidationError::BelowMinimum {
				name: "IterationCount",
				min: 1
			})
		);
		assert_eq!(
			parse_iteration_count("5000001"),
			Err(ValidationError::AboveMaximum {
				name: "IterationCount",
				max: 5_000_000
			})
		);
		assert_eq!(parse_iteration_count("5000000"), Ok(5_000_000));
	}

	#[test]
	fn hash_type_is_zero_based() {
		assert_eq!(parse_hash_type("1"), Ok(0));
		assert_eq!(parse_hash_type("5"), Ok(4));
		assert!(matches!(
			parse_hash_type("6"),
			Err(ValidationError::AboveMaximum { .. })
		));
		assert!(matches!(
			parse_hash_type("-1"),
			Err(ValidationError::BelowMinimum { .. })
		));
	}

	#[test]
	fn integer_salt_rejects_out_of_range() {
		assert_eq!(parse_integer_salt("2147483647"), Ok(2_147_483_647));
		assert!(matches!(
			parse_integer_salt("2147483648"),
			Err(ValidationError::AboveMaximum { .. })
		));
		assert!(matches!(
			parse_integer_salt("-1"),
			Err(ValidationError::BelowMinimum { .. })
		));
	}

	#[test]
	fn error_messages_name_argument() {
		let err = parse_iteration_count("0").unwrap_err();
		assert_eq!(
			err.to_string(),
			"\"IterationCount\" is smaller than minimum value of 1"
		);
	}
}
