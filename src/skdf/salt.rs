// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: saltkdf
// File: salt.rs
// Author: saltkdf maintainers

//! Turns the salt argument into the bytes fed to PBKDF2.
//!
//! In integer mode the argument is a decimal number whose four
//! big-endian bytes become the salt, which limits the salt space to
//! 2^31 values of fixed length. In byte mode the argument is hex and
//! any length is possible.

use crate::skdf::args::{self, ValidationError};
use crate::skdf::codec::{self, HexDecodingError};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaltMode {
	Integer,
	Bytes,
}

impl SaltMode {
	pub fn from_do_it_right(do_it_right: bool) -> Self {
		if do_it_right {
			Self::Bytes
		} else {
			Self::Integer
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaltError {
	#[error(transparent)]
	Validation(#[from] ValidationError),
	#[error("\"Salt\" contains {0}")]
	Hex(#[from] HexDecodingError),
}

/// Salt bytes together with the form shown in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSalt {
	pub mode: SaltMode,
	pub bytes: Vec<u8>,
	pub display: String,
}

pub fn resolve(mode: SaltMode, raw: &str) -> Result<ResolvedSalt, SaltError> {
	let resolved = match mode {
		SaltMode::Bytes => {
			let bytes = codec::hex_decode(raw)?;
			let display = codec::hex_encode(&bytes);
			ResolvedSalt {
				mode,
				bytes,
				display,
			}
		}
		SaltMode::Integer => {
			let value = args::parse_integer_salt(raw)?;
			ResolvedSalt {
				mode,
				bytes: codec::integer_to_bytes(value).to_vec(),
				display: value.to_string(),
			}
		}
	};
	log::debug!(
		"salt resolved in {:?} mode to {} bytes",
		resolved.mode,
		resolved.bytes.len()
	);
	Ok(resolved)
}
