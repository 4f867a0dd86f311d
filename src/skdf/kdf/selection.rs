// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: saltkdf
// File: selection.rs
// Author: saltkdf maintainers

//! Hash type selectors accepted on the command line.

use super::engine::DerivationError;
use strum::{EnumIter, IntoEnumIterator};

/// Digest cores available for the PBKDF2 HMAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
	Sha1,
	Sha256,
	Sha384,
	Sha512,
}

impl HashAlgorithm {
	pub fn identifier(self) -> &'static str {
		match self {
			Self::Sha1 => "sha1",
			Self::Sha256 => "sha256",
			Self::Sha384 => "sha384",
			Self::Sha512 => "sha512",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::Sha1 => "SHA1",
			Self::Sha256 => "SHA256",
			Self::Sha384 => "SHA384",
			Self::Sha512 => "SHA512",
		}
	}
}

impl std::str::FromStr for HashAlgorithm {
	type Err = DerivationError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let lowered = value.to_lowercase();
		let name = lowered
			.strip_prefix("pbkdf2withhmac")
			.unwrap_or(&lowered);
		match name {
			"sha1" | "sha-1" => Ok(Self::Sha1),
			"sha256" | "sha-256" => Ok(Self::Sha256),
			"sha384" | "sha-384" => Ok(Self::Sha384),
			"sha512" | "sha-512" => Ok(Self::Sha512),
			_ => Err(DerivationError::UnsupportedAlgorithm(
				value.to_string(),
			)),
		}
	}
}

/// One row of the hash type table.
///
/// Selector 4 runs SHA512 with a 512 bit key, the same as selector 5.
/// The slot was meant for a 384 bit SHA512 variant but has always
/// produced SHA512/512 output, and existing users rely on that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum HashSelection {
	Sha1,
	Sha256,
	Sha384,
	Sha512Legacy,
	Sha512,
}

impl HashSelection {
	/// The 1-based number used on the command line.
	pub fn selector(self) -> u8 {
		match self {
			Self::Sha1 => 1,
			Self::Sha256 => 2,
			Self::Sha384 => 3,
			Self::Sha512Legacy => 4,
			Self::Sha512 => 5,
		}
	}

	pub fn algorithm(self) -> HashAlgorithm {
		match self {
			Self::Sha1 => HashAlgorithm::Sha1,
			Self::Sha256 => HashAlgorithm::Sha256,
			Self::Sha384 => HashAlgorithm::Sha384,
			Self::Sha512Legacy | Self::Sha512 => HashAlgorithm::Sha512,
		}
	}

	pub fn key_length_bits(self) -> usize {
		match self {
			Self::Sha1 => 160,
			Self::Sha256 => 256,
			Self::Sha384 => 384,
			Self::Sha512Legacy | Self::Sha512 => 512,
		}
	}

	pub fn label(self) -> &'static str {
		self.algorithm().label()
	}

	pub fn from_selector(selector: u8) -> Option<Self> {
		Self::iter().find(|s| s.selector() == selector)
	}

	pub fn from_index(index: usize) -> Option<Self> {
		Self::iter().nth(index)
	}
}
