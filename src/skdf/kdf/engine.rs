// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: saltkdf
// File: engine.rs
// Author: saltkdf maintainers

//! PBKDF2-HMAC derivation over the supported digest cores.

use super::selection::HashAlgorithm;
use super::{DerivedKey, SecretMaterial};
use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DerivationError {
	#[error("unsupported PBKDF2 hash `{0}`")]
	UnsupportedAlgorithm(String),
	#[error("key length must be at least one bit")]
	InvalidKeyLength,
	#[error("iteration count must be at least 1")]
	InvalidIterationCount,
}

/// Derives `key_length_bits` of PBKDF2 output, rounded up to whole
/// bytes. The password is used as its raw (UTF-8) bytes.
pub fn derive(
	algorithm: HashAlgorithm,
	key_length_bits: usize,
	salt: &[u8],
	iterations: u32,
	password: &SecretMaterial,
) -> Result<DerivedKey, DerivationError> {
	if key_length_bits == 0 {
		return Err(DerivationError::InvalidKeyLength);
	}
	if iterations == 0 {
		return Err(DerivationError::InvalidIterationCount);
	}

	let mut output = vec![0u8; key_length_bits.div_ceil(8)];
	let password = password.as_slice();
	match algorithm {
		HashAlgorithm::Sha1 => {
			pbkdf2_hmac::<Sha1>(password, salt, iterations, &mut output)
		}
		HashAlgorithm::Sha256 => {
			pbkdf2_hmac::<Sha256>(password, salt, iterations, &mut output)
		}
		HashAlgorithm::Sha384 => {
			pbkdf2_hmac::<Sha384>(password, salt, iterations, &mut output)
		}
		HashAlgorithm::Sha512 => {
			pbkdf2_hmac::<Sha512>(password, salt, iterations, &mut output)
		}
	}
	log::debug!(
		"pbkdf2-{} produced {} bytes after {} iterations",
		algorithm.identifier(),
		output.len(),
		iterations
	);
	Ok(DerivedKey::from_bytes(output))
}

/// Same as [`derive`], resolving the digest from a name such as
/// `sha256` or `PBKDF2WithHmacSHA256`.
pub fn derive_by_name(
	name: &str,
	key_length_bits: usize,
	salt: &[u8],
	iterations: u32,
	password: &SecretMaterial,
) -> Result<DerivedKey, DerivationError> {
	let algorithm = name.parse::<HashAlgorithm>()?;
	derive(algorithm, key_length_bits, salt, iterations, password)
}
