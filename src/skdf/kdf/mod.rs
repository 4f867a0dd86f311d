// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: saltkdf
// File: src/skdf/kdf/mod.rs
// Author: saltkdf maintainers
//
// PBKDF2 key derivation and the hash type table.

use zeroize::Zeroizing;

pub mod engine;
pub mod selection;

pub use engine::{derive, DerivationError};
pub use selection::{HashAlgorithm, HashSelection};

/// Wrapper for secret byte buffers (passwords, derived keys) that
/// guarantees zeroization on drop.
#[derive(Debug)]
pub struct SecretMaterial {
	inner: Zeroizing<Vec<u8>>,
}

impl SecretMaterial {
	/// Creates a new instance from raw bytes.
	pub fn from_bytes(bytes: Vec<u8>) -> Self {
		Self {
			inner: Zeroizing::new(bytes),
		}
	}

	/// Takes the UTF-8 encoding of a password.
	pub fn from_password(password: &str) -> Self {
		Self::from_bytes(password.as_bytes().to_vec())
	}

	pub fn as_slice(&self) -> &[u8] {
		self.inner.as_slice()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	pub fn len(&self) -> usize {
		self.inner.len()
	}
}

/// Output of a derivation.
pub type DerivedKey = SecretMaterial;
