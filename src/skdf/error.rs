// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: saltkdf
// File: error.rs
// Author: saltkdf maintainers

use crate::skdf::args::ValidationError;
use crate::skdf::kdf::DerivationError;
use crate::skdf::salt::SaltError;
use thiserror::Error;

/// Every way a run can fail. All of them end the process with status 1.
#[derive(Debug, Error)]
pub enum AppError {
	#[error("Not enough parameters: expected 4, got {provided}")]
	ArgumentCount { provided: usize },

	#[error(transparent)]
	Validation(#[from] ValidationError),

	#[error(transparent)]
	Salt(#[from] SaltError),

	#[error(transparent)]
	Derivation(#[from] DerivationError),
}

impl AppError {
	pub fn is_usage_error(&self) -> bool {
		matches!(self, Self::ArgumentCount { .. })
	}
}
