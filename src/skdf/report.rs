// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: saltkdf
// File: report.rs
// Author: saltkdf maintainers

use crate::skdf::codec::hex_encode;
use std::fmt;
use std::time::Duration;

/// Everything printed after a successful derivation.
#[derive(Debug, Clone)]
pub struct Report<'a> {
	pub hash_label: &'a str,
	pub salt_display: &'a str,
	pub iterations: u32,
	pub password: &'a str,
	pub derived_key: &'a [u8],
	pub elapsed: Duration,
}

impl Report<'_> {
	pub fn result_line(&self) -> String {
		format!(
			"HashType: {}, Salt: {}, IterationCount: {}, Password: '{}', PBKDF2: {}",
			self.hash_label,
			self.salt_display,
			self.iterations,
			self.password,
			hex_encode(self.derived_key)
		)
	}

	pub fn duration_line(&self) -> String {
		format!("Duration: {} ms", self.elapsed.as_millis())
	}
}

impl fmt::Display for Report<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "{}", self.result_line())?;
		write!(f, "{}", self.duration_line())
	}
}
