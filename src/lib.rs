// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: saltkdf
// File: lib.rs
// Author: saltkdf maintainers

pub mod skdf {
	pub mod app;
	pub mod args;
	pub mod codec;
	pub mod error;
	pub mod kdf;
	pub mod report;
	pub mod salt;
	pub mod weak;
}
