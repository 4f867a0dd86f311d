// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: saltkdf
// Module: weak parameter warnings
// Author: saltkdf maintainers

//! Warning banners for parameter choices that weaken the derived key.
//! Banners go to stderr so the report on stdout stays unchanged.

use crate::skdf::kdf::HashSelection;
use crate::skdf::salt::SaltMode;
use colored::Colorize;

const NIST_REFERENCE: &str =
	"https://doi.org/10.6028/NIST.SP.800-132";
const OWASP_REFERENCE: &str =
	"https://cheatsheetseries.owasp.org/cheatsheets/Password_Storage_Cheat_Sheet.html";

const REFERENCES: &[&str] = &[NIST_REFERENCE, OWASP_REFERENCE];

/// Warning banner content emitted to stderr.
#[derive(Debug, Clone)]
pub struct WarningMessage {
	pub severity_icon: &'static str,
	pub headline: String,
	pub body: String,
	pub references: &'static [&'static str],
}

impl WarningMessage {
	/// Returns the banner text as displayed on stderr.
	pub fn banner(&self) -> String {
		format!(
			"{} {} {}",
			self.severity_icon, self.headline, self.body
		)
	}
}

pub fn hash_warning(selection: HashSelection) -> Option<WarningMessage> {
	match selection {
		HashSelection::Sha1 => Some(WarningMessage {
			severity_icon: "⚠",
			headline: "WARNING: SHA1 is a weak PRF choice for PBKDF2.".into(),
			body: "Use SHA256 or SHA512 for new derivations.".into(),
			references: REFERENCES,
		}),
		_ => None,
	}
}

pub fn salt_warning(mode: SaltMode) -> Option<WarningMessage> {
	match mode {
		SaltMode::Integer => Some(WarningMessage {
			severity_icon: "⚠",
			headline: "WARNING: salt interpreted as an integer.".into(),
			body: "Only 2^31 distinct 4 byte salts exist in this mode; \
			       pass a fifth argument to use a hex byte salt."
				.into(),
			references: REFERENCES,
		}),
		SaltMode::Bytes => None,
	}
}

/// Collects every warning that applies to the chosen parameters.
pub fn warnings_for(
	selection: HashSelection,
	mode: SaltMode,
) -> Vec<WarningMessage> {
	hash_warning(selection)
		.into_iter()
		.chain(salt_warning(mode))
		.collect()
}

/// Emit the warning banner and supporting references to stderr using ANSI
/// highlighting when the terminal supports it.
pub fn emit_warning_banner(message: &WarningMessage) {
	let banner = message.banner();
	let references = message.references.join(" | ");
	eprintln!("{}", banner.yellow().bold());
	eprintln!("{}", format!("References: {}", references).yellow());
}
