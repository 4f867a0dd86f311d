// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: saltkdf
// File: app.rs
// Author: saltkdf maintainers

use crate::skdf::args::{self, ValidationError, HASH_TYPE_BOUNDS};
use crate::skdf::error::AppError;
use crate::skdf::kdf::{self, HashSelection, SecretMaterial};
use crate::skdf::report::Report;
use crate::skdf::salt::{self, SaltMode};
use crate::skdf::weak;
use clap::{crate_name, Arg, ArgMatches};
use colored::Colorize;
use std::ffi::OsString;
use std::time::Instant;
use strum::IntoEnumIterator;

const USAGE: &str =
	"saltkdf <hashType> <salt> <iterationCount> <password> [doItRight]";

const ARGUMENTS: &str = "arguments";

/// Validated inputs for one derivation.
#[derive(Debug)]
pub struct Invocation {
	pub selection: HashSelection,
	pub salt_mode: SaltMode,
	pub raw_salt: String,
	pub raw_iterations: String,
	pub password: String,
}

fn hash_type_lines() -> String {
	HashSelection::iter()
		.map(|s| {
			format!(
				"{}={} ({} bit)",
				s.selector(),
				s.label(),
				s.key_length_bits()
			)
		})
		.collect::<Vec<_>>()
		.join(", ")
}

/// Usage text printed when positional arguments are missing.
pub fn usage_text() -> String {
	[
		build_cli().render_usage().to_string(),
		String::new(),
		format!("       hashType: {}", hash_type_lines()),
		"       doItRight: If present the salt is interpreted as a hex byte array"
			.to_string(),
		"                  Otherwise the salt is interpreted as an integer"
			.to_string(),
	]
	.join("\n")
}

/// Every command line word is a value: there are no flags, and `--`
/// or `-h` may be a salt or a password.
pub fn build_cli() -> clap::Command {
	clap::Command::new(crate_name!())
		.color(clap::ColorChoice::Never)
		.bin_name(crate_name!())
		.version(clap::crate_version!())
		.about("Derive a PBKDF2 key from an integer or a byte salt and time it")
		.override_usage(USAGE)
		.disable_help_flag(true)
		.disable_version_flag(true)
		.arg(
			Arg::new(ARGUMENTS)
				.value_name("ARGS")
				.num_args(1..)
				.trailing_var_arg(true)
				.allow_hyphen_values(true),
		)
}

/// Prepends the binary name and a `--` so clap stops looking for
/// options; every user word, including a later `--`, stays a value.
pub fn literal_argv<I, T>(words: I) -> Vec<OsString>
where
	I: IntoIterator<Item = T>,
	T: Into<OsString>,
{
	let mut argv: Vec<OsString> =
		vec![crate_name!().into(), "--".into()];
	argv.extend(words.into_iter().map(Into::into));
	argv
}

/// Splits the values into the four required arguments and the optional
/// `doItRight`, then validates the hash type. Salt and iteration count
/// are checked later, in that order.
pub fn parse_invocation(
	matches: &ArgMatches,
) -> Result<Invocation, AppError> {
	let values: Vec<String> = matches
		.get_many::<String>(ARGUMENTS)
		.map(|values| values.cloned().collect())
		.unwrap_or_default();
	let [hash_type, raw_salt, raw_iterations, password, rest @ ..] =
		values.as_slice()
	else {
		return Err(AppError::ArgumentCount {
			provided: values.len(),
		});
	};

	let index = args::parse_hash_type(hash_type)?;
	let selection = HashSelection::from_index(index).ok_or(
		ValidationError::AboveMaximum {
			name: HASH_TYPE_BOUNDS.name,
			max: HASH_TYPE_BOUNDS.max,
		},
	)?;

	Ok(Invocation {
		selection,
		salt_mode: SaltMode::from_do_it_right(!rest.is_empty()),
		raw_salt: raw_salt.clone(),
		raw_iterations: raw_iterations.clone(),
		password: password.clone(),
	})
}

/// Runs the full pipeline and returns the report text.
pub fn execute(invocation: &Invocation) -> Result<String, AppError> {
	log::debug!(
		"hash type {} selected ({} bit key)",
		invocation.selection.label(),
		invocation.selection.key_length_bits()
	);
	let salt = salt::resolve(invocation.salt_mode, &invocation.raw_salt)?;
	let iterations = args::parse_iteration_count(&invocation.raw_iterations)?;
	let password = SecretMaterial::from_password(&invocation.password);

	for warning in weak::warnings_for(invocation.selection, salt.mode) {
		weak::emit_warning_banner(&warning);
	}

	let start = Instant::now();
	let derived = kdf::derive(
		invocation.selection.algorithm(),
		invocation.selection.key_length_bits(),
		&salt.bytes,
		iterations,
		&password,
	)?;
	let elapsed = start.elapsed();
	log::debug!("derivation took {:?}", elapsed);

	let report = Report {
		hash_label: invocation.selection.label(),
		salt_display: &salt.display,
		iterations,
		password: &invocation.password,
		derived_key: derived.as_slice(),
		elapsed,
	};
	Ok(report.to_string())
}

/// Prints an error the way the binary reports it on stderr.
pub fn report_error(err: &AppError) {
	if err.is_usage_error() {
		eprintln!("{}\n", "Not enough parameters.".red());
		eprintln!("{}", usage_text());
	} else {
		eprintln!("{} {}", "Error:".red().bold(), err);
	}
}

pub fn run() -> Result<(), AppError> {
	let matches = build_cli()
		.get_matches_from(literal_argv(std::env::args_os().skip(1)));
	let invocation = parse_invocation(&matches)?;
	let output = execute(&invocation)?;
	println!("{}", output);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn invocation(argv: &[&str]) -> Result<Invocation, AppError> {
		let matches = build_cli()
			.try_get_matches_from(literal_argv(argv.iter().copied()))
			.unwrap();
		parse_invocation(&matches)
	}

	#[test]
	fn missing_positionals_are_counted() {
		match invocation(&["1", "42"]) {
			Err(AppError::ArgumentCount { provided }) => {
				assert_eq!(provided, 2)
			}
			other => panic!("unexpected {:?}", other),
		}
	}

	#[test]
	fn fifth_argument_selects_byte_salt() {
		let wrong = invocation(&["2", "1", "1", "pw"]).unwrap();
		assert_eq!(wrong.salt_mode, SaltMode::Integer);
		let right = invocation(&["2", "01", "1", "pw", "x"]).unwrap();
		assert_eq!(right.salt_mode, SaltMode::Bytes);
		let extra =
			invocation(&["2", "01", "1", "pw", "x", "y"]).unwrap();
		assert_eq!(extra.salt_mode, SaltMode::Bytes);
		assert_eq!(right.selection, HashSelection::Sha256);
	}

	#[test]
	fn negative_hash_type_reaches_validator() {
		assert!(matches!(
			invocation(&["-1", "1", "1", "pw"]),
			Err(AppError::Validation(
				ValidationError::BelowMinimum { .. }
			))
		));
	}

	#[test]
	fn hyphen_password_is_accepted() {
		let parsed = invocation(&["1", "1", "1", "-secret"]).unwrap();
		assert_eq!(parsed.password, "-secret");
	}

	#[test]
	fn flag_like_words_stay_values() {
		for word in ["-h", "--help", "--version", "-V", "--"] {
			let parsed = invocation(&["1", word, word, word, word])
				.unwrap_or_else(|e| panic!("{:?} for {:?}", e, word));
			assert_eq!(parsed.raw_salt, word);
			assert_eq!(parsed.raw_iterations, word);
			assert_eq!(parsed.password, word);
			assert_eq!(parsed.salt_mode, SaltMode::Bytes);
		}
	}

	#[test]
	fn leading_escape_counts_as_argument() {
		match invocation(&["--", "1", "7", "1"]) {
			Err(AppError::Validation(ValidationError::NotANumber(
				"HashType",
			))) => {}
			other => panic!("unexpected {:?}", other),
		}
		assert!(matches!(
			invocation(&[]),
			Err(AppError::ArgumentCount { provided: 0 })
		));
	}

	#[test]
	fn salt_is_validated_before_iterations() {
		let parsed = invocation(&["1", "abc", "0", "pw"]).unwrap();
		assert!(matches!(
			execute(&parsed),
			Err(AppError::Salt(_))
		));
	}

	#[test]
	fn execute_renders_report() {
		let parsed =
			invocation(&["1", "81726354", "1", "Veyron"]).unwrap();
		let output = execute(&parsed).unwrap();
		let mut lines = output.lines();
		assert_eq!(
			lines.next(),
			Some(
				"HashType: SHA1, Salt: 81726354, IterationCount: 1, \
				 Password: 'Veyron', PBKDF2: 46 BC 2D 1D 33 46 FD 12 C4 74 \
				 CD 81 F2 3E C1 C6 0F DB 62 2E"
			)
		);
		assert!(lines.next().unwrap().starts_with("Duration: "));
		assert_eq!(lines.next(), None);
	}

	#[test]
	fn usage_lists_every_hash_type() {
		let usage = usage_text();
		assert!(usage.starts_with(
			"Usage: saltkdf <hashType> <salt> <iterationCount> <password> [doItRight]\n"
		));
		assert!(usage.contains("1=SHA1 (160 bit)"));
		assert!(usage.contains("4=SHA512 (512 bit)"));
		assert!(usage.contains("5=SHA512 (512 bit)"));
	}
}
