// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: saltkdf
// File: main.rs
// Author: saltkdf maintainers

use saltkdf::skdf::app;

fn main() {
	env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or("warn"),
	)
	.init();

	if let Err(err) = app::run() {
		log::debug!("run failed: {:?}", err);
		app::report_error(&err);
		std::process::exit(1);
	}
}
