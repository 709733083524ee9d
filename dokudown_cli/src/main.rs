use std::process;

use clap::Parser;
use dokudown_cli::DokudownCli;
use dokudown_core::DokuResult;
use dokudown_core::DokudownConfig;
use dokudown_core::convert_file;
use tracing_subscriber::EnvFilter;

fn main() {
	let args = DokudownCli::parse();

	// Logs go to stderr so that stdout only ever carries the document.
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
		)
		.with_writer(std::io::stderr)
		.init();

	let use_color = std::env::var_os("NO_COLOR").is_none();
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	if let Err(e) = run(&args) {
		let report: miette::Report = e.into();
		eprintln!("{report:?}");
		process::exit(2);
	}
}

fn run(args: &DokudownCli) -> DokuResult<()> {
	let root = std::env::current_dir()?;
	let options = DokudownConfig::load(&root)?
		.unwrap_or_default()
		.transform_options();
	let target = args.output_target();

	tracing::debug!(
		input_file = %args.input_file.display(),
		output_file = %target,
		"starting conversion"
	);
	let written = convert_file(&args.input_file, &target, options)?;
	tracing::info!(lines = written, "conversion finished");

	Ok(())
}
