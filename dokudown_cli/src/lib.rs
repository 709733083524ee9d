use std::path::PathBuf;

use clap::Parser;
use dokudown_core::OutputTarget;

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about = "Convert a Markdown file into DokuWiki markup.",
	long_about = "dokudown reads a Markdown file line by line and rewrites headers, numbered \
	              lists and fenced code blocks as DokuWiki markup.\n\nThe converted document is \
	              written to standard output unless `--output_file` is given. Nothing is written \
	              when the input cannot be read.\n\nOptional settings are read from \
	              `dokudown.toml` in the working directory. Set `RUST_LOG=debug` to trace the \
	              conversion on stderr."
)]
pub struct DokudownCli {
	/// Markdown file to convert.
	pub input_file: PathBuf,

	/// File to write the DokuWiki output to. Defaults to standard output.
	#[arg(short = 'o', long = "output_file", value_name = "OUTPUT_FILE")]
	pub output_file: Option<PathBuf>,
}

impl DokudownCli {
	pub fn output_target(&self) -> OutputTarget {
		OutputTarget::from(self.output_file.clone())
	}
}
