use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum DokuError {
	#[error(transparent)]
	#[diagnostic(code(dokudown::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to read markdown from `{}`", .path.display())]
	#[diagnostic(
		code(dokudown::source_read),
		help("check that the input file exists, is readable and contains UTF-8 text")
	)]
	SourceRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to write dokuwiki output to {target}")]
	#[diagnostic(
		code(dokudown::sink_write),
		help("check that the output directory exists and is writable")
	)]
	SinkWrite {
		target: String,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(dokudown::config_parse),
		help("check that dokudown.toml is valid TOML with an optional [code] section")
	)]
	ConfigParse(String),

	#[error("the line conversion task stopped before the document was finished")]
	#[diagnostic(code(dokudown::queue_closed))]
	QueueClosed,
}

pub type DokuResult<T> = Result<T, DokuError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
