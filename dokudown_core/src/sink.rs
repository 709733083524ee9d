use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::PathBuf;

use crate::DokuError;
use crate::DokuResult;

/// Where the converted document is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
	Stdout,
	File(PathBuf),
}

impl From<Option<PathBuf>> for OutputTarget {
	fn from(path: Option<PathBuf>) -> Self {
		path.map_or(Self::Stdout, Self::File)
	}
}

impl fmt::Display for OutputTarget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Stdout => write!(f, "stdout"),
			Self::File(path) => write!(f, "`{}`", path.display()),
		}
	}
}

impl OutputTarget {
	/// Write every line followed by a newline. Files are created (or
	/// truncated) here, never earlier.
	pub fn write_lines<S: AsRef<str>>(&self, lines: &[S]) -> DokuResult<()> {
		let label = self.to_string();

		match self {
			Self::Stdout => write_lines(std::io::stdout().lock(), lines, &label),
			Self::File(path) => {
				let file = File::create(path).map_err(|source| {
					DokuError::SinkWrite {
						target: label.clone(),
						source,
					}
				})?;
				write_lines(file, lines, &label)
			}
		}
	}
}

/// Write `lines` to `writer`, one physical line per entry.
pub fn write_lines<W: Write, S: AsRef<str>>(writer: W, lines: &[S], label: &str) -> DokuResult<()> {
	let to_error = |source| {
		DokuError::SinkWrite {
			target: label.to_string(),
			source,
		}
	};
	let mut writer = BufWriter::new(writer);

	for line in lines {
		writer.write_all(line.as_ref().as_bytes()).map_err(to_error)?;
		writer.write_all(b"\n").map_err(to_error)?;
	}

	writer.flush().map_err(to_error)?;
	tracing::debug!(lines = lines.len(), target = label, "wrote dokuwiki output");

	Ok(())
}
