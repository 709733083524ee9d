use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use crate::DokuError;
use crate::DokuResult;

/// Reads markdown input one line at a time, in file order, with line
/// terminators (`\n` or `\r\n`) removed.
#[derive(Debug)]
pub struct LineSource<R> {
	reader: R,
	path: PathBuf,
	line_number: usize,
	done: bool,
}

impl LineSource<BufReader<File>> {
	/// Open the file at `path`.
	pub fn open(path: impl AsRef<Path>) -> DokuResult<Self> {
		let path = path.as_ref();
		let file = File::open(path).map_err(|source| {
			DokuError::SourceRead {
				path: path.to_path_buf(),
				source,
			}
		})?;

		Ok(Self::with_path(BufReader::new(file), path))
	}
}

impl<R: BufRead> LineSource<R> {
	/// Wrap an already open reader. Errors are reported against `<input>`.
	pub fn new(reader: R) -> Self {
		Self::with_path(reader, "<input>")
	}

	pub fn with_path(reader: R, path: impl Into<PathBuf>) -> Self {
		Self {
			reader,
			path: path.into(),
			line_number: 0,
			done: false,
		}
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Number of lines yielded so far.
	pub fn line_number(&self) -> usize {
		self.line_number
	}
}

impl<R: BufRead> Iterator for LineSource<R> {
	type Item = DokuResult<String>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		let mut line = String::new();
		match self.reader.read_line(&mut line) {
			Ok(0) => {
				self.done = true;
				None
			}
			Ok(_) => {
				if line.ends_with('\n') {
					line.pop();
					if line.ends_with('\r') {
						line.pop();
					}
				}

				self.line_number += 1;
				Some(Ok(line))
			}
			Err(source) => {
				// A failed read ends the stream; the caller gets the error once.
				self.done = true;
				Some(Err(DokuError::SourceRead {
					path: self.path.clone(),
					source,
				}))
			}
		}
	}
}
