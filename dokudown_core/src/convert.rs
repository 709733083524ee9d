use std::io::BufRead;
use std::path::Path;

use crate::DokuResult;
use crate::LineSource;
use crate::LineTransformer;
use crate::OutputTarget;
use crate::TransformOptions;

/// Convert a whole markdown document held in memory.
pub fn convert_str(markdown: &str) -> Vec<String> {
	convert_lines(markdown.lines(), TransformOptions::default())
}

/// Convert already split lines, in order.
pub fn convert_lines<I, S>(lines: I, options: TransformOptions) -> Vec<String>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut transformer = LineTransformer::with_options(options);
	for line in lines {
		transformer.process_line(line.as_ref());
	}

	transformer.finish()
}

/// Drain `source` through a fresh transformer. The first read error aborts
/// the conversion and no partial document is returned.
pub fn convert_source<R: BufRead>(
	source: LineSource<R>,
	options: TransformOptions,
) -> DokuResult<Vec<String>> {
	let mut transformer = LineTransformer::with_options(options);
	for line in source {
		transformer.process_line(&line?);
	}

	Ok(transformer.finish())
}

/// Convert the markdown file at `input` and write the result to `target`.
/// Returns the number of lines written.
pub fn convert_file(
	input: &Path,
	target: &OutputTarget,
	options: TransformOptions,
) -> DokuResult<usize> {
	tracing::debug!(input = %input.display(), output = %target, "converting");

	let source = LineSource::open(input)?;
	let lines = convert_source(source, options)?;
	target.write_lines(&lines)?;

	Ok(lines.len())
}
