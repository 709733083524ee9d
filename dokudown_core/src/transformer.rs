use crate::ListIndentStack;
use crate::OutputBuffer;
use crate::patterns::CLOSING_CODE_TAG;
use crate::patterns::is_blank;
use crate::patterns::match_fence;
use crate::patterns::match_header;
use crate::patterns::match_list_item;

/// Behaviour switches for a [`LineTransformer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOptions {
	/// Append a closing `</code>` tag in [`LineTransformer::finish`] when the
	/// input ended inside a code block. Off by default, in which case the
	/// document ends with the block still open.
	pub close_unterminated_code: bool,
}

/// How a single input line was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
	/// A fence that opened a code block.
	CodeFenceOpen,
	/// A fence that closed the open code block.
	CodeFenceClose,
	/// A line inside a code block, copied verbatim.
	CodeContent,
	/// A markdown header rewritten as a dokuwiki heading.
	Header { level: usize },
	/// A numbered list item rewritten as a dokuwiki list item.
	ListItem { depth: usize },
	/// An empty or space-only line.
	Blank,
	/// Anything else, passed through unchanged.
	Text,
}

/// Converts markdown to dokuwiki one line at a time.
///
/// Lines must be fed in document order through [`process_line`]. The
/// converted document is only complete once [`finish`] has been called,
/// because a later line can still remove blank lines from the tail or merge
/// a code tag into the previous line.
///
/// [`process_line`]: LineTransformer::process_line
/// [`finish`]: LineTransformer::finish
#[derive(Debug, Default)]
pub struct LineTransformer {
	options: TransformOptions,
	list_stack: ListIndentStack,
	output: OutputBuffer,
	/// Number of trailing blank entries in `output` that a following list
	/// item or code fence may remove.
	blank_run: usize,
	in_code_block: bool,
}

impl LineTransformer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_options(options: TransformOptions) -> Self {
		Self {
			options,
			..Self::default()
		}
	}

	pub fn options(&self) -> TransformOptions {
		self.options
	}

	/// Current list nesting depth. Zero outside of a list.
	pub fn list_depth(&self) -> usize {
		self.list_stack.depth()
	}

	pub fn in_code_block(&self) -> bool {
		self.in_code_block
	}

	/// Number of lines emitted so far.
	pub fn output_len(&self) -> usize {
		self.output.len()
	}

	/// Convert the next input line. The line must not contain its line
	/// terminator.
	pub fn process_line(&mut self, line: &str) -> LineKind {
		let (kind, rendered) = if let Some(handled) = self.process_code_block(line) {
			handled
		} else if let Some(header) = match_header(line) {
			self.list_stack.clear();
			self.blank_run = 0;
			(
				LineKind::Header {
					level: header.level,
				},
				header.render(),
			)
		} else {
			let (kind, rendered) = self.process_list_item(line);

			if is_blank(&rendered) {
				self.blank_run += 1;
				(LineKind::Blank, rendered)
			} else {
				self.blank_run = 0;
				(kind, rendered)
			}
		};

		tracing::trace!(?kind, input = line, output = %rendered, "converted line");
		self.output.push(rendered);

		kind
	}

	/// Finish the document and return every converted line in order.
	pub fn finish(mut self) -> Vec<String> {
		if self.in_code_block {
			tracing::warn!(
				close = self.options.close_unterminated_code,
				"input ended inside a code block"
			);

			if self.options.close_unterminated_code {
				self.output.push(CLOSING_CODE_TAG);
			}
		}

		self.output.into_lines()
	}

	/// Handle code fences and the verbatim lines between them. Returns `None`
	/// when the line is neither, leaving it to the other detectors.
	fn process_code_block(&mut self, line: &str) -> Option<(LineKind, String)> {
		let Some(fence) = match_fence(line) else {
			return self
				.in_code_block
				.then(|| (LineKind::CodeContent, line.to_string()));
		};

		if self.in_code_block {
			self.in_code_block = false;
			self.blank_run = 0;
			return Some((LineKind::CodeFenceClose, CLOSING_CODE_TAG.to_string()));
		}

		self.in_code_block = true;
		let tag = fence.opening_tag();

		if self.list_stack.is_empty() {
			self.blank_run = 0;
			return Some((LineKind::CodeFenceOpen, tag));
		}

		// Inside a list the block belongs to the item above it.
		self.retract_blank_run();
		let rendered = match self.output.take_last() {
			Some(previous) => previous + &tag,
			None => tag,
		};

		Some((LineKind::CodeFenceOpen, rendered))
	}

	/// Rewrite a numbered list item. Anything else is returned unchanged and
	/// classified as plain text.
	fn process_list_item(&mut self, line: &str) -> (LineKind, String) {
		let Some(item) = match_list_item(line) else {
			return (LineKind::Text, line.to_string());
		};

		let previous_depth = self.list_stack.depth();
		let depth = self.list_stack.enter(item.indent);
		if depth != previous_depth {
			tracing::debug!(
				indent = item.indent,
				from = previous_depth,
				to = depth,
				"list depth changed"
			);
		}

		self.retract_blank_run();

		(
			LineKind::ListItem { depth },
			format!("{}- {}", "  ".repeat(depth), item.text),
		)
	}

	/// Remove the blank lines directly above the line being emitted.
	fn retract_blank_run(&mut self) {
		if self.blank_run == 0 {
			return;
		}

		let removed = self.output.retract_tail(self.blank_run);
		tracing::debug!(removed, "dropped blank lines before list content");
		self.blank_run = 0;
	}
}
