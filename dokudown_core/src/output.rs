/// The ordered dokuwiki lines produced so far.
///
/// Lines are only ever appended at the end or removed from the end, so the
/// relative order of everything emitted is fixed the moment it is pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBuffer {
	lines: Vec<String>,
}

impl OutputBuffer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, line: impl Into<String>) {
		self.lines.push(line.into());
	}

	/// Drop up to `count` entries from the tail and return how many were
	/// removed.
	pub fn retract_tail(&mut self, count: usize) -> usize {
		let removed = count.min(self.lines.len());
		self.lines.truncate(self.lines.len() - removed);
		removed
	}

	/// Remove and return the final entry so it can be extended and pushed
	/// again.
	pub fn take_last(&mut self) -> Option<String> {
		self.lines.pop()
	}

	pub fn last(&self) -> Option<&str> {
		self.lines.last().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.lines.len()
	}

	pub fn is_empty(&self) -> bool {
		self.lines.is_empty()
	}

	pub fn as_slice(&self) -> &[String] {
		&self.lines
	}

	pub fn into_lines(self) -> Vec<String> {
		self.lines
	}
}
