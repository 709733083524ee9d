/// Tracks the column offsets at which each open ordered-list level began.
///
/// The number of entries is the dokuwiki nesting depth of the current list
/// item. Entries grow strictly from bottom to top while descending into
/// deeper indentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListIndentStack {
	levels: Vec<usize>,
}

impl ListIndentStack {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of open list levels.
	pub fn depth(&self) -> usize {
		self.levels.len()
	}

	pub fn is_empty(&self) -> bool {
		self.levels.is_empty()
	}

	/// Indentation of the innermost open level.
	pub fn top(&self) -> Option<usize> {
		self.levels.last().copied()
	}

	pub fn levels(&self) -> &[usize] {
		&self.levels
	}

	pub fn clear(&mut self) {
		self.levels.clear();
	}

	/// Record a list item indented by `indent` spaces and return the depth it
	/// renders at.
	///
	/// A deeper indent opens a new level and an equal indent continues the
	/// current one. A shallower indent closes the innermost level and keeps
	/// closing while the revealed level is still deeper than `indent`. The walk
	/// stops on an exact match. When it reveals a shallower level first, a new
	/// level for `indent` is pushed on top of it, so an indent that falls
	/// between two earlier levels becomes a level of its own rather than
	/// merging with either neighbour.
	pub fn enter(&mut self, indent: usize) -> usize {
		match self.top() {
			None => self.levels.push(indent),
			Some(top) if indent > top => self.levels.push(indent),
			Some(top) if indent < top => {
				self.levels.pop();
				while let Some(&level) = self.levels.last() {
					if level == indent {
						break;
					}

					if level > indent {
						self.levels.pop();
						continue;
					}

					self.levels.push(indent);
					break;
				}

				if self.levels.is_empty() {
					self.levels.push(indent);
				}
			}
			Some(_) => {}
		}

		self.depth()
	}
}
