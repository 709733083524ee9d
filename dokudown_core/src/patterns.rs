//! Single-line classifiers. Every matcher is a pure function over one input
//! line; cross-line state lives in [`crate::LineTransformer`].

use std::sync::LazyLock;

use regex::Regex;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\s*(?<hashes>#{1,5}) (?<text>.*)$").unwrap_or_else(|e| panic!("header regex: {e}"))
});

static ORDERED_LIST_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(?<spaces> *)[0-9]+\. *(?<text>.*)$")
		.unwrap_or_else(|e| panic!("ordered list regex: {e}"))
});

static CODE_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^ *`{3} *(?<language>[a-zA-Z]*) *$")
		.unwrap_or_else(|e| panic!("code fence regex: {e}"))
});

static BLANK_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^ *$").unwrap_or_else(|e| panic!("blank regex: {e}")));

/// A markdown ATX header with between one and five hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMatch<'a> {
	/// Number of leading `#` characters (1..=5).
	pub level: usize,
	/// Heading text with surrounding whitespace removed.
	pub text: &'a str,
}

impl HeaderMatch<'_> {
	/// The `=` run that surrounds this heading in dokuwiki. Level 1 is the
	/// widest (five characters) and level 5 the narrowest (one character).
	pub fn marker(&self) -> String {
		"=".repeat(6 - self.level)
	}

	/// Render the dokuwiki heading line.
	pub fn render(&self) -> String {
		let marker = self.marker();
		format!("{marker} {} {marker}", self.text)
	}
}

/// A numbered list item such as `   2. second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItemMatch<'a> {
	/// Count of leading spaces before the number.
	pub indent: usize,
	/// Item text with surrounding whitespace removed.
	pub text: &'a str,
}

/// A line of exactly three backticks, optionally tagged with a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceMatch<'a> {
	pub language: Option<&'a str>,
}

impl FenceMatch<'_> {
	/// The dokuwiki tag that opens a code block for this fence.
	pub fn opening_tag(&self) -> String {
		match self.language {
			Some(language) => format!("<code {language}>"),
			None => "<code>".to_string(),
		}
	}
}

pub const CLOSING_CODE_TAG: &str = "</code>";

pub fn match_header(line: &str) -> Option<HeaderMatch<'_>> {
	let captures = HEADER_RE.captures(line)?;
	let hashes = captures.name("hashes")?.as_str();
	let text = captures.name("text").map_or("", |m| m.as_str());

	Some(HeaderMatch {
		level: hashes.len(),
		text: text.trim(),
	})
}

pub fn match_list_item(line: &str) -> Option<ListItemMatch<'_>> {
	let captures = ORDERED_LIST_RE.captures(line)?;
	let indent = captures.name("spaces").map_or(0, |m| m.as_str().len());
	let text = captures.name("text").map_or("", |m| m.as_str());

	Some(ListItemMatch {
		indent,
		text: text.trim(),
	})
}

pub fn match_fence(line: &str) -> Option<FenceMatch<'_>> {
	let captures = CODE_FENCE_RE.captures(line)?;
	let language = captures
		.name("language")
		.map(|m| m.as_str())
		.filter(|language| !language.is_empty());

	Some(FenceMatch { language })
}

/// Only spaces count as blank. A line holding a tab is content.
pub fn is_blank(line: &str) -> bool {
	BLANK_RE.is_match(line)
}
