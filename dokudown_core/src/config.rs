use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::DokuError;
use crate::DokuResult;
use crate::TransformOptions;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["dokudown.toml", ".dokudown.toml", ".config/dokudown.toml"];

/// Configuration loaded from a `dokudown.toml` file.
///
/// ```toml
/// [code]
/// close_unterminated = true
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct DokudownConfig {
	/// Code block handling.
	#[serde(default)]
	pub code: CodeConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CodeConfig {
	/// When true, a code block still open at the end of the input is closed
	/// with a final `</code>` line. Defaults to `false`, which leaves the
	/// block open exactly as written.
	#[serde(default)]
	pub close_unterminated: bool,
}

impl DokudownConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> DokuResult<Option<DokudownConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		tracing::debug!(path = %config_path.display(), "loading config");
		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::parse(&content)?;

		Ok(Some(config))
	}

	pub fn parse(content: &str) -> DokuResult<DokudownConfig> {
		toml::from_str(content).map_err(|e| DokuError::ConfigParse(e.to_string()))
	}

	pub fn transform_options(&self) -> TransformOptions {
		TransformOptions {
			close_unterminated_code: self.code.close_unterminated,
		}
	}
}
