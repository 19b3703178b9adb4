use std::{
	fs,
	num::NonZeroUsize,
	path::{Path, PathBuf},
};

use color_eyre::{Result, eyre::WrapErr as _};
use serde::{Deserialize, Serialize};
use tapefrick_c_assembler::Dialect;
use tapefrick_machine::DEFAULT_TAPE_LENGTH;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Config {
	pub tape_length: NonZeroUsize,
	pub dialect: Dialect,
	pub log_filter: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub log_dir: Option<PathBuf>,
}

impl Config {
	pub fn load(path: Option<&Path>) -> Result<Self> {
		let Some(path) = path else {
			return Ok(Self::default());
		};

		let raw = fs::read_to_string(path)
			.wrap_err_with(|| format!("failed to read config {}", path.display()))?;

		toml::from_str(&raw).wrap_err_with(|| format!("invalid config {}", path.display()))
	}

	pub const fn override_with(
		&mut self,
		tape_length: Option<NonZeroUsize>,
		dialect: Option<Dialect>,
	) {
		if let Some(tape_length) = tape_length {
			self.tape_length = tape_length;
		}

		if let Some(dialect) = dialect {
			self.dialect = dialect;
		}
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			tape_length: DEFAULT_TAPE_LENGTH,
			dialect: Dialect::C,
			log_filter: "info".to_owned(),
			log_dir: None,
		}
	}
}
