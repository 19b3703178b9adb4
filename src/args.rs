use std::{
	num::NonZeroUsize,
	path::{Path, PathBuf},
};

use clap::{Parser, ValueEnum};
use tapefrick_c_assembler::Dialect;

/// Interpreter and C generator for brainfuck programs.
#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub enum Args {
	/// Interpret a program, reading from stdin (or a file) and writing to stdout.
	Run {
		file_path: PathBuf,
		#[arg(short, long)]
		config_path: Option<PathBuf>,
		#[arg(short, long)]
		tape_length: Option<NonZeroUsize>,
		#[arg(short, long)]
		input_path: Option<PathBuf>,
	},
	/// Expand a program into C source.
	Emit {
		file_path: PathBuf,
		#[arg(short, long)]
		output_path: PathBuf,
		#[arg(short, long)]
		config_path: Option<PathBuf>,
		#[arg(short, long)]
		tape_length: Option<NonZeroUsize>,
		#[arg(short, long, value_enum)]
		dialect: Option<DialectArg>,
	},
	/// Write the parsed instructions as RON.
	Dump {
		file_path: PathBuf,
		#[arg(short, long)]
		output_path: PathBuf,
		#[arg(short, long)]
		config_path: Option<PathBuf>,
	},
}

impl Args {
	pub fn file_path(&self) -> &Path {
		match self {
			Self::Run { file_path, .. }
			| Self::Emit { file_path, .. }
			| Self::Dump { file_path, .. } => file_path,
		}
	}

	pub fn config_path(&self) -> Option<&Path> {
		match self {
			Self::Run { config_path, .. }
			| Self::Emit { config_path, .. }
			| Self::Dump { config_path, .. } => config_path.as_deref(),
		}
	}

	pub const fn tape_length(&self) -> Option<NonZeroUsize> {
		match self {
			Self::Run { tape_length, .. } | Self::Emit { tape_length, .. } => *tape_length,
			Self::Dump { .. } => None,
		}
	}

	pub fn dialect(&self) -> Option<Dialect> {
		match self {
			Self::Emit { dialect, .. } => dialect.map(Dialect::from),
			_ => None,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DialectArg {
	C,
	Cpp,
}

impl From<DialectArg> for Dialect {
	fn from(value: DialectArg) -> Self {
		match value {
			DialectArg::C => Self::C,
			DialectArg::Cpp => Self::Cpp,
		}
	}
}

#[cfg(test)]
mod tests {
	use clap::Parser as _;
	use tapefrick_c_assembler::Dialect;

	use super::Args;

	#[test]
	fn run_with_overrides() {
		let args = Args::try_parse_from(["tapefrick", "run", "hello.b", "-t", "16"]).unwrap();

		assert_eq!(args.file_path().to_str(), Some("hello.b"));
		assert_eq!(args.tape_length().map(|length| length.get()), Some(16));
		assert_eq!(args.dialect(), None);
	}

	#[test]
	fn emit_cpp() {
		let args = Args::try_parse_from([
			"tapefrick",
			"emit",
			"hello.b",
			"-o",
			"hello.cpp",
			"--dialect",
			"cpp",
		])
		.unwrap();

		assert_eq!(args.dialect(), Some(Dialect::Cpp));
		assert!(args.config_path().is_none());
	}

	#[test]
	fn zero_tape_length_is_rejected() {
		assert!(Args::try_parse_from(["tapefrick", "run", "hello.b", "-t", "0"]).is_err());
	}
}
