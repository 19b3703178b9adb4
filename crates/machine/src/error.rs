use std::{
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
	io::Error as IoError,
};

use tapefrick_hlir::ParseError;

/// Failures while assembling a [`Program`](crate::Program).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramError {
	Parse(ParseError),
	UnmatchedLoopEnd(usize),
	UnclosedLoopStart(usize),
}

impl Display for ProgramError {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		match self {
			Self::Parse(..) => f.write_str("failed to parse program source"),
			Self::UnmatchedLoopEnd(index) => {
				f.write_str("loop end at instruction #")?;
				Display::fmt(index, f)?;
				f.write_str(" has no matching start")
			}
			Self::UnclosedLoopStart(index) => {
				f.write_str("loop start at instruction #")?;
				Display::fmt(index, f)?;
				f.write_str(" has no matching end")
			}
		}
	}
}

impl StdError for ProgramError {
	fn source(&self) -> Option<&(dyn StdError + 'static)> {
		match self {
			Self::Parse(e) => Some(e),
			_ => None,
		}
	}
}

impl From<ParseError> for ProgramError {
	fn from(value: ParseError) -> Self {
		Self::Parse(value)
	}
}

/// Failures while executing on a [`TapeMachine`](crate::TapeMachine).
///
/// Pointer motion, cell arithmetic and end of input are all defined behavior,
/// so the only thing that can go wrong at runtime is the host stream itself.
#[derive(Debug)]
pub enum RuntimeError {
	Io(IoError),
}

impl Display for RuntimeError {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		match self {
			Self::Io(..) => f.write_str("an IO error has occurred"),
		}
	}
}

impl StdError for RuntimeError {
	fn source(&self) -> Option<&(dyn StdError + 'static)> {
		match self {
			Self::Io(e) => Some(e),
		}
	}
}

impl From<IoError> for RuntimeError {
	fn from(value: IoError) -> Self {
		Self::Io(value)
	}
}
