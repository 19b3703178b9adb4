use core::{
	error::Error as CoreError,
	fmt::{Display, Error as FmtError, Formatter, Result as FmtResult},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyError {
	UnmatchedLoopEnd(usize),
	UnclosedLoopStart(usize),
	Fmt(FmtError),
}

impl Display for AssemblyError {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		match self {
			Self::UnmatchedLoopEnd(index) => {
				f.write_str("loop end at instruction #")?;
				Display::fmt(index, f)?;
				f.write_str(" has no matching start")
			}
			Self::UnclosedLoopStart(index) => {
				f.write_str("loop start at instruction #")?;
				Display::fmt(index, f)?;
				f.write_str(" is never closed")
			}
			Self::Fmt(..) => f.write_str("failed to format generated source"),
		}
	}
}

impl CoreError for AssemblyError {
	fn source(&self) -> Option<&(dyn CoreError + 'static)> {
		match self {
			Self::Fmt(e) => Some(e),
			_ => None,
		}
	}
}

impl From<FmtError> for AssemblyError {
	fn from(value: FmtError) -> Self {
		Self::Fmt(value)
	}
}
