#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![no_std]

extern crate alloc;

mod inner;

use alloc::vec::Vec;
use core::{
	error::Error as CoreError,
	fmt::{Display, Formatter, Result as FmtResult, Write as _},
	iter::once,
};

use logos::Lexer;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use self::inner::InnerOpCode;

/// Turns brainfuck source into [`BrainHlir`], rejecting unbalanced loops.
///
/// Every character that isn't one of the eight instructions is treated as a comment.
#[derive(Debug, Clone)]
#[repr(transparent)]
pub struct Parser<'source> {
	inner: Lexer<'source, InnerOpCode>,
}

impl<'source> Parser<'source> {
	pub fn new(source: &'source str) -> Self {
		debug!("got source with length {}", source.len());

		Self {
			inner: Lexer::new(source),
		}
	}

	pub fn parse<I>(self) -> Result<I, ParseError>
	where
		I: Default + Extend<BrainHlir>,
	{
		info!("scanning {} chars", self.inner.source().len());

		let mut result = I::default();

		let mut bracket_stack = Vec::new();

		for (op, span) in self.inner.spanned() {
			let Ok(op) = op else {
				continue;
			};

			let repr = match op {
				InnerOpCode::MoveLeft => BrainHlir::MovePtrLeft,
				InnerOpCode::MoveRight => BrainHlir::MovePtrRight,
				InnerOpCode::Increment => BrainHlir::IncrementCell,
				InnerOpCode::Decrement => BrainHlir::DecrementCell,
				InnerOpCode::Input => BrainHlir::GetInput,
				InnerOpCode::Output => BrainHlir::PutOutput,
				InnerOpCode::StartLoop => {
					bracket_stack.push(span.start);
					BrainHlir::StartLoop
				}
				InnerOpCode::EndLoop => match bracket_stack.pop() {
					Some(_) => BrainHlir::EndLoop,
					None => return Err(ParseError::UnmatchedLoopEnd { offset: span.start }),
				},
			};

			result.extend(once(repr));
		}

		if let Some(offset) = bracket_stack.pop() {
			return Err(ParseError::UnclosedLoopStart { offset });
		}

		Ok(result)
	}
}

/// High-level intermediate representation. 1 to 1 for it's brainfuck equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrainHlir {
	/// Move the pointer left (<), wrapping to the last cell.
	MovePtrLeft,
	/// Move the pointer right (>), wrapping to the first cell.
	MovePtrRight,
	/// Increment the current cell (+).
	IncrementCell,
	/// Decrement the current cell (-).
	DecrementCell,
	/// Get the input from the input stream (,).
	GetInput,
	/// Put the current cell into the output stream (.).
	PutOutput,
	/// Start of a loop ([).
	StartLoop,
	/// End of a loop (]).
	EndLoop,
}

impl BrainHlir {
	#[must_use]
	pub const fn is_loop_bound(self) -> bool {
		matches!(self, Self::StartLoop | Self::EndLoop)
	}
}

impl Display for BrainHlir {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		f.write_char(match *self {
			Self::MovePtrLeft => '<',
			Self::MovePtrRight => '>',
			Self::IncrementCell => '+',
			Self::DecrementCell => '-',
			Self::GetInput => ',',
			Self::PutOutput => '.',
			Self::StartLoop => '[',
			Self::EndLoop => ']',
		})
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
	UnmatchedLoopEnd { offset: usize },
	UnclosedLoopStart { offset: usize },
}

impl ParseError {
	#[must_use]
	pub const fn offset(self) -> usize {
		match self {
			Self::UnmatchedLoopEnd { offset } | Self::UnclosedLoopStart { offset } => offset,
		}
	}
}

impl Display for ParseError {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		match self {
			Self::UnmatchedLoopEnd { offset } => {
				f.write_str("loop ending at byte ")?;
				Display::fmt(offset, f)?;
				f.write_str(" has no beginning")
			}
			Self::UnclosedLoopStart { offset } => {
				f.write_str("loop starting at byte ")?;
				Display::fmt(offset, f)?;
				f.write_str(" is never closed")
			}
		}
	}
}

impl CoreError for ParseError {}

#[cfg(test)]
mod tests {
	use alloc::{
		string::{String, ToString},
		vec::Vec,
	};

	use super::{BrainHlir, ParseError, Parser};

	#[test]
	fn basic_inc() -> Result<(), ParseError> {
		let parsed = Parser::new("+++++").parse::<Vec<_>>()?;

		assert_eq!(parsed, [BrainHlir::IncrementCell; 5]);

		Ok(())
	}

	#[test]
	fn every_instruction() -> Result<(), ParseError> {
		let parsed = Parser::new("<>+-,.[]").parse::<Vec<_>>()?;

		assert_eq!(
			parsed,
			[
				BrainHlir::MovePtrLeft,
				BrainHlir::MovePtrRight,
				BrainHlir::IncrementCell,
				BrainHlir::DecrementCell,
				BrainHlir::GetInput,
				BrainHlir::PutOutput,
				BrainHlir::StartLoop,
				BrainHlir::EndLoop,
			]
		);

		Ok(())
	}

	#[test]
	fn comments_are_skipped() -> Result<(), ParseError> {
		let parsed = Parser::new("add two: ++ then print it\n.").parse::<Vec<_>>()?;

		assert_eq!(
			parsed,
			[
				BrainHlir::IncrementCell,
				BrainHlir::IncrementCell,
				BrainHlir::PutOutput,
			]
		);

		Ok(())
	}

	#[test]
	fn unmatched_end() {
		let err = Parser::new("+]").parse::<Vec<_>>().unwrap_err();

		assert_eq!(err, ParseError::UnmatchedLoopEnd { offset: 1 });
		assert_eq!(err.to_string(), "loop ending at byte 1 has no beginning");
	}

	#[test]
	fn unclosed_start() {
		let err = Parser::new("[[-]").parse::<Vec<_>>().unwrap_err();

		assert_eq!(err, ParseError::UnclosedLoopStart { offset: 0 });
		assert_eq!(err.offset(), 0);
	}

	#[test]
	fn display_is_source() -> Result<(), ParseError> {
		let parsed = Parser::new("a[->+<] b.").parse::<Vec<_>>()?;

		let rendered = parsed.iter().map(ToString::to_string).collect::<String>();

		assert_eq!(rendered, "[->+<].");

		Ok(())
	}
}
