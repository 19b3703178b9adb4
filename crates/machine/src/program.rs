use std::{
	fmt::{Display, Formatter, Result as FmtResult},
	ops::Deref,
	slice,
};

use tapefrick_hlir::{BrainHlir, Parser};
use tracing::debug;

use super::ProgramError;

/// A bracket-balanced instruction sequence with its loop pairs resolved.
///
/// `jumps[i]` holds the index of the bracket matching the one at `i`; entries for
/// every other instruction are unused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
	ops: Vec<BrainHlir>,
	jumps: Vec<usize>,
}

impl Program {
	pub fn new(ops: impl IntoIterator<Item = BrainHlir>) -> Result<Self, ProgramError> {
		let ops = ops.into_iter().collect::<Vec<_>>();

		let jumps = Self::match_brackets(&ops)?;

		debug!("built program with {} instructions", ops.len());

		Ok(Self { ops, jumps })
	}

	pub fn parse(source: &str) -> Result<Self, ProgramError> {
		let ops = Parser::new(source).parse::<Vec<_>>()?;

		Self::new(ops)
	}

	/// Index of the bracket paired with the one at `index`.
	///
	/// Returns [`None`] if `index` is out of range or isn't a loop bound.
	#[must_use]
	pub fn matching(&self, index: usize) -> Option<usize> {
		self.ops
			.get(index)
			.filter(|op| op.is_loop_bound())
			.map(|_| self.jumps[index])
	}

	pub(crate) fn jump_target(&self, index: usize) -> usize {
		self.jumps[index]
	}

	#[must_use]
	pub fn as_slice(&self) -> &[BrainHlir] {
		&self.ops
	}

	fn match_brackets(ops: &[BrainHlir]) -> Result<Vec<usize>, ProgramError> {
		let mut jumps = vec![0; ops.len()];
		let mut stack = Vec::new();

		for (i, op) in ops.iter().enumerate() {
			match op {
				BrainHlir::StartLoop => stack.push(i),
				BrainHlir::EndLoop => {
					let start = stack.pop().ok_or(ProgramError::UnmatchedLoopEnd(i))?;

					jumps[start] = i;
					jumps[i] = start;
				}
				_ => {}
			}
		}

		match stack.pop() {
			Some(start) => Err(ProgramError::UnclosedLoopStart(start)),
			None => Ok(jumps),
		}
	}
}

impl Deref for Program {
	type Target = [BrainHlir];

	fn deref(&self) -> &Self::Target {
		&self.ops
	}
}

impl Display for Program {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		for op in &self.ops {
			Display::fmt(op, f)?;
		}

		Ok(())
	}
}

impl<'a> IntoIterator for &'a Program {
	type IntoIter = slice::Iter<'a, BrainHlir>;
	type Item = &'a BrainHlir;

	fn into_iter(self) -> Self::IntoIter {
		self.ops.iter()
	}
}
