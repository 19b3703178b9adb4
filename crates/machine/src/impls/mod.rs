mod cell;
mod io;
mod loops;
mod pointer;

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use tapefrick_hlir::BrainHlir;
use tracing::info;

use crate::{Program, RuntimeError, TapeMachine};

/// Counters collected over one [`TapeMachine::run`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStats {
	pub instructions: u64,
	pub bytes_read: u64,
	pub bytes_written: u64,
	pub end_of_input_reads: u64,
}

impl TapeMachine {
	/// Interprets `program` from its first instruction to its last.
	///
	/// `[` skips past its matching `]` when the current cell is zero, and `]` jumps back
	/// to just after its matching `[` when it isn't, which re-tests the loop on every pass.
	/// Output is flushed before each read so prompts are visible.
	#[tracing::instrument(skip_all, fields(instructions = program.len()))]
	pub fn run<R, W>(
		&mut self,
		program: &Program,
		input: &mut R,
		output: &mut W,
	) -> Result<ExecutionStats, RuntimeError>
	where
		R: Read + ?Sized,
		W: Write + ?Sized,
	{
		let mut stats = ExecutionStats::default();

		let mut i = 0;

		while let Some(op) = program.get(i) {
			stats.instructions += 1;

			match op {
				BrainHlir::StartLoop if !self.is_current_cell_nonzero() => {
					i = program.jump_target(i);
				}
				BrainHlir::EndLoop if self.is_current_cell_nonzero() => {
					i = program.jump_target(i);
				}
				BrainHlir::StartLoop | BrainHlir::EndLoop => {}
				op => self.execute_op(*op, input, output, &mut stats)?,
			}

			i += 1;
		}

		output.flush()?;

		info!(
			instructions = stats.instructions,
			bytes_read = stats.bytes_read,
			bytes_written = stats.bytes_written,
			"program finished"
		);

		Ok(stats)
	}

	fn execute_op<R, W>(
		&mut self,
		op: BrainHlir,
		input: &mut R,
		output: &mut W,
		stats: &mut ExecutionStats,
	) -> Result<(), RuntimeError>
	where
		R: Read + ?Sized,
		W: Write + ?Sized,
	{
		match op {
			BrainHlir::MovePtrLeft => self.move_ptr_left(),
			BrainHlir::MovePtrRight => self.move_ptr_right(),
			BrainHlir::IncrementCell => self.increment_cell(),
			BrainHlir::DecrementCell => self.decrement_cell(),
			BrainHlir::PutOutput => {
				self.put_output(output)?;
				stats.bytes_written += 1;
			}
			BrainHlir::GetInput => {
				output.flush()?;

				if self.get_input(input)? {
					stats.bytes_read += 1;
				} else {
					stats.end_of_input_reads += 1;
				}
			}
			BrainHlir::StartLoop | BrainHlir::EndLoop => {}
		}

		Ok(())
	}
}
