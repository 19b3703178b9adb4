#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

mod error;
mod impls;
mod program;
mod tape;

use std::{io::Write, num::NonZeroUsize};

use tracing::debug;

pub use self::{error::*, impls::ExecutionStats, program::*, tape::*};

pub const DEFAULT_TAPE_LENGTH: NonZeroUsize = NonZeroUsize::new(30_000).unwrap();

/// A brainfuck tape and the single pointer into it.
///
/// The pointer wraps at both ends of the tape and cell arithmetic wraps modulo 256,
/// so none of the primitive operations can fail. Loop structure is not checked here;
/// [`Program`] resolves bracket pairs before [`TapeMachine::run`] ever sees them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapeMachine {
	tape: Tape,
	ptr: usize,
}

impl TapeMachine {
	#[must_use]
	pub fn new(tape_length: NonZeroUsize) -> Self {
		debug!("creating tape with {tape_length} cells");

		Self {
			tape: Tape::new(tape_length),
			ptr: 0,
		}
	}

	#[must_use]
	pub const fn tape_length(&self) -> NonZeroUsize {
		self.tape.length()
	}

	#[must_use]
	pub const fn pointer(&self) -> usize {
		self.ptr
	}

	#[must_use]
	pub fn current_cell(&self) -> u8 {
		self.tape[self.ptr]
	}

	#[must_use]
	pub fn cells(&self) -> &[u8] {
		self.tape.as_slice()
	}

	/// Ends execution, flushing anything still buffered in `output`. The tape is discarded.
	pub fn finish<W>(self, output: &mut W) -> Result<(), RuntimeError>
	where
		W: Write + ?Sized,
	{
		output.flush()?;

		debug!("machine finished with pointer at {}", self.ptr);

		Ok(())
	}
}

impl Default for TapeMachine {
	fn default() -> Self {
		Self::new(DEFAULT_TAPE_LENGTH)
	}
}

#[cfg(test)]
mod tests {
	use std::{error::Error, num::NonZeroUsize};

	use super::{Program, TapeMachine};

	type TestResult<T = ()> = Result<T, Box<dyn Error>>;

	fn run(source: &str, tape_length: usize, input: &[u8]) -> TestResult<Vec<u8>> {
		let program = Program::parse(source)?;
		let mut machine = TapeMachine::new(NonZeroUsize::new(tape_length).unwrap());

		let mut input = input;
		let mut output = Vec::new();

		machine.run(&program, &mut input, &mut output)?;
		machine.finish(&mut output)?;

		Ok(output)
	}

	#[test]
	fn fresh_machine() {
		let machine = TapeMachine::default();

		assert_eq!(machine.tape_length().get(), 30_000);
		assert_eq!(machine.pointer(), 0);
		assert_eq!(machine.current_cell(), 0);
		assert!(machine.cells().iter().all(|cell| matches!(cell, 0)));
	}

	#[test]
	fn five_increments_then_write() -> TestResult {
		assert_eq!(run("+++++.", 1, &[])?, [5]);

		Ok(())
	}

	#[test]
	fn hello_world() -> TestResult {
		let output = run(
			"++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.",
			30_000,
			&[],
		)?;

		assert_eq!(output, b"Hello World!\n");

		Ok(())
	}

	#[test]
	fn cat_until_end_of_input() -> TestResult {
		assert_eq!(run(",[.[-],]", 1, b"tape")?, b"tape");

		Ok(())
	}

	#[test]
	fn wraps_left_onto_last_cell() -> TestResult {
		// walks left from cell 0 onto cell 2 and back around
		assert_eq!(run("<+++.>.>.", 3, &[])?, [3, 0, 0]);

		Ok(())
	}
}
