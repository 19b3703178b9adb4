use std::{
	io::{ErrorKind, Read, Write},
	slice,
};

use tracing::trace;

use crate::{RuntimeError, TapeMachine};

impl TapeMachine {
	/// Writes the current cell to `output` as one raw byte.
	pub fn put_output<W>(&self, output: &mut W) -> Result<(), RuntimeError>
	where
		W: Write + ?Sized,
	{
		output.write_all(slice::from_ref(&self.tape[self.ptr]))?;

		Ok(())
	}

	/// Reads one byte from `input` into the current cell.
	///
	/// At end of input the cell keeps its previous value and `false` is returned.
	pub fn get_input<R>(&mut self, input: &mut R) -> Result<bool, RuntimeError>
	where
		R: Read + ?Sized,
	{
		let mut value = 0;

		match input.read_exact(slice::from_mut(&mut value)) {
			Ok(()) => {
				self.tape[self.ptr] = value;

				Ok(true)
			}
			Err(e) if matches!(e.kind(), ErrorKind::UnexpectedEof) => {
				trace!("end of input, cell {} left as {}", self.ptr, self.tape[self.ptr]);

				Ok(false)
			}
			Err(e) => Err(e.into()),
		}
	}
}
