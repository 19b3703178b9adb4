use crate::TapeMachine;

impl TapeMachine {
	/// Whether a loop guarded by the current cell should run its body.
	#[must_use]
	pub fn is_current_cell_nonzero(&self) -> bool {
		!matches!(self.tape[self.ptr], 0)
	}

	/// Runs `body` for as long as the current cell is non-zero, testing before every pass.
	///
	/// This is the structured form of a `[` ... `]` pair for hosts that compose the
	/// primitive operations directly; the nesting comes from the host's own closures.
	pub fn dynamic_loop<F, E>(&mut self, mut body: F) -> Result<(), E>
	where
		F: FnMut(&mut Self) -> Result<(), E>,
	{
		while self.is_current_cell_nonzero() {
			body(self)?;
		}

		Ok(())
	}
}
