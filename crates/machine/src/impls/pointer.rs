use crate::TapeMachine;

impl TapeMachine {
	pub const fn move_ptr_right(&mut self) {
		self.ptr = if self.ptr == self.tape.last_index() {
			0
		} else {
			self.ptr + 1
		};
	}

	pub const fn move_ptr_left(&mut self) {
		self.ptr = if matches!(self.ptr, 0) {
			self.tape.last_index()
		} else {
			self.ptr - 1
		};
	}
}

#[cfg(test)]
mod tests {
	use std::num::NonZeroUsize;

	use crate::TapeMachine;

	#[test]
	fn single_cell_never_moves() {
		let mut machine = TapeMachine::new(NonZeroUsize::MIN);

		machine.move_ptr_right();
		assert_eq!(machine.pointer(), 0);

		machine.move_ptr_left();
		assert_eq!(machine.pointer(), 0);
	}

	#[test]
	fn right_then_left_returns() {
		let mut machine = TapeMachine::default();

		machine.move_ptr_right();
		machine.move_ptr_right();
		assert_eq!(machine.pointer(), 2);

		machine.move_ptr_left();
		assert_eq!(machine.pointer(), 1);
	}
}

#[cfg(test)]
mod proptests {
	use std::num::NonZeroUsize;

	use proptest::prelude::*;

	use crate::TapeMachine;

	proptest! {
		#[test]
		fn right_closes_after_tape_length(length in 1usize..=2048) {
			let mut machine = TapeMachine::new(NonZeroUsize::new(length).unwrap());

			for _ in 0..length {
				machine.move_ptr_right();
				prop_assert!(machine.pointer() < length);
			}

			prop_assert_eq!(machine.pointer(), 0);
		}

		#[test]
		fn left_from_zero_lands_on_last(length in 1usize..=2048) {
			let mut machine = TapeMachine::new(NonZeroUsize::new(length).unwrap());

			machine.move_ptr_left();

			prop_assert_eq!(machine.pointer(), length - 1);
		}
	}
}
