use crate::TapeMachine;

impl TapeMachine {
	pub fn increment_cell(&mut self) {
		let cell = &mut self.tape[self.ptr];

		*cell = cell.wrapping_add(1);
	}

	pub fn decrement_cell(&mut self) {
		let cell = &mut self.tape[self.ptr];

		*cell = cell.wrapping_sub(1);
	}
}

#[cfg(test)]
mod tests {
	use crate::TapeMachine;

	#[test]
	fn increment_wraps_to_zero() {
		let mut machine = TapeMachine::default();

		for _ in 0..255 {
			machine.increment_cell();
		}

		assert_eq!(machine.current_cell(), u8::MAX);

		machine.increment_cell();

		assert_eq!(machine.current_cell(), 0);
	}

	#[test]
	fn decrement_wraps_to_max() {
		let mut machine = TapeMachine::default();

		machine.decrement_cell();

		assert_eq!(machine.current_cell(), u8::MAX);
	}

	#[test]
	fn only_touches_current_cell() {
		let mut machine = TapeMachine::default();

		machine.move_ptr_right();
		machine.increment_cell();
		machine.increment_cell();

		assert_eq!(&machine.cells()[..3], [0, 2, 0]);
	}
}

#[cfg(test)]
mod proptests {
	use proptest::prelude::*;

	use crate::TapeMachine;

	fn machine_with_cell(value: u8) -> TapeMachine {
		let mut machine = TapeMachine::default();

		for _ in 0..value {
			machine.increment_cell();
		}

		machine
	}

	proptest! {
		#[test]
		fn increment_closes_after_256(value in any::<u8>()) {
			let mut machine = machine_with_cell(value);

			for _ in 0..256 {
				machine.increment_cell();
			}

			prop_assert_eq!(machine.current_cell(), value);
		}

		#[test]
		fn decrement_closes_after_256(value in any::<u8>()) {
			let mut machine = machine_with_cell(value);

			for _ in 0..256 {
				machine.decrement_cell();
			}

			prop_assert_eq!(machine.current_cell(), value);
		}

		#[test]
		fn decrement_undoes_increment(value in any::<u8>()) {
			let mut machine = machine_with_cell(value);

			machine.increment_cell();
			machine.decrement_cell();

			prop_assert_eq!(machine.current_cell(), value);
		}
	}
}
