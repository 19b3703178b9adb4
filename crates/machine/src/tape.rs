use std::{
	num::NonZeroUsize,
	ops::{Index, IndexMut},
};

/// Fixed-length run of byte cells, zeroed on creation and never resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
	cells: Box<[u8]>,
	length: NonZeroUsize,
}

impl Tape {
	#[must_use]
	pub fn new(length: NonZeroUsize) -> Self {
		Self {
			cells: vec![0; length.get()].into_boxed_slice(),
			length,
		}
	}

	#[must_use]
	pub const fn length(&self) -> NonZeroUsize {
		self.length
	}

	#[must_use]
	pub const fn last_index(&self) -> usize {
		self.length.get() - 1
	}

	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		&self.cells
	}
}

impl Index<usize> for Tape {
	type Output = u8;

	fn index(&self, index: usize) -> &Self::Output {
		&self.cells[index]
	}
}

impl IndexMut<usize> for Tape {
	fn index_mut(&mut self, index: usize) -> &mut Self::Output {
		&mut self.cells[index]
	}
}
