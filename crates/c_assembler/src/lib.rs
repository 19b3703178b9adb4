#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![no_std]

extern crate alloc;

mod dialect;
mod error;

use alloc::{string::String, vec::Vec};
use core::{
	fmt::{Arguments, Write as _},
	num::NonZeroUsize,
};

use tapefrick_hlir::BrainHlir;
use tracing::{debug, info};

pub use self::{dialect::*, error::*};

/// Expands brainfuck instructions into an equivalent C program.
///
/// Every instruction becomes one statement acting on a file-local `tape` array and
/// `ptr` index, and loops become native `while` blocks, so the output needs nothing
/// but a C compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CAssembler {
	tape_length: NonZeroUsize,
	dialect: Dialect,
}

impl CAssembler {
	#[must_use]
	pub const fn new(tape_length: NonZeroUsize) -> Self {
		Self {
			tape_length,
			dialect: Dialect::C,
		}
	}

	#[must_use]
	pub const fn with_dialect(mut self, dialect: Dialect) -> Self {
		self.dialect = dialect;
		self
	}

	#[must_use]
	pub const fn dialect(self) -> Dialect {
		self.dialect
	}

	pub fn assemble(self, ops: &[BrainHlir]) -> Result<String, AssemblyError> {
		info!("assembling {} instructions as {}", ops.len(), self.dialect);

		let mut emitter = Emitter {
			output: String::new(),
			depth: 1,
			loop_stack: Vec::new(),
			dialect: self.dialect,
			last_cell: self.tape_length.get() - 1,
		};

		emitter.prologue(self.tape_length)?;

		for (i, op) in ops.iter().copied().enumerate() {
			emitter.op(i, op)?;
		}

		if let Some(start) = emitter.loop_stack.pop() {
			return Err(AssemblyError::UnclosedLoopStart(start));
		}

		emitter.epilogue()?;

		debug!("generated {} bytes of source", emitter.output.len());

		Ok(emitter.output)
	}
}

struct Emitter {
	output: String,
	depth: usize,
	loop_stack: Vec<usize>,
	dialect: Dialect,
	last_cell: usize,
}

impl Emitter {
	fn prologue(&mut self, tape_length: NonZeroUsize) -> Result<(), AssemblyError> {
		for header in self.dialect.headers() {
			writeln!(self.output, "#include {header}")?;
		}

		self.output.push_str("\ntypedef unsigned char byte;\n\n");

		writeln!(self.output, "{} {{", self.dialect.main_signature())?;
		writeln!(self.output, "\tbyte tape[{tape_length}] = {{0}};")?;
		writeln!(self.output, "\t{}size_t ptr = 0;", self.dialect.std_prefix())?;

		Ok(())
	}

	fn epilogue(&mut self) -> Result<(), AssemblyError> {
		self.output.push_str("\treturn 0;\n}\n");

		Ok(())
	}

	fn op(&mut self, i: usize, op: BrainHlir) -> Result<(), AssemblyError> {
		let prefix = self.dialect.std_prefix();
		let last = self.last_cell;

		match op {
			BrainHlir::IncrementCell => self.line(format_args!("tape[ptr]++;")),
			BrainHlir::DecrementCell => self.line(format_args!("tape[ptr]--;")),
			BrainHlir::MovePtrRight => {
				self.line(format_args!("ptr = (ptr == {last}) ? 0 : ptr + 1;"))
			}
			BrainHlir::MovePtrLeft => {
				self.line(format_args!("ptr = (ptr == 0) ? {last} : ptr - 1;"))
			}
			BrainHlir::PutOutput => {
				self.line(format_args!("(void){prefix}fputc(tape[ptr], stdout);"))
			}
			BrainHlir::GetInput => self.line(format_args!(
				"{{ int tmp; tape[ptr] = ((tmp = {prefix}fgetc(stdin)) != EOF) ? (byte)tmp : tape[ptr]; }}"
			)),
			BrainHlir::StartLoop => {
				self.line(format_args!("while (tape[ptr]) {{"))?;
				self.loop_stack.push(i);
				self.depth += 1;
				Ok(())
			}
			BrainHlir::EndLoop => {
				self.loop_stack
					.pop()
					.ok_or(AssemblyError::UnmatchedLoopEnd(i))?;
				self.depth -= 1;
				self.line(format_args!("}}"))
			}
		}
	}

	fn line(&mut self, args: Arguments<'_>) -> Result<(), AssemblyError> {
		for _ in 0..self.depth {
			self.output.push('\t');
		}

		self.output.write_fmt(args)?;
		self.output.push('\n');

		Ok(())
	}
}
