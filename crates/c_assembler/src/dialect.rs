use core::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Which flavor of C the generated program targets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
	#[default]
	C,
	Cpp,
}

impl Dialect {
	pub(crate) const fn headers(self) -> [&'static str; 2] {
		match self {
			Self::C => ["<stdio.h>", "<stddef.h>"],
			Self::Cpp => ["<cstdio>", "<cstddef>"],
		}
	}

	pub(crate) const fn main_signature(self) -> &'static str {
		match self {
			Self::C => "int main(void)",
			Self::Cpp => "int main()",
		}
	}

	/// Namespace qualifier for names from the standard headers.
	pub(crate) const fn std_prefix(self) -> &'static str {
		match self {
			Self::C => "",
			Self::Cpp => "std::",
		}
	}
}

impl Display for Dialect {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		f.write_str(match self {
			Self::C => "C",
			Self::Cpp => "C++",
		})
	}
}
