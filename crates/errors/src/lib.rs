// Copyright (C) 2019-2026 Provable Inc.
// This file is part of the Rilang library.

// The Rilang library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Rilang library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Rilang library. If not, see <https://www.gnu.org/licenses/>.

//! Diagnostics shared by every stage of the rilang pipeline, plus the
//! handful of primitive types ([`DataType`]) that every other crate in the
//! workspace needs but none of them should own.

use std::fmt;

mod data_type;
mod diagnostic;

pub use data_type::DataType;
pub use diagnostic::Diagnostic;

pub type Result<T> = std::result::Result<T, Diagnostic>;

/// A 1-based line number in whatever source produced the symbol table or IR
/// being diagnosed. Opaque beyond that: the scanner/parser that assigns it is
/// out of scope here.
pub type SourceLine = u32;

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Integer => "INTEGER",
            DataType::Real => "REAL",
            DataType::Boolean => "BOOLEAN",
        };
        f.write_str(name)
    }
}
