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

//! Append-only symbol table. Entries are identified by a stable [`SymbolId`]
//! handle rather than by name, so that duplicate names (permitted, matching
//! the source this crate is modeled on) never overwrite one another.

mod entry;
mod table;

pub use entry::{SymbolEntry, SymbolId};
pub use table::SymbolTable;

#[cfg(test)]
mod tests;
