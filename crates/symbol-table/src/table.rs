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

use indexmap::IndexMap;
use rilang_errors::{DataType, Diagnostic, Result};

use crate::entry::{SymbolEntry, SymbolId};

/// Insertion-ordered symbol table.
///
/// Duplicate names are allowed on purpose: the table this is modeled on
/// never deduplicates on insert, and `lookup` only ever returns the first
/// entry with a given name, so callers that need shadowing semantics get
/// them for free. Name uniqueness, if a caller wants it, is their call to
/// enforce before interning.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
    by_name: IndexMap<String, Vec<SymbolId>>,
    next_temp: u32,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new entry. Returns `BadName` if `name` is empty, mirroring the
    /// original table's validation (the original's second check, "invalid
    /// type given", is unreachable here: [`DataType`] is a closed enum).
    pub fn intern(&mut self, name: &str, data_type: DataType, line: u32) -> Result<SymbolId> {
        if name.is_empty() {
            return Err(Diagnostic::BadName);
        }

        let id = SymbolId(self.entries.len() as u32);
        self.entries.push(SymbolEntry {
            name: name.to_string(),
            data_type,
            line,
        });

        tracing::debug!(name, ?data_type, line, "adding new entry to symbol table");

        self.by_name.entry(name.to_string()).or_default().push(id);
        Ok(id)
    }

    /// Allocates a fresh compiler-generated temporary of the given type,
    /// named `_h<N>` for a strictly increasing `N`. This is the naming
    /// scheme the language's monotonic helper counter uses; it never
    /// collides even when two temporaries are created on the same source
    /// line.
    pub fn fresh_temp(&mut self, data_type: DataType, line: u32) -> SymbolId {
        let name = format!("_h{}", self.next_temp);
        self.next_temp += 1;
        self.intern(&name, data_type, line)
            .expect("generated temporary names are never empty")
    }

    /// First entry inserted under `name`, or `None` if there is none.
    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.by_name.get(name).and_then(|ids| ids.first()).copied()
    }

    pub fn entry(&self, id: SymbolId) -> &SymbolEntry {
        &self.entries[id.index()]
    }

    pub fn type_of(&self, id: SymbolId) -> DataType {
        self.entry(id).data_type
    }

    pub fn name_of(&self, id: SymbolId) -> &str {
        &self.entry(id).name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &SymbolEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (SymbolId(i as u32), e))
    }

    /// Renders the table as `1_symboltable`'s line format: one
    /// `Eintrag: <name> = <TYPE> in line <N>` line per entry, in insertion
    /// order, including the last entry (the table this is modeled on drops
    /// it due to an off-by-one loop bound; that bug is not reproduced here).
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&format!(
                "Eintrag: {} = {} in line {}\n",
                entry.name, entry.data_type, entry.line
            ));
        }
        out
    }
}
