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
use rilang_errors::DataType;
use rilang_symbol_table::{SymbolId, SymbolTable};

/// A runtime value. One variant per [`DataType`]; there is no `Null`
/// variant since every value-table entry is written before it is ever read
/// (the interpreter allocates an entry the first time a target is written,
/// mirroring `addEntryToVariableTable`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Real(f64),
    Bool(bool),
}

impl Value {
    /// Widens `Int`/`Real` to `f64` for mixed-numeric comparison and
    /// arithmetic; panics on `Bool`, which the type-checked IR never offers
    /// to a numeric operator.
    pub fn as_f64(&self) -> f64 {
        match self {
            Value::Int(v) => *v as f64,
            Value::Real(v) => *v,
            Value::Bool(_) => unreachable!("numeric operators never receive a BOOLEAN operand"),
        }
    }

    pub fn as_bool(&self) -> bool {
        match self {
            Value::Bool(v) => *v,
            _ => unreachable!("boolean operators never receive a non-BOOLEAN operand"),
        }
    }

    pub fn as_int(&self) -> i64 {
        match self {
            Value::Int(v) => *v,
            _ => unreachable!("INTEGER-only operators never receive a non-INTEGER operand"),
        }
    }

    /// Widens an `Int` into a `Real` if `target_type` calls for it; leaves
    /// any other value as is. This is where rilang performs the
    /// INTEGER→REAL conversion at the storage boundary, so a REAL variable
    /// that received an INTEGER-typed math result always holds an actual
    /// `f64`, never a misread union.
    pub fn widened_to(self, target_type: DataType) -> Value {
        match (self, target_type) {
            (Value::Int(v), DataType::Real) => Value::Real(v as f64),
            (value, _) => value,
        }
    }

    /// Renders the value the way it appears in a trace line or the final
    /// variable table: integers plain, reals to two decimal places,
    /// booleans as the lowercase `true`/`false` literal.
    pub fn display(&self) -> String {
        match self {
            Value::Int(v) => format!("{v}"),
            Value::Real(v) => format!("{v:.2}"),
            Value::Bool(v) => bool_text(*v).to_string(),
        }
    }
}

pub fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// The runtime's variable table: one entry per symbol that has been
/// written to, in insertion order. Modeled on `variableTable`'s
/// singly-linked list (`addEntryToVariableTable`/`getEntryFromVariableTable`)
/// but backed by an `IndexMap` so lookups don't re-walk a list on every
/// read — the language's spec only promises first-write-wins identity and
/// insertion order, not the original's O(n) traversal.
#[derive(Debug, Default)]
pub struct ValueTable {
    entries: IndexMap<SymbolId, Value>,
}

impl ValueTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: SymbolId) -> Option<Value> {
        self.entries.get(&id).copied()
    }

    pub fn set(&mut self, id: SymbolId, value: Value) {
        self.entries.insert(id, value);
    }

    /// Renders the `4_variabletable` listing: bracketed like the
    /// `3_execution` trace's `== CODE EXECUTION ==`, a header row, then one
    /// `<name>\t<TYPE>\t<value>` line per entry, in insertion order.
    pub fn dump(&self, symbols: &SymbolTable) -> String {
        let mut out = String::new();
        out.push_str("== VARIABLE TABLE ==\n");
        out.push_str(" Name\tType\tValue\n");
        for (id, value) in &self.entries {
            let name = symbols.name_of(*id);
            let type_name = symbols.type_of(*id);
            out.push_str(&format!(" {name}\t{type_name}\t{}\n", value.display()));
        }
        out.push_str("== VARIABLE TABLE ==\n");
        out
    }
}
