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

use rilang_errors::{DataType, Diagnostic};

use super::*;

#[test]
fn intern_rejects_empty_name() {
    let mut table = SymbolTable::new();
    let err = table.intern("", DataType::Integer, 1).unwrap_err();
    assert_eq!(err, Diagnostic::BadName);
}

#[test]
fn lookup_returns_first_match_on_duplicate_names() {
    let mut table = SymbolTable::new();
    let first = table.intern("x", DataType::Integer, 1).unwrap();
    let _second = table.intern("x", DataType::Real, 2).unwrap();

    assert_eq!(table.lookup("x"), Some(first));
    assert_eq!(table.type_of(first), DataType::Integer);
}

#[test]
fn fresh_temp_names_are_monotonic_and_unique() {
    let mut table = SymbolTable::new();
    let a = table.fresh_temp(DataType::Integer, 3);
    let b = table.fresh_temp(DataType::Integer, 3);

    assert_eq!(table.name_of(a), "_h0");
    assert_eq!(table.name_of(b), "_h1");
    assert_ne!(a, b);
}

#[test]
fn dump_includes_every_entry_in_insertion_order() {
    let mut table = SymbolTable::new();
    table.intern("a", DataType::Integer, 1).unwrap();
    table.intern("b", DataType::Boolean, 2).unwrap();

    let dump = table.dump();
    assert_eq!(
        dump,
        "Eintrag: a = INTEGER in line 1\nEintrag: b = BOOLEAN in line 2\n"
    );
}
