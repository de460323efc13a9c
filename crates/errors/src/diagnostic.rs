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

use crate::DataType;
use thiserror::Error;

/// Every error the symbol table, IR builder, linearizer and interpreter can
/// report. Diagnostics are non-fatal: emitting one never panics, it is
/// returned to the caller, which decides whether to keep going.
///
/// `spec.md` §7's taxonomy also lists `NullArgument` ("required operand
/// absent; or NOT-with-op2 present") and `BadOp` ("op tag outside the
/// expected subset for a given emitter"). Neither has a reachable
/// construction site in this workspace: every `IrNode` field is a mandatory
/// `SymbolId`, never an `Option`, so there is no "null" operand slot left to
/// detect at runtime; and each emitter takes the specific op enum its
/// operation family uses (`CompareOp`, `MathOp`, ...), so passing the wrong
/// kind of op tag is a compile error, not a runtime one. Rust's type system
/// eliminates both failure classes structurally, which is strictly stronger
/// than the original's runtime checks, so neither variant is carried here.
/// `UnknownOp` is kept: see its doc comment.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Diagnostic {
    #[error("line {line}: expected data type {expected} for {context}. Got: {got}.")]
    TypeMismatch {
        line: u32,
        context: &'static str,
        expected: DataType,
        got: DataType,
    },

    #[error("line {line}: {reason}")]
    BadNesting { line: u32, reason: &'static str },

    #[error("call to intern failed: no variable name given.")]
    BadName,

    /// The printer/interpreter safety net `spec.md` §7 calls
    /// "Unknown-op-at-print/exec". `IrNode` is `#[non_exhaustive]`, so both
    /// downstream crates carry a wildcard match arm that constructs this
    /// rather than assuming today's variant set is forever complete.
    #[error("line {line}: unknown operation tag {op:?} encountered while {phase}.")]
    UnknownOp {
        line: u32,
        op: String,
        phase: &'static str,
    },

    #[error("line {line}: {op} by zero.")]
    DivisionByZero { line: u32, op: &'static str },
}
