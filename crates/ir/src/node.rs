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

use rilang_symbol_table::SymbolId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six numeric comparisons. Always produce a `BOOLEAN` target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CompareOp::Equal => "==",
            CompareOp::NotEqual => "!=",
            CompareOp::Less => "<",
            CompareOp::LessOrEqual => "<=",
            CompareOp::Greater => ">",
            CompareOp::GreaterOrEqual => ">=",
        };
        f.write_str(s)
    }
}

/// `AND`/`OR`. `NOT` is its own node variant since it takes a single operand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOp {
    And,
    Or,
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
        })
    }
}

/// The five mathematical operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MathOp {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
}

impl fmt::Display for MathOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MathOp::Plus => "+",
            MathOp::Minus => "-",
            MathOp::Multiply => "*",
            MathOp::Divide => "/",
            MathOp::Modulo => "%",
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncDecOp {
    Increment,
    Decrement,
}

/// A single statement of the structured IR.
///
/// This is a sum type over operations (Design Notes §9 of the language
/// spec): each variant carries only the fields its operation needs, rather
/// than a generic node with a pile of `Option` slots that most operations
/// leave empty. There is no `parent` back-pointer; nesting is owned
/// top-down through `then_body`/`else_body`/`body`, and the builder's own
/// context stack is what used to require the back-pointer.
///
/// `#[non_exhaustive]`: the printer and interpreter live in separate crates
/// and walk this enum by pattern match. Marking it non-exhaustive makes the
/// compiler hold them to a trailing wildcard arm, which is where
/// `Diagnostic::UnknownOp` — `spec.md` §7's "safety net for future
/// extensions" — actually gets constructed, instead of sitting dead.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[non_exhaustive]
pub enum IrNode {
    NumericComparison {
        op: CompareOp,
        target: SymbolId,
        operand1: SymbolId,
        operand2: SymbolId,
        source_line: u32,
    },
    LogicalCombination {
        op: LogicalOp,
        target: SymbolId,
        operand1: SymbolId,
        operand2: SymbolId,
        source_line: u32,
    },
    Not {
        target: SymbolId,
        operand1: SymbolId,
        source_line: u32,
    },
    Math {
        op: MathOp,
        target: SymbolId,
        operand1: SymbolId,
        operand2: SymbolId,
        source_line: u32,
    },
    IncDec {
        op: IncDecOp,
        target: SymbolId,
        source_line: u32,
    },
    Assign {
        target: SymbolId,
        source: SymbolId,
        source_line: u32,
    },
    IntConst {
        target: SymbolId,
        value: i64,
        source_line: u32,
    },
    FloatConst {
        target: SymbolId,
        value: f64,
        source_line: u32,
    },
    BoolConst {
        target: SymbolId,
        value: bool,
        source_line: u32,
    },
    /// `if (condition) { then_body } [else { else_body }]`.
    If {
        condition: SymbolId,
        then_body: Vec<IrNode>,
        else_body: Option<Vec<IrNode>>,
        source_line: u32,
    },
    /// `while (condition) { body }`. `marker_index` is this node's index
    /// within its own containing list of the sibling [`IrNode::MarkerWhile`]
    /// that precedes the condition-computing statements — stored directly
    /// rather than re-derived by scanning, per the language spec's Design
    /// Notes §9 ("record the condition as ... the slice bounds").
    While {
        condition: SymbolId,
        body: Vec<IrNode>,
        marker_index: usize,
        source_line: u32,
    },
    /// Sentinel preceding the condition-computing statements of the next
    /// `While` in the same list. Produces no printed line and no trace
    /// line; purely a replay boundary for the linearizer and interpreter.
    MarkerWhile { source_line: u32 },
    /// `return result`. Terminates the top-level statement list.
    Exit { result: SymbolId, source_line: u32 },
    /// Structural placeholder. The original emits these as scaffolding for
    /// if/while sub-lists; this crate's builder never produces one (the
    /// sum-type body `Vec`s replace that role), but the variant is kept so
    /// that a caller building IR by other means (e.g. a test harness) can
    /// still represent a deliberate no-op.
    Nop,
}

impl IrNode {
    /// The source line the statement is tagged with, if any. `Nop` carries
    /// none, matching the original's treatment of its placeholder entries.
    pub fn source_line(&self) -> Option<u32> {
        match self {
            IrNode::NumericComparison { source_line, .. }
            | IrNode::LogicalCombination { source_line, .. }
            | IrNode::Not { source_line, .. }
            | IrNode::Math { source_line, .. }
            | IrNode::IncDec { source_line, .. }
            | IrNode::Assign { source_line, .. }
            | IrNode::IntConst { source_line, .. }
            | IrNode::FloatConst { source_line, .. }
            | IrNode::BoolConst { source_line, .. }
            | IrNode::If { source_line, .. }
            | IrNode::While { source_line, .. }
            | IrNode::MarkerWhile { source_line }
            | IrNode::Exit { source_line, .. } => Some(*source_line),
            IrNode::Nop => None,
        }
    }
}
