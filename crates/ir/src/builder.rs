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

use rilang_errors::{DataType, Diagnostic, Result};
use rilang_symbol_table::{SymbolId, SymbolTable};

use crate::node::{CompareOp, IncDecOp, IrNode, LogicalOp, MathOp};

/// A nested structure still being built. `emit_if`/`emit_while` push one of
/// these; `emit_end` pops it, assembles the finished [`IrNode`], and appends
/// it to whichever list is current once the pop has taken effect.
enum OpenContext {
    If {
        source_line: u32,
        condition: SymbolId,
        then_body: Vec<IrNode>,
        else_body: Option<Vec<IrNode>>,
        in_else: bool,
    },
    While {
        source_line: u32,
        condition: SymbolId,
        marker_index: usize,
        body: Vec<IrNode>,
    },
}

struct PendingMarker {
    index: usize,
}

/// Consumes typed emit-calls (standing in for the parser) and builds a
/// structured IR tree, enforcing every type contract of the language's
/// operation table as each call arrives. Owns the [`SymbolTable`] for the
/// duration of one build, per the single-threaded, singleton-ownership
/// model the language spec describes.
pub struct IrBuilder {
    symbols: SymbolTable,
    output: Vec<IrNode>,
    open: Vec<OpenContext>,
    pending_while_marker: Option<PendingMarker>,
}

impl Default for IrBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IrBuilder {
    pub fn new() -> Self {
        Self {
            symbols: SymbolTable::new(),
            output: Vec::new(),
            open: Vec::new(),
            pending_while_marker: None,
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn intern_symbol(&mut self, name: &str, data_type: DataType, line: u32) -> Result<SymbolId> {
        self.symbols.intern(name, data_type, line)
    }

    pub fn lookup_symbol(&self, name: &str) -> Option<SymbolId> {
        self.symbols.lookup(name)
    }

    pub fn fresh_temp(&mut self, data_type: DataType, line: u32) -> SymbolId {
        self.symbols.fresh_temp(data_type, line)
    }

    /// Consumes the builder, returning the finished top-level statement list
    /// together with the symbol table it was built against.
    pub fn finish(self) -> (Vec<IrNode>, SymbolTable) {
        (self.output, self.symbols)
    }

    fn current_list_mut(&mut self) -> &mut Vec<IrNode> {
        match self.open.last_mut() {
            None => &mut self.output,
            Some(OpenContext::If { then_body, else_body, in_else, .. }) => {
                if *in_else {
                    else_body.as_mut().expect("in_else implies else_body is Some")
                } else {
                    then_body
                }
            }
            Some(OpenContext::While { body, .. }) => body,
        }
    }

    fn push(&mut self, node: IrNode) {
        tracing::trace!(node = ?node, depth = self.open.len(), "appending ir node");
        self.current_list_mut().push(node);
    }

    fn type_of(&self, id: SymbolId) -> DataType {
        self.symbols.type_of(id)
    }

    // ---- §4.2 emit contracts -------------------------------------------------

    pub fn emit_numeric_comparison(
        &mut self,
        target: SymbolId,
        op: CompareOp,
        operand1: SymbolId,
        operand2: SymbolId,
        source_line: u32,
    ) -> Result<()> {
        self.require_type(target, DataType::Boolean, "numeric comparison", source_line)?;
        self.require_numeric(operand1, "numeric comparison operand 1", source_line)?;
        self.require_numeric(operand2, "numeric comparison operand 2", source_line)?;

        self.push(IrNode::NumericComparison { op, target, operand1, operand2, source_line });
        Ok(())
    }

    pub fn emit_logical_combination(
        &mut self,
        target: SymbolId,
        op: LogicalOp,
        operand1: SymbolId,
        operand2: SymbolId,
        source_line: u32,
    ) -> Result<()> {
        let context = "logical combination";
        self.require_type(target, DataType::Boolean, context, source_line)?;
        self.require_type(operand1, DataType::Boolean, context, source_line)?;
        self.require_type(operand2, DataType::Boolean, context, source_line)?;

        self.push(IrNode::LogicalCombination { op, target, operand1, operand2, source_line });
        Ok(())
    }

    pub fn emit_not(&mut self, target: SymbolId, operand1: SymbolId, source_line: u32) -> Result<()> {
        let context = "logical combination";
        self.require_type(target, DataType::Boolean, context, source_line)?;
        self.require_type(operand1, DataType::Boolean, context, source_line)?;

        self.push(IrNode::Not { target, operand1, source_line });
        Ok(())
    }

    pub fn emit_math(
        &mut self,
        target: SymbolId,
        op: MathOp,
        operand1: SymbolId,
        operand2: SymbolId,
        source_line: u32,
    ) -> Result<()> {
        self.require_numeric(operand1, "mathematical operation operand 1", source_line)?;
        self.require_numeric(operand2, "mathematical operation operand 2", source_line)?;

        if op == MathOp::Modulo {
            self.require_type(operand1, DataType::Integer, "modulo operand 1", source_line)?;
            self.require_type(operand2, DataType::Integer, "modulo operand 2", source_line)?;
            self.require_type(target, DataType::Integer, "modulo target", source_line)?;
            self.push(IrNode::Math { op, target, operand1, operand2, source_line });
            return Ok(());
        }

        let result_type = if self.type_of(operand1) == DataType::Integer && self.type_of(operand2) == DataType::Integer
        {
            DataType::Integer
        } else {
            DataType::Real
        };
        let target_type = self.type_of(target);
        let widened = target_type == DataType::Real && result_type == DataType::Integer;
        if target_type != result_type && !widened {
            return Err(Diagnostic::TypeMismatch {
                line: source_line,
                context: "mathematical operation result",
                expected: result_type,
                got: target_type,
            });
        }

        self.push(IrNode::Math { op, target, operand1, operand2, source_line });
        Ok(())
    }

    pub fn emit_inc_dec(&mut self, target: SymbolId, op: IncDecOp, source_line: u32) -> Result<()> {
        self.require_type(target, DataType::Integer, "increment/decrement", source_line)?;
        self.push(IrNode::IncDec { op, target, source_line });
        Ok(())
    }

    pub fn emit_assign(&mut self, target: SymbolId, source: SymbolId, source_line: u32) -> Result<()> {
        let target_type = self.type_of(target);
        let source_type = self.type_of(source);
        let widened = target_type == DataType::Real && source_type == DataType::Integer;
        if target_type != source_type && !widened {
            return Err(Diagnostic::TypeMismatch {
                line: source_line,
                context: "assignment",
                expected: target_type,
                got: source_type,
            });
        }
        self.push(IrNode::Assign { target, source, source_line });
        Ok(())
    }

    pub fn emit_const_int(&mut self, target: SymbolId, value: i64, source_line: u32) -> Result<()> {
        self.require_type(target, DataType::Integer, "int constant", source_line)?;
        self.push(IrNode::IntConst { target, value, source_line });
        Ok(())
    }

    pub fn emit_const_float(&mut self, target: SymbolId, value: f64, source_line: u32) -> Result<()> {
        self.require_type(target, DataType::Real, "float constant", source_line)?;
        self.push(IrNode::FloatConst { target, value, source_line });
        Ok(())
    }

    pub fn emit_const_bool(&mut self, target: SymbolId, value: bool, source_line: u32) -> Result<()> {
        self.require_type(target, DataType::Boolean, "bool constant", source_line)?;
        self.push(IrNode::BoolConst { target, value, source_line });
        Ok(())
    }

    // ---- §4.3 nesting and context stack ---------------------------------------

    pub fn emit_if(&mut self, condition: SymbolId, source_line: u32) -> Result<()> {
        self.require_type(condition, DataType::Boolean, "if condition", source_line)?;
        tracing::debug!(line = source_line, depth = self.open.len() + 1, "opening if context");
        self.open.push(OpenContext::If {
            source_line,
            condition,
            then_body: Vec::new(),
            else_body: None,
            in_else: false,
        });
        Ok(())
    }

    pub fn emit_else(&mut self, source_line: u32) -> Result<()> {
        match self.open.last_mut() {
            None => Err(Diagnostic::BadNesting { line: source_line, reason: "else outside of an if" }),
            Some(OpenContext::While { .. }) => {
                Err(Diagnostic::BadNesting { line: source_line, reason: "else not contained in an if statement" })
            }
            Some(OpenContext::If { else_body, in_else, .. }) => {
                if else_body.is_some() {
                    return Err(Diagnostic::BadNesting {
                        line: source_line,
                        reason: "if statement already contains an else flow",
                    });
                }
                *else_body = Some(Vec::new());
                *in_else = true;
                tracing::debug!(line = source_line, "switching if context to its else branch");
                Ok(())
            }
        }
    }

    pub fn emit_while_marker(&mut self, source_line: u32) -> Result<()> {
        if self.pending_while_marker.is_some() {
            return Err(Diagnostic::BadNesting {
                line: source_line,
                reason: "a while marker is already open",
            });
        }
        let index = self.current_list_mut().len();
        self.pending_while_marker = Some(PendingMarker { index });
        tracing::debug!(line = source_line, index, "opening while marker");
        self.push(IrNode::MarkerWhile { source_line });
        Ok(())
    }

    pub fn emit_while(&mut self, condition: SymbolId, source_line: u32) -> Result<()> {
        self.require_type(condition, DataType::Boolean, "while condition", source_line)?;
        let marker = self.pending_while_marker.take().ok_or(Diagnostic::BadNesting {
            line: source_line,
            reason: "no marker has been defined for this while loop",
        })?;

        tracing::debug!(line = source_line, depth = self.open.len() + 1, marker_index = marker.index, "opening while context");
        self.open.push(OpenContext::While { source_line, condition, marker_index: marker.index, body: Vec::new() });
        Ok(())
    }

    pub fn emit_end(&mut self, source_line: u32) -> Result<()> {
        let context = self.open.pop().ok_or(Diagnostic::BadNesting {
            line: source_line,
            reason: "no nested structure is open",
        })?;
        let node = match context {
            OpenContext::If { source_line, condition, then_body, else_body, .. } => {
                IrNode::If { condition, then_body, else_body, source_line }
            }
            OpenContext::While { source_line, condition, marker_index, body } => {
                IrNode::While { condition, body, marker_index, source_line }
            }
        };
        tracing::debug!(line = source_line, depth = self.open.len(), "closing nested context");
        self.push(node);
        Ok(())
    }

    pub fn emit_exit(&mut self, result: SymbolId, source_line: u32) -> Result<()> {
        if !self.open.is_empty() {
            return Err(Diagnostic::BadNesting {
                line: source_line,
                reason: "a nested structure has not been closed yet",
            });
        }
        if self.pending_while_marker.is_some() {
            return Err(Diagnostic::BadNesting {
                line: source_line,
                reason: "an open while marker has not been consumed",
            });
        }
        tracing::debug!(line = source_line, "program complete, emitting exit");
        self.push(IrNode::Exit { result, source_line });
        Ok(())
    }

    // ---- shared validation helpers --------------------------------------------

    fn require_type(&self, id: SymbolId, expected: DataType, context: &'static str, line: u32) -> Result<()> {
        let got = self.type_of(id);
        if got != expected {
            return Err(Diagnostic::TypeMismatch { line, context, expected, got });
        }
        Ok(())
    }

    /// Numeric operands accept either `INTEGER` or `REAL`, which `DataType`
    /// has no single variant for; `expected` is reported as `INTEGER` as the
    /// representative numeric type, `context` names which operand of which
    /// operation rejected it.
    fn require_numeric(&self, id: SymbolId, context: &'static str, line: u32) -> Result<()> {
        let got = self.type_of(id);
        if !got.is_numeric() {
            return Err(Diagnostic::TypeMismatch { line, context, expected: DataType::Integer, got });
        }
        Ok(())
    }
}
