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
use rilang_ir::{CompareOp, IncDecOp, IrNode, LogicalOp, MathOp};
use rilang_symbol_table::{SymbolId, SymbolTable};

use crate::value::{bool_text, Value, ValueTable};

/// Everything observable about one run: the execution trace
/// (`3_execution`'s content), the final variable table (`4_variabletable`'s
/// content), and the formatted program result, if `EXIT` was reached.
#[derive(Debug, Default)]
pub struct ExecutionReport {
    pub trace: String,
    pub variables: ValueTable,
    pub program_result: Option<String>,
}

/// Whether the walk should keep going or the program has returned.
/// `EXIT` can, by construction, only appear at the top level (the builder
/// rejects it inside an open `IF`/`WHILE`), but this still propagates
/// through nested recursion defensively rather than assuming that.
enum Flow {
    Continue,
    Exited,
}

/// Tree-walking interpreter over the structured IR.
///
/// Mirrors `runCode`/`runCodeEntry`: one value-table entry per written
/// symbol, one indented trace line per executed linear statement, `WHILE`
/// loops replaying their own condition-computing siblings on every
/// iteration. The marker capture-before-recursion trick from the
/// linearizer reappears here for the same reason: a nested loop's own
/// `MARKER_WHILE` must not be mistaken for an outer loop's.
pub struct Interpreter {
    values: ValueTable,
    trace: String,
    program_result: Option<String>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self { values: ValueTable::new(), trace: String::new(), program_result: None }
    }

    /// Executes `program` to completion (or to its first trapped error).
    pub fn run(program: &[IrNode], symbols: &SymbolTable) -> Result<ExecutionReport> {
        tracing::debug!(statements = program.len(), "starting interpretation");
        let mut interp = Interpreter::new();
        interp.trace.push_str("== CODE EXECUTION ==\n");
        interp.run_list(program, symbols, "")?;
        interp.trace.push_str("== CODE EXECUTION ==\n");

        let program_result = interp.program_result.take();
        tracing::debug!(result = ?program_result, "finished interpretation");
        Ok(ExecutionReport { trace: interp.trace, variables: interp.values, program_result })
    }

    fn run_list(&mut self, list: &[IrNode], symbols: &SymbolTable, indent: &str) -> Result<Flow> {
        for (index, node) in list.iter().enumerate() {
            match self.run_node(node, list, index, symbols, indent)? {
                Flow::Continue => {}
                Flow::Exited => return Ok(Flow::Exited),
            }
        }
        Ok(Flow::Continue)
    }

    fn run_node(&mut self, node: &IrNode, container: &[IrNode], index: usize, symbols: &SymbolTable, indent: &str) -> Result<Flow> {
        let sub_indent = format!("{indent}  ");

        tracing::trace!(node = ?node, depth = indent.len() / 2, "executing IR node");

        match node {
            IrNode::NumericComparison { op, target, operand1, operand2, source_line } => {
                self.eval_comparison(*op, *target, *operand1, *operand2, *source_line, symbols, indent)?;
            }
            IrNode::LogicalCombination { op, target, operand1, operand2, .. } => {
                self.eval_logical(*op, *target, *operand1, *operand2, symbols, indent);
            }
            IrNode::Not { target, operand1, .. } => {
                self.eval_not(*target, *operand1, symbols, indent);
            }
            IrNode::Math { op, target, operand1, operand2, source_line } => {
                self.eval_math(*op, *target, *operand1, *operand2, *source_line, symbols, indent)?;
            }
            IrNode::IncDec { op, target, .. } => {
                self.eval_inc_dec(*op, *target, symbols, indent);
            }
            IrNode::Assign { target, source, .. } => {
                self.eval_assign(*target, *source, symbols, indent);
            }
            IrNode::IntConst { target, value, .. } => {
                self.set_and_trace(*target, Value::Int(*value), symbols, indent);
            }
            IrNode::FloatConst { target, value, .. } => {
                self.set_and_trace(*target, Value::Real(*value), symbols, indent);
            }
            IrNode::BoolConst { target, value, .. } => {
                self.set_and_trace(*target, Value::Bool(*value), symbols, indent);
            }
            IrNode::Exit { result, .. } => {
                let value = self.read(*result);
                let text = value.display();
                self.push_line(indent, &format!("RETURN {} := {text}", symbols.name_of(*result)));
                self.program_result = Some(text);
                return Ok(Flow::Exited);
            }
            IrNode::MarkerWhile { .. } => {
                // No trace line, no value-table effect: purely the replay
                // boundary `IrNode::While::marker_index` points back to.
            }
            IrNode::Nop => {}

            IrNode::If { condition, then_body, else_body, .. } => {
                let value = self.read(*condition).as_bool();
                self.push_line(indent, &format!("IF {} := {}", symbols.name_of(*condition), bool_text(value)));
                if value {
                    if let Flow::Exited = self.run_list(then_body, symbols, &sub_indent)? {
                        return Ok(Flow::Exited);
                    }
                } else if let Some(else_body) = else_body {
                    if let Flow::Exited = self.run_list(else_body, symbols, &sub_indent)? {
                        return Ok(Flow::Exited);
                    }
                }
            }

            IrNode::While { condition, body, marker_index, .. } => {
                let mut value = self.read(*condition).as_bool();
                self.push_line(indent, &format!("WHILE {} := {}", symbols.name_of(*condition), bool_text(value)));

                let mut iteration = 0u32;
                while value {
                    tracing::debug!(iteration, condition = symbols.name_of(*condition), "entering while body");
                    if let Flow::Exited = self.run_list(body, symbols, &sub_indent)? {
                        return Ok(Flow::Exited);
                    }
                    // Re-run the condition-computing statements between this
                    // loop's own marker and itself, exactly once per
                    // iteration, so a condition that reads a
                    // body-mutated variable sees the fresh value.
                    let replay = &container[marker_index + 1..index];
                    if let Flow::Exited = self.run_list(replay, symbols, &sub_indent)? {
                        return Ok(Flow::Exited);
                    }
                    value = self.read(*condition).as_bool();
                    self.push_line(indent, &format!("WHILE {} := {}", symbols.name_of(*condition), bool_text(value)));
                    iteration += 1;
                }
            }

            // `IrNode` is `#[non_exhaustive]`: every variant that exists
            // today is matched above. This arm is the interpreter's half of
            // the safety net `spec.md` §7 calls "Unknown-op-at-print/exec".
            _ => {
                return Err(Diagnostic::UnknownOp {
                    line: node.source_line().unwrap_or(0),
                    op: format!("{node:?}"),
                    phase: "interpreting",
                });
            }
        }

        Ok(Flow::Continue)
    }

    fn read(&self, id: SymbolId) -> Value {
        self.values.get(id).expect("every read target was written before it is read in type-checked IR")
    }

    fn set_and_trace(&mut self, target: SymbolId, value: Value, symbols: &SymbolTable, indent: &str) {
        self.values.set(target, value);
        self.push_line(indent, &format!("{} := {}", symbols.name_of(target), value.display()));
    }

    fn push_line(&mut self, indent: &str, text: &str) {
        self.trace.push_str(indent);
        self.trace.push_str(text);
        self.trace.push('\n');
    }

    fn eval_comparison(
        &mut self,
        op: CompareOp,
        target: SymbolId,
        operand1: SymbolId,
        operand2: SymbolId,
        source_line: u32,
        symbols: &SymbolTable,
        indent: &str,
    ) -> Result<()> {
        let _ = source_line;
        let v1 = self.read(operand1);
        let v2 = self.read(operand2);
        let (l, r) = (v1.as_f64(), v2.as_f64());
        let result = match op {
            CompareOp::Equal => l == r,
            CompareOp::NotEqual => l != r,
            CompareOp::Less => l < r,
            CompareOp::LessOrEqual => l <= r,
            CompareOp::Greater => l > r,
            CompareOp::GreaterOrEqual => l >= r,
        };
        self.values.set(target, Value::Bool(result));
        self.push_line(
            indent,
            &format!(
                "{} := {} {} {} := {} {} {} := {}",
                symbols.name_of(target),
                symbols.name_of(operand1),
                op,
                symbols.name_of(operand2),
                v1.display(),
                op,
                v2.display(),
                bool_text(result)
            ),
        );
        Ok(())
    }

    fn eval_logical(&mut self, op: LogicalOp, target: SymbolId, operand1: SymbolId, operand2: SymbolId, symbols: &SymbolTable, indent: &str) {
        let v1 = self.read(operand1).as_bool();
        let v2 = self.read(operand2).as_bool();
        let result = match op {
            LogicalOp::And => v1 && v2,
            LogicalOp::Or => v1 || v2,
        };
        self.values.set(target, Value::Bool(result));
        self.push_line(
            indent,
            &format!(
                "{} := {} {} {} := {} {} {} := {}",
                symbols.name_of(target),
                symbols.name_of(operand1),
                op,
                symbols.name_of(operand2),
                bool_text(v1),
                op,
                bool_text(v2),
                bool_text(result)
            ),
        );
    }

    fn eval_not(&mut self, target: SymbolId, operand1: SymbolId, symbols: &SymbolTable, indent: &str) {
        let v1 = self.read(operand1).as_bool();
        let result = !v1;
        self.values.set(target, Value::Bool(result));
        self.push_line(
            indent,
            &format!(
                "{} := NOT {} := NOT {} := {}",
                symbols.name_of(target),
                symbols.name_of(operand1),
                bool_text(v1),
                bool_text(result)
            ),
        );
    }

    fn eval_math(
        &mut self,
        op: MathOp,
        target: SymbolId,
        operand1: SymbolId,
        operand2: SymbolId,
        source_line: u32,
        symbols: &SymbolTable,
        indent: &str,
    ) -> Result<()> {
        let v1 = self.read(operand1);
        let v2 = self.read(operand2);
        let target_type = symbols.type_of(target);

        if op == MathOp::Modulo {
            let (a, b) = (v1.as_int(), v2.as_int());
            if b == 0 {
                tracing::warn!(line = source_line, "modulo by zero trapped");
                return Err(Diagnostic::DivisionByZero { line: source_line, op: "modulo" });
            }
            let result = a % b;
            self.values.set(target, Value::Int(result));
            self.push_line(
                indent,
                &format!(
                    "{} := {} % {} := {a} % {b} := {result}",
                    symbols.name_of(target),
                    symbols.name_of(operand1),
                    symbols.name_of(operand2)
                ),
            );
            return Ok(());
        }

        let both_int = matches!((v1, v2), (Value::Int(_), Value::Int(_)));
        let natural_result = if both_int {
            let (a, b) = (v1.as_int(), v2.as_int());
            match op {
                MathOp::Plus => Value::Int(a + b),
                MathOp::Minus => Value::Int(a - b),
                MathOp::Multiply => Value::Int(a * b),
                MathOp::Divide => {
                    if b == 0 {
                        tracing::warn!(line = source_line, "division by zero trapped");
                        return Err(Diagnostic::DivisionByZero { line: source_line, op: "division" });
                    }
                    Value::Int(a / b)
                }
                MathOp::Modulo => unreachable!("handled above"),
            }
        } else {
            let (a, b) = (v1.as_f64(), v2.as_f64());
            match op {
                MathOp::Plus => Value::Real(a + b),
                MathOp::Minus => Value::Real(a - b),
                MathOp::Multiply => Value::Real(a * b),
                MathOp::Divide => Value::Real(a / b),
                MathOp::Modulo => unreachable!("handled above"),
            }
        };

        self.values.set(target, natural_result.widened_to(target_type));
        self.push_line(
            indent,
            &format!(
                "{} := {} {} {} := {} {} {} := {}",
                symbols.name_of(target),
                symbols.name_of(operand1),
                op,
                symbols.name_of(operand2),
                v1.display(),
                op,
                v2.display(),
                natural_result.display()
            ),
        );
        Ok(())
    }

    fn eval_inc_dec(&mut self, op: IncDecOp, target: SymbolId, symbols: &SymbolTable, indent: &str) {
        let old = self.read(target).as_int();
        let (delta_text, new) = match op {
            IncDecOp::Increment => ("+ 1", old + 1),
            IncDecOp::Decrement => ("- 1", old - 1),
        };
        self.values.set(target, Value::Int(new));
        let name = symbols.name_of(target);
        self.push_line(indent, &format!("{name} := {name} {delta_text} := {old} {delta_text} := {new}"));
    }

    fn eval_assign(&mut self, target: SymbolId, source: SymbolId, symbols: &SymbolTable, indent: &str) {
        let value = self.read(source);
        let target_type = symbols.type_of(target);
        self.values.set(target, value.widened_to(target_type));
        self.push_line(indent, &format!("{} := {} := {}", symbols.name_of(target), symbols.name_of(source), value.display()));
    }
}
