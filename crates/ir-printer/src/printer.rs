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

use rilang_errors::{Diagnostic, Result};
use rilang_ir::IrNode;
use rilang_symbol_table::SymbolTable;

use crate::listing::{Listing, PrintLine};

/// A line still under construction: either finished text, or a `GOTO`
/// waiting on a label that a later point of the traversal will supply.
enum LineText {
    Literal(String),
    Goto(Option<u32>),
}

struct RawLine {
    text: LineText,
    source_line: u32,
}

/// Flattens a structured IR tree into a labeled, backpatched listing.
///
/// Mirrors `generator.c`'s `printCode`/`printCodeEntry`: every statement
/// becomes one line except `IF`/`WHILE`, which expand into a condition test,
/// a `GOTO` whose target isn't known until the body underneath it has been
/// linearized, and (for `WHILE`) a closing jump back to the line the loop's
/// `MARKER_WHILE` sentinel resolved to. No raw pointers are needed for the
/// forward jumps: a placeholder line is appended up front and its text is
/// overwritten once the target label is known.
pub struct Printer {
    lines: Vec<RawLine>,
}

impl Printer {
    fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Linearizes `program` against `symbols` into a finished [`Listing`].
    pub fn linearize(program: &[IrNode], symbols: &SymbolTable) -> Result<Listing> {
        let mut printer = Printer::new();
        let mut while_marker_label: Option<u32> = None;
        for node in program {
            printer.visit(node, symbols, &mut while_marker_label)?;
        }
        Ok(printer.into_listing())
    }

    /// The label the *next* appended line will receive. Labels are 1-based
    /// line numbers, assigned in append order; nothing is ever re-numbered.
    fn current_label(&self) -> u32 {
        self.lines.len() as u32 + 1
    }

    fn push_literal(&mut self, source_line: u32, text: String) {
        self.lines.push(RawLine { text: LineText::Literal(text), source_line });
    }

    /// Appends a `GOTO` line whose target is not yet known, returning the
    /// index to hand to [`Self::backpatch`] once it is.
    fn push_goto_placeholder(&mut self, source_line: u32) -> usize {
        self.lines.push(RawLine { text: LineText::Goto(None), source_line });
        self.lines.len() - 1
    }

    fn backpatch(&mut self, index: usize, target_label: u32) {
        self.lines[index].text = LineText::Goto(Some(target_label));
    }

    fn visit(&mut self, node: &IrNode, symbols: &SymbolTable, while_marker_label: &mut Option<u32>) -> Result<()> {
        let name = |id| symbols.name_of(id);
        match node {
            IrNode::NumericComparison { op, target, operand1, operand2, source_line } => {
                self.push_literal(*source_line, format!("{} := {} {} {}", name(*target), name(*operand1), op, name(*operand2)));
            }
            IrNode::LogicalCombination { op, target, operand1, operand2, source_line } => {
                self.push_literal(*source_line, format!("{} := {} {} {}", name(*target), name(*operand1), op, name(*operand2)));
            }
            IrNode::Not { target, operand1, source_line } => {
                self.push_literal(*source_line, format!("{} := NOT {}", name(*target), name(*operand1)));
            }
            IrNode::Math { op, target, operand1, operand2, source_line } => {
                self.push_literal(*source_line, format!("{} := {} {} {}", name(*target), name(*operand1), op, name(*operand2)));
            }
            IrNode::IncDec { op, target, source_line } => {
                let delta = match op {
                    rilang_ir::IncDecOp::Increment => "+ 1",
                    rilang_ir::IncDecOp::Decrement => "- 1",
                };
                self.push_literal(*source_line, format!("{} := {} {}", name(*target), name(*target), delta));
            }
            IrNode::Assign { target, source, source_line } => {
                self.push_literal(*source_line, format!("{} := {}", name(*target), name(*source)));
            }
            IrNode::IntConst { target, value, source_line } => {
                self.push_literal(*source_line, format!("{} := {}", name(*target), value));
            }
            IrNode::FloatConst { target, value, source_line } => {
                self.push_literal(*source_line, format!("{} := {:.2}", name(*target), value));
            }
            IrNode::BoolConst { target, value, source_line } => {
                self.push_literal(*source_line, format!("{} := {}", name(*target), value));
            }
            IrNode::Exit { result, source_line } => {
                self.push_literal(*source_line, format!("RETURN {}", name(*result)));
            }
            IrNode::MarkerWhile { .. } => {
                *while_marker_label = Some(self.current_label());
            }
            IrNode::Nop => {}

            IrNode::If { condition, then_body, else_body, source_line } => {
                let body_start = self.current_label() + 2;
                self.push_literal(*source_line, format!("IF {} GOTO {}", name(*condition), body_start));
                let skip_then = self.push_goto_placeholder(*source_line);

                for statement in then_body {
                    self.visit(statement, symbols, while_marker_label)?;
                }

                match else_body {
                    None => {
                        self.backpatch(skip_then, self.current_label());
                    }
                    Some(else_body) => {
                        let skip_else = self.push_goto_placeholder(*source_line);
                        self.backpatch(skip_then, self.current_label());
                        for statement in else_body {
                            self.visit(statement, symbols, while_marker_label)?;
                        }
                        self.backpatch(skip_else, self.current_label());
                    }
                }
            }

            IrNode::While { condition, body, marker_index: _, source_line } => {
                // Captured before recursing: a nested while's own MARKER_WHILE
                // must not clobber this loop's backward-jump target.
                let local_marker = *while_marker_label;

                let body_start = self.current_label() + 2;
                self.push_literal(*source_line, format!("IF {} GOTO {}", name(*condition), body_start));
                let skip_body = self.push_goto_placeholder(*source_line);

                for statement in body {
                    self.visit(statement, symbols, while_marker_label)?;
                }

                let retest_label = local_marker.expect("a While node is only ever built with a resolved marker");
                self.push_literal(*source_line, format!("GOTO {}", retest_label));
                self.backpatch(skip_body, self.current_label());
            }

            // `IrNode` is `#[non_exhaustive]`: every variant that exists
            // today is matched above. This arm is the printer's half of the
            // safety net `spec.md` §7 calls "Unknown-op-at-print/exec".
            _ => {
                return Err(Diagnostic::UnknownOp {
                    line: node.source_line().unwrap_or(0),
                    op: format!("{node:?}"),
                    phase: "linearizing",
                });
            }
        }
        Ok(())
    }

    fn into_listing(self) -> Listing {
        let lines = self
            .lines
            .into_iter()
            .enumerate()
            .map(|(i, raw)| {
                let text = match raw.text {
                    LineText::Literal(text) => text,
                    LineText::Goto(Some(target)) => format!("GOTO {target}"),
                    LineText::Goto(None) => unreachable!("every GOTO placeholder is backpatched before rendering"),
                };
                PrintLine { label: i as u32 + 1, text, source_line: raw.source_line }
            })
            .collect();
        Listing { lines }
    }
}
