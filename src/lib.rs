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

//! `rilang` is a facade crate: it re-exports the public surface of the five
//! workspace members (`rilang-errors`, `rilang-symbol-table`, `rilang-ir`,
//! `rilang-ir-printer`, `rilang-interpreter`) so a caller (a scanner/parser
//! pairing, or a test) depends on a single crate rather than wiring up all
//! five by hand. None of the pipeline stages live here; this module only
//! re-exports and, for convenience, threads the printer and interpreter
//! together over one already-built program.

pub use rilang_errors::{DataType, Diagnostic, Result, SourceLine};
pub use rilang_interpreter::{ExecutionReport, Interpreter, Value, ValueTable};
pub use rilang_ir::{CompareOp, IncDecOp, IrBuilder, IrNode, LogicalOp, MathOp};
pub use rilang_ir_printer::{Listing, PrintLine, Printer};
pub use rilang_symbol_table::{SymbolEntry, SymbolId, SymbolTable};

/// Runs both read-only consumers of a finished build over the same
/// structured IR: the linearizer (producing the `2_intermediate` listing)
/// and the interpreter (producing the `3_execution` trace, the
/// `4_variabletable` dump, and the program result). Mirrors the pipeline's
/// §2 data-flow note that IRP and INT both read the IR independently and
/// neither mutates it — so there is no ordering requirement between the two
/// calls this wraps.
pub fn linearize_and_run(program: &[IrNode], symbols: &SymbolTable) -> Result<(Listing, ExecutionReport)> {
    let listing = Printer::linearize(program, symbols)?;
    let report = Interpreter::run(program, symbols)?;
    Ok((listing, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// End-to-end smoke test wiring the builder, linearizer and interpreter
    /// together the way a caller outside this workspace would: `result := 2
    /// + 3 * 4; return result` (§8 scenario 1).
    #[test]
    fn arithmetic_program_end_to_end() {
        let mut builder = IrBuilder::new();
        let result = builder.intern_symbol("result", DataType::Integer, 1).unwrap();
        let two = builder.fresh_temp(DataType::Integer, 1);
        let three = builder.fresh_temp(DataType::Integer, 1);
        let four = builder.fresh_temp(DataType::Integer, 1);
        let product = builder.fresh_temp(DataType::Integer, 1);
        let sum = builder.fresh_temp(DataType::Integer, 1);

        builder.emit_const_int(two, 2, 1).unwrap();
        builder.emit_const_int(three, 3, 1).unwrap();
        builder.emit_const_int(four, 4, 1).unwrap();
        builder.emit_math(product, MathOp::Multiply, three, four, 1).unwrap();
        builder.emit_math(sum, MathOp::Plus, two, product, 1).unwrap();
        builder.emit_assign(result, sum, 1).unwrap();
        builder.emit_exit(result, 2).unwrap();

        let (nodes, symbols) = builder.finish();
        let (listing, report) = linearize_and_run(&nodes, &symbols).unwrap();

        assert_eq!(listing.lines.len(), 7);
        assert_eq!(report.program_result.as_deref(), Some("14"));
    }
}
