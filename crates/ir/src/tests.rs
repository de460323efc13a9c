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
fn int_plus_int_targets_integer() {
    let mut b = IrBuilder::new();
    let t = b.intern_symbol("t", DataType::Integer, 1).unwrap();
    let a = b.intern_symbol("a", DataType::Integer, 1).unwrap();
    let c = b.intern_symbol("c", DataType::Integer, 1).unwrap();
    assert!(b.emit_math(t, MathOp::Plus, a, c, 1).is_ok());
}

#[test]
fn int_plus_real_requires_real_or_wider_target() {
    let mut b = IrBuilder::new();
    let a = b.intern_symbol("a", DataType::Integer, 1).unwrap();
    let r = b.intern_symbol("r", DataType::Real, 1).unwrap();

    let int_target = b.intern_symbol("t_int", DataType::Integer, 1).unwrap();
    let err = b.emit_math(int_target, MathOp::Plus, a, r, 1).unwrap_err();
    assert!(matches!(err, Diagnostic::TypeMismatch { .. }));

    let real_target = b.intern_symbol("t_real", DataType::Real, 1).unwrap();
    assert!(b.emit_math(real_target, MathOp::Plus, a, r, 1).is_ok());
}

#[test]
fn assign_int_to_real_widens_but_not_the_reverse() {
    let mut b = IrBuilder::new();
    let i = b.intern_symbol("i", DataType::Integer, 1).unwrap();
    let r = b.intern_symbol("r", DataType::Real, 1).unwrap();

    assert!(b.emit_assign(r, i, 1).is_ok());
    let err = b.emit_assign(i, r, 2).unwrap_err();
    assert!(matches!(err, Diagnostic::TypeMismatch { line: 2, .. }));
}

#[test]
fn modulo_rejects_real_operands() {
    let mut b = IrBuilder::new();
    let t = b.intern_symbol("t", DataType::Integer, 1).unwrap();
    let a = b.intern_symbol("a", DataType::Integer, 1).unwrap();
    let r = b.intern_symbol("r", DataType::Real, 1).unwrap();

    let err = b.emit_math(t, MathOp::Modulo, a, r, 1).unwrap_err();
    assert!(matches!(err, Diagnostic::TypeMismatch { .. }));
}

#[test]
fn not_has_no_operand2_slot_structurally() {
    let mut b = IrBuilder::new();
    let t = b.intern_symbol("t", DataType::Boolean, 1).unwrap();
    let a = b.intern_symbol("a", DataType::Boolean, 1).unwrap();
    assert!(b.emit_not(t, a, 1).is_ok());
}

#[test]
fn else_without_open_if_is_bad_nesting() {
    let mut b = IrBuilder::new();
    let err = b.emit_else(1).unwrap_err();
    assert!(matches!(err, Diagnostic::BadNesting { .. }));
}

#[test]
fn duplicate_else_is_rejected() {
    let mut b = IrBuilder::new();
    let cond = b.intern_symbol("c", DataType::Boolean, 1).unwrap();
    b.emit_if(cond, 1).unwrap();
    b.emit_else(2).unwrap();
    let err = b.emit_else(3).unwrap_err();
    assert!(matches!(err, Diagnostic::BadNesting { .. }));
}

#[test]
fn while_without_marker_is_rejected() {
    let mut b = IrBuilder::new();
    let cond = b.intern_symbol("c", DataType::Boolean, 1).unwrap();
    let err = b.emit_while(cond, 1).unwrap_err();
    assert!(matches!(err, Diagnostic::BadNesting { .. }));
}

#[test]
fn duplicate_marker_is_rejected() {
    let mut b = IrBuilder::new();
    b.emit_while_marker(1).unwrap();
    let err = b.emit_while_marker(2).unwrap_err();
    assert!(matches!(err, Diagnostic::BadNesting { .. }));
}

#[test]
fn exit_with_open_context_is_rejected() {
    let mut b = IrBuilder::new();
    let cond = b.intern_symbol("c", DataType::Boolean, 1).unwrap();
    let result = b.intern_symbol("result", DataType::Integer, 1).unwrap();
    b.emit_if(cond, 1).unwrap();
    let err = b.emit_exit(result, 2).unwrap_err();
    assert!(matches!(err, Diagnostic::BadNesting { .. }));
}

#[test]
fn exit_with_open_marker_is_rejected() {
    let mut b = IrBuilder::new();
    let result = b.intern_symbol("result", DataType::Integer, 1).unwrap();
    b.emit_while_marker(1).unwrap();
    let err = b.emit_exit(result, 2).unwrap_err();
    assert!(matches!(err, Diagnostic::BadNesting { .. }));
}

#[test]
fn while_node_records_marker_index_within_its_own_list() {
    let mut b = IrBuilder::new();
    let i = b.intern_symbol("i", DataType::Integer, 1).unwrap();
    let three = b.intern_symbol("three", DataType::Integer, 1).unwrap();
    let cond = b.intern_symbol("cond", DataType::Boolean, 1).unwrap();

    b.emit_const_int(i, 0, 1).unwrap();
    b.emit_while_marker(2).unwrap();
    b.emit_const_int(three, 3, 2).unwrap();
    b.emit_numeric_comparison(cond, CompareOp::Less, i, three, 2).unwrap();
    b.emit_while(cond, 2).unwrap();
    b.emit_inc_dec(i, IncDecOp::Increment, 3).unwrap();
    b.emit_end(4).unwrap();
    let result = b.intern_symbol("result", DataType::Integer, 5).unwrap();
    b.emit_assign(result, i, 5).unwrap();
    b.emit_exit(result, 5).unwrap();

    let (nodes, _symbols) = b.finish();
    // [IntConst i, MarkerWhile, IntConst three, NumericComparison, While, Assign, Exit]
    match &nodes[4] {
        IrNode::While { marker_index, .. } => assert_eq!(*marker_index, 1),
        other => panic!("expected While, got {other:?}"),
    }
    assert!(matches!(nodes[1], IrNode::MarkerWhile { .. }));
}

#[test]
fn nested_if_builds_then_and_else_bodies() {
    let mut b = IrBuilder::new();
    let cond = b.intern_symbol("c", DataType::Boolean, 1).unwrap();
    let t = b.intern_symbol("t", DataType::Integer, 1).unwrap();

    b.emit_if(cond, 1).unwrap();
    b.emit_const_int(t, 10, 2).unwrap();
    b.emit_else(3).unwrap();
    b.emit_const_int(t, 20, 4).unwrap();
    b.emit_end(5).unwrap();

    let (nodes, _symbols) = b.finish();
    assert_eq!(nodes.len(), 1);
    match &nodes[0] {
        IrNode::If { then_body, else_body, .. } => {
            assert_eq!(then_body.len(), 1);
            assert_eq!(else_body.as_ref().unwrap().len(), 1);
        }
        other => panic!("expected If, got {other:?}"),
    }
}

#[test]
fn failed_emit_leaves_ir_unchanged() {
    let mut b = IrBuilder::new();
    let t = b.intern_symbol("t", DataType::Integer, 1).unwrap();
    let r = b.intern_symbol("r", DataType::Real, 1).unwrap();

    assert!(b.emit_assign(t, r, 7).is_err());
    let (nodes, _) = b.finish();
    assert!(nodes.is_empty());
}
