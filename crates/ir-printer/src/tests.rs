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

use rilang_errors::DataType;
use rilang_ir::{CompareOp, IncDecOp, IrBuilder};

use super::*;

fn texts(listing: &Listing) -> Vec<String> {
    listing.lines.iter().map(|l| l.text.clone()).collect()
}

#[test]
fn straight_line_statements_get_sequential_labels() {
    let mut b = IrBuilder::new();
    let t = b.intern_symbol("t", DataType::Integer, 1).unwrap();
    b.emit_const_int(t, 10, 1).unwrap();
    b.emit_const_int(t, 20, 2).unwrap();
    let (nodes, symbols) = b.finish();

    let listing = Printer::linearize(&nodes, &symbols).unwrap();
    assert_eq!(texts(&listing), vec!["t := 10", "t := 20"]);
    assert_eq!(listing.lines[0].label, 1);
    assert_eq!(listing.lines[1].label, 2);
    assert_eq!(listing.lines[1].source_line, 2);
}

#[test]
fn if_without_else_skips_past_body() {
    let mut b = IrBuilder::new();
    let cond = b.intern_symbol("cond", DataType::Boolean, 1).unwrap();
    let t = b.intern_symbol("t", DataType::Integer, 1).unwrap();
    b.emit_if(cond, 1).unwrap();
    b.emit_const_int(t, 10, 2).unwrap();
    b.emit_end(3).unwrap();
    let (nodes, symbols) = b.finish();

    let listing = Printer::linearize(&nodes, &symbols).unwrap();
    assert_eq!(texts(&listing), vec!["IF cond GOTO 3", "GOTO 4", "t := 10"]);
}

#[test]
fn if_with_else_both_branches_present() {
    let mut b = IrBuilder::new();
    let cond = b.intern_symbol("cond", DataType::Boolean, 1).unwrap();
    let t = b.intern_symbol("t", DataType::Integer, 1).unwrap();
    b.emit_if(cond, 1).unwrap();
    b.emit_const_int(t, 10, 2).unwrap();
    b.emit_else(3).unwrap();
    b.emit_const_int(t, 20, 4).unwrap();
    b.emit_end(5).unwrap();
    let (nodes, symbols) = b.finish();

    let listing = Printer::linearize(&nodes, &symbols).unwrap();
    assert_eq!(
        texts(&listing),
        vec!["IF cond GOTO 3", "GOTO 5", "t := 10", "GOTO 6", "t := 20"]
    );
}

#[test]
fn while_loop_jumps_back_to_its_marker() {
    let mut b = IrBuilder::new();
    let i = b.intern_symbol("i", DataType::Integer, 1).unwrap();
    let three = b.intern_symbol("three", DataType::Integer, 1).unwrap();
    let cond = b.intern_symbol("cond", DataType::Boolean, 1).unwrap();
    let result = b.intern_symbol("result", DataType::Integer, 1).unwrap();

    b.emit_const_int(i, 0, 1).unwrap();
    b.emit_while_marker(2).unwrap();
    b.emit_const_int(three, 3, 2).unwrap();
    b.emit_numeric_comparison(cond, CompareOp::Less, i, three, 2).unwrap();
    b.emit_while(cond, 2).unwrap();
    b.emit_inc_dec(i, IncDecOp::Increment, 3).unwrap();
    b.emit_end(4).unwrap();
    b.emit_assign(result, i, 5).unwrap();
    b.emit_exit(result, 5).unwrap();
    let (nodes, symbols) = b.finish();

    let listing = Printer::linearize(&nodes, &symbols).unwrap();
    assert_eq!(
        texts(&listing),
        vec![
            "i := 0",
            "three := 3",
            "cond := i < three",
            "IF cond GOTO 6",
            "GOTO 8",
            "i := i + 1",
            "GOTO 2",
            "result := i",
            "RETURN result",
        ]
    );
}

#[test]
fn nested_while_inner_marker_does_not_clobber_outer_target() {
    let mut b = IrBuilder::new();
    let outer_cond = b.intern_symbol("outer_cond", DataType::Boolean, 1).unwrap();
    let inner_cond = b.intern_symbol("inner_cond", DataType::Boolean, 1).unwrap();
    let i = b.intern_symbol("i", DataType::Integer, 1).unwrap();

    b.emit_while_marker(1).unwrap();
    b.emit_while(outer_cond, 1).unwrap();
    b.emit_while_marker(2).unwrap();
    b.emit_while(inner_cond, 2).unwrap();
    b.emit_inc_dec(i, IncDecOp::Increment, 3).unwrap();
    b.emit_end(4).unwrap(); // closes inner while
    b.emit_end(5).unwrap(); // closes outer while
    let (nodes, symbols) = b.finish();

    let listing = Printer::linearize(&nodes, &symbols).unwrap();
    // Outer marker resolves to label 1 (nothing precedes it); inner marker
    // resolves to label 1 as well, since the inner MARKER_WHILE is the very
    // first thing inside the outer loop's body. The outer loop's own
    // retest GOTO must still target label 1, not whatever the inner loop's
    // retest last left behind.
    assert_eq!(texts(&listing).last().unwrap(), "GOTO 1");
    assert_eq!(texts(&listing).iter().filter(|t| *t == "GOTO 1").count(), 1);
    assert_eq!(texts(&listing).iter().filter(|t| *t == "GOTO 3").count(), 1);
}

#[test]
fn marker_while_and_nop_produce_no_line() {
    let mut b = IrBuilder::new();
    let cond = b.intern_symbol("cond", DataType::Boolean, 1).unwrap();
    b.emit_while_marker(1).unwrap();
    b.emit_while(cond, 1).unwrap();
    b.emit_end(2).unwrap();
    let (nodes, symbols) = b.finish();

    let listing = Printer::linearize(&nodes, &symbols).unwrap();
    // MARKER_WHILE itself contributes no line: IF-GOTO, the forward GOTO
    // placeholder, and the closing backward GOTO are the loop's only three.
    assert_eq!(listing.lines.len(), 3);
    assert_eq!(texts(&listing), vec!["IF cond GOTO 3", "GOTO 4", "GOTO 1"]);
}

#[test]
fn render_pads_the_from_column_by_text_length() {
    let mut b = IrBuilder::new();
    let cond = b.intern_symbol("cond", DataType::Boolean, 1).unwrap();
    let three = b.intern_symbol("three", DataType::Integer, 1).unwrap();
    let i = b.intern_symbol("i", DataType::Integer, 1).unwrap();
    b.emit_const_int(i, 0, 1).unwrap();
    b.emit_numeric_comparison(cond, CompareOp::Less, i, three, 2).unwrap();
    let (nodes, symbols) = b.finish();

    let listing = Printer::linearize(&nodes, &symbols).unwrap();
    let rendered = listing.render();
    assert!(rendered.contains("L1:\ti := 0\t\t\t\t[From: 1]\n"));
    assert!(rendered.contains("L2:\tcond := i < three\t\t[From: 2]\n"));
}
