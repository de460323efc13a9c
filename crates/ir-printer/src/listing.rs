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

use std::fmt;

/// One resolved line of the flat listing: a label, its final text (every
/// `GOTO` target already backpatched), and the source line it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintLine {
    pub label: u32,
    pub text: String,
    pub source_line: u32,
}

/// The finished, fully backpatched listing — the content of the
/// `2_intermediate` artifact, minus the file I/O (out of scope for this
/// crate; a caller writes [`Listing::render`]'s output to disk).
#[derive(Clone, Debug, Default)]
pub struct Listing {
    pub lines: Vec<PrintLine>,
}

impl Listing {
    /// Renders the `== INTERMEDIATE CODE ==`-bracketed text, padding the
    /// `[From: ...]` column to a tab-stop bucket keyed by text length,
    /// exactly as the listing this is modeled on (`generator.c::printCode`):
    /// under 8 characters gets four tabs, under 16 gets three, anything
    /// longer gets two.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("== INTERMEDIATE CODE ==\n");
        for line in &self.lines {
            let pad = if line.text.len() < 8 {
                "\t\t\t\t"
            } else if line.text.len() < 16 {
                "\t\t\t"
            } else {
                "\t\t"
            };
            out.push_str(&format!("L{}:\t{}{}[From: {}]\n", line.label, line.text, pad, line.source_line));
        }
        out.push_str("== INTERMEDIATE CODE ==\n");
        out
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
