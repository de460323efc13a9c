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

//! The structured IR: a sum-type node per operation, plus the builder that
//! type-checks every emit call before it ever joins the tree.

mod builder;
mod node;

pub use builder::IrBuilder;
pub use node::{CompareOp, IncDecOp, IrNode, LogicalOp, MathOp};

#[cfg(test)]
mod tests;
