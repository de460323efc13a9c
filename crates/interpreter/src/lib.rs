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

//! Tree-walking interpreter: executes the structured IR directly, with no
//! intermediate bytecode, producing a trace text and a final variable
//! table alongside whatever `EXIT` returned.

mod interpreter;
mod value;

pub use interpreter::{ExecutionReport, Interpreter};
pub use value::{Value, ValueTable};
