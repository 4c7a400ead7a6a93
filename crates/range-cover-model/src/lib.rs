// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Problem Model
//!
//! Validated instances of the minimum interval-cover problem, the selection
//! type solvers produce, and a seeded generator for synthetic instances.
//!
//! A [`problem::CoverProblem`] owns a strictly monotone, gap-free sequence of
//! closed intervals; construction through [`problem::CoverProblem::try_new`]
//! checks the full input contract eagerly and reports violations as
//! structured errors. Solvers are free to assume a constructed problem is
//! well-formed.

pub mod err;
pub mod generator;
pub mod problem;
pub mod solution;

pub mod prelude {
    pub use crate::err::ProblemValidationError;
    pub use crate::generator::{GenConfig, GenConfigBuilder, InstanceGenerator};
    pub use crate::problem::CoverProblem;
    pub use crate::solution::CoverSelection;
}
