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

//! # Pitwall Core
//!
//! Foundational, dependency-free building blocks for the Pitwall race
//! strategy ecosystem. This crate consolidates the pure, reusable pieces
//! that higher-level model and solver crates are built on.
//!
//! ## Modules
//!
//! - `combinatorics`: exhaustive, iterative generators for sequences with
//!   repetition (permutations) and distinct selections (combinations),
//!   with deterministic lexicographic output order.
//! - `time`: human-readable formatting of millisecond durations.
//!
//! ## Purpose
//!
//! The strategy search enumerates its entire candidate space, so the
//! generators here must be provably duplicate-free and omission-free.
//! Keeping them in a leaf crate with no dependencies makes them trivial
//! to test exhaustively and reuse in benchmarks and tooling.

pub mod combinatorics;
pub mod time;
