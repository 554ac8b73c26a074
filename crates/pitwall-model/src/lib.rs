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

//! # Pitwall Model
//!
//! **The Core Domain Model for the Pitwall Race Strategy Solver.**
//!
//! This crate defines the data structures describing a race and the
//! candidate strategies evaluated against it. It serves as the data
//! interchange layer between the problem definition (user input) and the
//! search engine (`pitwall_search`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **construction** and **searching**:
//!
//! * **`race`**: Contains the `Race` (immutable, validated problem input)
//!   and `RaceBuilder` (mutable, optimized for configuration).
//! * **`tyre`**: The immutable performance description of a tyre type.
//! * **`stint`**: A contiguous run of laps on one tyre choice.
//! * **`strategy`**: An ordered collection of stints plus race-wide
//!   parameters, with the lap-by-lap simulation engine.
//! * **`simulation`**: The immutable per-lap outcomes and derived total
//!   race time produced by a simulation.
//!
//! ## Design Philosophy
//!
//! 1.  **Fail-Fast**: Builders and mutators validate inputs eagerly so the
//!     search engine never encounters an invalid strategy.
//! 2.  **Shared Tyre Catalogue**: Tyre types are reference-counted; many
//!     stints across many candidate strategies point at the same value.
//! 3.  **Generic Time Base**: Durations are integer milliseconds, generic
//!     over the signed primitive width the caller prefers.

pub mod race;
pub mod simulation;
pub mod stint;
pub mod strategy;
pub mod tyre;
