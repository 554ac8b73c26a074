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

//! # Pitwall Search
//!
//! The exhaustive search driver for the Pitwall race strategy solver.
//! This crate enumerates every candidate pit-stop strategy up to a
//! stop-count bound, simulates each through `pitwall_model`, and retains
//! the global minimum by total race time.
//!
//! ## Architecture
//!
//! * **`solver`**: `StrategySolver` and its builder, orchestrating
//!   enumeration, simulation, and incumbent tracking, one worker thread
//!   per stop count.
//! * **`incumbent`**: `SharedIncumbent`, a concurrent best-solution
//!   holder with an atomic upper bound and a mutex-guarded snapshot.
//! * **`monitor`**: the injected observation seam (`SearchMonitor`) with
//!   composite, no-op, and `tracing`-backed implementations.
//! * **`result`** / **`stats`**: the solver's outcome types and the
//!   statistics collected during a run.
//! * **`num`**: the unified numeric bounds (`SolverNumeric`) required of
//!   the millisecond time base.

pub mod incumbent;
pub mod monitor;
pub mod num;
pub mod result;
pub mod solver;
pub mod stats;
