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

//! # Solver Numeric Trait
//!
//! Unified numeric bounds for the search driver. `SolverNumeric` collects
//! the capabilities the solver needs from its millisecond time base into a
//! single alias: intrinsic integer traits (`PrimInt`, `Signed`), a
//! widening conversion into `i64` for the shared incumbent's atomic upper
//! bound, formatting for trace events, and `Send + Sync` for the
//! per-stop-count worker threads.
//!
//! This admits the signed primitives up to `i64`; `i128` is intentionally
//! excluded because the atomic upper bound is an `AtomicI64`.

use num_traits::{PrimInt, Signed};

/// A trait alias for numeric types that can serve as the solver's
/// millisecond time base. These are usually the signed integer types
/// `i8`, `i16`, `i32` and `i64`.
pub trait SolverNumeric:
    PrimInt + Signed + Into<i64> + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

impl<T> SolverNumeric for T where
    T: PrimInt + Signed + Into<i64> + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}
