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

use crate::tyre::TyreType;
use std::sync::Arc;

/// A race stint: a contiguous run of laps driven on one tyre choice,
/// starting at a specific lap.
///
/// Tyre age (and with it the accumulated degradation effect) resets at
/// the start of every stint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stint<T> {
    start_lap: u32,
    tyre: Arc<TyreType<T>>,
}

impl<T> Stint<T> {
    /// Creates a new `Stint` beginning at `start_lap` on the given tyre.
    #[inline]
    pub fn new(start_lap: u32, tyre: Arc<TyreType<T>>) -> Self {
        Self { start_lap, tyre }
    }

    /// Returns the race lap on which this stint begins (1-based).
    #[inline]
    pub fn start_lap(&self) -> u32 {
        self.start_lap
    }

    /// Returns the tyre type used throughout this stint.
    #[inline]
    pub fn tyre(&self) -> &Arc<TyreType<T>> {
        &self.tyre
    }
}
