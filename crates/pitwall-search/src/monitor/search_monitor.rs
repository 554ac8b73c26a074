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

//! # Search Monitor Trait
//!
//! The observation seam of the search driver. A `SearchMonitor` receives
//! callbacks as the solver enumerates candidates and improves its
//! incumbent; implementations range from a no-op to a `tracing`-backed
//! logger. Monitors take `&self` and require `Send + Sync` because the
//! per-stop-count worker threads share one monitor set.

use crate::num::SolverNumeric;
use pitwall_model::{race::Race, tyre::TyreType};
use std::sync::Arc;

/// Receives search lifecycle events.
///
/// All methods have empty default bodies, so implementations only
/// override the events they care about.
pub trait SearchMonitor<T>: Send + Sync
where
    T: SolverNumeric,
{
    /// Returns the monitor's name, used in `Debug` output.
    fn name(&self) -> &str;

    /// Called once before enumeration starts.
    fn on_enter_search(&self, race: &Race<T>, max_stops: u32) {
        let _ = (race, max_stops);
    }

    /// Called for every candidate strategy right before it is simulated.
    /// `stint_start_laps` lists the first lap of each stint (always
    /// beginning with lap 1) and `tyre_sequence` the tyre fitted for each
    /// stint, index-aligned.
    fn on_candidate_tested(&self, stint_start_laps: &[u32], tyre_sequence: &[Arc<TyreType<T>>]) {
        let _ = (stint_start_laps, tyre_sequence);
    }

    /// Called whenever a candidate replaces the incumbent. `previous_best`
    /// is the replaced total race time in milliseconds, or `None` for the
    /// first incumbent.
    fn on_improvement(
        &self,
        stint_start_laps: &[u32],
        tyre_sequence: &[Arc<TyreType<T>>],
        previous_best: Option<i64>,
        new_best: i64,
    ) {
        let _ = (stint_start_laps, tyre_sequence, previous_best, new_best);
    }

    /// Called once after enumeration finishes.
    fn on_exit_search(&self) {}
}

impl<T> std::fmt::Debug for dyn SearchMonitor<T> + '_
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn SearchMonitor<T> + '_
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}
