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

//! # Tracing Monitor
//!
//! A `SearchMonitor` that reports search progress through the `tracing`
//! facade. Candidate events are emitted at `debug` level because their
//! volume grows combinatorially with race length; lifecycle and
//! improvement events use `info`.

use crate::{monitor::search_monitor::SearchMonitor, num::SolverNumeric};
use pitwall_model::{race::Race, tyre::TyreType};
use std::sync::Arc;

/// A monitor that logs search events via `tracing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TracingMonitor;

impl TracingMonitor {
    /// Creates a new `TracingMonitor`.
    #[inline]
    pub fn new() -> Self {
        TracingMonitor
    }
}

fn tyre_names<T>(tyre_sequence: &[Arc<TyreType<T>>]) -> String
where
    T: SolverNumeric,
{
    tyre_sequence
        .iter()
        .map(|t| t.name())
        .collect::<Vec<&str>>()
        .join(", ")
}

impl<T> SearchMonitor<T> for TracingMonitor
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "TracingMonitor"
    }

    fn on_enter_search(&self, race: &Race<T>, max_stops: u32) {
        tracing::info!(
            laps = race.laps(),
            optimal_lap_time = %race.optimal_lap_time(),
            pitstop_delay = %race.pitstop_delay(),
            tyre_types = race.tyre_types().len(),
            max_stops,
            "entering strategy search"
        );
    }

    fn on_candidate_tested(&self, stint_start_laps: &[u32], tyre_sequence: &[Arc<TyreType<T>>]) {
        tracing::debug!(
            ?stint_start_laps,
            tyres = %tyre_names(tyre_sequence),
            "testing candidate strategy"
        );
    }

    fn on_improvement(
        &self,
        stint_start_laps: &[u32],
        tyre_sequence: &[Arc<TyreType<T>>],
        previous_best: Option<i64>,
        new_best: i64,
    ) {
        tracing::info!(
            ?stint_start_laps,
            tyres = %tyre_names(tyre_sequence),
            ?previous_best,
            new_best,
            "found a better strategy"
        );
    }

    fn on_exit_search(&self) {
        tracing::info!("strategy search finished");
    }
}
