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

//! # Race Strategy and Lap-Time Simulation
//!
//! A [`Strategy`] pairs race-wide parameters (lap count, optimal lap time,
//! pit-stop penalty) with an ordered collection of stints, and turns a
//! fully specified candidate into per-lap times via [`Strategy::simulate`].
//!
//! ## Invariants
//!
//! The stint collection is kept sorted ascending by start lap at all
//! times: insertion re-establishes the order immediately, so no caller
//! ever observes an unsorted strategy. No two stints may share a start
//! lap, every start lap lies in `[1, laps]`, and a simulated strategy must
//! open with a stint on lap 1. Violations are programming errors in the
//! enumeration layer and fail fast.
//!
//! ## Lap-time model
//!
//! For a lap at tyre age `a` (zero on the first lap of a stint):
//!
//! ```text
//! lap_time = trunc((optimal + tyre.delta) * (1 + tyre.degradation / 1000)^a)
//!          + (pitstop_delay on the first lap of every stint but the first)
//! ```
//!
//! The exponentiation is carried out over `f64` (degradation compounds
//! continuously per lap of tyre age); truncation to integer milliseconds
//! happens after applying degradation and before adding the pit penalty,
//! which is charged to the first lap of the *new* stint.

use crate::{
    simulation::{SimulatedLap, SimulationResult},
    stint::Stint,
};
use num_traits::{NumCast, PrimInt, Signed};

/// A race strategy: race-wide parameters plus an ordered-by-start-lap
/// collection of stints.
///
/// Candidates are constructed per enumeration step during search and
/// discarded once simulated, except for the retained best.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Strategy<T> {
    laps: u32,
    optimal_lap_time: T,
    pitstop_delay: T,
    stints: Vec<Stint<T>>,
}

impl<T> Strategy<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `Strategy` with no stints.
    ///
    /// `optimal_lap_time` is the theoretical best lap with zero
    /// degradation and no tyre penalty; `pitstop_delay` is the time added
    /// to a lap in which a pit stop occurs. Both in milliseconds.
    #[inline]
    pub fn new(laps: u32, optimal_lap_time: T, pitstop_delay: T) -> Self {
        Self {
            laps,
            optimal_lap_time,
            pitstop_delay,
            stints: Vec::new(),
        }
    }

    /// Returns the race length in laps.
    #[inline]
    pub fn laps(&self) -> u32 {
        self.laps
    }

    /// Returns the optimal lap time in milliseconds.
    #[inline]
    pub fn optimal_lap_time(&self) -> T {
        self.optimal_lap_time
    }

    /// Returns the pit-stop penalty in milliseconds.
    #[inline]
    pub fn pitstop_delay(&self) -> T {
        self.pitstop_delay
    }

    /// Returns the stints, sorted ascending by start lap.
    #[inline]
    pub fn stints(&self) -> &[Stint<T>] {
        &self.stints
    }

    /// Adds a stint to the strategy, re-establishing the ascending order
    /// by start lap immediately.
    ///
    /// # Panics
    ///
    /// Panics if the stint's start lap lies outside `[1, laps]` or if a
    /// stint with the same start lap was already added.
    pub fn add_stint(&mut self, stint: Stint<T>) {
        assert!(
            stint.start_lap() >= 1 && stint.start_lap() <= self.laps,
            "called `Strategy::add_stint` with start lap out of range: the race has {} laps but the stint starts at lap {}",
            self.laps,
            stint.start_lap()
        );

        match self
            .stints
            .binary_search_by_key(&stint.start_lap(), |s| s.start_lap())
        {
            Ok(_) => panic!(
                "called `Strategy::add_stint` with duplicate start lap: {}",
                stint.start_lap()
            ),
            Err(position) => self.stints.insert(position, stint),
        }
    }

    /// Simulates the strategy lap by lap and returns the result.
    ///
    /// Simulation is pure: calling it twice on the same strategy yields
    /// identical results.
    ///
    /// # Panics
    ///
    /// Panics if the strategy has no stints or its first stint does not
    /// start at lap 1.
    pub fn simulate(&self) -> SimulationResult<T> {
        assert!(
            !self.stints.is_empty(),
            "called `Strategy::simulate` on a strategy with no stints"
        );
        assert!(
            self.stints[0].start_lap() == 1,
            "called `Strategy::simulate` on a strategy whose first stint starts at lap {} instead of lap 1",
            self.stints[0].start_lap()
        );

        let mut laps = Vec::with_capacity(self.laps as usize);
        let mut current = 0usize;

        for lap in 1..=self.laps {
            let mut pitted = false;
            if let Some(next) = self.stints.get(current + 1) {
                if next.start_lap() == lap {
                    current += 1;
                    pitted = true;
                }
            }

            let stint = &self.stints[current];
            let tyre = stint.tyre();
            // 0-based tyre age; degradation resets at every stint start.
            let age = (lap - stint.start_lap()) as i32;

            let base = self
                .optimal_lap_time
                .saturating_add(tyre.delta_over_optimal_lap_time())
                .to_f64()
                .unwrap_or(f64::MAX);
            let multiplier =
                1.0 + tyre.degradation_factor().to_f64().unwrap_or(0.0) / 1000.0;
            let degraded = (base * multiplier.powi(age)).trunc();

            // Truncate before charging the (integer) pit penalty; saturate
            // rather than wrap if the degraded time no longer fits in T.
            let mut lap_time = <T as NumCast>::from(degraded).unwrap_or_else(T::max_value);
            if pitted {
                lap_time = lap_time.saturating_add(self.pitstop_delay);
            }

            laps.push(SimulatedLap::new(lap, lap_time, tyre.name()));
        }

        SimulationResult::new(laps)
    }
}
