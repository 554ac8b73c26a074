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

//! The immutable output of a strategy simulation.
//!
//! A [`SimulationResult`] holds one [`SimulatedLap`] per race lap, in lap
//! order, and the total race time derived from them. Both are produced
//! exactly once per simulated strategy and never mutated afterwards; the
//! total is computed at construction so repeated comparisons against the
//! incumbent cost a single read.

use num_traits::{PrimInt, Signed};
use pitwall_core::time::milliseconds_to_display_time;

/// A single simulated lap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulatedLap<T> {
    lap_number: u32,
    lap_time: T,
    tyre_type_name: String,
}

impl<T> SimulatedLap<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `SimulatedLap`.
    #[inline]
    pub fn new(lap_number: u32, lap_time: T, tyre_type_name: impl Into<String>) -> Self {
        Self {
            lap_number,
            lap_time,
            tyre_type_name: tyre_type_name.into(),
        }
    }

    /// Returns the lap number (1-based).
    #[inline]
    pub fn lap_number(&self) -> u32 {
        self.lap_number
    }

    /// Returns the simulated lap time in milliseconds.
    #[inline]
    pub fn lap_time(&self) -> T {
        self.lap_time
    }

    /// Returns the name of the tyre type in effect on this lap.
    #[inline]
    pub fn tyre_type_name(&self) -> &str {
        &self.tyre_type_name
    }
}

/// The result of a strategy simulation: the ordered per-lap outcomes and
/// the derived total race time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationResult<T> {
    laps: Vec<SimulatedLap<T>>,
    total_race_time: T,
}

impl<T> SimulationResult<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `SimulationResult` from the simulated laps, caching
    /// the total race time. The sum saturates at the numeric bound of `T`
    /// rather than wrapping.
    pub fn new(laps: Vec<SimulatedLap<T>>) -> Self {
        let total_race_time = laps
            .iter()
            .fold(T::zero(), |acc, lap| acc.saturating_add(lap.lap_time()));
        Self {
            laps,
            total_race_time,
        }
    }

    /// Returns the simulated laps, in lap order.
    #[inline]
    pub fn laps(&self) -> &[SimulatedLap<T>] {
        &self.laps
    }

    /// Returns the total race time in milliseconds, the sum of all lap
    /// times.
    #[inline]
    pub fn total_race_time(&self) -> T {
        self.total_race_time
    }

    /// Returns the number of simulated laps.
    #[inline]
    pub fn num_laps(&self) -> usize {
        self.laps.len()
    }
}

impl<T> std::fmt::Display for SimulationResult<T>
where
    T: PrimInt + Signed + Into<i64>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Simulation Result")?;
        writeln!(
            f,
            "   Total Race Time: {}",
            milliseconds_to_display_time(self.total_race_time.into())
        )?;
        writeln!(f)?;

        if self.laps.is_empty() {
            writeln!(f, "   (No laps simulated)")?;
            return Ok(());
        }

        writeln!(f, "   {:<6} | {:<12} | {:<12}", "Lap", "Tyre", "Time")?;
        writeln!(f, "   {:-<6}-+-{:-<12}-+-{:-<12}", "", "", "")?;
        for lap in &self.laps {
            writeln!(
                f,
                "   {:<6} | {:<12} | {:<12}",
                lap.lap_number(),
                lap.tyre_type_name(),
                milliseconds_to_display_time(lap.lap_time().into())
            )?;
        }

        Ok(())
    }
}
