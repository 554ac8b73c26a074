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

//! # Strategy Solver
//!
//! The exhaustive search driver. For every stop count from one up to the
//! requested maximum, the solver enumerates all combinations of pit laps
//! and all sequences of tyre types, simulates each resulting strategy,
//! and keeps the global minimum by total race time.
//!
//! ## Motivation
//!
//! The candidate space factorizes cleanly by stop count: a strategy with
//! `k` stops never shares a pit-lap set with one of `k + 1` stops. The
//! solver exploits this by running one worker thread per stop count over
//! a `SharedIncumbent`, so the workers only synchronize on the rare
//! improvement path.
//!
//! ## Highlights
//!
//! - **Exhaustive and exact**: every strategy with at most `max_stops`
//!   stops (and at least one) is simulated, so the returned strategy is
//!   the true minimum of the enumerated space.
//! - **Deterministic within a stop count**: candidates are enumerated in
//!   a fixed order and ties are broken in favor of the first enumerated
//!   candidate.
//! - **Observable**: `SearchMonitor` implementations attached through the
//!   builder receive enter/exit, per-candidate, and improvement events.
//!
//! ## Usage
//!
//! ```rust
//! use pitwall_model::race::RaceBuilder;
//! use pitwall_search::solver::StrategySolverBuilder;
//!
//! let mut builder = RaceBuilder::<i64>::new(10, 90_000, 20_000);
//! builder.add_tyre_type("soft", 0, 15);
//! builder.add_tyre_type("hard", 1_200, 4);
//! let race = builder.build();
//!
//! let solver = StrategySolverBuilder::new().build();
//! let outcome = solver.solve(&race, 2);
//! assert!(outcome.has_strategy());
//! ```

use crate::{
    incumbent::{InstallOutcome, SharedIncumbent},
    monitor::{composite::CompositeMonitor, search_monitor::SearchMonitor},
    num::SolverNumeric,
    result::SolverOutcome,
    stats::SolverStatisticsBuilder,
};
use pitwall_core::combinatorics::{combinations_without_repetition, permutations_with_repetition};
use pitwall_model::{race::Race, stint::Stint, strategy::Strategy};
use smallvec::SmallVec;
use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Instant,
};

/// An exhaustive pit-stop strategy solver.
///
/// Construction goes through `StrategySolverBuilder`. The solver itself
/// is stateless between runs; all per-run state lives on the stack of
/// `solve`.
pub struct StrategySolver<'a, T> {
    monitor: CompositeMonitor<'a, T>,
}

impl<T> std::fmt::Debug for StrategySolver<'_, T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategySolver")
            .field("monitor", &self.monitor)
            .finish()
    }
}

impl<T> Default for StrategySolver<'_, T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        StrategySolverBuilder::new().build()
    }
}

impl<T> StrategySolver<'_, T>
where
    T: SolverNumeric,
{
    /// Searches for the fastest strategy with between one and `max_stops`
    /// pit stops.
    ///
    /// Pit stops may happen before any lap from 2 up to the final lap
    /// exclusive, so races of one or two laps admit no stop at all and
    /// yield `SolverResult::NoCandidate`, as does `max_stops == 0`.
    ///
    /// One worker thread is spawned per stop count; all workers share one
    /// incumbent, so the result is the minimum across the whole space.
    pub fn solve(&self, race: &Race<T>, max_stops: u32) -> SolverOutcome<T> {
        let start = Instant::now();
        self.monitor.on_enter_search(race, max_stops);

        let incumbent = SharedIncumbent::new();
        let candidates = AtomicU64::new(0);
        let improvements = AtomicU64::new(0);

        std::thread::scope(|scope| {
            let incumbent = &incumbent;
            let candidates = &candidates;
            let improvements = &improvements;
            for stops in 1..=max_stops {
                scope.spawn(move || {
                    self.search_stop_count(race, stops, incumbent, candidates, improvements);
                });
            }
        });

        self.monitor.on_exit_search();

        let statistics = SolverStatisticsBuilder::new()
            .candidates_evaluated(candidates.into_inner())
            .improvements(improvements.into_inner())
            .used_threads(max_stops as usize)
            .solve_duration(start.elapsed())
            .build();

        match incumbent.into_best() {
            Some(best) => SolverOutcome::best(best, statistics),
            None => SolverOutcome::no_candidate(statistics),
        }
    }

    /// Enumerates and simulates every candidate with exactly `stops` pit
    /// stops, offering each to the shared incumbent.
    fn search_stop_count(
        &self,
        race: &Race<T>,
        stops: u32,
        incumbent: &SharedIncumbent<T>,
        candidates: &AtomicU64,
        improvements: &AtomicU64,
    ) {
        // A pit stop before lap 1 is meaningless and one before a lap
        // that does not exist cannot happen, so the choices are 2..laps.
        let pit_lap_choices: Vec<u32> = (2..race.laps()).collect();

        let pit_lap_sets = combinations_without_repetition(&pit_lap_choices, i64::from(stops))
            .expect("stop count is non-negative");
        let tyre_sequences = permutations_with_repetition(race.tyre_types(), i64::from(stops) + 1)
            .expect("stint count is non-negative");

        for pit_laps in &pit_lap_sets {
            let mut stint_start_laps: SmallVec<[u32; 8]> = SmallVec::new();
            stint_start_laps.push(1);
            stint_start_laps.extend(pit_laps.iter().copied());

            for tyre_sequence in &tyre_sequences {
                self.monitor
                    .on_candidate_tested(&stint_start_laps, tyre_sequence);
                candidates.fetch_add(1, Ordering::Relaxed);

                let mut strategy = Strategy::new(
                    race.laps(),
                    race.optimal_lap_time(),
                    race.pitstop_delay(),
                );
                for (start_lap, tyre) in stint_start_laps.iter().zip(tyre_sequence.iter()) {
                    strategy.add_stint(Stint::new(*start_lap, Arc::clone(tyre)));
                }

                let result = strategy.simulate();
                let total: i64 = result.total_race_time().into();

                if let InstallOutcome::Installed { previous } =
                    incumbent.try_install(strategy, result)
                {
                    improvements.fetch_add(1, Ordering::Relaxed);
                    self.monitor
                        .on_improvement(&stint_start_laps, tyre_sequence, previous, total);
                }
            }
        }
    }
}

/// Builder for `StrategySolver`.
///
/// Monitors added here are wrapped in a `CompositeMonitor` and receive
/// every search event; without any monitor the solver runs silently.
pub struct StrategySolverBuilder<'a, T> {
    monitor: CompositeMonitor<'a, T>,
}

impl<T> Default for StrategySolverBuilder<'_, T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> StrategySolverBuilder<'a, T>
where
    T: SolverNumeric,
{
    /// Creates a builder with no monitors attached.
    #[inline]
    pub fn new() -> Self {
        Self {
            monitor: CompositeMonitor::new(),
        }
    }

    /// Attaches a monitor to the solver.
    #[inline]
    pub fn add_monitor<M>(mut self, monitor: M) -> Self
    where
        M: SearchMonitor<T> + 'a,
    {
        self.monitor.add_monitor(monitor);
        self
    }

    /// Attaches an already boxed monitor to the solver.
    #[inline]
    pub fn add_monitor_boxed(mut self, monitor: Box<dyn SearchMonitor<T> + 'a>) -> Self {
        self.monitor.add_monitor_boxed(monitor);
        self
    }

    /// Builds the solver.
    #[inline]
    pub fn build(self) -> StrategySolver<'a, T> {
        StrategySolver {
            monitor: self.monitor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::SolverResult;
    use pitwall_model::race::RaceBuilder;
    use pitwall_model::tyre::TyreType;
    use std::sync::Mutex;

    fn single_tyre_race(laps: u32) -> Race<i64> {
        let mut builder = RaceBuilder::<i64>::new(laps, 90_000, 20_000);
        builder.add_tyre_type("soft", 0, 0);
        builder.build()
    }

    #[test]
    fn test_two_lap_race_has_no_candidates() {
        let race = single_tyre_race(2);
        let solver = StrategySolverBuilder::new().build();
        let outcome = solver.solve(&race, 3);

        assert_eq!(*outcome.result(), SolverResult::NoCandidate);
        assert_eq!(outcome.statistics().candidates_evaluated, 0);
        assert_eq!(outcome.statistics().improvements, 0);
        assert_eq!(outcome.statistics().used_threads, 3);
    }

    #[test]
    fn test_zero_max_stops_has_no_candidates() {
        let race = single_tyre_race(10);
        let solver = StrategySolverBuilder::new().build();
        let outcome = solver.solve(&race, 0);

        assert_eq!(*outcome.result(), SolverResult::NoCandidate);
        assert_eq!(outcome.statistics().candidates_evaluated, 0);
    }

    #[test]
    fn test_single_tyre_single_stop() {
        // No degradation, so every one-stop strategy costs
        // 4 * 90_000 + 20_000 regardless of the pit lap.
        let race = single_tyre_race(4);
        let solver = StrategySolverBuilder::new().build();
        let outcome = solver.solve(&race, 1);

        assert_eq!(outcome.statistics().candidates_evaluated, 2);
        assert_eq!(outcome.statistics().improvements, 1);

        let best = outcome.best_strategy().expect("best strategy expected");
        assert_eq!(best.total_race_time(), 380_000);
        assert_eq!(best.strategy().stints().len(), 2);
        assert_eq!(best.strategy().stints()[0].start_lap(), 1);
        // Equal-cost candidates never replace the incumbent, so the
        // first enumerated pit lap wins.
        assert_eq!(best.strategy().stints()[1].start_lap(), 2);
    }

    #[test]
    fn test_two_tyres_prefers_the_faster_compound() {
        let mut builder = RaceBuilder::<i64>::new(4, 90_000, 20_000);
        builder.add_tyre_type("soft", 0, 0);
        builder.add_tyre_type("hard", 1_000, 0);
        let race = builder.build();

        let solver = StrategySolverBuilder::new().build();
        let outcome = solver.solve(&race, 1);

        // 2 pit-lap sets times 2^2 tyre sequences.
        assert_eq!(outcome.statistics().candidates_evaluated, 8);
        assert_eq!(outcome.statistics().improvements, 1);

        let best = outcome.best_strategy().expect("best strategy expected");
        assert_eq!(best.total_race_time(), 380_000);
        for stint in best.strategy().stints() {
            assert_eq!(stint.tyre().name(), "soft");
        }
    }

    #[test]
    fn test_degradation_drives_pit_lap_choice() {
        // The degradation factor of 1000 doubles the lap time per lap of
        // tyre age, so the late stop (fewer old laps) must win:
        //   pit before lap 2: 90_000 + 91_000 + 180_000 + 360_000
        //   pit before lap 3: 90_000 + 180_000 + 91_000 + 180_000
        let mut builder = RaceBuilder::<i64>::new(4, 90_000, 1_000);
        builder.add_tyre_type("soft", 0, 1_000);
        let race = builder.build();

        let solver = StrategySolverBuilder::new().build();
        let outcome = solver.solve(&race, 1);

        assert_eq!(outcome.statistics().candidates_evaluated, 2);
        assert_eq!(outcome.statistics().improvements, 2);

        let best = outcome.best_strategy().expect("best strategy expected");
        assert_eq!(best.total_race_time(), 541_000);
        assert_eq!(best.strategy().stints()[1].start_lap(), 3);
    }

    #[test]
    fn test_minimum_across_stop_counts() {
        // Without degradation every extra stop only adds pit delay, so
        // the one-stop minimum (6 * 90_000 + 20_000) beats every
        // two-stop candidate.
        let race = single_tyre_race(6);
        let solver = StrategySolverBuilder::new().build();
        let outcome = solver.solve(&race, 2);

        // One stop: C(4, 1) = 4 pit-lap sets. Two stops: C(4, 2) = 6.
        assert_eq!(outcome.statistics().candidates_evaluated, 10);
        assert!(outcome.statistics().improvements >= 1);
        assert_eq!(outcome.statistics().used_threads, 2);

        let best = outcome.best_strategy().expect("best strategy expected");
        assert_eq!(best.total_race_time(), 560_000);
        assert_eq!(best.strategy().stints().len(), 2);
    }

    /// Counts events; shared across worker threads through a mutex.
    struct CountingMonitor {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl SearchMonitor<i64> for CountingMonitor {
        fn name(&self) -> &str {
            "CountingMonitor"
        }

        fn on_enter_search(&self, _race: &Race<i64>, _max_stops: u32) {
            self.events.lock().unwrap().push("enter".to_string());
        }

        fn on_candidate_tested(
            &self,
            _stint_start_laps: &[u32],
            _tyre_sequence: &[Arc<TyreType<i64>>],
        ) {
            self.events.lock().unwrap().push("tested".to_string());
        }

        fn on_improvement(
            &self,
            _stint_start_laps: &[u32],
            _tyre_sequence: &[Arc<TyreType<i64>>],
            _previous_best: Option<i64>,
            _new_best: i64,
        ) {
            self.events.lock().unwrap().push("improved".to_string());
        }

        fn on_exit_search(&self) {
            self.events.lock().unwrap().push("exit".to_string());
        }
    }

    #[test]
    fn test_monitor_receives_search_events() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let race = single_tyre_race(4);

        let solver = StrategySolverBuilder::new()
            .add_monitor(CountingMonitor {
                events: Arc::clone(&events),
            })
            .build();
        let outcome = solver.solve(&race, 1);

        let events = events.lock().unwrap();
        assert_eq!(events.first().map(String::as_str), Some("enter"));
        assert_eq!(events.last().map(String::as_str), Some("exit"));

        let tested = events.iter().filter(|e| e.as_str() == "tested").count() as u64;
        let improved = events.iter().filter(|e| e.as_str() == "improved").count() as u64;
        assert_eq!(tested, outcome.statistics().candidates_evaluated);
        assert_eq!(improved, outcome.statistics().improvements);
    }
}
