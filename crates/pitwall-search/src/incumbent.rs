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

//! # Shared Incumbent (Best Strategy Holder)
//!
//! A concurrent container for the best strategy discovered so far during
//! search. It exposes a fast, lock-free upper bound via an atomic and
//! stores the actual `BestStrategy<T>` behind a `Mutex` as the source of
//! truth. Designed for the per-stop-count worker threads of the
//! exhaustive search, each of which proposes improvements independently.
//!
//! ## Motivation
//!
//! - Fast rejection: a cheap atomic upper bound short-circuits attempts
//!   to install obviously worse candidates without locking. Almost every
//!   candidate in an exhaustive sweep is worse than the incumbent, so
//!   this path dominates.
//! - Correctness by locking: the authoritative incumbent is protected by
//!   a `Mutex`, and the strict-improvement comparison is repeated under
//!   the lock before installation.
//! - Simple sentinel: `upper_bound` starts at `i64::MAX`, meaning "no
//!   incumbent yet."
//!
//! Installation requires *strict* improvement: a candidate with a total
//! race time equal to the incumbent's is rejected, so within one worker
//! the first-enumerated candidate wins ties.

use crate::{num::SolverNumeric, result::BestStrategy};
use pitwall_model::{simulation::SimulationResult, strategy::Strategy};
use std::sync::{
    Mutex,
    atomic::{AtomicI64, Ordering},
};

/// The outcome of offering a candidate to the incumbent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The candidate was strictly better and is now the incumbent.
    /// `previous` carries the replaced total race time, or `None` if this
    /// was the first candidate ever installed.
    Installed { previous: Option<i64> },
    /// The candidate was not strictly better than the incumbent.
    Rejected,
}

impl InstallOutcome {
    /// Returns `true` if the candidate was installed.
    #[inline]
    pub fn is_installed(&self) -> bool {
        matches!(self, InstallOutcome::Installed { .. })
    }
}

/// A concurrent holder for the best (incumbent) strategy found during
/// search.
///
/// This structure maintains:
/// - an `AtomicI64` upper bound (total race time) for fast, lock-free
///   reads, and
/// - a `Mutex<Option<BestStrategy<T>>>` for the actual strategy, which is
///   the source of truth.
///
/// The upper bound is loaded/stored with `Ordering::Relaxed`; it only
/// serves to short-circuit work, and all correctness-sensitive state is
/// synchronized via the `Mutex`.
#[derive(Debug)]
pub struct SharedIncumbent<T> {
    /// Total race time of the incumbent, stored as `i64` for atomic
    /// access. `i64::MAX` means "no incumbent installed yet."
    upper_bound: AtomicI64,

    /// The incumbent strategy, protected by a mutex for safe concurrent
    /// access.
    best: Mutex<Option<BestStrategy<T>>>,
}

impl<T> Default for SharedIncumbent<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SharedIncumbent<T> {
    /// Creates a new shared incumbent with no strategy installed.
    #[inline]
    pub fn new() -> Self {
        SharedIncumbent {
            upper_bound: AtomicI64::new(i64::MAX),
            best: Mutex::new(None),
        }
    }

    /// Returns the current upper bound (total race time of the incumbent,
    /// or `i64::MAX` if none is installed).
    #[inline]
    pub fn upper_bound(&self) -> i64 {
        self.upper_bound.load(Ordering::Relaxed)
    }
}

impl<T> SharedIncumbent<T>
where
    T: SolverNumeric,
{
    /// Returns `true` if no strategy has been installed yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.best.lock().unwrap().is_none()
    }

    /// Returns a cloned snapshot of the current incumbent, if any.
    #[inline]
    pub fn snapshot(&self) -> Option<BestStrategy<T>> {
        let guard = self.best.lock().unwrap();
        guard.clone()
    }

    /// Consumes the incumbent, returning the final best strategy.
    #[inline]
    pub fn into_best(self) -> Option<BestStrategy<T>> {
        self.best.into_inner().unwrap()
    }

    /// Offers a candidate to the incumbent, installing it only on strict
    /// improvement of the total race time.
    ///
    /// Ownership of the candidate transfers in: every candidate in the
    /// search is discarded after evaluation anyway, so rejection simply
    /// drops it instead of forcing a clone on the install path.
    pub fn try_install(
        &self,
        strategy: Strategy<T>,
        result: SimulationResult<T>,
    ) -> InstallOutcome {
        let candidate_total: i64 = result.total_race_time().into();

        // Cheap atomic pre-check. We are minimizing, so lower is better.
        if candidate_total >= self.upper_bound() {
            return InstallOutcome::Rejected;
        }

        let mut guard = self.best.lock().unwrap();
        // Another thread might have installed a better strategy while we
        // were waiting for the lock; compare against the actual incumbent,
        // not the atomic hint read earlier.
        let previous: Option<i64> = guard.as_ref().map(|b| b.total_race_time().into());
        if let Some(previous_total) = previous {
            if candidate_total >= previous_total {
                return InstallOutcome::Rejected;
            }
        }

        *guard = Some(BestStrategy::new(strategy, result));
        self.upper_bound.store(candidate_total, Ordering::Relaxed);

        InstallOutcome::Installed { previous }
    }
}

impl<T> std::fmt::Display for SharedIncumbent<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Incumbent(upper_bound: {})", self.upper_bound())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitwall_model::{stint::Stint, tyre::TyreType};
    use std::sync::Arc;
    use std::thread;

    /// Builds a single-stint strategy whose total race time is exactly
    /// `lap_time * laps`.
    fn candidate(lap_time: i64, laps: u32) -> (Strategy<i64>, SimulationResult<i64>) {
        let tyre = Arc::new(TyreType::new("soft", 0i64, 0i64));
        let mut strategy = Strategy::new(laps, lap_time, 0);
        strategy.add_stint(Stint::new(1, tyre));
        let result = strategy.simulate();
        (strategy, result)
    }

    #[test]
    fn test_initial_state() {
        let inc: SharedIncumbent<i64> = SharedIncumbent::new();
        assert_eq!(inc.upper_bound(), i64::MAX);
        assert!(inc.is_empty());
        assert!(inc.snapshot().is_none());
    }

    #[test]
    fn test_install_better_updates_upper_bound_and_snapshot() {
        let inc: SharedIncumbent<i64> = SharedIncumbent::new();
        let (strategy, result) = candidate(90_000, 2);

        let outcome = inc.try_install(strategy, result);
        assert_eq!(outcome, InstallOutcome::Installed { previous: None });
        assert_eq!(inc.upper_bound(), 180_000);

        let snap = inc.snapshot().expect("snapshot should be Some");
        assert_eq!(snap.total_race_time(), 180_000);
    }

    #[test]
    fn test_reject_worse_or_equal_candidates() {
        let inc: SharedIncumbent<i64> = SharedIncumbent::new();

        let (s, r) = candidate(90_000, 2);
        assert!(inc.try_install(s, r).is_installed());

        let (worse_s, worse_r) = candidate(95_000, 2);
        assert_eq!(inc.try_install(worse_s, worse_r), InstallOutcome::Rejected);
        assert_eq!(inc.upper_bound(), 180_000);

        let (equal_s, equal_r) = candidate(90_000, 2);
        assert_eq!(inc.try_install(equal_s, equal_r), InstallOutcome::Rejected);
        assert_eq!(inc.upper_bound(), 180_000);
    }

    #[test]
    fn test_install_reports_the_replaced_total() {
        let inc: SharedIncumbent<i64> = SharedIncumbent::new();

        let (s1, r1) = candidate(95_000, 2);
        assert_eq!(
            inc.try_install(s1, r1),
            InstallOutcome::Installed { previous: None }
        );

        let (s2, r2) = candidate(90_000, 2);
        assert_eq!(
            inc.try_install(s2, r2),
            InstallOutcome::Installed {
                previous: Some(190_000)
            }
        );
    }

    #[test]
    fn test_into_best_returns_the_final_incumbent() {
        let inc: SharedIncumbent<i64> = SharedIncumbent::new();
        let (s, r) = candidate(91_000, 3);
        assert!(inc.try_install(s, r).is_installed());

        let best = inc.into_best().expect("incumbent should be Some");
        assert_eq!(best.total_race_time(), 273_000);
    }

    #[test]
    fn test_concurrent_installs_minimum_wins() {
        let inc = Arc::new(SharedIncumbent::<i64>::new());
        let lap_times = vec![95_000, 92_000, 99_000, 90_000, 91_000, 97_000];

        let mut handles = Vec::new();
        for lap_time in lap_times.iter().copied() {
            let inc_cloned = Arc::clone(&inc);
            handles.push(thread::spawn(move || {
                let (s, r) = candidate(lap_time, 4);
                inc_cloned.try_install(s, r).is_installed()
            }));
        }

        let results = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<_>>();
        assert!(
            results.iter().any(|&installed| installed),
            "at least one install should succeed"
        );

        let min_total = *lap_times.iter().min().unwrap() * 4;
        assert_eq!(inc.upper_bound(), min_total);
        assert_eq!(
            inc.snapshot().map(|b| b.total_race_time()),
            Some(min_total)
        );
    }
}
