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

use crate::stats::SolverStatistics;
use num_traits::{PrimInt, Signed};
use pitwall_model::{simulation::SimulationResult, strategy::Strategy};

/// The best strategy found by an exhaustive search, together with its
/// simulation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestStrategy<T> {
    strategy: Strategy<T>,
    result: SimulationResult<T>,
}

impl<T> BestStrategy<T>
where
    T: PrimInt + Signed,
{
    /// Pairs a strategy with the result of simulating it.
    #[inline]
    pub fn new(strategy: Strategy<T>, result: SimulationResult<T>) -> Self {
        Self { strategy, result }
    }

    /// Returns the strategy.
    #[inline]
    pub fn strategy(&self) -> &Strategy<T> {
        &self.strategy
    }

    /// Returns the simulation result.
    #[inline]
    pub fn result(&self) -> &SimulationResult<T> {
        &self.result
    }

    /// Returns the total race time of the strategy, in milliseconds.
    #[inline]
    pub fn total_race_time(&self) -> T {
        self.result.total_race_time()
    }

    /// Consumes the pair, returning its parts.
    #[inline]
    pub fn into_parts(self) -> (Strategy<T>, SimulationResult<T>) {
        (self.strategy, self.result)
    }
}

/// The result of an exhaustive strategy search.
///
/// An exhaustive search that evaluated at least one candidate has proven
/// its answer optimal within the enumerated space, so there is no
/// "feasible but unproven" state. An empty search space is a distinct,
/// explicit outcome rather than a crash or a sentinel strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverResult<T> {
    /// The fastest strategy among all evaluated candidates.
    Best(BestStrategy<T>),
    /// The search space was empty; no candidate was ever evaluated.
    NoCandidate,
}

impl<T> std::fmt::Display for SolverResult<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Best(best) => {
                write!(f, "Best(total_race_time={})", best.total_race_time())
            }
            SolverResult::NoCandidate => write!(f, "NoCandidate"),
        }
    }
}

/// The full outcome of a solver run: the result plus run statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutcome<T> {
    result: SolverResult<T>,
    statistics: SolverStatistics,
}

impl<T> SolverOutcome<T>
where
    T: PrimInt + Signed,
{
    /// Constructs an outcome carrying the best strategy found.
    #[inline]
    pub fn best(best: BestStrategy<T>, statistics: SolverStatistics) -> Self {
        Self {
            result: SolverResult::Best(best),
            statistics,
        }
    }

    /// Constructs an outcome for an empty search space.
    #[inline]
    pub fn no_candidate(statistics: SolverStatistics) -> Self {
        Self {
            result: SolverResult::NoCandidate,
            statistics,
        }
    }

    /// Returns the solver result.
    #[inline]
    pub fn result(&self) -> &SolverResult<T> {
        &self.result
    }

    /// Returns the statistics collected during the run.
    #[inline]
    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    /// Returns `true` if a best strategy was found.
    #[inline]
    pub fn has_strategy(&self) -> bool {
        matches!(self.result, SolverResult::Best(_))
    }

    /// Returns the best strategy, if any candidate was evaluated.
    #[inline]
    pub fn best_strategy(&self) -> Option<&BestStrategy<T>> {
        match &self.result {
            SolverResult::Best(best) => Some(best),
            SolverResult::NoCandidate => None,
        }
    }

    /// Consumes the outcome, returning the best strategy if one exists.
    #[inline]
    pub fn into_best_strategy(self) -> Option<BestStrategy<T>> {
        match self.result {
            SolverResult::Best(best) => Some(best),
            SolverResult::NoCandidate => None,
        }
    }
}

impl<T> std::fmt::Display for SolverOutcome<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solver Outcome: {}", self.result)?;
        write!(f, "{}", self.statistics)
    }
}
