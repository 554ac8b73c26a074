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

/// Statistics collected during the strategy search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverStatistics {
    /// Number of candidate strategies simulated.
    pub candidates_evaluated: u64,
    /// Number of times the incumbent was replaced by a strictly better
    /// candidate.
    pub improvements: u64,
    /// Number of worker threads used (one per stop count).
    pub used_threads: usize,
    /// Total duration of the search.
    pub solve_duration: std::time::Duration,
}

impl std::fmt::Display for SolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solver Statistics:")?;
        writeln!(f, "  Candidates Evaluated: {}", self.candidates_evaluated)?;
        writeln!(f, "  Improvements: {}", self.improvements)?;
        writeln!(f, "  Used Threads: {}", self.used_threads)?;
        writeln!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

/// Builder for `SolverStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverStatisticsBuilder {
    candidates_evaluated: u64,
    improvements: u64,
    used_threads: usize,
    solve_duration: std::time::Duration,
}

impl Default for SolverStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverStatisticsBuilder {
    /// Creates a new `SolverStatisticsBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            candidates_evaluated: 0,
            improvements: 0,
            used_threads: 1,
            solve_duration: std::time::Duration::ZERO,
        }
    }

    /// Sets the number of candidates evaluated.
    #[inline]
    pub fn candidates_evaluated(mut self, candidates_evaluated: u64) -> Self {
        self.candidates_evaluated = candidates_evaluated;
        self
    }

    /// Sets the number of incumbent improvements.
    #[inline]
    pub fn improvements(mut self, improvements: u64) -> Self {
        self.improvements = improvements;
        self
    }

    /// Sets the number of worker threads used.
    #[inline]
    pub fn used_threads(mut self, used_threads: usize) -> Self {
        self.used_threads = used_threads;
        self
    }

    /// Sets the total solve duration.
    #[inline]
    pub fn solve_duration(mut self, solve_duration: std::time::Duration) -> Self {
        self.solve_duration = solve_duration;
        self
    }

    /// Builds the `SolverStatistics` instance.
    #[inline]
    pub fn build(self) -> SolverStatistics {
        SolverStatistics {
            candidates_evaluated: self.candidates_evaluated,
            improvements: self.improvements,
            used_threads: self.used_threads,
            solve_duration: self.solve_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SolverStatistics, SolverStatisticsBuilder};
    use std::time::Duration;

    #[test]
    fn test_builder_constructs_expected_struct() {
        let stats = SolverStatisticsBuilder::new()
            .candidates_evaluated(128)
            .improvements(3)
            .used_threads(4)
            .solve_duration(Duration::from_millis(1234))
            .build();

        assert_eq!(stats.candidates_evaluated, 128);
        assert_eq!(stats.improvements, 3);
        assert_eq!(stats.used_threads, 4);
        assert_eq!(stats.solve_duration, Duration::from_millis(1234));
    }

    #[test]
    fn test_display_formats_all_fields() {
        let stats = SolverStatistics {
            candidates_evaluated: 42,
            improvements: 2,
            used_threads: 3,
            solve_duration: Duration::from_millis(1234),
        };

        let rendered = format!("{}", stats);
        assert!(rendered.contains("Solver Statistics:"));
        assert!(rendered.contains("Candidates Evaluated: 42"));
        assert!(rendered.contains("Improvements: 2"));
        assert!(rendered.contains("Used Threads: 3"));
        assert!(rendered.contains("Solve Duration (secs): 1.234"));
    }
}
