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

use crate::{monitor::search_monitor::SearchMonitor, num::SolverNumeric};
use pitwall_model::{race::Race, tyre::TyreType};
use std::sync::Arc;

/// A composite monitor that aggregates multiple monitors and forwards
/// events to all of them, in insertion order.
pub struct CompositeMonitor<'a, T> {
    monitors: Vec<Box<dyn SearchMonitor<T> + 'a>>,
}

impl<T> std::fmt::Debug for CompositeMonitor<'_, T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let monitors_str = self
            .monitors
            .iter()
            .map(|m| m.name())
            .collect::<Vec<&str>>()
            .join(", ");

        f.debug_struct("CompositeMonitor")
            .field("monitors", &monitors_str)
            .finish()
    }
}

impl<T> std::fmt::Display for CompositeMonitor<'_, T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let monitors_str = self
            .monitors
            .iter()
            .map(|m| m.name())
            .collect::<Vec<&str>>()
            .join(", ");

        write!(f, "CompositeMonitor([{}])", monitors_str)
    }
}

impl<T> Default for CompositeMonitor<'_, T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeMonitor<'a, T>
where
    T: SolverNumeric,
{
    /// Creates a new empty `CompositeMonitor`.
    #[inline]
    pub fn new() -> CompositeMonitor<'a, T> {
        CompositeMonitor {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeMonitor` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> CompositeMonitor<'a, T> {
        CompositeMonitor {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Creates a new `CompositeMonitor` from a vector of boxed monitors.
    #[inline]
    pub fn from_vec(monitors: Vec<Box<dyn SearchMonitor<T> + 'a>>) -> CompositeMonitor<'a, T> {
        CompositeMonitor { monitors }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SearchMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a new boxed monitor to the composite monitor.
    #[inline]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn SearchMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns the number of monitors in the composite monitor.
    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> FromIterator<Box<dyn SearchMonitor<T> + 'a>> for CompositeMonitor<'a, T>
where
    T: SolverNumeric,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn SearchMonitor<T> + 'a>>,
    {
        let monitors: Vec<Box<dyn SearchMonitor<T> + 'a>> = iter.into_iter().collect();
        CompositeMonitor { monitors }
    }
}

impl<T> SearchMonitor<T> for CompositeMonitor<'_, T>
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(&self, race: &Race<T>, max_stops: u32) {
        for monitor in &self.monitors {
            monitor.on_enter_search(race, max_stops);
        }
    }

    fn on_candidate_tested(&self, stint_start_laps: &[u32], tyre_sequence: &[Arc<TyreType<T>>]) {
        for monitor in &self.monitors {
            monitor.on_candidate_tested(stint_start_laps, tyre_sequence);
        }
    }

    fn on_improvement(
        &self,
        stint_start_laps: &[u32],
        tyre_sequence: &[Arc<TyreType<T>>],
        previous_best: Option<i64>,
        new_best: i64,
    ) {
        for monitor in &self.monitors {
            monitor.on_improvement(stint_start_laps, tyre_sequence, previous_best, new_best);
        }
    }

    fn on_exit_search(&self) {
        for monitor in &self.monitors {
            monitor.on_exit_search();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::no_op::NoOpMonitor;
    use std::sync::Mutex;

    /// Appends the name of every received event to a shared log.
    struct RecordingMonitor {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl SearchMonitor<i64> for RecordingMonitor {
        fn name(&self) -> &str {
            "RecordingMonitor"
        }

        fn on_enter_search(&self, _race: &Race<i64>, _max_stops: u32) {
            self.events.lock().unwrap().push("enter".to_string());
        }

        fn on_candidate_tested(
            &self,
            stint_start_laps: &[u32],
            _tyre_sequence: &[Arc<TyreType<i64>>],
        ) {
            self.events
                .lock()
                .unwrap()
                .push(format!("tested:{:?}", stint_start_laps));
        }

        fn on_improvement(
            &self,
            _stint_start_laps: &[u32],
            _tyre_sequence: &[Arc<TyreType<i64>>],
            previous_best: Option<i64>,
            new_best: i64,
        ) {
            self.events
                .lock()
                .unwrap()
                .push(format!("improved:{:?}->{}", previous_best, new_best));
        }

        fn on_exit_search(&self) {
            self.events.lock().unwrap().push("exit".to_string());
        }
    }

    #[test]
    fn test_empty_composite() {
        let composite = CompositeMonitor::<i64>::new();
        assert!(composite.is_empty());
        assert_eq!(composite.len(), 0);
    }

    #[test]
    fn test_add_monitor_increases_len() {
        let mut composite = CompositeMonitor::<i64>::new();
        composite.add_monitor(NoOpMonitor::new());
        composite.add_monitor_boxed(Box::new(NoOpMonitor::new()));
        assert_eq!(composite.len(), 2);
        assert!(!composite.is_empty());
    }

    #[test]
    fn test_events_are_forwarded_to_all_monitors() {
        let events_a = Arc::new(Mutex::new(Vec::new()));
        let events_b = Arc::new(Mutex::new(Vec::new()));

        let mut composite = CompositeMonitor::<i64>::new();
        composite.add_monitor(RecordingMonitor {
            events: Arc::clone(&events_a),
        });
        composite.add_monitor(RecordingMonitor {
            events: Arc::clone(&events_b),
        });

        let tyre = Arc::new(TyreType::new("soft", 0i64, 0i64));
        composite.on_candidate_tested(&[1, 5], std::slice::from_ref(&tyre));
        composite.on_improvement(&[1, 5], std::slice::from_ref(&tyre), None, 180_000);
        composite.on_exit_search();

        let expected = vec![
            "tested:[1, 5]".to_string(),
            "improved:None->180000".to_string(),
            "exit".to_string(),
        ];
        assert_eq!(*events_a.lock().unwrap(), expected);
        assert_eq!(*events_b.lock().unwrap(), expected);
    }

    #[test]
    fn test_debug_lists_monitor_names() {
        let mut composite = CompositeMonitor::<i64>::new();
        composite.add_monitor(NoOpMonitor::new());
        let rendered = format!("{:?}", composite);
        assert!(rendered.contains("NoOpMonitor"));
    }
}
