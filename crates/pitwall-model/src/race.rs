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

//! # Race Problem Definition
//!
//! The `Race` is the immutable, validated problem input consumed by the
//! search engine: race length, optimal lap time, pit-stop penalty, and the
//! catalogue of available tyre types. Construction goes through
//! `RaceBuilder`, which validates eagerly so the solver never encounters
//! an invalid instance (fail-fast, the same split as between a mutable
//! builder and an immutable model elsewhere in this workspace).

use crate::tyre::TyreType;
use num_traits::{PrimInt, Signed};
use std::sync::Arc;

/// The immutable race-wide problem input.
///
/// Construction:
/// - Use `RaceBuilder` and call `RaceBuilder::build` to obtain a validated
///   `Race`.
#[derive(Clone, Debug)]
pub struct Race<T> {
    laps: u32,
    optimal_lap_time: T,
    pitstop_delay: T,
    tyre_types: Vec<Arc<TyreType<T>>>,
}

impl<T> Race<T>
where
    T: PrimInt + Signed,
{
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

    /// Returns the catalogue of available tyre types.
    #[inline]
    pub fn tyre_types(&self) -> &[Arc<TyreType<T>>] {
        &self.tyre_types
    }
}

/// A mutable builder for `Race` instances.
///
/// # Examples
///
/// ```rust
/// # use pitwall_model::race::RaceBuilder;
///
/// let mut builder = RaceBuilder::<i64>::new(57, 90_000, 21_000);
/// builder.add_tyre_type("soft", 0, 15);
/// builder.add_tyre_type("hard", 1_200, 4);
/// let race = builder.build();
/// assert_eq!(race.laps(), 57);
/// assert_eq!(race.tyre_types().len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct RaceBuilder<T> {
    laps: u32,
    optimal_lap_time: T,
    pitstop_delay: T,
    tyre_types: Vec<Arc<TyreType<T>>>,
}

impl<T> RaceBuilder<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `RaceBuilder` with an empty tyre catalogue.
    ///
    /// # Panics
    ///
    /// Panics if `laps` is zero, `optimal_lap_time` is not positive, or
    /// `pitstop_delay` is negative.
    pub fn new(laps: u32, optimal_lap_time: T, pitstop_delay: T) -> Self {
        assert!(
            laps >= 1,
            "called `RaceBuilder::new` with a zero-length race"
        );
        assert!(
            optimal_lap_time > T::zero(),
            "called `RaceBuilder::new` with a non-positive optimal lap time"
        );
        assert!(
            pitstop_delay >= T::zero(),
            "called `RaceBuilder::new` with a negative pit-stop delay"
        );

        Self {
            laps,
            optimal_lap_time,
            pitstop_delay,
            tyre_types: Vec::new(),
        }
    }

    /// Adds a tyre type to the catalogue.
    #[inline]
    pub fn add_tyre_type(
        &mut self,
        name: impl Into<String>,
        delta_over_optimal_lap_time: T,
        degradation_factor: T,
    ) -> &mut Self {
        self.tyre_types.push(Arc::new(TyreType::new(
            name,
            delta_over_optimal_lap_time,
            degradation_factor,
        )));
        self
    }

    /// Adds an already shared tyre type to the catalogue.
    #[inline]
    pub fn add_shared_tyre_type(&mut self, tyre: Arc<TyreType<T>>) -> &mut Self {
        self.tyre_types.push(tyre);
        self
    }

    /// Builds the validated `Race`.
    ///
    /// # Panics
    ///
    /// Panics if the tyre catalogue is empty.
    pub fn build(self) -> Race<T> {
        assert!(
            !self.tyre_types.is_empty(),
            "called `RaceBuilder::build` with an empty tyre catalogue"
        );

        Race {
            laps: self.laps,
            optimal_lap_time: self.optimal_lap_time,
            pitstop_delay: self.pitstop_delay,
            tyre_types: self.tyre_types,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_constructs_validated_race() {
        let mut builder = RaceBuilder::<i64>::new(44, 93_000, 24_000);
        builder.add_tyre_type("soft", 0, 12);
        builder.add_tyre_type("medium", 600, 7);
        let race = builder.build();

        assert_eq!(race.laps(), 44);
        assert_eq!(race.optimal_lap_time(), 93_000);
        assert_eq!(race.pitstop_delay(), 24_000);
        assert_eq!(race.tyre_types().len(), 2);
        assert_eq!(race.tyre_types()[0].name(), "soft");
        assert_eq!(race.tyre_types()[1].name(), "medium");
    }

    #[test]
    fn test_shared_tyre_types_are_not_duplicated() {
        let soft = Arc::new(TyreType::new("soft", 0i64, 12i64));
        let mut builder = RaceBuilder::new(10, 90_000i64, 20_000i64);
        builder.add_shared_tyre_type(Arc::clone(&soft));
        let race = builder.build();
        assert!(Arc::ptr_eq(&race.tyre_types()[0], &soft));
    }

    #[test]
    #[should_panic(expected = "zero-length race")]
    fn test_new_rejects_zero_laps() {
        let _ = RaceBuilder::<i64>::new(0, 90_000, 20_000);
    }

    #[test]
    #[should_panic(expected = "non-positive optimal lap time")]
    fn test_new_rejects_non_positive_optimal_lap_time() {
        let _ = RaceBuilder::<i64>::new(10, 0, 20_000);
    }

    #[test]
    #[should_panic(expected = "negative pit-stop delay")]
    fn test_new_rejects_negative_pitstop_delay() {
        let _ = RaceBuilder::<i64>::new(10, 90_000, -1);
    }

    #[test]
    #[should_panic(expected = "empty tyre catalogue")]
    fn test_build_rejects_empty_catalogue() {
        let _ = RaceBuilder::<i64>::new(10, 90_000, 20_000).build();
    }

    #[test]
    fn test_zero_pitstop_delay_is_allowed() {
        let mut builder = RaceBuilder::<i64>::new(10, 90_000, 0);
        builder.add_tyre_type("soft", 0, 0);
        let race = builder.build();
        assert_eq!(race.pitstop_delay(), 0);
    }
}
