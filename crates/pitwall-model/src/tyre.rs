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

//! The immutable performance description of a tyre type.

use num_traits::{PrimInt, Signed};

/// A type of tyre, including the attributes that determine its performance
/// characteristics.
///
/// A `TyreType` is configuration input: it is constructed once from the
/// problem parameters and read-only thereafter. Stints across many
/// candidate strategies share the same value behind an `Arc`.
///
/// The degradation factor compounds per lap of tyre age: a factor of 1
/// means lap times grow by +0.1% for every lap driven on the tyre, i.e.
/// an effective multiplier of `(1 + factor / 1000)^age`. A factor of zero
/// is a tyre that never degrades; negative factors are not rejected but
/// have no physical interpretation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TyreType<T> {
    name: String,
    delta_over_optimal_lap_time: T,
    degradation_factor: T,
}

impl<T> TyreType<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `TyreType`.
    ///
    /// `delta_over_optimal_lap_time` is the amount of time this tyre adds,
    /// as a minimum, to the optimal lap time, in milliseconds.
    #[inline]
    pub fn new(
        name: impl Into<String>,
        delta_over_optimal_lap_time: T,
        degradation_factor: T,
    ) -> Self {
        Self {
            name: name.into(),
            delta_over_optimal_lap_time,
            degradation_factor,
        }
    }

    /// Returns the name of the tyre type.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the base pace deficit over the optimal lap time, in
    /// milliseconds.
    #[inline]
    pub fn delta_over_optimal_lap_time(&self) -> T {
        self.delta_over_optimal_lap_time
    }

    /// Returns the per-lap compounding degradation factor, in tenths of a
    /// percent per lap of tyre age.
    #[inline]
    pub fn degradation_factor(&self) -> T {
        self.degradation_factor
    }
}

impl<T> std::fmt::Display for TyreType<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TyreType({}, delta: {}ms, degradation: {})",
            self.name, self.delta_over_optimal_lap_time, self.degradation_factor
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_accessors() {
        let tyre = TyreType::new("soft", 0i64, 15i64);
        assert_eq!(tyre.name(), "soft");
        assert_eq!(tyre.delta_over_optimal_lap_time(), 0);
        assert_eq!(tyre.degradation_factor(), 15);
    }

    #[test]
    fn test_display() {
        let tyre = TyreType::new("hard", 1200i64, 3i64);
        assert_eq!(
            format!("{}", tyre),
            "TyreType(hard, delta: 1200ms, degradation: 3)"
        );
    }

    #[test]
    fn test_clone_and_eq() {
        let tyre = TyreType::new("medium", 500i64, 8i64);
        assert_eq!(tyre, tyre.clone());
    }
}
