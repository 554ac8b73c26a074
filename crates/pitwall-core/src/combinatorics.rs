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

//! # Exhaustive Combinatorics Generators
//!
//! Total, pure generators for the two shapes of candidate enumeration the
//! strategy search needs:
//!
//! - `permutations_with_repetition`: every ordered sequence of a fixed
//!   length over a set of items, repetition allowed (one tyre choice per
//!   stint).
//! - `combinations_without_repetition`: every unordered selection of a
//!   fixed number of distinct items (one pit lap per stop).
//!
//! ## Motivation
//!
//! An exhaustive search is only correct if its generators produce no
//! duplicates and no omissions. Both generators here are implemented
//! iteratively with index vectors, so their output order is deterministic
//! (lexicographic over item positions, last position varying fastest) and
//! their stack usage is independent of the requested length.
//!
//! ## Conventions
//!
//! A requested length of zero yields an *empty result set*, not a set
//! containing the empty sequence. A negative length is a caller error and
//! is rejected with [`CombinatoricsError::NegativeLength`].
//!
//! ## Usage
//!
//! ```rust
//! use pitwall_core::combinatorics::permutations_with_repetition;
//!
//! let sequences = permutations_with_repetition(&["soft", "hard"], 2).unwrap();
//! assert_eq!(sequences.len(), 4);
//! assert_eq!(sequences[0], vec!["soft", "soft"]);
//! assert_eq!(sequences[3], vec!["hard", "hard"]);
//! ```

/// The error type for the combinatorics generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombinatoricsError {
    /// A negative sequence length was requested.
    NegativeLength {
        /// The offending length.
        length: i64,
    },
}

impl std::fmt::Display for CombinatoricsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeLength { length } => {
                write!(f, "requested sequence length must not be negative: {}", length)
            }
        }
    }
}

impl std::error::Error for CombinatoricsError {}

/// Returns every ordered sequence of exactly `length` elements drawn from
/// `items`, with repetition allowed.
///
/// The output is ordered lexicographically over the index positions of
/// `items`, with the last position varying fastest. The cardinality of the
/// result is `items.len().pow(length)`.
///
/// A `length` of zero, or an empty `items` slice with a positive `length`,
/// yields an empty result set.
///
/// # Errors
///
/// Returns [`CombinatoricsError::NegativeLength`] if `length < 0`.
///
/// # Examples
///
/// ```rust
/// # use pitwall_core::combinatorics::permutations_with_repetition;
///
/// let sequences = permutations_with_repetition(&[1, 2], 3).unwrap();
/// assert_eq!(sequences.len(), 8);
/// assert_eq!(sequences.first(), Some(&vec![1, 1, 1]));
/// assert_eq!(sequences.last(), Some(&vec![2, 2, 2]));
/// ```
pub fn permutations_with_repetition<T>(
    items: &[T],
    length: i64,
) -> Result<Vec<Vec<T>>, CombinatoricsError>
where
    T: Clone,
{
    if length < 0 {
        return Err(CombinatoricsError::NegativeLength { length });
    }
    if length == 0 || items.is_empty() {
        return Ok(Vec::new());
    }

    let n = items.len();
    let len = length as usize;

    // Index odometer: `indices[i]` selects the item at position `i`.
    // Incrementing the last position first gives lexicographic order.
    let mut indices = vec![0usize; len];
    let mut sequences = Vec::new();

    'odometer: loop {
        sequences.push(indices.iter().map(|&i| items[i].clone()).collect());

        let mut pos = len;
        while pos > 0 {
            pos -= 1;
            indices[pos] += 1;
            if indices[pos] < n {
                continue 'odometer;
            }
            indices[pos] = 0;
        }
        break;
    }

    Ok(sequences)
}

/// Returns every unordered selection of exactly `length` distinct elements
/// from `items`.
///
/// Each selection is represented as a sequence preserving the relative
/// order of `items`. No selection contains duplicate elements and no two
/// selections are equal as sets. The cardinality of the result is
/// `C(items.len(), length)`; a `length` greater than `items.len()` yields
/// an empty result set, as do a `length` of zero and an empty `items`
/// slice.
///
/// # Errors
///
/// Returns [`CombinatoricsError::NegativeLength`] if `length < 0`.
///
/// # Examples
///
/// ```rust
/// # use pitwall_core::combinatorics::combinations_without_repetition;
///
/// let selections = combinations_without_repetition(&[1, 2, 3], 2).unwrap();
/// assert_eq!(selections, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
/// ```
pub fn combinations_without_repetition<T>(
    items: &[T],
    length: i64,
) -> Result<Vec<Vec<T>>, CombinatoricsError>
where
    T: Clone,
{
    if length < 0 {
        return Err(CombinatoricsError::NegativeLength { length });
    }
    if length == 0 || items.is_empty() || length as usize > items.len() {
        return Ok(Vec::new());
    }

    let n = items.len();
    let k = length as usize;

    // Strictly increasing index vector, starting at the first k positions.
    // Advancing the rightmost index that still has headroom enumerates all
    // C(n, k) subsets in lexicographic order.
    let mut indices: Vec<usize> = (0..k).collect();
    let mut selections = Vec::new();

    'advance: loop {
        selections.push(indices.iter().map(|&i| items[i].clone()).collect());

        let mut i = k;
        while i > 0 {
            i -= 1;
            if indices[i] < n - k + i {
                indices[i] += 1;
                for j in i + 1..k {
                    indices[j] = indices[j - 1] + 1;
                }
                continue 'advance;
            }
        }
        break;
    }

    Ok(selections)
}
