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

//! Canonical simplification of reference lists.
//!
//! `combine` maps every reference to its interval of ordinals, sorts the
//! intervals by start and sweeps once, merging an interval into the running
//! one whenever the two overlap or touch. The result is sorted, pairwise
//! disjoint and non-adjacent, and no shorter list covers the same verses.
//! Everything in `geometry` relies on that shape.

use pericope_model::{
    ordinal::VerseInterval,
    reference::Reference,
    versification::Versification,
};

/// Maps references to their ordinal intervals, in input order.
///
/// # Panics
///
/// Panics if a reference names a verse that does not exist in
/// `versification`, or is a range that runs backwards.
#[inline]
pub fn to_intervals(versification: &Versification, refs: &[Reference]) -> Vec<VerseInterval> {
    refs.iter().map(|r| versification.interval(r)).collect()
}

/// Sorts `intervals` and merges those that overlap or are adjacent.
///
/// # Examples
///
/// ```rust
/// # use pericope_algebra::combine::merge_intervals;
/// # use pericope_model::ordinal::VerseInterval;
///
/// let merged = merge_intervals(vec![
///     VerseInterval::new(10, 12),
///     VerseInterval::new(0, 3),
///     VerseInterval::new(4, 4),
///     VerseInterval::new(11, 20),
/// ]);
/// assert_eq!(merged, vec![VerseInterval::new(0, 4), VerseInterval::new(10, 20)]);
/// ```
pub fn merge_intervals(mut intervals: Vec<VerseInterval>) -> Vec<VerseInterval> {
    intervals.sort_unstable_by_key(|iv| (iv.start(), iv.end()));

    let mut merged: Vec<VerseInterval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match merged.last_mut() {
            Some(acc) => match acc.union(interval) {
                Some(joined) => *acc = joined,
                None => merged.push(interval),
            },
            None => merged.push(interval),
        }
    }
    merged
}

/// Returns the sorted, merged ordinal intervals covered by `refs`.
///
/// # Panics
///
/// Panics under the same conditions as `to_intervals`.
#[inline]
pub fn normalize(versification: &Versification, refs: &[Reference]) -> Vec<VerseInterval> {
    merge_intervals(to_intervals(versification, refs))
}

/// Turns ordinal intervals back into references, one per interval.
#[inline]
pub fn to_references(versification: &Versification, intervals: &[VerseInterval]) -> Vec<Reference> {
    intervals
        .iter()
        .map(|&iv| versification.reference_from_interval(iv))
        .collect()
}

/// Merges overlapping and adjacent references into the minimal sorted list
/// covering the same verses. Single verse results are returned as `Verse`.
///
/// # Panics
///
/// Panics if a reference names a verse that does not exist in
/// `versification`, or is a range that runs backwards. Validate untrusted
/// input first.
///
/// # Examples
///
/// ```rust
/// # use pericope_algebra::combine::combine;
/// # use pericope_model::{book::BookId, canon, reference::{Range, Reference, Verse}};
///
/// let kjv = canon::kjv();
/// let gen = BookId::new(b"GEN");
/// let refs = [
///     Reference::Range(Range::new(Verse::new(gen, 1, 20), Verse::new(gen, 1, 31))),
///     Reference::Verse(Verse::new(gen, 1, 3)),
///     Reference::Range(Range::new(Verse::new(gen, 2, 1), Verse::new(gen, 2, 4))),
/// ];
/// assert_eq!(
///     combine(&kjv, &refs),
///     vec![
///         Reference::Verse(Verse::new(gen, 1, 3)),
///         Reference::Range(Range::new(Verse::new(gen, 1, 20), Verse::new(gen, 2, 4))),
///     ]
/// );
/// ```
pub fn combine(versification: &Versification, refs: &[Reference]) -> Vec<Reference> {
    to_references(versification, &normalize(versification, refs))
}
