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

//! Set algebra over reference lists.
//!
//! Every operation treats its inputs as sets of ordinals and normalizes them
//! through `combine` first, so results are themselves sorted, disjoint and
//! minimal.
//!
//! # Panics
//!
//! All operations panic on references that do not exist in the
//! versification or ranges that run backwards, as `combine` does.

use crate::combine::{merge_intervals, normalize, to_references};
use pericope_model::{
    ordinal::VerseInterval,
    reference::Reference,
    versification::Versification,
};

/// Intersects two normalized interval lists.
///
/// Both inputs must be sorted and disjoint. The heads of the lists are
/// trimmed past every emitted overlap, so a head that reaches further stays
/// in play against the next interval of the other side.
pub fn intersect_intervals(a: &[VerseInterval], b: &[VerseInterval]) -> Vec<VerseInterval> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    let mut head_a = a.first().copied();
    let mut head_b = b.first().copied();

    while let (Some(x), Some(y)) = (head_a, head_b) {
        match x.intersection(y) {
            None => {
                if x.end() < y.end() {
                    i += 1;
                    head_a = a.get(i).copied();
                } else {
                    j += 1;
                    head_b = b.get(j).copied();
                }
            }
            Some(overlap) => {
                out.push(overlap);
                head_a = x.after(overlap.end()).or_else(|| {
                    i += 1;
                    a.get(i).copied()
                });
                head_b = y.after(overlap.end()).or_else(|| {
                    j += 1;
                    b.get(j).copied()
                });
            }
        }
    }
    out
}

/// Returns `true` if every ordinal of `inner` lies in `outer`. Both inputs
/// must be normalized.
pub fn contains_intervals(outer: &[VerseInterval], inner: &[VerseInterval]) -> bool {
    let mut i = 0;
    for &needle in inner {
        while i < outer.len() && outer[i].end() < needle.start() {
            i += 1;
        }
        match outer.get(i) {
            Some(hay) if hay.contains_interval(needle) => {}
            _ => return false,
        }
    }
    true
}

/// Removes the ordinals of `b` from `a`. Both inputs must be normalized.
pub fn subtract_intervals(a: &[VerseInterval], b: &[VerseInterval]) -> Vec<VerseInterval> {
    let mut out = Vec::new();
    let mut j = 0;

    for &x in a {
        while j < b.len() && b[j].end() < x.start() {
            j += 1;
        }
        let mut k = j;
        let mut rest = Some(x);
        while let Some(current) = rest {
            match b.get(k) {
                Some(&cut) if cut.start() <= current.end() => {
                    rest = None;
                    for piece in current.difference(cut) {
                        if piece.end() < cut.start() {
                            out.push(piece);
                        } else {
                            rest = Some(piece);
                        }
                    }
                    k += 1;
                }
                _ => {
                    out.push(current);
                    rest = None;
                }
            }
        }
    }
    out
}

/// Returns the verses present in both `a` and `b`.
///
/// # Examples
///
/// ```rust
/// # use pericope_algebra::geometry::intersection;
/// # use pericope_model::{book::BookId, canon, reference::{Range, Reference, Verse}};
///
/// let kjv = canon::kjv();
/// let gen = BookId::new(b"GEN");
/// let a = [Reference::Range(Range::new(Verse::new(gen, 1, 5), Verse::new(gen, 1, 10)))];
/// let b = [Reference::Range(Range::new(Verse::new(gen, 1, 7), Verse::new(gen, 1, 12)))];
/// assert_eq!(
///     intersection(&kjv, &a, &b),
///     vec![Reference::Range(Range::new(Verse::new(gen, 1, 7), Verse::new(gen, 1, 10)))]
/// );
/// ```
pub fn intersection(versification: &Versification, a: &[Reference], b: &[Reference]) -> Vec<Reference> {
    let a = normalize(versification, a);
    let b = normalize(versification, b);
    to_references(versification, &intersect_intervals(&a, &b))
}

/// Returns the verses present in `a` or `b`.
pub fn union(versification: &Versification, a: &[Reference], b: &[Reference]) -> Vec<Reference> {
    let mut intervals = normalize(versification, a);
    intervals.extend(normalize(versification, b));
    to_references(versification, &merge_intervals(intervals))
}

/// Returns the verses of `a` that are not in `b`.
pub fn difference(versification: &Versification, a: &[Reference], b: &[Reference]) -> Vec<Reference> {
    let a = normalize(versification, a);
    let b = normalize(versification, b);
    to_references(versification, &subtract_intervals(&a, &b))
}

/// Returns `true` if every verse of `inner` is also in `outer`.
///
/// An empty `inner` is contained in anything.
pub fn contains(versification: &Versification, outer: &[Reference], inner: &[Reference]) -> bool {
    contains_intervals(&normalize(versification, outer), &normalize(versification, inner))
}

/// Returns `true` if `a` and `b` share at least one verse.
#[inline]
pub fn intersects(versification: &Versification, a: &[Reference], b: &[Reference]) -> bool {
    !intersection(versification, a, b).is_empty()
}

/// Returns the number of distinct verses covered by `refs`.
pub fn count_unique_verses(versification: &Versification, refs: &[Reference]) -> u64 {
    normalize(versification, refs)
        .iter()
        .map(|iv| u64::from(iv.len()))
        .sum()
}
