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

use num_traits::PrimInt;
use smallvec::{smallvec, SmallVec};
use std::cmp::{max, min};

/// A closed interval `[start, end]` with both bounds inclusive.
///
/// This struct represents a non-empty contiguous set of integers. Ordinal
/// spaces (such as verse positions inside a versification) are naturally
/// inclusive on both ends, so a single point is the interval `[p, p]` and
/// there is no empty interval.
///
/// Two intervals are *adjacent* when no integer lies between them, e.g.
/// `[1, 4]` and `[5, 9]`. Adjacent intervals can be merged by `union`.
///
/// # Invariants
/// `start_inclusive` must always be less than or equal to `end_inclusive`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosedInterval<T>
where
    T: PrimInt,
{
    start_inclusive: T,
    end_inclusive: T,
}

impl<T> ClosedInterval<T>
where
    T: PrimInt,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `start_inclusive > end_inclusive`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pericope_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(0, 9);
    /// assert_eq!(iv.len(), 10);
    /// ```
    #[inline]
    pub fn new(start_inclusive: T, end_inclusive: T) -> Self {
        assert!(
            start_inclusive <= end_inclusive,
            "Invalid interval: start_inclusive must be less than or equal to end_inclusive"
        );
        Self {
            start_inclusive,
            end_inclusive,
        }
    }

    /// Creates a new `ClosedInterval` if the inputs are valid.
    ///
    /// Returns `None` if `start_inclusive > end_inclusive`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pericope_core::math::interval::ClosedInterval;
    ///
    /// assert!(ClosedInterval::try_new(0, 10).is_some());
    /// assert!(ClosedInterval::try_new(3, 3).is_some());
    /// assert!(ClosedInterval::try_new(10, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(start_inclusive: T, end_inclusive: T) -> Option<Self> {
        if start_inclusive <= end_inclusive {
            Some(Self {
                start_inclusive,
                end_inclusive,
            })
        } else {
            None
        }
    }

    /// Creates a new `ClosedInterval` without checking invariants in release builds.
    ///
    /// The caller must ensure `start_inclusive <= end_inclusive`.
    /// This function contains a `debug_assert!` to catch errors during development.
    #[inline]
    pub fn new_unchecked(start_inclusive: T, end_inclusive: T) -> Self {
        debug_assert!(
            start_inclusive <= end_inclusive,
            "Invalid interval: start_inclusive must be less than or equal to end_inclusive"
        );
        Self {
            start_inclusive,
            end_inclusive,
        }
    }

    /// Creates the interval `[point, point]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pericope_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::point(7);
    /// assert!(iv.is_point());
    /// assert_eq!(iv.len(), 1);
    /// ```
    #[inline]
    pub fn point(point: T) -> Self {
        Self {
            start_inclusive: point,
            end_inclusive: point,
        }
    }

    /// Returns the inclusive start bound of the interval.
    #[inline]
    pub const fn start(&self) -> T {
        self.start_inclusive
    }

    /// Returns the inclusive end bound of the interval.
    #[inline]
    pub const fn end(&self) -> T {
        self.end_inclusive
    }

    /// Returns the number of integer points in the interval (`end - start + 1`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pericope_core::math::interval::ClosedInterval;
    ///
    /// assert_eq!(ClosedInterval::new(10, 20).len(), 11);
    /// assert_eq!(ClosedInterval::point(4).len(), 1);
    /// ```
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> T {
        self.end_inclusive - self.start_inclusive + T::one()
    }

    /// Returns `true` if the interval holds exactly one point.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.start_inclusive == self.end_inclusive
    }

    /// Returns `true` if this interval shares at least one point with `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pericope_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// assert!(a.intersects(ClosedInterval::new(10, 15)));
    /// assert!(!a.intersects(ClosedInterval::new(11, 15))); // Adjacent
    /// ```
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.start_inclusive <= other.end_inclusive && other.start_inclusive <= self.end_inclusive
    }

    /// Returns `true` if the intervals do not overlap and no integer lies between them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pericope_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 9);
    /// assert!(a.adjacent(ClosedInterval::new(10, 20)));
    /// assert!(!a.adjacent(ClosedInterval::new(9, 20)));
    /// ```
    #[inline]
    pub fn adjacent(&self, other: Self) -> bool {
        self.end_inclusive.checked_add(&T::one()) == Some(other.start_inclusive)
            || other.end_inclusive.checked_add(&T::one()) == Some(self.start_inclusive)
    }

    /// Returns `true` if the intervals either intersect or are adjacent.
    ///
    /// This is the condition under which two intervals merge into one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pericope_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 9);
    /// assert!(a.intersects_or_adjacent(ClosedInterval::new(10, 20)));
    /// assert!(a.intersects_or_adjacent(ClosedInterval::new(5, 15)));
    /// assert!(!a.intersects_or_adjacent(ClosedInterval::new(11, 20)));
    /// ```
    #[inline]
    pub fn intersects_or_adjacent(&self, other: Self) -> bool {
        self.intersects(other) || self.adjacent(other)
    }

    /// Returns `true` if every point of `other` lies within `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pericope_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// assert!(a.contains_interval(ClosedInterval::new(2, 8)));
    /// assert!(a.contains_interval(a));
    /// assert!(!a.contains_interval(ClosedInterval::new(5, 11)));
    /// ```
    #[inline]
    pub fn contains_interval(&self, other: Self) -> bool {
        self.start_inclusive <= other.start_inclusive && other.end_inclusive <= self.end_inclusive
    }

    /// Calculates the intersection of two intervals.
    ///
    /// Returns `None` if the intervals share no point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pericope_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// let b = ClosedInterval::new(5, 15);
    /// assert_eq!(a.intersection(b), Some(ClosedInterval::new(5, 10)));
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        let new_start = max(self.start_inclusive, other.start_inclusive);
        let new_end = min(self.end_inclusive, other.end_inclusive);

        if new_start <= new_end {
            Some(Self::new_unchecked(new_start, new_end))
        } else {
            None
        }
    }

    /// Calculates the union of two intervals.
    ///
    /// Returns `Some(union)` if the intervals overlap or are adjacent, and
    /// `None` if a gap separates them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pericope_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 9);
    /// let b = ClosedInterval::new(10, 20);
    /// assert_eq!(a.union(b), Some(ClosedInterval::new(0, 20)));
    /// ```
    #[inline]
    pub fn union(&self, other: Self) -> Option<Self> {
        if self.intersects_or_adjacent(other) {
            Some(Self {
                start_inclusive: min(self.start_inclusive, other.start_inclusive),
                end_inclusive: max(self.end_inclusive, other.end_inclusive),
            })
        } else {
            None
        }
    }

    /// Calculates the set difference `self - other`.
    ///
    /// # Returns
    ///
    /// A `SmallVec` containing:
    /// * 0 intervals: If `other` fully covers `self`.
    /// * 1 interval: If `other` clips one side of `self` or is disjoint.
    /// * 2 intervals: If `other` is strictly inside `self`, splitting it in two.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pericope_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// let diff = a.difference(ClosedInterval::new(4, 6));
    /// assert_eq!(diff.len(), 2);
    /// assert_eq!(diff[0], ClosedInterval::new(0, 3));
    /// assert_eq!(diff[1], ClosedInterval::new(7, 10));
    /// ```
    pub fn difference(&self, other: Self) -> SmallVec<[Self; 2]> {
        if !self.intersects(other) {
            return smallvec![*self];
        }

        let mut result = SmallVec::new();
        if let Some(left) = self.before(other.start_inclusive) {
            result.push(left);
        }
        if let Some(right) = self.after(other.end_inclusive) {
            result.push(right);
        }
        result
    }

    /// Returns the part of the interval strictly before `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pericope_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(3, 8);
    /// assert_eq!(iv.before(6), Some(ClosedInterval::new(3, 5)));
    /// assert_eq!(iv.before(3), None);
    /// assert_eq!(iv.before(20), Some(iv));
    /// ```
    #[inline]
    pub fn before(&self, value: T) -> Option<Self> {
        if value <= self.start_inclusive {
            None
        } else if value > self.end_inclusive {
            Some(*self)
        } else {
            Some(Self::new_unchecked(self.start_inclusive, value - T::one()))
        }
    }

    /// Returns the part of the interval strictly after `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pericope_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(3, 8);
    /// assert_eq!(iv.after(5), Some(ClosedInterval::new(6, 8)));
    /// assert_eq!(iv.after(8), None);
    /// assert_eq!(iv.after(0), Some(iv));
    /// ```
    #[inline]
    pub fn after(&self, value: T) -> Option<Self> {
        if value >= self.end_inclusive {
            None
        } else if value < self.start_inclusive {
            Some(*self)
        } else {
            Some(Self::new_unchecked(value + T::one(), self.end_inclusive))
        }
    }

    /// Returns the interval made of the first `count` points.
    ///
    /// Returns `None` for `count == 0`; a `count` at least as large as the
    /// interval returns the interval itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pericope_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(10, 19);
    /// assert_eq!(iv.take(3), Some(ClosedInterval::new(10, 12)));
    /// assert_eq!(iv.take(50), Some(iv));
    /// assert_eq!(iv.take(0), None);
    /// ```
    #[inline]
    pub fn take(&self, count: T) -> Option<Self> {
        if count <= T::zero() {
            None
        } else if count >= self.len() {
            Some(*self)
        } else {
            Some(Self::new_unchecked(
                self.start_inclusive,
                self.start_inclusive + count - T::one(),
            ))
        }
    }
}

impl<T> std::fmt::Debug for ClosedInterval<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosedInterval")
            .field("start_inclusive", &self.start_inclusive)
            .field("end_inclusive", &self.end_inclusive)
            .finish()
    }
}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start_inclusive, self.end_inclusive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_valid() {
        let iv = ClosedInterval::new(10, 20);
        assert_eq!(iv.start(), 10);
        assert_eq!(iv.end(), 20);
        assert_eq!(iv.len(), 11);
        assert!(!iv.is_point());
    }

    #[test]
    fn test_construction_point() {
        let iv = ClosedInterval::new(10, 10);
        assert_eq!(iv, ClosedInterval::point(10));
        assert_eq!(iv.len(), 1);
        assert!(iv.is_point());
    }

    #[test]
    fn test_try_new() {
        assert!(ClosedInterval::try_new(5, 10).is_some());
        assert!(ClosedInterval::try_new(5, 5).is_some());
        assert!(ClosedInterval::try_new(10, 5).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid interval")]
    fn test_new_panic() {
        ClosedInterval::new(10, 5);
    }

    #[test]
    fn test_intersects() {
        let a = ClosedInterval::new(0, 10);

        // Disjoint left
        assert!(!a.intersects(ClosedInterval::new(-5, -2)));
        // Adjacent left: no shared point
        assert!(!a.intersects(ClosedInterval::new(-5, -1)));
        // Touching at a bound shares that point
        assert!(a.intersects(ClosedInterval::new(-5, 0)));
        assert!(a.intersects(ClosedInterval::new(10, 15)));
        // Contained
        assert!(a.intersects(ClosedInterval::new(2, 8)));
        assert!(a.intersects(a));
        // Adjacent right
        assert!(!a.intersects(ClosedInterval::new(11, 15)));
    }

    #[test]
    fn test_adjacent() {
        let a = ClosedInterval::new(0, 10);
        assert!(a.adjacent(ClosedInterval::new(-5, -1)));
        assert!(a.adjacent(ClosedInterval::new(11, 15)));
        assert!(!a.adjacent(ClosedInterval::new(10, 11)));
        assert!(!a.adjacent(ClosedInterval::new(12, 15)));
    }

    #[test]
    fn test_adjacent_at_type_bounds() {
        let top: ClosedInterval<u8> = ClosedInterval::new(250, 255);
        assert!(!top.adjacent(ClosedInterval::new(0, 3)));
        assert!(top.adjacent(ClosedInterval::new(240, 249)));
    }

    #[test]
    fn test_intersects_or_adjacent() {
        let a = ClosedInterval::new(0, 10);
        assert!(a.intersects_or_adjacent(ClosedInterval::new(5, 15)));
        assert!(a.intersects_or_adjacent(ClosedInterval::new(11, 20)));
        assert!(!a.intersects_or_adjacent(ClosedInterval::new(12, 20)));
    }

    #[test]
    fn test_contains_interval() {
        let main = ClosedInterval::new(0, 10);
        assert!(main.contains_interval(ClosedInterval::new(0, 10)));
        assert!(main.contains_interval(ClosedInterval::new(2, 8)));
        assert!(main.contains_interval(ClosedInterval::point(10)));
        assert!(!main.contains_interval(ClosedInterval::new(-1, 5)));
        assert!(!main.contains_interval(ClosedInterval::new(5, 11)));
        assert!(!main.contains_interval(ClosedInterval::new(20, 30)));
    }

    #[test]
    fn test_intersection() {
        let a = ClosedInterval::new(0, 10);
        assert_eq!(
            a.intersection(ClosedInterval::new(5, 15)),
            Some(ClosedInterval::new(5, 10))
        );
        assert_eq!(
            a.intersection(ClosedInterval::new(10, 20)),
            Some(ClosedInterval::point(10))
        );
        assert_eq!(a.intersection(ClosedInterval::new(11, 20)), None);
    }

    #[test]
    fn test_union() {
        let a = ClosedInterval::new(0, 10);
        assert_eq!(
            a.union(ClosedInterval::new(5, 15)),
            Some(ClosedInterval::new(0, 15))
        );
        assert_eq!(
            a.union(ClosedInterval::new(11, 20)),
            Some(ClosedInterval::new(0, 20))
        );
        assert_eq!(a.union(ClosedInterval::new(2, 8)), Some(a));
        assert_eq!(a.union(ClosedInterval::new(12, 20)), None);
    }

    #[test]
    fn test_difference() {
        let base = ClosedInterval::new(0, 10);

        let diff = base.difference(ClosedInterval::new(12, 15));
        assert_eq!(diff.as_slice(), &[base]);

        let diff = base.difference(ClosedInterval::new(-5, 15));
        assert!(diff.is_empty());

        let diff = base.difference(ClosedInterval::new(8, 15));
        assert_eq!(diff.as_slice(), &[ClosedInterval::new(0, 7)]);

        let diff = base.difference(ClosedInterval::new(-5, 2));
        assert_eq!(diff.as_slice(), &[ClosedInterval::new(3, 10)]);

        let diff = base.difference(ClosedInterval::new(4, 6));
        assert_eq!(
            diff.as_slice(),
            &[ClosedInterval::new(0, 3), ClosedInterval::new(7, 10)]
        );
    }

    #[test]
    fn test_before_after() {
        let iv = ClosedInterval::new(5u32, 9);
        assert_eq!(iv.before(0), None);
        assert_eq!(iv.before(9), Some(ClosedInterval::new(5, 8)));
        assert_eq!(iv.after(4), Some(iv));
        assert_eq!(iv.after(5), Some(ClosedInterval::new(6, 9)));
        assert_eq!(iv.after(u32::MAX), None);
    }

    #[test]
    fn test_take() {
        let iv = ClosedInterval::new(5u32, 9);
        assert_eq!(iv.take(1), Some(ClosedInterval::point(5)));
        assert_eq!(iv.take(5), Some(iv));
        assert_eq!(iv.take(0), None);
    }

    #[test]
    fn test_traits_display_debug() {
        let a = ClosedInterval::new(10, 20);
        assert_eq!(format!("{}", a), "[10, 20]");
        assert_eq!(
            format!("{:?}", a),
            "ClosedInterval { start_inclusive: 10, end_inclusive: 20 }"
        );
    }
}
