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

//! Ordinal mapping: every verse of a versification has a dense zero-based
//! position, its ordinal, in canonical order.
//!
//! `GEN 1:1` is ordinal 0 and the last verse of the last book is
//! `total_verses() - 1`. A range of verses is then an inclusive interval of
//! ordinals, which is what the range algebra works on.

use crate::{
    reference::{Reference, Verse},
    versification::Versification,
};
use pericope_core::math::interval::ClosedInterval;

/// The zero-based position of a verse within its versification.
pub type Ordinal = u32;

/// An inclusive run of ordinals.
pub type VerseInterval = ClosedInterval<Ordinal>;

impl Versification {
    /// Returns the ordinal of `verse`, or `None` if the book is unknown or
    /// the chapter or verse is out of bounds.
    pub fn checked_to_ordinal(&self, verse: Verse) -> Option<Ordinal> {
        let chapter = self.book(verse.book)?.chapter(verse.chapter)?;
        if verse.verse == 0 || verse.verse > chapter.verse_count() {
            return None;
        }
        Some(chapter.cumulative_verse() + Ordinal::from(verse.verse) - 1)
    }

    /// Returns the ordinal of `verse`.
    ///
    /// # Panics
    ///
    /// Panics if the verse does not exist in this versification. Use
    /// `checked_to_ordinal` for references that have not been validated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pericope_model::{book::BookId, canon, reference::Verse};
    ///
    /// let kjv = canon::kjv();
    /// assert_eq!(kjv.to_ordinal(Verse::new(BookId::new(b"GEN"), 1, 1)), 0);
    /// assert_eq!(kjv.to_ordinal(Verse::new(BookId::new(b"GEN"), 2, 1)), 31);
    /// ```
    #[inline]
    pub fn to_ordinal(&self, verse: Verse) -> Ordinal {
        match self.checked_to_ordinal(verse) {
            Some(ordinal) => ordinal,
            None => panic!(
                "called `Versification::to_ordinal` with {}, which is not a verse of this versification",
                verse
            ),
        }
    }

    /// Returns the verse with ordinal `ordinal`, or `None` if
    /// `ordinal >= total_verses()`.
    pub fn checked_from_ordinal(&self, ordinal: Ordinal) -> Option<Verse> {
        if ordinal >= self.total_verses() {
            return None;
        }
        let books = self.books();
        let book = &books[books.partition_point(|b| b.first_ordinal() <= ordinal) - 1];
        let chapters = book.chapters();
        let position = chapters.partition_point(|c| c.cumulative_verse() <= ordinal) - 1;
        let chapter = &chapters[position];
        // Both offsets fit: a book has at most `u16::MAX` chapters and a
        // chapter at most `u16::MAX` verses.
        Some(Verse::new(
            book.id(),
            (position + 1) as u16,
            (ordinal - chapter.cumulative_verse() + 1) as u16,
        ))
    }

    /// Returns the verse with ordinal `ordinal`.
    ///
    /// # Panics
    ///
    /// Panics if `ordinal >= total_verses()`.
    #[inline]
    pub fn from_ordinal(&self, ordinal: Ordinal) -> Verse {
        match self.checked_from_ordinal(ordinal) {
            Some(verse) => verse,
            None => panic!(
                "called `Versification::from_ordinal` with {}, but the versification has {} verses",
                ordinal,
                self.total_verses()
            ),
        }
    }

    /// Returns the interval of ordinals covered by `reference`, or `None` if
    /// an endpoint does not exist or the range runs backwards.
    pub fn checked_interval(&self, reference: &Reference) -> Option<VerseInterval> {
        let start = self.checked_to_ordinal(reference.start())?;
        let end = self.checked_to_ordinal(reference.end())?;
        VerseInterval::try_new(start, end)
    }

    /// Returns the interval of ordinals covered by `reference`.
    ///
    /// # Panics
    ///
    /// Panics if an endpoint does not exist or the range runs backwards.
    #[inline]
    pub fn interval(&self, reference: &Reference) -> VerseInterval {
        match self.checked_interval(reference) {
            Some(interval) => interval,
            None => panic!(
                "called `Versification::interval` with {}, which is not a valid forward reference",
                reference
            ),
        }
    }

    /// Turns an interval of ordinals back into a reference. A single ordinal
    /// becomes a `Verse`.
    ///
    /// # Panics
    ///
    /// Panics if the interval reaches past `total_verses()`.
    #[inline]
    pub fn reference_from_interval(&self, interval: VerseInterval) -> Reference {
        let start = self.from_ordinal(interval.start());
        if interval.is_point() {
            Reference::Verse(start)
        } else {
            Reference::from_endpoints(start, self.from_ordinal(interval.end()))
        }
    }

    /// Returns the number of verses covered by `reference`. A `Verse` counts
    /// as one.
    ///
    /// # Panics
    ///
    /// Panics if `reference` is a range with an endpoint that does not exist,
    /// or a range that runs backwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pericope_model::{book::BookId, canon, reference::{Range, Reference, Verse}};
    ///
    /// let kjv = canon::kjv();
    /// let gen = BookId::new(b"GEN");
    /// let r = Reference::Range(Range::new(Verse::new(gen, 1, 1), Verse::new(gen, 2, 3)));
    /// assert_eq!(kjv.count_verses(&r), 34);
    /// ```
    #[inline]
    pub fn count_verses(&self, reference: &Reference) -> u32 {
        match reference {
            Reference::Verse(_) => 1,
            Reference::Range(_) => self.interval(reference).len(),
        }
    }
}

/// Returns the verse count of `refs`, counting overlapping verses once per
/// occurrence.
///
/// # Panics
///
/// Panics under the same conditions as `Versification::count_verses`.
pub fn count_verses_in(versification: &Versification, refs: &[Reference]) -> u64 {
    refs.iter()
        .map(|r| u64::from(versification.count_verses(r)))
        .sum()
}

/// Returns the shortest prefix of `refs` holding `min(n, total)` verses,
/// truncating the last reference where needed.
///
/// References that fit whole are returned unchanged. A truncated range that
/// keeps a single verse becomes a `Verse`.
///
/// # Panics
///
/// Panics under the same conditions as `Versification::count_verses`.
///
/// # Examples
///
/// ```rust
/// # use pericope_model::{book::BookId, canon, ordinal::first_n_verses, reference::{Range, Reference, Verse}};
///
/// let kjv = canon::kjv();
/// let gen = BookId::new(b"GEN");
/// let refs = [
///     Reference::Range(Range::new(Verse::new(gen, 1, 1), Verse::new(gen, 1, 3))),
///     Reference::Range(Range::new(Verse::new(gen, 2, 1), Verse::new(gen, 2, 5))),
/// ];
/// assert_eq!(
///     first_n_verses(&kjv, &refs, 4),
///     vec![refs[0], Reference::Verse(Verse::new(gen, 2, 1))]
/// );
/// ```
pub fn first_n_verses(versification: &Versification, refs: &[Reference], n: u64) -> Vec<Reference> {
    let mut out = Vec::new();
    let mut remaining = n;

    for reference in refs {
        if remaining == 0 {
            break;
        }
        let count = u64::from(versification.count_verses(reference));
        if count <= remaining {
            out.push(*reference);
            remaining -= count;
        } else {
            // `remaining < count <= u32::MAX` here.
            let kept = versification
                .interval(reference)
                .take(remaining as Ordinal)
                .map(|interval| versification.reference_from_interval(interval));
            out.extend(kept);
            remaining = 0;
        }
    }

    out
}
