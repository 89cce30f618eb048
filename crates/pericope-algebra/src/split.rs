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

//! Splitting references at book, chapter and verse boundaries.
//!
//! The splitters are lazy iterator adaptors. Chapter splitting runs on the
//! output of book splitting, and verse splitting on the output of chapter
//! splitting, so each level only has to cut at its own boundary.
//!
//! A range beginning mid-book (or mid-chapter) yields a partial first piece
//! up to the end of that book, one piece per whole book in between and a
//! partial last piece from the start of the final book. Book and chapter
//! pieces are always `Range`s. A bare `Verse` is never split.
//!
//! A range that runs backwards, or whose endpoints do not exist in the
//! versification, is yielded unchanged; splitting is not validation.

use pericope_model::{
    reference::{Range, Reference, Verse},
    versification::Versification,
};
use std::marker::PhantomData;

/// Options shared by all splitters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitOptions {
    expand_verses: bool,
}

impl SplitOptions {
    /// Creates the default options: single verses stay `Verse`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, every single verse in the output is a one verse `Range`
    /// instead of a `Verse`.
    #[inline]
    pub fn expand_verses(mut self, yes: bool) -> Self {
        self.expand_verses = yes;
        self
    }

    /// Returns `true` if single verses are expanded to ranges.
    #[inline]
    pub fn expands_verses(&self) -> bool {
        self.expand_verses
    }

    #[inline]
    fn single(&self, verse: Verse) -> Reference {
        if self.expand_verses {
            Reference::Range(Range::new(verse, verse))
        } else {
            Reference::Verse(verse)
        }
    }
}

/// A boundary at which a splitter cuts.
pub trait SplitLevel {
    /// Given a piece starting at `from` within a forward range ending at
    /// `end`, returns the last verse of the piece and the first verse of the
    /// next piece, if any.
    fn cut(versification: &Versification, from: Verse, end: Verse) -> (Verse, Option<Verse>);

    /// Builds the output reference for a piece.
    fn piece(from: Verse, to: Verse, _options: SplitOptions) -> Reference {
        Reference::Range(Range::new(from, to))
    }
}

/// Cuts at the end of every book.
#[derive(Debug, Clone, Copy)]
pub struct BookLevel;

/// Cuts at the end of every chapter.
#[derive(Debug, Clone, Copy)]
pub struct ChapterLevel;

/// Cuts after every verse.
#[derive(Debug, Clone, Copy)]
pub struct VerseLevel;

impl SplitLevel for BookLevel {
    fn cut(versification: &Versification, from: Verse, end: Verse) -> (Verse, Option<Verse>) {
        if from.book == end.book {
            return (end, None);
        }
        let Some(book) = versification.book(from.book) else {
            return (end, None);
        };
        let next = versification
            .book_at(book.index().next())
            .map(|next| next.first_verse());
        (book.last_verse(), next)
    }
}

impl SplitLevel for ChapterLevel {
    fn cut(versification: &Versification, from: Verse, end: Verse) -> (Verse, Option<Verse>) {
        if from.book == end.book && from.chapter == end.chapter {
            return (end, None);
        }
        let Some(book) = versification.book(from.book) else {
            return (end, None);
        };
        let Some(last) = book.chapter_last_verse(from.chapter) else {
            return (end, None);
        };
        let next = if from.chapter < book.chapter_count() {
            Some(Verse::new(book.id(), from.chapter + 1, 1))
        } else {
            versification
                .book_at(book.index().next())
                .map(|next| next.first_verse())
        };
        (last, next)
    }
}

impl SplitLevel for VerseLevel {
    fn cut(versification: &Versification, from: Verse, end: Verse) -> (Verse, Option<Verse>) {
        if from == end {
            return (end, None);
        }
        let next = versification
            .checked_to_ordinal(from)
            .and_then(|ordinal| versification.checked_from_ordinal(ordinal + 1));
        (from, next)
    }

    #[inline]
    fn piece(from: Verse, _to: Verse, options: SplitOptions) -> Reference {
        options.single(from)
    }
}

/// A lazy splitter cutting the references of `I` at the boundaries of `L`.
#[derive(Debug, Clone)]
pub struct Split<'a, I, L> {
    versification: &'a Versification,
    inner: I,
    options: SplitOptions,
    pending: Option<(Verse, Verse)>,
    _level: PhantomData<L>,
}

/// Splits at book boundaries.
pub type SplitByBook<'a, I> = Split<'a, I, BookLevel>;
/// Splits at book and chapter boundaries.
pub type SplitByChapter<'a, I> = Split<'a, SplitByBook<'a, I>, ChapterLevel>;
/// Splits into single verses.
pub type SplitByVerse<'a, I> = Split<'a, SplitByChapter<'a, I>, VerseLevel>;

impl<'a, I, L> Split<'a, I, L>
where
    I: Iterator<Item = Reference>,
    L: SplitLevel,
{
    fn new(versification: &'a Versification, inner: I, options: SplitOptions) -> Self {
        Self {
            versification,
            inner,
            options,
            pending: None,
            _level: PhantomData,
        }
    }

    fn emit(&mut self, from: Verse, end: Verse) -> Reference {
        let (to, next) = L::cut(self.versification, from, end);
        self.pending = next.map(|next| (next, end));
        L::piece(from, to, self.options)
    }
}

impl<I, L> Iterator for Split<'_, I, L>
where
    I: Iterator<Item = Reference>,
    L: SplitLevel,
{
    type Item = Reference;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((from, end)) = self.pending.take() {
            return Some(self.emit(from, end));
        }
        match self.inner.next()? {
            Reference::Verse(verse) => Some(self.options.single(verse)),
            reference @ Reference::Range(range) => {
                if self.versification.checked_interval(&reference).is_none() {
                    return Some(reference);
                }
                Some(self.emit(range.start, range.end))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, _) = self.inner.size_hint();
        (lower.saturating_add(usize::from(self.pending.is_some())), None)
    }
}

/// Lazily splits `refs` so that no piece crosses a book boundary.
///
/// # Examples
///
/// ```rust
/// # use pericope_algebra::split::{iterate_by_book, SplitOptions};
/// # use pericope_model::{book::BookId, canon, reference::{Range, Reference, Verse}};
///
/// let kjv = canon::kjv();
/// let (gen, exo, lev) = (BookId::new(b"GEN"), BookId::new(b"EXO"), BookId::new(b"LEV"));
/// let r = Reference::Range(Range::new(Verse::new(gen, 50, 1), Verse::new(lev, 1, 2)));
///
/// let pieces: Vec<_> = iterate_by_book(&kjv, [r], SplitOptions::new()).collect();
/// assert_eq!(
///     pieces,
///     vec![
///         Reference::Range(Range::new(Verse::new(gen, 50, 1), Verse::new(gen, 50, 26))),
///         Reference::Range(Range::new(Verse::new(exo, 1, 1), Verse::new(exo, 40, 38))),
///         Reference::Range(Range::new(Verse::new(lev, 1, 1), Verse::new(lev, 1, 2))),
///     ]
/// );
/// ```
pub fn iterate_by_book<I>(
    versification: &Versification,
    refs: I,
    options: SplitOptions,
) -> SplitByBook<'_, I::IntoIter>
where
    I: IntoIterator<Item = Reference>,
{
    Split::new(versification, refs.into_iter(), options)
}

/// Lazily splits `refs` so that no piece crosses a chapter boundary.
pub fn iterate_by_chapter<I>(
    versification: &Versification,
    refs: I,
    options: SplitOptions,
) -> SplitByChapter<'_, I::IntoIter>
where
    I: IntoIterator<Item = Reference>,
{
    Split::new(versification, iterate_by_book(versification, refs, options), options)
}

/// Lazily splits `refs` into one reference per verse.
pub fn iterate_by_verse<I>(
    versification: &Versification,
    refs: I,
    options: SplitOptions,
) -> SplitByVerse<'_, I::IntoIter>
where
    I: IntoIterator<Item = Reference>,
{
    Split::new(versification, iterate_by_chapter(versification, refs, options), options)
}

/// Splits `refs` at book boundaries.
pub fn split_by_book(
    versification: &Versification,
    refs: &[Reference],
    options: SplitOptions,
) -> Vec<Reference> {
    iterate_by_book(versification, refs.iter().copied(), options).collect()
}

/// Splits `refs` at book and chapter boundaries.
pub fn split_by_chapter(
    versification: &Versification,
    refs: &[Reference],
    options: SplitOptions,
) -> Vec<Reference> {
    iterate_by_chapter(versification, refs.iter().copied(), options).collect()
}

/// Splits `refs` into single verses.
pub fn split_by_verse(
    versification: &Versification,
    refs: &[Reference],
    options: SplitOptions,
) -> Vec<Reference> {
    iterate_by_verse(versification, refs.iter().copied(), options).collect()
}
