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

//! Bucketing references per book and per chapter.

use crate::{
    error::RangeError,
    navigate::{check_chapter, lookup},
    split::{iterate_by_book, iterate_by_chapter, SplitOptions},
};
use pericope_model::{
    book::BookId,
    index::BookIndex,
    reference::Reference,
    versification::Versification,
};
use std::collections::BTreeMap;

/// The references falling into one book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookGroup {
    pub book: BookId,
    pub index: BookIndex,
    /// Pieces in the order they were encountered.
    pub refs: Vec<Reference>,
}

/// The references falling into one chapter of a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterGroup {
    pub book: BookId,
    pub index: BookIndex,
    pub chapter: u16,
    /// Pieces in the order they were encountered.
    pub refs: Vec<Reference>,
}

fn index_of(versification: &Versification, book: BookId) -> Result<BookIndex, RangeError> {
    versification
        .book_index(book)
        .ok_or(RangeError::UnknownBook(book))
}

/// Splits `refs` at book boundaries and buckets the pieces per book.
///
/// Groups are sorted by canonical book order. Inside a group the pieces
/// keep the order in which they were encountered. A piece that could not be
/// split (a backwards range) lands in the group of its first verse.
///
/// # Errors
///
/// Returns `RangeError::UnknownBook` if a piece starts in a book the
/// versification does not define.
///
/// # Examples
///
/// ```rust
/// # use pericope_algebra::group::group_by_book;
/// # use pericope_model::{book::BookId, canon, reference::{Reference, Verse}};
///
/// let kjv = canon::kjv();
/// let (gen, exo) = (BookId::new(b"GEN"), BookId::new(b"EXO"));
/// let refs = [
///     Reference::Verse(Verse::new(exo, 3, 14)),
///     Reference::Verse(Verse::new(gen, 1, 1)),
///     Reference::Verse(Verse::new(exo, 1, 1)),
/// ];
/// let groups = group_by_book(&kjv, &refs).unwrap();
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].book, gen);
/// assert_eq!(groups[1].refs, vec![refs[0], refs[2]]);
/// ```
pub fn group_by_book(
    versification: &Versification,
    refs: &[Reference],
) -> Result<Vec<BookGroup>, RangeError> {
    let mut slots: Vec<Option<BookGroup>> = vec![None; versification.num_books()];

    for piece in iterate_by_book(versification, refs.iter().copied(), SplitOptions::new()) {
        let book = piece.start().book;
        let index = index_of(versification, book)?;
        slots[index.get()]
            .get_or_insert_with(|| BookGroup {
                book,
                index,
                refs: Vec::new(),
            })
            .refs
            .push(piece);
    }

    Ok(slots.into_iter().flatten().collect())
}

/// Splits `refs` at chapter boundaries and buckets the pieces per
/// `(book, chapter)`.
///
/// Groups are sorted by canonical book order, then chapter. Inside a group
/// the pieces keep the order in which they were encountered.
///
/// # Errors
///
/// Returns `RangeError::UnknownBook` if a piece starts in a book the
/// versification does not define, and `RangeError::ChapterOutOfRange` if it
/// starts in a chapter the book does not have.
pub fn group_by_chapter(
    versification: &Versification,
    refs: &[Reference],
) -> Result<Vec<ChapterGroup>, RangeError> {
    let mut buckets: BTreeMap<(BookIndex, u16), ChapterGroup> = BTreeMap::new();

    for piece in iterate_by_chapter(versification, refs.iter().copied(), SplitOptions::new()) {
        let start = piece.start();
        check_chapter(lookup(versification, start.book)?, start.chapter)?;
        let index = index_of(versification, start.book)?;
        buckets
            .entry((index, start.chapter))
            .or_insert_with(|| ChapterGroup {
                book: start.book,
                index,
                chapter: start.chapter,
                refs: Vec::new(),
            })
            .refs
            .push(piece);
    }

    Ok(buckets.into_values().collect())
}
