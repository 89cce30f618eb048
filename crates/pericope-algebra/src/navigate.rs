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

//! Whole-book and whole-chapter ranges, and stepping between them.

use crate::error::RangeError;
use pericope_model::{
    book::{BookId, BookMeta},
    reference::{Range, Reference, Verse},
    versification::Versification,
};

pub(crate) fn lookup(
    versification: &Versification,
    book: BookId,
) -> Result<&BookMeta, RangeError> {
    versification.book(book).ok_or(RangeError::UnknownBook(book))
}

pub(crate) fn check_chapter(book: &BookMeta, chapter: u16) -> Result<(), RangeError> {
    let max = book.chapter_count();
    if chapter == 0 || chapter > max {
        return Err(RangeError::ChapterOutOfRange {
            book: book.id(),
            chapter,
            max,
        });
    }
    Ok(())
}

fn full_book(book: &BookMeta) -> Range {
    Range::new(book.first_verse(), book.last_verse())
}

fn full_chapter(book: &BookMeta, chapter: u16) -> Range {
    // Callers pass a chapter of `book`.
    let count = book.verse_count(chapter).unwrap_or(1);
    Range::new(
        Verse::new(book.id(), chapter, 1),
        Verse::new(book.id(), chapter, count),
    )
}

/// Builds the range spanning a whole book, or a whole chapter of it.
///
/// # Errors
///
/// Returns `RangeError::UnknownBook` if the versification has no such book
/// and `RangeError::ChapterOutOfRange` if `chapter` is 0 or past the last
/// chapter.
///
/// # Examples
///
/// ```rust
/// # use pericope_algebra::navigate::make_range;
/// # use pericope_model::{book::BookId, canon, reference::{Range, Verse}};
///
/// let kjv = canon::kjv();
/// let gen = BookId::new(b"GEN");
/// assert_eq!(
///     make_range(&kjv, gen, None).unwrap(),
///     Range::new(Verse::new(gen, 1, 1), Verse::new(gen, 50, 26))
/// );
/// assert_eq!(
///     make_range(&kjv, gen, Some(2)).unwrap(),
///     Range::new(Verse::new(gen, 2, 1), Verse::new(gen, 2, 25))
/// );
/// assert!(make_range(&kjv, gen, Some(51)).is_err());
/// ```
pub fn make_range(
    versification: &Versification,
    book: BookId,
    chapter: Option<u16>,
) -> Result<Range, RangeError> {
    let meta = lookup(versification, book)?;
    match chapter {
        None => Ok(full_book(meta)),
        Some(chapter) => {
            check_chapter(meta, chapter)?;
            Ok(full_chapter(meta, chapter))
        }
    }
}

/// Returns the whole chapter following the chapter in which `reference`
/// ends.
///
/// Moves into the first chapter of the next book when the reference ends in
/// the last chapter of its book, unless `constrain_book` is set. Returns
/// `Ok(None)` past the end of the versification or, when constrained, past
/// the end of the book.
///
/// # Errors
///
/// Returns a `RangeError` if the end of `reference` names an unknown book or
/// a chapter the book does not have.
pub fn next_chapter(
    versification: &Versification,
    reference: &Reference,
    constrain_book: bool,
) -> Result<Option<Range>, RangeError> {
    let end = reference.end();
    let book = lookup(versification, end.book)?;
    check_chapter(book, end.chapter)?;

    if end.chapter < book.chapter_count() {
        return Ok(Some(full_chapter(book, end.chapter + 1)));
    }
    if constrain_book {
        return Ok(None);
    }
    Ok(versification
        .book_at(book.index().next())
        .map(|next| full_chapter(next, 1)))
}

/// Returns the whole chapter preceding the chapter in which `reference`
/// starts.
///
/// Moves into the last chapter of the previous book when the reference
/// starts in chapter 1, unless `constrain_book` is set. Returns `Ok(None)`
/// before the start of the versification or, when constrained, before the
/// start of the book.
///
/// # Errors
///
/// Returns a `RangeError` if the start of `reference` names an unknown book
/// or a chapter the book does not have.
pub fn previous_chapter(
    versification: &Versification,
    reference: &Reference,
    constrain_book: bool,
) -> Result<Option<Range>, RangeError> {
    let start = reference.start();
    let book = lookup(versification, start.book)?;
    check_chapter(book, start.chapter)?;

    if start.chapter > 1 {
        return Ok(Some(full_chapter(book, start.chapter - 1)));
    }
    if constrain_book {
        return Ok(None);
    }
    Ok(book
        .index()
        .prev()
        .and_then(|index| versification.book_at(index))
        .map(|prev| full_chapter(prev, prev.chapter_count())))
}

/// Returns the whole book following the book in which `reference` ends, or
/// `Ok(None)` after the last book.
///
/// # Errors
///
/// Returns `RangeError::UnknownBook` if the end of `reference` names an
/// unknown book.
///
/// # Examples
///
/// ```rust
/// # use pericope_algebra::navigate::next_book;
/// # use pericope_model::{book::BookId, canon, reference::{Range, Reference, Verse}};
///
/// let kjv = canon::kjv();
/// let mal_4_6 = Reference::Verse(Verse::new(BookId::new(b"MAL"), 4, 6));
/// let mat = BookId::new(b"MAT");
/// assert_eq!(
///     next_book(&kjv, &mal_4_6).unwrap(),
///     Some(Range::new(Verse::new(mat, 1, 1), Verse::new(mat, 28, 20)))
/// );
/// ```
pub fn next_book(
    versification: &Versification,
    reference: &Reference,
) -> Result<Option<Range>, RangeError> {
    let book = lookup(versification, reference.end().book)?;
    Ok(versification.book_at(book.index().next()).map(full_book))
}

/// Returns the whole book preceding the book in which `reference` starts,
/// or `Ok(None)` before the first book.
///
/// # Errors
///
/// Returns `RangeError::UnknownBook` if the start of `reference` names an
/// unknown book.
pub fn previous_book(
    versification: &Versification,
    reference: &Reference,
) -> Result<Option<Range>, RangeError> {
    let book = lookup(versification, reference.start().book)?;
    Ok(book
        .index()
        .prev()
        .and_then(|index| versification.book_at(index))
        .map(full_book))
}

/// Returns `true` if `reference` is a range spanning exactly one whole book.
pub fn is_full_book(versification: &Versification, reference: &Reference) -> bool {
    let Some(range) = reference.as_range() else {
        return false;
    };
    versification
        .book(range.start.book)
        .is_some_and(|book| *range == full_book(book))
}

/// Returns `true` if `reference` is a range spanning exactly one whole
/// chapter.
pub fn is_full_chapter(versification: &Versification, reference: &Reference) -> bool {
    let Some(range) = reference.as_range() else {
        return false;
    };
    let start = range.start;
    match versification.book(start.book) {
        Some(book) if book.chapter(start.chapter).is_some() => {
            *range == full_chapter(book, start.chapter)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pericope_model::canon;

    const GEN: BookId = BookId::new(b"GEN");
    const EXO: BookId = BookId::new(b"EXO");
    const REV: BookId = BookId::new(b"REV");
    const XYZ: BookId = BookId::new(b"XYZ");

    fn verse(book: BookId, chapter: u16, verse: u16) -> Reference {
        Reference::Verse(Verse::new(book, chapter, verse))
    }

    #[test]
    fn test_make_range_errors() {
        let kjv = canon::kjv();
        assert_eq!(make_range(&kjv, XYZ, None), Err(RangeError::UnknownBook(XYZ)));
        assert_eq!(
            make_range(&kjv, GEN, Some(0)),
            Err(RangeError::ChapterOutOfRange {
                book: GEN,
                chapter: 0,
                max: 50
            })
        );
        assert_eq!(
            make_range(&kjv, GEN, Some(51)),
            Err(RangeError::ChapterOutOfRange {
                book: GEN,
                chapter: 51,
                max: 50
            })
        );
    }

    #[test]
    fn test_next_chapter() {
        let kjv = canon::kjv();
        assert_eq!(
            next_chapter(&kjv, &verse(GEN, 1, 31), false).unwrap(),
            Some(make_range(&kjv, GEN, Some(2)).unwrap())
        );
        assert_eq!(
            next_chapter(&kjv, &verse(GEN, 50, 1), false).unwrap(),
            Some(make_range(&kjv, EXO, Some(1)).unwrap())
        );
        assert_eq!(next_chapter(&kjv, &verse(GEN, 50, 1), true).unwrap(), None);
        assert_eq!(next_chapter(&kjv, &verse(REV, 22, 21), false).unwrap(), None);
    }

    #[test]
    fn test_next_chapter_uses_end_of_range() {
        let kjv = canon::kjv();
        let r = Reference::Range(Range::new(Verse::new(GEN, 1, 1), Verse::new(GEN, 3, 4)));
        assert_eq!(
            next_chapter(&kjv, &r, true).unwrap(),
            Some(make_range(&kjv, GEN, Some(4)).unwrap())
        );
    }

    #[test]
    fn test_previous_chapter() {
        let kjv = canon::kjv();
        assert_eq!(
            previous_chapter(&kjv, &verse(EXO, 1, 1), false).unwrap(),
            Some(make_range(&kjv, GEN, Some(50)).unwrap())
        );
        assert_eq!(previous_chapter(&kjv, &verse(EXO, 1, 1), true).unwrap(), None);
        assert_eq!(previous_chapter(&kjv, &verse(GEN, 1, 1), false).unwrap(), None);
        assert_eq!(
            previous_chapter(&kjv, &verse(EXO, 2, 1), true).unwrap(),
            Some(make_range(&kjv, EXO, Some(1)).unwrap())
        );
    }

    #[test]
    fn test_chapter_navigation_rejects_invalid_input() {
        let kjv = canon::kjv();
        assert_eq!(
            next_chapter(&kjv, &verse(XYZ, 1, 1), false),
            Err(RangeError::UnknownBook(XYZ))
        );
        assert!(matches!(
            previous_chapter(&kjv, &verse(GEN, 60, 1), false),
            Err(RangeError::ChapterOutOfRange { chapter: 60, .. })
        ));
    }

    #[test]
    fn test_book_navigation() {
        let kjv = canon::kjv();
        assert_eq!(
            next_book(&kjv, &verse(GEN, 5, 5)).unwrap(),
            Some(make_range(&kjv, EXO, None).unwrap())
        );
        assert_eq!(next_book(&kjv, &verse(REV, 1, 1)).unwrap(), None);
        assert_eq!(
            previous_book(&kjv, &verse(EXO, 5, 5)).unwrap(),
            Some(make_range(&kjv, GEN, None).unwrap())
        );
        assert_eq!(previous_book(&kjv, &verse(GEN, 1, 1)).unwrap(), None);
        assert_eq!(next_book(&kjv, &verse(XYZ, 1, 1)), Err(RangeError::UnknownBook(XYZ)));
    }

    #[test]
    fn test_full_book_and_chapter_predicates() {
        let kjv = canon::kjv();
        let genesis = Reference::Range(make_range(&kjv, GEN, None).unwrap());
        let chapter = Reference::Range(make_range(&kjv, GEN, Some(3)).unwrap());

        assert!(is_full_book(&kjv, &genesis));
        assert!(!is_full_chapter(&kjv, &genesis));
        assert!(is_full_chapter(&kjv, &chapter));
        assert!(!is_full_book(&kjv, &chapter));

        let short = Reference::Range(Range::new(Verse::new(GEN, 3, 1), Verse::new(GEN, 3, 23)));
        assert!(!is_full_chapter(&kjv, &short));
        assert!(!is_full_chapter(&kjv, &verse(GEN, 3, 1)));
        assert!(!is_full_book(&kjv, &verse(GEN, 1, 1)));
        assert!(!is_full_chapter(&kjv, &verse(XYZ, 1, 1)));
    }
}
