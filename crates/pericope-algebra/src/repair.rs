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

//! Best-effort repair of structurally invalid references.
//!
//! Chapters and verses outside their bounds are clamped, backwards ranges
//! are turned around, and a range that ends up covering one verse becomes a
//! `Verse`. An unknown book cannot be repaired.

use crate::error::RepairError;
use pericope_model::{
    reference::{Reference, Verse},
    versification::Versification,
};

fn repair_verse(versification: &Versification, verse: Verse) -> Result<Verse, RepairError> {
    let book = versification
        .book(verse.book)
        .ok_or(RepairError::UnknownBook(verse.book))?;

    let repaired = match book.chapter(verse.chapter) {
        Some(chapter) => Verse::new(
            verse.book,
            verse.chapter,
            verse.verse.clamp(1, chapter.verse_count()),
        ),
        None if verse.chapter == 0 => {
            let count = book.verse_count(1).unwrap_or(1);
            Verse::new(verse.book, 1, verse.verse.clamp(1, count))
        }
        None => book.last_verse(),
    };

    if repaired != verse {
        tracing::debug!(from = %verse, to = %repaired, "clamped verse");
    }
    Ok(repaired)
}

/// Returns a repaired copy of `reference`.
///
/// Chapter 0 becomes 1 and verse 0 becomes 1. A chapter past the end of the
/// book becomes the last verse of the book, a verse past the end of its
/// chapter the last verse of the chapter. A range whose end precedes its
/// start has its endpoints swapped.
///
/// # Errors
///
/// Returns `RepairError::UnknownBook` if an endpoint names a book the
/// versification does not define.
///
/// # Examples
///
/// ```rust
/// # use pericope_algebra::repair::repair;
/// # use pericope_model::{book::BookId, canon, reference::{Reference, Verse}};
///
/// let kjv = canon::kjv();
/// let gen = BookId::new(b"GEN");
/// assert_eq!(
///     repair(&kjv, &Reference::Verse(Verse::new(gen, 51, 1))).unwrap(),
///     Reference::Verse(Verse::new(gen, 50, 26))
/// );
/// ```
pub fn repair(versification: &Versification, reference: &Reference) -> Result<Reference, RepairError> {
    match reference {
        Reference::Verse(verse) => Ok(Reference::Verse(repair_verse(versification, *verse)?)),
        Reference::Range(range) => {
            let mut start = repair_verse(versification, range.start)?;
            let mut end = repair_verse(versification, range.end)?;
            // Both endpoints exist now.
            if versification.to_ordinal(end) < versification.to_ordinal(start) {
                tracing::debug!(start = %start, end = %end, "swapped backwards range");
                std::mem::swap(&mut start, &mut end);
            }
            Ok(Reference::from_endpoints(start, end))
        }
    }
}

/// Repairs `reference` in place. On error `reference` is left untouched.
///
/// # Errors
///
/// Returns `RepairError::UnknownBook` under the same conditions as `repair`.
pub fn repair_in_place(
    versification: &Versification,
    reference: &mut Reference,
) -> Result<(), RepairError> {
    *reference = repair(versification, reference)?;
    Ok(())
}
