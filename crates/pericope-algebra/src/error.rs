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

//! Error types of the range algebra.

use pericope_model::book::BookId;
use thiserror::Error;

/// The error returned when a range cannot be constructed, either directly by
/// `make_range` or while navigating from a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The book is not part of the versification.
    #[error("unknown book {0}")]
    UnknownBook(BookId),

    /// The chapter is 0 or past the last chapter of the book.
    #[error("chapter {chapter} is out of range for {book}, which has {max} chapters")]
    ChapterOutOfRange { book: BookId, chapter: u16, max: u16 },
}

/// The error returned when a reference cannot be repaired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RepairError {
    /// The book is not part of the versification; no clamp can fix it.
    #[error("cannot repair a reference to unknown book {0}")]
    UnknownBook(BookId),
}
