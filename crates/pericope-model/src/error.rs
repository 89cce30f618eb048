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

//! Error types for building a versification.

use crate::book::BookId;
use thiserror::Error;

/// The error returned when a versification description is malformed or
/// internally inconsistent.
#[derive(Debug, Error)]
pub enum VersificationError {
    /// The description lists no books.
    #[error("versification must contain at least one book")]
    Empty,

    /// Two books share a code.
    #[error("book {0} is defined more than once")]
    DuplicateBook(BookId),

    /// A book lists no chapters.
    #[error("book {0} has no chapters")]
    NoChapters(BookId),

    /// A book lists more chapters than a `u16` chapter number can address.
    #[error("book {book} has {count} chapters, more than a chapter number can address")]
    TooManyChapters { book: BookId, count: usize },

    /// A chapter has a verse count of zero.
    #[error("chapter {chapter} of {book} has no verses")]
    EmptyChapter { book: BookId, chapter: u16 },

    /// The versification holds more verses than an ordinal can address.
    #[error("versification holds more verses than an ordinal can address")]
    TooManyVerses,

    /// A range alias has no spans to resolve.
    #[error("range alias `{pattern}` has no spans")]
    EmptyAlias { pattern: String },

    /// A range alias names a book the versification does not define.
    #[error("range alias `{pattern}` refers to unknown book {book}")]
    UnknownAliasBook { pattern: String, book: BookId },

    /// A range alias span ends in a book that precedes its first book.
    #[error("range alias `{pattern}` spans {from}..{to}, which runs backwards")]
    BackwardsAliasSpan {
        pattern: String,
        from: BookId,
        to: BookId,
    },

    /// A range alias pattern is not a valid regular expression.
    #[error("invalid range alias pattern `{pattern}`")]
    InvalidAliasPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The JSON form of the description could not be decoded.
    #[error("malformed versification description: {0}")]
    Json(#[from] serde_json::Error),
}
