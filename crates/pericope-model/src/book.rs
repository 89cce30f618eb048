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

//! Book identity and per-book metadata.
//!
//! A `BookId` is the three character code a book is known by (`GEN`, `1SA`,
//! `REV`). `BookMeta` is what a `Versification` knows about a book: its names,
//! its position in the canonical order, and the verse layout of its chapters.
//! `ChapterMeta` carries the cumulative verse count the ordinal mapping is
//! built on.

use crate::{index::BookIndex, ordinal::Ordinal, reference::Verse};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The error returned when a string is not a valid book code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookIdError {
    /// The code is not exactly three characters long.
    #[error("book code must be 3 characters long, got {0}")]
    InvalidLength(usize),
    /// The code contains something other than ASCII letters and digits.
    #[error("book code contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// A three character book code such as `GEN` or `1SA`.
///
/// Codes are stored upper-cased; parsing accepts any letter case. The derived
/// ordering is alphabetical, not canonical: canonical order is a property of
/// a `Versification` (see `BookMeta::index`).
///
/// # Examples
///
/// ```rust
/// # use pericope_model::book::BookId;
///
/// let gen: BookId = "gen".parse().unwrap();
/// assert_eq!(gen, BookId::new(b"GEN"));
/// assert_eq!(gen.as_str(), "GEN");
/// assert!("Genesis".parse::<BookId>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookId([u8; 3]);

impl BookId {
    /// Creates a `BookId` from an upper-case code.
    ///
    /// # Panics
    ///
    /// Panics if `code` contains anything other than ASCII upper-case letters
    /// and digits. Use `str::parse` for untrusted input.
    #[inline]
    pub const fn new(code: &[u8; 3]) -> Self {
        let mut i = 0;
        while i < code.len() {
            assert!(
                code[i].is_ascii_uppercase() || code[i].is_ascii_digit(),
                "called `BookId::new` with a code that is not upper-case ASCII alphanumeric"
            );
            i += 1;
        }
        Self(*code)
    }

    /// Returns the code as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        // Construction only admits ASCII.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl FromStr for BookId {
    type Err = BookIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 3 {
            return Err(BookIdError::InvalidLength(len));
        }
        let mut code = [0u8; 3];
        for (slot, c) in code.iter_mut().zip(s.chars()) {
            if !c.is_ascii_alphanumeric() {
                return Err(BookIdError::InvalidCharacter(c));
            }
            *slot = c.to_ascii_uppercase() as u8;
        }
        Ok(Self(code))
    }
}

impl TryFrom<String> for BookId {
    type Error = BookIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BookId> for String {
    fn from(id: BookId) -> Self {
        id.as_str().to_owned()
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BookId({})", self.as_str())
    }
}

/// The verse layout of a single chapter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ChapterMeta {
    verse_count: u16,
    cumulative_verse: Ordinal,
}

impl ChapterMeta {
    #[inline]
    pub(crate) const fn new(verse_count: u16, cumulative_verse: Ordinal) -> Self {
        Self {
            verse_count,
            cumulative_verse,
        }
    }

    /// Returns the number of verses in the chapter.
    #[inline]
    pub const fn verse_count(&self) -> u16 {
        self.verse_count
    }

    /// Returns the number of verses in the whole versification that come
    /// strictly before this chapter. This is the ordinal of its first verse.
    #[inline]
    pub const fn cumulative_verse(&self) -> Ordinal {
        self.cumulative_verse
    }

    /// Returns the ordinal of the last verse of the chapter.
    #[inline]
    pub const fn last_ordinal(&self) -> Ordinal {
        self.cumulative_verse + self.verse_count as Ordinal - 1
    }
}

/// Everything a versification knows about one book.
///
/// Instances are created by `VersificationBuilder` and are read-only
/// afterwards. Chapters are addressed 1-based in every accessor, matching the
/// way references are written.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BookMeta {
    id: BookId,
    osis_id: String,
    name: String,
    index: BookIndex,
    aliases: Vec<String>,
    chapters: Vec<ChapterMeta>,
}

impl BookMeta {
    #[inline]
    pub(crate) fn new(
        id: BookId,
        osis_id: String,
        name: String,
        index: BookIndex,
        aliases: Vec<String>,
        chapters: Vec<ChapterMeta>,
    ) -> Self {
        debug_assert!(
            !chapters.is_empty(),
            "called `BookMeta::new` without chapters for book {}",
            id
        );
        Self {
            id,
            osis_id,
            name,
            index,
            aliases,
            chapters,
        }
    }

    /// Returns the book code.
    #[inline]
    pub fn id(&self) -> BookId {
        self.id
    }

    /// Returns the OSIS identifier of the book (e.g. `Gen`, `1Sam`).
    #[inline]
    pub fn osis_id(&self) -> &str {
        &self.osis_id
    }

    /// Returns the display name of the book.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the zero-based position of the book in the canonical order.
    #[inline]
    pub fn index(&self) -> BookIndex {
        self.index
    }

    /// Returns the alternative names and abbreviations of the book.
    #[inline]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Returns the chapters of the book, first chapter at position 0.
    #[inline]
    pub fn chapters(&self) -> &[ChapterMeta] {
        &self.chapters
    }

    /// Returns the number of chapters in the book.
    #[inline]
    pub fn chapter_count(&self) -> u16 {
        // The builder rejects books with more than `u16::MAX` chapters.
        self.chapters.len() as u16
    }

    /// Returns the metadata of the 1-based `chapter`, or `None` if the book
    /// has no such chapter.
    #[inline]
    pub fn chapter(&self, chapter: u16) -> Option<&ChapterMeta> {
        let position = usize::from(chapter).checked_sub(1)?;
        self.chapters.get(position)
    }

    /// Returns the number of verses in the 1-based `chapter`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pericope_model::{book::BookId, canon};
    ///
    /// let kjv = canon::kjv();
    /// let genesis = kjv.book(BookId::new(b"GEN")).unwrap();
    /// assert_eq!(genesis.verse_count(1), Some(31));
    /// assert_eq!(genesis.verse_count(51), None);
    /// ```
    #[inline]
    pub fn verse_count(&self, chapter: u16) -> Option<u16> {
        self.chapter(chapter).map(ChapterMeta::verse_count)
    }

    /// Returns the total number of verses in the book.
    #[inline]
    pub fn total_verses(&self) -> u32 {
        self.last_ordinal() - self.first_ordinal() + 1
    }

    /// Returns the ordinal of the first verse of the book.
    #[inline]
    pub fn first_ordinal(&self) -> Ordinal {
        self.chapters[0].cumulative_verse()
    }

    /// Returns the ordinal of the last verse of the book.
    #[inline]
    pub fn last_ordinal(&self) -> Ordinal {
        self.chapters[self.chapters.len() - 1].last_ordinal()
    }

    /// Returns chapter 1, verse 1 of the book.
    #[inline]
    pub fn first_verse(&self) -> Verse {
        Verse::new(self.id, 1, 1)
    }

    /// Returns the last verse of the last chapter of the book.
    #[inline]
    pub fn last_verse(&self) -> Verse {
        let last = self.chapter_count();
        Verse::new(self.id, last, self.chapters[self.chapters.len() - 1].verse_count())
    }

    /// Returns the last verse of the 1-based `chapter`.
    #[inline]
    pub fn chapter_last_verse(&self, chapter: u16) -> Option<Verse> {
        self.verse_count(chapter)
            .map(|count| Verse::new(self.id, chapter, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> BookMeta {
        BookMeta::new(
            BookId::new(b"RUT"),
            "Ruth".to_owned(),
            "Ruth".to_owned(),
            BookIndex::new(7),
            vec!["Ru".to_owned()],
            vec![
                ChapterMeta::new(22, 100),
                ChapterMeta::new(23, 122),
                ChapterMeta::new(18, 145),
                ChapterMeta::new(22, 163),
            ],
        )
    }

    #[test]
    fn test_book_id_parse_normalizes_case() {
        let id: BookId = "1sa".parse().unwrap();
        assert_eq!(id, BookId::new(b"1SA"));
        assert_eq!(id.to_string(), "1SA");
        assert_eq!(format!("{:?}", id), "BookId(1SA)");
    }

    #[test]
    fn test_book_id_parse_errors() {
        assert_eq!("GE".parse::<BookId>(), Err(BookIdError::InvalidLength(2)));
        assert_eq!("GENE".parse::<BookId>(), Err(BookIdError::InvalidLength(4)));
        assert_eq!(
            "G-N".parse::<BookId>(),
            Err(BookIdError::InvalidCharacter('-'))
        );
        assert_eq!(
            "GÉN".parse::<BookId>(),
            Err(BookIdError::InvalidCharacter('É'))
        );
    }

    #[test]
    #[should_panic(expected = "not upper-case ASCII alphanumeric")]
    fn test_book_id_new_rejects_lowercase() {
        let _ = BookId::new(b"gen");
    }

    #[test]
    fn test_book_id_serde_as_string() {
        let json = serde_json::to_string(&BookId::new(b"JHN")).unwrap();
        assert_eq!(json, "\"JHN\"");
        let back: BookId = serde_json::from_str("\"jhn\"").unwrap();
        assert_eq!(back, BookId::new(b"JHN"));
        assert!(serde_json::from_str::<BookId>("\"John\"").is_err());
    }

    #[test]
    fn test_chapter_meta_bounds() {
        let ch = ChapterMeta::new(31, 0);
        assert_eq!(ch.cumulative_verse(), 0);
        assert_eq!(ch.last_ordinal(), 30);
    }

    #[test]
    fn test_book_meta_chapter_lookup_is_one_based() {
        let book = sample_book();
        assert_eq!(book.chapter_count(), 4);
        assert!(book.chapter(0).is_none());
        assert_eq!(book.verse_count(1), Some(22));
        assert_eq!(book.verse_count(4), Some(22));
        assert_eq!(book.verse_count(5), None);
    }

    #[test]
    fn test_book_meta_extent() {
        let book = sample_book();
        assert_eq!(book.first_ordinal(), 100);
        assert_eq!(book.last_ordinal(), 184);
        assert_eq!(book.total_verses(), 85);
        assert_eq!(book.first_verse(), Verse::new(BookId::new(b"RUT"), 1, 1));
        assert_eq!(book.last_verse(), Verse::new(BookId::new(b"RUT"), 4, 22));
        assert_eq!(
            book.chapter_last_verse(3),
            Some(Verse::new(BookId::new(b"RUT"), 3, 18))
        );
    }
}
