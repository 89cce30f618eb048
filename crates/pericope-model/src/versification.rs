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

//! The `Versification`: the canonical ordered list of books, their chapter
//! and verse layout, and named range aliases.
//!
//! A versification is built once through `VersificationBuilder` (or from a
//! `RawVersification` description, see `loading`) and is read-only afterwards.
//! Every other part of the workspace borrows it; nothing clones its tables.
//!
//! The builder computes, per book, its zero-based `index` in the canonical
//! order and, per chapter, the cumulative number of verses that precede it in
//! the whole versification. Those cumulative counts strictly increase from
//! the first chapter of the first book to the last chapter of the last book
//! and are the basis of the ordinal mapping (see `ordinal`).

use crate::{
    book::{BookId, BookMeta, ChapterMeta},
    error::VersificationError,
    index::BookIndex,
    loading::{RawBook, RawRangeAlias},
    ordinal::Ordinal,
    reference::{Reference, Verse},
};
use regex::{Regex, RegexBuilder};
use rustc_hash::FxHashMap;

/// A named group of references, such as "Torah" or "Gospels".
///
/// The pattern is a case-insensitive regular expression matched against the
/// whole (trimmed) name a caller asks for.
#[derive(Debug, Clone)]
pub struct RangeAlias {
    pattern: Regex,
    refs: Vec<Reference>,
}

impl RangeAlias {
    /// Returns the compiled pattern.
    #[inline]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Returns the references the alias resolves to.
    #[inline]
    pub fn refs(&self) -> &[Reference] {
        &self.refs
    }

    /// Returns `true` if `name` matches the alias pattern.
    #[inline]
    pub fn is_match(&self, name: &str) -> bool {
        self.pattern.is_match(name.trim())
    }
}

/// A scheme dividing a canon of books into chapters and verses.
///
/// # Examples
///
/// ```rust
/// # use pericope_model::{book::BookId, canon};
///
/// let kjv = canon::kjv();
/// assert_eq!(kjv.num_books(), 66);
/// assert_eq!(kjv.total_verses(), 31_102);
///
/// let genesis = kjv.book(BookId::new(b"GEN")).unwrap();
/// assert_eq!(genesis.chapter_count(), 50);
/// assert_eq!(genesis.index().get(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Versification {
    order: Vec<BookMeta>,
    book: FxHashMap<BookId, BookIndex>,
    range_aliases: Vec<RangeAlias>,
    total_verses: u32,
}

impl Versification {
    /// Returns the books in canonical order.
    #[inline]
    pub fn books(&self) -> &[BookMeta] {
        &self.order
    }

    /// Returns the number of books in the versification.
    #[inline]
    pub fn num_books(&self) -> usize {
        self.order.len()
    }

    /// Returns the total number of verses in the versification.
    ///
    /// Valid ordinals are `0..total_verses()`.
    #[inline]
    pub fn total_verses(&self) -> u32 {
        self.total_verses
    }

    /// Returns the metadata of the book with code `id`.
    #[inline]
    pub fn book(&self, id: BookId) -> Option<&BookMeta> {
        self.book.get(&id).map(|index| &self.order[index.get()])
    }

    /// Returns the canonical position of the book with code `id`.
    #[inline]
    pub fn book_index(&self, id: BookId) -> Option<BookIndex> {
        self.book.get(&id).copied()
    }

    /// Returns `true` if the versification defines a book with code `id`.
    #[inline]
    pub fn contains_book(&self, id: BookId) -> bool {
        self.book.contains_key(&id)
    }

    /// Returns the book at canonical position `index`.
    #[inline]
    pub fn book_at(&self, index: BookIndex) -> Option<&BookMeta> {
        self.order.get(index.get())
    }

    /// Returns the first book in canonical order.
    #[inline]
    pub fn first_book(&self) -> &BookMeta {
        &self.order[0]
    }

    /// Returns the last book in canonical order.
    #[inline]
    pub fn last_book(&self) -> &BookMeta {
        &self.order[self.order.len() - 1]
    }

    /// Returns the very first verse of the versification.
    #[inline]
    pub fn first_verse(&self) -> Verse {
        self.first_book().first_verse()
    }

    /// Returns the very last verse of the versification.
    #[inline]
    pub fn last_verse(&self) -> Verse {
        self.last_book().last_verse()
    }

    /// Returns the named range aliases in declaration order.
    #[inline]
    pub fn range_aliases(&self) -> &[RangeAlias] {
        &self.range_aliases
    }

    /// Resolves a range alias by name. The first alias whose pattern matches
    /// wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pericope_model::{book::BookId, canon, reference::{Range, Reference, Verse}};
    ///
    /// let kjv = canon::kjv();
    /// let torah = kjv.resolve_alias("Torah").unwrap();
    /// assert_eq!(
    ///     torah,
    ///     &[Reference::Range(Range::new(
    ///         Verse::new(BookId::new(b"GEN"), 1, 1),
    ///         Verse::new(BookId::new(b"DEU"), 34, 12),
    ///     ))]
    /// );
    /// assert!(kjv.resolve_alias("Apocrypha").is_none());
    /// ```
    pub fn resolve_alias(&self, name: &str) -> Option<&[Reference]> {
        self.range_aliases
            .iter()
            .find(|alias| alias.is_match(name))
            .map(RangeAlias::refs)
    }
}

/// A builder for `Versification`.
///
/// Books are added in canonical order. Validation happens in `build`, which
/// reports the first inconsistency it finds.
///
/// # Examples
///
/// ```rust
/// # use pericope_model::{book::BookId, loading::{RawBook, RawRangeAlias}, versification::VersificationBuilder};
///
/// let mut builder = VersificationBuilder::new();
/// builder
///     .add_book(RawBook::new(BookId::new(b"AAA"), "Aa", "Alpha", vec![3, 2]))
///     .add_book(RawBook::new(BookId::new(b"BBB"), "Bb", "Beta", vec![4]))
///     .add_range_alias(RawRangeAlias::new("all", BookId::new(b"AAA"), BookId::new(b"BBB")));
/// let v = builder.build().unwrap();
///
/// assert_eq!(v.total_verses(), 9);
/// assert_eq!(v.books()[1].chapters()[0].cumulative_verse(), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VersificationBuilder {
    books: Vec<RawBook>,
    range_aliases: Vec<RawRangeAlias>,
}

impl VersificationBuilder {
    /// Creates an empty builder.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of books added so far.
    #[inline]
    pub fn num_books(&self) -> usize {
        self.books.len()
    }

    /// Appends a book at the end of the canonical order.
    #[inline]
    pub fn add_book(&mut self, book: RawBook) -> &mut Self {
        self.books.push(book);
        self
    }

    /// Appends several books at the end of the canonical order.
    #[inline]
    pub fn add_books<I>(&mut self, books: I) -> &mut Self
    where
        I: IntoIterator<Item = RawBook>,
    {
        self.books.extend(books);
        self
    }

    /// Adds a named range alias. Aliases are consulted in the order added.
    #[inline]
    pub fn add_range_alias(&mut self, alias: RawRangeAlias) -> &mut Self {
        self.range_aliases.push(alias);
        self
    }

    /// Validates the description and builds the `Versification`.
    ///
    /// # Errors
    ///
    /// Returns a `VersificationError` if there are no books, a book code is
    /// repeated, a book has no chapters (or too many), a chapter has no
    /// verses, the verse total overflows an ordinal, or a range alias is
    /// malformed or names an unknown book.
    pub fn build(self) -> Result<Versification, VersificationError> {
        if self.books.is_empty() {
            return Err(VersificationError::Empty);
        }

        let mut order = Vec::with_capacity(self.books.len());
        let mut book_map =
            FxHashMap::with_capacity_and_hasher(self.books.len(), Default::default());
        let mut cumulative: Ordinal = 0;

        for (position, raw) in self.books.into_iter().enumerate() {
            let index = BookIndex::new(position);
            if book_map.insert(raw.id, index).is_some() {
                return Err(VersificationError::DuplicateBook(raw.id));
            }
            if raw.verse_counts.is_empty() {
                return Err(VersificationError::NoChapters(raw.id));
            }
            if raw.verse_counts.len() > usize::from(u16::MAX) {
                return Err(VersificationError::TooManyChapters {
                    book: raw.id,
                    count: raw.verse_counts.len(),
                });
            }

            let mut chapters = Vec::with_capacity(raw.verse_counts.len());
            for (offset, &verse_count) in raw.verse_counts.iter().enumerate() {
                // Fits: the chapter count was checked above.
                let chapter = (offset + 1) as u16;
                if verse_count == 0 {
                    return Err(VersificationError::EmptyChapter {
                        book: raw.id,
                        chapter,
                    });
                }
                chapters.push(ChapterMeta::new(verse_count, cumulative));
                cumulative = cumulative
                    .checked_add(Ordinal::from(verse_count))
                    .ok_or(VersificationError::TooManyVerses)?;
            }

            order.push(BookMeta::new(
                raw.id,
                raw.osis_id,
                raw.name,
                index,
                raw.aliases,
                chapters,
            ));
        }

        let mut versification = Versification {
            order,
            book: book_map,
            range_aliases: Vec::with_capacity(self.range_aliases.len()),
            total_verses: cumulative,
        };

        for raw in self.range_aliases {
            let alias = resolve_range_alias(&versification, raw)?;
            versification.range_aliases.push(alias);
        }

        tracing::debug!(
            books = versification.order.len(),
            total_verses = versification.total_verses,
            range_aliases = versification.range_aliases.len(),
            "built versification"
        );

        Ok(versification)
    }
}

/// Compiles the pattern of a raw alias and turns its book spans into ranges.
fn resolve_range_alias(
    versification: &Versification,
    raw: RawRangeAlias,
) -> Result<RangeAlias, VersificationError> {
    if raw.spans.is_empty() {
        return Err(VersificationError::EmptyAlias {
            pattern: raw.pattern,
        });
    }

    let mut refs = Vec::with_capacity(raw.spans.len());
    for span in &raw.spans {
        let lookup = |id: BookId| {
            versification
                .book(id)
                .ok_or_else(|| VersificationError::UnknownAliasBook {
                    pattern: raw.pattern.clone(),
                    book: id,
                })
        };
        let from = lookup(span.from)?;
        let to = lookup(span.to)?;
        if to.index() < from.index() {
            return Err(VersificationError::BackwardsAliasSpan {
                pattern: raw.pattern.clone(),
                from: span.from,
                to: span.to,
            });
        }
        refs.push(Reference::from_endpoints(from.first_verse(), to.last_verse()));
    }

    let anchored = format!("^(?:{})$", raw.pattern);
    let pattern = RegexBuilder::new(&anchored)
        .case_insensitive(true)
        .build()
        .map_err(|source| VersificationError::InvalidAliasPattern {
            pattern: raw.pattern.clone(),
            source,
        })?;

    tracing::trace!(pattern = %raw.pattern, refs = refs.len(), "resolved range alias");

    Ok(RangeAlias { pattern, refs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::Range;

    const AAA: BookId = BookId::new(b"AAA");
    const BBB: BookId = BookId::new(b"BBB");
    const CCC: BookId = BookId::new(b"CCC");

    fn builder() -> VersificationBuilder {
        let mut b = VersificationBuilder::new();
        b.add_book(RawBook::new(AAA, "Aaa", "Alpha", vec![3, 2]))
            .add_book(RawBook::new(BBB, "Bbb", "Beta", vec![4]).with_aliases(["B", "Bet"]))
            .add_book(RawBook::new(CCC, "Ccc", "Gamma", vec![1, 1, 5]));
        b
    }

    #[test]
    fn test_build_computes_indices_and_cumulative_counts() {
        let v = builder().build().unwrap();

        assert_eq!(v.num_books(), 3);
        assert_eq!(v.total_verses(), 16);
        for (i, book) in v.books().iter().enumerate() {
            assert_eq!(book.index().get(), i);
        }

        let cumulative: Vec<Ordinal> = v
            .books()
            .iter()
            .flat_map(|b| b.chapters().iter().map(|c| c.cumulative_verse()))
            .collect();
        assert_eq!(cumulative, vec![0, 3, 5, 9, 10, 11]);
    }

    #[test]
    fn test_lookup() {
        let v = builder().build().unwrap();
        let beta = v.book(BBB).unwrap();
        assert_eq!(beta.name(), "Beta");
        assert_eq!(beta.osis_id(), "Bbb");
        assert_eq!(beta.aliases(), &["B".to_owned(), "Bet".to_owned()]);
        assert_eq!(v.book_index(CCC), Some(BookIndex::new(2)));
        assert!(v.contains_book(AAA));
        assert!(!v.contains_book(BookId::new(b"ZZZ")));
        assert_eq!(v.book_at(BookIndex::new(1)).map(BookMeta::id), Some(BBB));
        assert!(v.book_at(BookIndex::new(3)).is_none());
        assert_eq!(v.first_verse(), Verse::new(AAA, 1, 1));
        assert_eq!(v.last_verse(), Verse::new(CCC, 3, 5));
    }

    #[test]
    fn test_versification_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Versification>();
    }

    #[test]
    fn test_build_rejects_empty() {
        assert!(matches!(
            VersificationBuilder::new().build(),
            Err(VersificationError::Empty)
        ));
    }

    #[test]
    fn test_build_rejects_duplicate_book() {
        let mut b = builder();
        b.add_book(RawBook::new(AAA, "Aaa", "Again", vec![1]));
        assert!(matches!(
            b.build(),
            Err(VersificationError::DuplicateBook(id)) if id == AAA
        ));
    }

    #[test]
    fn test_build_rejects_book_without_chapters() {
        let mut b = VersificationBuilder::new();
        b.add_book(RawBook::new(AAA, "Aaa", "Alpha", vec![]));
        assert!(matches!(b.build(), Err(VersificationError::NoChapters(_))));
    }

    #[test]
    fn test_build_rejects_empty_chapter() {
        let mut b = VersificationBuilder::new();
        b.add_book(RawBook::new(AAA, "Aaa", "Alpha", vec![4, 0, 2]));
        assert!(matches!(
            b.build(),
            Err(VersificationError::EmptyChapter { chapter: 2, .. })
        ));
    }

    #[test]
    fn test_range_alias_resolution() {
        let mut b = builder();
        b.add_range_alias(RawRangeAlias::new("first|front", AAA, BBB))
            .add_range_alias(RawRangeAlias::new("last", CCC, CCC));
        let v = b.build().unwrap();

        assert_eq!(v.range_aliases().len(), 2);
        assert_eq!(
            v.resolve_alias("  FRONT "),
            Some(&[Reference::Range(Range::new(
                Verse::new(AAA, 1, 1),
                Verse::new(BBB, 1, 4)
            ))][..])
        );
        assert_eq!(
            v.resolve_alias("last").map(<[Reference]>::len),
            Some(1)
        );
        // Anchored: a substring match is not enough.
        assert!(v.resolve_alias("firstly").is_none());
    }

    #[test]
    fn test_range_alias_errors() {
        let mut b = builder();
        b.add_range_alias(RawRangeAlias::new("x", AAA, BookId::new(b"ZZZ")));
        assert!(matches!(
            b.build(),
            Err(VersificationError::UnknownAliasBook { .. })
        ));

        let mut b = builder();
        b.add_range_alias(RawRangeAlias::new("x", CCC, AAA));
        assert!(matches!(
            b.build(),
            Err(VersificationError::BackwardsAliasSpan { .. })
        ));

        let mut b = builder();
        b.add_range_alias(RawRangeAlias::new("(unclosed", AAA, BBB));
        assert!(matches!(
            b.build(),
            Err(VersificationError::InvalidAliasPattern { .. })
        ));

        let mut b = builder();
        b.add_range_alias(RawRangeAlias {
            pattern: "none".to_owned(),
            spans: Vec::new(),
        });
        assert!(matches!(b.build(), Err(VersificationError::EmptyAlias { .. })));
    }
}
