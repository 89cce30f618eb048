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

//! Serde descriptions of a versification, and conversion into a built
//! `Versification`.
//!
//! On the wire a description looks like:
//!
//! ```json
//! {
//!   "books": [
//!     { "id": "GEN", "osis_id": "Gen", "name": "Genesis",
//!       "aliases": ["Gn"], "verse_counts": [31, 25, 24] }
//!   ],
//!   "range_aliases": [
//!     { "pattern": "torah|pentateuch", "spans": [{ "from": "GEN", "to": "DEU" }] }
//!   ]
//! }
//! ```
//!
//! Reading the text from disk or the network is the caller's business; this
//! module only decodes it.

use crate::{
    book::BookId,
    error::VersificationError,
    versification::{Versification, VersificationBuilder},
};
use serde::{Deserialize, Serialize};

/// One book of a versification description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBook {
    pub id: BookId,
    pub osis_id: String,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Verse count per chapter, chapter 1 first.
    pub verse_counts: Vec<u16>,
}

impl RawBook {
    /// Creates a book description without aliases.
    pub fn new(
        id: BookId,
        osis_id: impl Into<String>,
        name: impl Into<String>,
        verse_counts: Vec<u16>,
    ) -> Self {
        Self {
            id,
            osis_id: osis_id.into(),
            name: name.into(),
            aliases: Vec::new(),
            verse_counts,
        }
    }

    /// Sets the alternative names of the book.
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }
}

/// A span of whole books, `from` through `to` in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAliasSpan {
    pub from: BookId,
    pub to: BookId,
}

/// A named range alias before its spans are resolved against the books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRangeAlias {
    /// Case-insensitive regular expression matched against the whole name.
    pub pattern: String,
    pub spans: Vec<RawAliasSpan>,
}

impl RawRangeAlias {
    /// Creates an alias covering the books `from` through `to`.
    pub fn new(pattern: impl Into<String>, from: BookId, to: BookId) -> Self {
        Self {
            pattern: pattern.into(),
            spans: vec![RawAliasSpan { from, to }],
        }
    }

    /// Adds another span of books to the alias.
    pub fn with_span(mut self, from: BookId, to: BookId) -> Self {
        self.spans.push(RawAliasSpan { from, to });
        self
    }
}

/// A complete versification description.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawVersification {
    pub books: Vec<RawBook>,
    #[serde(default)]
    pub range_aliases: Vec<RawRangeAlias>,
}

impl RawVersification {
    /// Decodes a description from JSON text.
    pub fn from_json_str(s: &str) -> Result<Self, VersificationError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Decodes a description from JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, VersificationError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Encodes the description as JSON text.
    pub fn to_json_string(&self) -> Result<String, VersificationError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<RawVersification> for VersificationBuilder {
    fn from(raw: RawVersification) -> Self {
        let mut builder = VersificationBuilder::new();
        builder.add_books(raw.books);
        for alias in raw.range_aliases {
            builder.add_range_alias(alias);
        }
        builder
    }
}

impl TryFrom<RawVersification> for Versification {
    type Error = VersificationError;

    #[inline]
    fn try_from(raw: RawVersification) -> Result<Self, Self::Error> {
        Versification::from_raw(raw)
    }
}

impl Versification {
    /// Builds a versification from its description.
    pub fn from_raw(raw: RawVersification) -> Result<Self, VersificationError> {
        tracing::debug!(
            books = raw.books.len(),
            range_aliases = raw.range_aliases.len(),
            "loading versification description"
        );
        VersificationBuilder::from(raw).build()
    }

    /// Decodes and builds a versification from JSON text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pericope_model::{book::BookId, versification::Versification};
    ///
    /// let json = r#"{"books":[{"id":"OBA","osis_id":"Obad","name":"Obadiah","verse_counts":[21]}]}"#;
    /// let v = Versification::from_json_str(json).unwrap();
    /// assert_eq!(v.total_verses(), 21);
    /// assert!(v.contains_book(BookId::new(b"OBA")));
    /// ```
    pub fn from_json_str(s: &str) -> Result<Self, VersificationError> {
        Self::from_raw(RawVersification::from_json_str(s)?)
    }

    /// Decodes and builds a versification from JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, VersificationError> {
        Self::from_raw(RawVersification::from_json_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTION: &str = r#"{
        "books": [
            {"id": "gen", "osis_id": "Gen", "name": "Genesis", "aliases": ["Gn"], "verse_counts": [31, 25]},
            {"id": "EXO", "osis_id": "Exod", "name": "Exodus", "verse_counts": [22]}
        ],
        "range_aliases": [
            {"pattern": "both", "spans": [{"from": "GEN", "to": "EXO"}]}
        ]
    }"#;

    #[test]
    fn test_decode_description() {
        let raw = RawVersification::from_json_str(DESCRIPTION).unwrap();
        assert_eq!(raw.books.len(), 2);
        assert_eq!(raw.books[0].id, BookId::new(b"GEN"));
        assert_eq!(raw.books[0].aliases, vec!["Gn".to_owned()]);
        assert!(raw.books[1].aliases.is_empty());
        assert_eq!(raw.range_aliases[0].spans.len(), 1);
    }

    #[test]
    fn test_build_from_json() {
        let v = Versification::from_json_slice(DESCRIPTION.as_bytes()).unwrap();
        assert_eq!(v.total_verses(), 78);
        assert_eq!(v.book(BookId::new(b"EXO")).unwrap().first_ordinal(), 56);
        assert!(v.resolve_alias("BOTH").is_some());
    }

    #[test]
    fn test_description_round_trips_through_json() {
        let raw = RawVersification {
            books: vec![RawBook::new(BookId::new(b"RUT"), "Ruth", "Ruth", vec![22, 23, 18, 22])
                .with_aliases(["Ru"])],
            range_aliases: vec![RawRangeAlias::new("ruth", BookId::new(b"RUT"), BookId::new(b"RUT"))],
        };
        let json = raw.to_json_string().unwrap();
        assert_eq!(RawVersification::from_json_str(&json).unwrap(), raw);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Versification::from_json_str("{\"books\": 3}"),
            Err(VersificationError::Json(_))
        ));
        // Book codes are validated while decoding.
        assert!(matches!(
            RawVersification::from_json_str(
                r#"{"books":[{"id":"GENESIS","osis_id":"Gen","name":"Genesis","verse_counts":[1]}]}"#
            ),
            Err(VersificationError::Json(_))
        ));
    }

    #[test]
    fn test_structural_errors_surface_through_from_raw() {
        let raw = RawVersification::default();
        assert!(matches!(
            Versification::try_from(raw),
            Err(VersificationError::Empty)
        ));
    }
}
