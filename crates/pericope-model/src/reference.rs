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

//! Structured references: a single `Verse`, an inclusive `Range` of verses,
//! and the `Reference` sum type over both.
//!
//! These are plain values. Whether a reference is meaningful (known book,
//! chapter and verse in bounds, range not running backwards) depends on a
//! `Versification` and is checked by the validator, not by the types.

use crate::book::BookId;
use serde::{Deserialize, Serialize};

/// A single verse, addressed by book, 1-based chapter and 1-based verse.
///
/// # Examples
///
/// ```rust
/// # use pericope_model::{book::BookId, reference::Verse};
///
/// let v = Verse::new(BookId::new(b"JHN"), 3, 16);
/// assert_eq!(v.to_string(), "JHN 3:16");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Verse {
    pub book: BookId,
    pub chapter: u16,
    pub verse: u16,
}

impl Verse {
    /// Creates a new `Verse`.
    #[inline]
    pub const fn new(book: BookId, chapter: u16, verse: u16) -> Self {
        Self {
            book,
            chapter,
            verse,
        }
    }
}

impl std::fmt::Display for Verse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// An inclusive run of verses from `start` to `end`.
///
/// The type does not enforce `start <= end`; a range may cross chapter and
/// book boundaries.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Range {
    pub start: Verse,
    pub end: Verse,
}

impl Range {
    /// Creates a new `Range`.
    #[inline]
    pub const fn new(start: Verse, end: Verse) -> Self {
        Self { start, end }
    }

    /// Returns `true` if `start` and `end` are the same verse.
    #[inline]
    pub fn is_single_verse(&self) -> bool {
        self.start == self.end
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A reference to either one verse or a range of verses.
///
/// Serialized with an internal `type` tag:
/// `{"type":"verse","book":"GEN","chapter":1,"verse":1}` or
/// `{"type":"range","start":{..},"end":{..}}`.
///
/// # Examples
///
/// ```rust
/// # use pericope_model::{book::BookId, reference::{Range, Reference, Verse}};
///
/// let gen = BookId::new(b"GEN");
/// let r: Reference = Range::new(Verse::new(gen, 1, 1), Verse::new(gen, 1, 5)).into();
/// assert!(r.is_range());
/// assert_eq!(r.start(), Verse::new(gen, 1, 1));
/// assert_eq!(r.end(), Verse::new(gen, 1, 5));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Reference {
    Verse(Verse),
    Range(Range),
}

impl Reference {
    /// Returns the first verse of the reference.
    #[inline]
    pub fn start(&self) -> Verse {
        match self {
            Reference::Verse(v) => *v,
            Reference::Range(r) => r.start,
        }
    }

    /// Returns the last verse of the reference.
    #[inline]
    pub fn end(&self) -> Verse {
        match self {
            Reference::Verse(v) => *v,
            Reference::Range(r) => r.end,
        }
    }

    /// Returns `true` for the `Verse` variant.
    #[inline]
    pub fn is_verse(&self) -> bool {
        matches!(self, Reference::Verse(_))
    }

    /// Returns `true` for the `Range` variant.
    #[inline]
    pub fn is_range(&self) -> bool {
        matches!(self, Reference::Range(_))
    }

    /// Returns the range, if this is the `Range` variant.
    #[inline]
    pub fn as_range(&self) -> Option<&Range> {
        match self {
            Reference::Range(r) => Some(r),
            Reference::Verse(_) => None,
        }
    }

    /// Returns the reference as a range; a verse becomes `v..v`.
    #[inline]
    pub fn span(&self) -> Range {
        Range::new(self.start(), self.end())
    }

    /// Builds a reference from two endpoints, using the `Verse` variant when
    /// they coincide.
    #[inline]
    pub fn from_endpoints(start: Verse, end: Verse) -> Self {
        if start == end {
            Reference::Verse(start)
        } else {
            Reference::Range(Range::new(start, end))
        }
    }
}

impl From<Verse> for Reference {
    #[inline]
    fn from(v: Verse) -> Self {
        Reference::Verse(v)
    }
}

impl From<Range> for Reference {
    #[inline]
    fn from(r: Range) -> Self {
        Reference::Range(r)
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reference::Verse(v) => v.fmt(f),
            Reference::Range(r) => r.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEN: BookId = BookId::new(b"GEN");

    #[test]
    fn test_verse_accessors_on_both_variants() {
        let v = Verse::new(GEN, 2, 4);
        let r = Reference::from(v);
        assert!(r.is_verse());
        assert_eq!(r.start(), v);
        assert_eq!(r.end(), v);
        assert_eq!(r.span(), Range::new(v, v));
        assert!(r.as_range().is_none());
    }

    #[test]
    fn test_from_endpoints_degrades_single_verse() {
        let a = Verse::new(GEN, 1, 1);
        let b = Verse::new(GEN, 1, 2);
        assert_eq!(Reference::from_endpoints(a, a), Reference::Verse(a));
        assert_eq!(
            Reference::from_endpoints(a, b),
            Reference::Range(Range::new(a, b))
        );
    }

    #[test]
    fn test_display() {
        let r = Reference::Range(Range::new(Verse::new(GEN, 1, 1), Verse::new(GEN, 2, 3)));
        assert_eq!(r.to_string(), "GEN 1:1-GEN 2:3");
    }

    #[test]
    fn test_serde_tagged_shape() {
        let r = Reference::Verse(Verse::new(GEN, 1, 1));
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "verse", "book": "GEN", "chapter": 1, "verse": 1})
        );

        let raw = r#"{"type":"range","start":{"book":"EXO","chapter":1,"verse":1},"end":{"book":"EXO","chapter":2,"verse":5}}"#;
        let parsed: Reference = serde_json::from_str(raw).unwrap();
        let exo = BookId::new(b"EXO");
        assert_eq!(
            parsed,
            Reference::Range(Range::new(Verse::new(exo, 1, 1), Verse::new(exo, 2, 5)))
        );
    }
}
