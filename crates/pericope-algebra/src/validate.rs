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

//! Structural validation of references against a versification.
//!
//! Findings are returned as data. Validation never fails: a reference with
//! no findings is valid, and every check runs independently, so one
//! reference may collect several issues.

use pericope_model::{
    book::BookId,
    reference::{Reference, Verse},
    versification::Versification,
};
use serde::Serialize;

/// What a `ValidationIssue` is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationIssueKind {
    UnknownBook,
    ChapterOutOfBounds,
    VerseOutOfBounds,
    BackwardsRange,
    RangeOfOne,
}

/// How serious a `ValidationIssue` is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// Which end of a range an issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Start,
    End,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub kind: ValidationIssueKind,
    pub severity: Severity,
    pub message: String,
    pub book: BookId,
    /// Set for issues about one endpoint of a range.
    pub endpoint: Option<Endpoint>,
    /// The offending chapter or verse number.
    pub got: Option<u16>,
    /// The largest chapter or verse number allowed.
    pub max: Option<u16>,
}

impl ValidationIssue {
    /// Returns `true` for issues of severity `Error`.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Options for `validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidateOptions {
    include_warnings: bool,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            include_warnings: true,
        }
    }
}

impl ValidateOptions {
    /// Creates the default options: warnings are reported.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether warnings are reported.
    #[inline]
    pub fn include_warnings(mut self, yes: bool) -> Self {
        self.include_warnings = yes;
        self
    }

    /// Returns `true` if warnings are reported.
    #[inline]
    pub fn includes_warnings(&self) -> bool {
        self.include_warnings
    }
}

fn prefix(endpoint: Option<Endpoint>) -> String {
    endpoint.map(|e| format!("{} ", e)).unwrap_or_default()
}

/// Checks one verse and reports what is wrong with it. Returns the sort key
/// `(book index, chapter, verse)` when the verse exists.
fn check_verse(
    versification: &Versification,
    verse: Verse,
    endpoint: Option<Endpoint>,
    issues: &mut Vec<ValidationIssue>,
) -> Option<(usize, u16, u16)> {
    let issue = |kind, message, got, max| ValidationIssue {
        kind,
        severity: Severity::Error,
        message,
        book: verse.book,
        endpoint,
        got,
        max,
    };

    let Some(book) = versification.book(verse.book) else {
        issues.push(issue(
            ValidationIssueKind::UnknownBook,
            format!("{}book {} is not part of the versification", prefix(endpoint), verse.book),
            None,
            None,
        ));
        return None;
    };

    let Some(verse_count) = book.verse_count(verse.chapter) else {
        issues.push(issue(
            ValidationIssueKind::ChapterOutOfBounds,
            format!(
                "{}chapter {} is out of bounds for {} (max {})",
                prefix(endpoint),
                verse.chapter,
                verse.book,
                book.chapter_count()
            ),
            Some(verse.chapter),
            Some(book.chapter_count()),
        ));
        return None;
    };

    if verse.verse == 0 || verse.verse > verse_count {
        issues.push(issue(
            ValidationIssueKind::VerseOutOfBounds,
            format!(
                "{}verse {} is out of bounds for {} {} (max {})",
                prefix(endpoint),
                verse.verse,
                verse.book,
                verse.chapter,
                verse_count
            ),
            Some(verse.verse),
            Some(verse_count),
        ));
        return None;
    }

    Some((book.index().get(), verse.chapter, verse.verse))
}

/// Validates `reference` against `versification`.
///
/// Reports unknown books, out of bounds chapters and verses (0 included),
/// ranges whose end precedes their start and, as a warning, ranges whose
/// endpoints are the same verse. The order check only runs when both
/// endpoints exist.
///
/// # Examples
///
/// ```rust
/// # use pericope_algebra::validate::{validate, ValidateOptions, ValidationIssueKind};
/// # use pericope_model::{book::BookId, canon, reference::{Reference, Verse}};
///
/// let kjv = canon::kjv();
/// let issues = validate(
///     &kjv,
///     &Reference::Verse(Verse::new(BookId::new(b"GEN"), 51, 1)),
///     ValidateOptions::new(),
/// );
/// assert_eq!(issues.len(), 1);
/// assert_eq!(issues[0].kind, ValidationIssueKind::ChapterOutOfBounds);
/// assert_eq!((issues[0].got, issues[0].max), (Some(51), Some(50)));
/// ```
pub fn validate(
    versification: &Versification,
    reference: &Reference,
    options: ValidateOptions,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    match reference {
        Reference::Verse(verse) => {
            check_verse(versification, *verse, None, &mut issues);
        }
        Reference::Range(range) => {
            let start = check_verse(versification, range.start, Some(Endpoint::Start), &mut issues);
            let end = check_verse(versification, range.end, Some(Endpoint::End), &mut issues);

            if let (Some(start), Some(end)) = (start, end) {
                if end < start {
                    issues.push(ValidationIssue {
                        kind: ValidationIssueKind::BackwardsRange,
                        severity: Severity::Error,
                        message: format!(
                            "range ends at {}, before its start {}",
                            range.end, range.start
                        ),
                        book: range.start.book,
                        endpoint: None,
                        got: None,
                        max: None,
                    });
                }
            }

            if options.include_warnings && range.is_single_verse() {
                issues.push(ValidationIssue {
                    kind: ValidationIssueKind::RangeOfOne,
                    severity: Severity::Warning,
                    message: format!("range {} covers a single verse", range),
                    book: range.start.book,
                    endpoint: None,
                    got: None,
                    max: None,
                });
            }
        }
    }

    tracing::trace!(reference = %reference, issues = issues.len(), "validated reference");
    issues
}

/// Returns `true` if `reference` has no error-level issues.
#[inline]
pub fn is_valid(versification: &Versification, reference: &Reference) -> bool {
    validate(versification, reference, ValidateOptions::new().include_warnings(false)).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigate::make_range;
    use pericope_model::{canon, reference::Range};

    const GEN: BookId = BookId::new(b"GEN");
    const EXO: BookId = BookId::new(b"EXO");
    const XYZ: BookId = BookId::new(b"XYZ");

    fn range(a: Verse, b: Verse) -> Reference {
        Reference::Range(Range::new(a, b))
    }

    fn kinds(issues: &[ValidationIssue]) -> Vec<ValidationIssueKind> {
        issues.iter().map(|i| i.kind).collect()
    }

    #[test]
    fn test_full_book_range_is_valid() {
        let kjv = canon::kjv();
        let genesis = Reference::Range(make_range(&kjv, GEN, None).unwrap());
        assert!(validate(&kjv, &genesis, ValidateOptions::new()).is_empty());
        assert!(is_valid(&kjv, &genesis));
    }

    #[test]
    fn test_unknown_book() {
        let kjv = canon::kjv();
        let issues = validate(&kjv, &Reference::Verse(Verse::new(XYZ, 1, 1)), ValidateOptions::new());
        assert_eq!(kinds(&issues), vec![ValidationIssueKind::UnknownBook]);
        assert_eq!(issues[0].book, XYZ);
        assert!(issues[0].is_error());
        assert_eq!(issues[0].endpoint, None);
    }

    #[test]
    fn test_zero_chapter_and_verse() {
        let kjv = canon::kjv();
        let issues = validate(&kjv, &Reference::Verse(Verse::new(GEN, 0, 1)), ValidateOptions::new());
        assert_eq!(kinds(&issues), vec![ValidationIssueKind::ChapterOutOfBounds]);
        assert_eq!(issues[0].got, Some(0));

        let issues = validate(&kjv, &Reference::Verse(Verse::new(GEN, 1, 0)), ValidateOptions::new());
        assert_eq!(kinds(&issues), vec![ValidationIssueKind::VerseOutOfBounds]);
        assert_eq!((issues[0].got, issues[0].max), (Some(0), Some(31)));
    }

    #[test]
    fn test_range_accumulates_endpoint_issues() {
        let kjv = canon::kjv();
        let r = range(Verse::new(XYZ, 1, 1), Verse::new(GEN, 1, 40));
        let issues = validate(&kjv, &r, ValidateOptions::new());
        assert_eq!(
            kinds(&issues),
            vec![ValidationIssueKind::UnknownBook, ValidationIssueKind::VerseOutOfBounds]
        );
        assert_eq!(issues[0].endpoint, Some(Endpoint::Start));
        assert_eq!(issues[1].endpoint, Some(Endpoint::End));
        assert_eq!(issues[1].message, "end verse 40 is out of bounds for GEN 1 (max 31)");
    }

    #[test]
    fn test_backwards_range() {
        let kjv = canon::kjv();
        let backwards = [
            range(Verse::new(EXO, 1, 1), Verse::new(GEN, 50, 26)),
            range(Verse::new(GEN, 3, 1), Verse::new(GEN, 2, 25)),
            range(Verse::new(GEN, 3, 5), Verse::new(GEN, 3, 4)),
        ];
        for r in backwards {
            let issues = validate(&kjv, &r, ValidateOptions::new());
            assert_eq!(kinds(&issues), vec![ValidationIssueKind::BackwardsRange], "{}", r);
        }
    }

    #[test]
    fn test_backwards_check_needs_valid_endpoints() {
        let kjv = canon::kjv();
        let r = range(Verse::new(GEN, 51, 1), Verse::new(GEN, 1, 1));
        assert_eq!(
            kinds(&validate(&kjv, &r, ValidateOptions::new())),
            vec![ValidationIssueKind::ChapterOutOfBounds]
        );
    }

    #[test]
    fn test_range_of_one_warning_is_suppressible() {
        let kjv = canon::kjv();
        let v = Verse::new(GEN, 1, 1);
        let r = range(v, v);

        let issues = validate(&kjv, &r, ValidateOptions::new());
        assert_eq!(kinds(&issues), vec![ValidationIssueKind::RangeOfOne]);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].to_string(), "warning: range GEN 1:1-GEN 1:1 covers a single verse");

        let quiet = ValidateOptions::new().include_warnings(false);
        assert!(!quiet.includes_warnings());
        assert!(validate(&kjv, &r, quiet).is_empty());
        assert!(is_valid(&kjv, &r));
    }

    #[test]
    fn test_issue_serializes_as_data() {
        let kjv = canon::kjv();
        let issues = validate(&kjv, &Reference::Verse(Verse::new(GEN, 51, 1)), ValidateOptions::new());
        let json = serde_json::to_value(&issues[0]).unwrap();
        assert_eq!(json["kind"], "chapter_out_of_bounds");
        assert_eq!(json["severity"], "error");
        assert_eq!(json["book"], "GEN");
        assert_eq!(json["got"], 51);
        assert_eq!(json["max"], 50);
        assert!(json["endpoint"].is_null());
    }
}
