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

//! Property tests for ordinal mapping and the range algebra over the KJV
//! versification.

use pericope_algebra::{
    combine::{combine, normalize},
    geometry::{contains, count_unique_verses, difference, intersection, intersects, union},
    navigate::make_range,
    repair::repair,
    split::{split_by_book, split_by_chapter, split_by_verse, SplitOptions},
    validate::{is_valid, validate, ValidateOptions},
};
use pericope_model::{
    canon,
    ordinal::{count_verses_in, first_n_verses, Ordinal, VerseInterval},
    reference::{Reference, Verse},
    versification::Versification,
};
use proptest::prelude::*;
use std::sync::OnceLock;

fn kjv() -> &'static Versification {
    static KJV: OnceLock<Versification> = OnceLock::new();
    KJV.get_or_init(canon::kjv)
}

const TOTAL: Ordinal = 31_102;

/// A valid, forward reference of up to 400 verses.
fn reference() -> impl Strategy<Value = Reference> {
    (0..TOTAL, 0u32..400).prop_map(|(start, len)| {
        let end = (start + len).min(TOTAL - 1);
        kjv().reference_from_interval(VerseInterval::new(start, end))
    })
}

fn references() -> impl Strategy<Value = Vec<Reference>> {
    prop::collection::vec(reference(), 0..8)
}

/// A verse in a known book with arbitrary, possibly invalid, chapter and verse.
fn rough_verse() -> impl Strategy<Value = Verse> {
    (0..kjv().num_books(), 0u16..200, 0u16..200)
        .prop_map(|(book, chapter, verse)| Verse::new(kjv().books()[book].id(), chapter, verse))
}

// =============================================================================
// Ordinal Mapping
// =============================================================================

proptest! {
    #[test]
    fn prop_ordinal_round_trip(n in 0..TOTAL) {
        let v = kjv();
        prop_assert_eq!(v.to_ordinal(v.from_ordinal(n)), n);
    }

    #[test]
    fn prop_verse_round_trip(n in 0..TOTAL) {
        let v = kjv();
        let verse = v.from_ordinal(n);
        prop_assert_eq!(v.from_ordinal(v.to_ordinal(verse)), verse);
    }

    #[test]
    fn prop_first_n_verses_total(refs in references(), n in 0u64..2_000) {
        let v = kjv();
        let prefix = first_n_verses(v, &refs, n);
        prop_assert_eq!(count_verses_in(v, &prefix), n.min(count_verses_in(v, &refs)));
        prop_assert!(prefix.len() <= refs.len());
    }
}

// =============================================================================
// Combine
// =============================================================================

proptest! {
    #[test]
    fn prop_combine_idempotent(refs in references()) {
        let v = kjv();
        let once = combine(v, &refs);
        prop_assert_eq!(combine(v, &once), once);
    }

    #[test]
    fn prop_combine_minimal(refs in references()) {
        let v = kjv();
        let intervals = normalize(v, &refs);
        for pair in intervals.windows(2) {
            prop_assert!(pair[0].end() + 1 < pair[1].start(), "{} and {} could merge", pair[0], pair[1]);
        }
    }

    #[test]
    fn prop_combine_preserves_coverage(refs in references()) {
        let v = kjv();
        let combined = combine(v, &refs);
        prop_assert!(contains(v, &combined, &refs));
        prop_assert!(contains(v, &refs, &combined));
        prop_assert_eq!(count_verses_in(v, &combined), count_unique_verses(v, &refs));
    }
}

// =============================================================================
// Geometry
// =============================================================================

proptest! {
    #[test]
    fn prop_union_intersection_duality(a in references(), b in references()) {
        let v = kjv();
        let a = combine(v, &a);
        let b = combine(v, &b);
        prop_assert_eq!(
            count_verses_in(v, &union(v, &a, &b)) + count_verses_in(v, &intersection(v, &a, &b)),
            count_verses_in(v, &a) + count_verses_in(v, &b)
        );
    }

    #[test]
    fn prop_contains_reflexive(refs in references()) {
        let v = kjv();
        let normalized = combine(v, &refs);
        prop_assert!(contains(v, &normalized, &normalized));
    }

    #[test]
    fn prop_intersection_is_contained_in_both(a in references(), b in references()) {
        let v = kjv();
        let both = intersection(v, &a, &b);
        prop_assert!(contains(v, &a, &both));
        prop_assert!(contains(v, &b, &both));
        prop_assert_eq!(intersects(v, &a, &b), !both.is_empty());
    }

    #[test]
    fn prop_difference_partitions(a in references(), b in references()) {
        let v = kjv();
        let only_a = difference(v, &a, &b);
        prop_assert!(!intersects(v, &only_a, &b));
        prop_assert_eq!(
            count_unique_verses(v, &only_a) + count_unique_verses(v, &intersection(v, &a, &b)),
            count_unique_verses(v, &a)
        );
    }
}

// =============================================================================
// Splitting
// =============================================================================

proptest! {
    #[test]
    fn prop_split_preserves_coverage(refs in references()) {
        let v = kjv();
        let options = SplitOptions::new();
        prop_assert_eq!(combine(v, &split_by_book(v, &refs, options)), combine(v, &refs));
        prop_assert_eq!(combine(v, &split_by_chapter(v, &refs, options)), combine(v, &refs));
    }

    #[test]
    fn prop_split_by_chapter_stays_in_chapter(refs in references()) {
        let v = kjv();
        for piece in split_by_chapter(v, &refs, SplitOptions::new()) {
            prop_assert_eq!(piece.start().book, piece.end().book);
            prop_assert_eq!(piece.start().chapter, piece.end().chapter);
        }
    }

    #[test]
    fn prop_split_by_verse_yields_one_per_verse(refs in references()) {
        let v = kjv();
        let verses = split_by_verse(v, &refs, SplitOptions::new());
        prop_assert_eq!(verses.len() as u64, count_verses_in(v, &refs));
        prop_assert!(verses.iter().all(Reference::is_verse));
    }
}

// =============================================================================
// Validation and Repair
// =============================================================================

proptest! {
    #[test]
    fn prop_generated_references_are_valid(r in reference()) {
        prop_assert!(validate(kjv(), &r, ValidateOptions::new()).is_empty());
    }

    #[test]
    fn prop_repair_yields_valid_reference(start in rough_verse(), end in rough_verse()) {
        let v = kjv();
        let range = Reference::from_endpoints(start, end);
        let repaired = repair(v, &range).unwrap();
        prop_assert!(is_valid(v, &repaired));
        prop_assert!(validate(v, &repaired, ValidateOptions::new()).is_empty());
        prop_assert_eq!(repair(v, &repaired).unwrap(), repaired);
    }
}

#[test]
fn test_make_range_is_always_valid() {
    let v = kjv();
    for book in v.books() {
        let whole = Reference::Range(make_range(v, book.id(), None).unwrap());
        assert!(validate(v, &whole, ValidateOptions::new()).is_empty(), "{}", whole);
        for chapter in 1..=book.chapter_count() {
            let r = make_range(v, book.id(), Some(chapter)).unwrap();
            // One verse chapters are reported as ranges of one.
            assert!(is_valid(v, &Reference::Range(r)), "{}", r);
        }
    }
}

#[test]
fn test_known_ordinals() {
    use pericope_model::book::BookId;

    let v = kjv();
    let at = |code: &[u8; 3], chapter, verse| v.to_ordinal(Verse::new(BookId::new(code), chapter, verse));
    assert_eq!(at(b"GEN", 1, 1), 0);
    assert_eq!(at(b"GEN", 1, 2), 1);
    assert_eq!(at(b"GEN", 2, 1), 31);
    assert_eq!(at(b"MAL", 4, 6), 23_144);
    assert_eq!(at(b"MAT", 1, 1), 23_145);
}

#[test]
fn test_first_n_verses_crosses_book_boundary() {
    use pericope_model::{book::BookId, reference::Range};

    let v = kjv();
    let (deu, jos) = (BookId::new(b"DEU"), BookId::new(b"JOS"));
    let refs = [Reference::Range(Range::new(Verse::new(deu, 34, 10), Verse::new(jos, 1, 18)))];
    assert_eq!(
        first_n_verses(v, &refs, 4),
        vec![Reference::Range(Range::new(Verse::new(deu, 34, 10), Verse::new(jos, 1, 1)))]
    );
}
