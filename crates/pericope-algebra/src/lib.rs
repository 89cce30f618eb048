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

//! Algorithms over verse references: canonical combining, splitting at
//! book, chapter and verse boundaries, grouping, navigation, set algebra,
//! validation and repair.
//!
//! Every operation takes the `Versification` it works in as an explicit
//! argument.
//!
//! # Examples
//!
//! ```rust
//! # use pericope_algebra::{combine::combine, geometry::contains, navigate::make_range};
//! # use pericope_model::{book::BookId, canon, reference::{Reference, Verse}};
//!
//! let kjv = canon::kjv();
//! let john = BookId::new(b"JHN");
//! let chapter_3 = Reference::Range(make_range(&kjv, john, Some(3)).unwrap());
//! let verse_16 = Reference::Verse(Verse::new(john, 3, 16));
//!
//! assert!(contains(&kjv, &[chapter_3], &[verse_16]));
//! assert_eq!(combine(&kjv, &[verse_16, chapter_3]), vec![chapter_3]);
//! ```

pub mod combine;
pub mod error;
pub mod geometry;
pub mod group;
pub mod navigate;
pub mod repair;
pub mod split;
pub mod validate;
