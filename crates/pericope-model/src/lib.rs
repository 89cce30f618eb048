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

//! Data model for book/chapter/verse references.
//!
//! The central type is `Versification`, an immutable description of a canon
//! of books, their chapters and the verses in each chapter. Every verse
//! of a versification has a dense ordinal (see `ordinal`), which turns
//! references into integer intervals.
//!
//! # Examples
//!
//! ```rust
//! # use pericope_model::{book::BookId, canon, reference::Verse};
//!
//! let kjv = canon::kjv();
//! let john_3_16 = Verse::new(BookId::new(b"JHN"), 3, 16);
//! let ordinal = kjv.to_ordinal(john_3_16);
//! assert_eq!(kjv.from_ordinal(ordinal), john_3_16);
//! ```

pub mod book;
pub mod canon;
pub mod error;
pub mod index;
pub mod loading;
pub mod ordinal;
pub mod reference;
pub mod versification;
