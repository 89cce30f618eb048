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

//! The 66-book King James Version (Protestant) versification.
//!
//! Book codes follow the USFM three character convention, verse counts the
//! KJV (23,145 verses in the Old Testament, 31,102 in total).

use crate::{
    book::BookId,
    loading::{RawBook, RawRangeAlias, RawVersification},
    versification::Versification,
};

struct CanonBook {
    id: &'static [u8; 3],
    osis_id: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
    verse_counts: &'static [u16],
}

#[rustfmt::skip]
static KJV_BOOKS: &[CanonBook] = &[
    CanonBook {
        id: b"GEN",
        osis_id: "Gen",
        name: "Genesis",
        aliases: &["Ge", "Gn"],
        verse_counts: &[
            31, 25, 24, 26, 32, 22, 24, 22, 29, 32, 32, 20, 18, 24, 21, 16,
            27, 33, 38, 18, 34, 24, 20, 67, 34, 35, 46, 22, 35, 43, 55, 32,
            20, 31, 29, 43, 36, 30, 23, 23, 57, 38, 34, 34, 28, 34, 31, 22,
            33, 26,
        ],
    },
    CanonBook {
        id: b"EXO",
        osis_id: "Exod",
        name: "Exodus",
        aliases: &["Ex", "Exod"],
        verse_counts: &[
            22, 25, 22, 31, 23, 30, 25, 32, 35, 29, 10, 51, 22, 31, 27, 36,
            16, 27, 25, 26, 36, 31, 33, 18, 40, 37, 21, 43, 46, 38, 18, 35,
            23, 35, 35, 38, 29, 31, 43, 38,
        ],
    },
    CanonBook {
        id: b"LEV",
        osis_id: "Lev",
        name: "Leviticus",
        aliases: &["Le", "Lv"],
        verse_counts: &[
            17, 16, 17, 35, 19, 30, 38, 36, 24, 20, 47, 8, 59, 57, 33, 34,
            16, 30, 37, 27, 24, 33, 44, 23, 55, 46, 34,
        ],
    },
    CanonBook {
        id: b"NUM",
        osis_id: "Num",
        name: "Numbers",
        aliases: &["Nu", "Nm"],
        verse_counts: &[
            54, 34, 51, 49, 31, 27, 89, 26, 23, 36, 35, 16, 33, 45, 41, 50,
            13, 32, 22, 29, 35, 41, 30, 25, 18, 65, 23, 31, 40, 16, 54, 42,
            56, 29, 34, 13,
        ],
    },
    CanonBook {
        id: b"DEU",
        osis_id: "Deut",
        name: "Deuteronomy",
        aliases: &["Dt", "Deut"],
        verse_counts: &[
            46, 37, 29, 49, 33, 25, 26, 20, 29, 22, 32, 32, 18, 29, 23, 22,
            20, 22, 21, 20, 23, 30, 25, 22, 19, 19, 26, 68, 29, 20, 30, 52,
            29, 12,
        ],
    },
    CanonBook {
        id: b"JOS",
        osis_id: "Josh",
        name: "Joshua",
        aliases: &["Jos", "Josh"],
        verse_counts: &[
            18, 24, 17, 24, 15, 27, 26, 35, 27, 43, 23, 24, 33, 15, 63, 10,
            18, 28, 51, 9, 45, 34, 16, 33,
        ],
    },
    CanonBook {
        id: b"JDG",
        osis_id: "Judg",
        name: "Judges",
        aliases: &["Jdg", "Judg"],
        verse_counts: &[
            36, 23, 31, 24, 31, 40, 25, 35, 57, 18, 40, 15, 25, 20, 20, 31,
            13, 31, 30, 48, 25,
        ],
    },
    CanonBook {
        id: b"RUT",
        osis_id: "Ruth",
        name: "Ruth",
        aliases: &["Ru", "Rth"],
        verse_counts: &[
            22, 23, 18, 22,
        ],
    },
    CanonBook {
        id: b"1SA",
        osis_id: "1Sam",
        name: "1 Samuel",
        aliases: &["1 Sam", "1Sa"],
        verse_counts: &[
            28, 36, 21, 22, 12, 21, 17, 22, 27, 27, 15, 25, 23, 52, 35, 23,
            58, 30, 24, 42, 15, 23, 29, 22, 44, 25, 12, 25, 11, 31, 13,
        ],
    },
    CanonBook {
        id: b"2SA",
        osis_id: "2Sam",
        name: "2 Samuel",
        aliases: &["2 Sam", "2Sa"],
        verse_counts: &[
            27, 32, 39, 12, 25, 23, 29, 18, 13, 19, 27, 31, 39, 33, 37, 23,
            29, 33, 43, 26, 22, 51, 39, 25,
        ],
    },
    CanonBook {
        id: b"1KI",
        osis_id: "1Kgs",
        name: "1 Kings",
        aliases: &["1 Kgs", "1Ki"],
        verse_counts: &[
            53, 46, 28, 34, 18, 38, 51, 66, 28, 29, 43, 33, 34, 31, 34, 34,
            24, 46, 21, 43, 29, 53,
        ],
    },
    CanonBook {
        id: b"2KI",
        osis_id: "2Kgs",
        name: "2 Kings",
        aliases: &["2 Kgs", "2Ki"],
        verse_counts: &[
            18, 25, 27, 44, 27, 33, 20, 29, 37, 36, 21, 21, 25, 29, 38, 20,
            41, 37, 37, 21, 26, 20, 37, 20, 30,
        ],
    },
    CanonBook {
        id: b"1CH",
        osis_id: "1Chr",
        name: "1 Chronicles",
        aliases: &["1 Chr", "1Ch"],
        verse_counts: &[
            54, 55, 24, 43, 26, 81, 40, 40, 44, 14, 47, 40, 14, 17, 29, 43,
            27, 17, 19, 8, 30, 19, 32, 31, 31, 32, 34, 21, 30,
        ],
    },
    CanonBook {
        id: b"2CH",
        osis_id: "2Chr",
        name: "2 Chronicles",
        aliases: &["2 Chr", "2Ch"],
        verse_counts: &[
            17, 18, 17, 22, 14, 42, 22, 18, 31, 19, 23, 16, 22, 15, 19, 14,
            19, 34, 11, 37, 20, 12, 21, 27, 28, 23, 9, 27, 36, 27, 21, 33,
            25, 33, 27, 23,
        ],
    },
    CanonBook {
        id: b"EZR",
        osis_id: "Ezra",
        name: "Ezra",
        aliases: &["Ezr"],
        verse_counts: &[
            11, 70, 13, 24, 17, 22, 28, 36, 15, 44,
        ],
    },
    CanonBook {
        id: b"NEH",
        osis_id: "Neh",
        name: "Nehemiah",
        aliases: &["Ne"],
        verse_counts: &[
            11, 20, 32, 23, 19, 19, 73, 18, 38, 39, 36, 47, 31,
        ],
    },
    CanonBook {
        id: b"EST",
        osis_id: "Esth",
        name: "Esther",
        aliases: &["Es", "Esth"],
        verse_counts: &[
            22, 23, 15, 17, 14, 14, 10, 17, 32, 3,
        ],
    },
    CanonBook {
        id: b"JOB",
        osis_id: "Job",
        name: "Job",
        aliases: &["Jb"],
        verse_counts: &[
            22, 13, 26, 21, 27, 30, 21, 22, 35, 22, 20, 25, 28, 22, 35, 22,
            16, 21, 29, 29, 34, 30, 17, 25, 6, 14, 23, 28, 25, 31, 40, 22,
            33, 37, 16, 33, 24, 41, 30, 24, 34, 17,
        ],
    },
    CanonBook {
        id: b"PSA",
        osis_id: "Ps",
        name: "Psalms",
        aliases: &["Ps", "Psalm", "Pss"],
        verse_counts: &[
            6, 12, 8, 8, 12, 10, 17, 9, 20, 18, 7, 8, 6, 7, 5, 11,
            15, 50, 14, 9, 13, 31, 6, 10, 22, 12, 14, 9, 11, 12, 24, 11,
            22, 22, 28, 12, 40, 22, 13, 17, 13, 11, 5, 26, 17, 11, 9, 14,
            20, 23, 19, 9, 6, 7, 23, 13, 11, 11, 17, 12, 8, 12, 11, 10,
            13, 20, 7, 35, 36, 5, 24, 20, 28, 23, 10, 12, 20, 72, 13, 19,
            16, 8, 18, 12, 13, 17, 7, 18, 52, 17, 16, 15, 5, 23, 11, 13,
            12, 9, 9, 5, 8, 28, 22, 35, 45, 48, 43, 13, 31, 7, 10, 10,
            9, 8, 18, 19, 2, 29, 176, 7, 8, 9, 4, 8, 5, 6, 5, 6,
            8, 8, 3, 18, 3, 3, 21, 26, 9, 8, 24, 13, 10, 7, 12, 15,
            21, 10, 20, 14, 9, 6,
        ],
    },
    CanonBook {
        id: b"PRO",
        osis_id: "Prov",
        name: "Proverbs",
        aliases: &["Pr", "Prov"],
        verse_counts: &[
            33, 22, 35, 27, 23, 35, 27, 36, 18, 32, 31, 28, 25, 35, 33, 33,
            28, 24, 29, 30, 31, 29, 35, 34, 28, 28, 27, 28, 27, 33, 31,
        ],
    },
    CanonBook {
        id: b"ECC",
        osis_id: "Eccl",
        name: "Ecclesiastes",
        aliases: &["Ec", "Eccl", "Qoheleth"],
        verse_counts: &[
            18, 26, 22, 16, 20, 12, 29, 17, 18, 20, 10, 14,
        ],
    },
    CanonBook {
        id: b"SNG",
        osis_id: "Song",
        name: "Song of Solomon",
        aliases: &["Song", "Song of Songs", "Canticles"],
        verse_counts: &[
            17, 17, 11, 16, 16, 13, 13, 14,
        ],
    },
    CanonBook {
        id: b"ISA",
        osis_id: "Isa",
        name: "Isaiah",
        aliases: &["Is"],
        verse_counts: &[
            31, 22, 26, 6, 30, 13, 25, 22, 21, 34, 16, 6, 22, 32, 9, 14,
            14, 7, 25, 6, 17, 25, 18, 23, 12, 21, 13, 29, 24, 33, 9, 20,
            24, 17, 10, 22, 38, 22, 8, 31, 29, 25, 28, 28, 25, 13, 15, 22,
            26, 11, 23, 15, 12, 17, 13, 12, 21, 14, 21, 22, 11, 12, 19, 12,
            25, 24,
        ],
    },
    CanonBook {
        id: b"JER",
        osis_id: "Jer",
        name: "Jeremiah",
        aliases: &["Je", "Jr"],
        verse_counts: &[
            19, 37, 25, 31, 31, 30, 34, 22, 26, 25, 23, 17, 27, 22, 21, 21,
            27, 23, 15, 18, 14, 30, 40, 10, 38, 24, 22, 17, 32, 24, 40, 44,
            26, 22, 19, 32, 21, 28, 18, 16, 18, 22, 13, 30, 5, 28, 7, 47,
            39, 46, 64, 34,
        ],
    },
    CanonBook {
        id: b"LAM",
        osis_id: "Lam",
        name: "Lamentations",
        aliases: &["La"],
        verse_counts: &[
            22, 22, 66, 22, 22,
        ],
    },
    CanonBook {
        id: b"EZK",
        osis_id: "Ezek",
        name: "Ezekiel",
        aliases: &["Eze", "Ezek"],
        verse_counts: &[
            28, 10, 27, 17, 17, 14, 27, 18, 11, 22, 25, 28, 23, 23, 8, 63,
            24, 32, 14, 49, 32, 31, 49, 27, 17, 21, 36, 26, 21, 26, 18, 32,
            33, 31, 15, 38, 28, 23, 29, 49, 26, 20, 27, 31, 25, 24, 23, 35,
        ],
    },
    CanonBook {
        id: b"DAN",
        osis_id: "Dan",
        name: "Daniel",
        aliases: &["Da", "Dn"],
        verse_counts: &[
            21, 49, 30, 37, 31, 28, 28, 27, 27, 21, 45, 13,
        ],
    },
    CanonBook {
        id: b"HOS",
        osis_id: "Hos",
        name: "Hosea",
        aliases: &["Ho"],
        verse_counts: &[
            11, 23, 5, 19, 15, 11, 16, 14, 17, 15, 12, 14, 16, 9,
        ],
    },
    CanonBook {
        id: b"JOL",
        osis_id: "Joel",
        name: "Joel",
        aliases: &["Joe", "Jl"],
        verse_counts: &[
            20, 32, 21,
        ],
    },
    CanonBook {
        id: b"AMO",
        osis_id: "Amos",
        name: "Amos",
        aliases: &["Am"],
        verse_counts: &[
            15, 16, 15, 13, 27, 14, 17, 14, 15,
        ],
    },
    CanonBook {
        id: b"OBA",
        osis_id: "Obad",
        name: "Obadiah",
        aliases: &["Ob", "Obad"],
        verse_counts: &[
            21,
        ],
    },
    CanonBook {
        id: b"JON",
        osis_id: "Jonah",
        name: "Jonah",
        aliases: &["Jnh"],
        verse_counts: &[
            17, 10, 10, 11,
        ],
    },
    CanonBook {
        id: b"MIC",
        osis_id: "Mic",
        name: "Micah",
        aliases: &["Mc"],
        verse_counts: &[
            16, 13, 12, 13, 15, 16, 20,
        ],
    },
    CanonBook {
        id: b"NAM",
        osis_id: "Nah",
        name: "Nahum",
        aliases: &["Na", "Nah"],
        verse_counts: &[
            15, 13, 19,
        ],
    },
    CanonBook {
        id: b"HAB",
        osis_id: "Hab",
        name: "Habakkuk",
        aliases: &["Hb"],
        verse_counts: &[
            17, 20, 19,
        ],
    },
    CanonBook {
        id: b"ZEP",
        osis_id: "Zeph",
        name: "Zephaniah",
        aliases: &["Zep", "Zeph"],
        verse_counts: &[
            18, 15, 20,
        ],
    },
    CanonBook {
        id: b"HAG",
        osis_id: "Hag",
        name: "Haggai",
        aliases: &["Hg"],
        verse_counts: &[
            15, 23,
        ],
    },
    CanonBook {
        id: b"ZEC",
        osis_id: "Zech",
        name: "Zechariah",
        aliases: &["Zec", "Zech"],
        verse_counts: &[
            21, 13, 10, 14, 11, 15, 14, 23, 17, 12, 17, 14, 9, 21,
        ],
    },
    CanonBook {
        id: b"MAL",
        osis_id: "Mal",
        name: "Malachi",
        aliases: &["Ml"],
        verse_counts: &[
            14, 17, 18, 6,
        ],
    },
    CanonBook {
        id: b"MAT",
        osis_id: "Matt",
        name: "Matthew",
        aliases: &["Mt", "Matt"],
        verse_counts: &[
            25, 23, 17, 25, 48, 34, 29, 34, 38, 42, 30, 50, 58, 36, 39, 28,
            27, 35, 30, 34, 46, 46, 39, 51, 46, 75, 66, 20,
        ],
    },
    CanonBook {
        id: b"MRK",
        osis_id: "Mark",
        name: "Mark",
        aliases: &["Mk", "Mr"],
        verse_counts: &[
            45, 28, 35, 41, 43, 56, 37, 38, 50, 52, 33, 44, 37, 72, 47, 20,
        ],
    },
    CanonBook {
        id: b"LUK",
        osis_id: "Luke",
        name: "Luke",
        aliases: &["Lk", "Lu"],
        verse_counts: &[
            80, 52, 38, 44, 39, 49, 50, 56, 62, 42, 54, 59, 35, 35, 32, 31,
            37, 43, 48, 47, 38, 71, 56, 53,
        ],
    },
    CanonBook {
        id: b"JHN",
        osis_id: "John",
        name: "John",
        aliases: &["Jn", "Jhn"],
        verse_counts: &[
            51, 25, 36, 54, 47, 71, 53, 59, 41, 42, 57, 50, 38, 31, 27, 33,
            26, 40, 42, 31, 25,
        ],
    },
    CanonBook {
        id: b"ACT",
        osis_id: "Acts",
        name: "Acts",
        aliases: &["Ac"],
        verse_counts: &[
            26, 47, 26, 37, 42, 15, 60, 40, 43, 48, 30, 25, 52, 28, 41, 40,
            34, 28, 41, 38, 40, 30, 35, 27, 27, 32, 44, 31,
        ],
    },
    CanonBook {
        id: b"ROM",
        osis_id: "Rom",
        name: "Romans",
        aliases: &["Ro", "Rm"],
        verse_counts: &[
            32, 29, 31, 25, 21, 23, 25, 39, 33, 21, 36, 21, 14, 23, 33, 27,
        ],
    },
    CanonBook {
        id: b"1CO",
        osis_id: "1Cor",
        name: "1 Corinthians",
        aliases: &["1 Cor", "1Co"],
        verse_counts: &[
            31, 16, 23, 21, 13, 20, 40, 13, 27, 33, 34, 31, 13, 40, 58, 24,
        ],
    },
    CanonBook {
        id: b"2CO",
        osis_id: "2Cor",
        name: "2 Corinthians",
        aliases: &["2 Cor", "2Co"],
        verse_counts: &[
            24, 17, 18, 18, 21, 18, 16, 24, 15, 18, 33, 21, 14,
        ],
    },
    CanonBook {
        id: b"GAL",
        osis_id: "Gal",
        name: "Galatians",
        aliases: &["Ga"],
        verse_counts: &[
            24, 21, 29, 31, 26, 18,
        ],
    },
    CanonBook {
        id: b"EPH",
        osis_id: "Eph",
        name: "Ephesians",
        aliases: &["Ephes"],
        verse_counts: &[
            23, 22, 21, 32, 33, 24,
        ],
    },
    CanonBook {
        id: b"PHP",
        osis_id: "Phil",
        name: "Philippians",
        aliases: &["Php", "Phil"],
        verse_counts: &[
            30, 30, 21, 23,
        ],
    },
    CanonBook {
        id: b"COL",
        osis_id: "Col",
        name: "Colossians",
        aliases: &["Co"],
        verse_counts: &[
            29, 23, 25, 18,
        ],
    },
    CanonBook {
        id: b"1TH",
        osis_id: "1Thess",
        name: "1 Thessalonians",
        aliases: &["1 Thess", "1Th"],
        verse_counts: &[
            10, 20, 13, 18, 28,
        ],
    },
    CanonBook {
        id: b"2TH",
        osis_id: "2Thess",
        name: "2 Thessalonians",
        aliases: &["2 Thess", "2Th"],
        verse_counts: &[
            12, 17, 18,
        ],
    },
    CanonBook {
        id: b"1TI",
        osis_id: "1Tim",
        name: "1 Timothy",
        aliases: &["1 Tim", "1Ti"],
        verse_counts: &[
            20, 15, 16, 16, 25, 21,
        ],
    },
    CanonBook {
        id: b"2TI",
        osis_id: "2Tim",
        name: "2 Timothy",
        aliases: &["2 Tim", "2Ti"],
        verse_counts: &[
            18, 26, 17, 22,
        ],
    },
    CanonBook {
        id: b"TIT",
        osis_id: "Titus",
        name: "Titus",
        aliases: &["Ti"],
        verse_counts: &[
            16, 15, 15,
        ],
    },
    CanonBook {
        id: b"PHM",
        osis_id: "Phlm",
        name: "Philemon",
        aliases: &["Philem", "Phm"],
        verse_counts: &[
            25,
        ],
    },
    CanonBook {
        id: b"HEB",
        osis_id: "Heb",
        name: "Hebrews",
        aliases: &["He"],
        verse_counts: &[
            14, 18, 19, 16, 14, 20, 28, 13, 28, 39, 40, 29, 25,
        ],
    },
    CanonBook {
        id: b"JAS",
        osis_id: "Jas",
        name: "James",
        aliases: &["Jm", "Jas"],
        verse_counts: &[
            27, 26, 18, 17, 20,
        ],
    },
    CanonBook {
        id: b"1PE",
        osis_id: "1Pet",
        name: "1 Peter",
        aliases: &["1 Pet", "1Pe"],
        verse_counts: &[
            25, 25, 22, 19, 14,
        ],
    },
    CanonBook {
        id: b"2PE",
        osis_id: "2Pet",
        name: "2 Peter",
        aliases: &["2 Pet", "2Pe"],
        verse_counts: &[
            21, 22, 18,
        ],
    },
    CanonBook {
        id: b"1JN",
        osis_id: "1John",
        name: "1 John",
        aliases: &["1 Jn", "1Jo"],
        verse_counts: &[
            10, 29, 24, 21, 21,
        ],
    },
    CanonBook {
        id: b"2JN",
        osis_id: "2John",
        name: "2 John",
        aliases: &["2 Jn", "2Jo"],
        verse_counts: &[
            13,
        ],
    },
    CanonBook {
        id: b"3JN",
        osis_id: "3John",
        name: "3 John",
        aliases: &["3 Jn", "3Jo"],
        verse_counts: &[
            14,
        ],
    },
    CanonBook {
        id: b"JUD",
        osis_id: "Jude",
        name: "Jude",
        aliases: &["Jud", "Jd"],
        verse_counts: &[
            25,
        ],
    },
    CanonBook {
        id: b"REV",
        osis_id: "Rev",
        name: "Revelation",
        aliases: &["Re", "Rv", "Apocalypse"],
        verse_counts: &[
            20, 29, 22, 11, 14, 17, 17, 13, 21, 11, 19, 17, 18, 20, 8, 21,
            18, 24, 21, 15, 27, 21,
        ],
    },
];

/// Range aliases as `(pattern, first book, last book)`.
static KJV_RANGE_ALIASES: &[(&str, &[u8; 3], &[u8; 3])] = &[
    (r"ot|old\s+testament", b"GEN", b"MAL"),
    (r"nt|new\s+testament", b"MAT", b"REV"),
    (r"torah|pentateuch|law", b"GEN", b"DEU"),
    (r"history|historical\s+books", b"JOS", b"EST"),
    (r"wisdom|poetry|poetical\s+books", b"JOB", b"SNG"),
    (r"major\s+prophets", b"ISA", b"DAN"),
    (r"minor\s+prophets|the\s+twelve", b"HOS", b"MAL"),
    (r"prophets", b"ISA", b"MAL"),
    (r"gospels", b"MAT", b"JHN"),
    (r"pauline\s+epistles|paul", b"ROM", b"PHM"),
    (r"general\s+epistles|catholic\s+epistles", b"HEB", b"JUD"),
    (r"epistles|letters", b"ROM", b"JUD"),
];

/// Returns the description of the KJV versification.
pub fn kjv_raw() -> RawVersification {
    let books = KJV_BOOKS
        .iter()
        .map(|b| {
            RawBook::new(BookId::new(b.id), b.osis_id, b.name, b.verse_counts.to_vec())
                .with_aliases(b.aliases.iter().copied())
        })
        .collect();
    let range_aliases = KJV_RANGE_ALIASES
        .iter()
        .map(|&(pattern, from, to)| RawRangeAlias::new(pattern, BookId::new(from), BookId::new(to)))
        .collect();
    RawVersification {
        books,
        range_aliases,
    }
}

/// Builds the KJV versification.
///
/// # Examples
///
/// ```rust
/// # use pericope_model::{book::BookId, canon};
///
/// let kjv = canon::kjv();
/// let psalms = kjv.book(BookId::new(b"PSA")).unwrap();
/// assert_eq!(psalms.chapter_count(), 150);
/// assert_eq!(psalms.verse_count(119), Some(176));
/// ```
pub fn kjv() -> Versification {
    Versification::from_raw(kjv_raw()).expect("the embedded KJV description is well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{Range, Reference, Verse};

    #[test]
    fn test_kjv_totals() {
        let kjv = kjv();
        assert_eq!(kjv.num_books(), 66);
        assert_eq!(kjv.total_verses(), 31_102);

        let malachi = kjv.book(BookId::new(b"MAL")).unwrap();
        assert_eq!(malachi.index().get(), 38);
        assert_eq!(malachi.last_ordinal() + 1, 23_145);

        let revelation = kjv.book(BookId::new(b"REV")).unwrap();
        assert_eq!(revelation.index().get(), 65);
        assert_eq!(kjv.last_verse(), Verse::new(revelation.id(), 22, 21));
    }

    #[test]
    fn test_kjv_well_known_counts() {
        let kjv = kjv();
        let count = |code: &[u8; 3], chapter| kjv.book(BookId::new(code)).unwrap().verse_count(chapter);
        assert_eq!(count(b"GEN", 1), Some(31));
        assert_eq!(count(b"GEN", 50), Some(26));
        assert_eq!(count(b"GEN", 51), None);
        assert_eq!(count(b"JHN", 3), Some(36));
        assert_eq!(count(b"EST", 8), Some(17));
        assert_eq!(count(b"3JN", 1), Some(14));
    }

    #[test]
    fn test_kjv_cumulative_counts_increase() {
        let kjv = kjv();
        let cumulative: Vec<u32> = kjv
            .books()
            .iter()
            .flat_map(|b| b.chapters().iter().map(|c| c.cumulative_verse()))
            .collect();
        assert_eq!(cumulative.len(), 1189);
        assert_eq!(cumulative[0], 0);
        assert!(cumulative.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_kjv_range_aliases() {
        let kjv = kjv();
        let gen = BookId::new(b"GEN");
        let mal = BookId::new(b"MAL");
        assert_eq!(
            kjv.resolve_alias("Old Testament"),
            Some(&[Reference::Range(Range::new(Verse::new(gen, 1, 1), Verse::new(mal, 4, 6)))][..])
        );

        let gospels = kjv.resolve_alias("gospels").unwrap();
        assert_eq!(gospels[0].start(), Verse::new(BookId::new(b"MAT"), 1, 1));
        assert_eq!(gospels[0].end(), Verse::new(BookId::new(b"JHN"), 21, 25));

        // Earlier, more specific aliases win over "prophets".
        let minor = kjv.resolve_alias("Minor Prophets").unwrap();
        assert_eq!(minor[0].start().book, BookId::new(b"HOS"));
        let prophets = kjv.resolve_alias("prophets").unwrap();
        assert_eq!(prophets[0].start().book, BookId::new(b"ISA"));
    }

    #[test]
    fn test_kjv_book_aliases() {
        let kjv = kjv();
        let genesis = kjv.book(BookId::new(b"GEN")).unwrap();
        assert_eq!(genesis.osis_id(), "Gen");
        assert_eq!(genesis.name(), "Genesis");
        assert!(!genesis.aliases().is_empty());
    }
}
