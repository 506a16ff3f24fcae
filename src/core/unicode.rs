// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/unicode.rs
//!
//! Conversion between key symbols and Unicode code points
//!
//! Latin-1 printable values (0x20-0x7E, 0xA0-0xFF) are their own symbol.
//! A symbol whose top byte is 0x01 carries a code point directly in its
//! low 24 bits. Everything else is found in a pair of sorted tables.

mod table;

use crate::core::types::KeySym;

/// Marker for a symbol that encodes a code point in its low 24 bits
pub const UNICODE_DIRECT_MARKER: u32 = 0x0100_0000;

fn is_latin1_identity(value: u32) -> bool {
    (0x20..=0x7e).contains(&value) || (0xa0..=0xff).contains(&value)
}

/// Code point produced by a symbol, or 0 when there is none
pub fn symbol_to_unicode(sym: KeySym) -> u32 {
    let raw = sym.raw();

    if is_latin1_identity(raw) {
        return raw;
    }

    if raw & 0xff00_0000 == UNICODE_DIRECT_MARKER {
        return raw & 0x00ff_ffff;
    }

    table::SYM_TO_UNICODE
        .binary_search_by_key(&raw, |&(value, _)| value)
        .map(|idx| table::SYM_TO_UNICODE[idx].1)
        .unwrap_or(0)
}

/// Symbol for a code point
///
/// Never fails: code points missing from the table get a directly
/// encoded symbol (`ucs | 0x01000000`).
pub fn unicode_to_symbol(ucs: u32) -> KeySym {
    if is_latin1_identity(ucs) {
        return KeySym(ucs);
    }

    table::UNICODE_TO_SYM
        .binary_search_by_key(&ucs, |&(value, _)| value)
        .map(|idx| KeySym(table::UNICODE_TO_SYM[idx].1))
        .unwrap_or(KeySym(ucs | UNICODE_DIRECT_MARKER))
}

/// Like [`symbol_to_unicode`], as a `char`
pub fn symbol_to_char(sym: KeySym) -> Option<char> {
    match symbol_to_unicode(sym) {
        0 => None,
        ucs => char::from_u32(ucs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_sorted() {
        assert!(table::SYM_TO_UNICODE.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(table::UNICODE_TO_SYM.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_latin1_identity() {
        assert_eq!(symbol_to_unicode(KeySym(0x41)), 0x41);
        assert_eq!(symbol_to_unicode(KeySym(0xe9)), 0xe9);
        assert_eq!(unicode_to_symbol(0x7e), KeySym(0x7e));
        assert_eq!(unicode_to_symbol(0xa0), KeySym(0xa0));
    }

    #[test]
    fn test_table_lookups() {
        // Cyrillic_a
        assert_eq!(symbol_to_unicode(KeySym(0x6c1)), 0x430);
        assert_eq!(unicode_to_symbol(0x430), KeySym(0x6c1));
        // Greek_OMEGA
        assert_eq!(symbol_to_unicode(KeySym(0x7d9)), 0x3a9);
        assert_eq!(unicode_to_symbol(0x3a9), KeySym(0x7d9));
        // EuroSign
        assert_eq!(unicode_to_symbol(0x20ac), KeySym(0x20ac));
    }

    #[test]
    fn test_known_code_point_per_keysym_page() {
        let samples = [
            (0x1a1, 0x104), // Aogonek
            (0x2bb, 0x11f), // gbreve
            (0x3a2, 0x138), // kra
            (0x4b1, 0x30a2), // kana_A
            (0x5c7, 0x627), // Arabic_alef
            (0x6f6, 0x416), // Cyrillic_ZHE
            (0x7d9, 0x3a9), // Greek_OMEGA
            (0x8bf, 0x222b), // integral
            (0x9e1, 0x2592), // checkerboard
            (0xaa9, 0x2014), // emdash
            (0xce0, 0x5d0), // hebrew_aleph
            (0xda1, 0xe01), // Thai_kokai
            (0xea1, 0x3131), // Hangul_Kiyeog
            (0x13bc, 0x152), // OE
            (0x20ac, 0x20ac), // EuroSign
        ];

        for (sym, ucs) in samples {
            assert_eq!(symbol_to_unicode(KeySym(sym)), ucs, "sym {:#x}", sym);
            assert_eq!(unicode_to_symbol(ucs), KeySym(sym), "ucs {:#x}", ucs);
        }

        // downcaret shares U+2228 with logicalor
        assert_eq!(symbol_to_unicode(KeySym(0xba8)), 0x2228);
        assert_eq!(unicode_to_symbol(0x2228), KeySym(0x8df));
    }

    #[test]
    fn test_symbols_without_code_point() {
        // ISO_Level3_Shift, dead_acute, XF86Calculator
        for sym in [0xfe03, 0xfe51, 0x1008_ff1d] {
            assert_eq!(symbol_to_unicode(KeySym(sym)), 0, "sym {:#x}", sym);
        }
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(symbol_to_unicode(KeySym::RETURN), 0x0d);
        assert_eq!(symbol_to_unicode(KeySym::DELETE), 0x7f);
        assert_eq!(symbol_to_unicode(KeySym::F1), 0);
        assert_eq!(symbol_to_char(KeySym::F1), None);
    }

    #[test]
    fn test_direct_encoding() {
        assert_eq!(unicode_to_symbol(0x4e2d), KeySym(0x0100_4e2d));
        assert_eq!(symbol_to_unicode(KeySym(0x0100_4e2d)), 0x4e2d);
        assert_eq!(symbol_to_char(KeySym(0x0100_4e2d)), Some('中'));
    }

    #[test]
    fn test_unicode_totality() {
        let samples = (0x01..0x3000)
            .step_by(7)
            .chain([0x7f, 0x2116, 0x30a2, 0x1f600, 0x10ffff]);
        for ucs in samples {
            assert_eq!(symbol_to_unicode(unicode_to_symbol(ucs)), ucs, "{:#x}", ucs);
        }
        for &(ucs, _) in table::UNICODE_TO_SYM {
            assert_eq!(symbol_to_unicode(unicode_to_symbol(ucs)), ucs, "{:#x}", ucs);
        }
    }
}
