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

//! src/core/keysym.rs
//!
//! Key symbol name lookup
//!
//! Two static tables back the lookups: one ordered by symbol for
//! symbol → name, one ordered by name for name → symbol. Names that were
//! accepted by older configuration files live in a separate legacy table
//! that is only consulted after the primary one misses.
//!
//! All lookups are binary searches over immutable data, so they are safe
//! to call from any thread without synchronisation.

mod compat;
mod names;

use tracing::{debug, trace};

use crate::core::types::KeySym;
use crate::core::unicode;

/// Canonical name of a symbol
///
/// Returns `None` when the symbol has no name; such a key cannot be
/// written out as text.
pub fn symbol_to_name(sym: KeySym) -> Option<&'static str> {
    names::KEY_NAMES_BY_SYM
        .binary_search_by_key(&sym.raw(), |&(value, _)| value)
        .ok()
        .map(|idx| names::KEY_NAMES_BY_SYM[idx].1)
}

/// Resolve a key name to a symbol
///
/// Resolution order:
/// 1. Primary name table (case-sensitive)
/// 2. Legacy name table
/// 3. A single character: ASCII maps to itself, anything else goes
///    through [`unicode::unicode_to_symbol`]
///
/// Returns `KeySym::NONE` if all three miss.
pub fn name_to_symbol(name: &str) -> KeySym {
    if let Some(sym) = search_names(names::KEY_SYMS_BY_NAME, name) {
        return sym;
    }

    if let Some(sym) = legacy_name_to_symbol(name) {
        debug!(name, sym = sym.raw(), "resolved deprecated key name");
        return sym;
    }

    match single_char_symbol(name) {
        Some(sym) => {
            trace!(name, sym = sym.raw(), "resolved key from character");
            sym
        }
        None => KeySym::NONE,
    }
}

/// Lookup in the primary table only
pub fn primary_name_to_symbol(name: &str) -> Option<KeySym> {
    search_names(names::KEY_SYMS_BY_NAME, name)
}

/// Lookup in the legacy table only
pub fn legacy_name_to_symbol(name: &str) -> Option<KeySym> {
    search_names(compat::LEGACY_KEY_NAMES, name)
}

fn search_names(table: &[(&str, u32)], name: &str) -> Option<KeySym> {
    table
        .binary_search_by(|&(entry, _)| entry.cmp(name))
        .ok()
        .map(|idx| KeySym(table[idx].1))
}

fn single_char_symbol(name: &str) -> Option<KeySym> {
    let mut chars = name.chars();
    let ch = chars.next()?;
    if chars.next().is_some() || ch == '\0' {
        return None;
    }

    if ch.is_ascii() {
        Some(KeySym(ch as u32))
    } else {
        Some(unicode::unicode_to_symbol(ch as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_sorted() {
        assert!(names::KEY_NAMES_BY_SYM.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(names::KEY_SYMS_BY_NAME.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(compat::LEGACY_KEY_NAMES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_every_canonical_name_resolves_back() {
        for &(sym, name) in names::KEY_NAMES_BY_SYM {
            assert_eq!(name_to_symbol(name), KeySym(sym), "name {}", name);
        }
    }

    #[test]
    fn test_every_searchable_name_has_a_canonical_name() {
        for &(name, sym) in names::KEY_SYMS_BY_NAME {
            assert!(symbol_to_name(KeySym(sym)).is_some(), "name {}", name);
        }
    }

    #[test]
    fn test_known_name_per_keysym_page() {
        let samples = [
            ("Aogonek", 0x1a1),
            ("gbreve", 0x2bb),
            ("kra", 0x3a2),
            ("kana_A", 0x4b1),
            ("Arabic_alef", 0x5c7),
            ("Cyrillic_ZHE", 0x6f6),
            ("Greek_OMEGA", 0x7d9),
            ("integral", 0x8bf),
            ("checkerboard", 0x9e1),
            ("emdash", 0xaa9),
            ("downcaret", 0xba8),
            ("hebrew_aleph", 0xce0),
            ("Thai_kokai", 0xda1),
            ("Hangul_Kiyeog", 0xea1),
            ("Hangul_A", 0xebf),
            ("OE", 0x13bc),
            ("EuroSign", 0x20ac),
            ("ISO_Level3_Shift", 0xfe03),
            ("dead_acute", 0xfe51),
            ("Return", 0xff0d),
            ("Armenian_AYB", 0x100_0531),
            ("Georgian_an", 0x100_10d0),
            ("XF86Calculator", 0x1008_ff1d),
        ];

        for (name, sym) in samples {
            assert_eq!(name_to_symbol(name), KeySym(sym), "name {}", name);
            assert_eq!(symbol_to_name(KeySym(sym)), Some(name), "sym {:#x}", sym);
        }
    }

    #[test]
    fn test_secondary_names_resolve_to_canonical_symbol() {
        assert_eq!(name_to_symbol("Page_Up"), KeySym::PAGE_UP);
        assert_eq!(symbol_to_name(KeySym::PAGE_UP), Some("Prior"));
        assert_eq!(name_to_symbol("kappa"), KeySym(0x3a2));
        assert_eq!(symbol_to_name(KeySym(0x3a2)), Some("kra"));
    }

    #[test]
    fn test_legacy_names_are_not_primary_names() {
        for &(name, _) in compat::LEGACY_KEY_NAMES {
            assert!(primary_name_to_symbol(name).is_none(), "name {}", name);
        }
    }
}
