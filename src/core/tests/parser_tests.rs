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

//! Parser module tests
//!
//! Tests for the hotkey string codec:
//! - Both modifier spellings
//! - Key name resolution (primary, legacy, single character)
//! - Canonical output order and ISO_Left_Tab handling
//! - Round trips through parse and serialise
//! - List tokenising

use crate::core::{
    keysym::{name_to_symbol, symbol_to_name},
    parser::*,
    types::{Hotkey, KeyStates, KeySym},
};

#[test]
fn test_parse_symbolic_modifiers() {
    let hotkey = parse_hotkey("Control+Alt+Delete");
    assert_eq!(hotkey.sym, KeySym::DELETE);
    assert_eq!(hotkey.state, KeyStates::CTRL | KeyStates::ALT);
    assert!(!hotkey.is_builtin());
}

#[test]
fn test_parse_legacy_modifiers() {
    let hotkey = parse_hotkey("CTRL_SHIFT_SUPER_F12");
    assert_eq!(hotkey.sym, KeySym(0xffc9));
    assert_eq!(
        hotkey.state,
        KeyStates::CTRL | KeyStates::SHIFT | KeyStates::SUPER
    );
}

#[test]
fn test_parse_mixed_spellings() {
    let hotkey = parse_hotkey("CTRL_Alt+space");
    assert_eq!(hotkey.sym, KeySym::SPACE);
    assert_eq!(hotkey.state, KeyStates::CTRL | KeyStates::ALT);
}

#[test]
fn test_parse_without_modifiers() {
    let hotkey = parse_hotkey("Return");
    assert_eq!(hotkey.sym, KeySym::RETURN);
    assert!(hotkey.state.is_empty());
}

#[test]
fn test_parse_unknown_key_yields_none() {
    let hotkey = parse_hotkey("Control+NoSuchKey");
    assert!(hotkey.sym.is_none());
    assert_eq!(hotkey.state, KeyStates::CTRL);

    assert!(parse_hotkey("").sym.is_none());
    // "Ctrl+" is not one of the recognised spellings
    assert!(parse_hotkey("Ctrl+a").sym.is_none());
}

#[test]
fn test_parse_key_name_is_case_sensitive() {
    assert_eq!(parse_hotkey("Tab").sym, KeySym::TAB);
    assert!(parse_hotkey("tab").sym.is_none());
}

#[test]
fn test_parse_single_characters() {
    assert_eq!(parse_hotkey("Control++").sym, KeySym(0x2b));
    assert_eq!(parse_hotkey("é").sym, KeySym(0xe9));
    assert_eq!(parse_hotkey("Alt+Ж").sym, KeySym(0x6f6));
    assert_eq!(parse_hotkey("中").sym, KeySym(0x0100_4e2d));
}

#[test]
fn test_parse_key_starts_after_rightmost_modifier() {
    // Shift+ is found after Alt+, so the key starts after Shift+
    let (state, start) = scan_modifiers("Alt+Shift+a");
    assert_eq!(state, KeyStates::ALT | KeyStates::SHIFT);
    assert_eq!(start, "Alt+Shift+".len());

    // Only the first occurrence of a spelling counts
    let hotkey = parse_hotkey("Control+Control+a");
    assert!(hotkey.sym.is_none());
    assert_eq!(hotkey.state, KeyStates::CTRL);
}

#[test]
fn test_parse_modifier_found_anywhere() {
    // The key name is whatever follows the last modifier, even if text
    // precedes the first one
    let hotkey = parse_hotkey("xyzControl+a");
    assert_eq!(hotkey.sym, KeySym::KEY_A);
    assert_eq!(hotkey.state, KeyStates::CTRL);
}

#[test]
fn test_legacy_alias_resolves_like_modern_name() {
    assert_eq!(name_to_symbol("ENTER"), name_to_symbol("Return"));
    assert_eq!(name_to_symbol("PGUP"), name_to_symbol("Prior"));
    assert_eq!(name_to_symbol("LCTRL"), KeySym::CONTROL_L);
    assert_eq!(parse_hotkey("SHIFT_TAB").sym, KeySym::TAB);
}

#[test]
fn test_secondary_names() {
    assert_eq!(name_to_symbol("Page_Up"), KeySym::PAGE_UP);
    assert_eq!(symbol_to_name(KeySym::PAGE_UP), Some("Prior"));
}

#[test]
fn test_to_string_canonical_order() {
    let hotkey = parse_hotkey("Shift+Alt+a");
    assert_eq!(hotkey_to_string(&hotkey).as_deref(), Some("Alt+Shift+a"));

    let hotkey = parse_hotkey("SUPER_SHIFT_ALT_CTRL_F1");
    assert_eq!(
        hotkey_to_string(&hotkey).as_deref(),
        Some("Control+Alt+Shift+Super+F1")
    );
}

#[test]
fn test_to_string_absent_cases() {
    assert_eq!(hotkey_to_string(&Hotkey::new(KeySym::NONE, KeyStates::CTRL)), None);
    // No name for this symbol
    assert_eq!(
        hotkey_to_string(&Hotkey::new(KeySym(0x0100_4e2d), KeyStates::empty())),
        None
    );
}

#[test]
fn test_to_string_ignores_lock_bits() {
    let hotkey = Hotkey::new(KeySym::KEY_A, KeyStates::CTRL | KeyStates::CAPS_LOCK);
    assert_eq!(hotkey_to_string(&hotkey).as_deref(), Some("Control+a"));
}

#[test]
fn test_iso_left_tab_written_as_tab() {
    let left_tab = Hotkey::new(KeySym::ISO_LEFT_TAB, KeyStates::empty());
    let tab = Hotkey::new(KeySym::TAB, KeyStates::empty());
    assert_eq!(hotkey_to_string(&left_tab), hotkey_to_string(&tab));
    assert_eq!(hotkey_to_string(&left_tab).as_deref(), Some("Tab"));
}

#[test]
fn test_round_trip_and_idempotence() {
    let samples = [
        "a",
        "Control+space",
        "CTRL_ALT_Delete",
        "Shift+Super+KP_Enter",
        "ALT_Cyrillic_ya",
        "Super+XF86AudioMute",
        "Control+Shift+plus",
        "PGDN",
        "Alt+ß",
    ];

    for text in samples {
        let hotkey = parse_hotkey(text);
        let canonical = hotkey_to_string(&hotkey).expect(text);
        let reparsed = parse_hotkey(&canonical);

        assert!(reparsed.key_eq(&hotkey), "round trip of {}", text);
        assert_eq!(hotkey_to_string(&reparsed).as_deref(), Some(canonical.as_str()));
    }
}

#[test]
fn test_hotkey_tokens() {
    let (rest, tokens) = hotkey_tokens("\t Control+a  \x0bShift+b\r\n\x0cc ").unwrap();
    assert_eq!(rest, "");
    assert_eq!(tokens, vec!["Control+a", "Shift+b", "c"]);
}

#[test]
fn test_split_hotkey_list_edge_cases() {
    assert!(split_hotkey_list("").is_empty());
    assert!(split_hotkey_list(" \t\n\r\x0b\x0c").is_empty());
    assert_eq!(split_hotkey_list("F1"), vec!["F1"]);
}
