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

//! Hotkey list tests

use crate::core::{
    list::HotkeyList,
    types::{Hotkey, KeyStates, KeySym},
};

#[test]
fn test_new_list_is_empty() {
    let list = HotkeyList::new();
    assert!(list.is_empty());
    assert_eq!(list.to_string(), "");
}

#[test]
fn test_parse_list_with_mixed_whitespace() {
    let list = HotkeyList::parse("Control+a  \tControl+b");
    assert_eq!(list.len(), 2);
    assert_eq!(list.to_string(), "Control+a Control+b");
}

#[test]
fn test_parse_list_of_whitespace_is_empty() {
    assert!(HotkeyList::parse("   ").is_empty());
    assert!(HotkeyList::parse("").is_empty());
}

#[test]
fn test_parse_list_drops_unknown_tokens() {
    let list = HotkeyList::parse("Bogus CTRL_space Ctrl+a F2");
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0).map(|h| h.sym), Some(KeySym::SPACE));
    assert_eq!(list.get(1).map(|h| h.sym), Some(KeySym(0xffbf)));
}

#[test]
fn test_list_preserves_order() {
    let list = HotkeyList::parse("Shift+Alt+z CTRL_a");
    assert_eq!(list.to_string(), "Alt+Shift+z Control+a");
}

#[test]
fn test_list_check() {
    let list = HotkeyList::parse("Control+space Shift+Shift_L");

    let event = Hotkey::new(KeySym::SPACE, KeyStates::CTRL | KeyStates::NUM_LOCK);
    assert!(list.check(&event));

    let event = Hotkey::new(KeySym::SHIFT_L, KeyStates::SHIFT);
    assert!(list.check(&event));

    let event = Hotkey::new(KeySym::SPACE, KeyStates::ALT);
    assert!(!list.check(&event));

    assert!(!HotkeyList::new().check(&event));
}

#[test]
fn test_append_and_clear() {
    let mut list = HotkeyList::new();
    list.append(Hotkey::new(KeySym::F1, KeyStates::empty()));
    list.append(Hotkey::new(KeySym::ESCAPE, KeyStates::SUPER));
    assert_eq!(list.to_string(), "F1 Super+Escape");

    list.clear();
    assert!(list.is_empty());

    list.append(Hotkey::new(KeySym::RETURN, KeyStates::empty()));
    assert_eq!(list.to_string(), "Return");
}

#[test]
fn test_to_string_skips_unrepresentable_entries() {
    let mut list = HotkeyList::new();
    list.append(Hotkey::new(KeySym::NONE, KeyStates::CTRL));
    list.append(Hotkey::new(KeySym::KEY_A, KeyStates::empty()));
    list.append(Hotkey::new(KeySym(0x0100_4e2d), KeyStates::empty()));
    assert_eq!(list.len(), 3);
    assert_eq!(list.to_string(), "a");
}

#[test]
fn test_collect_and_iterate() {
    let list: HotkeyList = ["F1", "F2", "F3"].iter().map(|s| Hotkey::parse(s)).collect();
    assert_eq!(list.len(), 3);

    let names = list
        .iter()
        .filter_map(|h| h.to_key_string())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["F1", "F2", "F3"]);
}

#[test]
fn test_list_with_non_latin1_keys() {
    let list = HotkeyList::parse("Control+ğ ISO_Level3_Shift");
    assert_eq!(list.len(), 2);
    assert_eq!(list.to_string(), "Control+gbreve ISO_Level3_Shift");

    // X reports ğ as gbreve
    let event = Hotkey::new(KeySym(0x2bb), KeyStates::CTRL);
    assert!(list.check(&event));
    assert!(list.check(&Hotkey::new(KeySym(0xfe03), KeyStates::empty())));
}
