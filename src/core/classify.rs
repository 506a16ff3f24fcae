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

//! src/core/classify.rs
//!
//! Key classification predicates
//!
//! Input methods use these to decide whether a key belongs to the
//! composition (letters, digits) or to the surrounding editor (cursor
//! movement, bare modifier presses). Unless noted otherwise a predicate
//! requires the state to be exactly as listed, lock bits included.

use crate::core::types::{Hotkey, KeySym, KeyStates};

/// `0`-`9` with no state
pub fn is_digit(hotkey: &Hotkey) -> bool {
    hotkey.state.is_empty() && (KeySym::KEY_0..=KeySym::KEY_9).contains(&hotkey.sym)
}

/// `A`-`Z` with no state
pub fn is_upper_az(hotkey: &Hotkey) -> bool {
    hotkey.state.is_empty()
        && (KeySym::KEY_UPPER_A..=KeySym::KEY_UPPER_Z).contains(&hotkey.sym)
}

/// `a`-`z` with no state
pub fn is_lower_az(hotkey: &Hotkey) -> bool {
    hotkey.state.is_empty() && (KeySym::KEY_A..=KeySym::KEY_Z).contains(&hotkey.sym)
}

/// Printable ASCII (`space` to `asciitilde`) with no state
pub fn is_simple(hotkey: &Hotkey) -> bool {
    hotkey.state.is_empty() && (KeySym::SPACE..=KeySym::ASCII_TILDE).contains(&hotkey.sym)
}

/// The key is itself a modifier key; state is not inspected
pub fn is_modifier_combine(hotkey: &Hotkey) -> bool {
    matches!(
        hotkey.sym,
        KeySym::CONTROL_L
            | KeySym::CONTROL_R
            | KeySym::ALT_L
            | KeySym::ALT_R
            | KeySym::SHIFT_L
            | KeySym::SHIFT_R
            | KeySym::SUPER_L
            | KeySym::SUPER_R
            | KeySym::HYPER_L
            | KeySym::HYPER_R
            | KeySym::META_L
            | KeySym::META_R
    )
}

/// Arrows, Home/End or Page Up/Down, alone or with Ctrl and/or Shift
pub fn is_cursor_move(hotkey: &Hotkey) -> bool {
    let movement = matches!(
        hotkey.sym,
        KeySym::LEFT
            | KeySym::RIGHT
            | KeySym::UP
            | KeySym::DOWN
            | KeySym::PAGE_UP
            | KeySym::PAGE_DOWN
            | KeySym::HOME
            | KeySym::END
    );

    movement && (KeyStates::CTRL | KeyStates::SHIFT).contains(hotkey.state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(sym: KeySym, state: KeyStates) -> Hotkey {
        Hotkey::new(sym, state)
    }

    #[test]
    fn test_letters_and_digits() {
        assert!(is_digit(&key(KeySym(0x35), KeyStates::empty())));
        assert!(!is_digit(&key(KeySym(0x35), KeyStates::SHIFT)));
        assert!(is_upper_az(&key(KeySym(0x51), KeyStates::empty())));
        assert!(!is_upper_az(&key(KeySym(0x71), KeyStates::empty())));
        assert!(is_lower_az(&key(KeySym(0x71), KeyStates::empty())));
        assert!(!is_lower_az(&key(KeySym(0x71), KeyStates::CAPS_LOCK)));
    }

    #[test]
    fn test_simple() {
        assert!(is_simple(&key(KeySym::SPACE, KeyStates::empty())));
        assert!(is_simple(&key(KeySym::ASCII_TILDE, KeyStates::empty())));
        assert!(!is_simple(&key(KeySym(0xe9), KeyStates::empty())));
        assert!(!is_simple(&key(KeySym::KEY_A, KeyStates::CTRL)));
    }

    #[test]
    fn test_modifier_combine() {
        assert!(is_modifier_combine(&key(KeySym::CONTROL_R, KeyStates::CTRL)));
        assert!(is_modifier_combine(&key(KeySym::HYPER_L, KeyStates::empty())));
        assert!(!is_modifier_combine(&key(KeySym::CAPS_LOCK, KeyStates::empty())));
    }

    #[test]
    fn test_cursor_move() {
        assert!(is_cursor_move(&key(KeySym::LEFT, KeyStates::empty())));
        assert!(is_cursor_move(&key(KeySym::END, KeyStates::CTRL | KeyStates::SHIFT)));
        assert!(!is_cursor_move(&key(KeySym::HOME, KeyStates::ALT)));
        assert!(!is_cursor_move(&key(KeySym::RETURN, KeyStates::empty())));
    }
}
