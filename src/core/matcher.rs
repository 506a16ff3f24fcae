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

//! src/core/matcher.rs
//!
//! Hotkey matching and normalisation
//!
//! A live key event carries lock and auxiliary bits (Caps Lock, Num Lock,
//! mouse buttons) that must not stop a binding from firing. Matching masks
//! the candidate to `KeyStates::RELEVANT` and then compares exactly.

use crate::core::types::{Hotkey, KeySym, KeyStates, Modifier};

/// Does `candidate` trigger `bound`?
///
/// Only the candidate is masked. `bound` is expected to hold nothing but
/// relevant bits, which is the case for anything produced by the parser
/// or by [`normalize`].
pub fn hotkey_check(candidate: &Hotkey, bound: &Hotkey) -> bool {
    candidate.sym == bound.sym && candidate.state.relevant() == bound.state
}

/// Bring a hotkey captured from a live event into bindable form
///
/// - Irrelevant state bits are dropped.
/// - A modifier key does not count as modified by itself, so
///   `Control_L` with Ctrl held becomes plain `Control_L`.
/// - `ISO_Left_Tab` is the shifted Tab and becomes `Shift+Tab`.
/// - With Shift held, `a`-`z` become `A`-`Z`.
pub fn normalize(hotkey: &Hotkey) -> Hotkey {
    let mut sym = hotkey.sym;
    let mut state = hotkey.state.relevant();

    if let Some(modifier) = Modifier::from_key(sym) {
        state.remove(modifier.state());
    }

    if sym == KeySym::ISO_LEFT_TAB {
        sym = KeySym::TAB;
        state.insert(KeyStates::SHIFT);
    }

    if state.contains(KeyStates::SHIFT) && (KeySym::KEY_A..=KeySym::KEY_Z).contains(&sym) {
        sym = KeySym(sym.raw() - (KeySym::KEY_A.raw() - KeySym::KEY_UPPER_A.raw()));
    }

    Hotkey {
        sym,
        state,
        builtin: hotkey.builtin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_ignores_lock_bits() {
        let bound = Hotkey::new(KeySym::KEY_A, KeyStates::CTRL);
        let event = Hotkey::new(
            KeySym::KEY_A,
            KeyStates::CTRL | KeyStates::CAPS_LOCK | KeyStates::NUM_LOCK,
        );
        assert!(hotkey_check(&event, &bound));
    }

    #[test]
    fn test_check_requires_exact_modifiers() {
        let bound = Hotkey::new(KeySym::KEY_A, KeyStates::CTRL);
        let event = Hotkey::new(KeySym::KEY_A, KeyStates::CTRL | KeyStates::SHIFT);
        assert!(!hotkey_check(&event, &bound));

        let event = Hotkey::new(KeySym::KEY_A, KeyStates::empty());
        assert!(!hotkey_check(&event, &bound));
    }

    #[test]
    fn test_check_requires_same_symbol() {
        let bound = Hotkey::new(KeySym::KEY_A, KeyStates::CTRL);
        let event = Hotkey::new(KeySym(0x62), KeyStates::CTRL);
        assert!(!hotkey_check(&event, &bound));
    }

    #[test]
    fn test_check_does_not_mask_bound_side() {
        let bound = Hotkey::new(KeySym::KEY_A, KeyStates::CTRL | KeyStates::CAPS_LOCK);
        let event = Hotkey::new(KeySym::KEY_A, KeyStates::CTRL | KeyStates::CAPS_LOCK);
        assert!(!hotkey_check(&event, &bound));
    }

    #[test]
    fn test_check_ignores_unknown_bits() {
        let bound = Hotkey::new(KeySym::TAB, KeyStates::ALT);
        let event = Hotkey::new(KeySym::TAB, KeyStates::from_raw(0x8000_0000 | 0x8));
        assert!(hotkey_check(&event, &bound));
    }

    #[test]
    fn test_normalize_modifier_key() {
        let pressed = Hotkey::new(KeySym::CONTROL_L, KeyStates::CTRL | KeyStates::SHIFT);
        let normalized = normalize(&pressed);
        assert_eq!(normalized.sym, KeySym::CONTROL_L);
        assert_eq!(normalized.state, KeyStates::SHIFT);
    }

    #[test]
    fn test_normalize_iso_left_tab() {
        let normalized = normalize(&Hotkey::new(KeySym::ISO_LEFT_TAB, KeyStates::empty()));
        assert_eq!(normalized, Hotkey::new(KeySym::TAB, KeyStates::SHIFT));
    }

    #[test]
    fn test_normalize_shifted_letter() {
        let normalized = normalize(&Hotkey::new(
            KeySym::KEY_A,
            KeyStates::SHIFT | KeyStates::CAPS_LOCK,
        ));
        assert_eq!(normalized, Hotkey::new(KeySym::KEY_UPPER_A, KeyStates::SHIFT));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            Hotkey::new(KeySym::ISO_LEFT_TAB, KeyStates::CTRL | KeyStates::NUM_LOCK),
            Hotkey::new(KeySym(0x7a), KeyStates::SHIFT | KeyStates::SUPER),
            Hotkey::new(KeySym::SUPER_R, KeyStates::SUPER | KeyStates::ALT),
            Hotkey::new(KeySym::RETURN, KeyStates::from_raw(0xffff_ffff)),
        ];
        for hotkey in samples {
            let once = normalize(&hotkey);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_normalized_hotkey_matches_its_event() {
        let event = Hotkey::new(KeySym::KEY_UPPER_A, KeyStates::SHIFT | KeyStates::CAPS_LOCK);
        let bound = normalize(&event);
        assert!(hotkey_check(&event, &bound));
    }
}
