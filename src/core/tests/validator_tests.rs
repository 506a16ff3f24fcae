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

use crate::core::types::{KeyStates, KeySym};
use crate::core::validator::{validate_hotkey, validate_hotkey_list, ValidationError};

#[test]
fn test_valid_hotkeys() {
    assert!(validate_hotkey("Control+a").is_ok());
    assert!(validate_hotkey("SHIFT_ENTER").is_ok());
    assert!(validate_hotkey("Ω").is_ok());

    let hotkey = validate_hotkey("Super+F1").unwrap();
    assert_eq!(hotkey.sym, KeySym::F1);
    assert_eq!(hotkey.state, KeyStates::SUPER);
}

#[test]
fn test_empty_hotkey() {
    assert_eq!(validate_hotkey(""), Err(ValidationError::Empty));
}

#[test]
fn test_unknown_key_reports_key_part() {
    assert_eq!(
        validate_hotkey("Control+Alt+Bogus"),
        Err(ValidationError::UnknownKey {
            hotkey: "Control+Alt+Bogus".to_string(),
            key: "Bogus".to_string(),
        })
    );
}

#[test]
fn test_modifier_only_is_invalid() {
    assert!(matches!(
        validate_hotkey("Control+"),
        Err(ValidationError::UnknownKey { .. })
    ));
}

#[test]
fn test_list_fails_on_first_unknown_token() {
    let result = validate_hotkey_list("F1 Nope Neither");
    assert_eq!(
        result,
        Err(ValidationError::UnknownKey {
            hotkey: "Nope".to_string(),
            key: "Nope".to_string(),
        })
    );
}

#[test]
fn test_valid_list() {
    let list = validate_hotkey_list(" F1\tAlt+F2 ").unwrap();
    assert_eq!(list.len(), 2);

    assert!(validate_hotkey_list("  ").unwrap().is_empty());
}
