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

//! Strict hotkey validation
//!
//! The parser is lenient by contract: unknown keys become `KeySym::NONE`
//! and list parsing drops them. Configuration front ends that must reject
//! bad input up front use the functions here instead, which fail on the
//! first token that does not resolve.

use thiserror::Error;

use crate::core::list::HotkeyList;
use crate::core::parser::{parse_hotkey, scan_modifiers, split_hotkey_list};
use crate::core::types::Hotkey;

/// Validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Nothing to parse
    #[error("Empty hotkey")]
    Empty,

    /// Key name not found in any table and not a single character
    #[error("Unknown key '{key}' in hotkey '{hotkey}'")]
    UnknownKey { hotkey: String, key: String },
}

/// Parses one hotkey, rejecting unknown key names
pub fn validate_hotkey(text: &str) -> Result<Hotkey, ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::Empty);
    }

    let hotkey = parse_hotkey(text);
    if hotkey.sym.is_none() {
        let (_, key_start) = scan_modifiers(text);
        return Err(ValidationError::UnknownKey {
            hotkey: text.to_string(),
            key: text[key_start..].to_string(),
        });
    }

    Ok(hotkey)
}

/// Parses a hotkey list, failing on the first unknown token
///
/// A string of only whitespace is a valid, empty list.
pub fn validate_hotkey_list(text: &str) -> Result<HotkeyList, ValidationError> {
    split_hotkey_list(text)
        .into_iter()
        .map(validate_hotkey)
        .collect()
}
