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

//! src/core/parser.rs
//!
//! Hotkey string codec
//!
//! This module turns hotkey strings into `Hotkey` values and back. It
//! handles:
//! - Both modifier spellings (`CTRL_a` and `Control+a`)
//! - Canonical output (`Control+`, `Alt+`, `Shift+`, `Super+`, then the key)
//! - Splitting whitespace-separated hotkey lists
//!
//! # Modifier detection
//! Modifiers are found by substring search, not by anchored prefix
//! parsing: every spelling that occurs anywhere in the string sets its
//! bit, and the key name starts right after the furthest-right end of any
//! spelling found. `scan_modifiers` is the only place this rule lives.
//! A key name containing a modifier spelling would be misread; no name in
//! the key tables does.

use nom::{
    bytes::complete::{take_till1, take_while},
    multi::many0,
    sequence::{preceded, terminated},
    IResult, Parser,
};

use crate::core::keysym;
use crate::core::types::{Hotkey, KeyStates, KeySym, Modifier};

/// Parse a single hotkey
///
/// Never fails: an unresolvable key name produces a hotkey whose symbol
/// is `KeySym::NONE`, and callers decide whether that is an error. The
/// empty string parses to `KeySym::NONE` as well.
///
/// # Example
/// ```
/// use im_hotkey::core::parser::parse_hotkey;
/// use im_hotkey::{KeyStates, KeySym};
///
/// let hotkey = parse_hotkey("CTRL_ALT_F1");
/// assert_eq!(hotkey.sym, KeySym::F1);
/// assert_eq!(hotkey.state, KeyStates::CTRL | KeyStates::ALT);
/// ```
pub fn parse_hotkey(text: &str) -> Hotkey {
    let (state, key_start) = scan_modifiers(text);
    let sym = keysym::name_to_symbol(&text[key_start..]);

    Hotkey::new(sym, state)
}

/// Find modifier spellings in `text`
///
/// Returns the modifier state and the byte offset where the key name
/// begins. For each of the eight spellings only its first occurrence is
/// considered; the offset is the largest end position among them, or 0
/// when no spelling occurs.
pub fn scan_modifiers(text: &str) -> (KeyStates, usize) {
    let mut state = KeyStates::empty();
    let mut key_start = 0;

    for modifier in Modifier::CANONICAL_ORDER {
        for spelling in [modifier.legacy_prefix(), modifier.prefix()] {
            if let Some(pos) = text.find(spelling) {
                state |= modifier.state();
                key_start = key_start.max(pos + spelling.len());
            }
        }
    }

    (state, key_start)
}

/// Canonical string for a hotkey
///
/// Returns `None` for `KeySym::NONE` and for symbols without a name.
/// `ISO_Left_Tab` is written as `Tab`. Only the four relevant modifiers
/// are written, always in Control, Alt, Shift, Super order.
pub fn hotkey_to_string(hotkey: &Hotkey) -> Option<String> {
    if hotkey.sym.is_none() {
        return None;
    }

    let sym = if hotkey.sym == KeySym::ISO_LEFT_TAB {
        KeySym::TAB
    } else {
        hotkey.sym
    };

    let name = keysym::symbol_to_name(sym)?;

    let mut out = String::with_capacity(name.len() + 16);
    for modifier in hotkey.modifiers() {
        out.push_str(modifier.prefix());
    }
    out.push_str(name);

    Some(out)
}

/// Characters separating the entries of a hotkey list
pub fn is_list_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Parse a hotkey list into its tokens
///
/// Runs of separators count as one, and leading or trailing separators
/// produce no empty tokens.
pub fn hotkey_tokens(input: &str) -> IResult<&str, Vec<&str>> {
    preceded(
        take_while(is_list_separator),
        many0(terminated(
            take_till1(is_list_separator),
            take_while(is_list_separator),
        )),
    )
    .parse(input)
}

/// Split a hotkey list string into its tokens
pub fn split_hotkey_list(input: &str) -> Vec<&str> {
    hotkey_tokens(input)
        .map(|(_, tokens)| tokens)
        .unwrap_or_default()
}
