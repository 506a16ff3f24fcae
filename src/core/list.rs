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

//! src/core/list.rs
//!
//! Ordered hotkey collections
//!
//! A binding usually accepts several hotkeys ("Control+space Shift+Shift_L").
//! `HotkeyList` keeps them in insertion order so that writing a list back
//! out reproduces what was read. Order does not matter for matching.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::debug;

use crate::core::matcher::hotkey_check;
use crate::core::parser::{parse_hotkey, split_hotkey_list};
use crate::core::types::Hotkey;

/// Ordered, owned sequence of hotkeys
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HotkeyList {
    hotkeys: Vec<Hotkey>,
}

impl HotkeyList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            hotkeys: Vec::new(),
        }
    }

    /// Parses a whitespace-separated list of hotkeys.
    ///
    /// Tokens whose key cannot be resolved are dropped; the rest of the
    /// list is still returned. Use
    /// [`validate_hotkey_list`](crate::core::validator::validate_hotkey_list)
    /// when an unknown key must be an error.
    ///
    /// # Example
    /// ```
    /// use im_hotkey::HotkeyList;
    ///
    /// let list = HotkeyList::parse("Control+space  \tNoSuchKey SHIFT_Shift_L");
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.to_string(), "Control+space Shift+Shift_L");
    /// ```
    pub fn parse(text: &str) -> Self {
        let mut list = Self::new();

        for token in split_hotkey_list(text) {
            let hotkey = parse_hotkey(token);
            if hotkey.sym.is_none() {
                debug!(token, "dropping hotkey with unknown key");
                continue;
            }
            list.append(hotkey);
        }

        list
    }

    /// Returns true if `key` triggers any hotkey in the list.
    ///
    /// Scans in insertion order and stops at the first match.
    pub fn check(&self, key: &Hotkey) -> bool {
        self.hotkeys.iter().any(|bound| hotkey_check(key, bound))
    }

    /// Adds a hotkey at the end.
    pub fn append(&mut self, hotkey: Hotkey) {
        self.hotkeys.push(hotkey);
    }

    /// Removes every hotkey; the list stays usable.
    pub fn clear(&mut self) {
        self.hotkeys.clear();
    }

    pub fn len(&self) -> usize {
        self.hotkeys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotkeys.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Hotkey> {
        self.hotkeys.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hotkey> {
        self.hotkeys.iter()
    }

    pub fn as_slice(&self) -> &[Hotkey] {
        &self.hotkeys
    }
}

/// Canonical list form: every representable hotkey, space separated
impl fmt::Display for HotkeyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .hotkeys
            .iter()
            .filter_map(Hotkey::to_key_string)
            .collect::<Vec<_>>()
            .join(" ");

        write!(f, "{}", joined)
    }
}

impl FromIterator<Hotkey> for HotkeyList {
    fn from_iter<T: IntoIterator<Item = Hotkey>>(iter: T) -> Self {
        Self {
            hotkeys: iter.into_iter().collect(),
        }
    }
}

impl Extend<Hotkey> for HotkeyList {
    fn extend<T: IntoIterator<Item = Hotkey>>(&mut self, iter: T) {
        self.hotkeys.extend(iter);
    }
}

impl IntoIterator for HotkeyList {
    type Item = Hotkey;
    type IntoIter = std::vec::IntoIter<Hotkey>;

    fn into_iter(self) -> Self::IntoIter {
        self.hotkeys.into_iter()
    }
}

impl<'a> IntoIterator for &'a HotkeyList {
    type Item = &'a Hotkey;
    type IntoIter = std::slice::Iter<'a, Hotkey>;

    fn into_iter(self) -> Self::IntoIter {
        self.hotkeys.iter()
    }
}

impl Serialize for HotkeyList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HotkeyList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(HotkeyList::parse(&text))
    }
}
