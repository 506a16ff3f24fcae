//! Hotkey conflict detection
//!
//! This module finds hotkeys bound to more than one action using
//! HashMap-based indexing. Bindings are keyed by the hotkey's symbol and
//! relevant modifier bits, the same notion of equality matching uses, so
//! `Control+a` and `CTRL_a` land in the same bucket.
//!
//! # Performance
//! - Add binding: O(1) average case
//! - Check conflict: O(1) average case
//! - List all conflicts: O(n log n) where n = number of unique hotkeys

use std::collections::HashMap;

use crate::core::list::HotkeyList;
use crate::core::types::Hotkey;

/// An action bound to a hotkey
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Binding {
    /// Action name, e.g. "Hotkey/TriggerKey"
    pub action: String,

    /// The hotkey as it was bound
    pub hotkey: Hotkey,
}

/// Detects hotkeys bound to several actions.
pub struct ConflictDetector {
    /// Maps a masked hotkey to all bindings using it.
    bindings: HashMap<Hotkey, Vec<Binding>>,
}

/// A hotkey shared by two or more actions.
#[derive(Clone, Debug, PartialEq)]
pub struct Conflict {
    /// The shared hotkey, relevant modifier bits only
    pub hotkey: Hotkey,

    /// Every binding using it (always 2 or more distinct actions)
    pub conflicting_bindings: Vec<Binding>,
}

fn index_key(hotkey: &Hotkey) -> Hotkey {
    Hotkey::new(hotkey.sym, hotkey.state.relevant())
}

impl ConflictDetector {
    /// Creates a new empty conflict detector.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Adds one binding.
    pub fn add_binding(&mut self, action: &str, hotkey: Hotkey) {
        self.bindings
            .entry(index_key(&hotkey))
            .or_default()
            .push(Binding {
                action: action.to_string(),
                hotkey,
            });
    }

    /// Adds every hotkey of a list under the same action.
    pub fn add_list(&mut self, action: &str, list: &HotkeyList) {
        for hotkey in list {
            self.add_binding(action, *hotkey);
        }
    }

    /// Finds all hotkeys used by two or more distinct actions.
    ///
    /// Results are ordered by symbol, then modifier bits.
    pub fn find_conflicts(&self) -> Vec<Conflict> {
        let mut conflicts = self
            .bindings
            .iter()
            .filter(|(_, bindings)| distinct_actions(bindings) > 1)
            .map(|(hotkey, bindings)| Conflict {
                hotkey: *hotkey,
                conflicting_bindings: bindings.clone(),
            })
            .collect::<Vec<_>>();

        conflicts.sort_by_key(|c| (c.hotkey.sym, c.hotkey.state.bits()));
        conflicts
    }

    /// Checks if a hotkey is shared by two or more distinct actions.
    pub fn has_conflict(&self, hotkey: &Hotkey) -> bool {
        self.bindings
            .get(&index_key(hotkey))
            .map(|bindings| distinct_actions(bindings) > 1)
            .unwrap_or(false)
    }

    /// Returns the total number of bindings tracked.
    pub fn total_bindings(&self) -> usize {
        self.bindings.values().map(|v| v.len()).sum()
    }
}

impl Default for ConflictDetector {
    fn default() -> Self {
        Self::new()
    }
}

fn distinct_actions(bindings: &[Binding]) -> usize {
    let mut actions = bindings.iter().map(|b| b.action.as_str()).collect::<Vec<_>>();
    actions.sort_unstable();
    actions.dedup();
    actions.len()
}
