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

//! src/core/mod.rs
//!
//! Hotkey engine
//!
//! This module contains the key tables and the algorithms built on them:
//! - Key symbol names and their legacy aliases
//! - Key symbol to Unicode conversion
//! - Parsing and canonical serialisation of hotkey strings
//! - Matching live key events against bound hotkeys
//! - Hotkey lists, strict validation and conflict detection
//!
//! Everything here is free of I/O. The tables are immutable statics and
//! can be read from any thread; `HotkeyList` is an ordinary owned value
//! and needs external synchronisation if shared for mutation.

pub mod classify;
pub mod conflict;
pub mod keysym;
pub mod list;
pub mod matcher;
pub mod parser;
pub mod types;
pub mod unicode;
pub mod validator;

pub use conflict::{Binding, Conflict, ConflictDetector};
pub use list::HotkeyList;
pub use types::*;
pub use validator::{validate_hotkey, validate_hotkey_list, ValidationError};

#[cfg(test)]
mod tests;
