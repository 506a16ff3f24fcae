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

//! Input Method Hotkeys
//!
//! Representation, parsing, canonical serialisation and matching of the
//! keyboard hotkeys an input-method framework binds actions to, plus the
//! tables translating between key symbols, key names and Unicode.
//!
//! # Features
//!
//! - **Two syntaxes:** `Control+Alt+a` and the older `CTRL_ALT_a`
//! - **Canonical output:** modifiers always written Control, Alt, Shift, Super
//! - **Masked matching:** lock bits on live events never block a binding
//! - **Legacy names:** deprecated key names still resolve when parsing
//! - **Unicode bridge:** every code point has a key symbol
//! - **Bindings files:** load, check for conflicts, rewrite atomically
//!
//! # Architecture
//!
//! - **`core`:** The engine (tables, codec, matcher, lists, validation)
//! - **`config`:** Bindings file reading and atomic writing
//!
//! # Examples
//!
//! ## Parsing and matching
//!
//! ```
//! use im_hotkey::{Hotkey, HotkeyList, KeyStates, KeySym};
//!
//! let trigger = HotkeyList::parse("Control+space SHIFT_Shift_L");
//!
//! // Caps Lock is on while the user presses Ctrl+Space
//! let event = Hotkey::new(KeySym::SPACE, KeyStates::CTRL | KeyStates::CAPS_LOCK);
//! assert!(trigger.check(&event));
//! assert_eq!(trigger.to_string(), "Control+space Shift+Shift_L");
//! ```
//!
//! ## Checking a bindings file
//!
//! ```no_run
//! use im_hotkey::config::BindingsFile;
//! use std::path::Path;
//!
//! let bindings = BindingsFile::load(Path::new("/tmp/bindings.conf"))?;
//! if bindings.conflicts().is_empty() {
//!     println!("No conflicts!");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod core;

// Re-export commonly used types for convenience
pub use crate::core::{Hotkey, HotkeyList, KeyStates, KeySym, Modifier};
