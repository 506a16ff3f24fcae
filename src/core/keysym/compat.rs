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

//! Legacy key names accepted when parsing older configuration files.

/// Deprecated upper-case key names, ordered bytewise by name.
pub(super) static LEGACY_KEY_NAMES: &[(&str, u32)] = &[
    ("BACKSPACE", 0xff08),
    ("DELETE", 0xffff),
    ("DOWN", 0xff54),
    ("END", 0xff57),
    ("ENTER", 0xff0d),
    ("ESCAPE", 0xff1b),
    ("HOME", 0xff50),
    ("INSERT", 0xff63),
    ("LALT", 0xffe9),
    ("LCTRL", 0xffe3),
    ("LEFT", 0xff51),
    ("LSHIFT", 0xffe1),
    ("LSUPER", 0xffeb),
    ("PGDN", 0xff56),
    ("PGUP", 0xff55),
    ("RALT", 0xffea),
    ("RCTRL", 0xffe4),
    ("RIGHT", 0xff53),
    ("RSHIFT", 0xffe2),
    ("RSUPER", 0xffec),
    ("SPACE", 0x20),
    ("TAB", 0xff09),
    ("UP", 0xff52),
];
