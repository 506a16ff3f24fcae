//! src/core/types.rs
//!
//! Core type definitions for hotkey handling
//!
//! This module defines the fundamental types used throughout the crate:
//! - `KeySym`: A 32-bit logical key identifier
//! - `KeyStates`: Modifier and lock bits reported with a key event
//! - `Modifier`: The four modifiers that take part in matching
//! - `Hotkey`: A key symbol plus the modifiers that must be held
//!
//! `Hotkey` serialises as its canonical string so that configuration
//! formats can store bindings the same way the bindings file does.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::core::{classify, keysym, matcher, parser, unicode, validator};

/// Logical key identifier
///
/// Values in the printable Latin-1 ranges double as their own Unicode
/// code point. `KeySym::NONE` means "no key".
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct KeySym(pub u32);

impl KeySym {
    pub const NONE: KeySym = KeySym(0);

    pub const SPACE: KeySym = KeySym(0x0020);
    pub const ASCII_TILDE: KeySym = KeySym(0x007e);
    pub const KEY_0: KeySym = KeySym(0x0030);
    pub const KEY_9: KeySym = KeySym(0x0039);
    pub const KEY_UPPER_A: KeySym = KeySym(0x0041);
    pub const KEY_UPPER_Z: KeySym = KeySym(0x005a);
    pub const KEY_A: KeySym = KeySym(0x0061);
    pub const KEY_Z: KeySym = KeySym(0x007a);

    pub const ISO_LEFT_TAB: KeySym = KeySym(0xfe20);
    pub const BACKSPACE: KeySym = KeySym(0xff08);
    pub const TAB: KeySym = KeySym(0xff09);
    pub const RETURN: KeySym = KeySym(0xff0d);
    pub const ESCAPE: KeySym = KeySym(0xff1b);
    pub const HOME: KeySym = KeySym(0xff50);
    pub const LEFT: KeySym = KeySym(0xff51);
    pub const UP: KeySym = KeySym(0xff52);
    pub const RIGHT: KeySym = KeySym(0xff53);
    pub const DOWN: KeySym = KeySym(0xff54);
    pub const PAGE_UP: KeySym = KeySym(0xff55);
    pub const PAGE_DOWN: KeySym = KeySym(0xff56);
    pub const END: KeySym = KeySym(0xff57);
    pub const INSERT: KeySym = KeySym(0xff63);
    pub const F1: KeySym = KeySym(0xffbe);
    pub const SHIFT_L: KeySym = KeySym(0xffe1);
    pub const SHIFT_R: KeySym = KeySym(0xffe2);
    pub const CONTROL_L: KeySym = KeySym(0xffe3);
    pub const CONTROL_R: KeySym = KeySym(0xffe4);
    pub const CAPS_LOCK: KeySym = KeySym(0xffe5);
    pub const META_L: KeySym = KeySym(0xffe7);
    pub const META_R: KeySym = KeySym(0xffe8);
    pub const ALT_L: KeySym = KeySym(0xffe9);
    pub const ALT_R: KeySym = KeySym(0xffea);
    pub const SUPER_L: KeySym = KeySym(0xffeb);
    pub const SUPER_R: KeySym = KeySym(0xffec);
    pub const HYPER_L: KeySym = KeySym(0xffed);
    pub const HYPER_R: KeySym = KeySym(0xffee);
    pub const DELETE: KeySym = KeySym(0xffff);

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    /// True for the "no key" sentinel
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }

    /// Resolve a key name (primary table, then legacy aliases, then a
    /// single character). Returns `KeySym::NONE` when nothing matches.
    pub fn from_name(name: &str) -> Self {
        keysym::name_to_symbol(name)
    }

    /// Canonical name, if the symbol has one
    pub fn name(self) -> Option<&'static str> {
        keysym::symbol_to_name(self)
    }

    /// Unicode code point for this symbol, 0 when there is none
    pub fn to_unicode(self) -> u32 {
        unicode::symbol_to_unicode(self)
    }

    pub fn from_unicode(ucs: u32) -> Self {
        unicode::unicode_to_symbol(ucs)
    }
}

impl fmt::Display for KeySym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "{:#x}", self.0),
        }
    }
}

impl fmt::LowerHex for KeySym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

bitflags! {
    /// Modifier and lock state reported alongside a key
    ///
    /// Only `KeyStates::RELEVANT` takes part in matching. The remaining
    /// bits are carried so a live event state survives untouched.
    #[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
    #[serde(transparent)]
    pub struct KeyStates: u32 {
        const SHIFT = 1 << 0;
        const CAPS_LOCK = 1 << 1;
        const CTRL = 1 << 2;
        const ALT = 1 << 3;
        const NUM_LOCK = 1 << 4;
        const SUPER = 1 << 6;
        const SCROLL_LOCK = 1 << 7;
        const MOUSE_PRESSED = 1 << 8;
        const HANDLED = 1 << 24;
        const IGNORED = 1 << 25;
        const SUPER2 = 1 << 26;
        const HYPER = 1 << 27;
        const META = 1 << 28;
    }
}

impl KeyStates {
    /// The bits inspected when matching hotkeys
    pub const RELEVANT: KeyStates = KeyStates::CTRL
        .union(KeyStates::ALT)
        .union(KeyStates::SHIFT)
        .union(KeyStates::SUPER);

    /// Build from a raw event mask, keeping unknown bits
    pub const fn from_raw(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }

    /// Drop every bit outside `RELEVANT`
    pub fn relevant(self) -> Self {
        self & Self::RELEVANT
    }
}

/// Modifiers that take part in matching
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Modifier {
    /// Control key
    Ctrl,
    /// Alt key (Mod1)
    Alt,
    /// Shift key
    Shift,
    /// Super/Windows key (Mod4)
    Super,
}

impl Modifier {
    /// Order in which modifiers are written out
    pub const CANONICAL_ORDER: [Modifier; 4] =
        [Modifier::Ctrl, Modifier::Alt, Modifier::Shift, Modifier::Super];

    pub const fn state(self) -> KeyStates {
        match self {
            Modifier::Ctrl => KeyStates::CTRL,
            Modifier::Alt => KeyStates::ALT,
            Modifier::Shift => KeyStates::SHIFT,
            Modifier::Super => KeyStates::SUPER,
        }
    }

    /// Spelling used in canonical output, e.g. `Control+`
    pub const fn prefix(self) -> &'static str {
        match self {
            Modifier::Ctrl => "Control+",
            Modifier::Alt => "Alt+",
            Modifier::Shift => "Shift+",
            Modifier::Super => "Super+",
        }
    }

    /// Older underscore spelling, e.g. `CTRL_`
    pub const fn legacy_prefix(self) -> &'static str {
        match self {
            Modifier::Ctrl => "CTRL_",
            Modifier::Alt => "ALT_",
            Modifier::Shift => "SHIFT_",
            Modifier::Super => "SUPER_",
        }
    }

    /// The modifier a modifier key itself reports when pressed
    pub fn from_key(sym: KeySym) -> Option<Modifier> {
        match sym {
            KeySym::CONTROL_L | KeySym::CONTROL_R => Some(Modifier::Ctrl),
            KeySym::ALT_L | KeySym::ALT_R => Some(Modifier::Alt),
            KeySym::SHIFT_L | KeySym::SHIFT_R => Some(Modifier::Shift),
            KeySym::SUPER_L | KeySym::SUPER_R => Some(Modifier::Super),
            _ => None,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Ctrl => write!(f, "Control"),
            Modifier::Alt => write!(f, "Alt"),
            Modifier::Shift => write!(f, "Shift"),
            Modifier::Super => write!(f, "Super"),
        }
    }
}

/// A key symbol plus the modifier state that must accompany it
///
/// `Hotkey` is plain `Copy` data. Derived equality is structural; use
/// [`Hotkey::key_eq`] to compare the way matching does.
///
/// # Example
/// ```
/// use im_hotkey::{Hotkey, KeyStates, KeySym};
///
/// let hotkey = Hotkey::parse("Shift+Alt+a");
/// assert_eq!(hotkey.sym, KeySym::KEY_A);
/// assert_eq!(hotkey.state, KeyStates::ALT | KeyStates::SHIFT);
/// assert_eq!(hotkey.to_key_string().as_deref(), Some("Alt+Shift+a"));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Hotkey {
    /// The key that triggers the hotkey
    pub sym: KeySym,

    /// Modifier state, possibly with non-matching bits from a live event
    pub state: KeyStates,

    /// Set only for hotkeys defined statically by the library
    pub(crate) builtin: bool,
}

impl Hotkey {
    /// Hotkey built at runtime
    pub const fn new(sym: KeySym, state: KeyStates) -> Self {
        Self {
            sym,
            state,
            builtin: false,
        }
    }

    /// Hotkey defined statically by the library
    pub const fn builtin(sym: KeySym, state: KeyStates) -> Self {
        Self {
            sym,
            state,
            builtin: true,
        }
    }

    pub const fn is_builtin(&self) -> bool {
        self.builtin
    }

    /// Lenient parse; an unknown key name yields `KeySym::NONE`
    pub fn parse(text: &str) -> Self {
        parser::parse_hotkey(text)
    }

    /// Canonical string, or `None` when the key has no name
    pub fn to_key_string(&self) -> Option<String> {
        parser::hotkey_to_string(self)
    }

    /// Does this hotkey, taken as a live key event, trigger `bound`?
    pub fn check(&self, bound: &Hotkey) -> bool {
        matcher::hotkey_check(self, bound)
    }

    /// Equal symbols and equal relevant modifier bits
    pub fn key_eq(&self, other: &Hotkey) -> bool {
        self.sym == other.sym && self.state.relevant() == other.state.relevant()
    }

    pub fn normalize(&self) -> Hotkey {
        matcher::normalize(self)
    }

    /// Relevant modifiers held, in canonical order
    pub fn modifiers(&self) -> impl Iterator<Item = Modifier> + '_ {
        Modifier::CANONICAL_ORDER
            .into_iter()
            .filter(move |m| self.state.contains(m.state()))
    }

    pub fn is_digit(&self) -> bool {
        classify::is_digit(self)
    }

    pub fn is_upper_az(&self) -> bool {
        classify::is_upper_az(self)
    }

    pub fn is_lower_az(&self) -> bool {
        classify::is_lower_az(self)
    }

    pub fn is_simple(&self) -> bool {
        classify::is_simple(self)
    }

    pub fn is_modifier_combine(&self) -> bool {
        classify::is_modifier_combine(self)
    }

    pub fn is_cursor_move(&self) -> bool {
        classify::is_cursor_move(self)
    }
}

impl FromStr for Hotkey {
    type Err = validator::ValidationError;

    /// Strict parse: unknown key names are an error
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validator::validate_hotkey(s)
    }
}

impl Serialize for Hotkey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.to_key_string() {
            Some(text) => serializer.serialize_str(&text),
            None => Err(serde::ser::Error::custom(format!(
                "hotkey {:#x} has no textual form",
                self.sym
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
