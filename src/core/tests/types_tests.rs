//! Type tests (KeySym, KeyStates, Modifier, Hotkey)

use crate::core::types::{Hotkey, KeyStates, KeySym, Modifier};

#[test]
fn test_keysym_display() {
    assert_eq!(format!("{}", KeySym::RETURN), "Return");
    assert_eq!(format!("{}", KeySym(0x0100_4e2d)), "0x1004e2d");
}

#[test]
fn test_keysym_conversions() {
    assert_eq!(KeySym::from_name("Escape"), KeySym::ESCAPE);
    assert_eq!(KeySym::ESCAPE.name(), Some("Escape"));
    assert_eq!(KeySym::from_unicode(0x3a9).to_unicode(), 0x3a9);
    assert!(KeySym::from_name("").is_none());
}

#[test]
fn test_key_states_keep_unknown_bits() {
    let state = KeyStates::from_raw(0x8000_0005);
    assert_eq!(state.bits(), 0x8000_0005);
    assert_eq!(state.relevant(), KeyStates::SHIFT | KeyStates::CTRL);
}

#[test]
fn test_modifier_display() {
    assert_eq!(format!("{}", Modifier::Ctrl), "Control");
    assert_eq!(format!("{}", Modifier::Super), "Super");
}

#[test]
fn test_modifier_spellings() {
    for modifier in Modifier::CANONICAL_ORDER {
        let hotkey = Hotkey::parse(&format!("{}a", modifier.prefix()));
        assert_eq!(hotkey.state, modifier.state());

        let hotkey = Hotkey::parse(&format!("{}a", modifier.legacy_prefix()));
        assert_eq!(hotkey.state, modifier.state());
    }
}

#[test]
fn test_key_eq_ignores_lock_bits_and_tag() {
    let a = Hotkey::builtin(KeySym::KEY_A, KeyStates::CTRL);
    let b = Hotkey::new(KeySym::KEY_A, KeyStates::CTRL | KeyStates::SCROLL_LOCK);
    assert!(a.key_eq(&b));
    assert_ne!(a, b);
    assert!(a.is_builtin());
    assert!(!b.is_builtin());
}

#[test]
fn test_modifiers_in_canonical_order() {
    let hotkey = Hotkey::parse("Super+Shift+Control+x");
    let mods = hotkey.modifiers().collect::<Vec<_>>();
    assert_eq!(mods, vec![Modifier::Ctrl, Modifier::Shift, Modifier::Super]);
}

#[test]
fn test_from_str_is_strict() {
    assert!("Control+a".parse::<Hotkey>().is_ok());
    assert!("Control+nothing".parse::<Hotkey>().is_err());
}

#[test]
fn test_hotkey_serde_uses_canonical_string() {
    let hotkey = Hotkey::parse("ALT_CTRL_Tab");
    let json = serde_json::to_string(&hotkey).unwrap();
    assert_eq!(json, "\"Control+Alt+Tab\"");

    let back: Hotkey = serde_json::from_str(&json).unwrap();
    assert_eq!(back, hotkey);

    assert!(serde_json::from_str::<Hotkey>("\"Control+nothing\"").is_err());
    assert!(serde_json::to_string(&Hotkey::default()).is_err());
}

#[test]
fn test_hotkey_list_serde() {
    let list = crate::core::HotkeyList::parse("F1 SHIFT_F2");
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "\"F1 Shift+F2\"");

    let back: crate::core::HotkeyList = serde_json::from_str(&json).unwrap();
    assert_eq!(back, list);
}
