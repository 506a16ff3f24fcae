use crate::core::types::{Hotkey, KeyStates, KeySym};
use crate::core::{ConflictDetector, HotkeyList};

/// Helper to create test hotkeys
fn hotkey(text: &str) -> Hotkey {
    Hotkey::parse(text)
}

#[test]
fn test_no_conflicts_when_empty() {
    let detector = ConflictDetector::new();
    assert_eq!(detector.find_conflicts().len(), 0);
    assert_eq!(detector.total_bindings(), 0);
}

#[test]
fn test_no_conflicts_with_unique_bindings() {
    let mut detector = ConflictDetector::new();

    detector.add_binding("trigger", hotkey("Control+space"));
    detector.add_binding("prev_page", hotkey("minus"));
    detector.add_binding("next_page", hotkey("equal"));

    assert_eq!(detector.find_conflicts().len(), 0);
    assert_eq!(detector.total_bindings(), 3);
}

#[test]
fn test_detects_simple_conflict() {
    let mut detector = ConflictDetector::new();

    detector.add_binding("trigger", hotkey("Control+space"));
    detector.add_binding("switch_preedit", hotkey("Control+space"));

    let conflicts = detector.find_conflicts();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].conflicting_bindings.len(), 2);
    assert_eq!(conflicts[0].hotkey, Hotkey::new(KeySym::SPACE, KeyStates::CTRL));
}

#[test]
fn test_spelling_independence() {
    let mut detector = ConflictDetector::new();

    // CTRL_ and Control+ describe the same hotkey
    detector.add_binding("trigger", hotkey("CTRL_ALT_a"));
    detector.add_binding("remind", hotkey("Alt+Control+a"));

    assert_eq!(detector.find_conflicts().len(), 1);
}

#[test]
fn test_lock_bits_do_not_separate_bindings() {
    let mut detector = ConflictDetector::new();

    detector.add_binding(
        "a",
        Hotkey::new(KeySym::KEY_A, KeyStates::CTRL | KeyStates::CAPS_LOCK),
    );
    detector.add_binding("b", Hotkey::new(KeySym::KEY_A, KeyStates::CTRL));

    assert!(detector.has_conflict(&Hotkey::new(KeySym::KEY_A, KeyStates::CTRL)));
}

#[test]
fn test_same_action_twice_is_not_a_conflict() {
    let mut detector = ConflictDetector::new();

    detector.add_list("trigger", &HotkeyList::parse("Control+space CTRL_space"));

    assert_eq!(detector.total_bindings(), 2);
    assert!(detector.find_conflicts().is_empty());
}

#[test]
fn test_has_conflict_method() {
    let mut detector = ConflictDetector::new();
    let key = hotkey("Shift+Tab");

    detector.add_binding("prev_candidate", key);
    assert!(!detector.has_conflict(&key));

    detector.add_binding("prev_page", key);
    assert!(detector.has_conflict(&key));
}

#[test]
fn test_multiple_conflicts_are_ordered() {
    let mut detector = ConflictDetector::new();

    detector.add_binding("one", hotkey("F2"));
    detector.add_binding("two", hotkey("F2"));
    detector.add_binding("three", hotkey("Alt+a"));
    detector.add_binding("four", hotkey("Alt+a"));
    detector.add_binding("five", hotkey("F3"));

    let conflicts = detector.find_conflicts();
    assert_eq!(conflicts.len(), 2);
    assert_eq!(conflicts[0].hotkey.sym, KeySym::KEY_A);
    assert_eq!(conflicts[1].hotkey.sym, KeySym(0xffbf));
    assert_eq!(detector.total_bindings(), 5);
}
