use super::super::*;
use crate::core::types::{Hotkey, KeyStates, KeySym};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SAMPLE: &str = "\
# Input method hotkeys
; legacy comment style
Version=CTRL_F1

[Hotkey]
TriggerKey=CTRL_space  SHIFT_LSHIFT
PrevPage=minus Bogus Up

[Program]
Remind=Control+space
";

/// Helper: Creates a temporary bindings file for testing.
fn create_test_bindings(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bindings.conf");
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

#[test]
fn test_parse_sections_and_entries() {
    let bindings = BindingsFile::parse(SAMPLE).unwrap();
    assert_eq!(bindings.entries().len(), 4);

    let version = bindings.get("Version").unwrap();
    assert_eq!(version.section, None);
    assert_eq!(version.hotkeys.to_string(), "Control+F1");

    let trigger = bindings.get("Hotkey/TriggerKey").unwrap();
    assert_eq!(trigger.hotkeys.to_string(), "Control+space Shift+Shift_L");
    assert!(trigger.rejected.is_empty());
}

#[test]
fn test_unknown_tokens_are_rejected_not_fatal() {
    let bindings = BindingsFile::parse(SAMPLE).unwrap();

    let prev = bindings.get("Hotkey/PrevPage").unwrap();
    assert_eq!(prev.hotkeys.len(), 2);
    assert_eq!(prev.rejected, vec!["Bogus".to_string()]);

    let rejected = bindings.rejected().collect::<Vec<_>>();
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].1, "Bogus");
}

#[test]
fn test_conflicts_across_sections() {
    let bindings = BindingsFile::parse(SAMPLE).unwrap();
    let conflicts = bindings.conflicts();

    assert_eq!(conflicts.len(), 1);
    assert_eq!(
        conflicts[0].hotkey,
        Hotkey::new(KeySym::SPACE, KeyStates::CTRL)
    );

    let actions = conflicts[0]
        .conflicting_bindings
        .iter()
        .map(|b| b.action.as_str())
        .collect::<Vec<_>>();
    assert_eq!(actions, vec!["Hotkey/TriggerKey", "Program/Remind"]);
}

#[test]
fn test_invalid_line_reports_line_number() {
    let result = BindingsFile::parse("[Hotkey]\nTriggerKey=F1\nthis is not valid\n");
    match result {
        Err(ConfigError::InvalidSyntax { line, .. }) => assert_eq!(line, 3),
        other => panic!("Expected InvalidSyntax, got: {:?}", other),
    }
}

#[test]
fn test_invalid_section_headers() {
    assert!(BindingsFile::parse("[]\n").is_err());
    assert!(BindingsFile::parse("[Hotkey] trailing\n").is_err());
    assert!(BindingsFile::parse("=F1\n").is_err());
}

#[test]
fn test_empty_value_is_an_empty_list() {
    let bindings = BindingsFile::parse("TriggerKey=\n").unwrap();
    assert!(bindings.get("TriggerKey").unwrap().hotkeys.is_empty());
}

#[test]
fn test_canonical_output() {
    let bindings = BindingsFile::parse(SAMPLE).unwrap();
    let expected = "\
Version=Control+F1

[Hotkey]
TriggerKey=Control+space Shift+Shift_L
PrevPage=minus Up

[Program]
Remind=Control+space
";
    assert_eq!(bindings.to_string(), expected);
}

#[test]
fn test_canonical_output_is_stable() {
    let bindings = BindingsFile::parse(SAMPLE).unwrap();
    let once = bindings.to_string();
    let twice = BindingsFile::parse(&once).unwrap().to_string();
    assert_eq!(once, twice);
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nonexistent.conf");

    match BindingsFile::load(&path) {
        Err(ConfigError::NotFound(p)) => assert_eq!(p, path),
        other => panic!("Expected NotFound error, got: {:?}", other),
    }
}

#[test]
fn test_load_and_save_round_trip() {
    let (_temp_dir, path) = create_test_bindings(SAMPLE);

    let bindings = BindingsFile::load(&path).unwrap();
    bindings.save(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(!written.contains("Bogus"), "Rejected tokens are dropped");
    assert!(!written.contains('#'), "Comments are dropped");
    assert!(written.contains("TriggerKey=Control+space Shift+Shift_L"));

    let reloaded = BindingsFile::load(&path).unwrap();
    assert_eq!(reloaded.entries().len(), bindings.entries().len());
    assert!(reloaded.rejected().next().is_none());
}

#[test]
fn test_save_keeps_named_non_latin_keys() {
    let (_temp_dir, path) = create_test_bindings("[Hotkey]\nTrigger=Control+ğ Alt+א\n");

    let bindings = BindingsFile::load(&path).unwrap();
    let trigger = bindings.get("Hotkey/Trigger").unwrap();
    assert_eq!(trigger.hotkeys.len(), 2);
    assert!(bindings.unwritable().next().is_none());

    bindings.save(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "[Hotkey]\nTrigger=Control+gbreve Alt+hebrew_aleph\n"
    );

    let reloaded = BindingsFile::load(&path).unwrap();
    assert_eq!(reloaded.get("Hotkey/Trigger"), Some(trigger));
}

#[test]
fn test_save_refuses_hotkey_without_name() {
    let content = "[Hotkey]\nTrigger=Control+中 F2\n";
    let (_temp_dir, path) = create_test_bindings(content);

    let bindings = BindingsFile::load(&path).unwrap();
    let trigger = bindings.get("Hotkey/Trigger").unwrap();
    assert_eq!(trigger.hotkeys.len(), 2);
    assert!(trigger.rejected.is_empty());

    let unwritable = bindings.unwritable().collect::<Vec<_>>();
    assert_eq!(unwritable.len(), 1);
    assert_eq!(unwritable[0].1.sym, KeySym(0x0100_4e2d));

    match bindings.save(&path) {
        Err(ConfigError::Unwritable { action, sym }) => {
            assert_eq!(action, "Hotkey/Trigger");
            assert_eq!(sym, 0x0100_4e2d);
        }
        other => panic!("Expected Unwritable error, got: {:?}", other),
    }

    // File left untouched
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}

#[test]
fn test_load_expands_home_directory() {
    match BindingsFile::load(Path::new("~/.im-hotkey-test-missing/bindings.conf")) {
        Err(ConfigError::NotFound(p)) => {
            assert!(!p.starts_with("~"), "unexpanded path: {}", p.display());
            assert!(p.ends_with(".im-hotkey-test-missing/bindings.conf"));
        }
        other => panic!("Expected NotFound error, got: {:?}", other),
    }
}
