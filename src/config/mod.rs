//! Bindings file loading and saving.
//!
//! A bindings file stores hotkeys in their string form, one action per
//! line, grouped in optional sections:
//!
//! ```text
//! # Input method hotkeys
//! [Hotkey]
//! TriggerKey=Control+space SHIFT_Shift_L
//! PrevPage=minus Up
//! ```
//!
//! Values are parsed leniently: tokens naming unknown keys are kept aside
//! in [`BindingEntry::rejected`] instead of failing the whole file, so a
//! single typo does not lose the remaining bindings.
//!
//! Saving writes the canonical form atomically (temp file + rename), so
//! the file is never left partially written.
//!
//! # Example
//!
//! ```no_run
//! use im_hotkey::config::BindingsFile;
//! use std::path::Path;
//!
//! let bindings = BindingsFile::load(Path::new("/tmp/bindings.conf"))?;
//! for conflict in bindings.conflicts() {
//!     println!("{:?}", conflict.hotkey);
//! }
//! bindings.save(Path::new("/tmp/bindings.conf"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;

pub use error::ConfigError;

use atomic_write_file::AtomicWriteFile;
use nom::{
    bytes::complete::{take_till, take_until},
    character::complete::char,
    combinator::rest,
    sequence::{delimited, separated_pair},
    IResult, Parser,
};
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::core::conflict::{Conflict, ConflictDetector};
use crate::core::list::HotkeyList;
use crate::core::parser::{parse_hotkey, split_hotkey_list};
use crate::core::types::Hotkey;

/// One `Key=Value` line of a bindings file
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BindingEntry {
    /// Section the entry appeared under, if any
    pub section: Option<String>,

    /// Entry key, e.g. "TriggerKey"
    pub key: String,

    /// Hotkeys that parsed successfully, in file order
    pub hotkeys: HotkeyList,

    /// Tokens whose key name did not resolve
    pub rejected: Vec<String>,
}

impl BindingEntry {
    /// Action name: `Section/Key`, or just `Key` outside any section
    pub fn action(&self) -> String {
        match &self.section {
            Some(section) => format!("{}/{}", section, self.key),
            None => self.key.clone(),
        }
    }
}

/// Parsed bindings file
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BindingsFile {
    entries: Vec<BindingEntry>,
}

enum Line<'a> {
    Blank,
    Section(&'a str),
    Entry(&'a str, &'a str),
}

impl BindingsFile {
    /// Loads and parses a bindings file.
    ///
    /// A leading `~` in `path` is expanded to the home directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist,
    /// `ConfigError::InvalidSyntax` for a malformed line.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let path = expand_tilde(path);
        if !path.exists() {
            return Err(ConfigError::NotFound(path.into_owned()));
        }

        let content = fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    /// Parses bindings file content.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut entries = Vec::new();
        let mut section: Option<String> = None;

        for (line_num, line) in content.lines().enumerate() {
            let line_num = line_num + 1; // Human-readable numbers start at 1

            match classify_line(line.trim(), line_num)? {
                Line::Blank => {}
                Line::Section(name) => section = Some(name.to_string()),
                Line::Entry(key, value) => {
                    let entry = parse_entry(section.clone(), key, value);
                    for token in &entry.rejected {
                        warn!(
                            line = line_num,
                            action = %entry.action(),
                            token = %token,
                            "skipping hotkey with unknown key"
                        );
                    }
                    entries.push(entry);
                }
            }
        }

        Ok(Self { entries })
    }

    /// Atomically writes the canonical form of the bindings to `path`.
    ///
    /// Rejected tokens and comments are not written back. A leading `~`
    /// in `path` is expanded to the home directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Unwritable` without touching the file if any
    /// hotkey has no text form, since writing would drop it.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some((entry, hotkey)) = self.unwritable().next() {
            return Err(ConfigError::Unwritable {
                action: entry.action(),
                sym: hotkey.sym.raw(),
            });
        }

        let path = expand_tilde(path);
        let mut file = AtomicWriteFile::options().open(&path).map_err(|e| {
            ConfigError::WriteFailed(format!("Failed to open for atomic write: {}", e))
        })?;

        file.write_all(self.to_string().as_bytes())
            .map_err(|e| ConfigError::WriteFailed(format!("Failed to write content: {}", e)))?;

        file.commit().map_err(|e| {
            ConfigError::WriteFailed(format!("Failed to commit atomic write: {}", e))
        })?;

        Ok(())
    }

    pub fn entries(&self) -> &[BindingEntry] {
        &self.entries
    }

    /// Finds an entry by action name (`Section/Key` or `Key`).
    pub fn get(&self, action: &str) -> Option<&BindingEntry> {
        self.entries.iter().find(|e| e.action() == action)
    }

    /// Every `(entry, token)` pair whose token did not resolve.
    pub fn rejected(&self) -> impl Iterator<Item = (&BindingEntry, &str)> + '_ {
        self.entries
            .iter()
            .flat_map(|e| e.rejected.iter().map(move |t| (e, t.as_str())))
    }

    /// Every `(entry, hotkey)` pair that parsed but has no text form.
    pub fn unwritable(&self) -> impl Iterator<Item = (&BindingEntry, &Hotkey)> + '_ {
        self.entries.iter().flat_map(|e| {
            e.hotkeys
                .iter()
                .filter(|h| h.to_key_string().is_none())
                .map(move |h| (e, h))
        })
    }

    /// Hotkeys bound to more than one action.
    pub fn conflicts(&self) -> Vec<Conflict> {
        let mut detector = ConflictDetector::new();
        for entry in &self.entries {
            detector.add_list(&entry.action(), &entry.hotkeys);
        }
        detector.find_conflicts()
    }
}

/// Canonical file form: entries outside any section first, then each
/// section in order of first appearance.
impl fmt::Display for BindingsFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sections: Vec<Option<&str>> = vec![None];
        for entry in &self.entries {
            let section = entry.section.as_deref();
            if !sections.contains(&section) {
                sections.push(section);
            }
        }

        let mut first = true;
        for section in sections {
            let entries = self
                .entries
                .iter()
                .filter(|e| e.section.as_deref() == section)
                .collect::<Vec<_>>();

            if let Some(name) = section {
                if !first {
                    writeln!(f)?;
                }
                writeln!(f, "[{}]", name)?;
            } else if entries.is_empty() {
                continue;
            }

            for entry in entries {
                writeln!(f, "{}={}", entry.key, entry.hotkeys)?;
            }
            first = false;
        }

        Ok(())
    }
}

fn classify_line(line: &str, line_num: usize) -> Result<Line<'_>, ConfigError> {
    if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
        return Ok(Line::Blank);
    }

    if let Ok((remaining, name)) = section_header(line) {
        let name = name.trim();
        if !remaining.trim().is_empty() || name.is_empty() {
            return Err(ConfigError::InvalidSyntax {
                line: line_num,
                message: format!("invalid section header '{}'", line),
            });
        }
        return Ok(Line::Section(name));
    }

    if let Ok((_, (key, value))) = key_value(line) {
        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::InvalidSyntax {
                line: line_num,
                message: "entry has no key".to_string(),
            });
        }
        return Ok(Line::Entry(key, value.trim()));
    }

    Err(ConfigError::InvalidSyntax {
        line: line_num,
        message: format!("expected `Key=Value` or `[Section]`, found '{}'", line),
    })
}

/// Parse `[Section]`
fn section_header(input: &str) -> IResult<&str, &str> {
    delimited(char('['), take_until("]"), char(']')).parse(input)
}

/// Parse `Key=Value`
fn key_value(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(take_till(|c: char| c == '='), char('='), rest).parse(input)
}

fn parse_entry(section: Option<String>, key: &str, value: &str) -> BindingEntry {
    let mut hotkeys = HotkeyList::new();
    let mut rejected = Vec::new();

    for token in split_hotkey_list(value) {
        let hotkey = parse_hotkey(token);
        if hotkey.sym.is_none() {
            rejected.push(token.to_string());
        } else {
            hotkeys.append(hotkey);
        }
    }

    BindingEntry {
        section,
        key: key.to_string(),
        hotkeys,
        rejected,
    }
}

/// Expand a leading `~`; non-UTF-8 paths are used as given
fn expand_tilde(path: &Path) -> Cow<'_, Path> {
    match path.to_str() {
        Some(text) => match shellexpand::tilde(text) {
            Cow::Borrowed(_) => Cow::Borrowed(path),
            Cow::Owned(expanded) => Cow::Owned(PathBuf::from(expanded)),
        },
        None => Cow::Borrowed(path),
    }
}

#[cfg(test)]
mod tests;
