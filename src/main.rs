//! CLI entry point for im-hotkey
//!
//! Inspects hotkey strings, evaluates matches against raw key events,
//! and checks or reformats bindings files.

use clap::{Parser, Subcommand};
use colored::*;
use im_hotkey::config::BindingsFile;
use im_hotkey::core::keysym::{legacy_name_to_symbol, name_to_symbol, primary_name_to_symbol};
use im_hotkey::core::unicode::symbol_to_char;
use im_hotkey::{Hotkey, HotkeyList, KeyStates, KeySym};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "~/.config/im-hotkey/bindings.conf";

#[derive(Parser)]
#[command(name = "im-hotkey")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how hotkey strings are parsed
    Parse {
        /// Hotkey strings, e.g. "Control+space" or "CTRL_ALT_F1"
        #[arg(required = true)]
        hotkeys: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the canonical form of a hotkey list
    Normalize {
        /// Whitespace-separated hotkey list
        list: String,
    },

    /// Resolve a key name to its symbol
    Lookup {
        /// Key name, legacy name or single character
        name: String,
    },

    /// Check whether a raw key event triggers a hotkey list
    Match {
        /// Bound hotkey list
        #[arg(short, long)]
        bound: String,

        /// Event key symbol (hex, e.g. 0x20)
        #[arg(short, long, value_parser = parse_hex)]
        sym: u32,

        /// Event modifier state (hex)
        #[arg(long, default_value = "0", value_parser = parse_hex)]
        state: u32,
    },

    /// Check a bindings file for unknown keys and conflicts
    Check {
        /// Path to bindings file
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
    },

    /// Print or rewrite a bindings file in canonical form
    Format {
        /// Path to bindings file
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,

        /// Rewrite the file in place instead of printing
        #[arg(short, long)]
        write: bool,
    },
}

/// Parse report for one hotkey string
#[derive(Serialize)]
struct HotkeyReport<'a> {
    input: &'a str,
    sym: u32,
    name: Option<&'static str>,
    state: u32,
    modifiers: Vec<String>,
    unicode: Option<char>,
    canonical: Option<String>,
}

impl<'a> HotkeyReport<'a> {
    fn new(input: &'a str) -> Self {
        let hotkey = Hotkey::parse(input);
        Self {
            input,
            sym: hotkey.sym.raw(),
            name: hotkey.sym.name(),
            state: hotkey.state.bits(),
            modifiers: hotkey.modifiers().map(|m| m.to_string()).collect(),
            unicode: symbol_to_char(hotkey.sym),
            canonical: hotkey.to_key_string(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Parse { hotkeys, json } => parse_hotkeys(&hotkeys, json)?,
        Commands::Normalize { list } => println!("{}", HotkeyList::parse(&list)),
        Commands::Lookup { name } => lookup(&name),
        Commands::Match { bound, sym, state } => match_event(&bound, sym, state),
        Commands::Check { config } => check_bindings(&config)?,
        Commands::Format { config, write } => format_bindings(&config, write)?,
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn parse_hex(value: &str) -> Result<u32, String> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);

    u32::from_str_radix(digits, 16).map_err(|e| format!("invalid hex value '{}': {}", value, e))
}

/// Expand tilde in a user-supplied path
fn expand_path(path: &Path) -> anyhow::Result<PathBuf> {
    let expanded = shellexpand::tilde(
        path.to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );

    Ok(PathBuf::from(expanded.as_ref()))
}

/// Show parse results for each hotkey string
fn parse_hotkeys(hotkeys: &[String], json: bool) -> anyhow::Result<()> {
    let reports = hotkeys
        .iter()
        .map(|h| HotkeyReport::new(h))
        .collect::<Vec<_>>();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in reports {
        println!("{}", report.input.bold());

        if report.sym == KeySym::NONE.raw() {
            println!("  {} unknown key\n", "✗".red());
            continue;
        }

        println!(
            "  sym       {:#06x} {}",
            report.sym,
            report.name.unwrap_or("(unnamed)").cyan()
        );
        println!(
            "  state     {:#x} {}",
            report.state,
            report.modifiers.join("+").magenta()
        );
        if let Some(ch) = report.unicode {
            println!("  unicode   U+{:04X} {:?}", ch as u32, ch);
        }
        match &report.canonical {
            Some(canonical) => println!("  canonical {}\n", canonical.green()),
            None => println!("  canonical {}\n", "(not representable)".yellow()),
        }
    }

    Ok(())
}

/// Resolve a key name, showing which table answered
fn lookup(name: &str) {
    let source = if primary_name_to_symbol(name).is_some() {
        "key name"
    } else if legacy_name_to_symbol(name).is_some() {
        "deprecated name"
    } else {
        "character"
    };

    let sym = name_to_symbol(name);
    if sym.is_none() {
        println!("{} '{}' is not a key", "✗".red(), name);
        std::process::exit(1);
    }

    println!(
        "{} {} → {:#06x} ({}, canonical {})",
        "✓".green(),
        name.bold(),
        sym.raw(),
        source,
        sym.to_string().cyan()
    );
}

/// Evaluate a raw key event against a bound list
fn match_event(bound: &str, sym: u32, state: u32) {
    let list = HotkeyList::parse(bound);
    let event = Hotkey::new(KeySym::new(sym), KeyStates::from_raw(state));

    if list.check(&event) {
        println!("{} event matches {}", "✓".green(), list.to_string().cyan());
    } else {
        println!("{} event does not match {}", "✗".red(), list.to_string().cyan());
        std::process::exit(1);
    }
}

/// Report unknown keys and conflicts in a bindings file
fn check_bindings(config_path: &Path) -> anyhow::Result<()> {
    let path = expand_path(config_path)?;

    println!("{} Parsing bindings: {}", "→".cyan(), path.display());

    let bindings = BindingsFile::load(&path)?;

    println!("{} Found {} bindings\n", "✓".green(), bindings.entries().len());

    let rejected = bindings.rejected().collect::<Vec<_>>();
    for (entry, token) in &rejected {
        println!(
            "{} {}: unknown key in '{}'",
            "✗".red().bold(),
            entry.action().yellow(),
            token
        );
    }

    let unwritable = bindings.unwritable().collect::<Vec<_>>();
    for (entry, hotkey) in &unwritable {
        println!(
            "{} {}: key {:#x} has no name and cannot be written back",
            "✗".red().bold(),
            entry.action().yellow(),
            hotkey.sym
        );
    }

    let conflicts = bindings.conflicts();
    for (i, conflict) in conflicts.iter().enumerate() {
        let hotkey = conflict
            .hotkey
            .to_key_string()
            .unwrap_or_else(|| format!("{:#x}", conflict.hotkey.sym));

        println!(
            "{} {}",
            format!("Conflict {}", i + 1).yellow().bold(),
            hotkey.cyan()
        );

        for (idx, binding) in conflict.conflicting_bindings.iter().enumerate() {
            println!("  {} {}", format!("{}.", idx + 1).dimmed(), binding.action);
        }
    }

    if rejected.is_empty() && unwritable.is_empty() && conflicts.is_empty() {
        println!("{} {}", "✓".green().bold(), "No problems detected!".bold());
        return Ok(());
    }

    println!(
        "\n{} {} unknown key{}, {} unwritable, {} conflict{}",
        "⚠".yellow(),
        rejected.len(),
        if rejected.len() == 1 { "" } else { "s" },
        unwritable.len(),
        conflicts.len(),
        if conflicts.len() == 1 { "" } else { "s" }
    );
    std::process::exit(1);
}

/// Print or atomically rewrite a bindings file in canonical form
fn format_bindings(config_path: &Path, write: bool) -> anyhow::Result<()> {
    let path = expand_path(config_path)?;
    let bindings = BindingsFile::load(&path)?;

    if write {
        bindings.save(&path)?;
        println!("{} Rewrote {}", "✓".green(), path.display());
    } else {
        for (entry, hotkey) in bindings.unwritable() {
            eprintln!(
                "{} {}: key {:#x} has no name and is omitted",
                "⚠".yellow(),
                entry.action().yellow(),
                hotkey.sym
            );
        }
        print!("{}", bindings);
    }

    Ok(())
}
