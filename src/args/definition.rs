//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;
use ui_locale::i18n::{I18nConfig, I18nError, Localizer, SettingsFileStore, find_config_file};

/// ui-locale - resolve UI strings for a language with fallback and interpolation
#[derive(Parser, Debug)]
#[command(name = "ui-locale")]
#[command(version)]
#[command(about = "Resolve UI translation keys for a language, with fallback and {{variable}} interpolation", long_about = None)]
pub struct Args {
    /// Translation keys to resolve (e.g. nav.dashboard common.loading)
    pub keys: Vec<String>,

    /// Use this language for this run only (not persisted)
    #[arg(short, long, value_name = "CODE")]
    pub lang: Option<String>,

    /// Switch to this language and remember it for later runs
    #[arg(long, value_name = "CODE")]
    pub set_lang: Option<String>,

    /// List available languages; the active one is marked with '*'
    #[arg(long)]
    pub list: bool,

    /// Interpolation variable for {{NAME}} placeholders (repeatable)
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,

    /// Path to i18n.yml (default: ./config/i18n.yml in a checkout, else ~/.config/ui-locale/i18n.yml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Load {code}.json / {code}.yml bundles from this directory instead of the built-ins
    #[arg(long, value_name = "DIR")]
    pub locales_dir: Option<PathBuf>,

    /// Skip stored-preference and system-locale detection
    #[arg(long)]
    pub no_detect: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Parse a `NAME=VALUE` interpolation variable.
///
/// # Errors
/// - When the argument has no `=` or an empty name
pub fn parse_var(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("variable name is empty in '{raw}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

/// What: Build the effective configuration from the config file and flags.
///
/// # Errors
/// - Config file read or parse errors
pub fn effective_config(args: &Args) -> Result<I18nConfig, I18nError> {
    let config_path = find_config_file(args.config.as_deref());
    let mut config = I18nConfig::load(&config_path)?;
    if let Some(dir) = &args.locales_dir {
        config.locales_dir = Some(dir.clone());
    }
    // An explicit --lang makes detection pointless for this run.
    if args.no_detect || args.lang.is_some() {
        config.detect = false;
    }
    Ok(config)
}

/// What: Run the command described by `args`, printing results to stdout.
///
/// Details:
/// - Order: `--set-lang`, then `--lang`, then `--list`, then each key
/// - Without keys or `--list`, prints the active language
///
/// # Errors
/// - Configuration and resource loading errors
/// - Failure to persist `--set-lang`
pub fn process_args(args: &Args) -> Result<(), I18nError> {
    let config = effective_config(args)?;
    let localizer = Localizer::from_config(&config, SettingsFileStore::default_location())?;

    if let Some(code) = &args.set_lang {
        let applied = localizer.change_language_negotiated(code)?;
        if localizer.persists() {
            tracing::info!(requested = %code, applied = %applied, "language preference saved");
        } else {
            tracing::info!(requested = %code, applied = %applied, "language switched, persistence disabled");
        }
        println!("{}: {applied}", localizer.t("settings.language"));
    }

    if let Some(code) = &args.lang {
        localizer.resolver().change_language(code);
    }

    if args.list {
        crate::args::list::handle_list(localizer.resolver());
    }

    if !args.keys.is_empty() {
        crate::args::lookup::handle_lookup(localizer.resolver(), &args.keys, &args.vars);
    } else if !args.list && args.set_lang.is_none() {
        println!("{}", localizer.active_language());
    }

    Ok(())
}
