//! Config set subcommand
//!
//! Sets a single configuration value.

use std::io::Write;
use std::path::Path;

use anyhow::{Result, bail};
use herald_core::output::{ColorMode, LineSource, Reporter};
use herald_core::{Config, load_config_from, save_config_to};

/// Set a configuration value and save the config file
pub fn cmd_config_set<W: Write, R: LineSource>(
    config_path: &Path,
    key: &str,
    value: &str,
    reporter: &mut Reporter<W, R>,
) -> Result<()> {
    let mut config = load_config_from(config_path)?;
    let display_value = apply(&mut config, key, value)?;

    save_config_to(config_path, &config)?;
    tracing::debug!(key, value = %display_value, "config value updated");

    reporter.success(&format!("Set {key} = {display_value}"))?;
    Ok(())
}

/// Apply one key/value pair, returning the normalized value
fn apply(config: &mut Config, key: &str, value: &str) -> Result<String> {
    match key.to_lowercase().as_str() {
        "verbose" => {
            let parsed = parse_bool(value).ok_or_else(|| {
                anyhow::anyhow!("Invalid boolean value: {value}. Use: true/false, yes/no, or 1/0")
            })?;
            config.verbose = parsed;
            Ok(parsed.to_string())
        }
        "color" | "colour" => {
            let mode: ColorMode = value.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            config.color = mode;
            Ok(mode.to_string())
        }
        _ => {
            bail!(
                "Unknown configuration key: {key}\n\n\
                Valid keys:\n  \
                  verbose\n  \
                  color"
            );
        }
    }
}

/// Parse boolean from various string representations
fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::output::ScriptedInput;
    use tempfile::TempDir;

    #[test]
    fn test_parse_bool_variants() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("false"), Some(false));
        assert_eq!(parse_bool("No"), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_apply_color_normalizes_value() {
        let mut config = Config::default();
        assert_eq!(apply(&mut config, "Color", "NEVER").unwrap(), "never");
        assert_eq!(config.color, ColorMode::Never);
    }

    #[test]
    fn test_apply_rejects_bad_values() {
        let mut config = Config::default();
        assert!(apply(&mut config, "verbose", "loud").is_err());
        assert!(apply(&mut config, "color", "rainbow").is_err());
        assert!(apply(&mut config, "version", "2").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_set_persists_and_reports() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let mut reporter = Reporter::new(Vec::new(), ScriptedInput::new())
            .with_color_mode(ColorMode::Never);

        cmd_config_set(&path, "verbose", "yes", &mut reporter).unwrap();

        assert!(load_config_from(&path).unwrap().verbose);
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(out, "Set verbose = true\n");
    }
}
