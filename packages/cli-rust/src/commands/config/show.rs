//! Config show subcommand
//!
//! Displays current configuration in table or JSON format.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Color, Table};
use herald_core::output::{ColorMode, LineSource, Reporter};
use herald_core::Config;

/// Show current configuration
///
/// Displays all configuration values in a formatted table, followed by the
/// config file location.
pub fn cmd_config_show<W: Write, R: LineSource>(
    config: &Config,
    config_path: &Path,
    json: bool,
    reporter: &mut Reporter<W, R>,
) -> Result<()> {
    if json {
        let output = serde_json::to_string_pretty(config)?;
        reporter.plain(&output, false)?;
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Key", "Value"]);
    if !reporter.colors_enabled() {
        table.force_no_tty();
    }

    table.add_row(vec![
        Cell::new("version"),
        Cell::new(config.version.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("verbose"),
        Cell::new(config.verbose.to_string()),
    ]);
    table.add_row(vec![Cell::new("color"), format_color_mode(config.color)]);

    reporter.plain(&table.to_string(), false)?;
    reporter.plain("", false)?;
    reporter.plain(&format!("Config file: {}", config_path.display()), false)?;

    Ok(())
}

/// Color-code the color mode; "never" is dimmed to read as switched off
fn format_color_mode(mode: ColorMode) -> Cell {
    match mode {
        ColorMode::Always => Cell::new(mode).fg(Color::Green),
        ColorMode::Auto => Cell::new(mode).fg(Color::Cyan),
        ColorMode::Never => Cell::new(mode).fg(Color::DarkGrey),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::output::ScriptedInput;

    fn show(json: bool) -> String {
        let config = Config {
            verbose: true,
            ..Config::default()
        };
        let mut reporter = Reporter::new(Vec::new(), ScriptedInput::new())
            .with_color_mode(ColorMode::Never);
        cmd_config_show(&config, Path::new("/tmp/herald/config.json"), json, &mut reporter)
            .unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn table_lists_every_key_and_the_path() {
        let out = show(false);
        assert!(out.contains("verbose"));
        assert!(out.contains("true"));
        assert!(out.contains("color"));
        assert!(out.contains("always"));
        assert!(out.ends_with("Config file: /tmp/herald/config.json\n"));
    }

    #[test]
    fn json_output_parses_back() {
        let out = show(true);
        let parsed: Config = serde_json::from_str(&out).unwrap();
        assert!(parsed.verbose);
    }
}
