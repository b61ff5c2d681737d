//! `skatekit config`: inspect configuration values and create the file.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::info;

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `config_file` is the `--config` path, if any.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<&PathBuf>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.json(&value)?;
            if output.format() != OutputFormat::Json {
                println!("{}", display_value(&value));
            }
        }

        ConfigCommands::List => {
            output.json(&config)?;
            if output.format() != OutputFormat::Json {
                print!("{}", to_toml(&config)?);
            }
        }

        ConfigCommands::Path => {
            println!("{}", AppConfig::active_path(config_file).display());
        }

        ConfigCommands::Init { force } => {
            let path = AppConfig::active_path(config_file);
            init_config_file(&path, force)?;
            info!(path = %path.display(), "Configuration file written");
            output.success(&format!("Wrote {}", path.display()))?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `install.package_manager`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<Value> {
    let root = serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    key.split('.')
        .try_fold(&root, |node, part| node.get(part))
        .cloned()
        .ok_or_else(|| CliError::UnknownConfigKey { key: key.into() })
}

/// Strings without quotes, unset values as an empty line.
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn to_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Write the default configuration to `path`.
fn init_config_file(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::ConfigExists {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("creating {}", parent.display()))?;
    }

    let contents = to_toml(&AppConfig::default())?;
    std::fs::write(path, contents).with_cli_context(|| format!("writing {}", path.display()))
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        let value = get_config_value(&cfg, "install.package_manager").unwrap();
        assert_eq!(display_value(&value), "yarn");
    }

    #[test]
    fn unset_key_prints_empty() {
        let cfg = AppConfig::default();
        let value = get_config_value(&cfg, "defaults.author_email").unwrap();
        assert_eq!(display_value(&value), "");
    }

    #[test]
    fn whole_section_is_a_value() {
        let cfg = AppConfig::default();
        let value = get_config_value(&cfg, "output").unwrap();
        assert_eq!(value["format"], "auto");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::UnknownConfigKey { .. })
        ));
    }

    #[test]
    fn init_writes_loadable_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        init_config_file(&path, false).unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.install.package_manager, "yarn");
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(matches!(
            init_config_file(&path, false),
            Err(CliError::ConfigExists { .. })
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        init_config_file(&path, true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("[install]"));
    }
}
