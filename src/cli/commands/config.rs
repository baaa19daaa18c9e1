use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::fs;
use std::process::Command;

fn print_config(cfg: &Config) -> AppResult<()> {
    let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
    println!("📄 Current configuration:\n");
    println!("{yaml}");
    Ok(())
}

fn check_config() -> AppResult<()> {
    let path = Config::config_file();
    if !path.exists() {
        warning(format!(
            "No configuration file at {} (defaults in use). Run `init` to create it.",
            path.display()
        ));
        return Ok(());
    }

    let content = fs::read_to_string(&path)?;
    let missing = Config::missing_fields(&content);

    if missing.is_empty() {
        success("Configuration file is complete.");
    } else {
        warning(format!(
            "Missing fields (defaults will be used): {}",
            missing.join(", ")
        ));
    }
    Ok(())
}

fn edit_config(editor: &Option<String>) {
    let path = Config::config_file();

    // Default editor basato sulla piattaforma
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

    for candidate in [&editor_to_use, &default_editor] {
        match Command::new(candidate).arg(&path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{candidate}'"
                ));
                return;
            }
            _ => warning(format!("Editor '{candidate}' not available")),
        }
    }

    error("Failed to edit configuration file");
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config: print,
        check,
        edit_config: edit,
        editor,
    } = cmd
    {
        if *print {
            print_config(cfg)?;
        }
        if *check {
            check_config()?;
        }
        if *edit {
            edit_config(editor);
        }
    }

    Ok(())
}
