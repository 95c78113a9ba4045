//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print a single value
//! - `config set`: Validate and store a value

use owo_colors::OwoColorize;
use serde_json::json;

use crate::config::Config;
use crate::error::Result;

/// Mask a sensitive value by showing only the first 2 and last 2 characters
fn mask_sensitive_value(value: &str) -> String {
    let char_count = value.chars().count();
    if char_count > 4 {
        let first: String = value.chars().take(2).collect();
        let last: String = value.chars().skip(char_count - 2).collect();
        format!("{first}...{last}")
    } else {
        "****".to_string()
    }
}

fn display_value(key: &str, value: &str) -> String {
    if key == "api_token" {
        mask_sensitive_value(value)
    } else {
        value.to_string()
    }
}

/// Show current configuration
pub fn cmd_config_show(output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let token_configured = config.api_token().is_some();

    if output_json {
        let output = json!({
            "api_url": config.api_url(),
            "api_token_configured": token_configured,
            "currency_symbol": config.currency_symbol,
            "remote_timeout": config.remote_timeout,
            "config_file": Config::config_path().to_string_lossy(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Configuration:".cyan().bold());
    println!();
    println!("{}: {}", "api_url".cyan(), config.api_url());

    let token_status = if token_configured {
        "configured".green().to_string()
    } else {
        "not configured".dimmed().to_string()
    };
    println!("{}: {token_status}", "api_token".cyan());
    println!("{}: {}", "currency_symbol".cyan(), config.currency_symbol);
    println!("{}: {}s", "remote_timeout".cyan(), config.remote_timeout);
    println!();
    println!(
        "{}",
        format!("Config file: {}", Config::config_path().display()).dimmed()
    );

    Ok(())
}

/// Print one configuration value
pub fn cmd_config_get(key: &str, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let value = config.get(key)?;

    if output_json {
        let output = json!({
            "key": key,
            "value": value.as_deref().map(|v| display_value(key, v)),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match value {
        Some(v) => println!("{}", display_value(key, &v)),
        None => println!("{}", "not set".dimmed()),
    }
    Ok(())
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, output_json: bool) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    tracing::debug!(key, "config updated");

    if output_json {
        let output = json!({
            "action": "config_set",
            "key": key,
            "value": display_value(key, value.trim()),
            "success": true,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "Set {} to {}",
            key.cyan(),
            display_value(key, value.trim())
        );
    }
    Ok(())
}
