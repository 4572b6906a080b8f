//! Config commands: generate a sample file, print the effective config

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use crate::config::StaticConfig;
use crate::interfaces::cli::CliError;

/// Default output of `config generate`
pub const SAMPLE_CONFIG_FILE: &str = "shortlink-console.example.toml";

/// Generate example configuration file
pub async fn config_generate(output_path: Option<String>, force: bool) -> Result<(), CliError> {
    let path = output_path.unwrap_or_else(|| SAMPLE_CONFIG_FILE.to_string());

    // 文件已存在且未指定 --force 时先确认
    if !force && Path::new(&path).exists() {
        print!(
            "{} {} {}",
            "File already exists:".yellow(),
            path.blue(),
            "Overwrite? [y/N] ".yellow()
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("{}", "Aborted.".red());
            return Ok(());
        }
    }

    println!(
        "{} {}",
        "Generating configuration file...".yellow(),
        path.blue()
    );

    match StaticConfig::save_sample_to_file(&path) {
        Ok(()) => {
            println!(
                "  {} {}",
                "Configuration file generated successfully".green(),
                path.blue()
            );
            println!(
                "  {}",
                "Rename it to shortlink-console.toml or pass it with -c".dimmed()
            );
            Ok(())
        }
        Err(e) => {
            println!(
                "  {} {}",
                "Failed to generate configuration file".red(),
                e.to_string().red()
            );
            Err(CliError::CommandError(format!(
                "Unable to write configuration file: {}",
                e
            )))
        }
    }
}

/// Print the configuration after file and environment overrides
pub fn config_show(config: &StaticConfig) -> Result<(), CliError> {
    let body = toml::to_string_pretty(config)
        .map_err(|e| CliError::CommandError(format!("Failed to encode config: {}", e)))?;
    println!("{}", "Effective configuration:".bold().green());
    println!();
    println!("{}", body);
    Ok(())
}
