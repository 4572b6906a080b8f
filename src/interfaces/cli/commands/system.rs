//! Backend status commands: stats, health

use colored::Colorize;

use crate::client::AppContext;
use crate::interfaces::cli::CliError;
use crate::utils::{format_click_count, format_date, format_relative_date};

/// Public statistics of one short code
pub async fn url_stats(ctx: &AppContext, short_code: &str) -> Result<(), CliError> {
    let code = short_code.trim();
    if code.is_empty() {
        return Err(CliError::InputError("Short code is empty".to_string()));
    }

    let stats = ctx.api().url_stats(code).await?;

    println!("{}", "URL Statistics".bold().green());
    println!("  {}:   {}", "Short code".cyan(), stats.short_code);
    println!(
        "  {}: {}",
        "Original URL".cyan(),
        stats.original_url.blue().underline()
    );
    println!(
        "  {}:       {}",
        "Clicks".cyan(),
        format_click_count(stats.click_count)
    );
    if stats.last_accessed.is_some() {
        println!(
            "  {}:  {}",
            "Last access".cyan(),
            format_relative_date(stats.last_accessed.as_deref())
        );
    }
    println!(
        "  {}:      {}",
        "Created".cyan(),
        format_date(stats.created_at.as_deref()).dimmed()
    );
    if stats.is_permanent {
        println!("  {}:      {}", "Expires".cyan(), "never".green());
    } else if stats.expires_at.is_some() {
        println!(
            "  {}:      {}",
            "Expires".cyan(),
            format_date(stats.expires_at.as_deref()).yellow()
        );
    }
    Ok(())
}

pub async fn health_check(ctx: &AppContext) -> Result<(), CliError> {
    let health = ctx.api().health().await?;
    let status = if health.status.eq_ignore_ascii_case("healthy") {
        health.status.green()
    } else {
        health.status.yellow()
    };

    println!("{}", "Backend Status".bold().green());
    println!("  {}:  {}", "Status".cyan(), status);
    if let Some(service) = &health.service {
        println!("  {}: {}", "Service".cyan(), service);
    }
    Ok(())
}
