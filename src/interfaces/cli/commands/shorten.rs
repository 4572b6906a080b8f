//! Shorten URL command

use colored::Colorize;

use crate::client::AppContext;
use crate::forms::ShortenForm;
use crate::interfaces::cli::CliError;
use crate::utils::format_date;

pub async fn shorten_url(ctx: &AppContext, url: String, permanent: bool) -> Result<(), CliError> {
    let session = ctx.provision().await;
    let api = ctx.api();

    let mut form = ShortenForm::new();
    form.url = url;
    form.permanent = permanent;

    let Some(created) = form.submit(&session, api.as_ref()).await? else {
        println!(
            "{} URL shortened (the server returned no details)",
            "✓".bold().green()
        );
        return Ok(());
    };

    println!(
        "{} Shortened: {} -> {}",
        "✓".bold().green(),
        created.short_url.cyan(),
        created.original_url.blue().underline()
    );
    if created.is_permanent {
        println!("  {}", "Permanent, never expires".dimmed());
    } else if let Some(expires_at) = created.expires_at.as_deref() {
        println!(
            "  {} {}",
            "Expires:".dimmed(),
            format_date(Some(expires_at)).yellow()
        );
    }
    Ok(())
}
