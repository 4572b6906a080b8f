//! List URLs command

use colored::Colorize;

use crate::cli::ListArgs;
use crate::client::{AppContext, UrlScope};
use crate::config::StaticConfig;
use crate::interfaces::cli::CliError;
use crate::listing::{FetchOutcome, ListQuery, ListViewModel};
use crate::models::SortSpec;
use crate::presentation::{
    EMPTY_DETAIL, EMPTY_TITLE, PaginationView, SortControls, UrlRow, UrlStatus,
};

/// Build the query from flags, falling back to the configured defaults
fn query_from_args(args: &ListArgs, config: &StaticConfig) -> Result<ListQuery, CliError> {
    let defaults = config.ui.sort()?;
    let per_page = match args.per_page {
        Some(p) => p,
        None => config.ui.per_page()?,
    };
    let sort = SortSpec::new(
        args.sort_by.unwrap_or(defaults.sort_by),
        args.order.unwrap_or(defaults.order),
    );
    Ok(ListQuery::new(per_page, sort).with_page(args.page))
}

pub async fn list_urls(
    ctx: &AppContext,
    config: &StaticConfig,
    args: ListArgs,
) -> Result<(), CliError> {
    let scope = args.scope(config.ui.scope()?);
    let query = query_from_args(&args, config)?;
    let session = ctx.provision().await;

    let view = ListViewModel::new(ctx.api(), session, scope, query);
    if view.refresh().await == FetchOutcome::Skipped {
        return Err(CliError::CommandError(
            "Not logged in. Run 'shortlink-console login' first, or pass --all".to_string(),
        ));
    }

    let snapshot = view.snapshot();
    if let Some(err) = snapshot.error {
        return Err(err.into());
    }
    let Some(data) = snapshot.data else {
        return Ok(());
    };

    if args.json {
        let body = serde_json::to_string_pretty(&data)
            .map_err(|e| CliError::CommandError(format!("Failed to encode JSON: {}", e)))?;
        println!("{}", body);
        return Ok(());
    }

    if data.urls.is_empty() {
        println!("{} {}", "ℹ".bold().blue(), EMPTY_TITLE);
        println!("  {}", EMPTY_DETAIL.dimmed());
        return Ok(());
    }

    let title = match scope {
        UrlScope::All => "All URLs:",
        UrlScope::Mine => "My URLs:",
    };
    println!("{}", title.bold().green());
    println!();

    let base = config.short_url_base();
    for record in &data.urls {
        let row = UrlRow::from_record(record, base);
        let status = match row.status {
            UrlStatus::Expired => row.status.label().red().to_string(),
            UrlStatus::Permanent => row.status.label().magenta().to_string(),
            UrlStatus::Active => row.status.label().green().to_string(),
        };

        let mut info_parts = vec![
            format!(
                "{} -> {}",
                row.short_code.cyan(),
                row.display_url.blue().underline()
            ),
            format!("[{}]", status),
            format!("({})", row.clicks_cell()).dimmed().cyan().to_string(),
        ];
        if let Some(owner) = &row.owner {
            info_parts.push(format!("@{}", owner).dimmed().to_string());
        }
        println!("  {}", info_parts.join(" "));
        println!("    {}", row.dates_cell().dimmed());
    }

    let pagination = PaginationView::from_page_info(&data.pagination);
    let pages: Vec<String> = pagination
        .pages
        .iter()
        .map(|p| {
            if pagination.is_current(*p) {
                format!("[{}]", p).bold().to_string()
            } else {
                p.to_string()
            }
        })
        .collect();

    println!();
    println!("{} {}", "ℹ".bold().blue(), pagination.summary());
    println!("  {} {}", "Pages:".dimmed(), pages.join(" "));
    println!(
        "  {}",
        SortControls::from_query(&snapshot.query).summary().dimmed()
    );
    Ok(())
}
