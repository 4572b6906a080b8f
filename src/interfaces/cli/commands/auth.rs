//! Session commands: login, register, logout, status

use colored::Colorize;
use std::io::{self, BufRead, IsTerminal, Write};

use crate::cli::CredentialArgs;
use crate::client::AppContext;
use crate::forms::{LoginForm, RegistrationForm};
use crate::interfaces::cli::CliError;
use crate::session::SessionState;

/// 交互式读取一行输入
fn prompt_line(label: &str) -> Result<String, CliError> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// 交互式读取密码（不回显）
fn prompt_secret(label: &str) -> Result<String, CliError> {
    if !io::stdin().is_terminal() {
        return Err(CliError::InputError(
            "No password provided. Use --password or run interactively.".to_string(),
        ));
    }
    print!("{}: ", label);
    io::stdout().flush()?;
    rpassword::read_password()
        .map_err(|e| CliError::InputError(format!("Failed to read password: {}", e)))
}

fn username_from(args: &CredentialArgs) -> Result<String, CliError> {
    match &args.username {
        Some(u) => Ok(u.clone()),
        None => prompt_line("Username"),
    }
}

pub async fn login(ctx: &AppContext, args: CredentialArgs) -> Result<(), CliError> {
    let session = ctx.provision().await;
    if let Some(current) = session.username() {
        println!(
            "{} Currently logged in as {}",
            "ℹ".bold().blue(),
            current.cyan()
        );
    }

    let mut form = LoginForm::new();
    form.username = username_from(&args)?;
    form.password = match args.password {
        Some(p) => p,
        None => prompt_secret("Password")?,
    };

    form.submit(&session).await?;
    println!(
        "{} Logged in as {}",
        "✓".bold().green(),
        form.username.trim().cyan()
    );
    Ok(())
}

pub async fn register(ctx: &AppContext, args: CredentialArgs) -> Result<(), CliError> {
    let session = ctx.provision().await;

    let mut form = RegistrationForm::new();
    form.username = username_from(&args)?;
    match args.password {
        Some(p) => {
            form.confirm_password = p.clone();
            form.password = p;
        }
        None => {
            form.password = prompt_secret("Password")?;
            form.confirm_password = prompt_secret("Confirm password")?;
        }
    }

    form.submit(&session).await?;
    println!(
        "{} Registered and logged in as {}",
        "✓".bold().green(),
        form.username.trim().cyan()
    );
    Ok(())
}

pub async fn logout(ctx: &AppContext) -> Result<(), CliError> {
    let session = ctx.provision().await;
    if !session.is_authenticated() {
        println!("{} Not logged in", "ℹ".bold().blue());
        return Ok(());
    }
    session.logout().await;
    println!("{} Logged out", "✓".bold().green());
    Ok(())
}

pub async fn session_status(ctx: &AppContext) -> Result<(), CliError> {
    let session = ctx.provision().await;
    match session.state() {
        SessionState::Authenticated { username } => {
            println!("{}", "Session".bold().green());
            println!(
                "  {}: {}",
                "User".cyan(),
                username.as_deref().unwrap_or("(unnamed)")
            );
        }
        other => {
            println!("{} {}", "ℹ".bold().blue(), other.describe());
        }
    }
    Ok(())
}
