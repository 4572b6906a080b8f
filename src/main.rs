use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use shortlink_console::cli::Cli;
use shortlink_console::runtime::lifetime::startup::prepare_startup;
use shortlink_console::runtime::modes::{self, Mode};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let mode = modes::detect_mode(cli.command.as_ref());

    let startup = match prepare_startup(&cli, mode.log_fallback()) {
        Ok(startup) => startup,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".bold().red(), e);
            return ExitCode::FAILURE;
        }
    };
    let config = startup.config.clone();

    // startup 持有日志守卫，在 match 结束后才释放
    let code = match mode {
        #[cfg(feature = "tui")]
        Mode::Tui => match modes::run_tui(config).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{} {:?}", "TUI error:".bold().red(), e);
                ExitCode::FAILURE
            }
        },
        #[cfg(feature = "cli")]
        Mode::Cli => {
            let Some(command) = cli.command else {
                return ExitCode::FAILURE;
            };
            match modes::run_cli(command, config).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("{}", e.format_colored());
                    ExitCode::FAILURE
                }
            }
        }
        Mode::Help => {
            let _ = Cli::command().print_help();
            ExitCode::SUCCESS
        }
    };

    drop(startup);
    code
}
