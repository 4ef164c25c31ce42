//! Entry point for the memory viewer launcher.
use std::process::ExitCode;

use clap::Parser;
use memviewer_launcher::{
    cli::{execute_cli_command, CliCommand, LaunchArgs, ParsedCommand},
    launcher::{self, RuntimeExit},
    lib::telemetry,
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = LaunchArgs::parse();
    let command = args.into_command().map_err(RuntimeExit::from_error)?;

    match command {
        ParsedCommand::Launch(profile) => launcher::launch(profile).await,
        ParsedCommand::Cli(command) => handle_cli_command(command),
    }
}

fn handle_cli_command(command: CliCommand) -> Result<(), RuntimeExit> {
    let message = execute_cli_command(command).map_err(RuntimeExit::from_error)?;
    println!("{message}");
    Ok(())
}
