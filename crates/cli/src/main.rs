use std::process::ExitCode;

use clap::Parser;
use collecticons_cli::cli::Cli;
use collecticons_core::Error;
use env_logger::init;

fn main() -> ExitCode {
    init();
    match Cli::parse().command.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // User errors print their detail lines; everything else gets
            // the full error chain.
            match err.downcast_ref::<Error>() {
                Some(Error::User(user)) => {
                    for line in &user.details {
                        eprintln!("{line}");
                    }
                }
                _ => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
