//! rfc - maintenance tools for an RFC repository.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rfc_tools::cli::{self, Cli, Commands};
use rfc_tools::Error;

fn main() -> Result<(), Error> {
    // Logs go to stderr; stdout carries the report
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("rfc_tools=info".parse().unwrap()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => {
            Cli::command().print_help()?;
            println!();
        }
        Some(Commands::FindUnlinked { format }) => {
            let exit_code = cli::find_unlinked::run(&cli.root, format)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Some(Commands::New { name, category }) => {
            cli::new::run(&cli.root, name, category)?;
        }
    }

    Ok(())
}
