use clap::Parser;
use colored::Colorize;
use newscheck_core::cli::{self, Cli};
use newscheck_core::exit::NewsCheckExit;
use newscheck_core::logging;

fn main() -> NewsCheckExit {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(NewsCheckExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            NewsCheckExit::Error
        }
    }
}
