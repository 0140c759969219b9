use colored::Colorize;
use tracing_subscriber::EnvFilter;

use astgen::cli::CommandLineInterface;
use astgen::error::ExitCode;

fn main() {
    let command_line_interface = CommandLineInterface::load();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(command_line_interface.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match command_line_interface.run() {
        Ok(paths) => {
            for path in paths {
                tracing::debug!(path = %path.display(), "generated");
            }
        }
        Err(error) => {
            eprintln!("{} {error:#}", "error:".red().bold());
            let code = error
                .downcast_ref::<astgen::Error>()
                .map(astgen::Error::exit_code)
                .unwrap_or(ExitCode::GeneralError);
            std::process::exit(code as i32);
        }
    }
}
