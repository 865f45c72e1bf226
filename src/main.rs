use colored::Colorize;
use std::error::Error;
use subnet_calc::cli::{calculate, parse_cli_args, usage_text, version_text, CliCommand};
use subnet_calc::config::{Config, OutputFormat};
use subnet_calc::logging::init_logging;
use subnet_calc::output::{format_json, print_report};

fn run() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    init_logging(&config.log_config)?;
    log::info!("#Start main()");

    match parse_cli_args(std::env::args())? {
        CliCommand::Help => println!("{}", usage_text()),
        CliCommand::Version => println!("{}", version_text()),
        CliCommand::Calculate {
            request,
            netaddr,
            output,
        } => {
            let params = calculate(&request, netaddr)?;
            match output.unwrap_or(config.output) {
                OutputFormat::Text => print_report(&params),
                OutputFormat::Json => println!("{}", format_json(&params)?),
            }
        }
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("{} {e}", "error:".red());
        std::process::exit(1);
    }
}
