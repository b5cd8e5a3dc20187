// src/bin/cli.rs
use betslip_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    match cli::parse_args(std::env::args().skip(1))? {
        cli::Command::Help => {
            println!("{}", cli::HELP);
        }
        cli::Command::Run(opts) => {
            log::init(opts.verbose);
            cli::run(&opts)?;
        }
    }
    Ok(())
}
