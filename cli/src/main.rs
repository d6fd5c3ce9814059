mod argparse;
mod commands;
mod utils;

use argparse::parse_args;

fn main() -> anyhow::Result<()> {
    let cli = parse_args();
    utils::init_logger(cli.verbose);

    let config = country_explorer::load_config(cli.config.as_deref())?;

    commands::handle_command(cli.command, &config)
}
