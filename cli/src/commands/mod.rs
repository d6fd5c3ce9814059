mod catalog;
mod select;

use crate::argparse::Commands;
pub use catalog::{handle_catalog_command, handle_suggest_command};
use explorer_common::ExplorerConfig;
pub use select::{handle_frame_command, handle_select_command};

pub fn handle_command(command: Commands, config: &ExplorerConfig) -> anyhow::Result<()> {
    match command {
        Commands::Catalog(args) => handle_catalog_command(args),
        Commands::Suggest(args) => handle_suggest_command(args, config),
        Commands::Select(args) => handle_select_command(args, config),
        Commands::Frame(args) => handle_frame_command(args, config),
    }
}
