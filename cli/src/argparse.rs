use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cexp",
    about = "World map country explorer",
    version,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Explorer settings as a JSON file; missing fields keep their defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Pick which subcommand to use
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every country found in a shape dump
    Catalog(CatalogArgs),
    /// Show the suggestions the search box would offer for a term
    Suggest(SuggestArgs),
    /// Select a country and print every effect the map would apply
    Select(SelectArgs),
    /// Print the viewport transform that frames a country
    Frame(FrameArgs),
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Shape dump (JSON array of shapes)
    #[arg(long)]
    pub shapes: PathBuf,
}

#[derive(Args)]
pub struct SuggestArgs {
    /// Shape dump (JSON array of shapes)
    #[arg(long)]
    pub shapes: PathBuf,

    /// Maximum number of suggestions, defaults to the configured limit
    #[arg(long)]
    pub limit: Option<usize>,

    /// Text typed into the search box
    pub term: String,
}

#[derive(Args)]
pub struct SelectArgs {
    /// Shape dump (JSON array of shapes)
    #[arg(long)]
    pub shapes: PathBuf,

    /// Content dataset with per-country playlists
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Select by country name, as typed into the search box
    #[arg(long, conflicts_with = "id", required_unless_present = "id")]
    pub name: Option<String>,

    /// Select by shape identifier, as a map click would
    #[arg(long)]
    pub id: Option<String>,

    /// Print effects as JSON lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct FrameArgs {
    /// Shape dump (JSON array of shapes)
    #[arg(long)]
    pub shapes: PathBuf,

    /// Country name or search term
    pub term: String,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
