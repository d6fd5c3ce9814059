use crate::argparse::{CatalogArgs, SuggestArgs};
use country_explorer::load_shapes;
use explorer_common::{closest_name, suggest, CountryCatalog, CountryRecord, ExplorerConfig};
use tabular::{Row, Table};

pub fn handle_catalog_command(args: CatalogArgs) -> anyhow::Result<()> {
    let shapes = load_shapes(&args.shapes)?;
    let catalog = CountryCatalog::build(&shapes);
    println!(
        "{} countries in {} shapes:",
        catalog.len(),
        shapes.len()
    );
    print!("{}", records_table(catalog.records()));
    Ok(())
}

pub fn handle_suggest_command(args: SuggestArgs, config: &ExplorerConfig) -> anyhow::Result<()> {
    let catalog = CountryCatalog::build(&load_shapes(&args.shapes)?);
    let limit = args.limit.unwrap_or(config.suggestion_limit);
    let results = suggest(&args.term, &catalog, limit);
    if results.is_empty() {
        match closest_name(&args.term, &catalog) {
            Some(hint) => println!("No suggestions for '{}'. Did you mean '{}'?", args.term, hint.name),
            None => println!("No suggestions for '{}'", args.term),
        }
        return Ok(());
    }
    print!("{}", records_table(&results));
    Ok(())
}

fn records_table(records: &[CountryRecord]) -> Table {
    #[allow(clippy::literal_string_with_formatting_args)]
    let mut table = Table::new("{:<}  {:<}  {:<}")
        .with_row(Row::from_cells(["Name", "Identifier", "Normalized"].iter().cloned()));
    for record in records {
        table.add_row(
            Row::new()
                .with_cell(&record.name)
                .with_cell(&record.identifier)
                .with_cell(&record.normalized_name),
        );
    }
    table
}
