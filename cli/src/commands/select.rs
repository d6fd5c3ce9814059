use crate::argparse::{FrameArgs, SelectArgs};
use anyhow::Context;
use country_explorer::explorer_from_files;
use country_explorer::surface::TerminalSurface;
use explorer_common::{closest_name, ExplorerConfig, ExplorerError, MapSurface};

pub fn handle_select_command(args: SelectArgs, config: &ExplorerConfig) -> anyhow::Result<()> {
    let mut explorer = explorer_from_files(config, &args.shapes, args.content.as_deref())?;

    let result = match (&args.name, &args.id) {
        (_, Some(id)) => explorer.select_by_identifier(id, 0),
        (Some(name), None) => explorer.select_by_name(name, 0),
        (None, None) => anyhow::bail!("Either --name or --id is required"),
    };
    let term = args.id.as_deref().or(args.name.as_deref()).unwrap_or_default();
    let mut effects = result.map_err(|e| miss(e, term, &explorer))?;
    // Timers fire in due order once the selection settles.
    effects.extend(explorer.run_due(u64::MAX));

    let mut surface = TerminalSurface::new(explorer.shapes(), args.json);
    surface.apply_all(&effects);
    for line in surface.lines() {
        println!("{}", line);
    }
    Ok(())
}

pub fn handle_frame_command(args: FrameArgs, config: &ExplorerConfig) -> anyhow::Result<()> {
    let mut explorer = explorer_from_files(config, &args.shapes, None)?;
    explorer
        .select_by_name(&args.term, 0)
        .map_err(|e| miss(e, &args.term, &explorer))?;
    let transform = explorer
        .frame_selection()
        .with_context(|| format!("Cannot frame '{}'", args.term))?;
    println!("{}", transform.to_svg_transform());
    println!("{}", serde_json::to_string_pretty(&transform)?);
    Ok(())
}

fn miss(err: ExplorerError, term: &str, explorer: &explorer_common::Explorer) -> anyhow::Error {
    let hint = match (&err, explorer.catalog()) {
        (ExplorerError::NoMatch(_), Some(catalog)) => closest_name(term, catalog)
            .map(|r| format!(". Did you mean '{}'?", r.name))
            .unwrap_or_default(),
        _ => String::new(),
    };
    anyhow::anyhow!("{}{}", err, hint)
}
