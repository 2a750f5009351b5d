//! Map command handler: print every directed edge of the loaded graph.

use std::io::Write;

use anyhow::{Context, Result};

use cityroute_lib::{EdgeListing, Graph};

use crate::output::OutputFormat;
use crate::terminal::ColorPalette;

pub fn handle_map_command<W: Write>(
    graph: &Graph,
    format: OutputFormat,
    palette: &ColorPalette,
    out: &mut W,
) -> Result<()> {
    let listing = EdgeListing::from_graph(graph);
    format
        .write_edge_listing(out, &listing, palette)
        .context("failed to write graph listing")?;
    Ok(())
}
