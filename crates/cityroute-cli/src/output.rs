//! Output formatting for route and graph rendering.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use cityroute_lib::{EdgeListing, RouteRenderMode, RouteSummary};

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly view with per-hop costs.
    #[default]
    Text,
    /// City names only, one per line.
    Basic,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Write a route summary in this format.
    pub fn write_route<W: Write>(self, out: &mut W, summary: &RouteSummary) -> io::Result<()> {
        match self {
            OutputFormat::Text => out.write_all(
                summary
                    .render_with(RouteRenderMode::PlainText)
                    .as_bytes(),
            ),
            OutputFormat::Basic => {
                out.write_all(summary.render_with(RouteRenderMode::Basic).as_bytes())
            }
            OutputFormat::Json => write_json(out, summary),
        }
    }

    /// Write the graph edge listing in this format.
    pub fn write_edge_listing<W: Write>(
        self,
        out: &mut W,
        listing: &EdgeListing,
        palette: &ColorPalette,
    ) -> io::Result<()> {
        match self {
            OutputFormat::Json => write_json(out, listing),
            OutputFormat::Text | OutputFormat::Basic => {
                writeln!(
                    out,
                    "{}Graph Layout ({} cities, {} directed edges):{}",
                    palette.cyan,
                    listing.cities,
                    listing.entries.len(),
                    palette.reset
                )?;
                out.write_all(listing.render_plain().as_bytes())
            }
        }
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}
