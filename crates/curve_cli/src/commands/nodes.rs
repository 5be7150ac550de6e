//! Nodes command implementation
//!
//! Prints the curve table: one row per anchor with its year fraction,
//! discount factor, zero rate and forward rate from the previous anchor.

use curve_core::market_data::CurveNode;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

use crate::commands::load_discount_curve;
use crate::config::CliConfig;
use crate::output::{fmt_discount, fmt_rate, write_rows, TableRow};
use crate::Result;

impl TableRow for CurveNode {
    fn headers() -> &'static [&'static str] {
        &["date", "time", "discount_factor", "zero_rate", "forward_rate"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.date.to_string(),
            format!("{:.6}", self.time),
            fmt_discount(self.discount_factor),
            fmt_rate(self.zero_rate),
            fmt_rate(self.forward_rate),
        ]
    }
}

/// Run the nodes command
pub fn run(points: &Path, config: &CliConfig) -> Result<()> {
    let stdout = io::stdout();
    execute(points, config, &mut stdout.lock())
}

/// Writes the curve table for the anchors in `points` to `out`.
pub fn execute<W: Write>(points: &Path, config: &CliConfig, out: &mut W) -> Result<()> {
    info!("Tabulating curve nodes from {}", points.display());
    let curve = load_discount_curve(points, config)?;
    let nodes = curve.nodes(config.compounding, config.frequency)?;
    write_rows(out, config.format, &nodes)
}
