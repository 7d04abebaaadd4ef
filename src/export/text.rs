//! Plain-text export implementation.
//!
//! Prints the classic graph report: vertex count, the `# Edges` figure,
//! then every raw edge line under an `Edge List` heading.

use super::{ExportData, Exporter};
use std::io::{self, Write};

/// Plain-text exporter implementation.
pub struct TextExporter;

impl Exporter for TextExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let summary = &data.summary;

        writeln!(writer, "# Vertices: {}", summary.vertex_count)?;
        writeln!(writer, "# Edges: {}", summary.edge_count)?;
        writeln!(writer, "Edge List")?;
        for line in &summary.edge_lines {
            writeln!(writer, "{}", line)?;
        }

        Ok(())
    }
}
