//! Markdown export implementation.
//!
//! Exports the graph summary in Markdown format for documentation and reporting.

use super::{ExportData, Exporter};
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let summary = &data.summary;

        // Title
        writeln!(writer, "# Graph Report")?;
        writeln!(writer)?;
        writeln!(writer, "**Source:** `{}` ({})", data.source, summary.kind)?;
        writeln!(writer)?;

        // Summary section
        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Metric | Count |")?;
        writeln!(writer, "|--------|-------|")?;
        writeln!(writer, "| Vertices | {} |", summary.vertex_count)?;
        writeln!(writer, "| Edges | {} |", summary.edge_count)?;
        writeln!(writer, "| Edge Records | {} |", summary.edge_record_count)?;
        writeln!(writer, "| Edge Lines | {} |", summary.edge_line_count())?;
        writeln!(writer)?;

        // Adjacency
        writeln!(writer, "## Adjacency")?;
        writeln!(writer)?;
        writeln!(writer, "| Node | Edge Ids | Targets |")?;
        writeln!(writer, "|------|----------|---------|")?;
        for node in &data.nodes {
            let ids: Vec<String> = node
                .edges
                .iter()
                .map(|(id, _)| id.to_string())
                .collect();
            let targets: Vec<String> = node
                .edges
                .iter()
                .map(|(_, record)| record.to_string())
                .collect();
            writeln!(
                writer,
                "| {} | {} | {} |",
                node.label,
                ids.join(", "),
                targets.join(" ")
            )?;
        }
        writeln!(writer)?;

        // Raw edge lines
        if !summary.edge_lines.is_empty() {
            writeln!(writer, "## Edge List")?;
            writeln!(writer)?;
            writeln!(writer, "```")?;
            for line in &summary.edge_lines {
                writeln!(writer, "{}", line)?;
            }
            writeln!(writer, "```")?;
            writeln!(writer)?;
        }

        // Footer
        writeln!(writer, "---")?;
        writeln!(writer, "*Generated by graphsum*")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    fn export_markdown(content: &str) -> String {
        let graph = parse_str(content).unwrap();
        let data = ExportData::new("graph.txt", &graph);
        let mut output = Vec::new();

        MarkdownExporter.export(&data, &mut output).unwrap();

        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_markdown_export_basic() {
        let md_str = export_markdown("D\na,b,c\n(a,b,5)\n(b,c)");

        assert!(md_str.contains("# Graph Report"));
        assert!(md_str.contains("**Source:** `graph.txt` (directed)"));
        assert!(md_str.contains("| Vertices | 3 |"));
        assert!(md_str.contains("| Edges | 3 |"));
        assert!(md_str.contains("| Edge Records | 2 |"));
    }

    #[test]
    fn test_markdown_export_adjacency_table() {
        let md_str = export_markdown("G\na,b\n(a,b,4)");

        assert!(md_str.contains("| a | 0 | (b,4) |"));
        assert!(md_str.contains("| b | 1 | (a,4) |"));
    }

    #[test]
    fn test_markdown_export_edge_list() {
        let md_str = export_markdown("D\na,b\n(a,b)");
        assert!(md_str.contains("## Edge List"));
        assert!(md_str.contains("```\n(a,b)\n```"));

        let md_str = export_markdown("D\na,b");
        assert!(!md_str.contains("## Edge List"));
        assert!(md_str.contains("| a |  |  |"));
    }

    #[test]
    fn test_markdown_export_footer() {
        let md_str = export_markdown("D\na");
        assert!(md_str.ends_with("*Generated by graphsum*\n"));
    }
}
