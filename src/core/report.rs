use crate::config::OutputFormat;
use crate::domain::model::StatusReport;
use crate::utils::error::Result;
use std::io::Write;

pub fn render<W: Write>(report: &StatusReport, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(report, out),
        OutputFormat::Json => render_json(report, out),
    }
}

pub fn render_text<W: Write>(report: &StatusReport, out: &mut W) -> Result<()> {
    if report.matches.is_empty() {
        writeln!(
            out,
            "No matching numbers found with status '{}'.",
            report.target_status
        )?;
        return Ok(());
    }

    writeln!(out, "Found numbers with status '{}':", report.target_status)?;
    for item in &report.matches {
        writeln!(out, "{} - {} ({})", item.number, item.name, item.status)?;
    }
    Ok(())
}

pub fn render_json<W: Write>(report: &StatusReport, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &report.matches)?;
    writeln!(out)?;
    Ok(())
}
