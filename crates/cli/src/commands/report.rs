use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use symaudit_core::model::UNKNOWN_LIBRARY;
use symaudit_core::AuditReport;

/// How the audit result is rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Renders an `AuditReport`; owns every presentation concern.
pub struct Reporter {
    format: ReportFormat,
    use_color: bool,
}

impl Reporter {
    pub fn new(format: ReportFormat, use_color: bool) -> Self {
        Self { format, use_color }
    }

    pub fn write<W: Write>(&self, writer: &mut W, report: &AuditReport) -> Result<()> {
        match self.format {
            ReportFormat::Text => self.write_text(writer, report),
            ReportFormat::Json => {
                writeln!(writer, "{}", report.to_json()?)?;
                Ok(())
            }
        }
    }

    fn write_text<W: Write>(&self, writer: &mut W, report: &AuditReport) -> Result<()> {
        writeln!(writer, "{}", self.heading("Functions found in the binary:"))?;

        // Unattributed imports go last so library groups read first.
        let groups = report.symbols.groups();
        for group in groups.iter().filter(|g| g.library != UNKNOWN_LIBRARY) {
            writeln!(writer, "{}", self.bold(&format!("Functions from {}:", group.library)))?;
            for function in &group.functions {
                writeln!(writer, "    - {function}")?;
            }
        }
        if let Some(unknown) = report.symbols.functions(UNKNOWN_LIBRARY) {
            writeln!(writer, "{}", self.bold("Functions from unknown libraries:"))?;
            for function in unknown {
                writeln!(writer, "    - {function}")?;
            }
        }

        if report.is_clean() {
            writeln!(writer, "{}", self.success("No forbidden functions found."))?;
        } else {
            writeln!(writer, "{}", self.failure("Forbidden functions found:"))?;
            for function in &report.forbidden {
                writeln!(writer, "{}", self.failure_item(&format!("    - {function}")))?;
            }
        }
        Ok(())
    }

    fn heading(&self, text: &str) -> String {
        if self.use_color {
            text.bold().underline().to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.use_color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn success(&self, text: &str) -> String {
        if self.use_color {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn failure(&self, text: &str) -> String {
        if self.use_color {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn failure_item(&self, text: &str) -> String {
        if self.use_color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }
}
