use std::io::{Stdout, Write};

use domain::error::Result;
use domain::extract::{FlatTagEntry, TagSummary};
use domain::{DomainError, TagEntrySink};

const RULE_WIDTH: usize = 50;

/// Human-readable listing for the terminal
pub struct TextReport<W: Write> {
    out: W,
}

impl TextReport<Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// `Name:` / `Documentation:` blocks separated by a dashed rule
    pub fn write_summaries(&mut self, summaries: &[TagSummary]) -> Result<()> {
        self.render_summaries(summaries).map_err(report_error)
    }

    fn render_entries(&mut self, entries: &[FlatTagEntry]) -> std::io::Result<()> {
        for (index, entry) in entries.iter().enumerate() {
            writeln!(self.out)?;
            writeln!(self.out, "{}. Tag: {}", index + 1, entry.tag)?;
            if entry.documentation.is_empty() {
                writeln!(self.out, "   Documentation: (none)")?;
            } else {
                writeln!(self.out, "   Documentation: {}", entry.documentation)?;
            }
            writeln!(self.out, "   Alarm Configured: {}", entry.alarm)?;
            writeln!(self.out, "   History Enabled: {}", entry.history)?;
        }
        writeln!(self.out, "\n\nTotal tags found: {}", entries.len())?;
        self.out.flush()
    }

    fn render_summaries(&mut self, summaries: &[TagSummary]) -> std::io::Result<()> {
        for summary in summaries {
            writeln!(self.out, "Name: {}", summary.name)?;
            writeln!(self.out, "Documentation: {}", summary.documentation)?;
            writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))?;
        }
        self.out.flush()
    }
}

impl<W: Write> TagEntrySink for TextReport<W> {
    fn write_entries(&mut self, entries: &[FlatTagEntry]) -> Result<()> {
        self.render_entries(entries).map_err(report_error)
    }
}

fn report_error(err: std::io::Error) -> DomainError {
    DomainError::output("stdout", err)
}
