// ============================================================================
// mfinfo-cli/src/terminal.rs
// ============================================================================
//
// TERMINAL OUTPUT: Report surfaces for stdout
//
// Both surfaces buffer rows while the viewer fills them and write everything
// in one go on `finish`, so a report is never printed half-built.
//
// KEY COMPONENTS:
// - TerminalTable: aligned key-value table grouped by section
// - JsonSurface: JSON array of {section, key, value}
// - should_use_color: color detection for stdout/stderr

// ---- External crate imports ----
use mfinfo_core::{ReportRow, ReportSurface};
use owo_colors::OwoColorize;
use supports_color::Stream;
use unicode_width::UnicodeWidthStr;

// ---- Standard library imports ----
use std::io::{self, Write};

/// Indentation of key lines under a section header.
const KEY_INDENT: &str = "  ";

/// Decides whether output on `stream` is colored.
///
/// Off when `--no-color` was given, when `NO_COLOR` is set, or when the
/// stream is not a color-capable terminal.
pub fn should_use_color(no_color_flag: bool, stream: Stream) -> bool {
    if no_color_flag || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    supports_color::on(stream).is_some()
}

/// Key-value table grouped by section.
///
/// ```text
/// File
///   Name          : clip.mp4
///   Size          : 12.30 MiB
///   Format Detail : QuickTime / MOV
///
/// Stream 0 (VIDEO)
///   Codec ID      : h264
/// ```
pub struct TerminalTable<W: Write> {
    out: W,
    color: bool,
    sections: Vec<(String, Vec<(String, String)>)>,
}

impl<W: Write> TerminalTable<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            sections: Vec::new(),
        }
    }

    /// Writes the buffered report and returns the writer.
    pub fn finish(mut self) -> io::Result<W> {
        let key_width = self
            .sections
            .iter()
            .flat_map(|(_, entries)| entries.iter().map(|(key, _)| key.width()))
            .max()
            .unwrap_or(0);

        for (position, (section, entries)) in self.sections.iter().enumerate() {
            if position > 0 {
                writeln!(self.out)?;
            }
            if self.color {
                writeln!(self.out, "{}", section.bold().cyan())?;
            } else {
                writeln!(self.out, "{section}")?;
            }

            for (key, value) in entries {
                let padding = " ".repeat(key_width.saturating_sub(key.width()));
                if self.color {
                    writeln!(
                        self.out,
                        "{KEY_INDENT}{}{padding} : {}",
                        key.bright_white(),
                        value
                    )?;
                } else {
                    writeln!(self.out, "{KEY_INDENT}{key}{padding} : {value}")?;
                }
            }
        }

        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> ReportSurface for TerminalTable<W> {
    fn clear(&mut self) {
        self.sections.clear();
    }

    fn add(&mut self, section: &str, key: &str, value: &str) {
        let entry = (key.to_string(), value.to_string());
        match self.sections.iter_mut().find(|(name, _)| name == section) {
            Some((_, entries)) => entries.push(entry),
            None => self.sections.push((section.to_string(), vec![entry])),
        }
    }
}

/// Report surface that prints a JSON array.
pub struct JsonSurface<W: Write> {
    out: W,
    rows: Vec<ReportRow>,
}

impl<W: Write> JsonSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            rows: Vec::new(),
        }
    }

    /// Writes the buffered rows and returns the writer.
    pub fn finish(mut self) -> io::Result<W> {
        serde_json::to_writer_pretty(&mut self.out, &self.rows)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> ReportSurface for JsonSurface<W> {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn add(&mut self, section: &str, key: &str, value: &str) {
        self.rows.push(ReportRow::new(section, key, value));
    }
}
