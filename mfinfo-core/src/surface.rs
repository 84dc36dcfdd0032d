//! Display surfaces for reports.
//!
//! A surface is anything that can show (section, key, value) rows grouped by
//! section in the order they were added. Surfaces are always passed to the
//! code that fills them; nothing here holds a global handle.

use crate::report::ReportRow;

/// A key-value display that can be cleared and appended to.
pub trait ReportSurface {
    /// Removes everything currently shown.
    fn clear(&mut self);

    /// Appends one row. Rows with the same section are shown together, in
    /// the order the sections first appeared.
    fn add(&mut self, section: &str, key: &str, value: &str);
}

/// Replaces the surface content with `rows`.
pub fn render_report<S>(surface: &mut S, rows: &[ReportRow])
where
    S: ReportSurface + ?Sized,
{
    surface.clear();
    for row in rows {
        surface.add(&row.section, &row.key, &row.value);
    }
}

/// Surface that keeps rows in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    rows: Vec<ReportRow>,
    clears: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// How many times the surface has been cleared.
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Value of the first row matching section and key.
    pub fn value(&self, section: &str, key: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.section == section && row.key == key)
            .map(|row| row.value.as_str())
    }
}

impl ReportSurface for MemorySurface {
    fn clear(&mut self) {
        self.rows.clear();
        self.clears += 1;
    }

    fn add(&mut self, section: &str, key: &str, value: &str) {
        self.rows.push(ReportRow::new(section, key, value));
    }
}
