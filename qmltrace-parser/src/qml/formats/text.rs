//! Indented text rendering
//!
//! ```text
//! + UiImport
//!   "import"
//!   + UiQualifiedId
//!     "QtQuick"
//!   - UiQualifiedId
//!   "2.0"
//! - UiImport
//! ```
//!
//! Literal text is printed between double quotes exactly as it appears in the source,
//! without escaping.

use std::io::Write;

use super::registry::{FormatError, Formatter};
use crate::qml::trace::TraceRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFormatter {
    indent_width: usize,
}

impl TextFormatter {
    pub const DEFAULT_INDENT_WIDTH: usize = 2;

    pub fn new(indent_width: usize) -> Self {
        Self { indent_width }
    }

    fn write_record(&self, record: &TraceRecord<'_>, out: &mut dyn Write) -> std::io::Result<()> {
        let indent = self.indent_width * record.depth();
        write!(out, "{:indent$}", "")?;
        match *record {
            TraceRecord::Enter { kind, .. } => writeln!(out, "+ {kind}"),
            TraceRecord::Exit { kind, .. } => writeln!(out, "- {kind}"),
            TraceRecord::Literal { text, .. } => writeln!(out, "\"{text}\""),
            TraceRecord::Separator { text, .. } => writeln!(out, "{text}"),
            TraceRecord::Truncated { kind, .. } => {
                writeln!(out, "! {kind} (depth limit reached)")
            }
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INDENT_WIDTH)
    }
}

impl Formatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn write_to<'a>(
        &self,
        records: &mut dyn Iterator<Item = TraceRecord<'a>>,
        out: &mut dyn Write,
    ) -> Result<(), FormatError> {
        for record in records {
            self.write_record(&record, out)?;
        }
        Ok(())
    }

    fn description(&self) -> &str {
        "Indented trace with +/- node markers and quoted source tokens"
    }
}

/// Renders records with the default indentation
pub fn render_text<'a>(records: impl IntoIterator<Item = TraceRecord<'a>>) -> String {
    let mut buffer = Vec::new();
    for record in records {
        // Writing into a Vec cannot fail
        let _ = TextFormatter::default().write_record(&record, &mut buffer);
    }
    String::from_utf8_lossy(&buffer).into_owned()
}
