//! JSON Lines rendering: one object per record, tagged by `record`

use std::io::Write;

use super::registry::{FormatError, Formatter};
use crate::qml::trace::TraceRecord;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonlFormatter;

impl Formatter for JsonlFormatter {
    fn name(&self) -> &str {
        "jsonl"
    }

    fn write_to<'a>(
        &self,
        records: &mut dyn Iterator<Item = TraceRecord<'a>>,
        out: &mut dyn Write,
    ) -> Result<(), FormatError> {
        for record in records {
            let line = serde_json::to_string(&record)
                .map_err(|err| FormatError::SerializationError(err.to_string()))?;
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    fn description(&self) -> &str {
        "One JSON object per trace record"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qml::ast::NodeKind;

    #[test]
    fn test_one_object_per_line() {
        let records = vec![
            TraceRecord::Enter {
                kind: NodeKind::StringLiteral,
                depth: 0,
            },
            TraceRecord::Literal {
                text: "'a'",
                offset: 4,
                depth: 1,
            },
            TraceRecord::Exit {
                kind: NodeKind::StringLiteral,
                depth: 0,
            },
        ];
        let output = JsonlFormatter
            .serialize(&mut records.into_iter())
            .unwrap();
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["record"], "enter");
        assert_eq!(lines[0]["kind"], "StringLiteral");
        assert_eq!(lines[1]["text"], "'a'");
        assert_eq!(lines[1]["offset"], 4);
        assert_eq!(lines[2]["depth"], 0);
    }
}
