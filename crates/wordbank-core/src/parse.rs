use std::collections::HashMap;

use crate::record::{Dataset, Record};

/// Parse comma-separated vocabulary text into a [`Dataset`].
///
/// Lines are split on `\n`, trimmed, and dropped when empty. The first
/// surviving line is the header; its comma-separated tokens become the field
/// names. Every later line must have exactly as many tokens as the header,
/// otherwise the row is dropped without error. Tokens are trimmed.
///
/// There is no quote handling: a comma inside a value always acts as a
/// separator. That matches the source format this tool consumes, so rows
/// with embedded commas are rejected by the column-count check rather than
/// parsed differently.
pub fn parse(text: &str) -> Dataset {
    let mut lines = text.split('\n').map(str::trim).filter(|l| !l.is_empty());

    let Some(header) = lines.next() else {
        return Dataset::default();
    };

    let fields: Vec<String> = header.split(',').map(|t| t.trim().to_string()).collect();

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for line in lines {
        let values: Vec<&str> = line.split(',').map(str::trim).collect();
        if values.len() != fields.len() {
            dropped += 1;
            continue;
        }

        let map: HashMap<String, String> = fields
            .iter()
            .cloned()
            .zip(values.into_iter().map(str::to_string))
            .collect();
        records.push(Record::new(map));
    }

    if dropped > 0 {
        tracing::debug!("dropped {dropped} rows with mismatched column count");
    }

    Dataset::new(fields, records)
}
