use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Conventional column names in the vocabulary format.
pub mod fields {
    /// Headword column.
    pub const WORD: &str = "word";
    /// Lesson grouping key.
    pub const LESSON: &str = "lesson";
    /// Translation columns carry a language suffix, e.g. `trans_cn`.
    pub const TRANS_PREFIX: &str = "trans_";
    pub const IPA: &str = "ipa";
    pub const ETYMOLOGY: &str = "ety";
    pub const EXAMPLE: &str = "sent";
    pub const EXAMPLE_CN: &str = "sent_cn";
    pub const POS: &str = "pos";
    pub const AUDIO: &str = "sound";
}

/// One vocabulary entry: a mapping from field name to field value.
///
/// Every value is free-form text. A field that is not present reads as the
/// empty string, never as a missing-key error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    values: HashMap<String, String>,
}

impl Record {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Value of `field`, or `""` when the field is absent.
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }
}

/// The full ordered collection of records from one load.
///
/// Order follows the source row order. A dataset is immutable once built;
/// a reload replaces it wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    fields: Vec<String>,
    searchable: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(fields: Vec<String>, records: Vec<Record>) -> Self {
        let searchable = fields
            .iter()
            .filter(|f| *f == fields::WORD || f.starts_with(fields::TRANS_PREFIX))
            .cloned()
            .collect();

        Self {
            fields,
            searchable,
            records,
        }
    }

    /// Field names as defined by the header row, in header order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Fields eligible for substring search: the headword column plus every
    /// translation column found in the header.
    pub fn searchable_fields(&self) -> &[String] {
        &self.searchable
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Typed read-only view over one of this dataset's records.
    pub fn entry<'a>(&'a self, record: &'a Record) -> EntryView<'a> {
        EntryView {
            fields: &self.fields,
            record,
        }
    }
}

/// Accessors over the conventional columns of a [`Record`], so callers do
/// not spell field-name strings at every use site.
#[derive(Debug, Clone, Copy)]
pub struct EntryView<'a> {
    fields: &'a [String],
    record: &'a Record,
}

impl<'a> EntryView<'a> {
    pub fn word(&self) -> &'a str {
        self.record.get(fields::WORD)
    }

    pub fn lesson(&self) -> &'a str {
        self.record.get(fields::LESSON)
    }

    /// `(language, text)` pairs for every non-empty translation column, in
    /// header order. The language is the column suffix, e.g. `cn`.
    pub fn translations(&self) -> Vec<(&'a str, &'a str)> {
        self.fields
            .iter()
            .filter_map(|f| {
                let lang = f.strip_prefix(fields::TRANS_PREFIX)?;
                let text = self.record.get(f);
                (!text.is_empty()).then_some((lang, text))
            })
            .collect()
    }

    pub fn ipa(&self) -> Option<&'a str> {
        self.optional(fields::IPA)
    }

    pub fn etymology(&self) -> Option<&'a str> {
        self.optional(fields::ETYMOLOGY)
    }

    pub fn example(&self) -> Option<&'a str> {
        self.optional(fields::EXAMPLE)
    }

    pub fn example_translation(&self) -> Option<&'a str> {
        self.optional(fields::EXAMPLE_CN)
    }

    pub fn part_of_speech(&self) -> Option<&'a str> {
        self.optional(fields::POS)
    }

    /// Locator of the playable audio resource, when the entry has one.
    pub fn audio(&self) -> Option<&'a str> {
        self.optional(fields::AUDIO)
    }

    fn optional(&self, field: &str) -> Option<&'a str> {
        let value = self.record.get(field);
        (!value.is_empty()).then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        Record::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn absent_field_reads_as_empty_string() {
        let rec = record(&[("word", "hello")]);
        assert_eq!(rec.get("word"), "hello");
        assert_eq!(rec.get("trans_cn"), "");
    }

    #[test]
    fn searchable_fields_are_headword_plus_translations() {
        let ds = Dataset::new(
            vec![
                "word".to_string(),
                "lesson".to_string(),
                "trans_cn".to_string(),
                "trans_en".to_string(),
                "ipa".to_string(),
            ],
            vec![],
        );
        assert_eq!(ds.searchable_fields(), ["word", "trans_cn", "trans_en"]);
    }

    #[test]
    fn entry_view_exposes_optional_fields() {
        let fields = vec![
            "word".to_string(),
            "lesson".to_string(),
            "trans_cn".to_string(),
            "trans_en".to_string(),
            "ipa".to_string(),
            "sound".to_string(),
        ];
        let rec = record(&[
            ("word", "สวัสดี"),
            ("lesson", "1"),
            ("trans_cn", "你好"),
            ("trans_en", ""),
            ("ipa", "sa-wat-dii"),
            ("sound", ""),
        ]);
        let ds = Dataset::new(fields, vec![rec]);
        let view = ds.entry(&ds.records()[0]);

        assert_eq!(view.word(), "สวัสดี");
        assert_eq!(view.lesson(), "1");
        assert_eq!(view.translations(), [("cn", "你好")]);
        assert_eq!(view.ipa(), Some("sa-wat-dii"));
        assert_eq!(view.audio(), None);
        assert_eq!(view.etymology(), None);
    }

    #[test]
    fn dataset_serializes_round_trip() {
        let ds = Dataset::new(
            vec!["word".to_string(), "lesson".to_string()],
            vec![record(&[("word", "hello"), ("lesson", "1")])],
        );
        let json = serde_json::to_string(&ds).unwrap();
        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back.records()[0].get("word"), "hello");
    }
}
