use crate::record::{Dataset, Record, fields};

impl Dataset {
    /// Records whose lesson field equals `lesson_id` exactly, in source
    /// order. Case-sensitive; an unknown lesson yields an empty result.
    pub fn by_lesson(&self, lesson_id: &str) -> Vec<&Record> {
        self.records()
            .iter()
            .filter(|r| r.get(fields::LESSON) == lesson_id)
            .collect()
    }

    /// Every distinct lesson value, sorted ascending by string order.
    pub fn distinct_lessons(&self) -> Vec<String> {
        let mut lessons: Vec<String> = self
            .records()
            .iter()
            .map(|r| r.get(fields::LESSON).to_string())
            .collect();
        lessons.sort();
        lessons.dedup();
        lessons
    }

    /// Records where any searchable field contains `term` as a
    /// case-insensitive substring, in source order.
    ///
    /// An empty term means "no active search" and yields an empty result,
    /// not the whole dataset.
    pub fn search(&self, term: &str) -> Vec<&Record> {
        if term.is_empty() {
            return Vec::new();
        }

        let needle = term.to_lowercase();
        self.records()
            .iter()
            .filter(|r| {
                self.searchable_fields()
                    .iter()
                    .any(|f| r.get(f).to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// [`search`](Dataset::search) truncated to at most `limit` records,
    /// for live-typing suggestions. Zero matches is an empty result, never
    /// an error.
    pub fn suggest(&self, term: &str, limit: usize) -> Vec<&Record> {
        let mut matches = self.search(term);
        matches.truncate(limit);
        matches
    }
}
