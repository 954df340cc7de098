use crate::models::AnalysisRecord;
use serde::Serialize;

pub const LOG_CAPACITY: usize = 50;

/// Newest-first record history, bounded at [`LOG_CAPACITY`] entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultLog {
    records: Vec<AnalysisRecord>,
}

impl ResultLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `incoming` ahead of the existing entries, keeping its order, and
    /// drops the oldest entries past capacity.
    #[must_use]
    pub fn prepend<I>(self, incoming: I) -> Self
    where
        I: IntoIterator<Item = AnalysisRecord>,
    {
        let mut records: Vec<AnalysisRecord> = incoming.into_iter().collect();
        records.extend(self.records);
        records.truncate(LOG_CAPACITY);
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        LOG_CAPACITY
    }

    pub fn records(&self) -> &[AnalysisRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnalysisRecord> {
        self.records.iter()
    }

    pub fn latest(&self) -> Option<&AnalysisRecord> {
        self.records.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Label;

    fn record(n: usize) -> AnalysisRecord {
        AnalysisRecord {
            review: format!("review {n}"),
            label: Label::Neutral,
            positive: 0.2,
            negative: 0.2,
            neutral: 0.6,
            timestamp: format!("t{n}"),
        }
    }

    #[test]
    fn prepend_single_places_record_first() {
        let log = ResultLog::new().prepend([record(1)]).prepend([record(2)]);
        assert_eq!(log.len(), 2);
        assert_eq!(log.latest().unwrap().review, "review 2");
        assert_eq!(log.records()[1].review, "review 1");
    }

    #[test]
    fn prepend_batch_keeps_relative_order_ahead_of_existing() {
        let log = ResultLog::new().prepend([record(0)]);
        let log = log.prepend((1..=3).map(record));
        let reviews: Vec<&str> = log.iter().map(|r| r.review.as_str()).collect();
        assert_eq!(reviews, ["review 1", "review 2", "review 3", "review 0"]);
    }

    #[test]
    fn length_never_exceeds_capacity() {
        let mut log = ResultLog::new();
        for n in 0..120 {
            log = log.prepend([record(n)]);
            assert!(log.len() <= LOG_CAPACITY);
            assert_eq!(log.latest().unwrap().review, format!("review {n}"));
        }
        assert_eq!(log.len(), LOG_CAPACITY);
        // the oldest surviving entry is the 50th most recent
        assert_eq!(log.records()[LOG_CAPACITY - 1].review, "review 70");
    }

    #[test]
    fn oversized_batch_keeps_its_head() {
        let log = ResultLog::new().prepend([record(999)]);
        let log = log.prepend((0..60).map(record));
        assert_eq!(log.len(), LOG_CAPACITY);
        assert_eq!(log.records()[0].review, "review 0");
        assert_eq!(log.records()[49].review, "review 49");
    }

    #[test]
    fn empty_prepend_is_a_no_op() {
        let log = ResultLog::new().prepend([record(1)]);
        let same = log.clone().prepend(Vec::new());
        assert_eq!(log, same);
    }
}
