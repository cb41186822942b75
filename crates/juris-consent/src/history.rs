use juris_core::{ConsentRecord, CONSENT_HISTORY_LIMIT};

/// Append-only consent audit trail, bounded to the most recent entries.
///
/// The bound is a hard cap: pushing the eleventh record drops the oldest.
#[derive(Debug)]
pub struct ConsentHistory {
    records: Vec<ConsentRecord>,
    limit: usize,
}

impl ConsentHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit: limit.max(1),
        }
    }

    pub fn push(&mut self, record: ConsentRecord) {
        self.records.push(record);
        if self.records.len() > self.limit {
            let overflow = self.records.len() - self.limit;
            self.records.drain(..overflow);
        }
    }

    /// All retained records, oldest first.
    pub fn records(&self) -> Vec<ConsentRecord> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for ConsentHistory {
    fn default() -> Self {
        Self::new(CONSENT_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use juris_core::{ConsentMethod, ConsentSettings, Timestamp};

    fn record(seconds: u64) -> ConsentRecord {
        ConsentRecord {
            timestamp: Timestamp::from_seconds(seconds),
            settings: ConsentSettings::essential_only(),
            user_agent: None,
            method: ConsentMethod::Api,
            version: "test".to_string(),
        }
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = ConsentHistory::default();
        for i in 0..15 {
            history.push(record(i));
        }
        assert_eq!(history.len(), CONSENT_HISTORY_LIMIT);

        // Oldest entries dropped, newest retained.
        let records = history.records();
        assert_eq!(records[0].timestamp, Timestamp::from_seconds(5));
        assert_eq!(records[9].timestamp, Timestamp::from_seconds(14));
    }

    #[test]
    fn test_records_preserve_order() {
        let mut history = ConsentHistory::new(3);
        assert!(history.is_empty());
        history.push(record(1));
        history.push(record(2));
        let records = history.records();
        assert!(records[0].timestamp < records[1].timestamp);
    }
}
