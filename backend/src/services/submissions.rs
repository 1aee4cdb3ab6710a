//! Append-only log of telemetry submissions. Process-lifetime only, like
//! every other piece of state in this backend.

use parking_lot::RwLock;

use crate::models::data::DataSubmission;

#[derive(Default)]
pub struct SubmissionLog {
    entries: RwLock<Vec<DataSubmission>>,
}

impl SubmissionLog {
    pub fn record(&self, submission: DataSubmission) {
        self.entries.write().push(submission);
    }

    pub fn all(&self) -> Vec<DataSubmission> {
        self.entries.read().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(correlation_id: &str) -> DataSubmission {
        DataSubmission {
            correlation_id: correlation_id.to_string(),
            session_name: "load-test".to_string(),
            notes: String::new(),
            numeric_value: 1.5,
        }
    }

    #[test]
    fn records_in_arrival_order() {
        let log = SubmissionLog::default();
        assert!(log.is_empty());
        log.record(submission("a"));
        log.record(submission("b"));
        let all = log.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].correlation_id, "a");
        assert_eq!(all[1].correlation_id, "b");
    }
}
