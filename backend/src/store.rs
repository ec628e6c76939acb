use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use ignite_core::{FormKind, FormPayload};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct StoredSubmission {
    pub id: Uuid,
    pub form: FormKind,
    pub received_at: DateTime<Utc>,
    pub payload: FormPayload,
}

/// Accepted submissions, kept in memory per form. Each form holds at most
/// `capacity` entries; the oldest is evicted first.
#[derive(Debug)]
pub struct SubmissionStore {
    entries: DashMap<FormKind, VecDeque<StoredSubmission>>,
    capacity: usize,
}

impl SubmissionStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: DashMap::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn insert(&self, form: FormKind, payload: FormPayload) -> StoredSubmission {
        let submission = StoredSubmission {
            id: Uuid::new_v4(),
            form,
            received_at: Utc::now(),
            payload,
        };
        let mut list = self.entries.entry(form).or_default();
        if list.len() >= self.capacity {
            if let Some(evicted) = list.pop_front() {
                tracing::debug!("Evicted {} submission {}", form, evicted.id);
            }
        }
        list.push_back(submission.clone());
        submission
    }

    pub fn count(&self, form: FormKind) -> usize {
        self.entries.get(&form).map(|list| list.len()).unwrap_or(0)
    }

    pub fn latest(&self, form: FormKind) -> Option<StoredSubmission> {
        self.entries.get(&form)?.back().cloned()
    }
}
