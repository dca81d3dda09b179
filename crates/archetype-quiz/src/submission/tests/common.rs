use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::quiz::QUESTION_COUNT;
use crate::submission::domain::{LeadIdentity, LeadRow, QuizSubmission};
use crate::submission::store::{ContactStore, ContactStoreError};

pub(super) fn identity() -> LeadIdentity {
    LeadIdentity {
        first_name: "Camille".to_string(),
        email: "camille@example.com".to_string(),
        consent: true,
    }
}

pub(super) fn full_submission() -> QuizSubmission {
    QuizSubmission::Full {
        identity: identity(),
        webinar_interest: false,
        answers: vec![3; QUESTION_COUNT],
    }
}

pub(super) fn partial_submission() -> QuizSubmission {
    QuizSubmission::Partial {
        identity: identity(),
        webinar_interest: true,
    }
}

/// In-memory sink counting append attempts so tests can assert that
/// rejected submissions never reach the store.
#[derive(Default)]
pub(super) struct MemoryStore {
    rows: Mutex<Vec<LeadRow>>,
    append_calls: AtomicUsize,
}

impl MemoryStore {
    pub(super) fn rows(&self) -> Vec<LeadRow> {
        self.rows.lock().expect("store mutex poisoned").clone()
    }

    pub(super) fn append_calls(&self) -> usize {
        self.append_calls.load(Ordering::Relaxed)
    }
}

impl ContactStore for MemoryStore {
    fn append(&self, row: LeadRow) -> Result<(), ContactStoreError> {
        self.append_calls.fetch_add(1, Ordering::Relaxed);
        self.rows.lock().expect("store mutex poisoned").push(row);
        Ok(())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<LeadRow>, ContactStoreError> {
        let rows = self.rows.lock().expect("store mutex poisoned");
        Ok(rows.iter().find(|row| row.email == email).cloned())
    }

    fn set_webinar_interest(
        &self,
        email: &str,
        interested: bool,
    ) -> Result<(), ContactStoreError> {
        let mut rows = self.rows.lock().expect("store mutex poisoned");
        let target = rows
            .iter_mut()
            .find(|row| row.email == email)
            .ok_or(ContactStoreError::NotFound)?;
        target.webinar_interest = interested;
        Ok(())
    }
}

/// Sink that rejects the first append with a transport failure and accepts
/// every call after that, for retry scenarios.
#[derive(Default)]
pub(super) struct FlakyStore {
    inner: MemoryStore,
    failed_once: AtomicBool,
}

impl FlakyStore {
    pub(super) fn rows(&self) -> Vec<LeadRow> {
        self.inner.rows()
    }
}

impl ContactStore for FlakyStore {
    fn append(&self, row: LeadRow) -> Result<(), ContactStoreError> {
        if self
            .failed_once
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            return Err(ContactStoreError::Remote("connection reset".to_string()));
        }
        self.inner.append(row)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<LeadRow>, ContactStoreError> {
        self.inner.find_by_email(email)
    }

    fn set_webinar_interest(
        &self,
        email: &str,
        interested: bool,
    ) -> Result<(), ContactStoreError> {
        self.inner.set_webinar_interest(email, interested)
    }
}

/// Sink whose credential acquisition always fails upstream.
pub(super) struct AuthFailingStore;

impl ContactStore for AuthFailingStore {
    fn append(&self, _row: LeadRow) -> Result<(), ContactStoreError> {
        Err(ContactStoreError::Auth("invalid service key".to_string()))
    }

    fn find_by_email(&self, _email: &str) -> Result<Option<LeadRow>, ContactStoreError> {
        Err(ContactStoreError::Auth("invalid service key".to_string()))
    }

    fn set_webinar_interest(
        &self,
        _email: &str,
        _interested: bool,
    ) -> Result<(), ContactStoreError> {
        Err(ContactStoreError::Auth("invalid service key".to_string()))
    }
}

/// Sink that parks inside its first `append` until released, so tests can
/// observe the in-flight guard from another thread. Later appends pass
/// straight through.
pub(super) struct BlockingStore {
    pub(super) entered: Arc<Barrier>,
    pub(super) release: Arc<Barrier>,
    blocked_once: AtomicBool,
}

impl BlockingStore {
    pub(super) fn new(entered: Arc<Barrier>, release: Arc<Barrier>) -> Self {
        Self {
            entered,
            release,
            blocked_once: AtomicBool::new(false),
        }
    }
}

impl ContactStore for BlockingStore {
    fn append(&self, _row: LeadRow) -> Result<(), ContactStoreError> {
        if self
            .blocked_once
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            self.entered.wait();
            self.release.wait();
        }
        Ok(())
    }

    fn find_by_email(&self, _email: &str) -> Result<Option<LeadRow>, ContactStoreError> {
        Ok(None)
    }

    fn set_webinar_interest(
        &self,
        _email: &str,
        _interested: bool,
    ) -> Result<(), ContactStoreError> {
        Err(ContactStoreError::NotFound)
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects");
    serde_json::from_slice(&bytes).expect("body is json")
}
