use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use archetype_quiz::submission::{ContactStore, ContactStoreError, LeadRow};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Volatile contact list for demos and tests: same scan-from-the-top update
/// semantics as the spreadsheet store, nothing persisted.
#[derive(Default, Clone)]
pub(crate) struct InMemoryContactStore {
    rows: Arc<Mutex<Vec<LeadRow>>>,
}

impl InMemoryContactStore {
    pub(crate) fn rows(&self) -> Vec<LeadRow> {
        self.rows.lock().expect("contact store mutex poisoned").clone()
    }
}

impl ContactStore for InMemoryContactStore {
    fn append(&self, row: LeadRow) -> Result<(), ContactStoreError> {
        self.rows
            .lock()
            .expect("contact store mutex poisoned")
            .push(row);
        Ok(())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<LeadRow>, ContactStoreError> {
        let rows = self.rows.lock().expect("contact store mutex poisoned");
        Ok(rows.iter().find(|row| row.email == email).cloned())
    }

    fn set_webinar_interest(
        &self,
        email: &str,
        interested: bool,
    ) -> Result<(), ContactStoreError> {
        let mut rows = self.rows.lock().expect("contact store mutex poisoned");
        let target = rows
            .iter_mut()
            .find(|row| row.email == email)
            .ok_or(ContactStoreError::NotFound)?;
        target.webinar_interest = interested;
        Ok(())
    }
}
