//! Submission workflow: validation, server-side scoring, and delivery of a
//! captured lead to the contact store, plus the HTTP surface in front of it.

pub mod domain;
pub mod gateway;
pub mod router;
pub mod session;
pub mod sheet;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{LeadIdentity, LeadRow, QuizSubmission, SubmissionReceipt};
pub use gateway::{SubmissionError, SubmissionGateway};
pub use router::{submission_router, SubmissionRequest, WebinarInterestRequest};
pub use session::{SubmissionSession, SubmissionState};
pub use sheet::SheetContactStore;
pub use store::{ContactStore, ContactStoreError};
