use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{LeadRow, QuizSubmission, SubmissionReceipt};
use super::session::{SubmissionSession, SubmissionState};
use super::store::{ContactStore, ContactStoreError};
use crate::quiz::{AnswerSet, ArchetypeScores, ScoringEngine, ValidationError};

/// Orchestrates validation, server-side scoring, and the hand-off of a
/// completed capture to the contact store.
///
/// One gateway instance admits one in-flight submission at a time; the
/// guard is per instance, not global, so independent instances can still
/// race and duplicate rows in the shared sink.
pub struct SubmissionGateway<S> {
    store: Arc<S>,
    engine: ScoringEngine,
    in_flight: AtomicBool,
}

impl<S> SubmissionGateway<S>
where
    S: ContactStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self::with_engine(store, ScoringEngine::standard())
    }

    pub fn with_engine(store: Arc<S>, engine: ScoringEngine) -> Self {
        Self {
            store,
            engine,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Runs one submission attempt: validate, score, append one row.
    ///
    /// There is no retry loop; a failed attempt leaves the session in
    /// `Failed` with its staged answers intact, and the caller decides
    /// whether to call `submit` again.
    pub fn submit(
        &self,
        session: &mut SubmissionSession,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        if session.state() == SubmissionState::Succeeded {
            return Err(SubmissionError::AlreadySubmitted);
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SubmissionError::InFlight);
        }

        let outcome = self.run_attempt(session);
        self.in_flight.store(false, Ordering::Release);
        outcome
    }

    /// Flips the webinar-interest field on the first stored row matching the
    /// email. Best-effort: the store performs a read-then-write with no
    /// concurrency check.
    pub fn update_webinar_interest(
        &self,
        email: &str,
        interested: bool,
    ) -> Result<(), SubmissionError> {
        if email.trim().is_empty() {
            return Err(ValidationError::MissingEmail.into());
        }

        self.store
            .set_webinar_interest(email, interested)
            .map_err(SubmissionError::Store)
    }

    fn run_attempt(
        &self,
        session: &mut SubmissionSession,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        session.begin_attempt();

        let (row, receipt) = match self.stage(session.submission()) {
            Ok(staged) => staged,
            Err(err) => {
                session.transition(SubmissionState::Rejected);
                return Err(SubmissionError::Validation(err));
            }
        };

        session.transition(SubmissionState::Sending);
        match self.store.append(row) {
            Ok(()) => {
                session.transition(SubmissionState::Succeeded);
                Ok(receipt)
            }
            Err(err) => {
                session.transition(SubmissionState::Failed);
                Err(SubmissionError::Store(err))
            }
        }
    }

    fn stage(
        &self,
        submission: &QuizSubmission,
    ) -> Result<(LeadRow, SubmissionReceipt), ValidationError> {
        let identity = submission.identity();
        if identity.email.trim().is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if identity.first_name.trim().is_empty() {
            return Err(ValidationError::MissingFirstName);
        }
        if !identity.consent {
            return Err(ValidationError::ConsentRequired);
        }

        let (scores, profile, answers) = match submission {
            QuizSubmission::Partial { .. } => (ArchetypeScores::zeroed(), None, Vec::new()),
            QuizSubmission::Full { answers, .. } => {
                let answers = AnswerSet::new(answers.clone())?;
                let outcome = self.engine.evaluate(&answers);
                (
                    outcome.scores,
                    Some(outcome.profile),
                    answers.ratings().to_vec(),
                )
            }
        };

        let row = LeadRow {
            submitted_at: Utc::now(),
            first_name: identity.first_name.clone(),
            email: identity.email.clone(),
            consent: identity.consent,
            scores,
            dominant_profile: profile.map(|p| p.primary.key().to_string()).unwrap_or_default(),
            growth_insight: profile.map(|p| p.growth.key().to_string()).unwrap_or_default(),
            answers,
            webinar_interest: submission.webinar_interest(),
        };

        let receipt = SubmissionReceipt {
            email: row.email.clone(),
            scores,
            profile,
            webinar_interest: row.webinar_interest,
        };

        Ok((row, receipt))
    }
}

/// Error raised by the submission gateway.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] ContactStoreError),
    #[error("another submission is already in flight")]
    InFlight,
    #[error("this session has already been submitted")]
    AlreadySubmitted,
}
