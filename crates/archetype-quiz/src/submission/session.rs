use serde::Serialize;

use super::domain::QuizSubmission;

/// Progress of one submission attempt.
///
/// `Sending` is the only point where the remote call is outstanding. There
/// is no automatic transition out of `Failed`; a retry is another `submit`
/// call on the same session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    Idle,
    Validating,
    Rejected,
    Sending,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub const fn label(self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Validating => "validating",
            SubmissionState::Rejected => "rejected",
            SubmissionState::Sending => "sending",
            SubmissionState::Succeeded => "succeeded",
            SubmissionState::Failed => "failed",
        }
    }
}

/// Caller-owned workflow state for one capture.
///
/// The staged submission survives a rejection or a failed remote call, so
/// the respondent can retry without re-answering the questionnaire. State
/// lives here, not in the gateway, and is threaded through validate, send,
/// and report explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionSession {
    submission: QuizSubmission,
    state: SubmissionState,
    attempts: u32,
}

impl SubmissionSession {
    pub fn new(submission: QuizSubmission) -> Self {
        Self {
            submission,
            state: SubmissionState::Idle,
            attempts: 0,
        }
    }

    pub fn submission(&self) -> &QuizSubmission {
        &self.submission
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Number of `submit` calls that reached validation.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub(crate) fn begin_attempt(&mut self) {
        self.attempts += 1;
        self.state = SubmissionState::Validating;
    }

    pub(crate) fn transition(&mut self, state: SubmissionState) {
        self.state = state;
    }
}
