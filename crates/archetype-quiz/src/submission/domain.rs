use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::quiz::{ArchetypeProfile, ArchetypeScores};

/// Contact details shared by every submission variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadIdentity {
    pub first_name: String,
    pub email: String,
    pub consent: bool,
}

/// A capture request handed to the gateway.
///
/// The two variants mirror the two real uses of the endpoint: an early
/// capture taken before the questionnaire starts, and the post-quiz capture
/// carrying the raw answer vector. Scores and classification are always
/// recomputed here rather than trusted from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizSubmission {
    Partial {
        identity: LeadIdentity,
        webinar_interest: bool,
    },
    Full {
        identity: LeadIdentity,
        webinar_interest: bool,
        /// Raw 1-5 ratings in questionnaire order; validated by the gateway.
        answers: Vec<u8>,
    },
}

impl QuizSubmission {
    pub fn identity(&self) -> &LeadIdentity {
        match self {
            QuizSubmission::Partial { identity, .. } => identity,
            QuizSubmission::Full { identity, .. } => identity,
        }
    }

    pub fn webinar_interest(&self) -> bool {
        match self {
            QuizSubmission::Partial {
                webinar_interest, ..
            } => *webinar_interest,
            QuizSubmission::Full {
                webinar_interest, ..
            } => *webinar_interest,
        }
    }
}

/// One appended line of the contact list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRow {
    pub submitted_at: DateTime<Utc>,
    pub first_name: String,
    pub email: String,
    pub consent: bool,
    pub scores: ArchetypeScores,
    /// Primary archetype key, empty for an early-stage capture.
    pub dominant_profile: String,
    /// Growth archetype key, empty for an early-stage capture.
    pub growth_insight: String,
    /// The raw answer vector, empty for an early-stage capture.
    pub answers: Vec<u8>,
    pub webinar_interest: bool,
}

/// What the gateway reports back after a row lands in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub email: String,
    pub scores: ArchetypeScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ArchetypeProfile>,
    pub webinar_interest: bool,
}
