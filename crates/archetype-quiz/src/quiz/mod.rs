//! Pure quiz domain: answer validation, archetype scoring, and profile
//! classification. Nothing in this module touches the network or the
//! contact store.

pub mod classify;
pub mod domain;
pub mod mapping;
pub mod scoring;

pub use classify::classify_scores;
pub use domain::{
    AnswerSet, Archetype, ArchetypeProfile, ArchetypeScores, ProfileKind, ValidationError,
    NEUTRAL_RATING, QUESTION_COUNT,
};
pub use mapping::{MappingError, QuizMapping};
pub use scoring::{QuizOutcome, ScoringEngine};
