use serde::{Deserialize, Serialize};

use super::classify::classify_scores;
use super::domain::{AnswerSet, ArchetypeProfile, ArchetypeScores, QUESTION_COUNT};
use super::mapping::QuizMapping;

/// Stateless engine turning a validated answer vector into archetype totals.
pub struct ScoringEngine {
    mapping: QuizMapping,
}

impl ScoringEngine {
    pub fn new(mapping: QuizMapping) -> Self {
        Self { mapping }
    }

    pub fn standard() -> Self {
        Self::new(QuizMapping::standard())
    }

    pub fn mapping(&self) -> &QuizMapping {
        &self.mapping
    }

    /// Sums the six (possibly reverse-keyed) ratings assigned to each
    /// archetype. Reverse-keyed statements contribute `6 - rating`.
    pub fn score(&self, answers: &AnswerSet) -> ArchetypeScores {
        let mut totals = ArchetypeScores::zeroed();

        for question in 1..=QUESTION_COUNT {
            let raw = answers.rating(question);
            let effective = if self.mapping.is_reversed(question) {
                6 - raw
            } else {
                raw
            };

            let archetype = self.mapping.archetype_of(question);
            totals.set(archetype, totals.get(archetype) + effective);
        }

        totals
    }

    /// Scores the answers and classifies the result in one step.
    pub fn evaluate(&self, answers: &AnswerSet) -> QuizOutcome {
        let scores = self.score(answers);
        QuizOutcome {
            scores,
            profile: classify_scores(scores),
        }
    }
}

/// Combined scoring and classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub scores: ArchetypeScores,
    pub profile: ArchetypeProfile,
}
