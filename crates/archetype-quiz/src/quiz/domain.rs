use serde::{Deserialize, Serialize};

/// Number of statements in the questionnaire. The answer-vector contract is
/// fixed at this length everywhere, including the submission payload.
pub const QUESTION_COUNT: usize = 24;

/// Midpoint of the 1-5 rating scale, substituted for unanswered statements.
pub const NEUTRAL_RATING: u8 = 3;

/// The four personality buckets a respondent is scored into.
///
/// Declaration order is the canonical order used for every tie-break, so the
/// classified profile stays deterministic when totals collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Architect,
    Enchanter,
    Watcher,
    Keeper,
}

impl Archetype {
    /// Canonical ordering, matching declaration order.
    pub const ALL: [Archetype; 4] = [
        Archetype::Architect,
        Archetype::Enchanter,
        Archetype::Watcher,
        Archetype::Keeper,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Archetype::Architect => "architect",
            Archetype::Enchanter => "enchanter",
            Archetype::Watcher => "watcher",
            Archetype::Keeper => "keeper",
        }
    }
}

/// Validated answer vector: exactly [`QUESTION_COUNT`] ratings, each in 1-5.
///
/// Construction is the only validation point; once built the scoring engine
/// can rely on the invariants and never clamps or errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet(Vec<u8>);

impl AnswerSet {
    pub fn new(values: Vec<u8>) -> Result<Self, ValidationError> {
        if values.len() != QUESTION_COUNT {
            return Err(ValidationError::WrongAnswerCount {
                expected: QUESTION_COUNT,
                actual: values.len(),
            });
        }

        for (index, value) in values.iter().enumerate() {
            if !(1..=5).contains(value) {
                return Err(ValidationError::RatingOutOfRange {
                    question: index + 1,
                    value: *value,
                });
            }
        }

        Ok(Self(values))
    }

    /// Builds an answer set from a partially filled questionnaire, treating
    /// every unanswered slot as the neutral rating.
    pub fn from_partial(slots: Vec<Option<u8>>) -> Result<Self, ValidationError> {
        if slots.len() != QUESTION_COUNT {
            return Err(ValidationError::WrongAnswerCount {
                expected: QUESTION_COUNT,
                actual: slots.len(),
            });
        }

        let values = slots
            .into_iter()
            .map(|slot| slot.unwrap_or(NEUTRAL_RATING))
            .collect();
        Self::new(values)
    }

    /// An abandoned questionnaire: every statement rated at the midpoint.
    pub fn neutral() -> Self {
        Self(vec![NEUTRAL_RATING; QUESTION_COUNT])
    }

    /// Rating for a 1-based question index.
    pub fn rating(&self, question: usize) -> u8 {
        self.0[question - 1]
    }

    pub fn ratings(&self) -> &[u8] {
        &self.0
    }
}

/// Per-archetype totals, each in `[6, 30]` (6 statements, ratings 1-5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeScores {
    pub architect: u8,
    pub enchanter: u8,
    pub watcher: u8,
    pub keeper: u8,
}

impl ArchetypeScores {
    pub const fn zeroed() -> Self {
        Self {
            architect: 0,
            enchanter: 0,
            watcher: 0,
            keeper: 0,
        }
    }

    pub const fn get(self, archetype: Archetype) -> u8 {
        match archetype {
            Archetype::Architect => self.architect,
            Archetype::Enchanter => self.enchanter,
            Archetype::Watcher => self.watcher,
            Archetype::Keeper => self.keeper,
        }
    }

    pub fn set(&mut self, archetype: Archetype, total: u8) {
        match archetype {
            Archetype::Architect => self.architect = total,
            Archetype::Enchanter => self.enchanter = total,
            Archetype::Watcher => self.watcher = total,
            Archetype::Keeper => self.keeper = total,
        }
    }

    /// The four `(archetype, total)` pairs sorted descending by total.
    ///
    /// The sort is stable over canonical archetype order, so ties rank in
    /// declaration order every run.
    pub fn ranked(self) -> [(Archetype, u8); 4] {
        let mut pairs = Archetype::ALL.map(|archetype| (archetype, self.get(archetype)));
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs
    }
}

/// Shape of a classified profile, driven by the gap between the two highest
/// archetype totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    Dominant,
    Combined,
    Nuanced,
}

impl ProfileKind {
    pub const fn label(self) -> &'static str {
        match self {
            ProfileKind::Dominant => "dominant",
            ProfileKind::Combined => "combined",
            ProfileKind::Nuanced => "nuanced",
        }
    }
}

/// Narrative result derived from the archetype totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeProfile {
    pub kind: ProfileKind,
    pub primary: Archetype,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Archetype>,
    /// Lowest-ranked archetype, surfaced as a development opportunity.
    pub growth: Archetype,
}

/// Rejections raised before any contact-store call is attempted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("expected {expected} answers, got {actual}")]
    WrongAnswerCount { expected: usize, actual: usize },
    #[error("answer {question} is rated {value}, outside the 1-5 scale")]
    RatingOutOfRange { question: usize, value: u8 },
    #[error("an email address is required")]
    MissingEmail,
    #[error("a first name is required")]
    MissingFirstName,
    #[error("consent must be granted before contact details are stored")]
    ConsentRequired,
}
