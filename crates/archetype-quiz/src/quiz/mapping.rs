use super::domain::Archetype::{Architect, Enchanter, Keeper, Watcher};
use super::domain::{Archetype, QUESTION_COUNT};

/// Statement-to-archetype assignment plus the reverse-keyed statement set.
///
/// An assignment array of [`QUESTION_COUNT`] entries partitions the
/// questionnaire by construction; the constructor additionally enforces that
/// each archetype owns exactly six statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizMapping {
    assignments: [Archetype; QUESTION_COUNT],
    reversed: [bool; QUESTION_COUNT],
}

/// Questions scored against the scale: strongly agreeing counts low.
const REVERSE_KEYED: [usize; 2] = [8, 13];

const STANDARD_ASSIGNMENTS: [Archetype; QUESTION_COUNT] = [
    Enchanter, Architect, Watcher, Keeper, Enchanter, Keeper, // 1-6
    Watcher, Architect, Keeper, Watcher, Watcher, Architect, // 7-12
    Enchanter, Watcher, Enchanter, Architect, Keeper, Keeper, // 13-18
    Enchanter, Enchanter, Architect, Watcher, Keeper, Architect, // 19-24
];

impl QuizMapping {
    pub fn new(
        assignments: [Archetype; QUESTION_COUNT],
        reverse_keyed: &[usize],
    ) -> Result<Self, MappingError> {
        for archetype in Archetype::ALL {
            let count = assignments
                .iter()
                .filter(|assigned| **assigned == archetype)
                .count();
            if count != QUESTION_COUNT / 4 {
                return Err(MappingError::UnbalancedArchetype { archetype, count });
            }
        }

        let mut reversed = [false; QUESTION_COUNT];
        for &question in reverse_keyed {
            if !(1..=QUESTION_COUNT).contains(&question) {
                return Err(MappingError::ReverseKeyOutOfRange { question });
            }
            reversed[question - 1] = true;
        }

        Ok(Self {
            assignments,
            reversed,
        })
    }

    /// The production questionnaire layout: six statements per archetype,
    /// statements 8 and 13 reverse-keyed.
    pub fn standard() -> Self {
        let mut reversed = [false; QUESTION_COUNT];
        for question in REVERSE_KEYED {
            reversed[question - 1] = true;
        }

        Self {
            assignments: STANDARD_ASSIGNMENTS,
            reversed,
        }
    }

    /// Archetype owning a 1-based statement index.
    pub fn archetype_of(&self, question: usize) -> Archetype {
        self.assignments[question - 1]
    }

    pub fn is_reversed(&self, question: usize) -> bool {
        self.reversed[question - 1]
    }

    pub fn questions_for(&self, archetype: Archetype) -> Vec<usize> {
        (1..=QUESTION_COUNT)
            .filter(|&question| self.archetype_of(question) == archetype)
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("{} owns {count} statements, expected 6", .archetype.key())]
    UnbalancedArchetype { archetype: Archetype, count: usize },
    #[error("reverse-keyed statement {question} is outside the questionnaire")]
    ReverseKeyOutOfRange { question: usize },
}
