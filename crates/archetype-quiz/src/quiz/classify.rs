use super::domain::{ArchetypeProfile, ArchetypeScores, ProfileKind};

/// Derives the narrative profile from the four archetype totals.
///
/// Totals are ranked descending with ties resolved by canonical archetype
/// order. The gap between the top two entries picks the profile shape, first
/// match wins: two or more points apart reads as dominant, a dead heat as
/// combined, a single point as nuanced. The bottom-ranked archetype becomes
/// the growth pointer.
pub fn classify_scores(scores: ArchetypeScores) -> ArchetypeProfile {
    let ranked = scores.ranked();
    let (highest, second, lowest) = (ranked[0], ranked[1], ranked[3]);

    let (kind, secondary) = if highest.1 - second.1 >= 2 {
        (ProfileKind::Dominant, None)
    } else if highest.1 == second.1 {
        (ProfileKind::Combined, Some(second.0))
    } else {
        (ProfileKind::Nuanced, Some(second.0))
    };

    ArchetypeProfile {
        kind,
        primary: highest.0,
        secondary,
        growth: lowest.0,
    }
}
