use crate::infra::InMemoryContactStore;
use archetype_quiz::error::AppError;
use archetype_quiz::quiz::{AnswerSet, Archetype, ScoringEngine, QUESTION_COUNT};
use archetype_quiz::submission::{
    LeadIdentity, QuizSubmission, SubmissionGateway, SubmissionSession,
};
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Comma-separated 1-5 ratings in questionnaire order (24 values)
    #[arg(long, value_delimiter = ',')]
    pub(crate) answers: Option<Vec<u8>>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// First name recorded on the demo capture
    #[arg(long, default_value = "Nadia")]
    pub(crate) first_name: String,
    /// Email recorded on the demo capture
    #[arg(long, default_value = "nadia@example.com")]
    pub(crate) email: String,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let answers = match args.answers {
        Some(values) => {
            AnswerSet::new(values).map_err(|err| AppError::Submission(err.into()))?
        }
        None => AnswerSet::neutral(),
    };

    let outcome = ScoringEngine::standard().evaluate(&answers);

    println!("Archetype totals");
    for archetype in Archetype::ALL {
        println!("  {:<10} {}", archetype.key(), outcome.scores.get(archetype));
    }

    let profile = outcome.profile;
    match profile.secondary {
        Some(secondary) => println!(
            "Profile: {} ({} with {})",
            profile.kind.label(),
            profile.primary.key(),
            secondary.key()
        ),
        None => println!("Profile: {} ({})", profile.kind.label(), profile.primary.key()),
    }
    println!("Growth opportunity: {}", profile.growth.key());

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let store = Arc::new(InMemoryContactStore::default());
    let gateway = SubmissionGateway::new(store.clone());

    // A vector leaning on the watcher statements so the demo shows a
    // dominant profile rather than a four-way tie.
    let mut answers = vec![2u8; QUESTION_COUNT];
    for question in [3, 7, 10, 11, 14, 22] {
        answers[question - 1] = 5;
    }

    println!("Submitting demo capture for {} <{}>", args.first_name, args.email);
    let mut session = SubmissionSession::new(QuizSubmission::Full {
        identity: LeadIdentity {
            first_name: args.first_name,
            email: args.email.clone(),
            consent: true,
        },
        webinar_interest: false,
        answers,
    });

    let receipt = gateway.submit(&mut session)?;
    println!("  session state: {}", session.state().label());
    for archetype in Archetype::ALL {
        println!("  {:<10} {}", archetype.key(), receipt.scores.get(archetype));
    }
    if let Some(profile) = receipt.profile {
        println!(
            "  classified as {} (primary {}, growth {})",
            profile.kind.label(),
            profile.primary.key(),
            profile.growth.key()
        );
    }

    println!("Registering webinar interest for {}", args.email);
    gateway.update_webinar_interest(&args.email, true)?;

    let rows = store.rows();
    println!("Contact list now holds {} row(s)", rows.len());
    for row in rows {
        println!(
            "  {} <{}> dominant={} growth={} webinar={}",
            row.first_name, row.email, row.dominant_profile, row.growth_insight, row.webinar_interest
        );
    }

    Ok(())
}
