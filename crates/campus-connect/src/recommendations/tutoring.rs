use super::profile::{GpaRange, Year};
use super::records::TutoringRecord;
use super::scored::{Scored, Tally};
use super::ScoringContext;

pub const NOT_FOR_YOUR_MAJOR: &str = "This opportunity may not be for your major";
pub const PERFECT_FOR_MAJOR: &str = "This opportunity is perfect for your major!";
pub const FIRST_YEAR_WORKLOAD: &str =
    "Tutoring can be a fantastic resource for first-year students adapting to the college workload!";
pub const UNDERCLASS_FOUNDATION: &str =
    "Tutoring is highly beneficial for underclassmen building a strong academic foundation.";
pub const STRENGTHEN_PERFORMANCE: &str = "Tutoring can be a valuable tool to help you strengthen your academic performance and reach your goals!";
pub const BUILD_ON_ACHIEVEMENTS: &str = "With a bit of extra support, you can build on your achievements and keep moving towards your academic potential.";
pub const MAINTAIN_STANDING: &str =
    "Tutoring can be a great way to maintain and even boost your already solid academic standing.";

pub fn score_tutoring(
    context: &ScoringContext<'_>,
    catalog: &[TutoringRecord],
) -> Vec<Scored<TutoringRecord>> {
    catalog
        .iter()
        .map(|record| score_tutoring_record(context, record))
        .collect()
}

/// Ineligible records short-circuit to a zero score with a single explanatory sentence.
pub fn score_tutoring_record(
    context: &ScoringContext<'_>,
    record: &TutoringRecord,
) -> Scored<TutoringRecord> {
    let profile = context.profile;
    let mut tally = Tally::default();

    if !record.eligibility.admits(&profile.major) {
        tally.add(0.0, NOT_FOR_YOUR_MAJOR);
        return tally.finish(record.clone());
    }

    if record.eligibility.lists(&profile.major) {
        tally.add(1.0, PERFECT_FOR_MAJOR);
    }

    match profile.year {
        Year::First => tally.add(2.0, FIRST_YEAR_WORKLOAD),
        Year::Second => tally.add(1.0, UNDERCLASS_FOUNDATION),
        Year::Third | Year::Fourth | Year::FifthPlus => {}
    }

    let gpa_sentence = match profile.gpa_range {
        GpaRange::Below2_0 | GpaRange::From2_0To2_5 => Some(STRENGTHEN_PERFORMANCE),
        GpaRange::From2_6To3_0 => Some(BUILD_ON_ACHIEVEMENTS),
        GpaRange::From3_1To3_5 => Some(MAINTAIN_STANDING),
        GpaRange::From3_6To4_0 => None,
    };
    if let Some(sentence) = gpa_sentence {
        tally.add(context.ratings.intellectual_share(), sentence);
    }

    tally.finish(record.clone())
}
