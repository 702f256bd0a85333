use super::profile::Year;
use super::records::{OrgRecord, ANY_MAJOR};
use super::scored::{Scored, Tally};
use super::ScoringContext;

const FIRST_YEAR_CATEGORIES: [&str; 3] = ["Cultural", "Social", "Recreation"];
const UPPER_YEAR_CATEGORIES: [&str; 2] = ["Academic Interests", "Educational/Departmental"];

pub const FIRST_YEAR_SOCIAL: &str =
    "This activity is ideal for first-year students to connect socially.";
pub const UPPER_YEAR_ACADEMIC: &str = "This activity provides valuable educational and departmental experience for upper-year students.";
pub const INTEREST_MATCH: &str = "This activity aligns with your interests.";
pub const COLLEGE_MATCH: &str = "This activity is relevant to your college.";
pub const OPEN_TO_ALL: &str = "This activity is open to all majors.";
pub const MAJOR_MATCH: &str = "This activity directly aligns with your major.";

pub fn score_organizations(
    context: &ScoringContext<'_>,
    catalog: &[OrgRecord],
) -> Vec<Scored<OrgRecord>> {
    catalog
        .iter()
        .map(|record| score_organization(context, record))
        .collect()
}

pub fn score_organization(context: &ScoringContext<'_>, record: &OrgRecord) -> Scored<OrgRecord> {
    let profile = context.profile;
    let category = record.category.as_str();
    let mut tally = Tally::default();

    if profile.year == Year::First && FIRST_YEAR_CATEGORIES.contains(&category) {
        tally.add(context.ratings.social_share(), FIRST_YEAR_SOCIAL);
    } else if profile.year.is_upper_year() && UPPER_YEAR_CATEGORIES.contains(&category) {
        tally.add(1.0, UPPER_YEAR_ACADEMIC);
    }

    if profile
        .interests
        .iter()
        .any(|interest| category.contains(interest.as_str()))
    {
        tally.add(1.0, INTEREST_MATCH);
    }

    if record.majors == context.college.label() {
        tally.add(2.0, COLLEGE_MATCH);
    }

    if record.majors == ANY_MAJOR {
        tally.add(0.5, OPEN_TO_ALL);
    }

    if record
        .specific_majors
        .iter()
        .any(|major| *major == profile.major)
    {
        tally.add(3.0, MAJOR_MATCH);
    }

    tally.finish(record.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendations::profile::{
        AcademicDifficulty, Satisfaction, StressLevel, StudentProfile,
    };
    use std::collections::BTreeSet;

    fn org(category: &str, majors: &str, specific: &[&str]) -> OrgRecord {
        OrgRecord {
            category: category.to_string(),
            majors: majors.to_string(),
            specific_majors: specific.iter().map(|major| major.to_string()).collect(),
            details: Default::default(),
        }
    }

    fn first_year(interests: &[&str]) -> StudentProfile {
        StudentProfile {
            year: Year::First,
            major: "Computer Science".to_string(),
            academic_difficulty: AcademicDifficulty::Difficult,
            stress_level: StressLevel::High,
            satisfaction: Satisfaction::Dissatisfied,
            interests: interests.iter().map(|interest| interest.to_string()).collect(),
            ..StudentProfile::default()
        }
    }

    #[test]
    fn social_org_for_interested_first_year() {
        let profile = first_year(&["Social"]);
        let context = ScoringContext::new(&profile);
        assert_eq!(context.ratings.social_support, 4);

        let scored = score_organization(&context, &org("Social", ANY_MAJOR, &[]));

        assert_eq!(scored.score, 2.83);
        assert_eq!(
            scored.reasons,
            vec![FIRST_YEAR_SOCIAL, INTEREST_MATCH, OPEN_TO_ALL]
        );
    }

    #[test]
    fn college_and_exact_major_stack() {
        let profile = first_year(&[]);
        let context = ScoringContext::new(&profile);
        let record = org(
            "Academic Interests",
            "Erik Jonsson School of Engineering and Computer Science",
            &["Computer Science", "Data Science"],
        );

        let scored = score_organization(&context, &record);

        assert_eq!(scored.score, 5.0);
        assert_eq!(scored.reasons, vec![COLLEGE_MATCH, MAJOR_MATCH]);
    }

    #[test]
    fn upper_years_favor_departmental_orgs() {
        let profile = StudentProfile {
            year: Year::FifthPlus,
            ..StudentProfile::default()
        };
        let context = ScoringContext::new(&profile);

        let departmental = score_organization(&context, &org("Educational/Departmental", "", &[]));
        assert_eq!(departmental.score, 1.0);
        assert_eq!(departmental.reasons, vec![UPPER_YEAR_ACADEMIC]);

        let social = score_organization(&context, &org("Social", "", &[]));
        assert_eq!(social.score, 0.0);
        assert!(social.reasons.is_empty());
    }

    #[test]
    fn interests_match_as_substrings_of_the_category() {
        let profile = StudentProfile {
            year: Year::Second,
            interests: BTreeSet::from(["Cultural".to_string()]),
            ..StudentProfile::default()
        };
        let context = ScoringContext::new(&profile);

        let scored = score_organization(&context, &org("Cultural/Religious", "", &[]));
        assert_eq!(scored.reasons, vec![INTEREST_MATCH]);
    }

    #[test]
    fn any_major_sentinel_is_case_sensitive() {
        let profile = StudentProfile::default();
        let context = ScoringContext::new(&profile);

        let scored = score_organization(&context, &org("Service", "Any Major", &[]));
        assert_eq!(scored.score, 0.0);
    }

    #[test]
    fn scoring_leaves_the_catalog_untouched() {
        let profile = first_year(&["Social"]);
        let context = ScoringContext::new(&profile);
        let catalog = vec![org("Social", ANY_MAJOR, &[]), org("Recreation", "", &[])];
        let before = catalog.clone();

        let first = score_organizations(&context, &catalog);
        let second = score_organizations(&context, &catalog);

        assert_eq!(catalog, before);
        assert_eq!(first, second);
    }
}
