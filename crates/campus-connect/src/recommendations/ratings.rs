use serde::Serialize;

use super::profile::{
    AcademicDifficulty, Encouragement, FamilyResponsibilities, FinancialFactors, Satisfaction,
    SelfEfficacy, StressLevel, StudentProfile,
};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Need ratings derived once per request and shared by every category scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedRatings {
    pub social_support: u8,
    pub intellectual_support: u8,
    pub career_development: u8,
}

impl DerivedRatings {
    pub fn compute(profile: &StudentProfile) -> Self {
        Self {
            social_support: social_support(profile),
            intellectual_support: intellectual_support(profile),
            career_development: career_development(profile),
        }
    }

    pub fn social_share(&self) -> f64 {
        third(self.social_support)
    }

    pub fn intellectual_share(&self) -> f64 {
        third(self.intellectual_support)
    }

    pub fn career_share(&self) -> f64 {
        third(self.career_development)
    }
}

/// Scorers add a third of a rating, so a maximal need contributes 5/3 points.
fn third(rating: u8) -> f64 {
    f64::from(rating) / 3.0
}

pub fn clamp_rating(raw: i32) -> u8 {
    raw.clamp(i32::from(MIN_RATING), i32::from(MAX_RATING)) as u8
}

pub fn social_support(profile: &StudentProfile) -> u8 {
    let mut score = 0;
    if profile.academic_difficulty == AcademicDifficulty::Difficult
        || profile.stress_level == StressLevel::High
    {
        score += 2;
    }
    if profile.encouraged_by(Encouragement::Peers) || profile.encouraged_by(Encouragement::Community)
    {
        score -= 1;
    }
    if profile.satisfaction == Satisfaction::Dissatisfied {
        score += 2;
    }
    clamp_rating(score)
}

pub fn intellectual_support(profile: &StudentProfile) -> u8 {
    let mut score = 0;
    if profile.gpa_range.is_low() {
        score += 3;
    }
    if profile.academic_difficulty == AcademicDifficulty::Difficult {
        score += 2;
    }
    if profile.self_efficacy == SelfEfficacy::LittleBelief {
        score += 2;
    }
    if profile.encouraged_by(Encouragement::Teachers) {
        score -= 1;
    }
    clamp_rating(score)
}

pub fn career_development(profile: &StudentProfile) -> u8 {
    let mut score = 0;
    if matches!(
        profile.financial_factors,
        FinancialFactors::WorkIncome | FinancialFactors::Loan
    ) {
        score += 1;
    }
    if profile.satisfaction == Satisfaction::Neutral
        || profile.self_efficacy == SelfEfficacy::SomeBelief
    {
        score += 1;
    }
    if profile.family_responsibilities == FamilyResponsibilities::High {
        score += 1;
    }
    if profile.encouraged_by(Encouragement::Family) {
        score -= 1;
    }
    clamp_rating(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendations::profile::{GpaRange, RawProfile, Year};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn struggling_first_year() -> StudentProfile {
        StudentProfile {
            year: Year::First,
            gpa_range: GpaRange::Below2_0,
            major: "Computer Science".to_string(),
            academic_difficulty: AcademicDifficulty::Difficult,
            stress_level: StressLevel::High,
            satisfaction: Satisfaction::Dissatisfied,
            outside_encouragement: BTreeSet::new(),
            ..StudentProfile::default()
        }
    }

    #[test]
    fn struggling_first_year_ratings() {
        let ratings = DerivedRatings::compute(&struggling_first_year());
        assert_eq!(ratings.social_support, 4);
        assert_eq!(ratings.intellectual_support, 5);
        assert_eq!(ratings.career_development, 1);
    }

    #[test]
    fn encouragement_lowers_needs() {
        let mut profile = struggling_first_year();
        profile.outside_encouragement =
            [Encouragement::Peers, Encouragement::Teachers].into_iter().collect();
        let ratings = DerivedRatings::compute(&profile);
        assert_eq!(ratings.social_support, 3);
        assert_eq!(ratings.intellectual_support, 4);
    }

    #[test]
    fn intellectual_support_caps_at_five() {
        let mut profile = struggling_first_year();
        profile.self_efficacy = SelfEfficacy::LittleBelief;
        assert_eq!(intellectual_support(&profile), MAX_RATING);
    }

    #[test]
    fn career_development_counts_each_pressure() {
        let profile = StudentProfile {
            financial_factors: FinancialFactors::Loan,
            satisfaction: Satisfaction::Neutral,
            family_responsibilities: FamilyResponsibilities::High,
            ..StudentProfile::default()
        };
        assert_eq!(career_development(&profile), 3);

        let supported = StudentProfile {
            outside_encouragement: [Encouragement::Family].into_iter().collect(),
            ..profile
        };
        assert_eq!(career_development(&supported), 2);
    }

    #[test]
    fn spaced_low_gpa_bucket_still_counts() {
        let raw = RawProfile {
            gpa_range: Some("< 2.0".to_string()),
            ..RawProfile::default()
        };
        let profile = StudentProfile::normalize(&raw);
        assert_eq!(intellectual_support(&profile), 3);
    }

    #[test]
    fn shares_are_thirds() {
        let ratings = DerivedRatings {
            social_support: 4,
            intellectual_support: 3,
            career_development: 1,
        };
        assert!((ratings.social_share() - 4.0 / 3.0).abs() < f64::EPSILON);
        assert!((ratings.intellectual_share() - 1.0).abs() < f64::EPSILON);
        assert!((ratings.career_share() - 1.0 / 3.0).abs() < f64::EPSILON);
    }

    fn arbitrary_profile() -> impl Strategy<Value = StudentProfile> {
        (
            prop::sample::select(vec![
                AcademicDifficulty::Easy,
                AcademicDifficulty::Moderate,
                AcademicDifficulty::Difficult,
            ]),
            prop::sample::select(vec![StressLevel::Low, StressLevel::Moderate, StressLevel::High]),
            prop::sample::select(vec![
                Satisfaction::Dissatisfied,
                Satisfaction::Neutral,
                Satisfaction::Satisfied,
            ]),
            prop::sample::select(vec![
                SelfEfficacy::LittleBelief,
                SelfEfficacy::SomeBelief,
                SelfEfficacy::Moderate,
                SelfEfficacy::StrongBelief,
            ]),
            prop::sample::select(vec![
                GpaRange::Below2_0,
                GpaRange::From2_0To2_5,
                GpaRange::From2_6To3_0,
                GpaRange::From3_1To3_5,
                GpaRange::From3_6To4_0,
            ]),
            prop::sample::select(vec![
                FinancialFactors::WorkIncome,
                FinancialFactors::Loan,
                FinancialFactors::Scholarship,
                FinancialFactors::NotApplicable,
            ]),
            prop::sample::select(vec![
                FamilyResponsibilities::Low,
                FamilyResponsibilities::High,
                FamilyResponsibilities::NotApplicable,
            ]),
            prop::sample::subsequence(
                vec![
                    Encouragement::Peers,
                    Encouragement::Community,
                    Encouragement::Teachers,
                    Encouragement::Family,
                ],
                0..=4,
            ),
        )
            .prop_map(
                |(difficulty, stress, satisfaction, efficacy, gpa, finances, family, sources)| {
                    StudentProfile {
                        academic_difficulty: difficulty,
                        stress_level: stress,
                        satisfaction,
                        self_efficacy: efficacy,
                        gpa_range: gpa,
                        financial_factors: finances,
                        family_responsibilities: family,
                        outside_encouragement: sources.into_iter().collect(),
                        ..StudentProfile::default()
                    }
                },
            )
    }

    proptest! {
        #[test]
        fn ratings_stay_within_bounds(profile in arbitrary_profile()) {
            let ratings = DerivedRatings::compute(&profile);
            for rating in [
                ratings.social_support,
                ratings.intellectual_support,
                ratings.career_development,
            ] {
                prop_assert!((MIN_RATING..=MAX_RATING).contains(&rating));
            }
        }

        #[test]
        fn clamp_is_total(raw in any::<i32>()) {
            let clamped = clamp_rating(raw);
            prop_assert!((MIN_RATING..=MAX_RATING).contains(&clamped));
        }
    }
}
