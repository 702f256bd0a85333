use std::collections::BTreeSet;

use crate::catalog::CatalogSnapshot;
use crate::recommendations::profile::{
    AcademicDifficulty, GpaRange, Satisfaction, StressLevel, StudentProfile, Year,
};
use crate::recommendations::records::{EventRecord, OrgRecord, TutoringRecord, ANY_MAJOR};

pub(super) fn struggling_first_year() -> StudentProfile {
    StudentProfile {
        year: Year::First,
        gpa_range: GpaRange::Below2_0,
        major: "Computer Science".to_string(),
        academic_difficulty: AcademicDifficulty::Difficult,
        stress_level: StressLevel::High,
        satisfaction: Satisfaction::Dissatisfied,
        interests: BTreeSet::from(["Social".to_string()]),
        ..StudentProfile::default()
    }
}

pub(super) fn org(name: &str, category: &str, majors: &str, specific: &[&str]) -> OrgRecord {
    OrgRecord {
        category: category.to_string(),
        majors: majors.to_string(),
        specific_majors: specific.iter().map(|major| major.to_string()).collect(),
        details: [("Name".to_string(), name.to_string())].into_iter().collect(),
    }
}

/// Twenty organizations with a spread of scores for a first-year CS student.
pub(super) fn twenty_organizations() -> Vec<OrgRecord> {
    (0..20)
        .map(|index| match index % 4 {
            0 => org(&format!("Social {index}"), "Social", ANY_MAJOR, &[]),
            1 => org(&format!("Service {index}"), "Service", "", &[]),
            2 => org(
                &format!("Engineering {index}"),
                "Academic Interests",
                "Erik Jonsson School of Engineering and Computer Science",
                &[],
            ),
            _ => org(&format!("Open {index}"), "Service", ANY_MAJOR, &[]),
        })
        .collect()
}

pub(super) fn event(url: &str) -> EventRecord {
    EventRecord {
        category: "Social".to_string(),
        start_time: Some("2024-09-05T14:30:00".to_string()),
        end_time: Some(String::new()),
        url: Some(url.to_string()),
        details: Default::default(),
    }
}

pub(super) fn tutoring(subject: &str, majors: &str) -> TutoringRecord {
    TutoringRecord::new(
        Some(majors.to_string()),
        [("Subject".to_string(), subject.to_string())]
            .into_iter()
            .collect(),
    )
}

pub(super) fn catalog() -> CatalogSnapshot {
    CatalogSnapshot::new(
        Some(twenty_organizations()),
        Some(
            (0..10)
                .map(|index| event(&format!("https://calendar.utdallas.edu/event/meetup-{index}")))
                .collect(),
        ),
        Some(vec![
            tutoring("Calculus", "All Majors"),
            tutoring("Circuits", "Electrical Engineering, Computer Engineering"),
            tutoring("Data Structures", "Computer Science, Software Engineering"),
        ]),
    )
}
