use std::sync::Arc;

use super::common::*;
use crate::catalog::CatalogSnapshot;
use crate::profiles::{RecommendationService, RepositoryError, ServiceError};
use crate::recommendations::{Category, RawProfile, RecommendationError, Recommendations};

#[test]
fn signup_requires_an_email() {
    let (service, repository) = build_service(snapshot());
    let mut profile = student("");
    profile.email = Some("   ".to_string());

    assert!(matches!(service.signup(profile), Err(ServiceError::MissingEmail)));
    assert!(repository.profiles.lock().expect("lock").is_empty());
}

#[test]
fn signup_then_signin_round_trips_the_document() {
    let (service, _) = build_service(snapshot());
    let email = service
        .signup(student(" temoc@utdallas.edu "))
        .expect("signup succeeds");
    assert_eq!(email, "temoc@utdallas.edu");

    let stored = service.signin("temoc@utdallas.edu").expect("signin succeeds");
    assert_eq!(stored.email.as_deref(), Some("temoc@utdallas.edu"));
    assert_eq!(stored.major.as_deref(), Some("Computer Science"));
}

#[test]
fn update_requires_an_existing_profile() {
    let (service, _) = build_service(snapshot());
    let result = service.update_profile("ghost@utdallas.edu", RawProfile::default());
    assert!(matches!(
        result,
        Err(ServiceError::Repository(RepositoryError::NotFound))
    ));

    service.signup(student("temoc@utdallas.edu")).expect("signup");
    let updated = service
        .update_profile(
            "temoc@utdallas.edu",
            RawProfile {
                email: Some("someone-else@utdallas.edu".to_string()),
                major: Some("History".to_string()),
                ..RawProfile::default()
            },
        )
        .expect("update succeeds");
    assert_eq!(updated.email.as_deref(), Some("temoc@utdallas.edu"));
    assert_eq!(
        service.profile("temoc@utdallas.edu").expect("stored").major.as_deref(),
        Some("History")
    );
}

#[test]
fn organization_recommendations_rank_by_score() {
    let (service, _) = build_service(snapshot());
    service.signup(student("temoc@utdallas.edu")).expect("signup");

    let response = service
        .recommend("temoc@utdallas.edu", "orgs")
        .expect("recommendations");

    assert_eq!(response.category, Category::Organizations);
    assert_eq!(response.recommendations.scores(), vec![5.0, 2.83, 1.83]);
    assert_eq!(
        response.advising_link,
        "https://engineering.utdallas.edu/academics/undergraduate-majors/undergrad-advising/"
    );
    assert_eq!(
        response.major_colors.get("Computer Science").copied(),
        Some("#f4a261")
    );
}

#[test]
fn tutoring_recommendations_drop_ineligible_sessions() {
    let (service, _) = build_service(snapshot());
    service.signup(student("temoc@utdallas.edu")).expect("signup");

    let response = service
        .recommend("temoc@utdallas.edu", "tutoring")
        .expect("recommendations");

    let Recommendations::Tutoring(sessions) = response.recommendations else {
        panic!("expected tutoring results");
    };
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].record.details["Subject"], "Calculus");
    assert_eq!(sessions[0].score, 3.67);
}

#[test]
fn unknown_category_is_rejected() {
    let (service, _) = build_service(snapshot());
    service.signup(student("temoc@utdallas.edu")).expect("signup");

    let result = service.recommend("temoc@utdallas.edu", "courses");
    assert!(matches!(
        result,
        Err(ServiceError::Recommendation(RecommendationError::UnknownCategory(category)))
            if category == "courses"
    ));
}

#[test]
fn missing_catalog_is_reported_as_unavailable() {
    let (service, _) = build_service(CatalogSnapshot::default());
    service.signup(student("temoc@utdallas.edu")).expect("signup");

    let result = service.recommend("temoc@utdallas.edu", "events");
    assert!(matches!(
        result,
        Err(ServiceError::Recommendation(RecommendationError::DataUnavailable(
            Category::Events
        )))
    ));
}

#[test]
fn empty_catalog_is_not_unavailable() {
    let (service, _) = build_service(CatalogSnapshot::new(Some(Vec::new()), None, None));
    service.signup(student("temoc@utdallas.edu")).expect("signup");

    let response = service
        .recommend("temoc@utdallas.edu", "orgs")
        .expect("empty but available");
    assert!(response.recommendations.is_empty());
}

#[test]
fn repository_outages_propagate() {
    let service = RecommendationService::new(Arc::new(UnavailableRepository), store(snapshot()));
    assert!(matches!(
        service.recommend("temoc@utdallas.edu", "orgs"),
        Err(ServiceError::Repository(RepositoryError::Unavailable(_)))
    ));
}

#[test]
fn reload_from_an_empty_directory_marks_categories_unavailable() {
    let (service, _) = build_service(snapshot());
    assert!(service.catalogs().snapshot().organizations.is_some());

    let counts = service.reload_catalogs().expect("missing files are not errors");

    assert_eq!(counts.orgs, None);
    assert!(service.catalogs().snapshot().organizations.is_none());
}
