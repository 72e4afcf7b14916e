// Integration tests for the MentorMatch service
//
// Runs the full registration-to-matching flow against the in-memory store,
// both through the engine directly and over HTTP with the real route
// configuration.

use std::sync::Arc;

use actix_web::{test, web, App};
use serde_json::json;

use mentor_match::core::MatchEngine;
use mentor_match::models::{
    NewProfessional, NewStudent, ProfessionalMatchesResponse, Student, StudentMatchesResponse,
};
use mentor_match::routes::{configure_routes, AppState};
use mentor_match::services::{MatchStore, MemoryStore};

fn new_student(email: &str, interests: &[&str], opportunities: &[&str]) -> NewStudent {
    NewStudent {
        name: "Sam Student".to_string(),
        email: email.to_string(),
        phone: "555-0100".to_string(),
        resume_url: "/uploads/resume.pdf".to_string(),
        interests: interests.iter().map(|s| s.to_string()).collect(),
        opportunity_types: opportunities.iter().map(|s| s.to_string()).collect(),
    }
}

fn new_professional(email: &str, expertise: &[&str], opportunities: &[&str]) -> NewProfessional {
    NewProfessional {
        name: "Pat Professional".to_string(),
        email: email.to_string(),
        phone: "555-0200".to_string(),
        title: "VP Finance".to_string(),
        company: "Acme Corp".to_string(),
        bio: "Twenty years in the field.".to_string(),
        expertise: expertise.iter().map(|s| s.to_string()).collect(),
        available_opportunities: opportunities.iter().map(|s| s.to_string()).collect(),
    }
}

#[tokio::test]
async fn test_student_registration_matches_existing_professional() {
    let store = MemoryStore::new();
    let engine = MatchEngine::with_default_weights();

    let professional = store
        .create_professional(new_professional("p@acme.dev", &["Finance"], &["Mentoring"]))
        .await
        .unwrap();
    let student = store
        .create_student(new_student("s@uni.dev", &["Finance"], &["Mentoring"]))
        .await
        .unwrap();

    let created = engine
        .generate_for_student(&store, &student.id)
        .await
        .unwrap();
    assert_eq!(created, 1);

    let matches = store.get_matches_for_student(&student.id).await.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].professional_id, professional.id);
    assert_eq!(matches[0].score, 100);
}

#[tokio::test]
async fn test_zero_score_professional_gets_no_match() {
    let store = MemoryStore::new();
    let engine = MatchEngine::with_default_weights();

    store
        .create_professional(new_professional("legal@acme.dev", &["Legal"], &[]))
        .await
        .unwrap();
    let student = store
        .create_student(new_student("s@uni.dev", &["Finance"], &["Mentoring"]))
        .await
        .unwrap();

    let created = engine
        .generate_for_student(&store, &student.id)
        .await
        .unwrap();
    assert_eq!(created, 0);
    assert!(store
        .get_matches_for_student(&student.id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_professional_registration_matches_all_students() {
    let store = MemoryStore::new();
    let engine = MatchEngine::with_default_weights();

    store
        .create_student(new_student("s1@uni.dev", &["Finance"], &["Mentoring"]))
        .await
        .unwrap();
    store
        .create_student(new_student("s2@uni.dev", &["Finance", "Design"], &["Internship"]))
        .await
        .unwrap();
    store
        .create_student(new_student("s3@uni.dev", &["Legal"], &["Job Shadowing"]))
        .await
        .unwrap();

    let professional = store
        .create_professional(new_professional(
            "p@acme.dev",
            &["Finance"],
            &["Mentoring", "Internship"],
        ))
        .await
        .unwrap();

    let created = engine
        .generate_for_professional(&store, &professional.id)
        .await
        .unwrap();

    // s1 and s2 overlap on Finance; s3 overlaps on nothing
    assert_eq!(created, 2);
    assert_eq!(
        store
            .get_matches_for_professional(&professional.id)
            .await
            .unwrap()
            .len(),
        2
    );
}

#[actix_web::test]
async fn test_http_end_to_end_matching() {
    let state = AppState {
        store: Arc::new(MemoryStore::new()),
        engine: MatchEngine::with_default_weights(),
    };

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    // Register a professional first
    let req = test::TestRequest::post()
        .uri("/api/professionals/register")
        .set_json(json!({
            "name": "Pat Professional",
            "email": "pat@acme.dev",
            "phone": "555-0200",
            "title": "VP Finance",
            "company": "Acme Corp",
            "bio": "Twenty years in the field.",
            "expertise": ["Finance"],
            "availableOpportunities": ["Mentoring"],
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    // Register a student whose profile fully overlaps
    let req = test::TestRequest::post()
        .uri("/api/students/register")
        .set_json(json!({
            "name": "Sam Student",
            "email": "sam@uni.dev",
            "phone": "555-0100",
            "resumeUrl": "/uploads/sam.pdf",
            "interests": ["Finance"],
            "opportunityTypes": ["Mentoring"],
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let student: Student = test::read_body_json(resp).await;

    // The student's match list contains exactly the professional at score 100
    let req = test::TestRequest::get()
        .uri(&format!("/api/students/{}/matches", student.id))
        .to_request();
    let body: StudentMatchesResponse =
        test::read_body_json(test::call_service(&app, req).await).await;

    assert_eq!(body.total, 1);
    assert_eq!(body.matches[0].score, 100);
    assert_eq!(body.matches[0].professional.email, "pat@acme.dev");
}

#[actix_web::test]
async fn test_http_matches_sorted_by_score() {
    let store = Arc::new(MemoryStore::new());
    let state = AppState {
        store: store.clone(),
        engine: MatchEngine::with_default_weights(),
    };

    let professional = store
        .create_professional(new_professional("p@acme.dev", &["Finance"], &["Mentoring"]))
        .await
        .unwrap();
    let s1 = store
        .create_student(new_student("s1@uni.dev", &[], &[]))
        .await
        .unwrap();
    let s2 = store
        .create_student(new_student("s2@uni.dev", &[], &[]))
        .await
        .unwrap();
    let s3 = store
        .create_student(new_student("s3@uni.dev", &[], &[]))
        .await
        .unwrap();

    // Seed matches out of order
    store.create_match(&s1.id, &professional.id, 30).await.unwrap();
    store.create_match(&s2.id, &professional.id, 90).await.unwrap();
    store.create_match(&s3.id, &professional.id, 60).await.unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/professionals/{}/matches", professional.id))
        .to_request();
    let body: ProfessionalMatchesResponse =
        test::read_body_json(test::call_service(&app, req).await).await;

    let scores: Vec<i32> = body.matches.iter().map(|m| m.score).collect();
    assert_eq!(scores, vec![90, 60, 30]);
}

#[actix_web::test]
async fn test_http_validation_failure_is_400() {
    let state = AppState {
        store: Arc::new(MemoryStore::new()),
        engine: MatchEngine::with_default_weights(),
    };

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    // Missing email format and empty name
    let req = test::TestRequest::post()
        .uri("/api/students/register")
        .set_json(json!({
            "name": "",
            "email": "not-an-email",
            "phone": "555-0100",
            "resumeUrl": "/uploads/sam.pdf",
            "interests": ["Finance"],
            "opportunityTypes": ["Mentoring"],
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_http_unknown_student_is_404() {
    let state = AppState {
        store: Arc::new(MemoryStore::new()),
        engine: MatchEngine::with_default_weights(),
    };

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/students/does-not-exist")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_http_health_check() {
    let state = AppState {
        store: Arc::new(MemoryStore::new()),
        engine: MatchEngine::with_default_weights(),
    };

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}
