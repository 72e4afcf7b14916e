use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::sort_by_score_desc;
use crate::models::{
    ErrorResponse, MatchWithProfessional, RegisterStudentRequest, StudentMatchesResponse,
};
use crate::routes::AppState;
use crate::services::MatchStore;

/// Configure student routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/students/register", web::post().to(register_student))
        .route("/students/{id}", web::get().to(get_student))
        .route("/students/{id}/matches", web::get().to(get_student_matches));
}

/// Register a new student and generate their matches
///
/// POST /api/students/register
///
/// The response carries the created record. Match generation runs before
/// the response is sent, but its failures are only logged: from the
/// client's perspective registration already succeeded.
async fn register_student(
    state: web::Data<AppState>,
    req: web::Json<RegisterStudentRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for student registration: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let student = match state.store.create_student(req.into_inner().into()).await {
        Ok(student) => student,
        Err(e) => {
            tracing::error!("Failed to create student: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Registration failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    tracing::info!("Registered student {}", student.id);

    if let Err(e) = state
        .engine
        .generate_for_student(state.store.as_ref(), &student.id)
        .await
    {
        tracing::error!("Match generation failed for student {}: {}", student.id, e);
    }

    HttpResponse::Ok().json(student)
}

/// Fetch a single student
///
/// GET /api/students/{id}
async fn get_student(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.store.get_student(&id).await {
        Ok(Some(student)) => HttpResponse::Ok().json(student),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Not found".to_string(),
            message: format!("Student {} not found", id),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to fetch student {}: {}", id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch student".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// List a student's matches, best score first
///
/// GET /api/students/{id}/matches
async fn get_student_matches(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    let mut matches = match state.store.get_matches_for_student(&id).await {
        Ok(matches) => matches,
        Err(e) => {
            tracing::error!("Failed to fetch matches for student {}: {}", id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch matches".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    sort_by_score_desc(&mut matches, |m| m.score);

    let mut enriched = Vec::with_capacity(matches.len());
    for m in matches {
        match state.store.get_professional(&m.professional_id).await {
            Ok(Some(professional)) => enriched.push(MatchWithProfessional {
                id: m.id,
                student_id: m.student_id,
                professional_id: m.professional_id,
                score: m.score,
                created_at: m.created_at,
                professional,
            }),
            Ok(None) => {
                tracing::warn!(
                    "Match {} references missing professional {}",
                    m.id,
                    m.professional_id
                );
            }
            Err(e) => {
                tracing::error!("Failed to fetch professional {}: {}", m.professional_id, e);
                return HttpResponse::InternalServerError().json(ErrorResponse {
                    error: "Failed to fetch matches".to_string(),
                    message: e.to_string(),
                    status_code: 500,
                });
            }
        }
    }

    let total = enriched.len();
    HttpResponse::Ok().json(StudentMatchesResponse {
        matches: enriched,
        total,
    })
}
