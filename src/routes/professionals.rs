use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::sort_by_score_desc;
use crate::models::{
    ErrorResponse, MatchWithStudent, ProfessionalMatchesResponse, RegisterProfessionalRequest,
};
use crate::routes::AppState;
use crate::services::MatchStore;

/// Configure professional routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/professionals/register",
        web::post().to(register_professional),
    )
    .route("/professionals/{id}", web::get().to(get_professional))
    .route(
        "/professionals/{id}/matches",
        web::get().to(get_professional_matches),
    );
}

/// Register a new professional and generate matches against all students
///
/// POST /api/professionals/register
async fn register_professional(
    state: web::Data<AppState>,
    req: web::Json<RegisterProfessionalRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for professional registration: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let professional = match state
        .store
        .create_professional(req.into_inner().into())
        .await
    {
        Ok(professional) => professional,
        Err(e) => {
            tracing::error!("Failed to create professional: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Registration failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    tracing::info!("Registered professional {}", professional.id);

    if let Err(e) = state
        .engine
        .generate_for_professional(state.store.as_ref(), &professional.id)
        .await
    {
        tracing::error!(
            "Match generation failed for professional {}: {}",
            professional.id,
            e
        );
    }

    HttpResponse::Ok().json(professional)
}

/// Fetch a single professional
///
/// GET /api/professionals/{id}
async fn get_professional(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.store.get_professional(&id).await {
        Ok(Some(professional)) => HttpResponse::Ok().json(professional),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Not found".to_string(),
            message: format!("Professional {} not found", id),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to fetch professional {}: {}", id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch professional".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// List a professional's matches, best score first
///
/// GET /api/professionals/{id}/matches
async fn get_professional_matches(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    let mut matches = match state.store.get_matches_for_professional(&id).await {
        Ok(matches) => matches,
        Err(e) => {
            tracing::error!("Failed to fetch matches for professional {}: {}", id, e);
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
        match state.store.get_student(&m.student_id).await {
            Ok(Some(student)) => enriched.push(MatchWithStudent {
                id: m.id,
                student_id: m.student_id,
                professional_id: m.professional_id,
                score: m.score,
                created_at: m.created_at,
                student,
            }),
            Ok(None) => {
                tracing::warn!("Match {} references missing student {}", m.id, m.student_id);
            }
            Err(e) => {
                tracing::error!("Failed to fetch student {}: {}", m.student_id, e);
                return HttpResponse::InternalServerError().json(ErrorResponse {
                    error: "Failed to fetch matches".to_string(),
                    message: e.to_string(),
                    status_code: 500,
                });
            }
        }
    }

    let total = enriched.len();
    HttpResponse::Ok().json(ProfessionalMatchesResponse {
        matches: enriched,
        total,
    })
}
