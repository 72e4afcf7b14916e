use serde::{Deserialize, Serialize};

use crate::models::domain::{Professional, Student};

/// A student's match joined with the professional it points at
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchWithProfessional {
    pub id: String,
    #[serde(rename = "studentId")]
    pub student_id: String,
    #[serde(rename = "professionalId")]
    pub professional_id: String,
    pub score: i32,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub professional: Professional,
}

/// A professional's match joined with the student it points at
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchWithStudent {
    pub id: String,
    #[serde(rename = "studentId")]
    pub student_id: String,
    #[serde(rename = "professionalId")]
    pub professional_id: String,
    pub score: i32,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub student: Student,
}

/// Response for the student match list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentMatchesResponse {
    pub matches: Vec<MatchWithProfessional>,
    pub total: usize,
}

/// Response for the professional match list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionalMatchesResponse {
    pub matches: Vec<MatchWithStudent>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
