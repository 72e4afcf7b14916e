use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Match, NewProfessional, NewStudent, Professional, Student};

/// Errors that can occur when interacting with the match store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Persistence contract for students, professionals, and matches
///
/// The matching core is storage-agnostic: it only sees this trait, so it
/// runs identically against PostgreSQL in production and the in-memory
/// store in tests.
#[async_trait]
pub trait MatchStore: Send + Sync {
    async fn create_student(&self, new: NewStudent) -> Result<Student, StoreError>;
    async fn get_student(&self, id: &str) -> Result<Option<Student>, StoreError>;
    async fn get_all_students(&self) -> Result<Vec<Student>, StoreError>;

    async fn create_professional(&self, new: NewProfessional)
        -> Result<Professional, StoreError>;
    async fn get_professional(&self, id: &str) -> Result<Option<Professional>, StoreError>;
    async fn get_all_professionals(&self) -> Result<Vec<Professional>, StoreError>;

    /// Persist a match row for the given pair
    ///
    /// No uniqueness is enforced here: callers that must not duplicate a
    /// pair check for an existing match first.
    async fn create_match(
        &self,
        student_id: &str,
        professional_id: &str,
        score: i32,
    ) -> Result<Match, StoreError>;
    async fn get_matches_for_student(&self, student_id: &str) -> Result<Vec<Match>, StoreError>;
    async fn get_matches_for_professional(
        &self,
        professional_id: &str,
    ) -> Result<Vec<Match>, StoreError>;

    /// Health check for the backing store
    async fn health_check(&self) -> Result<bool, StoreError>;
}
