use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::{Match, NewProfessional, NewStudent, Professional, Student};
use crate::services::store::{MatchStore, StoreError};

/// PostgreSQL-backed match store
///
/// Note: the matches table carries no uniqueness constraint on
/// (student_id, professional_id); duplicate protection lives in the
/// professional-side generation path only.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }
}

fn student_from_row(row: &PgRow) -> Student {
    Student {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        phone: row.get("phone"),
        resume_url: row.get("resume_url"),
        interests: row.get("interests"),
        opportunity_types: row.get("opportunity_types"),
        created_at: row.get("created_at"),
    }
}

fn professional_from_row(row: &PgRow) -> Professional {
    Professional {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        phone: row.get("phone"),
        title: row.get("title"),
        company: row.get("company"),
        bio: row.get("bio"),
        expertise: row.get("expertise"),
        available_opportunities: row.get("available_opportunities"),
        created_at: row.get("created_at"),
    }
}

fn match_from_row(row: &PgRow) -> Match {
    Match {
        id: row.get("id"),
        student_id: row.get("student_id"),
        professional_id: row.get("professional_id"),
        score: row.get("score"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl MatchStore for PostgresStore {
    async fn create_student(&self, new: NewStudent) -> Result<Student, StoreError> {
        let student = Student {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            resume_url: new.resume_url,
            interests: new.interests,
            opportunity_types: new.opportunity_types,
            created_at: chrono::Utc::now(),
        };

        let query = r#"
            INSERT INTO students (id, name, email, phone, resume_url, interests, opportunity_types, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#;

        sqlx::query(query)
            .bind(&student.id)
            .bind(&student.name)
            .bind(&student.email)
            .bind(&student.phone)
            .bind(&student.resume_url)
            .bind(&student.interests)
            .bind(&student.opportunity_types)
            .bind(student.created_at)
            .execute(&self.pool)
            .await?;

        tracing::debug!("Created student {}", student.id);

        Ok(student)
    }

    async fn get_student(&self, id: &str) -> Result<Option<Student>, StoreError> {
        let row = sqlx::query("SELECT * FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(student_from_row))
    }

    async fn get_all_students(&self) -> Result<Vec<Student>, StoreError> {
        let rows = sqlx::query("SELECT * FROM students ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(student_from_row).collect())
    }

    async fn create_professional(
        &self,
        new: NewProfessional,
    ) -> Result<Professional, StoreError> {
        let professional = Professional {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            title: new.title,
            company: new.company,
            bio: new.bio,
            expertise: new.expertise,
            available_opportunities: new.available_opportunities,
            created_at: chrono::Utc::now(),
        };

        let query = r#"
            INSERT INTO professionals (id, name, email, phone, title, company, bio, expertise, available_opportunities, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        "#;

        sqlx::query(query)
            .bind(&professional.id)
            .bind(&professional.name)
            .bind(&professional.email)
            .bind(&professional.phone)
            .bind(&professional.title)
            .bind(&professional.company)
            .bind(&professional.bio)
            .bind(&professional.expertise)
            .bind(&professional.available_opportunities)
            .bind(professional.created_at)
            .execute(&self.pool)
            .await?;

        tracing::debug!("Created professional {}", professional.id);

        Ok(professional)
    }

    async fn get_professional(&self, id: &str) -> Result<Option<Professional>, StoreError> {
        let row = sqlx::query("SELECT * FROM professionals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(professional_from_row))
    }

    async fn get_all_professionals(&self) -> Result<Vec<Professional>, StoreError> {
        let rows = sqlx::query("SELECT * FROM professionals ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(professional_from_row).collect())
    }

    async fn create_match(
        &self,
        student_id: &str,
        professional_id: &str,
        score: i32,
    ) -> Result<Match, StoreError> {
        let record = Match {
            id: Uuid::new_v4().to_string(),
            student_id: student_id.to_string(),
            professional_id: professional_id.to_string(),
            score,
            created_at: chrono::Utc::now(),
        };

        let query = r#"
            INSERT INTO matches (id, student_id, professional_id, score, created_at)
            VALUES ($1, $2, $3, $4, $5)
        "#;

        sqlx::query(query)
            .bind(&record.id)
            .bind(&record.student_id)
            .bind(&record.professional_id)
            .bind(record.score)
            .bind(record.created_at)
            .execute(&self.pool)
            .await?;

        tracing::debug!(
            "Created match {} -> {} (score {})",
            record.student_id,
            record.professional_id,
            record.score
        );

        Ok(record)
    }

    async fn get_matches_for_student(&self, student_id: &str) -> Result<Vec<Match>, StoreError> {
        let rows = sqlx::query("SELECT * FROM matches WHERE student_id = $1")
            .bind(student_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(match_from_row).collect())
    }

    async fn get_matches_for_professional(
        &self,
        professional_id: &str,
    ) -> Result<Vec<Match>, StoreError> {
        let rows = sqlx::query("SELECT * FROM matches WHERE professional_id = $1")
            .bind(professional_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(match_from_row).collect())
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
