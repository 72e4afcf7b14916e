use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Match, NewProfessional, NewStudent, Professional, Student};
use crate::services::store::{MatchStore, StoreError};

/// In-memory match store
///
/// Keeps all records in process-wide maps with no persistence. Used as the
/// backend when no database URL is configured, and by tests as a fake for
/// the storage contract.
#[derive(Debug, Default)]
pub struct MemoryStore {
    students: RwLock<HashMap<String, Student>>,
    professionals: RwLock<HashMap<String, Professional>>,
    matches: RwLock<Vec<Match>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MatchStore for MemoryStore {
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
        self.students
            .write()
            .await
            .insert(student.id.clone(), student.clone());
        Ok(student)
    }

    async fn get_student(&self, id: &str) -> Result<Option<Student>, StoreError> {
        Ok(self.students.read().await.get(id).cloned())
    }

    async fn get_all_students(&self) -> Result<Vec<Student>, StoreError> {
        Ok(self.students.read().await.values().cloned().collect())
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
        self.professionals
            .write()
            .await
            .insert(professional.id.clone(), professional.clone());
        Ok(professional)
    }

    async fn get_professional(&self, id: &str) -> Result<Option<Professional>, StoreError> {
        Ok(self.professionals.read().await.get(id).cloned())
    }

    async fn get_all_professionals(&self) -> Result<Vec<Professional>, StoreError> {
        Ok(self.professionals.read().await.values().cloned().collect())
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
        self.matches.write().await.push(record.clone());
        Ok(record)
    }

    async fn get_matches_for_student(&self, student_id: &str) -> Result<Vec<Match>, StoreError> {
        Ok(self
            .matches
            .read()
            .await
            .iter()
            .filter(|m| m.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn get_matches_for_professional(
        &self,
        professional_id: &str,
    ) -> Result<Vec<Match>, StoreError> {
        Ok(self
            .matches
            .read()
            .await
            .iter()
            .filter(|m| m.professional_id == professional_id)
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
