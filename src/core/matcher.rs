use std::cmp::Reverse;

use crate::core::scoring::calculate_match_score;
use crate::models::ScoringWeights;
use crate::services::store::{MatchStore, StoreError};

/// Match generation engine
///
/// Runs once per registration: scores the new record against every existing
/// counterpart and persists a match row for each pair scoring above zero.
/// Generation is sequential and aborts on the first store error; matches
/// persisted before the failure are left in place (no rollback).
#[derive(Debug, Clone)]
pub struct MatchEngine {
    weights: ScoringWeights,
}

impl MatchEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Generate matches for a newly registered student
    ///
    /// An absent student id is a benign race (the caller holds a freshly
    /// created id), so it is a silent no-op rather than an error. This path
    /// performs no existence check before insert: the student is new, so no
    /// prior match for them can exist. Calling it again for the same id
    /// therefore duplicates rows.
    ///
    /// Returns the number of matches persisted.
    pub async fn generate_for_student(
        &self,
        store: &dyn MatchStore,
        student_id: &str,
    ) -> Result<usize, StoreError> {
        let Some(student) = store.get_student(student_id).await? else {
            tracing::debug!("Student {} not found, skipping match generation", student_id);
            return Ok(0);
        };

        let professionals = store.get_all_professionals().await?;
        let mut created = 0;

        for professional in professionals {
            let score = calculate_match_score(
                &student.interests,
                &professional.expertise,
                &student.opportunity_types,
                &professional.available_opportunities,
                &self.weights,
            );

            if score > 0 {
                store
                    .create_match(&student.id, &professional.id, score as i32)
                    .await?;
                created += 1;
            }
        }

        tracing::info!(
            "Generated {} matches for student {}",
            created,
            student_id
        );

        Ok(created)
    }

    /// Generate matches for a newly registered professional
    ///
    /// Mirrors the student path, but checks each student's existing matches
    /// before insert so a pair that already got matched through another flow
    /// is not duplicated. The check is not atomic with the insert; a
    /// simultaneous student registration can still race in a duplicate.
    pub async fn generate_for_professional(
        &self,
        store: &dyn MatchStore,
        professional_id: &str,
    ) -> Result<usize, StoreError> {
        let Some(professional) = store.get_professional(professional_id).await? else {
            tracing::debug!(
                "Professional {} not found, skipping match generation",
                professional_id
            );
            return Ok(0);
        };

        let students = store.get_all_students().await?;
        let mut created = 0;

        for student in students {
            let score = calculate_match_score(
                &student.interests,
                &professional.expertise,
                &student.opportunity_types,
                &professional.available_opportunities,
                &self.weights,
            );

            if score > 0 {
                let existing = store.get_matches_for_student(&student.id).await?;
                let already_matched = existing
                    .iter()
                    .any(|m| m.professional_id == professional.id);

                if !already_matched {
                    store
                        .create_match(&student.id, &professional.id, score as i32)
                        .await?;
                    created += 1;
                }
            }
        }

        tracing::info!(
            "Generated {} matches for professional {}",
            created,
            professional_id
        );

        Ok(created)
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Sort items descending by score, preserving insertion order on ties
///
/// The ordering contract for match lists: highest score first, no explicit
/// secondary key.
pub fn sort_by_score_desc<T>(items: &mut [T], score: impl Fn(&T) -> i32) {
    items.sort_by_key(|item| Reverse(score(item)));
}
