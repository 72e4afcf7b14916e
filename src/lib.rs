//! Mentor Match - matching service for the MentorMatch mentorship platform
//!
//! This library pairs registered students with professionals. On each
//! registration it scores the new record against every existing counterpart
//! and persists a match row for every pair with a positive compatibility
//! score.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, sort_by_score_desc, MatchEngine};
pub use crate::models::{Match, Professional, ScoringWeights, Student};
