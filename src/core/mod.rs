// Core algorithm exports
pub mod matcher;
pub mod scoring;

pub use matcher::{sort_by_score_desc, MatchEngine};
pub use scoring::{calculate_match_score, overlap_count};
