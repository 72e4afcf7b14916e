use std::collections::HashSet;

use crate::models::ScoringWeights;

/// Calculate a compatibility score (0-100) between a student and a professional
///
/// Scoring formula:
/// score = round(
///     (interest_overlap / max(|interests|, |expertise|)) * 60 +
///     (opportunity_overlap / max(|opp_types|, |opportunities|)) * 40
/// )
///
/// A dimension with no tags on either side contributes 0 rather than
/// dividing by zero. The function is total over any two pairs of tag sets.
pub fn calculate_match_score(
    student_interests: &[String],
    professional_expertise: &[String],
    student_opportunity_types: &[String],
    professional_opportunities: &[String],
    weights: &ScoringWeights,
) -> u8 {
    let interest_overlap = overlap_count(student_interests, professional_expertise);
    let opportunity_overlap =
        overlap_count(student_opportunity_types, professional_opportunities);

    // The denominator is the larger of the two set sizes, so a party that
    // lists many tags against a counterpart that lists few is penalized on
    // overlap ratio.
    let total_interests = student_interests.len().max(professional_expertise.len());
    let total_opportunities = student_opportunity_types
        .len()
        .max(professional_opportunities.len());

    let interest_score = dimension_score(interest_overlap, total_interests, weights.interest);
    let opportunity_score =
        dimension_score(opportunity_overlap, total_opportunities, weights.opportunity);

    (interest_score + opportunity_score).round().clamp(0.0, 100.0) as u8
}

/// Count the tags common to both sets
///
/// Intersection cardinality: a tag counts once even if it appears more than
/// once in either list.
#[inline]
pub fn overlap_count(a: &[String], b: &[String]) -> usize {
    let b: HashSet<&str> = b.iter().map(String::as_str).collect();
    a.iter()
        .map(String::as_str)
        .collect::<HashSet<&str>>()
        .into_iter()
        .filter(|tag| b.contains(tag))
        .count()
}

#[inline]
fn dimension_score(overlap: usize, total: usize, weight: f64) -> f64 {
    if total > 0 {
        (overlap as f64 / total as f64) * weight
    } else {
        0.0
    }
}
