use serde::{Deserialize, Serialize};

/// Fields of interest/expertise that the registration UI offers.
///
/// Tags are free text at this layer; the vocabulary is kept here for
/// reference and test data, not enforced on insert.
pub const FIELD_OPTIONS: [&str; 15] = [
    "Software Engineering",
    "Data Science",
    "Product Management",
    "Marketing",
    "Finance",
    "Consulting",
    "Healthcare",
    "Education",
    "Design",
    "Sales",
    "Operations",
    "Human Resources",
    "Legal",
    "Research",
    "Entrepreneurship",
];

/// Opportunity types that the registration UI offers.
pub const OPPORTUNITY_OPTIONS: [&str; 3] = ["Mentoring", "Internship", "Job Shadowing"];

/// A registered student looking for mentorship opportunities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "resumeUrl")]
    pub resume_url: String,
    pub interests: Vec<String>,
    #[serde(rename = "opportunityTypes")]
    pub opportunity_types: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A registered professional offering mentorship opportunities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professional {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub title: String,
    pub company: String,
    pub bio: String,
    pub expertise: Vec<String>,
    #[serde(rename = "availableOpportunities")]
    pub available_opportunities: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Insert payload for a student (id and timestamp assigned by the store)
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub resume_url: String,
    pub interests: Vec<String>,
    pub opportunity_types: Vec<String>,
}

/// Insert payload for a professional
#[derive(Debug, Clone)]
pub struct NewProfessional {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub title: String,
    pub company: String,
    pub bio: String,
    pub expertise: Vec<String>,
    pub available_opportunities: Vec<String>,
}

/// A persisted student/professional pairing with its compatibility score
///
/// Matches are written once at registration time and never updated; the
/// score is not recomputed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    #[serde(rename = "studentId")]
    pub student_id: String,
    #[serde(rename = "professionalId")]
    pub professional_id: String,
    pub score: i32,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Scoring weights
///
/// Interest alignment is the dominant signal, opportunity-type alignment
/// secondary. The two weights are also the maximum points each dimension
/// can contribute, so they should sum to 100.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub interest: f64,
    pub opportunity: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            interest: 60.0,
            opportunity: 40.0,
        }
    }
}
