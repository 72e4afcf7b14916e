use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{NewProfessional, NewStudent};

/// Request to register a student
///
/// The resume file itself is uploaded out-of-band; the payload carries the
/// resulting URL reference.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterStudentRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 1))]
    #[serde(alias = "resume_url", rename = "resumeUrl")]
    pub resume_url: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    #[serde(alias = "opportunity_types", rename = "opportunityTypes")]
    pub opportunity_types: Vec<String>,
}

impl From<RegisterStudentRequest> for NewStudent {
    fn from(req: RegisterStudentRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
            resume_url: req.resume_url,
            interests: req.interests,
            opportunity_types: req.opportunity_types,
        }
    }
}

/// Request to register a professional
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterProfessionalRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub company: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default)]
    #[serde(alias = "available_opportunities", rename = "availableOpportunities")]
    pub available_opportunities: Vec<String>,
}

impl From<RegisterProfessionalRequest> for NewProfessional {
    fn from(req: RegisterProfessionalRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
            title: req.title,
            company: req.company,
            bio: req.bio,
            expertise: req.expertise,
            available_opportunities: req.available_opportunities,
        }
    }
}
