// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Match, NewProfessional, NewStudent, Professional, ScoringWeights, Student, FIELD_OPTIONS,
    OPPORTUNITY_OPTIONS,
};
pub use requests::{RegisterProfessionalRequest, RegisterStudentRequest};
pub use responses::{
    ErrorResponse, HealthResponse, MatchWithProfessional, MatchWithStudent,
    ProfessionalMatchesResponse, StudentMatchesResponse,
};
