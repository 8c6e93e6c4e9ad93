pub mod request;
pub mod response;

pub use request::{ExamImpactRequest, GenerateShortNotesRequest, PlannerInput, PlannerSubject};
pub use response::ShortNotesResult;
