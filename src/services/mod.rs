pub mod exam_impact_service;
pub mod gateway;
pub mod normalizer;
pub mod prompt_builder;
pub mod short_notes_service;
pub mod study_planner_service;

pub use exam_impact_service::ExamImpactService;
pub use short_notes_service::ShortNotesService;
pub use study_planner_service::StudyPlannerService;
