pub mod exam_impact_handler;
pub mod health_handler;
pub mod short_notes_handler;
pub mod study_planner_handler;

pub use exam_impact_handler::exam_impact;
pub use health_handler::health_check;
pub use short_notes_handler::generate_short_notes;
pub use study_planner_handler::study_planner;
