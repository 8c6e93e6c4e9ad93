pub mod notice;
pub mod plan;
pub mod profile;

pub use notice::{ExamImpactResult, ExamNotice, NoticeCategory, NoticePriority};
pub use plan::{Day, PlanSummary, Session, SessionType, StudyPlan, Week};
pub use profile::ExamProfile;
