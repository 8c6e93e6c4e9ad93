use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticePriority {
    Urgent,
    Important,
    Info,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeCategory {
    Syllabus,
    Schedule,
    Pattern,
    Eligibility,
    Result,
    General,
}

/// A single exam-related news item produced by the model for a profile.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamNotice {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub source: String, // e.g. NTA, CBSE, State Board
    pub source_url: String,
    pub date: NaiveDate,
    pub priority: NoticePriority,
    pub impact_score: u8, // 1-10
    pub impact_analysis: String,
    #[serde(default)]
    pub action_items: Vec<String>,
    #[serde(default)]
    pub affected_subjects: Vec<String>,
    pub category: NoticeCategory,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamImpactResult {
    pub notices: Vec<ExamNotice>,
    pub last_updated: String, // ISO datetime
    pub profile_summary: String,
}
