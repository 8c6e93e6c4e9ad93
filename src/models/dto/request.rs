use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::ExamProfile;

/// Body of `POST /exam-impact`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExamImpactRequest {
    #[serde(default)]
    pub profile: Option<ExamProfile>,
}

impl ExamImpactRequest {
    /// Unwraps the profile, rejecting a missing profile or blank exam name.
    pub fn into_profile(self) -> AppResult<ExamProfile> {
        match self.profile {
            Some(profile) if profile.has_exam_name() => Ok(profile),
            _ => Err(AppError::ValidationError(
                "Profile with exam name is required".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlannerSubject {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// Body of `POST /study-planner`. Fields default so that an incomplete body
/// reaches the enumerated-fields validation instead of a serde error.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerInput {
    #[serde(default)]
    pub exam_name: String,
    #[serde(default)]
    pub subjects: Vec<PlannerSubject>,
    #[serde(default)]
    pub days_left: u32,
    #[serde(default)]
    pub daily_hours: u32,
    #[serde(default)]
    pub start_date: String, // ISO date, supplied by the caller
}

impl PlannerInput {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.exam_name.trim().is_empty() {
            missing.push("examName");
        }
        if self.subjects.is_empty() {
            missing.push("subjects");
        }
        if self.days_left == 0 {
            missing.push("daysLeft");
        }
        if self.daily_hours == 0 {
            missing.push("dailyHours");
        }
        missing
    }

    pub fn validate(&self) -> AppResult<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationError(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}

/// Body of `POST /generate-short-notes`.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct GenerateShortNotesRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Answer text is required"))]
    pub answer: String,

    #[serde(default)]
    pub subject: Option<String>,
}
