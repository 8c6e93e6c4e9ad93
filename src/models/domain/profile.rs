use serde::{Deserialize, Serialize};

/// Candidate profile declared by the student. All fields except the exam
/// name are optional on the wire and default to empty.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamProfile {
    #[serde(default)]
    pub exam_name: String, // Required; checked by the handler, not serde
    #[serde(default)]
    pub attempt_year: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub board: String,
    #[serde(default)]
    pub subjects: Vec<String>,
}

impl ExamProfile {
    pub fn has_exam_name(&self) -> bool {
        !self.exam_name.trim().is_empty()
    }
}
