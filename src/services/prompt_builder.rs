use crate::constants::prompts::{
    IMPACT_ANALYST_ROLE, IMPACT_RESPONSE_FORMAT, IMPACT_SEARCH_KEYWORDS, PLANNER_SYSTEM_PROMPT,
    SHORT_NOTES_SYSTEM_PROMPT,
};
use crate::models::domain::ExamProfile;
use crate::models::dto::PlannerInput;

/// System/user prompt pair for one gateway call. Builders are pure string
/// transformations; identical input yields byte-identical output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

fn subjects_context(profile: &ExamProfile) -> String {
    if profile.subjects.is_empty() {
        "all subjects".to_string()
    } else {
        profile.subjects.join(", ")
    }
}

pub fn impact_prompts(profile: &ExamProfile) -> PromptPair {
    let subjects_context = subjects_context(profile);

    let system = format!(
        "{role}\n\nCandidate Profile:\n- Exam: {exam}\n- Attempt Year: {year}\n- State/Region: {state}\n- Board/University: {board}\n- Subjects: {subjects}\n\n{format}",
        role = IMPACT_ANALYST_ROLE,
        exam = profile.exam_name,
        year = profile.attempt_year,
        state = profile.state,
        board = profile.board,
        subjects = subjects_context,
        format = IMPACT_RESPONSE_FORMAT,
    );

    let search_context = format!(
        "{} {} {} {} {} {}",
        profile.exam_name,
        profile.attempt_year,
        profile.state,
        profile.board,
        subjects_context,
        IMPACT_SEARCH_KEYWORDS,
    );
    let user = format!(
        "Find the latest exam news and updates for: {}. Analyze the impact on my profile and return the structured JSON response.",
        search_context
    );

    PromptPair { system, user }
}

pub fn planner_prompts(input: &PlannerInput) -> PromptPair {
    let subject_list = input
        .subjects
        .iter()
        .map(|subject| {
            let topics = if subject.topics.is_empty() {
                "All topics".to_string()
            } else {
                subject.topics.join(", ")
            };
            format!("- {}: {}", subject.name, topics)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let user = format!(
        "Create a study plan with these details:\n\nEXAM: {exam}\nDAYS LEFT: {days} days\nDAILY STUDY HOURS: {hours} hours\nSTART DATE: {start}\n\nSUBJECTS AND TOPICS:\n{subjects}\n\nGenerate a complete day-by-day study schedule organized by weeks. Make it realistic and effective.",
        exam = input.exam_name,
        days = input.days_left,
        hours = input.daily_hours,
        start = input.start_date,
        subjects = subject_list,
    );

    PromptPair {
        system: PLANNER_SYSTEM_PROMPT.to_string(),
        user,
    }
}

pub fn short_notes_prompts(answer: &str, subject: Option<&str>) -> PromptPair {
    let mut user = String::new();
    if let Some(subject) = subject {
        user.push_str(&format!("Subject: {}\n\n", subject));
    }
    user.push_str("Create short revision notes as a single image for this answer:\n\n");
    user.push_str(answer);

    PromptPair {
        system: SHORT_NOTES_SYSTEM_PROMPT.to_string(),
        user,
    }
}
