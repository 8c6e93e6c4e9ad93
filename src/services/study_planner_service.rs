use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    models::{domain::StudyPlan, dto::PlannerInput},
    services::{
        gateway::{ChatGateway, ChatMessage},
        normalizer, prompt_builder,
    },
};

/// Orchestrates one study-plan generation: prompts, gateway call, normalize.
pub struct StudyPlannerService {
    gateway: Arc<dyn ChatGateway>,
    model: String,
}

impl StudyPlannerService {
    pub fn new(gateway: Arc<dyn ChatGateway>, config: &Config) -> Self {
        Self {
            gateway,
            model: config.planner_model.clone(),
        }
    }

    pub async fn generate_plan(&self, input: &PlannerInput) -> AppResult<StudyPlan> {
        let prompts = prompt_builder::planner_prompts(input);
        let message = self
            .gateway
            .complete(
                &self.model,
                vec![
                    ChatMessage::system(prompts.system),
                    ChatMessage::user(prompts.user),
                ],
            )
            .await?;

        normalizer::normalize(message.content.as_deref())
    }
}
