use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    models::domain::{ExamImpactResult, ExamProfile},
    services::{
        gateway::{ChatGateway, ChatMessage},
        normalizer, prompt_builder,
    },
};

/// Orchestrates one exam-impact request: prompts, gateway call, normalize.
pub struct ExamImpactService {
    gateway: Arc<dyn ChatGateway>,
    model: String,
}

impl ExamImpactService {
    pub fn new(gateway: Arc<dyn ChatGateway>, config: &Config) -> Self {
        Self {
            gateway,
            model: config.impact_model.clone(),
        }
    }

    pub async fn fetch_updates(&self, profile: &ExamProfile) -> AppResult<ExamImpactResult> {
        let prompts = prompt_builder::impact_prompts(profile);
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
