use std::sync::Arc;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::dto::ShortNotesResult,
    services::{
        gateway::{ChatGateway, ChatMessage},
        prompt_builder,
    },
};

/// Orchestrates one short-notes image generation. The reply carries the
/// rendered image instead of text content.
pub struct ShortNotesService {
    gateway: Arc<dyn ChatGateway>,
    model: String,
}

impl ShortNotesService {
    pub fn new(gateway: Arc<dyn ChatGateway>, config: &Config) -> Self {
        Self {
            gateway,
            model: config.notes_model.clone(),
        }
    }

    pub async fn generate(&self, answer: &str, subject: Option<&str>) -> AppResult<ShortNotesResult> {
        let prompts = prompt_builder::short_notes_prompts(answer, subject);
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

        let image_url = message
            .images
            .into_iter()
            .next()
            .map(|image| image.image_url.url)
            .ok_or(AppError::EmptyResponse)?;

        Ok(ShortNotesResult { image_url })
    }
}
