use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        gateway::{ChatGateway, HttpChatGateway},
        ExamImpactService, ShortNotesService, StudyPlannerService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub impact_service: Arc<ExamImpactService>,
    pub planner_service: Arc<StudyPlannerService>,
    pub notes_service: Arc<ShortNotesService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let gateway: Arc<dyn ChatGateway> = Arc::new(HttpChatGateway::new(&config));
        Self::with_gateway(config, gateway)
    }

    /// Builds the state around an arbitrary gateway; tests substitute a mock.
    pub fn with_gateway(config: Config, gateway: Arc<dyn ChatGateway>) -> Self {
        let impact_service = Arc::new(ExamImpactService::new(Arc::clone(&gateway), &config));
        let planner_service = Arc::new(StudyPlannerService::new(Arc::clone(&gateway), &config));
        let notes_service = Arc::new(ShortNotesService::new(gateway, &config));

        Self {
            impact_service,
            planner_service,
            notes_service,
            config: Arc::new(config),
        }
    }
}
