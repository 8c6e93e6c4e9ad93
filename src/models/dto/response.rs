use serde::{Deserialize, Serialize};

/// Body of a successful `POST /generate-short-notes` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortNotesResult {
    pub image_url: String,
}
