use serde::Deserialize;

use digitalproducts_admin::{IndexContext, SourceDescriptor};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffordanceRequest {
    pub context: IndexContext,
    #[serde(default)]
    pub sources: Vec<SourceDescriptor>,
    #[serde(default)]
    pub selected_handle: Option<String>,
}
