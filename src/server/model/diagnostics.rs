use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct IndexResponse {
    pub message: &'static str,
}

/// Shape returned by the connectivity probe. Starts from the
/// nothing-works baseline; each guarded sub-check upgrades its own field.
#[derive(Debug, Serialize)]
pub(crate) struct DiagnosticsResponse {
    pub backend: &'static str,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

impl Default for DiagnosticsResponse {
    fn default() -> Self {
        Self {
            backend: "✅ Running",
            database: "❌ Not Available".to_string(),
            database_url: None,
            database_name: None,
            connection_status: "Not Connected",
            collections: vec![],
        }
    }
}
