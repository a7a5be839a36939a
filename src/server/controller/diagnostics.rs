use crate::server::controller::error::truncate_chars;
use crate::server::model::diagnostics::{DiagnosticsResponse, IndexResponse};
use crate::server::state::AppState;
use actix_web::{get, web, Responder};

const PROBE_DETAIL_MAX_CHARS: usize = 50;
const COLLECTION_NAMES_CAP: usize = 10;

#[get("/")]
async fn index() -> impl Responder {
    web::Json(IndexResponse {
        message: "Hungarian Restaurant API running",
    })
}

#[get("/test")]
/// connectivity probe; every sub-check is guarded so this never errors
async fn test_database(data: web::Data<AppState>) -> impl Responder {
    let mut response = DiagnosticsResponse::default();
    if let Some(store) = data.store() {
        response.database = "✅ Connected & Working".to_string();
        response.database_url = Some(
            if data.database_url_set() {
                "✅ Set"
            } else {
                "❌ Not Set"
            }
            .to_string(),
        );
        response.database_name = Some(data.database_name().unwrap_or("Unknown").to_string());
        response.connection_status = "Connected";
        match store.collection_names(COLLECTION_NAMES_CAP).await {
            Ok(names) => response.collections = names,
            Err(e) => {
                response.database = format!(
                    "⚠️  Connected but Error: {}",
                    truncate_chars(&e.to_string(), PROBE_DETAIL_MAX_CHARS)
                );
            }
        }
    }
    web::Json(response)
}
