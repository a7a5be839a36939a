use crate::server::database::store::{Fetched, Store};
use crate::server::model::config::ServerConfig;
use log::{debug, warn};
use mongodb::bson::Document;

const DEFAULT_DATABASE_NAME: &str = "restaurant";

/// Shared per-process state, built once at startup and injected into
/// handlers through `web::Data`. The store handle is optional: no
/// configuration and a failed connect are the same handled state.
pub(crate) struct AppState {
    store: Option<Store>,
    database_url_set: bool,
    database_name: Option<String>,
}

impl AppState {
    pub fn new(store: Option<Store>, database_url_set: bool, database_name: Option<String>) -> Self {
        Self {
            store,
            database_url_set,
            database_name,
        }
    }

    /// Establish the store handle once. Never aborts startup.
    pub async fn init(config: &ServerConfig) -> Self {
        let store = match &config.database_url {
            Some(url) => {
                let db_name = config
                    .database_name
                    .as_deref()
                    .unwrap_or(DEFAULT_DATABASE_NAME);
                match Store::connect(url, db_name).await {
                    Ok(store) => Some(store),
                    Err(e) => {
                        warn!("store connection failed, serving fallback content only, {e:#}");
                        None
                    }
                }
            }
            None => {
                warn!("DATABASE_URL not set, serving fallback content only");
                None
            }
        };
        Self::new(
            store,
            config.database_url.is_some(),
            config.database_name.clone(),
        )
    }

    pub fn store(&self) -> Option<&Store> {
        self.store.as_ref()
    }

    pub fn database_url_set(&self) -> bool {
        self.database_url_set
    }

    pub fn database_name(&self) -> Option<&str> {
        self.database_name.as_deref()
    }

    /// Read through the gateway. A missing store and a failed query both
    /// collapse to `Failed`.
    pub async fn fetch(&self, collection: &str, filter: Document, limit: Option<i64>) -> Fetched {
        let Some(store) = &self.store else {
            debug!("fetch from {collection} skipped, store not available");
            return Fetched::Failed;
        };
        match store.fetch(collection, filter, limit).await {
            Ok(docs) if docs.is_empty() => Fetched::Empty,
            Ok(docs) => Fetched::Documents(docs),
            Err(e) => {
                warn!("fetch from {collection} failed, {e}");
                Fetched::Failed
            }
        }
    }
}
