//! thin access layer over the document store

use anyhow::Context;
use derive_more::{Display, Error};
use futures_util::TryStreamExt;
use log::info;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Database};

/// Failures at the store boundary. Read callers downgrade these to
/// fallback content; write callers surface them.
#[derive(Debug, Display, Error)]
pub(crate) enum StoreError {
    #[display("store connection was never established")]
    Unavailable,
    #[display("query failed: {_0}")]
    QueryFailed(#[error(not(source))] String),
    #[display("write failed: {_0}")]
    WriteFailed(#[error(not(source))] String),
}

/// Outcome of a read through the gateway. Callers map `Empty` and `Failed`
/// to the same fallback content; the distinction survives only in the logs.
#[derive(Debug)]
pub(crate) enum Fetched {
    Documents(Vec<Document>),
    Empty,
    Failed,
}

pub(crate) struct Store {
    db: Database,
}

impl Store {
    /// Connect and ping once, so a dead server is discovered at startup
    /// instead of on every read.
    pub async fn connect(url: &str, db_name: &str) -> anyhow::Result<Self> {
        let client = Client::with_uri_str(url)
            .await
            .context("failed to create store client")?;
        let db = client.database(db_name);
        db.run_command(doc! { "ping": 1 })
            .await
            .context("store did not answer ping")?;
        info!("connected to document store, db={db_name}");
        Ok(Self { db })
    }

    /// Fetch raw documents from `collection`, optionally filtered and
    /// limited. No side effects.
    pub async fn fetch(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, StoreError> {
        let coll = self.db.collection::<Document>(collection);
        let mut find = coll.find(filter);
        if let Some(limit) = limit {
            find = find.limit(limit);
        }
        let cursor = find
            .await
            .map_err(|e| StoreError::QueryFailed(e.to_string()))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::QueryFailed(e.to_string()))
    }

    /// Insert one document, returning the generated identifier.
    pub async fn insert(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<String, StoreError> {
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(document)
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        let id = result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .unwrap_or_else(|| result.inserted_id.to_string());
        Ok(id)
    }

    /// Best-effort listing of collection names, for diagnostics.
    pub async fn collection_names(&self, cap: usize) -> Result<Vec<String>, StoreError> {
        let mut names = self
            .db
            .list_collection_names()
            .await
            .map_err(|e| StoreError::QueryFailed(e.to_string()))?;
        names.truncate(cap);
        Ok(names)
    }
}
