use crate::server::model::Record;
use log::warn;
use mongodb::bson::Document;

pub(crate) mod diagnostics;
pub(crate) mod error;
pub(crate) mod info;
pub(crate) mod menu;
pub(crate) mod reservations;
pub(crate) mod testimonials;

/// Lenient projection over a fetched batch: a record that fails the schema
/// is logged and skipped instead of aborting the whole read.
pub(crate) fn project_all<R: Record>(docs: &[Document]) -> Vec<R> {
    docs.iter()
        .filter_map(|doc| match R::project(doc) {
            Some(record) => Some(record),
            None => {
                warn!("dropping record from {} that failed projection", R::COLLECTION);
                None
            }
        })
        .collect()
}
