use mongodb::bson::{self, Document};
use serde::de::DeserializeOwned;
use validator::Validate;

pub(crate) mod config;
pub(crate) mod diagnostics;
pub(crate) mod info;
pub(crate) mod menu;
pub(crate) mod reservation;
pub(crate) mod testimonial;

/// A schema-validated record living in one document collection.
///
/// The store itself is schema-free, so every record read back goes through
/// `project`: keys outside the allow-list are dropped, missing optionals
/// take their defaults, and the constraints on the target type must hold.
pub(crate) trait Record: DeserializeOwned + Validate {
    /// collection the records live in
    const COLLECTION: &'static str;
    /// allow-list of recognized field names
    const FIELDS: &'static [&'static str];

    fn project(raw: &Document) -> Option<Self> {
        let mut known = Document::new();
        for field in Self::FIELDS {
            if let Some(value) = raw.get(*field) {
                known.insert(*field, value.clone());
            }
        }
        let record: Self = bson::from_document(known).ok()?;
        record.validate().ok()?;
        Some(record)
    }
}
