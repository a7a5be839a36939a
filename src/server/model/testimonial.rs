use crate::server::model::Record;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub(crate) struct Testimonial {
    pub name: String,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i32,
    pub comment: String,
    pub avatar: Option<String>,
}

impl Record for Testimonial {
    const COLLECTION: &'static str = "testimonial";
    const FIELDS: &'static [&'static str] = &["name", "rating", "comment", "avatar"];
}
