use crate::server::model::Record;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Restaurant profile. The store may hold many of these; only the first
/// returned record is ever used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub(crate) struct RestaurantInfo {
    pub name: String,
    pub tagline: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    pub email: String,
    /// opening hours lines, display order
    #[serde(default)]
    pub hours: Vec<String>,
    pub hero_image: Option<String>,
}

impl Record for RestaurantInfo {
    const COLLECTION: &'static str = "restaurantinfo";
    const FIELDS: &'static [&'static str] = &[
        "name",
        "tagline",
        "address",
        "city",
        "phone",
        "email",
        "hours",
        "hero_image",
    ];
}
