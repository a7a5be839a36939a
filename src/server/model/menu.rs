use crate::server::model::Record;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub(crate) struct MenuItem {
    pub name: String,
    pub description: String,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
    /// conventionally one of Starters/Mains/Desserts, not enforced
    pub category: String,
    pub image: Option<String>,
    #[serde(default)]
    pub spicy: bool,
    #[serde(default)]
    pub vegetarian: bool,
}

impl Record for MenuItem {
    const COLLECTION: &'static str = "menuitem";
    const FIELDS: &'static [&'static str] = &[
        "name",
        "description",
        "price",
        "category",
        "image",
        "spicy",
        "vegetarian",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn projection_defaults_optional_fields() {
        let raw = doc! {
            "name": "Lángos",
            "description": "Fried dough with sour cream and cheese.",
            "price": 4.5,
            "category": "Starters",
        };
        let item = MenuItem::project(&raw).expect("should project");
        assert!(!item.spicy);
        assert!(!item.vegetarian);
        assert_eq!(item.image, None);
    }

    #[test]
    fn optional_fields_omitted_read_back_as_documented_defaults() {
        // round-trip through a raw document, as a store write/read would do
        let written = MenuItem {
            name: "Túrós csusza".to_string(),
            description: "Pasta with cottage cheese and bacon.".to_string(),
            price: 8.0,
            category: "Mains".to_string(),
            image: None,
            spicy: false,
            vegetarian: false,
        };
        let raw = mongodb::bson::to_document(&written).unwrap();
        let read_back = MenuItem::project(&raw).unwrap();
        assert_eq!(read_back, written);
        let json = serde_json::to_value(&read_back).unwrap();
        assert_eq!(json["spicy"], serde_json::json!(false));
        assert_eq!(json["vegetarian"], serde_json::json!(false));
        assert_eq!(json["image"], serde_json::Value::Null);
    }

    #[test]
    fn projection_accepts_integer_price() {
        let raw = doc! {
            "name": "n", "description": "d", "price": 9, "category": "Mains",
        };
        let item = MenuItem::project(&raw).unwrap();
        assert_eq!(item.price, 9.0);
    }

    #[test]
    fn projection_rejects_negative_price() {
        let raw = doc! {
            "name": "n", "description": "d", "price": -1.0, "category": "Mains",
        };
        assert!(MenuItem::project(&raw).is_none());
    }

    #[test]
    fn projection_rejects_mistyped_price() {
        let raw = doc! {
            "name": "n", "description": "d", "price": "free", "category": "Mains",
        };
        assert!(MenuItem::project(&raw).is_none());
    }
}
