use crate::server::model::Record;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Incoming reservation payload. Created through the write endpoint only,
/// never read back by this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub(crate) struct Reservation {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// YYYY-MM-DD, presence only
    pub date: String,
    /// HH:MM, presence only
    pub time: String,
    #[validate(range(min = 1, max = 20, message = "party_size must be between 1 and 20"))]
    pub party_size: i32,
    pub notes: Option<String>,
}

impl Record for Reservation {
    const COLLECTION: &'static str = "reservation";
    const FIELDS: &'static [&'static str] = &[
        "name",
        "email",
        "phone",
        "date",
        "time",
        "party_size",
        "notes",
    ];
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CreateReservationResponse {
    pub status: String,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(party_size: i32) -> Reservation {
        Reservation {
            name: "Kovács Anna".to_string(),
            email: "anna@example.com".to_string(),
            phone: "(+36) 30 111 2233".to_string(),
            date: "2025-03-15".to_string(),
            time: "19:30".to_string(),
            party_size,
            notes: None,
        }
    }

    #[test]
    fn party_size_window_is_inclusive() {
        assert!(payload(1).validate().is_ok());
        assert!(payload(20).validate().is_ok());
    }

    #[test]
    fn party_size_out_of_range_is_rejected_with_field_detail() {
        for out_of_range in [0, 21] {
            let errors = payload(out_of_range).validate().unwrap_err();
            assert!(errors.field_errors().contains_key("party_size"));
        }
    }
}
