use crate::server::controller::error::ApiError;
use crate::server::database::store::StoreError;
use crate::server::model::reservation::{CreateReservationResponse, Reservation};
use crate::server::model::Record;
use crate::server::state::AppState;
use crate::server::util::time;
use actix_web::{post, web, Responder};
use log::{error, info};
use mongodb::bson::{self, DateTime};
use validator::Validate;

#[post("/api/reservations")]
/// accept a reservation; write failures are surfaced, never swallowed
async fn create_reservation(
    body: web::Json<Reservation>,
    data: web::Data<AppState>,
) -> Result<impl Responder, ApiError> {
    let reservation = body.into_inner();
    reservation
        .validate()
        .map_err(|fields| ApiError::Validation { fields })?;

    let store = data.store().ok_or(StoreError::Unavailable)?;

    let mut document = bson::to_document(&reservation).map_err(|e| ApiError::WriteFailed {
        detail: e.to_string(),
    })?;
    document.insert(
        "created_at",
        DateTime::from_millis(time::helper::now_utc().timestamp_millis()),
    );

    match store.insert(Reservation::COLLECTION, document).await {
        Ok(id) => {
            info!("reservation stored, id={id}");
            Ok(web::Json(CreateReservationResponse {
                status: "ok".to_string(),
                id,
            }))
        }
        Err(e) => {
            error!("create_reservation failed, {e}");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    macro_rules! detached_app {
        () => {{
            let state = web::Data::new(AppState::new(None, false, None));
            test::init_service(
                App::new()
                    .app_data(state)
                    .app_data(crate::server::json_config())
                    .service(create_reservation),
            )
            .await
        }};
    }

    fn payload(party_size: i32) -> Value {
        json!({
            "name": "Kovács Anna",
            "email": "anna@example.com",
            "phone": "(+36) 30 111 2233",
            "date": "2025-03-15",
            "time": "19:30",
            "party_size": party_size,
        })
    }

    #[actix_web::test]
    async fn out_of_range_party_size_is_a_client_error() {
        let app = detached_app!();
        for out_of_range in [0, 21] {
            let req = test::TestRequest::post()
                .uri("/api/reservations")
                .set_json(payload(out_of_range))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

            let body: Value = test::read_body_json(resp).await;
            assert!(body["fields"]["party_size"].is_array());
        }
    }

    #[actix_web::test]
    async fn missing_email_is_a_client_error() {
        let app = detached_app!();
        let mut incomplete = payload(4);
        incomplete.as_object_mut().unwrap().remove("email");

        let req = test::TestRequest::post()
            .uri("/api/reservations")
            .set_json(incomplete)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn write_without_store_is_surfaced_not_swallowed() {
        let app = detached_app!();
        let req = test::TestRequest::post()
            .uri("/api/reservations")
            .set_json(payload(4))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().is_some_and(|msg| !msg.is_empty()));
    }
}
