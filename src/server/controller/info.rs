use crate::server::database::store::Fetched;
use crate::server::fallback;
use crate::server::model::info::RestaurantInfo;
use crate::server::model::Record;
use crate::server::state::AppState;
use actix_web::{get, web, Responder};
use log::warn;
use mongodb::bson::doc;

#[get("/api/info")]
/// restaurant profile; first stored record wins, default otherwise
async fn get_info(data: web::Data<AppState>) -> impl Responder {
    let info = match data
        .fetch(RestaurantInfo::COLLECTION, doc! {}, Some(1))
        .await
    {
        Fetched::Documents(docs) => match docs.first().and_then(RestaurantInfo::project) {
            Some(info) => info,
            None => {
                warn!("stored restaurant info failed projection, serving default");
                fallback::restaurant_info()
            }
        },
        Fetched::Empty | Fetched::Failed => fallback::restaurant_info(),
    };
    web::Json(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn falls_back_when_store_is_unreachable() {
        let state = web::Data::new(AppState::new(None, false, None));
        let app = test::init_service(App::new().app_data(state).service(get_info)).await;

        let req = test::TestRequest::get().uri("/api/info").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let info: RestaurantInfo = test::read_body_json(resp).await;
        assert_eq!(info, fallback::restaurant_info());
    }
}
