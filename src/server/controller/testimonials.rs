use crate::server::controller::project_all;
use crate::server::database::store::Fetched;
use crate::server::fallback;
use crate::server::model::testimonial::Testimonial;
use crate::server::model::Record;
use crate::server::state::AppState;
use actix_web::{get, web, Responder};
use mongodb::bson::doc;

#[get("/api/testimonials")]
/// guest testimonials; default set when empty or unreachable
async fn get_testimonials(data: web::Data<AppState>) -> impl Responder {
    let testimonials = match data.fetch(Testimonial::COLLECTION, doc! {}, None).await {
        Fetched::Documents(docs) => {
            let testimonials: Vec<Testimonial> = project_all(&docs);
            if testimonials.is_empty() {
                fallback::testimonials()
            } else {
                testimonials
            }
        }
        Fetched::Empty | Fetched::Failed => fallback::testimonials(),
    };
    web::Json(testimonials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn falls_back_when_store_is_unreachable() {
        let state = web::Data::new(AppState::new(None, false, None));
        let app = test::init_service(App::new().app_data(state).service(get_testimonials)).await;

        let req = test::TestRequest::get().uri("/api/testimonials").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let testimonials: Vec<Testimonial> = test::read_body_json(resp).await;
        assert_eq!(testimonials, fallback::testimonials());
    }
}
