use crate::server::controller::project_all;
use crate::server::database::store::Fetched;
use crate::server::fallback;
use crate::server::model::menu::MenuItem;
use crate::server::model::Record;
use crate::server::state::AppState;
use actix_web::{get, web, Responder};
use mongodb::bson::doc;

#[get("/api/menu")]
/// menu in store order; default menu when empty or unreachable
async fn get_menu(data: web::Data<AppState>) -> impl Responder {
    let items = match data.fetch(MenuItem::COLLECTION, doc! {}, None).await {
        Fetched::Documents(docs) => {
            let items: Vec<MenuItem> = project_all(&docs);
            if items.is_empty() {
                fallback::menu()
            } else {
                items
            }
        }
        Fetched::Empty | Fetched::Failed => fallback::menu(),
    };
    web::Json(items)
}
