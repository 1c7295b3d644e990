use actix_web::{HttpResponse, web};

use crate::state::app_state::AppState;

pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    match state.store.ping().await {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(e) => {
            log::warn!("health check failed, {}", e);
            HttpResponse::ServiceUnavailable().finish()
        }
    }
}
