use std::borrow::Cow;

use actix_web::{HttpRequest, HttpResponse, http::header, web};

use crate::models::record::Record;
use crate::state::app_state::AppState;
use crate::utils::client_ip::resolve_client_ip;
use crate::utils::tracking_path::extract_user;

const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Record one visit of the tracked user. Answers with a bare status code.
pub async fn track(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let user = match extract_user(req.uri().path()) {
        Ok(user) => user.to_string(),
        Err(e) => {
            log::debug!("bad request, {}", e);
            return HttpResponse::BadRequest().finish();
        }
    };

    let peer_addr = req
        .peer_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_default();
    let forwarded_for = header_str(&req, X_FORWARDED_FOR);
    let ip = resolve_client_ip(forwarded_for.as_deref(), &peer_addr).unwrap_or_else(|e| {
        log::warn!("cannot extract the IP from the request, {}", e);
        String::new()
    });

    let user_agent = header_str(&req, header::USER_AGENT.as_str())
        .map(Cow::into_owned)
        .unwrap_or_default();

    let record = Record::new(req.uri().to_string(), user, ip, user_agent);

    match state.store.store(&record).await {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(e) => {
            log::error!("cannot store the tracking request, {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Header value as sent. Bytes outside visible ASCII are kept, invalid
/// UTF-8 sequences are replaced.
fn header_str<'a>(req: &'a HttpRequest, name: &str) -> Option<Cow<'a, str>> {
    req.headers()
        .get(name)
        .map(|v| String::from_utf8_lossy(v.as_bytes()))
}
