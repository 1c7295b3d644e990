use actix_web::web;

use crate::handlers::health_handlers::health_check;
use crate::handlers::track_handlers::track;

/// Configure the routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
    // Malformed tracking paths must reach the handler to be answered with 400,
    // and any method is accepted.
    cfg.service(web::resource(["/trck", "/trck/{tail:.*}"]).to(track));
}
