pub mod health_handlers;
pub mod track_handlers;
