mod config;
mod db;
mod handlers;
mod models;
mod routes;
mod state;
mod utils;

use std::sync::Arc;

use crate::config::Args;
use crate::db::{MongoStore, RecordStore};
use crate::state::app_state::AppState;
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use env_logger::Env;
use routes::init_routes;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let args = Args::parse();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let store = MongoStore::new(args.mongo());
    store.ping().await.context("Cannot connect to MongoDB")?;

    let app_state = web::Data::new(AppState {
        store: Arc::new(store),
    });

    log::info!(
        "starting trck listening on http://{}:{}/trck/:userid",
        args.host,
        args.port
    );

    HttpServer::new(move || {
        let logger = Logger::new("%a \"%r\" %s %b \"%{Referer}i\" \"%{User-Agent}i\" %D ms");
        App::new()
            .wrap(logger)
            .app_data(app_state.clone())
            .configure(init_routes)
    })
    .bind((args.host.as_str(), args.port))
    .with_context(|| format!("Cannot start HTTP server on {}:{}", args.host, args.port))?
    .run()
    .await
    .context("HTTP server terminated")
}
