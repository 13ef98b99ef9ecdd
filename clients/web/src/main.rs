use actix_web::{
    middleware::{self, Condition},
    web::Data,
    App, HttpServer,
};
use anyhow::Context;
use clap::Parser;
use database::{
    persistence::{options::DatabaseOptions, storage::StorageEngine},
    service::PersonService,
    validation::PersonValidator,
};

mod error;
mod routes;
mod views;

/// 📇 Person records server, list / create / edit / delete people through HTML forms
#[derive(Parser, Debug)]
struct Cli {
    /// Port the http server will run on
    #[clap(short, long, default_value = "8080")]
    port: u16,

    /// Address the http server will run on
    #[clap(short, long, default_value = "0.0.0.0")]
    address: String,

    /// Logs every http request
    #[clap(long)]
    log_http: bool,

    #[clap(long, default_value_t = 2)]
    http_workers: usize,

    /// tokio-postgres connection string, e.g. "host=localhost user=postgres". People are
    /// kept in memory when not set
    #[clap(long)]
    postgres: Option<String>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let database_options = DatabaseOptions::default().set_postgres_config(args.postgres);

    let storage_engine = StorageEngine::connect(&database_options)
        .await
        .context("Unable to connect to the person store")?;

    log::info!("Storage engine: {}", storage_engine.name());

    let person_service = Data::new(PersonService::new(storage_engine, PersonValidator::new()));

    log::info!("starting HTTP server on port {}.", args.port);

    log::info!(
        "People: http://{}:{}/person/list",
        args.address,
        args.port
    );

    let log_http = args.log_http;

    HttpServer::new(move || {
        App::new()
            .app_data(person_service.clone())
            .configure(routes::configure)
            .wrap(Condition::new(log_http, middleware::Logger::default()))
    })
    .workers(args.http_workers)
    .bind((args.address, args.port))?
    .run()
    .await?;

    Ok(())
}
