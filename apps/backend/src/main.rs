use actix_web::{web, App, HttpServer};
use cardroom_backend::config::db::{bind_addr, DbKind};
use cardroom_backend::infra::state::build_state;
use cardroom_backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use cardroom_backend::routes;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Configuration comes from the environment only; see config::db.
    let (host, port) = match bind_addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!(error = %e, "invalid bind address");
            std::process::exit(1);
        }
    };

    let db_kind = match DbKind::from_env() {
        Ok(kind) => kind,
        Err(e) => {
            error!(error = %e, "invalid database kind");
            std::process::exit(1);
        }
    };

    let app_state = match build_state().with_db(db_kind).build().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(%host, port, db_kind = ?db_kind, "starting cardroom backend");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
