use actix_files::{Files, NamedFile};
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;

mod config;

use config::Config;

/// Anything that is not a file in the bundle gets the page itself.
async fn spa(cfg: web::Data<Config>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open(cfg.index_html())?)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = Config::from_env()?;
    log::info!(
        "serving {} (assets {}) on http://{}:{}",
        cfg.dist.display(),
        cfg.assets.display(),
        cfg.host,
        cfg.port
    );

    let addr = (cfg.host.clone(), cfg.port);
    let data = web::Data::new(cfg);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(data.clone())
            .service(Files::new("/assets", &data.assets))
            .service(Files::new("/", &data.dist).index_file("index.html"))
            .default_service(web::get().to(spa))
    })
    .bind(&addr)
    .with_context(|| format!("binding {}:{}", addr.0, addr.1))?
    .run()
    .await
    .context("server stopped")
}
