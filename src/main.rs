use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use std::io;
use std::sync::Arc;

use application::query::render::PageRenderer;
use infra::config::AppConfigImpl;
use infra::HttpCatalogClient;
use log::info;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use server::page::render::HtmlPageRenderer;

fn init_logging() -> io::Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    // 创建文件 appender
    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {m}{n}",
        )))
        .build("app.log")?;

    // 配置 log4rs：同时输出到控制台和文件
    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .appender(Appender::builder().build(
            "stdout",
            Box::new(log4rs::append::console::ConsoleAppender::builder().build()),
        ))
        .build(
            Root::builder()
                .appender("file")
                .appender("stdout")
                .build(log_level.parse().unwrap_or(log::LevelFilter::Info)),
        )
        .map_err(io::Error::other)?;

    log4rs::init_config(config).map_err(io::Error::other)?;
    Ok(())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    init_logging()?;

    let cfg = AppConfigImpl::load().map_err(io::Error::other)?;
    let server_cfg = cfg.server();
    let page_cfg = cfg.page();

    let renderer: Arc<dyn PageRenderer> =
        Arc::new(HtmlPageRenderer::load(&page_cfg).map_err(io::Error::other)?);
    let catalog = Arc::new(HttpCatalogClient::new(&cfg.upstream()).map_err(io::Error::other)?);

    let app_state = web::Data::new(server::AppState::new(catalog, renderer));
    info!(
        "Listening on http://{}:{}",
        server_cfg.host, server_cfg.port
    );
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .configure(|cfg| server::resources::configure_service(cfg, &page_cfg))
            .configure(server::page::configure_service)
    })
    .bind((server_cfg.host.as_str(), server_cfg.port))?
    .run()
    .await
}
