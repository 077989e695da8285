pub mod error;
pub mod params;
pub mod render;

use super::consts;
use super::AppState;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use application::query::artist_query::ArtistQuery;
use error::PageError;
use log::error;
use params::BrowseParams;

/// 注册首页路由
pub fn configure_service(cfg: &mut web::ServiceConfig) {
    cfg.route(consts::URL_PATH_INDEX, web::get().to(index));
}

async fn index(
    state: web::Data<AppState>,
    params: BrowseParams,
) -> Result<HttpResponse, PageError> {
    let query = ArtistQuery::from(params);
    let view = state.browse.handle(&query).await.map_err(|e| {
        error!("Failed to load artists: {}", e);
        PageError::from(e)
    })?;
    let body = state.renderer.render(&view).map_err(|e| {
        error!("Failed to render artists page: {}", e);
        PageError::from(e)
    })?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}
