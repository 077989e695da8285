use super::consts;
use actix_files::Files;
use actix_web::web;
use infra::config::PageConfig;

/// 配置静态资源路由，映射 /static 到静态文件目录
pub fn configure_service(cfg: &mut web::ServiceConfig, page_config: &PageConfig) {
    match page_config.static_path() {
        Some(path) => {
            log::info!("Serving static files from {}", path.display());
            cfg.service(Files::new(consts::URL_PATH_STATIC, path));
        }
        None => {
            log::warn!(
                "Static directory '{}' not found, static files disabled",
                page_config.static_dir
            );
        }
    }
}
