use crate::query::view::ArtistsView;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to load page layout: {0}")]
    Layout(String),
    #[error("Page layout is missing the {0} slot")]
    MissingSlot(&'static str),
    #[error("Failed to write page: {0}")]
    Format(#[from] std::fmt::Error),
}

/// 页面渲染器，进程启动时加载一次，之后只读
pub trait PageRenderer: Send + Sync {
    fn render(&self, view: &ArtistsView) -> Result<String, RenderError>;
}
