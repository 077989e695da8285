pub mod catalog;
pub use catalog::HttpCatalogClient;

pub mod config;
pub use config::{PageConfig, ServerConfig, UpstreamConfig};
