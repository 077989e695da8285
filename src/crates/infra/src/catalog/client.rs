use crate::catalog::wire::{ArtistData, RelationData};
use crate::config::UpstreamConfig;
use application::query::dao::CatalogSource;
use application::query::FetchError;
use async_trait::async_trait;
use domain::artist::Artist;
use domain::relation::RelationSet;
use log::{debug, info};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// 基于 reqwest 的上游接口客户端，不重试、不缓存
pub struct HttpCatalogClient {
    http_client: reqwest::Client,
    artists_url: String,
    relations_url: String,
}

impl HttpCatalogClient {
    pub fn new(cfg: &UpstreamConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder().user_agent(cfg.user_agent.as_str());
        if cfg.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(cfg.timeout_secs));
        }
        let http_client = builder
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        info!(
            "Upstream artists: {}, relations: {}",
            cfg.artists_url, cfg.relations_url
        );
        Ok(Self {
            http_client,
            artists_url: cfg.artists_url.clone(),
            relations_url: cfg.relations_url.clone(),
        })
    }

    /// GET 并解码 JSON 响应体
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!("Fetching {}", url);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        decode_body(&body)
    }
}

/// 将响应体解码为目标结构
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, FetchError> {
    serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[async_trait]
impl CatalogSource for HttpCatalogClient {
    async fn fetch_relations(&self) -> Result<RelationSet, FetchError> {
        let data: RelationData = self.fetch_json(&self.relations_url).await?;
        info!("Fetched {} relation entries", data.index.len());
        Ok(RelationSet::from(data))
    }

    async fn fetch_artists(&self) -> Result<Vec<Artist>, FetchError> {
        let data: Vec<ArtistData> = self.fetch_json(&self.artists_url).await?;
        info!("Fetched {} artists", data.len());
        Ok(data.into_iter().map(Artist::from).collect())
    }
}
