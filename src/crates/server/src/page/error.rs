use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use application::error::AppError;
use application::query::render::RenderError;
use thiserror::Error;

/// 页面请求错误，全部返回 500 和可读的错误信息
#[derive(Error, Debug)]
pub enum PageError {
    #[error(transparent)]
    Upstream(#[from] AppError),
    #[error("Failed to render page: {0}")]
    Render(#[from] RenderError),
}

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        let message = self.to_string();
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use application::query::FetchError;

    #[actix_web::test]
    async fn test_upstream_error_response() {
        let err = PageError::from(AppError::ArtistsUnavailable(FetchError::Decode(
            "expected value at line 1 column 1".to_string(),
        )));
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body()).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("artists API"));
        assert!(body.contains("expected value"));
    }

    #[test]
    fn test_render_error_status() {
        let err = PageError::from(RenderError::MissingSlot("{{artists}}"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().starts_with("Failed to render page"));
    }
}
