// txguard/src/http/mod.rs

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower_http::trace::TraceLayer;
use txguard_core::application::ValidationEngine;
use txguard_core::infrastructure::config::Settings;

mod error;
mod routes;

pub use error::ApiError;

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub engine: ValidationEngine,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            engine: ValidationEngine::default(),
            settings: Arc::new(settings),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let body_limit = state
        .settings
        .max_upload_bytes
        .saturating_add(MULTIPART_OVERHEAD);

    Router::new()
        .merge(routes::health::router())
        .merge(routes::validate::router())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::Value;
    use tower::ServiceExt;

    const BOUNDARY: &str = "txguard-test-boundary";

    fn app() -> Router {
        router(AppState::new(Settings::default()))
    }

    fn upload(file_name: &str, content: &str) -> Request<Body> {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: text/csv\r\n\r\n\
             {content}\r\n\
             --{BOUNDARY}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/validate")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn send(app: Router, req: Request<Body>) -> Result<(StatusCode, Value)> {
        let resp = app.oneshot(req).await?;
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
        Ok((status, serde_json::from_slice(&bytes)?))
    }

    #[tokio::test]
    async fn test_health_check() -> Result<()> {
        let req = Request::builder().uri("/health").body(Body::empty())?;
        let resp = app().oneshot(req).await?;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::CONTENT_TYPE].to_str()?,
            "application/json"
        );

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
        let data: Value = serde_json::from_slice(&bytes)?;
        assert_eq!(data["status"], "healthy");
        assert_eq!(data["service"], "banking-data-validator");
        let ts = data["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_routes_are_404() -> Result<()> {
        for uri in ["/", "/nonexistent"] {
            let req = Request::builder().uri(uri).body(Body::empty())?;
            assert_eq!(app().oneshot(req).await?.status(), StatusCode::NOT_FOUND);
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_valid_csv() -> Result<()> {
        let (status, data) = send(
            app(),
            upload(
                "test.csv",
                "account_number,transaction_date,amount,currency\n12345678,2024-01-15,100.50,USD\n",
            ),
        )
        .await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(data["valid"], true);
        assert_eq!(data["errors_found"], 0);
        assert_eq!(data["total_rows"], 1);
        assert_eq!(data["file"], "test.csv");
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_currency() -> Result<()> {
        let (status, data) = send(
            app(),
            upload(
                "test.csv",
                "account_number,transaction_date,amount,currency\n12345678,2024-01-15,100,us\n",
            ),
        )
        .await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(data["valid"], false);
        assert_eq!(data["errors"][0]["column"], "currency");
        assert_eq!(data["errors"][0]["severity"], "warning");
        Ok(())
    }

    #[tokio::test]
    async fn test_multiple_errors_in_one_row() -> Result<()> {
        let (_, data) = send(
            app(),
            upload(
                "test.csv",
                "account_number,transaction_date,amount\nBAD,not-a-date,xyz\n",
            ),
        )
        .await?;
        assert!(data["errors_found"].as_u64().unwrap() >= 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_rejects_non_csv_file() -> Result<()> {
        let (status, data) = send(app(), upload("test.txt", "hello")).await?;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(data["error"], "Only CSV files are accepted");
        Ok(())
    }

    #[tokio::test]
    async fn test_header_only_csv_is_400() -> Result<()> {
        let (status, data) = send(
            app(),
            upload("test.csv", "account_number,transaction_date,amount\n"),
        )
        .await?;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(data["error"], "CSV file is empty or has no data rows");
        Ok(())
    }

    #[tokio::test]
    async fn test_oversized_file_is_413() -> Result<()> {
        let settings = Settings {
            max_upload_bytes: 16,
            ..Settings::default()
        };
        let (status, _) = send(
            router(AppState::new(settings)),
            upload("big.csv", "account_number,transaction_date,amount\n12345678,2024-01-15,1\n"),
        )
        .await?;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_file_field() -> Result<()> {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"note\"\r\n\r\n\
             hello\r\n\
             --{BOUNDARY}--\r\n"
        );
        let req = Request::builder()
            .method("POST")
            .uri("/validate")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))?;
        let (status, data) = send(app(), req).await?;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(data["error"], "No file uploaded");
        Ok(())
    }
}
