//! Upstream document fetch.

use crate::error::RelayError;
use serde_json::Value;

/// Key measured from the upstream document.
pub const UPSTREAM_FIELD: &str = "favorite_colors";

/// Fetch the upstream document and parse it as JSON.
///
/// The status code is not inspected: a non-2xx response whose body parses
/// as JSON is measured like any other. Only transport failures and parse
/// failures are errors. The shared client carries no request timeout, so
/// a stalled upstream stalls the caller.
pub async fn fetch_document(http: &reqwest::Client, url: &str) -> Result<Value, RelayError> {
    let response = http.get(url).send().await.map_err(RelayError::Upstream)?;
    let body = response.bytes().await.map_err(RelayError::Upstream)?;

    serde_json::from_slice(&body).map_err(RelayError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;
    use serde_json::json;
    use tokio::net::TcpListener;

    async fn spawn_upstream(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/app/A", addr)
    }

    #[tokio::test]
    async fn fetches_and_parses_the_document() {
        let app = Router::new().route(
            "/app/A",
            get(|| async { r#"{"favorite_colors": ["red", "blue"]}"# }),
        );
        let url = spawn_upstream(app).await;

        let doc = fetch_document(&reqwest::Client::new(), &url).await.unwrap();
        assert_eq!(doc, json!({"favorite_colors": ["red", "blue"]}));
    }

    #[tokio::test]
    async fn status_code_is_ignored() {
        let app = Router::new().route("/app/A", get(|| async { (StatusCode::NOT_FOUND, "[]") }));
        let url = spawn_upstream(app).await;

        let doc = fetch_document(&reqwest::Client::new(), &url).await.unwrap();
        assert_eq!(doc, json!([]));
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let app = Router::new().route("/app/A", get(|| async { "not json" }));
        let url = spawn_upstream(app).await;

        let err = fetch_document(&reqwest::Client::new(), &url)
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_upstream_is_an_upstream_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{}/app/A", addr);
        let err = fetch_document(&reqwest::Client::new(), &url)
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::Upstream(_)));
    }
}
