use axum::http::StatusCode;

use crate::common;

#[tokio::test]
async fn test_health_returns_ok_with_version() {
    let app = common::test_app();
    let (status, body) = common::get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = common::test_app();
    let (status, _) = common::get(&app, "/healthz").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
