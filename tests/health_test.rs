use axum_test::TestServer;
use http::StatusCode;

mod common;

#[tokio::test]
async fn test_health_endpoint() {
    let app = common::setup_test_app().await.unwrap();
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "success");
}
