use axum_test::TestServer;
use http::StatusCode;

mod common;

#[tokio::test]
async fn test_non_numeric_id_is_a_bad_request() {
    let app = common::setup_test_app().await.unwrap();
    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/doctors/not-a-number").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "error");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("not-a-number"));
}

#[tokio::test]
async fn test_non_numeric_id_on_update_and_delete() {
    let app = common::setup_test_app().await.unwrap();
    let server = TestServer::new(app).unwrap();

    let update_response = server
        .put("/api/doctors/abc")
        .json(&common::create_test_doctor_json("Ada", "Boston", "Cardiology"))
        .await;
    assert_eq!(update_response.status_code(), StatusCode::BAD_REQUEST);

    let delete_response = server.delete("/api/doctors/abc").await;
    assert_eq!(delete_response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = delete_response.json();
    assert_eq!(body["status"], "error");
}
