mod common;

#[tokio::test]
async fn test_root_liveness() {
    let server = common::create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_text("Hello World!");
}

#[tokio::test]
async fn test_health_reports_healthy() {
    let server = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert!(body["version"].is_string());
}
