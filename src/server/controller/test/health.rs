use super::*;

/// Tests the health report.
///
/// Expected: 200 with status "ok" and the configured dashboard URL
#[tokio::test]
async fn reports_ok() {
    let test = TestBuilder::new().build().unwrap();
    let app = app(&test);

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["status"], "ok");
    assert_eq!(json["dashboard"], "https://dash.example.com");
    assert!(json["timestamp"].is_string());
}

/// Tests that the generated OpenAPI document lists the feature endpoint.
///
/// Expected: 200 with `/api/features` under `paths`
#[tokio::test]
async fn serves_openapi_document() {
    let test = TestBuilder::new().build().unwrap();
    let app = app(&test);

    let json = body_json(get(&app, "/api/openapi.json").await).await;

    assert!(json["paths"]["/api/features"]["get"].is_object());
    assert!(json["paths"]["/api/guilds/{guild_id}"]["get"].is_object());
}
