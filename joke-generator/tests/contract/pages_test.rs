//! Contract Test: GET / , GET /random , GET /dadjoke
//!
//! 成功時は1件を大きく表示し、失敗時も200でページ内にエラーを表示する。

use crate::support::http::get;
use crate::support::providers::{build_app, joke_json, mock_dad_joke, mock_random_joke};
use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn failing_provider() -> MockServer {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock)
        .await;
    mock
}

/// GET / - ランダムなジョークを表示する
#[tokio::test]
async fn test_home_renders_featured_joke() {
    let mock = MockServer::start().await;
    mock_random_joke(
        &mock,
        ResponseTemplate::new(200).set_body_json(joke_json(
            42,
            "general",
            "Why did the scarecrow win an award",
            "Because he was outstanding in his field",
        )),
    )
    .await;

    let response = get(build_app(&mock), "/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.content_type().starts_with("text/html"));
    let html = response.text();
    assert!(html.contains("Why did the scarecrow win an award"));
    assert!(html.contains("Because he was outstanding in his field"));
    assert!(html.contains("data-joke-id=\"42\""));
    assert!(html.contains("featured-joke"));
    assert!(!html.contains("role=\"alert\""));
    assert!(!html.contains("joke-list"));
}

/// GET / - 上流失敗時は固定メッセージ
#[tokio::test]
async fn test_home_upstream_failure_renders_error() {
    let mock = failing_provider().await;

    let response = get(build_app(&mock), "/").await;

    assert_eq!(response.status, StatusCode::OK);
    let html = response.text();
    assert!(html.contains("Unable to load jokes at this time"));
    assert!(!html.contains("joke-card"));
}

/// GET /random - 上流失敗時は `/` と異なる文言
#[tokio::test]
async fn test_random_upstream_failure_renders_error() {
    let mock = failing_provider().await;

    let response = get(build_app(&mock), "/random").await;

    assert_eq!(response.status, StatusCode::OK);
    let html = response.text();
    assert!(html.contains("Unable to fetch random joke"));
    assert!(!html.contains("joke-card"));
}

/// GET /random - 成功時は1件を表示
#[tokio::test]
async fn test_random_renders_featured_joke() {
    let mock = MockServer::start().await;
    mock_random_joke(
        &mock,
        ResponseTemplate::new(200).set_body_json(joke_json(
            7,
            "programming",
            "How many programmers does it take to change a light bulb",
            "None that is a hardware problem",
        )),
    )
    .await;

    let html = get(build_app(&mock), "/random").await.text();

    assert!(html.contains("How many programmers does it take to change a light bulb"));
    assert!(html.contains("<span class=\"joke-type\">programming</span>"));
}

/// GET /dadjoke - 本文をsetupに、オチは固定の絵文字
#[tokio::test]
async fn test_dadjoke_renders_placeholder_punchline() {
    let mock = MockServer::start().await;
    mock_dad_joke(
        &mock,
        ResponseTemplate::new(200).set_body_json(json!({
            "id": "R7UfaahVfFd",
            "joke": "I only know 25 letters of the alphabet. I do not know y.",
            "status": 200
        })),
    )
    .await;

    let response = get(build_app(&mock), "/dadjoke").await;

    assert_eq!(response.status, StatusCode::OK);
    let html = response.text();
    assert!(html.contains("I only know 25 letters of the alphabet. I do not know y."));
    assert!(html.contains("😄"));
    assert!(html.contains("data-joke-id=\"R7UfaahVfFd\""));
    assert!(html.contains("<span class=\"joke-type\">dad</span>"));
}

/// GET /dadjoke - 上流失敗時は固定メッセージ
#[tokio::test]
async fn test_dadjoke_upstream_failure_renders_error() {
    let mock = failing_provider().await;

    let response = get(build_app(&mock), "/dadjoke").await;

    assert_eq!(response.status, StatusCode::OK);
    let html = response.text();
    assert!(html.contains("Unable to fetch dad joke"));
    assert!(!html.contains("joke-card"));
}

/// 上流の値はHTMLエスケープされる
#[tokio::test]
async fn test_featured_joke_is_html_escaped() {
    let mock = MockServer::start().await;
    mock_random_joke(
        &mock,
        ResponseTemplate::new(200).set_body_json(joke_json(
            1,
            "general",
            "<script>alert(1)</script>",
            "nope",
        )),
    )
    .await;

    let html = get(build_app(&mock), "/").await.text();

    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));
}

/// GET /random/ - 末尾スラッシュ付きでも `/random` と同じ
#[tokio::test]
async fn test_random_trailing_slash_renders_featured_joke() {
    let mock = MockServer::start().await;
    mock_random_joke(
        &mock,
        ResponseTemplate::new(200).set_body_json(joke_json(
            3,
            "general",
            "Slash setup",
            "Slash punchline",
        )),
    )
    .await;

    let response = get(build_app(&mock), "/random/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text().contains("Slash setup"));
}

/// 上流がpunchlineを省略しても、エラーにせず前振りだけ表示する
#[tokio::test]
async fn test_home_renders_joke_without_punchline() {
    let mock = MockServer::start().await;
    mock_random_joke(
        &mock,
        ResponseTemplate::new(200)
            .set_body_json(json!({"id": 1, "type": "general", "setup": "only setup"})),
    )
    .await;

    let response = get(build_app(&mock), "/").await;

    assert_eq!(response.status, StatusCode::OK);
    let html = response.text();
    assert!(html.contains("only setup"));
    assert!(html.contains("featured-joke"));
    assert!(!html.contains("role=\"alert\""));
}
