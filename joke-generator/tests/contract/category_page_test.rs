//! Contract Test: GET /category/{type}
//!
//! カテゴリはそのまま上流に渡し、最大10件をシャッフルして一覧表示する。

use crate::support::http::get;
use crate::support::providers::{build_app, mock_category, ten_jokes};
use axum::http::StatusCode;
use serde_json::json;
use wiremock::{MockServer, ResponseTemplate};

fn setup_order(html: &str) -> Vec<u32> {
    html.split("Setup number ")
        .skip(1)
        .map(|rest| {
            rest.chars()
                .take_while(|c| c.is_ascii_digit())
                .collect::<String>()
                .parse()
                .unwrap()
        })
        .collect()
}

/// 10件すべてが表示され、入力の順列になっている
#[tokio::test]
async fn test_category_renders_all_ten_jokes() {
    let mock = MockServer::start().await;
    mock_category(
        &mock,
        "programming",
        ResponseTemplate::new(200).set_body_json(ten_jokes("programming")),
    )
    .await;

    let response = get(build_app(&mock), "/category/programming").await;

    assert_eq!(response.status, StatusCode::OK);
    let html = response.text();
    assert_eq!(html.matches("<li class=\"joke-card\"").count(), 10);

    let mut order = setup_order(&html);
    assert_eq!(order.len(), 10);
    order.sort_unstable();
    assert_eq!(order, (1..=10).collect::<Vec<u32>>());

    for i in 1..=10 {
        assert!(html.contains(&format!("Punchline number {}<", i)));
    }
    assert!(html.contains("<h2>programming jokes</h2>"));
    assert!(html.contains("nav-link active\">programming</a>"));
    assert!(!html.contains("featured-joke"));
    assert!(!html.contains("role=\"alert\""));
}

/// 表示順は毎回同じとは限らない（シャッフルされている）
#[tokio::test]
async fn test_category_order_is_shuffled() {
    let mock = MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::path("/jokes/general/ten"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ten_jokes("general")))
        .mount(&mock)
        .await;

    let app = build_app(&mock);
    let original: Vec<u32> = (1..=10).collect();
    let mut saw_reordering = false;
    // 10! 通りなので、20回すべて元の順序になる確率は無視できる
    for _ in 0..20 {
        let order = setup_order(&get(app.clone(), "/category/general").await.text());
        if order != original {
            saw_reordering = true;
            break;
        }
    }
    assert!(saw_reordering);
}

/// 上流が空配列を返した場合はエラーにせず空の一覧
#[tokio::test]
async fn test_category_empty_result_renders_empty_list() {
    let mock = MockServer::start().await;
    mock_category(
        &mock,
        "unknown",
        ResponseTemplate::new(200).set_body_json(json!([])),
    )
    .await;

    let response = get(build_app(&mock), "/category/unknown").await;

    assert_eq!(response.status, StatusCode::OK);
    let html = response.text();
    assert!(html.contains("No jokes here."));
    assert!(!html.contains("role=\"alert\""));
    assert!(!html.contains("<li class=\"joke-card\""));
}

/// 上流失敗時はカテゴリ名を含むエラー
#[tokio::test]
async fn test_category_upstream_failure_names_category() {
    let mock = MockServer::start().await;
    mock_category(&mock, "bogus", ResponseTemplate::new(404)).await;

    let response = get(build_app(&mock), "/category/bogus").await;

    assert_eq!(response.status, StatusCode::OK);
    let html = response.text();
    assert!(html.contains("Unable to fetch bogus jokes"));
    assert!(!html.contains("joke-card"));
    assert!(!html.contains("<h2>"));
}

/// 末尾スラッシュ付きでも同じページを返す
#[tokio::test]
async fn test_category_trailing_slash_renders_same_page() {
    let mock = MockServer::start().await;
    mock_category(
        &mock,
        "programming",
        ResponseTemplate::new(200).set_body_json(ten_jokes("programming")),
    )
    .await;

    let response = get(build_app(&mock), "/category/programming/").await;

    assert_eq!(response.status, StatusCode::OK);
    let html = response.text();
    assert_eq!(html.matches("<li class=\"joke-card\"").count(), 10);
    assert!(html.contains("<h2>programming jokes</h2>"));
}
