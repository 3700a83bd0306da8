//! JSON APIハンドラー
//!
//! 上流のレスポンスは加工せずにそのまま返す（カテゴリ一覧もシャッフルしない）。

use super::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;

/// `/api/random` の上流失敗時メッセージ
pub const RANDOM_JOKE_ERROR: &str = "Error fetching joke";

/// GET /api/random のレスポンス
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RandomJokeResponse {
    /// 常に `true`
    pub success: bool,
    /// 上流ペイロード
    pub joke: Value,
}

/// GET /api/category/{type} のレスポンス
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryJokesResponse {
    /// 常に `true`
    pub success: bool,
    /// 上流ペイロード
    pub jokes: Value,
    /// リクエストされたカテゴリ
    pub category: String,
}

/// GET /api/random - ランダムなジョークをJSONで返す
pub async fn random_joke(
    State(state): State<AppState>,
) -> Result<Json<RandomJokeResponse>, ApiError> {
    let joke = state
        .jokes
        .random_joke_raw()
        .await
        .map_err(|err| ApiError::upstream(RANDOM_JOKE_ERROR, err))?;

    Ok(Json(RandomJokeResponse {
        success: true,
        joke,
    }))
}

/// GET /api/category/{type} - カテゴリのジョークをJSONで返す
pub async fn category_jokes(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<CategoryJokesResponse>, ApiError> {
    let jokes = state
        .jokes
        .category_jokes_raw(&category)
        .await
        .map_err(|err| ApiError::upstream(format!("Error fetching {} jokes", category), err))?;

    Ok(Json(CategoryJokesResponse {
        success: true,
        jokes,
        category,
    }))
}
