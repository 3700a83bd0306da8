//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use crate::common::error::JokeError;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, warn};

/// JSON APIの失敗レスポンス本体
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// 常に `false`
    pub success: bool,
    /// ハンドラーごとの固定メッセージ
    pub message: String,
}

/// JSON API用のエラーレスポンス型
///
/// 上流の詳細はログにのみ出力し、クライアントにはハンドラー固有のメッセージを返す。
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// 上流呼び出し失敗を500レスポンスに変換する
    pub fn upstream(message: impl Into<String>, err: JokeError) -> Self {
        let message = message.into();
        warn!(error = %err, "{}", message);
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
        }
    }

    /// HTTPステータス
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// クライアントに返すメッセージ
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

/// ページ描画用のエラーレスポンス型
///
/// 上流失敗はページ内のエラーメッセージとして扱うため、ここに来るのは描画失敗のみ。
#[derive(Debug)]
pub struct PageError(pub JokeError);

impl From<JokeError> for PageError {
    fn from(err: JokeError) -> Self {
        PageError(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "Failed to render page");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("Internal server error"),
        )
            .into_response()
    }
}
