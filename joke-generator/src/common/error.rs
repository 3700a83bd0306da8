//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! 上流プロバイダー呼び出しの失敗はすべて「上流呼び出し失敗」として扱われ、
//! ハンドラーごとの固定メッセージに変換される。バリアントの違いはログ用の詳細のみ。

use thiserror::Error;

/// Joke Generator 用のResult型
pub type JokeResult<T> = Result<T, JokeError>;

/// Common layer error
#[derive(Debug, Error)]
pub enum CommonError {
    /// Logging initialization error
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Joke Generator error type
#[derive(Debug, Error)]
pub enum JokeError {
    /// HTTP client error (接続失敗など)
    #[error("HTTP client error: {0}")]
    Http(String),

    /// Timeout error
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// 上流が2xx以外を返した
    #[error("Upstream {url} returned status {status}")]
    UpstreamStatus {
        /// リクエスト先URL
        url: String,
        /// HTTPステータスコード
        status: u16,
    },

    /// 上流レスポンスのデコード失敗
    #[error("Failed to decode upstream response: {0}")]
    Decode(String),

    /// テンプレート描画失敗
    #[error("Template render error: {0}")]
    Render(String),
}

impl From<reqwest::Error> for JokeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            JokeError::Timeout(err.to_string())
        } else if err.is_decode() {
            JokeError::Decode(err.to_string())
        } else {
            JokeError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for JokeError {
    fn from(err: serde_json::Error) -> Self {
        JokeError::Decode(err.to_string())
    }
}
