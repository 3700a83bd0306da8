//! ジョークプロバイダーHTTPクライアント
//!
//! 1回のリクエストにつき上流へのGETは1回のみ。リトライは行わない。

use crate::common::error::{JokeError, JokeResult};
use crate::common::types::{DadJokePayload, Joke};
use crate::config::{normalize_base_url, AppConfig};
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

const USER_AGENT: &str = concat!(
    "joke-generator/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/joke-generator/joke-generator)"
);

/// 2つのジョークプロバイダーへのクライアント
#[derive(Clone, Debug)]
pub struct JokeClient {
    http_client: Client,
    joke_api_url: String,
    dad_joke_api_url: String,
}

impl JokeClient {
    /// 既存のHTTPクライアントとベースURLから作成
    pub fn new(http_client: Client, joke_api_url: &str, dad_joke_api_url: &str) -> Self {
        Self {
            http_client,
            joke_api_url: normalize_base_url(joke_api_url),
            dad_joke_api_url: normalize_base_url(dad_joke_api_url),
        }
    }

    /// 設定からHTTPクライアントを構築して作成
    pub fn from_config(config: &AppConfig) -> JokeResult<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| JokeError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::new(
            http_client,
            &config.joke_api_url,
            &config.dad_joke_api_url,
        ))
    }

    /// 主プロバイダーのベースURL
    pub fn joke_api_url(&self) -> &str {
        &self.joke_api_url
    }

    /// dadジョークプロバイダーのベースURL
    pub fn dad_joke_api_url(&self) -> &str {
        &self.dad_joke_api_url
    }

    /// `GET {joke_api}/random_joke` のレスポンスをそのまま返す
    pub async fn random_joke_raw(&self) -> JokeResult<Value> {
        let url = format!("{}/random_joke", self.joke_api_url);
        self.get_json(&url, false).await
    }

    /// ランダムなジョークを1件取得
    pub async fn random_joke(&self) -> JokeResult<Joke> {
        let value = self.random_joke_raw().await?;
        Ok(serde_json::from_value(value)?)
    }

    /// `GET {joke_api}/jokes/{category}/ten` のレスポンスをそのまま返す
    ///
    /// カテゴリは検証せずにそのままパスへ埋め込む。
    pub async fn category_jokes_raw(&self, category: &str) -> JokeResult<Value> {
        let url = format!("{}/jokes/{}/ten", self.joke_api_url, category);
        self.get_json(&url, false).await
    }

    /// カテゴリのジョークを最大10件取得（順序は上流のまま）
    pub async fn category_jokes(&self, category: &str) -> JokeResult<Vec<Joke>> {
        let value = self.category_jokes_raw(category).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// dadジョークを1件取得し、統一形式へ変換
    pub async fn dad_joke(&self) -> JokeResult<Joke> {
        let url = format!("{}/", self.dad_joke_api_url);
        let value = self.get_json(&url, true).await?;
        let payload: DadJokePayload = serde_json::from_value(value)?;
        Ok(Joke::from(payload))
    }

    async fn get_json(&self, url: &str, accept_json: bool) -> JokeResult<Value> {
        debug!("Fetching jokes from provider: {}", url);

        let mut request = self.http_client.get(url);
        if accept_json {
            request = request.header(ACCEPT, "application/json");
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(JokeError::UpstreamStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}
