//! ジョーク型定義
//!
//! 2つのプロバイダーのレスポンス形式を、表示用の統一された `Joke` に揃える。

use serde::{Deserialize, Serialize};
use std::fmt;

/// dadジョークに付与する `type`
pub const DAD_JOKE_TYPE: &str = "dad";

/// dadジョークのオチ欄に表示する固定値（プロバイダーにオチの概念がない）
pub const DAD_JOKE_PUNCHLINE: &str = "😄";

/// プロバイダーが割り当てたジョークID（数値または文字列）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JokeId {
    /// 数値ID（official-joke-api）
    Number(i64),
    /// 文字列ID（icanhazdadjoke）
    Text(String),
}

impl fmt::Display for JokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JokeId::Number(id) => write!(f, "{}", id),
            JokeId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for JokeId {
    fn from(id: i64) -> Self {
        JokeId::Number(id)
    }
}

impl From<&str> for JokeId {
    fn from(id: &str) -> Self {
        JokeId::Text(id.to_string())
    }
}

/// 表示用ジョーク
///
/// 主プロバイダーのレスポンスはこの形のままデシリアライズできる。
/// `type`・`setup`・`punchline` が欠けていても空文字として受け付ける。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    /// プロバイダーのID
    pub id: JokeId,
    /// カテゴリ（dadジョークは `"dad"`）
    #[serde(rename = "type", default)]
    pub kind: String,
    /// 前振り（dadジョークは本文全体）
    #[serde(default)]
    pub setup: String,
    /// オチ
    #[serde(default)]
    pub punchline: String,
}

/// icanhazdadjoke のレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DadJokePayload {
    /// ジョークID
    pub id: JokeId,
    /// ジョーク本文
    pub joke: String,
}

impl From<DadJokePayload> for Joke {
    fn from(payload: DadJokePayload) -> Self {
        Joke {
            id: payload.id,
            kind: DAD_JOKE_TYPE.to_string(),
            setup: payload.joke,
            punchline: DAD_JOKE_PUNCHLINE.to_string(),
        }
    }
}
