//! 上流ジョークプロバイダー
//!
//! - 主プロバイダー（official-joke-api）: ランダム1件、カテゴリ別10件
//! - dadジョークプロバイダー（icanhazdadjoke）: 1件、`Accept: application/json` 必須

/// プロバイダーHTTPクライアント
pub mod client;

pub use client::JokeClient;
