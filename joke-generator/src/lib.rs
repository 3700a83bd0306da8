//! Joke Generator Server
//!
//! 外部のジョークAPIからジョークを取得し、HTMLページまたはJSONとして返すWebサーバー

#![warn(missing_docs)]

/// 共通型定義（ジョーク型・エラー型）
pub mod common;

/// HTTPハンドラー（ページ描画・JSON API）
pub mod api;

/// 上流ジョークプロバイダーのHTTPクライアント
pub mod provider;

/// リストのシャッフル（Fisher–Yates）
pub mod shuffle;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// CLIインターフェース
pub mod cli;

/// axumサーバー起動・シャットダウン
pub mod server;

use std::path::PathBuf;

/// アプリケーション状態
///
/// リクエスト間で共有されるのは不変の設定とHTTPクライアントのみ。
#[derive(Clone, Debug)]
pub struct AppState {
    /// ジョークプロバイダークライアント（接続プーリング有効）
    pub jokes: provider::JokeClient,
    /// 静的ファイルの配信ディレクトリ
    pub static_dir: PathBuf,
}

impl AppState {
    /// 設定からアプリケーション状態を構築する
    pub fn from_config(config: &config::AppConfig) -> Result<Self, common::error::JokeError> {
        Ok(Self {
            jokes: provider::JokeClient::from_config(config)?,
            static_dir: config.static_dir.clone(),
        })
    }
}
