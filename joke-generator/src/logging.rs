//! ロギング初期化
//!
//! 標準出力へのfmtレイヤーに加え、`JOKES_LOG_DIR` が設定されていれば
//! 日次ローテーションのファイルにも出力する。

use crate::common::error::CommonError;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_FILE_PREFIX: &str = "joke-generator.log";

/// ログレベル（フィルタ式）を取得
///
/// `JOKES_LOG_LEVEL` を優先し、なければ標準の `RUST_LOG` を使う。
pub fn log_level() -> String {
    ["JOKES_LOG_LEVEL", "RUST_LOG"]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|level| !level.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

/// ログファイルの出力先ディレクトリ
pub fn log_dir() -> Option<PathBuf> {
    std::env::var("JOKES_LOG_DIR")
        .ok()
        .filter(|dir| !dir.trim().is_empty())
        .map(PathBuf::from)
}

/// グローバルsubscriberを初期化する
///
/// ファイル出力時はバックグラウンドライターのガードを返す。プロセス終了まで保持すること。
pub fn init() -> Result<Option<WorkerGuard>, CommonError> {
    let filter = EnvFilter::try_new(log_level())
        .map_err(|e| CommonError::Logging(format!("invalid log filter: {}", e)))?;
    let stdout_layer = fmt::layer().with_target(false);

    match log_dir() {
        Some(dir) => {
            std::fs::create_dir_all(&dir).map_err(|e| {
                CommonError::Logging(format!("failed to create {}: {}", dir.display(), e))
            })?;
            let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = fmt::layer().with_ansi(false).with_writer(writer);

            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .with(file_layer)
                .try_init()
                .map_err(|e| CommonError::Logging(e.to_string()))?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .try_init()
                .map_err(|e| CommonError::Logging(e.to_string()))?;
            Ok(None)
        }
    }
}
