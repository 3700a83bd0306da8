//! 共通型定義
//!
//! ジョークの表示用データ型とエラー型

/// エラー型
pub mod error;

/// ジョーク関連の型
pub mod types;
