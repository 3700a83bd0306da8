//! HTTPハンドラー
//!
//! ページ描画（`/`, `/random`, `/dadjoke`, `/category/{type}`）と
//! JSON API（`/api/random`, `/api/category/{type}`）

/// エラーレスポンス
pub mod error;
/// JSON API
pub mod jokes;
/// ページ描画
pub mod pages;

use crate::AppState;
use axum::{routing::get, Router};
use tower::Layer;
use tower_http::{
    normalize_path::{NormalizePath, NormalizePathLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// 末尾スラッシュを取り除いてからルーティングするアプリケーション
pub type App = NormalizePath<Router>;

/// アプリケーションを作成
///
/// `/category/general/` のような末尾スラッシュ付きのパスも同じハンドラーに届く。
/// ルーティングより前にパスを書き換える必要があるため、ルーターの外側で包む。
pub fn create_app(state: AppState) -> App {
    NormalizePathLayer::trim_trailing_slash().layer(create_router(state))
}

/// ルーターを作成
///
/// どのルートにも一致しないパスは静的ファイルディレクトリから配信する。
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(pages::home))
        .route("/random", get(pages::random))
        .route("/dadjoke", get(pages::dad_joke))
        .route("/category/{category}", get(pages::category))
        .route("/api/random", get(jokes::random_joke))
        .route("/api/category/{category}", get(jokes::category_jokes))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
