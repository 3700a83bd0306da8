//! ページ描画ハンドラー
//!
//! どのハンドラーも上流呼び出しは1回のみ。失敗時も200で同じテンプレートを返し、
//! ページ内にエラーメッセージを表示する。

use super::error::PageError;
use crate::common::error::{JokeError, JokeResult};
use crate::common::types::Joke;
use crate::provider::JokeClient;
use crate::shuffle::shuffle;
use crate::AppState;
use askama::Template;
use axum::{
    extract::{Path, State},
    response::Html,
};
use tracing::warn;

/// `/` の上流失敗時メッセージ
pub const HOME_ERROR: &str = "Unable to load jokes at this time";
/// `/random` の上流失敗時メッセージ
pub const RANDOM_ERROR: &str = "Unable to fetch random joke";
/// `/dadjoke` の上流失敗時メッセージ
pub const DAD_JOKE_ERROR: &str = "Unable to fetch dad joke";

/// ナビゲーションに表示するカテゴリ（表示のみ。パスパラメータの検証には使わない）
pub const NAV_CATEGORIES: &[&str] = &["general", "programming", "knock-knock", "dad"];

/// ナビゲーションリンク
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// リンク先
    pub href: String,
    /// 表示名
    pub label: String,
    /// 現在表示中のカテゴリか
    pub active: bool,
}

/// トップページのビューモデル
///
/// `featured_joke` と `jokes` は同時に設定されない。`error` はどちらとも排他。
#[derive(Debug, Clone, Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    /// 大きく表示する1件
    pub featured_joke: Option<Joke>,
    /// カテゴリのジョーク一覧
    pub jokes: Option<Vec<Joke>>,
    /// 表示中のカテゴリ
    pub selected_category: Option<String>,
    /// エラーメッセージ
    pub error: Option<String>,
    /// ナビゲーション
    pub nav: Vec<NavLink>,
}

impl IndexPage {
    fn new(
        featured_joke: Option<Joke>,
        jokes: Option<Vec<Joke>>,
        selected_category: Option<String>,
        error: Option<String>,
    ) -> Self {
        let nav = NAV_CATEGORIES
            .iter()
            .map(|category| NavLink {
                href: format!("/category/{}", category),
                label: (*category).to_string(),
                active: selected_category.as_deref() == Some(*category),
            })
            .collect();

        Self {
            featured_joke,
            jokes,
            selected_category,
            error,
            nav,
        }
    }

    /// 1件を大きく表示するページ
    pub fn featured(joke: Joke) -> Self {
        Self::new(Some(joke), None, None, None)
    }

    /// カテゴリ一覧ページ
    pub fn category(category: &str, jokes: Vec<Joke>) -> Self {
        Self::new(None, Some(jokes), Some(category.to_string()), None)
    }

    /// エラーページ（ジョークデータなし）
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(None, None, None, Some(message.into()))
    }

    fn from_featured(result: JokeResult<Joke>, message: &str) -> Self {
        match result {
            Ok(joke) => Self::featured(joke),
            Err(err) => {
                warn!(error = %err, "{}", message);
                Self::error(message)
            }
        }
    }
}

/// `/` のページを組み立てる
pub async fn home_page(jokes: &JokeClient) -> IndexPage {
    IndexPage::from_featured(jokes.random_joke().await, HOME_ERROR)
}

/// `/random` のページを組み立てる
pub async fn random_page(jokes: &JokeClient) -> IndexPage {
    IndexPage::from_featured(jokes.random_joke().await, RANDOM_ERROR)
}

/// `/dadjoke` のページを組み立てる
pub async fn dad_joke_page(jokes: &JokeClient) -> IndexPage {
    IndexPage::from_featured(jokes.dad_joke().await, DAD_JOKE_ERROR)
}

/// `/category/{type}` のページを組み立てる
///
/// 上流が空配列を返した場合もエラーにはせず、空の一覧を表示する。
pub async fn category_page(jokes: &JokeClient, category: &str) -> IndexPage {
    match jokes.category_jokes(category).await {
        Ok(list) => IndexPage::category(category, shuffle(&list)),
        Err(err) => {
            let message = format!("Unable to fetch {} jokes", category);
            warn!(error = %err, category = %category, "{}", message);
            IndexPage::error(message)
        }
    }
}

fn render(page: IndexPage) -> Result<Html<String>, PageError> {
    page.render()
        .map(Html)
        .map_err(|e| PageError(JokeError::Render(e.to_string())))
}

/// GET / - ランダムなジョークを1件表示
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    render(home_page(&state.jokes).await)
}

/// GET /random - 別のランダムなジョークを表示
pub async fn random(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    render(random_page(&state.jokes).await)
}

/// GET /dadjoke - dadジョークを表示
pub async fn dad_joke(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    render(dad_joke_page(&state.jokes).await)
}

/// GET /category/{type} - カテゴリのジョークをシャッフルして一覧表示
pub async fn category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Html<String>, PageError> {
    render(category_page(&state.jokes, &category).await)
}
