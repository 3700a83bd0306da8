//! 環境変数による設定管理
//!
//! すべての設定は `JOKES_*` 変数で指定する。`PORT` や `JOKE_API` などの
//! 接頭辞なしの旧名も読めるが、使用時に警告を出す。

use std::path::PathBuf;
use std::time::Duration;

/// official-joke-api のデフォルトURL
pub const DEFAULT_JOKE_API_URL: &str = "https://official-joke-api.appspot.com";

/// icanhazdadjoke のデフォルトURL
pub const DEFAULT_DAD_JOKE_API_URL: &str = "https://icanhazdadjoke.com";

/// デフォルトの待ち受けポート
pub const DEFAULT_PORT: u16 = 3000;

/// `JOKES_*` 変数を読み、未設定なら接頭辞なしの旧名を読む
///
/// 旧名（例: `PORT`）の値を使った場合は `JOKES_PORT` への移行を促す警告を出す。
///
/// # Example
/// ```
/// use joke_generator::config::get_env_with_fallback;
///
/// let port = get_env_with_fallback("JOKES_PORT", "PORT");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// [`get_env_with_fallback`] と同じだが、どちらも未設定なら `default` を返す
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// [`get_env_with_fallback`] の値を `T` にパースする（`JOKES_PORT` など）
///
/// 未設定またはパース失敗時は `default`。
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    get_env_with_fallback(new_name, old_name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// サーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// バインドアドレス
    pub host: String,
    /// 待ち受けポート
    pub port: u16,
    /// 主プロバイダー（ランダム・カテゴリ）のベースURL
    pub joke_api_url: String,
    /// dadジョークプロバイダーのベースURL
    pub dad_joke_api_url: String,
    /// 静的ファイルディレクトリ
    pub static_dir: PathBuf,
    /// 上流呼び出しのタイムアウト（未設定ならトランスポートのデフォルト）
    pub http_timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            joke_api_url: DEFAULT_JOKE_API_URL.to_string(),
            dad_joke_api_url: DEFAULT_DAD_JOKE_API_URL.to_string(),
            static_dir: PathBuf::from("public"),
            http_timeout: None,
        }
    }
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let http_timeout = get_env_with_fallback("JOKES_HTTP_TIMEOUT_SECS", "HTTP_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Self {
            host: get_env_with_fallback_or("JOKES_HOST", "HOST", &defaults.host),
            port: get_env_with_fallback_parse("JOKES_PORT", "PORT", defaults.port),
            joke_api_url: normalize_base_url(&get_env_with_fallback_or(
                "JOKES_JOKE_API_URL",
                "JOKE_API",
                DEFAULT_JOKE_API_URL,
            )),
            dad_joke_api_url: normalize_base_url(&get_env_with_fallback_or(
                "JOKES_DAD_JOKE_API_URL",
                "DAD_JOKE_API",
                DEFAULT_DAD_JOKE_API_URL,
            )),
            static_dir: get_env_with_fallback("JOKES_STATIC_DIR", "STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            http_timeout,
        }
    }

    /// `host:port` 形式のバインドアドレス
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// ブラウザで開けるローカルURL
    pub fn local_url(&self) -> String {
        let host = match self.host.as_str() {
            "0.0.0.0" | "::" | "[::]" => "localhost",
            other => other,
        };
        format!("http://{}:{}", host, self.port)
    }
}

/// ベースURL末尾のスラッシュを取り除く
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
