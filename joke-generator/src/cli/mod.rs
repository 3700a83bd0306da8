//! CLI module for joke-generator

/// serve サブコマンド
pub mod serve;

use clap::{Parser, Subcommand};

/// Joke Generator - renders jokes from public joke APIs as web pages and JSON
#[derive(Parser, Debug)]
#[command(name = "joke-generator")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    JOKES_HOST               Bind address (default: 0.0.0.0)
    JOKES_PORT               Listen port (default: 3000)
    JOKES_JOKE_API_URL       Joke provider base URL (default: https://official-joke-api.appspot.com)
    JOKES_DAD_JOKE_API_URL   Dad joke provider base URL (default: https://icanhazdadjoke.com)
    JOKES_STATIC_DIR         Static asset directory (default: public)
    JOKES_HTTP_TIMEOUT_SECS  Upstream request timeout (default: transport default)
    JOKES_LOG_LEVEL          Log level (default: info)
    JOKES_LOG_DIR            Also write daily-rotated log files here
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    Serve(serve::ServeArgs),
}
