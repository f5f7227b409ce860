use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use quizgen_llm::client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

use crate::middleware::rate_limit::{DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW};

/// 20 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

pub const DEFAULT_PUBLIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

/// Server configuration from flags, environment, or `.env`.
///
/// Deliberately not `Debug`: it carries the API key.
#[derive(Parser, Clone)]
#[command(version, about = "Generate quiz questions from PDF documents")]
pub struct Config {
    /// Address to bind to.
    #[arg(long, env = "QUIZGEN_ADDRESS", default_value = "0.0.0.0")]
    pub address: IpAddr,

    /// Port to listen on.
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// API key for the chat-completion service. Without it the server
    /// answers with mock questions.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// Base URL of an OpenAI-compatible API.
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub openai_base_url: String,

    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Timeout for one completion request, in seconds.
    #[arg(long, env = "QUIZGEN_REQUEST_TIMEOUT_SECS", default_value_t = 60)]
    pub request_timeout_secs: u64,

    /// Where uploads are staged while their text is extracted.
    #[arg(long, env = "QUIZGEN_UPLOAD_DIR", default_value = "uploads")]
    pub upload_dir: PathBuf,

    /// Static front-end assets. Defaults to the `public` directory of the
    /// source tree the binary was built from.
    #[arg(long, env = "QUIZGEN_PUBLIC_DIR", default_value = DEFAULT_PUBLIC_DIR)]
    pub public_dir: PathBuf,

    #[arg(long, env = "QUIZGEN_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,

    /// Uploads allowed per client IP within one window.
    #[arg(long, env = "QUIZGEN_RATE_LIMIT_MAX", default_value_t = DEFAULT_MAX_REQUESTS)]
    pub rate_limit_max: u32,

    #[arg(
        long,
        env = "QUIZGEN_RATE_LIMIT_WINDOW_SECS",
        default_value_t = DEFAULT_WINDOW.as_secs()
    )]
    pub rate_limit_window_secs: u64,

    /// Identify clients by the first `X-Forwarded-For` entry.
    #[arg(long, env = "QUIZGEN_TRUST_PROXY")]
    pub trust_proxy: bool,

    /// Emit logs as JSON lines.
    #[arg(long, env = "QUIZGEN_LOG_JSON")]
    pub log_json: bool,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit_window_secs)
    }

    /// Client settings, or `None` when no usable API key is set.
    pub fn chat_client_config(&self) -> Option<ClientConfig> {
        let api_key = self
            .openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())?;

        Some(ClientConfig {
            api_key: api_key.to_string(),
            base_url: self.openai_base_url.clone(),
            model: self.model.clone(),
            timeout: self.request_timeout(),
        })
    }
}
