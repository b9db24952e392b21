use crate::prelude::*;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "claude-opus-4-20250514";
pub const DEFAULT_ANTHROPIC_URL: &str = "https://api.anthropic.com";

/// Options for the `serve` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ServeOptions {
    /// Anthropic API key
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Model used to analyze images
    #[arg(long, env = "ANTHROPIC_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Maximum number of tokens the model may produce
    #[arg(long, env = "ANTHROPIC_MAX_TOKENS", default_value = "2000")]
    pub max_tokens: u32,

    /// Anthropic API base URL
    #[arg(long, env = "ANTHROPIC_BASE_URL", default_value = DEFAULT_ANTHROPIC_URL)]
    pub anthropic_url: String,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Largest accepted request body, in MiB
    #[arg(long, env = "BODY_LIMIT_MB", default_value = "50")]
    pub body_limit_mb: usize,

    /// Seconds to wait for the model API before giving up
    #[arg(long, env = "ANTHROPIC_TIMEOUT_SECS", default_value = "600")]
    pub timeout_secs: u64,
}

/// Settings shared by every request, fixed at startup.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub anthropic_url: String,
    pub host: String,
    pub port: u16,
    pub body_limit_bytes: usize,
    pub request_timeout: Duration,
}

impl RelayConfig {
    pub fn addr(&self) -> String {
        f!("{}:{}", self.host, self.port)
    }
}

impl TryFrom<ServeOptions> for RelayConfig {
    type Error = Error;

    fn try_from(options: ServeOptions) -> std::result::Result<Self, Self::Error> {
        if options.api_key.trim().is_empty() {
            return Err(Error::Config("ANTHROPIC_API_KEY is empty".to_string()));
        }
        if options.model.trim().is_empty() {
            return Err(Error::Config("model name is empty".to_string()));
        }
        if options.max_tokens == 0 {
            return Err(Error::Config("max tokens must be positive".to_string()));
        }
        if options.body_limit_mb == 0 {
            return Err(Error::Config("body limit must be positive".to_string()));
        }
        if options.timeout_secs == 0 {
            return Err(Error::Config("timeout must be positive".to_string()));
        }

        let body_limit_bytes = options
            .body_limit_mb
            .checked_mul(1024 * 1024)
            .ok_or_else(|| {
                Error::Config(f!(
                    "body limit of {} MiB is too large",
                    options.body_limit_mb
                ))
            })?;

        Ok(Self {
            api_key: options.api_key.trim().to_string(),
            model: options.model,
            max_tokens: options.max_tokens,
            anthropic_url: options.anthropic_url.trim_end_matches('/').to_string(),
            host: options.host,
            port: options.port,
            body_limit_bytes,
            request_timeout: Duration::from_secs(options.timeout_secs),
        })
    }
}
