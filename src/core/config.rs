//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address and output paths are not read here; Leptos takes them from
//! `[package.metadata.leptos]` and the `LEPTOS_*` variables.

/// Enables brotli/gzip compression of responses
pub const COMPRESSION_VAR: &str = "TRADENEXUS_COMPRESSION";

/// Enables serving `.br`/`.gz` siblings of files under `/pkg`
pub const PRECOMPRESSED_VAR: &str = "TRADENEXUS_PRECOMPRESSED";

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a boolean (true/false, 1/0, yes/no, on/off), got '{value}'")]
    InvalidBool { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Compress dynamic responses (SSR HTML)
    pub compression: bool,

    /// Serve precompressed static assets
    pub precompressed_assets: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            compression: parse_bool(COMPRESSION_VAR, lookup(COMPRESSION_VAR))?
                .unwrap_or(defaults.compression),
            precompressed_assets: parse_bool(PRECOMPRESSED_VAR, lookup(PRECOMPRESSED_VAR))?
                .unwrap_or(defaults.precompressed_assets),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compression: true,
            precompressed_assets: true,
        }
    }
}

fn parse_bool(var: &'static str, value: Option<String>) -> Result<Option<bool>, ConfigError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(ConfigError::InvalidBool { var, value: raw }),
    }
}
