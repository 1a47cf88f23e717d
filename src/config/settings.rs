use serde::{Deserialize, Serialize};

/// Main configuration structure
///
/// Plain values come before the tables so the file serializes as valid TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Write debug logs to a file instead of stderr
    #[serde(default)]
    pub debug: bool,

    /// Debug log file (or directory) path, `~` is expanded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_log_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_log_rotation: Option<DebugLogRotation>,

    /// How many rotated log files to keep (0 keeps everything)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_log_keep: Option<usize>,

    /// Generative model used to answer searches
    #[serde(default)]
    pub model: ModelSettings,

    /// Local HTTP server settings
    #[serde(default)]
    pub server: ServerSettings,
}

/// Which Gemini model to call and where
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelSettings {
    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            model: default_model(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerSettings {
    /// Address the page is served on (`host:port`)
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Debug log file rotation policy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DebugLogRotation {
    /// One append-only file
    None,
    /// `tracing_appender` daily files, `{base}.{YYYY-MM-DD}`
    Daily,
}

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BIND: &str = "127.0.0.1:3410";

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}
