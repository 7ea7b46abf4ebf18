use std::path::PathBuf;

use crate::router::RouterConfig;

const DEFAULT_CORPUS_PATH: &str = "data/ielts_knowledge_graph.json";
const DEFAULT_LOG_DIR: &str = "./logs";

#[derive(Debug, Clone)]
pub struct Config {
    pub corpus_path: PathBuf,
    pub log_level: String,
    /// Directory for the daily-rolling log file; `None` keeps logs on stderr only.
    pub log_dir: Option<PathBuf>,
    pub router: RouterConfig,
}

impl Config {
    pub fn from_env() -> Self {
        let corpus_path = std::env::var("RAG_CORPUS_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CORPUS_PATH));

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let log_dir = file_log_dir(
            std::env::var("ENABLE_FILE_LOGS").ok().as_deref(),
            std::env::var("LOG_DIR").ok(),
        );

        Self {
            corpus_path,
            log_level,
            log_dir,
            router: RouterConfig::from_env(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_path: PathBuf::from(DEFAULT_CORPUS_PATH),
            log_level: "info".to_string(),
            log_dir: None,
            router: RouterConfig::default(),
        }
    }
}

/// File logging is on for `true` or `1`; the directory falls back to
/// `./logs` when unset or blank.
fn file_log_dir(enabled: Option<&str>, dir: Option<String>) -> Option<PathBuf> {
    if !matches!(enabled.map(str::trim), Some("true" | "1")) {
        return None;
    }
    let dir = dir
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_DIR.to_string());
    Some(PathBuf::from(dir))
}
