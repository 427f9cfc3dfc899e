//! Build-time Configuration
//!
//! `TASKS_API_BASE_URL` and `TASKS_LOG_LEVEL` are read when the bundle is built.

use std::str::FromStr;

use log::LevelFilter;

/// Where the task API lives
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Configured base URL, or the page origin when none was given
    pub fn from_build_env() -> Self {
        match option_env!("TASKS_API_BASE_URL").filter(|v| !v.is_empty()) {
            Some(base) => Self::new(base),
            None => Self::new(&page_origin().unwrap_or_default()),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

pub fn log_level() -> LevelFilter {
    parse_log_level(option_env!("TASKS_LOG_LEVEL"))
}

fn parse_log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| LevelFilter::from_str(v).ok())
        .unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        assert_eq!(ApiConfig::new("http://localhost:3000/").url("/api/tarefas"), "http://localhost:3000/api/tarefas");
        assert_eq!(ApiConfig::new("https://tasks.example.com").url("/api/tarefas/3"), "https://tasks.example.com/api/tarefas/3");
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level(None), LevelFilter::Info);
        assert_eq!(parse_log_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_log_level(Some("WARN")), LevelFilter::Warn);
        assert_eq!(parse_log_level(Some("loud")), LevelFilter::Info);
    }
}
