//! Course configuration
//!
//! The configuration a single course instance runs under. The views receive
//! this as an explicit value object; nothing reads configuration ambiently.

use serde::{Deserialize, Serialize};

/// Configuration for one course in one semester
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CourseConfig {
    /// Base URL of the site, e.g. `http://localhost/submit`
    pub site_url: String,

    /// Semester identifier, e.g. `s26`
    pub semester: String,

    /// Course identifier, e.g. `csci1200`
    pub course: String,

    /// Base URL or filesystem path student repositories hang off of
    pub vcs_base_url: String,

    /// Installation root on the server filesystem
    pub submitty_path: String,

    /// Public URL serving the repositories under `<submitty_path>/vcs`
    pub vcs_url: String,
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            site_url: "http://localhost/submit".to_string(),
            semester: "s26".to_string(),
            course: "sample".to_string(),
            vcs_base_url: "/var/local/submit/vcs".to_string(),
            submitty_path: "/var/local/submit".to_string(),
            vcs_url: "http://localhost/git".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable not set: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl CourseConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("SUBMIT_SITE_URL") {
            config.site_url = url;
        }
        if let Ok(semester) = std::env::var("SUBMIT_SEMESTER") {
            config.semester = semester;
        }
        if let Ok(course) = std::env::var("SUBMIT_COURSE") {
            config.course = course;
        }
        if let Ok(base) = std::env::var("SUBMIT_VCS_BASE_URL") {
            config.vcs_base_url = base;
        }
        if let Ok(path) = std::env::var("SUBMIT_PATH") {
            config.submitty_path = path;
        }
        if let Ok(url) = std::env::var("SUBMIT_VCS_URL") {
            config.vcs_url = url;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CourseConfig::default();
        assert_eq!(config.semester, "s26");
        assert_eq!(config.submitty_path, "/var/local/submit");
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = CourseConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: CourseConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.site_url, config.site_url);
        assert_eq!(back.vcs_url, config.vcs_url);
    }
}
