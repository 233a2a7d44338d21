use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub dataset_path: PathBuf,
    pub policy_path: PathBuf,
    pub insight_api_url: Option<String>,
    pub insight_api_key: Option<String>,
    pub insight_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("dataset_path", &self.dataset_path)
            .field("policy_path", &self.policy_path)
            .field("insight_api_url", &self.insight_api_url)
            .field(
                "insight_api_key",
                &self.insight_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("insight_timeout_secs", &self.insight_timeout_secs)
            .finish()
    }
}
