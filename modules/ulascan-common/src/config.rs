use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Sentiment prediction service
    pub ml_url: String,
    pub ml_api_key: String,

    // Generative text backend
    pub gemini_api_key: String,

    // Auth
    pub jwt_secret: String,

    // Web server
    pub app_host: String,
    pub app_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        Self {
            ml_url: required_env("ML_URL"),
            ml_api_key: required_env("ML_API_KEY"),
            gemini_api_key: required_env("GEMINI_API_KEY"),
            jwt_secret: required_env("JWT_SECRET"),
            app_host: env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            app_port: env::var("APP_PORT")
                .unwrap_or_else(|_| "8888".to_string())
                .parse()
                .expect("APP_PORT must be a number"),
        }
    }

    /// Log the loaded configuration without exposing secrets.
    pub fn log_redacted(&self) {
        tracing::info!(
            ml_url = self.ml_url.as_str(),
            ml_api_key = redact(&self.ml_api_key),
            gemini_api_key = redact(&self.gemini_api_key),
            jwt_secret = redact(&self.jwt_secret),
            host = self.app_host.as_str(),
            port = self.app_port,
            "Config loaded"
        );
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        "(empty)"
    } else {
        "(set)"
    }
}
