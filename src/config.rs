use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub rates_url: Option<String>,
    pub rates_token: Option<String>,
    pub session_dir: PathBuf,
    pub http_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let base_url = env::var("STORE_API_URL")?;
        let rates_url = env::var("RATES_API_URL").ok();
        let rates_token = env::var("RATES_ACCESS_TOKEN").ok();
        let session_dir = env::var("SESSION_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".sessions"));
        let http_timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse::<u64>().ok())
            .unwrap_or(30);
        Ok(Self {
            base_url,
            rates_url,
            rates_token,
            session_dir,
            http_timeout_secs,
        })
    }
}
