/// Runtime configuration, read from the environment once at startup and
/// passed down explicitly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Store connection string. When absent the server runs on the
    /// in-memory backend.
    pub mongo_url: Option<String>,
    pub db_name: String,
    /// Origins allowed by the CORS layer; a `*` entry allows any origin.
    pub cors_allowed_origins: Vec<String>,
    pub log_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            mongo_url: None,
            db_name: "soccer_builder".to_string(),
            cors_allowed_origins: vec!["*".to_string()],
            log_json: true,
        }
    }
}
