use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// public address of the server (http://localhost:5000)
    pub host: String,
    /// port to run the server on
    pub port: u16,
    /// connection string for mongodb
    pub mongo_url: String,
    /// database name, defaults to 'bootcamp'
    pub database_name: Option<String>,
    /// secret used to sign jwt tokens
    pub jwt_secret: String,
    /// access token lifetime in seconds, defaults to 30 days
    pub jwt_expiry: Option<u64>,
    /// lifetime of the token cookie in days, defaults to 30
    pub cookie_expire_days: Option<i64>,
    /// mark the token cookie as Secure (set in production)
    pub cookie_secure: Option<bool>,
    /// enable the api reference ui
    pub enable_docs: Option<bool>,
    /// directory bootcamp photos are written to, defaults to './public/uploads'
    pub file_upload_path: Option<String>,
    /// maximum photo upload size in bytes, defaults to 1000000
    pub max_file_upload: Option<usize>,
    /// geocoding endpoint used to resolve zipcodes
    pub geocoder_url: Option<String>,
    /// endpoint of the transactional mail api
    pub mail_api_url: Option<String>,
    /// server token for the mail api
    pub mail_api_key: Option<String>,
    /// sender address for outgoing mail
    pub mail_from: Option<String>,
}

impl AppConfig {
    pub fn database_name(&self) -> String {
        self.database_name
            .clone()
            .unwrap_or_else(|| "bootcamp".to_string())
    }

    pub fn file_upload_path(&self) -> String {
        self.file_upload_path
            .clone()
            .unwrap_or_else(|| "./public/uploads".to_string())
    }

    pub fn max_file_upload(&self) -> usize {
        self.max_file_upload.unwrap_or(1_000_000)
    }
}

pub fn load_config() -> Result<AppConfig, config::ConfigError> {
    dotenvy::dotenv().ok();

    let settings = Config::builder()
        .set_default("port", 5000)?
        .add_source(File::with_name(".env").required(false))
        .add_source(Environment::default())
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    Ok(config)
}
