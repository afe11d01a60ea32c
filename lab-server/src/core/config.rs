use std::path::PathBuf;

use chrono_tz::Tz;
use shared::models::BusinessInfo;

use crate::auth::JwtConfig;
use crate::utils::time::parse_timezone;
use crate::utils::{AppError, AppResult};

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./lab-data | Database and log directory |
/// | HTTP_PORT | 8080 | HTTP API port |
/// | ENVIRONMENT | development | development / staging / production |
/// | APP_ID | default-app | Deployment (tenant) id, selects the database |
/// | CATALOG_PATH | embedded | Catalog JSON on disk |
/// | PUBLIC_BASE_URL | https://your-app.com | Base of customer share links |
/// | QR_SERVICE_URL | https://api.qrserver.com/v1/create-qr-code/ | QR image generator |
/// | QR_TIMEOUT_MS | 5000 | QR proxy timeout |
/// | BUSINESS_TZ | Asia/Seoul | Timezone for prep dates |
/// | SELLER_NAME / SELLER_ADDRESS / SELLER_PHONE | 명에스테틱 | Seller block on the sheet |
/// | MANUFACTURER_NAME / MANUFACTURER_ADDRESS | 주식회사 제이케이아이앤씨 | Manufacturer block |
/// | LOG_LEVEL | info | Log level |
/// | LOG_JSON | false | JSON log lines |
/// | REQUEST_TIMEOUT_MS | 30000 | Per-request timeout |
///
/// ```ignore
/// WORK_DIR=/data/lab HTTP_PORT=9000 cargo run -p lab-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: String,
    pub http_port: u16,
    pub environment: String,
    pub app_id: String,
    pub catalog_path: Option<String>,
    pub public_base_url: String,
    pub qr_service_url: String,
    pub qr_timeout_ms: u64,
    pub business_tz: String,
    pub seller: BusinessInfo,
    pub manufacturer: BusinessInfo,
    pub log_level: String,
    pub log_json: bool,
    pub request_timeout_ms: u64,
    pub jwt: JwtConfig,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: env_or("WORK_DIR", "./lab-data"),
            http_port: env_parse("HTTP_PORT", 8080),
            environment: env_or("ENVIRONMENT", "development"),
            app_id: env_or("APP_ID", "default-app"),
            catalog_path: std::env::var("CATALOG_PATH").ok().filter(|p| !p.is_empty()),
            public_base_url: env_or("PUBLIC_BASE_URL", "https://your-app.com"),
            qr_service_url: env_or(
                "QR_SERVICE_URL",
                "https://api.qrserver.com/v1/create-qr-code/",
            ),
            qr_timeout_ms: env_parse("QR_TIMEOUT_MS", 5000),
            business_tz: env_or("BUSINESS_TZ", "Asia/Seoul"),
            seller: BusinessInfo {
                name: env_or("SELLER_NAME", "명에스테틱"),
                address: env_or("SELLER_ADDRESS", "부산 동래구 안남로 80, 4층"),
                phone: Some(env_or("SELLER_PHONE", "051-582-0102")),
            },
            manufacturer: BusinessInfo {
                name: env_or("MANUFACTURER_NAME", "주식회사 제이케이아이앤씨"),
                address: env_or(
                    "MANUFACTURER_ADDRESS",
                    "부산광역시남구 신선로 365, 513,517호 산학협력관(용당동, 부경대학교용당캠퍼스)",
                ),
                phone: None,
            },
            log_level: env_or("LOG_LEVEL", "info"),
            log_json: env_parse("LOG_JSON", false),
            request_timeout_ms: env_parse("REQUEST_TIMEOUT_MS", 30000),
            jwt: JwtConfig::default(),
        }
    }

    /// Override the work dir and port, keeping everything else from the environment
    ///
    /// Used by tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Checks that cannot fall back to a default
    pub fn validate(&self) -> AppResult<()> {
        self.timezone()?;
        for (name, url) in [
            ("PUBLIC_BASE_URL", &self.public_base_url),
            ("QR_SERVICE_URL", &self.qr_service_url),
        ] {
            reqwest::Url::parse(url)
                .map_err(|e| AppError::config(format!("{name} is not a valid URL: {e}")))?;
        }
        if self.is_production() && std::env::var("JWT_SECRET").is_err() {
            return Err(AppError::config("JWT_SECRET must be set in production"));
        }
        Ok(())
    }

    pub fn timezone(&self) -> AppResult<Tz> {
        parse_timezone(&self.business_tz)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// `{work_dir}/database`
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// `{work_dir}/logs`
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Create the work directory layout
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
