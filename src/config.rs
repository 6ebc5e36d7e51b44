use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub host: IpAddr,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub max_body_size: usize,
    pub cors_origins: Vec<String>,
    pub log_level: String,
    pub smtp: Option<SmtpConfig>,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;
        let jwt_secret = env_required("JWT_SECRET")?;

        let host: IpAddr = env_or("SKILLSYNC_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid SKILLSYNC_HOST: {e}"))?;

        let port: u16 = env_or("SKILLSYNC_PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid SKILLSYNC_PORT: {e}"))?;

        let upload_dir = PathBuf::from(env_or("SKILLSYNC_UPLOAD_DIR", "uploads"));

        // Resumes and logos pass through request bodies, so the cap is well
        // above a typical JSON payload.
        let max_body_size: usize = env_or("SKILLSYNC_MAX_BODY_SIZE", "10485760")
            .parse()
            .map_err(|e| format!("Invalid SKILLSYNC_MAX_BODY_SIZE: {e}"))?;

        let cors_origins: Vec<String> = env_or("SKILLSYNC_CORS_ORIGINS", "")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let log_level = env_or("SKILLSYNC_LOG_LEVEL", "info");

        let smtp = match (
            std::env::var("SKILLSYNC_SMTP_HOST").ok(),
            std::env::var("SKILLSYNC_SMTP_PORT").ok(),
            std::env::var("SKILLSYNC_SMTP_USER").ok(),
            std::env::var("SKILLSYNC_SMTP_PASS").ok(),
            std::env::var("SKILLSYNC_SMTP_FROM").ok(),
        ) {
            (Some(host), Some(port), Some(user), Some(pass), Some(from)) => Some(SmtpConfig {
                host,
                port: port
                    .parse()
                    .map_err(|e| format!("Invalid SKILLSYNC_SMTP_PORT: {e}"))?,
                user,
                pass,
                from,
            }),
            _ => None,
        };

        Ok(Config {
            database_url,
            jwt_secret,
            host,
            port,
            upload_dir,
            max_body_size,
            cors_origins,
            log_level,
            smtp,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
