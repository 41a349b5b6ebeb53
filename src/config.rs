use anyhow::Context;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub session_ttl: chrono::Duration,
    pub cookie_secure: bool,
    pub admin: AdminSeed,
    pub email: EmailConfig,
}

/// Credentials for the admin account created on first start.
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub username: String,
    pub password: Option<String>,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SendGrid API key; without it every send is a logged no-op.
    pub api_key: Option<String>,
    pub api_base: String,
    /// Verified sender address
    pub sender: String,
    /// Where contact and case study notifications go
    pub recipient: String,
    /// Log messages instead of sending them
    pub dry_run: bool,
    /// Upper bound on a single API call, connect included
    pub timeout: Duration,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: "https://api.sendgrid.com".to_string(),
            sender: String::new(),
            recipient: String::new(),
            dry_run: false,
            timeout: Duration::from_secs(DEFAULT_EMAIL_TIMEOUT_SECS),
        }
    }
}

const DEFAULT_EMAIL_TIMEOUT_SECS: u64 = 10;

/// Parse `SESSION_TTL_HOURS`. The value must be positive and small enough to
/// add to the current time.
pub fn parse_session_ttl(raw: &str) -> anyhow::Result<chrono::Duration> {
    let hours = raw
        .trim()
        .parse::<i64>()
        .context("SESSION_TTL_HOURS must be an integer")?;

    if hours <= 0 {
        anyhow::bail!("SESSION_TTL_HOURS must be positive, got {}", hours);
    }

    let ttl = chrono::Duration::try_hours(hours)
        .with_context(|| format!("SESSION_TTL_HOURS is out of range: {}", hours))?;
    chrono::Utc::now()
        .checked_add_signed(ttl)
        .with_context(|| format!("SESSION_TTL_HOURS is out of range: {}", hours))?;

    Ok(ttl)
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = env_or("HOST", "0.0.0.0");
        let port = env_or("PORT", "5000")
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let bind_address = format!("{}:{}", host, port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", host, port))?;

        let database_url = env_or("DATABASE_URL", "sqlite:portfolio.db");

        let session_ttl = parse_session_ttl(&env_or("SESSION_TTL_HOURS", "168"))?;

        let cookie_secure = env_or("COOKIE_SECURE", "false") == "true";

        let admin = AdminSeed {
            username: env_or("ADMIN_USERNAME", "admin"),
            password: env_opt("ADMIN_PASSWORD"),
            email: env_or("ADMIN_EMAIL", ""),
        };

        let notify = env_or("NOTIFY_EMAIL", &admin.email);
        let email = EmailConfig {
            api_key: env_opt("SENDGRID_API_KEY"),
            api_base: env_or("SENDGRID_API_BASE", "https://api.sendgrid.com"),
            sender: env_or("SENDER_EMAIL", &notify),
            recipient: notify,
            dry_run: env_or("APP_ENV", "production") == "development",
            timeout: Duration::from_secs(
                env_or("EMAIL_TIMEOUT_SECS", &DEFAULT_EMAIL_TIMEOUT_SECS.to_string())
                    .parse::<u64>()
                    .context("EMAIL_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
        };

        Ok(Self {
            database_url,
            bind_address,
            session_ttl,
            cookie_secure,
            admin,
            email,
        })
    }
}
