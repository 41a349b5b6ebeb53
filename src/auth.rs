use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::HttpRequest;
use argon2::password_hash::{rand_core::OsRng, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use base64::Engine;
use chrono::{Duration, Utc};
use rand::Rng;
use sqlx::{types::Json, SqlitePool};

use crate::models::{ServiceError, SessionData, User};

pub const SESSION_COOKIE: &str = "sid";

pub fn hash_password(password: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ServiceError::InternalError(format!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Server-side sessions kept in the `session` table of the main database.
#[derive(Clone)]
pub struct SessionStore {
    pool: SqlitePool,
    ttl: Duration,
    secure_cookies: bool,
}

impl SessionStore {
    pub fn new(pool: SqlitePool, ttl: Duration) -> Self {
        Self {
            pool,
            ttl,
            secure_cookies: false,
        }
    }

    /// Mark issued cookies `Secure` (HTTPS deployments).
    pub fn with_secure_cookies(mut self, secure: bool) -> Self {
        self.secure_cookies = secure;
        self
    }

    pub fn session_cookie(&self, sid: String) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE, sid)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure_cookies)
            .max_age(CookieDuration::seconds(self.ttl.num_seconds()))
            .finish()
    }

    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
        cookie.make_removal();
        cookie
    }

    /// Start a session for `user` and return its id.
    pub async fn create(&self, user: &User) -> Result<String, ServiceError> {
        let bytes: [u8; 32] = rand::thread_rng().gen();
        let sid = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes);

        sqlx::query("INSERT INTO session (sid, sess, expire) VALUES (?, ?, ?)")
            .bind(&sid)
            .bind(Json(SessionData::from(user)))
            .bind(Utc::now() + self.ttl)
            .execute(&self.pool)
            .await?;

        Ok(sid)
    }

    /// Load a live session. Expired rows are treated as absent.
    pub async fn load(&self, sid: &str) -> Result<Option<SessionData>, ServiceError> {
        let row = sqlx::query_scalar::<_, Json<SessionData>>(
            "SELECT sess FROM session WHERE sid = ? AND expire > ?",
        )
        .bind(sid)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|Json(data)| data))
    }

    pub async fn destroy(&self, sid: &str) -> Result<(), ServiceError> {
        sqlx::query("DELETE FROM session WHERE sid = ?")
            .bind(sid)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn prune_expired(&self) -> Result<u64, ServiceError> {
        let result = sqlx::query("DELETE FROM session WHERE expire <= ?")
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

/// Session id from the `sid` cookie, or from a bearer header for clients
/// that do not keep cookies.
pub fn extract_session_id(req: &HttpRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        return Some(cookie.value().to_string());
    }

    let token = req
        .headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?
        .trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
