//! Environment-driven server configuration.

use std::env;
use std::net::SocketAddr;

use actix_web::cookie::Key;
use tracing::warn;

/// Configuration for creating the HTTP server.
#[derive(Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// When absent, the server falls back to the in-memory entity store.
    pub database_url: Option<String>,
    pub pool_max_size: u32,
    pub session_key: Key,
    pub cookie_secure: bool,
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// The session signing key is read from `SESSION_KEY_FILE`; outside
    /// release builds, or with `SESSION_ALLOW_EPHEMERAL=1`, a generated key
    /// is accepted so local development needs no secret provisioning.
    pub fn from_env() -> std::io::Result<Self> {
        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".into())
            .parse()
            .map_err(std::io::Error::other)?;

        let database_url = env::var("DATABASE_URL").ok();

        let pool_max_size = env::var("DB_POOL_MAX_SIZE")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(10);

        let key_path =
            env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
        let session_key = match std::fs::read(&key_path) {
            Ok(bytes) => Key::try_from(bytes.as_slice()).map_err(|e| {
                std::io::Error::other(format!("invalid session key at {key_path}: {e}"))
            })?,
            Err(e) => {
                let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
                if cfg!(debug_assertions) || allow_dev {
                    warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                    Key::generate()
                } else {
                    return Err(std::io::Error::other(format!(
                        "failed to read session key at {key_path}: {e}"
                    )));
                }
            }
        };

        let cookie_secure = env::var("SESSION_COOKIE_SECURE")
            .map(|v| v != "0")
            .unwrap_or(true);

        Ok(Self {
            bind_addr,
            database_url,
            pool_max_size,
            session_key,
            cookie_secure,
        })
    }
}
