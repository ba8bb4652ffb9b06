//! Axum server bootstrap - the composition root for the web adapter.

use anyhow::Result;
use thiserror::Error;

use crate::session::SessionRegistry;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8501;

/// Default bind address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default cap on live session stores.
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

/// CORS configuration for the JSON API.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Host cannot be empty")]
    EmptyHost,

    #[error("Max sessions must be at least 1, got {0}")]
    InvalidMaxSessions(usize),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Maximum number of live session stores.
    pub max_sessions: usize,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ServerConfig {
    pub fn with_defaults() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_sessions: DEFAULT_MAX_SESSIONS,
            cors: CorsConfig::default(),
        }
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub const fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions;
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.max_sessions == 0 {
            return Err(ConfigError::InvalidMaxSessions(self.max_sessions));
        }
        Ok(())
    }

    /// `host:port` string to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// Per-session recipe stores.
    pub sessions: SessionRegistry,
}

/// Build the application context from a validated configuration.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    config.validate()?;
    tracing::info!(
        target: "compass.bootstrap",
        max_sessions = config.max_sessions,
        cors = ?config.cors,
        "Axum bootstrap complete"
    );
    Ok(AxumContext {
        sessions: SessionRegistry::new(config.max_sessions),
    })
}

/// Start the web server and run until Ctrl+C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config)?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Culinary Compass listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Culinary Compass stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ServerConfig::with_defaults();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_address(), "127.0.0.1:8501");
    }

    #[test]
    fn test_zero_sessions_rejected() {
        let config = ServerConfig::with_defaults().with_max_sessions(0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidMaxSessions(0)));
        assert!(bootstrap(&config).is_err());
    }

    #[test]
    fn test_empty_host_rejected() {
        let config = ServerConfig::with_defaults().with_host("  ");
        assert_eq!(config.validate(), Err(ConfigError::EmptyHost));
    }
}
