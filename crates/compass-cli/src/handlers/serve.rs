//! Serve command handler.

use anyhow::Result;
use compass_axum::{ServerConfig, start_server};

/// Build the server configuration from command-line values.
///
/// An empty `cors_origins` keeps the allow-any-origin default.
pub fn config(
    host: String,
    port: u16,
    max_sessions: usize,
    cors_origins: Vec<String>,
) -> ServerConfig {
    let config = ServerConfig::with_defaults()
        .with_host(host)
        .with_port(port)
        .with_max_sessions(max_sessions);
    if cors_origins.is_empty() {
        config
    } else {
        config.with_allowed_origins(cors_origins)
    }
}

/// Run the web server until interrupted.
pub async fn execute(
    host: String,
    port: u16,
    max_sessions: usize,
    cors_origins: Vec<String>,
) -> Result<()> {
    let config = config(host, port, max_sessions, cors_origins);
    println!("🍳 Culinary Compass on http://{}", config.bind_address());
    start_server(config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use compass_axum::CorsConfig;

    #[test]
    fn test_config_from_args() {
        let config = config("0.0.0.0".into(), 9000, 8, Vec::new());
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.max_sessions, 8);
        assert!(matches!(config.cors, CorsConfig::AllowAll));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cors_origins_restrict_api() {
        let config = config(
            "127.0.0.1".into(),
            8501,
            8,
            vec!["http://localhost:3000".into()],
        );
        match config.cors {
            CorsConfig::AllowOrigins(origins) => assert_eq!(origins, ["http://localhost:3000"]),
            CorsConfig::AllowAll => panic!("expected an origin allow-list"),
        }
    }

    #[test]
    fn test_zero_sessions_rejected() {
        assert!(config("127.0.0.1".into(), 8501, 0, Vec::new()).validate().is_err());
    }
}
