//! Server configuration module

use clap::Parser;
use platter_app::context::AppConfig;

use crate::config::{
    db::DatabaseConfig, observability::LoggingConfig, segments::SegmentsConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod segments;
pub(crate) mod server;

/// Platter JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "platter-json", about = "Platter JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Offer storage settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// User segment service settings.
    #[command(flatten)]
    pub segments: SegmentsConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Settings for wiring the application services.
    #[must_use]
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            database_url: self.database.database_url.clone(),
            segments: self.segments.service_config(),
            segment_failure_policy: self.segments.segment_failure_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use platter_app::domain::carts::models::SegmentFailurePolicy;
    use testresult::TestResult;

    use super::*;

    fn parse(extra: &[&str]) -> Result<ServerConfig, clap::Error> {
        let mut args = vec![
            "platter-json",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--log-level",
            "debug",
            "--segment-service-url",
            "http://segments.local",
        ];

        args.extend_from_slice(extra);

        ServerConfig::try_parse_from(args)
    }

    #[test]
    fn socket_addr_joins_host_and_port() -> TestResult {
        let config = parse(&[])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:9000");

        Ok(())
    }

    #[test]
    fn segment_settings_flow_into_app_config() -> TestResult {
        let config = parse(&[
            "--segment-service-timeout-ms",
            "250",
            "--segment-failure-policy",
            "no-segment",
            "--database-url",
            "postgres://localhost/platter",
        ])?;

        let app = config.app_config();

        assert_eq!(app.segments.base_url, "http://segments.local");
        assert_eq!(app.segments.timeout, Duration::from_millis(250));
        assert_eq!(
            app.segment_failure_policy,
            SegmentFailurePolicy::TreatAsNoSegment
        );
        assert_eq!(
            app.database_url.as_deref(),
            Some("postgres://localhost/platter")
        );

        Ok(())
    }

    #[test]
    fn unknown_failure_policy_is_rejected() {
        let result = parse(&["--segment-failure-policy", "ignore"]);

        assert!(result.is_err(), "expected an invalid value error");
    }
}
