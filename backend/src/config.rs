//! Startup configuration, from command-line flags or environment variables.

use clap::Parser;
use std::net::SocketAddr;

use crate::domain::timeline::DEFAULT_COMPARISON_FLOOR;

#[derive(Parser, Debug, Clone)]
#[command(name = "pregnancy-tracker-backend", version, about = "Pregnancy tracker REST backend")]
pub struct AppConfig {
    /// SQLite database URL
    #[arg(long, env = "PREGNANCY_DATABASE_URL", default_value = "sqlite:pregnancy.db")]
    pub database_url: String,

    /// Address the HTTP server listens on
    #[arg(long = "bind", env = "PREGNANCY_BIND_ADDR", default_value = "127.0.0.1:3000")]
    pub bind_addr: SocketAddr,

    /// Origin allowed to call the API from a browser
    #[arg(long, env = "PREGNANCY_CORS_ORIGIN", default_value = "http://localhost:8080")]
    pub cors_origin: String,

    /// Weeks at or below this show "too early to compare" unless the table has an exact entry
    #[arg(long, env = "PREGNANCY_COMPARISON_FLOOR", default_value_t = DEFAULT_COMPARISON_FLOOR)]
    pub comparison_floor: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flags() {
        let config = AppConfig::try_parse_from([
            "pregnancy-tracker-backend",
            "--database-url",
            "sqlite:test.db",
            "--bind",
            "0.0.0.0:8000",
            "--cors-origin",
            "https://example.org",
            "--comparison-floor",
            "6",
        ])
        .unwrap();

        assert_eq!(config.database_url, "sqlite:test.db");
        assert_eq!(config.bind_addr, "0.0.0.0:8000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.cors_origin, "https://example.org");
        assert_eq!(config.comparison_floor, 6);
    }

    #[test]
    fn test_invalid_bind_address_is_rejected() {
        let result = AppConfig::try_parse_from(["pregnancy-tracker-backend", "--bind", "localhost"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_clap_definition_is_consistent() {
        use clap::CommandFactory;
        AppConfig::command().debug_assert();
    }
}
