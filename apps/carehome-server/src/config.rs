//! Layered server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

use anyhow::Result;
use carehome::config::CarehomeConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Legacy deployment variables and the keys they feed.
const LEGACY_ENV: [(&str, &str); 14] = [
    ("DB_DEV_ENGINE", "carehome.database.engine"),
    ("DB_DEV_DSN", "carehome.database.dsn"),
    ("DB_DEV_SERVER", "carehome.database.server"),
    ("DB_DEV_PORT", "carehome.database.port"),
    ("DB_DEV_DATABASE", "carehome.database.database"),
    ("DB_DEV_USERNAME", "carehome.database.username"),
    ("DB_DEV_PASSWORD", "carehome.database.password"),
    ("CAREHOME_BUILD_PHASE", "carehome.database.build_phase"),
    ("SMTP_HOST", "carehome.smtp.host"),
    ("SMTP_PORT", "carehome.smtp.port"),
    ("SMTP_USER", "carehome.smtp.user"),
    ("SMTP_PASSWORD", "carehome.smtp.password"),
    ("SMTP_FROM", "carehome.smtp.from"),
    ("NODE_ENV", "carehome.environment"),
];

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub carehome: CarehomeConfig,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

/// Overrides taken from the command line.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
}

impl AppConfig {
    /// defaults -> YAML (if provided) -> legacy env -> env (`APP__*`) -> CLI
    pub fn load(path: Option<&Path>, cli: &CliOverrides) -> Result<Self> {
        Ok(figment(path, cli).extract()?)
    }
}

fn figment(path: Option<&Path>, cli: &CliOverrides) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
    if let Some(path) = path {
        figment = figment.merge(Yaml::file(path));
    }

    let legacy = Env::raw()
        .filter(|key| legacy_target(key.as_str()).is_some())
        .map(|key| match legacy_target(key.as_str()) {
            Some(target) => target.into(),
            None => key.into(),
        });

    figment = figment
        .merge(legacy)
        .merge(Env::prefixed("APP__").split("__"));

    if let Some(port) = cli.port {
        figment = figment.merge(Serialized::default("server.port", port));
    }
    figment
}

fn legacy_target(name: &str) -> Option<&'static str> {
    LEGACY_ENV
        .iter()
        .find(|(legacy, _)| legacy.eq_ignore_ascii_case(name))
        .map(|(_, target)| *target)
}

#[cfg(test)]
mod tests {
    use carehome::config::{DbEngine, Environment};
    use figment::Jail;

    use super::*;

    #[test]
    fn legacy_variables_fill_the_module_config() {
        Jail::expect_with(|jail| {
            jail.set_env("DB_DEV_SERVER", "db.internal");
            jail.set_env("DB_DEV_DATABASE", "care");
            jail.set_env("DB_DEV_ENGINE", "mysql");
            jail.set_env("SMTP_HOST", "smtp.example.org");
            jail.set_env("NODE_ENV", "production");

            let config: AppConfig = figment(None, &CliOverrides::default()).extract()?;
            assert_eq!(config.carehome.database.server, "db.internal");
            assert_eq!(config.carehome.database.database, "care");
            assert_eq!(config.carehome.database.engine, DbEngine::Mysql);
            assert_eq!(config.carehome.smtp.host.as_deref(), Some("smtp.example.org"));
            assert_eq!(config.carehome.environment, Environment::Production);
            Ok(())
        });
    }

    #[test]
    fn later_layers_win() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "carehome.yaml",
                "server:\n  port: 8080\ncarehome:\n  auth:\n    session_ttl_hours: 8\n",
            )?;
            jail.set_env("APP__CAREHOME__AUTH__SESSION_TTL_HOURS", "12");

            let path = Some(Path::new("carehome.yaml"));
            let from_file: AppConfig = figment(path, &CliOverrides::default()).extract()?;
            assert_eq!(from_file.server.port, 8080);
            assert_eq!(from_file.carehome.auth.session_ttl_hours, 12);

            let from_cli: AppConfig = figment(path, &CliOverrides { port: Some(9090) }).extract()?;
            assert_eq!(from_cli.server.port, 9090);
            Ok(())
        });
    }

    #[test]
    fn defaults_need_no_input() {
        Jail::expect_with(|_| {
            let config: AppConfig = figment(None, &CliOverrides::default()).extract()?;
            assert_eq!(config.server.port, 3000);
            assert_eq!(config.logging.level, "info");
            assert!(!config.carehome.database.build_phase);
            Ok(())
        });
    }
}
