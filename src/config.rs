use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file picked up from the working directory when none is given.
const CWD_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Directory served under /static
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<String>,

    /// Disable timeout middleware
    #[arg(long, env = "TIMEOUT_DISABLED")]
    pub timeout_disabled: Option<bool>,

    /// Write the rendered pages to this directory and exit instead of serving
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub resilience: ResilienceConfig,
    pub assets: AssetsConfig,
    /// Set from `--export`; never read from files or the environment.
    #[serde(skip)]
    pub export_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResilienceConfig {
    pub timeout_disabled: bool,
    pub request_timeout_secs: u64,
}

impl ResilienceConfig {
    /// Effective per-request timeout.
    ///
    /// A disabled timeout becomes one year so the middleware stack keeps a
    /// single type.
    pub fn request_timeout(&self) -> Duration {
        if self.timeout_disabled {
            Duration::from_secs(365 * 24 * 60 * 60)
        } else {
            Duration::from_secs(self.request_timeout_secs)
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    pub static_dir: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Resolve configuration with precedence
    /// CLI flag > CLI env var > `STOREFRONT_*` env > config file > defaults.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("resilience.timeout_disabled", false)?
            .set_default("resilience.request_timeout_secs", 30)?
            .set_default("assets.static_dir", "static")?;

        // An explicit file must exist; the cwd fallback is optional.
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::from(Path::new(path)));
        } else if Path::new(CWD_CONFIG_FILE).exists() {
            builder = builder.add_source(File::from(Path::new(CWD_CONFIG_FILE)).required(false));
        }

        // E.g. STOREFRONT_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("STOREFRONT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // clap has already folded HOST/PORT/... env vars into these fields.
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(dir) = cli.static_dir {
            builder = builder.set_override("assets.static_dir", dir)?;
        }
        if let Some(td) = cli.timeout_disabled {
            builder = builder.set_override("resilience.timeout_disabled", td)?;
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.export_dir = cli.export;
        Ok(cfg)
    }

    /// `host:port` string handed to the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resilience(timeout_disabled: bool) -> ResilienceConfig {
        ResilienceConfig {
            timeout_disabled,
            request_timeout_secs: 12,
        }
    }

    #[test]
    fn request_timeout_uses_configured_seconds() {
        assert_eq!(resilience(false).request_timeout(), Duration::from_secs(12));
    }

    #[test]
    fn disabled_timeout_is_effectively_unbounded() {
        assert!(resilience(true).request_timeout() > Duration::from_secs(60 * 60 * 24 * 300));
    }

    #[test]
    fn unknown_flag_is_a_config_error() {
        let err = AppConfig::load_from_args(["equipment-storefront", "--no-such-flag"]);
        assert!(matches!(err, Err(config::ConfigError::Message(_))));
    }
}
