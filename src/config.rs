use anyhow::Result;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use crate::resolver::DEFAULT_API_BASE;

/// Server configuration, parsed from the command line.
#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Address to bind
    #[arg(short = 'H', long, default_value_t = default_host())]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = default_port())]
    pub port: u16,

    /// Base URL of the Redgifs API
    #[arg(long, default_value_t = default_api_base())]
    pub api_base: String,

    /// Timeout for each outbound API call, in seconds
    #[arg(short, long, default_value_t = default_timeout_secs())]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Parse CLI args and validate them
    pub fn load() -> Result<Self> {
        let config = Config::parse();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            return Err(anyhow::anyhow!(
                "API base must start with http:// or https://"
            ));
        }
        if self.timeout_secs == 0 {
            return Err(anyhow::anyhow!("Timeout must be at least one second"));
        }
        Ok(())
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    3000
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_all_interfaces() {
        let config = Config::default();
        assert_eq!(config.addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.api_base, "https://api.redgifs.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn cli_overrides_defaults() {
        let config = Config::try_parse_from([
            "redgifs-resolver",
            "--host",
            "127.0.0.1",
            "-p",
            "8080",
            "--api-base",
            "http://localhost:9000",
            "-t",
            "3",
        ])
        .unwrap();
        assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.api_base, "http://localhost:9000");
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn rejects_bad_api_base_and_zero_timeout() {
        let config = Config {
            api_base: "ftp://api.redgifs.com".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
